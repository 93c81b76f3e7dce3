//! Render pass over an abstract drawing surface
//!
//! The core never owns a window or font. A front end implements
//! [`RenderSurface`] and the draw functions here issue calls against it.

use glam::Vec2;
use hecs::World;

use crate::{ball, paddle, score, Ball, Config, Paddle, Side};

/// RGBA color, 8 bits per channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgba(255, 255, 255, 255);
    pub const BLACK: Color = Color::rgba(0, 0, 0, 255);

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

/// Destination rectangle in field coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    fn of(pos: Vec2, size: Vec2) -> Self {
        Self::new(pos.x, pos.y, size.x, size.y)
    }
}

/// Drawing backend: a canvas with a current draw color plus text-to-texture support
pub trait RenderSurface {
    /// Rendered text, not yet uploaded for drawing
    type TextSurface;
    type Texture;
    type Error;

    fn set_draw_color(&mut self, color: Color);
    /// Fill the whole surface with the current draw color
    fn clear(&mut self);
    fn fill_rect(&mut self, rect: Rect) -> Result<(), Self::Error>;
    fn present(&mut self) -> Result<(), Self::Error>;

    fn render_text(
        &mut self,
        text: &str,
        size: u16,
        color: Color,
    ) -> Result<Self::TextSurface, Self::Error>;
    fn create_texture(&mut self, surface: Self::TextSurface)
        -> Result<Self::Texture, Self::Error>;
    /// Pixel width and height of a texture
    fn query_texture(&self, texture: &Self::Texture) -> (u32, u32);
    fn copy(&mut self, texture: &Self::Texture, dst: Rect) -> Result<(), Self::Error>;
}

impl Paddle {
    pub fn draw<S: RenderSurface>(&self, surface: &mut S, config: &Config) -> Result<(), S::Error> {
        fill_opaque(surface, config, Rect::of(self.pos, self.size))
    }
}

impl Ball {
    pub fn draw<S: RenderSurface>(&self, surface: &mut S, config: &Config) -> Result<(), S::Error> {
        fill_opaque(surface, config, Rect::of(self.pos, self.size))
    }
}

/// Fill in the foreground color, then restore the background color for the next clear
fn fill_opaque<S: RenderSurface>(
    surface: &mut S,
    config: &Config,
    rect: Rect,
) -> Result<(), S::Error> {
    surface.set_draw_color(config.foreground);
    surface.fill_rect(rect)?;
    surface.set_draw_color(config.background);
    Ok(())
}

/// Draw one complete frame: field, scoreboard, present
pub fn draw_frame<S: RenderSurface>(
    world: &World,
    config: &Config,
    surface: &mut S,
) -> Result<(), S::Error> {
    surface.clear();

    for side in [Side::Left, Side::Right] {
        if let Some(paddle) = paddle(world, side) {
            paddle.draw(surface, config)?;
        }
    }
    if let Some(ball) = ball(world) {
        ball.draw(surface, config)?;
    }

    let text = surface.render_text(&score(world).label(), config.font_size, config.foreground)?;
    let texture = surface.create_texture(text)?;
    let (w, h) = surface.query_texture(&texture);
    let dst = Rect::new(
        config.score_text_pos.x,
        config.score_text_pos.y,
        w as f32,
        h as f32,
    );
    surface.copy(&texture, dst)?;

    surface.present()
}
