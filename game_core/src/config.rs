use glam::Vec2;

use crate::{Color, Params, Scancode, Side};

/// Keys bound to one paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyBindings {
    pub up: Scancode,
    pub down: Scancode,
}

/// Game configuration, fixed for the lifetime of a match
#[derive(Debug, Clone)]
pub struct Config {
    pub field_width: f32,
    pub field_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_speed: f32,
    pub paddle_inset: f32,
    pub paddle_start_y: f32,
    pub ball_size: f32,
    pub ball_speed: f32,
    pub left_keys: KeyBindings,
    pub right_keys: KeyBindings,
    pub foreground: Color,
    pub background: Color,
    pub score_text_pos: Vec2,
    pub font_size: u16,
    pub fixed_dt: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            field_width: Params::FIELD_WIDTH,
            field_height: Params::FIELD_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_speed: Params::PADDLE_SPEED,
            paddle_inset: Params::PADDLE_INSET,
            paddle_start_y: Params::PADDLE_START_Y,
            ball_size: Params::BALL_SIZE,
            ball_speed: Params::BALL_SPEED,
            left_keys: KeyBindings {
                up: Scancode::W,
                down: Scancode::S,
            },
            right_keys: KeyBindings {
                up: Scancode::UP,
                down: Scancode::DOWN,
            },
            foreground: Color::WHITE,
            background: Color::BLACK,
            score_text_pos: Vec2::new(Params::SCORE_TEXT_X, Params::SCORE_TEXT_Y),
            font_size: Params::FONT_SIZE,
            fixed_dt: Params::FIXED_DT,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get X position (left edge) for a paddle
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Left => self.paddle_inset,
            Side::Right => self.field_width - self.paddle_inset - self.paddle_width,
        }
    }

    /// Top-left corner a paddle starts the match at
    pub fn paddle_spawn(&self, side: Side) -> Vec2 {
        Vec2::new(self.paddle_x(side), self.paddle_start_y)
    }

    pub fn keys(&self, side: Side) -> KeyBindings {
        match side {
            Side::Left => self.left_keys,
            Side::Right => self.right_keys,
        }
    }

    /// Where every new ball is placed
    pub fn ball_spawn(&self) -> Vec2 {
        Vec2::new(self.field_width / 2.0, self.field_height / 2.0)
    }

    /// Clamp paddle Y (top edge) to field bounds
    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        y.clamp(0.0, self.field_height - self.paddle_height)
    }
}
