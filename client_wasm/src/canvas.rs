//! 2D canvas implementation of the render surface

use game_core::{Color, Rect, RenderSurface};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement};

const FONT_FAMILY: &str = "'JetBrains Mono', monospace";

/// Text rasterized into its own offscreen canvas
pub struct TextSurface {
    canvas: HtmlCanvasElement,
}

/// Drawable image plus its pixel size
pub struct Texture {
    image: HtmlCanvasElement,
    width: u32,
    height: u32,
}

pub struct CanvasSurface {
    document: Document,
    ctx: CanvasRenderingContext2d,
    width: f64,
    height: f64,
    draw_color: Color,
}

impl CanvasSurface {
    pub fn new(document: Document, canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = context_2d(canvas)?;
        Ok(Self {
            document,
            ctx,
            width: canvas.width() as f64,
            height: canvas.height() as f64,
            draw_color: Color::BLACK,
        })
    }
}

fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, JsValue> {
    canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("2D canvas context unavailable"))?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| JsValue::from_str("Context is not a CanvasRenderingContext2d"))
}

fn css(color: Color) -> String {
    format!(
        "rgba({}, {}, {}, {})",
        color.r,
        color.g,
        color.b,
        color.a as f64 / 255.0
    )
}

impl RenderSurface for CanvasSurface {
    type TextSurface = TextSurface;
    type Texture = Texture;
    type Error = JsValue;

    fn set_draw_color(&mut self, color: Color) {
        self.draw_color = color;
        self.ctx.set_fill_style_str(&css(color));
    }

    fn clear(&mut self) {
        self.ctx.set_fill_style_str(&css(self.draw_color));
        self.ctx.fill_rect(0.0, 0.0, self.width, self.height);
    }

    fn fill_rect(&mut self, rect: Rect) -> Result<(), JsValue> {
        self.ctx
            .fill_rect(rect.x as f64, rect.y as f64, rect.w as f64, rect.h as f64);
        Ok(())
    }

    fn present(&mut self) -> Result<(), JsValue> {
        // The browser composites the canvas after the frame callback returns
        Ok(())
    }

    fn render_text(&mut self, text: &str, size: u16, color: Color) -> Result<TextSurface, JsValue> {
        let canvas = self
            .document
            .create_element("canvas")?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| JsValue::from_str("Failed to create text canvas"))?;
        let ctx = context_2d(&canvas)?;
        let font = format!("{size}px {FONT_FAMILY}");

        ctx.set_font(&font);
        let metrics = ctx.measure_text(text)?;
        let ascent = metrics.actual_bounding_box_ascent();
        let width = metrics.width().ceil().max(1.0);
        let height = (ascent + metrics.actual_bounding_box_descent()).ceil().max(1.0);

        // Resizing resets the context state, so the font is set again afterwards
        canvas.set_width(width as u32);
        canvas.set_height(height as u32);
        ctx.set_font(&font);
        ctx.set_fill_style_str(&css(color));
        ctx.fill_text(text, 0.0, ascent)?;

        Ok(TextSurface { canvas })
    }

    fn create_texture(&mut self, surface: TextSurface) -> Result<Texture, JsValue> {
        let image = surface.canvas;
        Ok(Texture {
            width: image.width(),
            height: image.height(),
            image,
        })
    }

    fn query_texture(&self, texture: &Texture) -> (u32, u32) {
        (texture.width, texture.height)
    }

    fn copy(&mut self, texture: &Texture, dst: Rect) -> Result<(), JsValue> {
        self.ctx.draw_image_with_html_canvas_element_and_dw_and_dh(
            &texture.image,
            dst.x as f64,
            dst.y as f64,
            dst.w as f64,
            dst.h as f64,
        )
    }
}
