use particles_core::Renderer;
use wasm_bindgen::prelude::*;
use web_sys::CanvasRenderingContext2d;

/// Draws onto a 2D canvas context. Canvas pixels map 1:1 to world pixels.
pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
    width: f64,
    height: f64,
}

impl CanvasRenderer {
    pub fn new(ctx: CanvasRenderingContext2d, width: f64, height: f64) -> Self {
        Self { ctx, width, height }
    }
}

impl Renderer for CanvasRenderer {
    fn clear(&mut self, background: &str) {
        self.ctx.set_fill_style(&JsValue::from_str(background));
        self.ctx.fill_rect(0.0, 0.0, self.width, self.height);
    }

    fn draw_square(&mut self, color: &str, x: i32, y: i32, size: u32) {
        self.ctx.set_fill_style(&JsValue::from_str(color));
        self.ctx
            .fill_rect(x as f64, y as f64, size as f64, size as f64);
    }
}
