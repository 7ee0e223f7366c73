//! Transparent 2D canvas that the cursor-trail particles are drawn onto.

use crate::style::rgba_css;
use artifact_core::ParticleSurface;
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct CanvasParticleSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasParticleSurface {
    pub fn new(canvas: web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
        Ok(Self { canvas, ctx })
    }
}

impl ParticleSurface for CanvasParticleSurface {
    fn clear(&mut self) {
        self.ctx.clear_rect(
            0.0,
            0.0,
            self.canvas.width() as f64,
            self.canvas.height() as f64,
        );
    }

    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, rgb: [u8; 3], alpha: f32) {
        self.ctx.set_fill_style_str(&rgba_css(rgb, alpha));
        self.ctx.begin_path();
        if self
            .ctx
            .arc(x as f64, y as f64, radius as f64, 0.0, TAU)
            .is_ok()
        {
            self.ctx.fill();
        }
    }
}
