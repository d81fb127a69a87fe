//! 2D canvas renderer (wasm32 only)
//!
//! Packs the frame through [`InstanceBatch`] and replays the instances as
//! canvas paths: glowing discs for particles, fading strokes for ripples.

use std::f64::consts::TAU;

use web_sys::CanvasRenderingContext2d;

use super::color::css_rgba;
use super::{FrameView, InstanceBatch, Renderer};

pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
    batch: InstanceBatch,
    /// Device pixels per CSS pixel
    scale: f64,
}

impl CanvasRenderer {
    pub fn new(ctx: CanvasRenderingContext2d, scale: f64) -> Self {
        Self {
            ctx,
            batch: InstanceBatch::new(),
            scale,
        }
    }

    /// Update the device pixel ratio after a resize
    pub fn set_scale(&mut self, scale: f64) {
        self.scale = scale;
    }

    fn draw(&self) -> Result<(), wasm_bindgen::JsValue> {
        let ctx = &self.ctx;
        let (width, height) = self.batch.size;

        ctx.set_transform(self.scale, 0.0, 0.0, self.scale, 0.0, 0.0)?;
        ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
        ctx.set_global_composite_operation("lighter")?;

        for p in &self.batch.particles {
            let color = css_rgba(p.color);
            ctx.set_shadow_blur(p.glow_radius as f64);
            ctx.set_shadow_color(&color);
            ctx.set_fill_style_str(&color);
            ctx.begin_path();
            ctx.arc(p.center[0] as f64, p.center[1] as f64, p.radius as f64, 0.0, TAU)?;
            ctx.fill();
        }

        ctx.set_shadow_blur(0.0);
        for r in &self.batch.ripples {
            ctx.set_line_width(r.stroke_width as f64);
            ctx.set_stroke_style_str(&css_rgba(r.color));
            ctx.begin_path();
            ctx.arc(r.center[0] as f64, r.center[1] as f64, r.radius as f64, 0.0, TAU)?;
            ctx.stroke();
        }

        ctx.set_global_composite_operation("source-over")?;
        Ok(())
    }
}

impl Renderer for CanvasRenderer {
    fn render(&mut self, frame: &FrameView<'_>) {
        self.batch.render(frame);
        if let Err(e) = self.draw() {
            log::warn!("Canvas draw failed: {:?}", e);
        }
    }
}
