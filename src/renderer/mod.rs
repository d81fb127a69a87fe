//! Rendering boundary
//!
//! The simulation hands a read-only [`FrameView`] to a [`Renderer`] once per
//! frame. `instance` packs the view into GPU-ready instance arrays; on wasm32
//! `canvas` paints those onto a 2D canvas.

pub mod color;
pub mod instance;

#[cfg(target_arch = "wasm32")]
pub mod canvas;

pub use instance::{InstanceBatch, ParticleInstance, RippleInstance};

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasRenderer;

use crate::sim::{Bounds, Particle, Ripple};

/// Snapshot of one frame, borrowed from the simulation state
#[derive(Debug, Clone, Copy)]
pub struct FrameView<'a> {
    /// Particles in store order
    pub particles: &'a [Particle],
    /// Ripples in spawn order
    pub ripples: &'a [Ripple],
    pub bounds: Bounds,
}

/// Something that paints a frame
pub trait Renderer {
    fn render(&mut self, frame: &FrameView<'_>);
}
