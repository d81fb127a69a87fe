//! Instance data for drawing particles and ripples

use bytemuck::{Pod, Zeroable};

use super::color::hsla_to_rgba;
use super::{FrameView, Renderer};
use crate::sim::{Particle, Ripple};

/// Particle saturation/lightness (hue varies per particle)
const PARTICLE_SATURATION: f32 = 0.85;
const PARTICLE_LIGHTNESS: f32 = 0.68;
/// Ripple stroke color
const RIPPLE_HUE: f32 = 200.0;
const RIPPLE_SATURATION: f32 = 0.9;
const RIPPLE_LIGHTNESS: f32 = 0.75;
/// Peak ripple stroke opacity
const RIPPLE_ALPHA: f32 = 0.55;

/// One particle disc
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct ParticleInstance {
    pub center: [f32; 2],
    pub radius: f32,
    pub glow_radius: f32,
    pub color: [f32; 4],
}

impl ParticleInstance {
    pub fn from_particle(p: &Particle) -> Self {
        Self {
            center: p.pos.to_array(),
            radius: p.radius(),
            glow_radius: p.glow_radius,
            color: hsla_to_rgba(p.hue, PARTICLE_SATURATION, PARTICLE_LIGHTNESS, p.alpha),
        }
    }
}

/// One ripple ring
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct RippleInstance {
    pub center: [f32; 2],
    pub radius: f32,
    pub stroke_width: f32,
    pub color: [f32; 4],
}

impl RippleInstance {
    /// Stroke fades out over the ripple's life
    pub fn from_ripple(r: &Ripple) -> Self {
        let alpha = RIPPLE_ALPHA * r.remaining();
        Self {
            center: r.origin.to_array(),
            radius: r.radius,
            stroke_width: r.width,
            color: hsla_to_rgba(RIPPLE_HUE, RIPPLE_SATURATION, RIPPLE_LIGHTNESS, alpha),
        }
    }
}

/// Renderer that packs each frame into instance arrays
///
/// Buffers are reused across frames; only their contents change.
#[derive(Debug, Default)]
pub struct InstanceBatch {
    pub particles: Vec<ParticleInstance>,
    pub ripples: Vec<RippleInstance>,
    /// Viewport size of the packed frame
    pub size: (f32, f32),
    /// Frames packed so far
    pub frames: u64,
}

impl InstanceBatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw bytes of the particle instances, ready for a vertex buffer upload
    pub fn particle_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.particles)
    }

    /// Raw bytes of the ripple instances
    pub fn ripple_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.ripples)
    }
}

impl Renderer for InstanceBatch {
    fn render(&mut self, frame: &FrameView<'_>) {
        self.particles.clear();
        self.particles
            .extend(frame.particles.iter().map(ParticleInstance::from_particle));

        self.ripples.clear();
        self.ripples
            .extend(frame.ripples.iter().map(RippleInstance::from_ripple));

        self.size = (frame.bounds.width, frame.bounds.height);
        self.frames += 1;
    }
}
