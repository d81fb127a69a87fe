//! Expanding pointer ripples and the radial push they exert

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::particle::Particle;
use crate::consts::*;

/// An expanding circular wavefront
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ripple {
    pub origin: Vec2,
    /// Current wavefront radius
    pub radius: f32,
    /// Radial growth in px/s
    pub speed: f32,
    /// Stroke width for drawing
    pub width: f32,
    pub life: f32,
    pub life_max: f32,
    pub strength: f32,
    /// Distance from the wavefront over which particles feel the push
    pub band: f32,
}

impl Ripple {
    pub fn new(origin: Vec2) -> Self {
        Self {
            origin,
            radius: 0.0,
            speed: RIPPLE_SPEED,
            width: RIPPLE_WIDTH,
            life: 0.0,
            life_max: RIPPLE_LIFE,
            strength: RIPPLE_STRENGTH,
            band: RIPPLE_BAND,
        }
    }

    /// Fraction of life remaining (1 when fresh, 0 when expired)
    #[inline]
    pub fn remaining(&self) -> f32 {
        (1.0 - self.life / self.life_max).max(0.0)
    }

    #[inline]
    pub fn is_expired(&self) -> bool {
        self.life >= self.life_max
    }

    /// Grow the wavefront and age the ripple
    pub fn advance(&mut self, dt: f32) {
        self.radius += self.speed * dt;
        self.life = (self.life + dt).min(self.life_max);
    }

    /// Push strength felt at `distance` from the origin
    ///
    /// Falls off quadratically with distance from the wavefront and linearly
    /// with age; zero outside the band.
    pub fn influence(&self, distance: f32) -> f32 {
        let band_distance = (distance - self.radius).abs();
        if band_distance > self.band {
            return 0.0;
        }
        let falloff = 1.0 - band_distance / self.band;
        falloff * falloff * self.strength * self.remaining()
    }

    /// Add this ripple's outward kick to a particle's velocity
    pub fn push(&self, particle: &mut Particle) {
        let offset = particle.pos - self.origin;
        let dist = offset.length();
        let strength = self.influence(dist);
        if strength <= 0.0 {
            return;
        }
        let direction = if dist > DISTANCE_EPSILON {
            offset / dist
        } else {
            Vec2::X
        };
        particle.vel += direction * strength * RIPPLE_COUPLING;
    }
}

/// Owns the live ripples
#[derive(Debug, Clone)]
pub struct RippleStore {
    ripples: Vec<Ripple>,
    enabled: bool,
}

impl Default for RippleStore {
    fn default() -> Self {
        Self::new(true)
    }
}

impl RippleStore {
    /// A disabled store ignores every spawn (reduced motion)
    pub fn new(enabled: bool) -> Self {
        Self {
            ripples: Vec::new(),
            enabled,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Start a ripple at viewport coordinates
    pub fn spawn(&mut self, x: f32, y: f32) {
        if !self.enabled {
            return;
        }
        self.ripples.push(Ripple::new(Vec2::new(x, y)));
        log::debug!("Ripple at ({x:.0}, {y:.0}), {} live", self.ripples.len());
    }

    /// Advance every ripple, push the particles, then drop expired ripples
    pub fn tick(&mut self, dt: f32, particles: &mut [Particle]) {
        for ripple in &mut self.ripples {
            ripple.advance(dt);
            for particle in particles.iter_mut() {
                ripple.push(particle);
            }
        }
        self.ripples.retain(|r| !r.is_expired());
    }

    pub fn len(&self) -> usize {
        self.ripples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ripples.is_empty()
    }

    pub fn as_slice(&self) -> &[Ripple] {
        &self.ripples
    }
}
