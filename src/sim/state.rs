//! Simulation state and the intents that mutate it between steps

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::bounds::Bounds;
use super::particle::ParticleStore;
use super::ripple::RippleStore;
use crate::renderer::FrameView;

/// An external request queued between frames
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Intent {
    /// Pointer went down at viewport coordinates
    SpawnRipple { x: f32, y: f32 },
    /// Viewport changed size: respawn the whole field
    Reinitialize { width: f32, height: f32 },
}

/// Everything one animation session owns
#[derive(Debug, Clone)]
pub struct SimulationState {
    /// Seed for reproducibility
    pub seed: u64,
    pub bounds: Bounds,
    pub particles: ParticleStore,
    pub ripples: RippleStore,
    /// Particles spawned on every (re)initialization
    pub particle_count: usize,
    /// Steps taken since the last reinitialization
    pub time_ticks: u64,
    pub rng: Pcg32,
}

impl SimulationState {
    /// Create a state and spawn its particles
    pub fn new(seed: u64, bounds: Bounds, particle_count: usize, ripples_enabled: bool) -> Self {
        let mut state = Self {
            seed,
            bounds,
            particles: ParticleStore::new(),
            ripples: RippleStore::new(ripples_enabled),
            particle_count,
            time_ticks: 0,
            rng: Pcg32::seed_from_u64(seed),
        };
        state.reinitialize(bounds);
        state
    }

    /// Replace the viewport and respawn all particles (ripples survive)
    pub fn reinitialize(&mut self, bounds: Bounds) {
        self.bounds = bounds;
        self.time_ticks = 0;
        self.particles
            .initialize(self.particle_count, bounds, &mut self.rng);
    }

    /// Apply a single queued intent
    pub fn apply(&mut self, intent: Intent) {
        match intent {
            Intent::SpawnRipple { x, y } => self.ripples.spawn(x, y),
            Intent::Reinitialize { width, height } => {
                log::debug!("Reinitializing for {width}x{height}");
                self.reinitialize(Bounds::new(width, height));
            }
        }
    }

    /// Apply queued intents in arrival order
    pub fn apply_all(&mut self, intents: &[Intent]) {
        for &intent in intents {
            self.apply(intent);
        }
    }

    /// Read-only view for the renderer
    pub fn view(&self) -> FrameView<'_> {
        FrameView {
            particles: self.particles.as_slice(),
            ripples: self.ripples.as_slice(),
            bounds: self.bounds,
        }
    }
}
