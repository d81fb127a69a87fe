//! Particle field simulation
//!
//! All physics lives here. This module must stay free of platform code:
//! - Caller-supplied delta time only
//! - Seeded RNG only
//! - Stable iteration order (store order)
//! - No rendering or browser dependencies

pub mod bounds;
pub mod collision;
pub mod particle;
pub mod ripple;
pub mod state;
pub mod tick;

pub use bounds::Bounds;
pub use collision::{CollisionResult, bounce_off_walls, particle_collision, resolve_collisions};
pub use particle::{Particle, ParticleStore};
pub use ripple::{Ripple, RippleStore};
pub use state::{Intent, SimulationState};
pub use tick::{TickInput, step, tick};
