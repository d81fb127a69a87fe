//! Per-frame simulation step
//!
//! Phases run in a fixed order; later phases read the positions and
//! velocities written by earlier ones.

use super::collision::{bounce_off_walls, resolve_collisions};
use super::state::{Intent, SimulationState};
use crate::consts::*;
use crate::random_direction;

/// Intents gathered since the previous frame
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    pub intents: Vec<Intent>,
}

impl TickInput {
    pub fn push(&mut self, intent: Intent) {
        self.intents.push(intent);
    }

    pub fn is_empty(&self) -> bool {
        self.intents.is_empty()
    }
}

/// Apply queued intents, then advance the simulation by `dt` seconds
pub fn tick(state: &mut SimulationState, input: &TickInput, dt: f32) {
    state.apply_all(&input.intents);
    step(state, dt);
}

/// Advance the simulation by `dt` seconds
pub fn step(state: &mut SimulationState, dt: f32) {
    state.time_ticks += 1;
    let bounds = state.bounds;

    // Integrate
    for particle in state.particles.iter_mut() {
        particle.pos += particle.vel * dt;
    }

    // Walls
    for particle in state.particles.iter_mut() {
        bounce_off_walls(particle, &bounds);
    }

    // Disc-disc contacts
    resolve_collisions(state.particles.as_mut_slice(), &bounds);

    // Ripples push, age, and expire
    state.ripples.tick(dt, state.particles.as_mut_slice());

    // Drag, then keep speeds inside [MIN_SPEED, MAX_SPEED]
    for particle in state.particles.iter_mut() {
        particle.vel *= DRAG;

        let speed = particle.speed();
        if speed < MIN_SPEED {
            // Random nudge, then back up to the floor along the new heading
            let dir = random_direction(&mut state.rng);
            let nudged = particle.vel + dir * (MIN_SPEED - speed) * STALL_BOOST;
            particle.vel = nudged.try_normalize().unwrap_or(dir) * MIN_SPEED;
        } else if speed > MAX_SPEED {
            particle.vel *= MAX_SPEED / speed;
        }
    }
}
