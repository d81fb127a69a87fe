//! Ripple Drift - A colliding-particle background that reacts to pointer ripples
//!
//! Core modules:
//! - `sim`: Seeded simulation (particles, ripples, collisions, stepping)
//! - `driver`: Frame clock and input intents
//! - `renderer`: Renderer boundary and instance packing
//! - `settings`: Session configuration

pub mod driver;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use driver::FrameDriver;
pub use renderer::{FrameView, Renderer};
pub use settings::Settings;

use glam::Vec2;
use rand::Rng;

/// Simulation configuration constants
pub mod consts {
    /// Nominal frame delta used before the clock has a previous sample
    pub const NOMINAL_DT: f32 = 1.0 / 60.0;
    /// Largest delta a single frame may advance (avoids jumps after tab suspend)
    pub const MAX_FRAME_DT: f32 = 0.033;

    /// Particle spawning
    pub const GLOW_CHANCE: f64 = 0.42;
    pub const GLOW_RADIUS: (f32, f32) = (2.0, 3.8);
    pub const PLAIN_RADIUS: (f32, f32) = (1.2, 2.6);
    pub const GLOW_SPEED: (f32, f32) = (18.0, 42.0);
    pub const PLAIN_SPEED: (f32, f32) = (16.0, 36.0);
    pub const HUE: (f32, f32) = (165.0, 290.0);
    pub const GLOW_ALPHA: (f32, f32) = (0.55, 0.95);
    pub const PLAIN_ALPHA: (f32, f32) = (0.25, 0.6);
    pub const GLOW_HALO: (f32, f32) = (8.0, 18.0);
    pub const PLAIN_HALO: (f32, f32) = (2.0, 6.0);
    /// Gap kept between the viewport edge and freshly placed particles
    pub const PLACEMENT_MARGIN: f32 = 6.0;
    pub const PLACEMENT_ATTEMPTS: u32 = 20;
    /// Required spacing as a multiple of the summed radii
    pub const PLACEMENT_SPACING: f32 = 1.1;

    /// Ripple defaults
    pub const RIPPLE_SPEED: f32 = 260.0;
    pub const RIPPLE_WIDTH: f32 = 2.6;
    pub const RIPPLE_LIFE: f32 = 1.35;
    pub const RIPPLE_STRENGTH: f32 = 420.0;
    pub const RIPPLE_BAND: f32 = 150.0;
    /// Converts ripple influence into a velocity increment
    pub const RIPPLE_COUPLING: f32 = 0.0018;

    /// Collision response
    pub const RESTITUTION: f32 = 0.98;
    pub const WALL_PADDING: f32 = 0.5;
    /// Substituted for zero distances so normals never become NaN
    pub const DISTANCE_EPSILON: f32 = 1e-4;

    /// Energy management
    pub const DRAG: f32 = 0.9992;
    pub const MIN_SPEED: f32 = 18.0;
    pub const MAX_SPEED: f32 = 140.0;
    /// Fraction of the speed deficit injected as a random kick
    pub const STALL_BOOST: f32 = 0.06;
}

/// Uniform sample in `[lo, hi)`, returning `lo` for an empty range
#[inline]
pub fn random_between<R: Rng + ?Sized>(rng: &mut R, lo: f32, hi: f32) -> f32 {
    if hi <= lo {
        return lo;
    }
    lo + rng.random::<f32>() * (hi - lo)
}

/// Sample from a `(lo, hi)` range constant
#[inline]
pub fn random_in<R: Rng + ?Sized>(rng: &mut R, range: (f32, f32)) -> f32 {
    random_between(rng, range.0, range.1)
}

/// Uniformly distributed unit vector
#[inline]
pub fn random_direction<R: Rng + ?Sized>(rng: &mut R) -> Vec2 {
    let theta = random_between(rng, 0.0, std::f32::consts::TAU);
    Vec2::new(theta.cos(), theta.sin())
}

/// Clamp that tolerates `hi < lo` by collapsing onto `lo`
#[inline]
pub fn clamp(value: f32, lo: f32, hi: f32) -> f32 {
    value.min(hi).max(lo)
}

/// Euclidean distance between two points
#[inline]
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    (b - a).length()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_random_between_stays_in_range() {
        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..1000 {
            let v = random_between(&mut rng, 165.0, 290.0);
            assert!((165.0..290.0).contains(&v));
        }
    }

    #[test]
    fn test_random_between_empty_range() {
        let mut rng = Pcg32::seed_from_u64(7);
        assert_eq!(random_between(&mut rng, 5.0, 5.0), 5.0);
        assert_eq!(random_between(&mut rng, 5.0, 1.0), 5.0);
    }

    #[test]
    fn test_random_direction_is_unit() {
        let mut rng = Pcg32::seed_from_u64(3);
        for _ in 0..100 {
            assert!((random_direction(&mut rng).length() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_clamp() {
        assert_eq!(clamp(-1.0, 0.0, 10.0), 0.0);
        assert_eq!(clamp(11.0, 0.0, 10.0), 10.0);
        assert_eq!(clamp(4.0, 0.0, 10.0), 4.0);
        // Inverted bounds collapse onto the lower bound
        assert_eq!(clamp(4.0, 6.0, 2.0), 6.0);
    }

    #[test]
    fn test_distance() {
        assert!((distance(Vec2::ZERO, Vec2::new(3.0, 4.0)) - 5.0).abs() < 1e-6);
    }
}
