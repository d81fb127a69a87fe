//! Particles and the store that spawns them

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::bounds::Bounds;
use crate::consts::*;
use crate::{random_between, random_direction, random_in};

/// A drifting disc
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    radius: f32,
    /// Always `radius * radius`; only changes through [`Particle::set_radius`]
    mass: f32,
    /// Hue in degrees
    pub hue: f32,
    /// Base opacity (0-1)
    pub alpha: f32,
    /// Halo radius drawn around the disc
    pub glow_radius: f32,
    /// Larger, brighter category
    pub glow: bool,
}

impl Particle {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32) -> Self {
        Self {
            pos,
            vel,
            radius,
            mass: radius * radius,
            hue: HUE.0,
            alpha: 1.0,
            glow_radius: 0.0,
            glow: false,
        }
    }

    /// Draw a particle's category, size, color and velocity; position is left at zero
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let glow = rng.random_bool(GLOW_CHANCE);
        let (radius_range, speed_range, alpha_range, halo_range) = if glow {
            (GLOW_RADIUS, GLOW_SPEED, GLOW_ALPHA, GLOW_HALO)
        } else {
            (PLAIN_RADIUS, PLAIN_SPEED, PLAIN_ALPHA, PLAIN_HALO)
        };

        let radius = random_in(rng, radius_range);
        let speed = random_in(rng, speed_range);
        let mut particle = Self::new(Vec2::ZERO, random_direction(rng) * speed, radius);
        particle.hue = random_in(rng, HUE);
        particle.alpha = random_in(rng, alpha_range);
        particle.glow_radius = random_in(rng, halo_range);
        particle.glow = glow;
        particle
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    #[inline]
    pub fn mass(&self) -> f32 {
        self.mass
    }

    /// Resize the disc, keeping mass in step with it
    pub fn set_radius(&mut self, radius: f32) {
        self.radius = radius;
        self.mass = radius * radius;
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        self.vel.length()
    }

    #[inline]
    pub fn inverse_mass(&self) -> f32 {
        1.0 / self.mass
    }
}

/// Owns every particle of the session
#[derive(Debug, Clone, Default)]
pub struct ParticleStore {
    particles: Vec<Particle>,
}

impl ParticleStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Discard all particles and spawn `count` fresh ones inside `bounds`
    ///
    /// Placement is best-effort: each particle gets up to
    /// [`PLACEMENT_ATTEMPTS`] samples to find a spot at least
    /// `PLACEMENT_SPACING * (r_a + r_b)` from every particle placed before it.
    /// When every attempt fails the last sample is kept, so crowded viewports
    /// can start with overlapping particles. The first steps separate them.
    pub fn initialize<R: Rng + ?Sized>(&mut self, count: usize, bounds: Bounds, rng: &mut R) {
        self.particles.clear();
        self.particles.reserve(count);

        let mut overlapping = 0usize;
        for _ in 0..count {
            let mut particle = Particle::random(rng);
            let (pos, clear) = self.place(particle.radius(), bounds, rng);
            if !clear {
                overlapping += 1;
            }
            particle.pos = pos;
            self.particles.push(particle);
        }

        log::debug!(
            "Spawned {} particles in {}x{} ({} accepted without clearance)",
            count,
            bounds.width,
            bounds.height,
            overlapping
        );
    }

    /// Sample a position for a new particle; the flag reports whether it is clear
    fn place<R: Rng + ?Sized>(&self, radius: f32, bounds: Bounds, rng: &mut R) -> (Vec2, bool) {
        let pad = PLACEMENT_MARGIN + radius;
        let mut pos = bounds.center();

        for _ in 0..PLACEMENT_ATTEMPTS {
            pos = Vec2::new(
                random_between(rng, pad, bounds.width - pad),
                random_between(rng, pad, bounds.height - pad),
            );
            pos = bounds.contain(pos, radius);

            let clear = self.particles.iter().all(|other| {
                crate::distance(pos, other.pos) > PLACEMENT_SPACING * (radius + other.radius())
            });
            if clear {
                return (pos, true);
            }
        }

        (pos, false)
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn as_slice(&self) -> &[Particle] {
        &self.particles
    }

    pub fn as_mut_slice(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Particle> {
        self.particles.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Particle> {
        self.particles.iter_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_set_radius_keeps_mass() {
        let mut p = Particle::new(Vec2::ZERO, Vec2::ZERO, 2.0);
        assert_eq!(p.mass(), 4.0);
        p.set_radius(3.5);
        assert_eq!(p.radius(), 3.5);
        assert_eq!(p.mass(), 3.5 * 3.5);
        assert!((p.inverse_mass() - 1.0 / 12.25).abs() < 1e-7);
    }

    #[test]
    fn test_initialize_spawns_count() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut store = ParticleStore::new();
        store.initialize(190, Bounds::new(1280.0, 800.0), &mut rng);
        assert_eq!(store.len(), 190);
    }

    #[test]
    fn test_initialize_is_full_reset() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut store = ParticleStore::new();
        store.initialize(50, Bounds::new(800.0, 600.0), &mut rng);
        store.initialize(12, Bounds::new(400.0, 300.0), &mut rng);
        assert_eq!(store.len(), 12);
        let bounds = Bounds::new(400.0, 300.0);
        assert!(store.iter().all(|p| bounds.contains(p.pos, p.radius())));
    }

    #[test]
    fn test_initialize_zero() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut store = ParticleStore::new();
        store.initialize(0, Bounds::new(800.0, 600.0), &mut rng);
        assert!(store.is_empty());
    }

    #[test]
    fn test_attributes_follow_category() {
        let mut rng = Pcg32::seed_from_u64(42);
        let mut store = ParticleStore::new();
        store.initialize(400, Bounds::new(1920.0, 1080.0), &mut rng);

        for p in store.iter() {
            assert_eq!(p.mass(), p.radius() * p.radius());
            assert!(p.radius() > 0.0);
            assert!((HUE.0..HUE.1).contains(&p.hue));
            let speed = p.speed();
            if p.glow {
                assert!((GLOW_RADIUS.0..GLOW_RADIUS.1).contains(&p.radius()));
                assert!((GLOW_ALPHA.0..GLOW_ALPHA.1).contains(&p.alpha));
                assert!(speed >= GLOW_SPEED.0 - 1e-3 && speed < GLOW_SPEED.1 + 1e-3);
            } else {
                assert!((PLAIN_RADIUS.0..PLAIN_RADIUS.1).contains(&p.radius()));
                assert!((PLAIN_ALPHA.0..PLAIN_ALPHA.1).contains(&p.alpha));
                assert!(speed >= PLAIN_SPEED.0 - 1e-3 && speed < PLAIN_SPEED.1 + 1e-3);
            }
        }

        let glow = store.iter().filter(|p| p.glow).count();
        // 400 draws at p = 0.42 land well inside this window
        assert!((100..240).contains(&glow), "glow count {glow}");
    }

    #[test]
    fn test_sparse_placement_has_clearance() {
        let mut rng = Pcg32::seed_from_u64(9);
        let mut store = ParticleStore::new();
        store.initialize(30, Bounds::new(1600.0, 1200.0), &mut rng);

        let particles = store.as_slice();
        for i in 0..particles.len() {
            for j in (i + 1)..particles.len() {
                let (a, b) = (&particles[i], &particles[j]);
                let gap = crate::distance(a.pos, b.pos);
                assert!(gap > PLACEMENT_SPACING * (a.radius() + b.radius()));
            }
        }
    }

    #[test]
    fn test_crowded_placement_still_places_everyone() {
        // Far too many particles for the area: overlap is accepted, not an error
        let mut rng = Pcg32::seed_from_u64(5);
        let mut store = ParticleStore::new();
        let bounds = Bounds::new(60.0, 60.0);
        store.initialize(190, bounds, &mut rng);
        assert_eq!(store.len(), 190);
        assert!(store.iter().all(|p| p.pos.is_finite()));
        assert!(store.iter().all(|p| bounds.contains(p.pos, p.radius())));
    }

    #[test]
    fn test_same_seed_same_layout() {
        let bounds = Bounds::new(800.0, 600.0);
        let mut a = ParticleStore::new();
        let mut b = ParticleStore::new();
        a.initialize(40, bounds, &mut Pcg32::seed_from_u64(77));
        b.initialize(40, bounds, &mut Pcg32::seed_from_u64(77));
        for (pa, pb) in a.iter().zip(b.iter()) {
            assert_eq!(pa.pos, pb.pos);
            assert_eq!(pa.vel, pb.vel);
        }
    }
}
