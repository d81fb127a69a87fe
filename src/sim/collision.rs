//! Collision detection and response between discs and the viewport edges
//!
//! Walls are perfectly elastic. Disc pairs use a mass-weighted impulse with a
//! slightly lossy restitution so the field never gains energy from contacts.

use glam::Vec2;

use super::bounds::Bounds;
use super::particle::Particle;
use crate::consts::{DISTANCE_EPSILON, RESTITUTION, WALL_PADDING};

/// Result of a collision check
#[derive(Debug, Clone)]
pub struct CollisionResult {
    /// Whether a collision occurred
    pub hit: bool,
    /// Unit normal pointing from the first body toward the second
    pub normal: Vec2,
    /// Overlap depth (for position correction)
    pub penetration: f32,
}

impl CollisionResult {
    pub fn miss() -> Self {
        Self {
            hit: false,
            normal: Vec2::ZERO,
            penetration: 0.0,
        }
    }
}

/// Check overlap between two particles
///
/// Coincident centers fall back to a fixed normal so the pair still separates.
pub fn particle_collision(a: &Particle, b: &Particle) -> CollisionResult {
    let offset = b.pos - a.pos;
    let dist = offset.length();
    let reach = a.radius() + b.radius();

    if dist >= reach {
        return CollisionResult::miss();
    }

    let normal = if dist > DISTANCE_EPSILON {
        offset / dist
    } else {
        Vec2::X
    };

    CollisionResult {
        hit: true,
        normal,
        penetration: reach - dist.max(DISTANCE_EPSILON),
    }
}

/// Separate and bounce an overlapping pair; returns whether they touched
pub fn resolve_pair(a: &mut Particle, b: &mut Particle, bounds: &Bounds) -> bool {
    let contact = particle_collision(a, b);
    if !contact.hit {
        return false;
    }

    let inv_a = a.inverse_mass();
    let inv_b = b.inverse_mass();
    let inv_total = inv_a + inv_b;

    // Heavier particle moves less
    let correction = contact.normal * contact.penetration;
    a.pos = bounds.contain(a.pos - correction * (inv_a / inv_total), a.radius());
    b.pos = bounds.contain(b.pos + correction * (inv_b / inv_total), b.radius());

    // A wall swallowed part of the correction; the partner takes the rest
    let reach = a.radius() + b.radius();
    if a.pos.distance(b.pos) < reach {
        b.pos = bounds.contain(a.pos + contact.normal * reach, b.radius());
        if a.pos.distance(b.pos) < reach {
            a.pos = bounds.contain(b.pos - contact.normal * reach, a.radius());
        }
    }

    // Only bounce when closing along the normal
    let closing = (b.vel - a.vel).dot(contact.normal);
    if closing < 0.0 {
        let impulse = -(1.0 + RESTITUTION) * closing / inv_total;
        a.vel -= contact.normal * impulse * inv_a;
        b.vel += contact.normal * impulse * inv_b;
    }

    true
}

/// Resolve every overlapping pair once; returns the number of contacts
pub fn resolve_collisions(particles: &mut [Particle], bounds: &Bounds) -> usize {
    let mut contacts = 0;
    for i in 0..particles.len() {
        let (head, tail) = particles.split_at_mut(i + 1);
        let a = &mut head[i];
        for b in tail.iter_mut() {
            if resolve_pair(a, b, bounds) {
                contacts += 1;
            }
        }
    }
    contacts
}

/// Reflect velocity off a surface
///
/// Standard reflection: v' = v - 2(v·n)n
#[inline]
pub fn reflect_velocity(velocity: Vec2, normal: Vec2) -> Vec2 {
    velocity - 2.0 * velocity.dot(normal) * normal
}

/// Keep a particle inside the viewport, bouncing off whichever edges it crossed
///
/// The particle is put back `WALL_PADDING` inside the edge and its velocity
/// is reflected when it is moving into the wall. Returns whether any edge was hit.
pub fn bounce_off_walls(particle: &mut Particle, bounds: &Bounds) -> bool {
    let r = particle.radius();
    let lo = bounds.min_for(r);
    let hi = bounds.max_for(r);
    let mut hit = false;

    // (normal pointing back into the viewport, crossed?, resting coordinate)
    let walls = [
        (Vec2::X, particle.pos.x < lo.x, (lo.x + WALL_PADDING).min(hi.x)),
        (Vec2::NEG_X, particle.pos.x > hi.x, (hi.x - WALL_PADDING).max(lo.x)),
        (Vec2::Y, particle.pos.y < lo.y, (lo.y + WALL_PADDING).min(hi.y)),
        (Vec2::NEG_Y, particle.pos.y > hi.y, (hi.y - WALL_PADDING).max(lo.y)),
    ];

    for (normal, crossed, resting) in walls {
        if !crossed {
            continue;
        }
        hit = true;
        if normal.x != 0.0 {
            particle.pos.x = resting;
        } else {
            particle.pos.y = resting;
        }
        if particle.vel.dot(normal) < 0.0 {
            particle.vel = reflect_velocity(particle.vel, normal);
        }
    }

    hit
}
