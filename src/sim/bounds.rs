//! Viewport rectangle geometry
//!
//! The simulation lives in screen space: origin at the top-left corner,
//! x to the right, y downward, both in CSS pixels.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::clamp;

/// Axis-aligned viewport extent
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    /// Center of the viewport
    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Smallest legal center coordinate for a disc of `radius`
    #[inline]
    pub fn min_for(&self, radius: f32) -> Vec2 {
        Vec2::splat(radius)
    }

    /// Largest legal center coordinate for a disc of `radius`
    ///
    /// Never below `min_for`, so a viewport narrower than the disc pins it
    /// to the lower edge instead of producing an empty range.
    #[inline]
    pub fn max_for(&self, radius: f32) -> Vec2 {
        Vec2::new(
            (self.width - radius).max(radius),
            (self.height - radius).max(radius),
        )
    }

    /// Whether a disc of `radius` at `pos` lies fully inside
    pub fn contains(&self, pos: Vec2, radius: f32) -> bool {
        let lo = self.min_for(radius);
        let hi = self.max_for(radius);
        pos.x >= lo.x && pos.x <= hi.x && pos.y >= lo.y && pos.y <= hi.y
    }

    /// Clamp a disc center back inside the viewport
    pub fn contain(&self, pos: Vec2, radius: f32) -> Vec2 {
        let lo = self.min_for(radius);
        let hi = self.max_for(radius);
        Vec2::new(clamp(pos.x, lo.x, hi.x), clamp(pos.y, lo.y, hi.y))
    }
}
