//! Session settings
//!
//! Resolved once at startup from the host (media queries, canvas attributes
//! or a JSON file) and left untouched for the rest of the session.

use serde::{Deserialize, Serialize};

/// Background settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Accessibility ===
    /// Reduced motion (no particles, no ripples)
    pub reduced_motion: bool,

    // === Density ===
    /// Viewports at most this wide (CSS px) count as small screens
    pub small_screen_breakpoint: f32,
    /// Particle count on small screens
    pub small_screen_particles: usize,
    /// Particle count everywhere else
    pub particles: usize,

    // === Determinism ===
    /// Fixed RNG seed; hosts pick one from the clock when unset
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            reduced_motion: false,

            small_screen_breakpoint: 720.0,
            small_screen_particles: 90,
            particles: 190,

            seed: None,
        }
    }
}

impl Settings {
    /// Whether a viewport of this width gets the small-screen density
    pub fn is_small_screen(&self, viewport_width: f32) -> bool {
        viewport_width <= self.small_screen_breakpoint
    }

    /// Particles to spawn for a viewport of this width
    pub fn particle_count(&self, viewport_width: f32) -> usize {
        if self.reduced_motion {
            0
        } else if self.is_small_screen(viewport_width) {
            self.small_screen_particles
        } else {
            self.particles
        }
    }

    /// Effective ripples (respects reduced_motion)
    pub fn effective_ripples(&self) -> bool {
        !self.reduced_motion
    }

    /// Parse settings from JSON; missing fields keep their defaults
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_particle_count() {
        let settings = Settings::default();
        assert_eq!(settings.particle_count(1440.0), 190);
        assert_eq!(settings.particle_count(390.0), 90);
        assert_eq!(settings.particle_count(720.0), 90);
    }

    #[test]
    fn test_reduced_motion_disables_everything() {
        let settings = Settings {
            reduced_motion: true,
            ..Default::default()
        };
        assert_eq!(settings.particle_count(1440.0), 0);
        assert_eq!(settings.particle_count(390.0), 0);
        assert!(!settings.effective_ripples());
        assert!(Settings::default().effective_ripples());
    }

    #[test]
    fn test_from_json_partial() {
        let settings = Settings::from_json(r#"{ "particles": 64, "seed": 7 }"#).unwrap();
        assert_eq!(settings.particles, 64);
        assert_eq!(settings.seed, Some(7));
        assert_eq!(settings.small_screen_particles, 90);
        assert!(!settings.reduced_motion);
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(Settings::from_json("{ particles: }").is_err());
        assert!(Settings::from_json(r#"{ "particles": "many" }"#).is_err());
    }

    #[test]
    fn test_json_round_trip() {
        let settings = Settings {
            reduced_motion: true,
            seed: Some(42),
            ..Default::default()
        };
        let json = settings.to_json().unwrap();
        assert_eq!(Settings::from_json(&json).unwrap(), settings);
    }
}
