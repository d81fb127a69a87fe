//! Frame driver
//!
//! Owns the simulation and the animation clock. Host callbacks feed it
//! timestamps and input events; events are queued as intents and applied at
//! the start of the next frame so a step never sees half-applied input.

use crate::consts::{MAX_FRAME_DT, NOMINAL_DT};
use crate::renderer::Renderer;
use crate::settings::Settings;
use crate::sim::{Bounds, Intent, SimulationState, TickInput, tick};

pub struct FrameDriver {
    state: SimulationState,
    settings: Settings,
    /// Timestamp (ms) of the previous frame
    last_time: Option<f64>,
    /// Intents received since the previous frame
    pending: TickInput,
    frames: u64,
}

impl FrameDriver {
    /// Build a session for a viewport; particle count is fixed from here on
    pub fn new(settings: Settings, width: f32, height: f32, seed: u64) -> Self {
        let seed = settings.seed.unwrap_or(seed);
        let count = settings.particle_count(width);
        let state = SimulationState::new(
            seed,
            Bounds::new(width, height),
            count,
            settings.effective_ripples(),
        );

        log::info!(
            "Session {}x{}: {} particles, ripples {}, seed {}",
            width,
            height,
            count,
            if settings.effective_ripples() { "on" } else { "off" },
            seed
        );

        Self {
            state,
            settings,
            last_time: None,
            pending: TickInput::default(),
            frames: 0,
        }
    }

    /// Pointer went down at viewport coordinates
    pub fn pointer_down(&mut self, x: f32, y: f32) {
        self.pending.push(Intent::SpawnRipple { x, y });
    }

    /// Viewport changed size
    pub fn resize(&mut self, width: f32, height: f32) {
        log::info!("Resize to {width}x{height}");
        self.pending.push(Intent::Reinitialize { width, height });
    }

    /// Seconds to advance for a frame stamped `now` (ms), clamped to `MAX_FRAME_DT`
    fn delta(&mut self, now: f64) -> f32 {
        let dt = match self.last_time {
            Some(last) => ((now - last) / 1000.0) as f32,
            None => NOMINAL_DT,
        };
        self.last_time = Some(now);
        dt.clamp(0.0, MAX_FRAME_DT)
    }

    /// Run one animation frame; returns the delta that was simulated
    pub fn frame<R: Renderer + ?Sized>(&mut self, now: f64, renderer: &mut R) -> f32 {
        let dt = self.delta(now);
        let input = std::mem::take(&mut self.pending);
        self.frames += 1;

        if self.state.particle_count == 0 {
            // Nothing to animate, but keep the viewport current. Ripples
            // would never age without a step, so pointer input is dropped.
            for &intent in &input.intents {
                if let Intent::Reinitialize { .. } = intent {
                    self.state.apply(intent);
                }
            }
            return dt;
        }

        tick(&mut self.state, &input, dt);
        renderer.render(&self.state.view());
        dt
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Frames driven so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Whether anything is drawn at all
    pub fn is_animating(&self) -> bool {
        self.state.particle_count > 0
    }
}
