//! Motion-driven level-of-detail switching.
//!
//! While the viewer moves, the grid drops to the configured moving
//! resolution so full resamples stay cheap. Once input stops, the manager
//! waits [`SETTLE_SECONDS`] before restoring the maximum resolution.

use crate::synth::MotionInput;

/// Idle time required before returning to the maximum resolution.
pub const SETTLE_SECONDS: f32 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MotionState {
    Moving,
    #[default]
    Idle,
}

/// What the caller must do after [`ResolutionManager::update`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LodTransition {
    /// Keep the current grid.
    Hold,
    /// Rebuild at the moving resolution.
    Degrade(u32),
    /// Rebuild at the maximum resolution and resample right away,
    /// bypassing the throttle.
    Restore(u32),
}

/// LOD state machine.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolutionManager {
    active_lod: u32,
    update_wait: f32,
    state: MotionState,
}

impl ResolutionManager {
    /// Starts idle at `lod` with the settle countdown already expired.
    pub fn new(lod: u32) -> Self {
        Self {
            active_lod: lod,
            update_wait: -1.0,
            state: MotionState::Idle,
        }
    }

    pub fn active_lod(&self) -> u32 {
        self.active_lod
    }

    /// Records a grid rebuilt outside [`update`](Self::update). Motion state
    /// and the settle countdown are left alone.
    pub fn set_active_lod(&mut self, lod: u32) {
        self.active_lod = lod;
    }

    /// Seconds left before an idle viewer gets full resolution back.
    /// Negative once the countdown has expired.
    pub fn update_wait(&self) -> f32 {
        self.update_wait
    }

    pub fn state(&self) -> MotionState {
        self.state
    }

    /// Advances one frame and reports the rebuild, if any, the grid needs.
    ///
    /// At most one transition is returned per frame. A moving frame re-arms
    /// the countdown, so `Restore` only follows a run of idle frames longer
    /// than [`SETTLE_SECONDS`].
    pub fn update(
        &mut self,
        motion: MotionInput,
        dt: f32,
        moving_resolution: u32,
        max_resolution: u32,
    ) -> LodTransition {
        let mut transition = LodTransition::Hold;

        if motion.is_moving() {
            self.state = MotionState::Moving;
            self.update_wait = SETTLE_SECONDS;
            if self.active_lod != moving_resolution {
                self.active_lod = moving_resolution;
                transition = LodTransition::Degrade(moving_resolution);
            }
        } else {
            self.state = MotionState::Idle;
        }

        if self.update_wait < 0.0 {
            if self.active_lod != max_resolution {
                self.active_lod = max_resolution;
                transition = LodTransition::Restore(max_resolution);
            }
        } else {
            self.update_wait -= dt;
        }

        transition
    }
}
