//! The synthesis context: grid, noise, schedule and LOD state in one place.

use bevy::log::{debug, info, trace};
use bevy::prelude::Resource;

use crate::config::{ConfigError, TerrainConfig};
use crate::grid::Grid;
use crate::lod::{LodTransition, ResolutionManager};
use crate::noise_source::NoiseSource;
use crate::scheduler::UpdateScheduler;
use crate::synth::{HeightfieldSynthesizer, MotionInput, ScrollOffset};

/// What a call to [`Heightfield::resample`] did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickOutcome {
    /// The noise field was rebuilt for a new seed.
    pub reseeded: bool,
    /// The grid was replaced; vertex count may differ.
    pub rebuilt: bool,
    /// Every vertex height was recomputed.
    pub resampled: bool,
}

impl TickOutcome {
    /// Whether the vertex buffer differs from the previous frame.
    pub fn changed(&self) -> bool {
        self.rebuilt || self.resampled
    }
}

/// Snapshot of the per-frame scheduling state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScheduleState {
    pub accumulated_time: f32,
    pub update_interval: f32,
    pub active_lod: u32,
    pub motion_active: bool,
}

/// Owns everything the terrain needs between frames.
///
/// Drive it with [`resample`](Self::resample) once per frame and read the
/// result through [`vertex_buffer`](Self::vertex_buffer). All mutation goes
/// through `&mut self`, so a host that shares it between threads must
/// serialize access; as a Bevy [`Resource`] the scheduler does that already.
#[derive(Resource, Debug, Clone)]
pub struct Heightfield {
    config: TerrainConfig,
    noise: NoiseSource,
    grid: Grid,
    scheduler: UpdateScheduler,
    lod: ResolutionManager,
    offset: ScrollOffset,
    motion_active: bool,
    passes: u64,
    rebuilds: u64,
}

impl Default for Heightfield {
    fn default() -> Self {
        Self::from_valid(TerrainConfig::default())
    }
}

impl Heightfield {
    /// Builds the grid at `max_resolution` and runs a first synthesis pass,
    /// so the buffer holds terrain before the first frame.
    pub fn new(config: TerrainConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_valid(config))
    }

    fn from_valid(config: TerrainConfig) -> Self {
        let lod = ResolutionManager::new(config.max_resolution);
        let grid = Grid::at_lod(config.length, config.width, lod.active_lod());
        let mut heightfield = Self {
            noise: NoiseSource::new(config.seed.clone()),
            scheduler: UpdateScheduler::new(config.update_rate),
            grid,
            lod,
            offset: ScrollOffset::default(),
            motion_active: false,
            passes: 0,
            rebuilds: 0,
            config,
        };
        heightfield.synthesize(MotionInput::IDLE, 0.0);
        heightfield
    }

    pub fn config(&self) -> &TerrainConfig {
        &self.config
    }

    /// Replaces the configuration.
    ///
    /// A new seed is picked up by the next [`resample`](Self::resample). A new
    /// extent triggers a full [`rebuild`](Self::rebuild). On error the current
    /// configuration is kept.
    pub fn set_config(&mut self, config: TerrainConfig) -> Result<(), ConfigError> {
        config.validate()?;

        let extent_changed = config.length != self.config.length || config.width != self.config.width;
        self.scheduler.set_update_rate(config.update_rate);
        self.config = config;
        info!(
            "Terrain config replaced ({} octaves, scale {}, {} updates/s)",
            self.config.noise_levels, self.config.terrain_scale, self.config.update_rate
        );

        if extent_changed {
            self.rebuild();
        }
        Ok(())
    }

    /// Rebuilds the grid at `max_resolution` from the current configuration
    /// and resamples it, restarting the throttle period.
    ///
    /// Counts as one grid rebuild and one synthesis pass. The scroll offset is
    /// kept, so the terrain does not jump.
    pub fn rebuild(&mut self) {
        let lod = self.config.max_resolution;
        self.rebuild_grid(lod);
        self.lod.set_active_lod(lod);
        self.synthesize(MotionInput::IDLE, 0.0);
        self.scheduler.reset();
    }

    /// Advances one frame.
    ///
    /// Order: seed check, LOD transition, throttle. Restoring full resolution
    /// resamples at once and counts as this frame's pass, restarting the
    /// throttle period.
    pub fn resample(&mut self, dt: f32, motion: MotionInput) -> TickOutcome {
        let mut outcome = TickOutcome::default();

        if self.noise.seed() != &self.config.seed {
            debug!("Reseeding terrain noise: {} -> {}", self.noise.seed(), self.config.seed);
            self.noise.reseed(self.config.seed.clone());
            outcome.reseeded = true;
        }

        self.motion_active = motion.is_moving();
        let transition = self.lod.update(
            motion,
            dt,
            self.config.moving_resolution,
            self.config.max_resolution,
        );
        match transition {
            LodTransition::Hold => {}
            LodTransition::Degrade(lod) => {
                debug!("Viewer moving, dropping terrain to LOD {lod}");
                self.rebuild_grid(lod);
                outcome.rebuilt = true;
            }
            LodTransition::Restore(lod) => {
                debug!("Viewer settled, restoring terrain to LOD {lod}");
                self.rebuild_grid(lod);
                self.synthesize(motion, dt);
                self.scheduler.reset();
                outcome.rebuilt = true;
                outcome.resampled = true;
                return outcome;
            }
        }

        if self.scheduler.tick(dt) {
            self.synthesize(motion, dt);
            outcome.resampled = true;
        }
        outcome
    }

    /// Flat `[x, y, z]` vertex positions, row-major.
    pub fn vertex_buffer(&self) -> &[[f32; 3]] {
        self.grid.vertices()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn noise(&self) -> &NoiseSource {
        &self.noise
    }

    pub fn offset(&self) -> ScrollOffset {
        self.offset
    }

    pub fn active_lod(&self) -> u32 {
        self.lod.active_lod()
    }

    pub fn resolution_manager(&self) -> &ResolutionManager {
        &self.lod
    }

    pub fn schedule_state(&self) -> ScheduleState {
        ScheduleState {
            accumulated_time: self.scheduler.accumulated_time(),
            update_interval: self.scheduler.update_interval(),
            active_lod: self.lod.active_lod(),
            motion_active: self.motion_active,
        }
    }

    /// Full synthesis passes run so far, including the initial one.
    pub fn passes(&self) -> u64 {
        self.passes
    }

    /// Grid rebuilds since construction.
    pub fn rebuilds(&self) -> u64 {
        self.rebuilds
    }

    /// Height a vertex at grid position `(x, z)` would get right now.
    pub fn height_at(&self, x: f32, z: f32) -> f32 {
        synthesizer(&self.noise, &self.config).height_at(x, z, self.offset)
    }

    fn rebuild_grid(&mut self, lod: u32) {
        self.grid = Grid::at_lod(self.config.length, self.config.width, lod);
        self.rebuilds += 1;
        info!(
            "Rebuilt terrain grid at LOD {lod}: {}x{} vertices",
            self.grid.columns(),
            self.grid.rows()
        );
    }

    fn synthesize(&mut self, motion: MotionInput, dt: f32) {
        self.offset.advance(
            self.config.movement_speed,
            motion,
            dt,
            self.config.length,
            self.config.width,
            self.scheduler.update_interval(),
        );

        synthesizer(&self.noise, &self.config).synthesize(&mut self.grid, self.offset);
        self.passes += 1;
        trace!("Resampled {} terrain vertices", self.grid.vertex_count());
    }
}

fn synthesizer<'a>(noise: &'a NoiseSource, config: &'a TerrainConfig) -> HeightfieldSynthesizer<'a> {
    HeightfieldSynthesizer {
        noise,
        modifiers: &config.modifiers,
        octaves: config.noise_levels,
        scale: config.terrain_scale,
    }
}
