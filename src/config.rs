//! Tunables supplied by the host application.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::modifier::ModifierConfig;
use crate::noise_source::NoiseSeed;

/// Highest accepted octave count.
pub const MAX_OCTAVES: u32 = 32;

/// Errors reported by [`TerrainConfig::validate`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A numeric field is NaN or infinite.
    #[error("`{field}` must be finite, got {value}")]
    NonFinite { field: &'static str, value: f32 },
    /// An extent or divisor-like field is zero or negative.
    #[error("`{field}` must be greater than zero, got {value}")]
    NotPositive { field: &'static str, value: f32 },
    /// More octaves than the synthesizer accepts.
    #[error("noise_levels must be at most 32, got {0}")]
    TooManyOctaves(u32),
}

/// Every parameter the synthesis context reads.
///
/// Deserialization fills missing fields from [`Default`], so a document that
/// only names `seed` and `noise_levels` is a complete configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerrainConfig {
    /// Octave count of the fractal sum.
    pub noise_levels: u32,
    /// Level of detail used while the viewer is moving.
    pub moving_resolution: u32,
    /// Level of detail restored once the viewer has been idle for a second.
    pub max_resolution: u32,
    /// Multiplier applied after the modifier pipeline.
    pub terrain_scale: f32,
    pub seed: NoiseSeed,
    /// Extent along X in world units.
    pub length: f32,
    /// Extent along Z in world units.
    pub width: f32,
    /// Scroll speed per unit of directional input.
    pub movement_speed: f32,
    /// Full resamples per second. Zero or less resamples every frame.
    pub update_rate: f32,
    pub modifiers: ModifierConfig,
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            noise_levels: 4,
            moving_resolution: 1,
            max_resolution: 5,
            terrain_scale: 10.0,
            seed: NoiseSeed::default(),
            length: 64.0,
            width: 64.0,
            movement_speed: 20.0,
            update_rate: 30.0,
            modifiers: ModifierConfig::default(),
        }
    }
}

impl TerrainConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_seed(mut self, seed: impl Into<NoiseSeed>) -> Self {
        self.seed = seed.into();
        self
    }

    pub fn with_extent(mut self, length: f32, width: f32) -> Self {
        self.length = length;
        self.width = width;
        self
    }

    pub fn with_noise_levels(mut self, octaves: u32) -> Self {
        self.noise_levels = octaves;
        self
    }

    pub fn with_terrain_scale(mut self, scale: f32) -> Self {
        self.terrain_scale = scale;
        self
    }

    /// Sets the moving and idle levels of detail.
    pub fn with_resolutions(mut self, moving: u32, max: u32) -> Self {
        self.moving_resolution = moving;
        self.max_resolution = max;
        self
    }

    pub fn with_update_rate(mut self, rate: f32) -> Self {
        self.update_rate = rate;
        self
    }

    pub fn with_movement_speed(mut self, speed: f32) -> Self {
        self.movement_speed = speed;
        self
    }

    pub fn with_modifiers(mut self, modifiers: ModifierConfig) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Checks the fields the synthesis math cannot tolerate.
    ///
    /// Range limits a UI would impose (slider bounds and the like) are left
    /// to the host. A zero `update_rate` is accepted and means "every frame".
    pub fn validate(&self) -> Result<(), ConfigError> {
        finite("terrain_scale", self.terrain_scale)?;
        positive("length", self.length)?;
        positive("width", self.width)?;
        finite("movement_speed", self.movement_speed)?;
        finite("update_rate", self.update_rate)?;

        let m = &self.modifiers;
        finite("modifiers.beach_interval", m.beach_interval)?;
        finite("modifiers.beach_floor", m.beach_floor)?;
        finite("modifiers.water_threshold", m.water_threshold)?;
        positive("modifiers.dampen_factor", m.dampen_factor)?;
        positive("modifiers.beach_divisor", m.beach_divisor)?;

        if self.noise_levels > MAX_OCTAVES {
            return Err(ConfigError::TooManyOctaves(self.noise_levels));
        }
        Ok(())
    }
}

fn finite(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NonFinite { field, value })
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    finite(field, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { field, value })
    }
}
