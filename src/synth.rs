//! Fractal height synthesis.
//!
//! A height is the sum of `octaves` noise samples, where octave `i` (from 1)
//! samples at `(0.1 * i)^i` times the world coordinate, passed through the
//! modifier pipeline and multiplied by the terrain scale. The multiplier
//! bottoms out near the fourth octave and passes 1.0 at the tenth, after
//! which each extra octave adds ever higher-frequency noise.

use crate::grid::Grid;
use crate::modifier::{self, ModifierConfig};
use crate::noise_source::NoiseSource;

/// Frequency multiplier for octave `i` (1-based).
pub fn octave_power(i: u32) -> f64 {
    (0.1 * i as f64).powi(i as i32)
}

/// Raw fractal sum at a world position, before modifiers and scale.
pub fn fractal_sum(noise: &NoiseSource, x: f64, z: f64, octaves: u32) -> f32 {
    (1..=octaves)
        .map(|i| {
            let power = octave_power(i);
            noise.sample(x * power, z * power)
        })
        .sum()
}

/// Shapes and scales fractal noise into terrain heights.
#[derive(Debug, Clone, Copy)]
pub struct HeightfieldSynthesizer<'a> {
    pub noise: &'a NoiseSource,
    pub modifiers: &'a ModifierConfig,
    pub octaves: u32,
    pub scale: f32,
}

impl HeightfieldSynthesizer<'_> {
    /// Final height for grid position `(x, z)` seen through `offset`.
    pub fn height_at(&self, x: f32, z: f32, offset: ScrollOffset) -> f32 {
        let sum = fractal_sum(
            self.noise,
            x as f64 + offset.x,
            z as f64 + offset.z,
            self.octaves,
        );
        modifier::apply(sum, self.modifiers) * self.scale
    }

    /// Writes a height into every vertex of `grid`.
    pub fn synthesize(&self, grid: &mut Grid, offset: ScrollOffset) {
        for vertex in grid.vertices_mut() {
            vertex[1] = self.height_at(vertex[0], vertex[2], offset);
        }
    }
}

/// Directional input for one frame; each axis is -1, 0 or 1.
///
/// Only [`new`](Self::new) builds one, so larger magnitudes cannot reach the
/// scroll math.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MotionInput {
    move_x: i8,
    move_z: i8,
}

impl MotionInput {
    pub const IDLE: MotionInput = MotionInput { move_x: 0, move_z: 0 };

    /// Clamps each axis to its sign.
    pub const fn new(move_x: i8, move_z: i8) -> Self {
        Self {
            move_x: move_x.signum(),
            move_z: move_z.signum(),
        }
    }

    pub fn move_x(self) -> i8 {
        self.move_x
    }

    pub fn move_z(self) -> i8 {
        self.move_z
    }

    pub fn is_moving(self) -> bool {
        self.move_x != 0 || self.move_z != 0
    }
}

/// Virtual displacement of the sample coordinates.
///
/// Scrolling moves the noise field under a stationary grid, so the mesh
/// never changes shape while the viewer travels. Stored as `f64` because it
/// grows for as long as the viewer keeps moving.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollOffset {
    pub x: f64,
    pub z: f64,
}

impl ScrollOffset {
    /// Advances by `speed * direction * dt * extent * interval` on each axis.
    pub fn advance(
        &mut self,
        speed: f32,
        motion: MotionInput,
        dt: f32,
        length: f32,
        width: f32,
        interval: f32,
    ) {
        let step = speed as f64 * dt as f64 * interval as f64;
        self.x += step * motion.move_x as f64 * length as f64;
        self.z += step * motion.move_z as f64 * width as f64;
    }
}
