//! Scrolling heightfield terrain for Bevy.
//!
//! Synthesizes a regular height grid from layered simplex noise, shapes it
//! with a fixed-order pipeline of togglable modifiers, and keeps it current
//! while the viewer travels:
//!
//! - **Fractal synthesis**: `noise_levels` octaves summed at a `(0.1·i)^i`
//!   frequency law, then modifiers, then `terrain_scale` ([`synth`]).
//! - **Modifiers**: ten scalar shaping functions, from easing curves to
//!   beach widening and underwater dampening ([`modifier`]).
//! - **Level of detail**: the grid drops to a cheap resolution while moving
//!   and returns to full resolution once the viewer has settled ([`lod`]).
//! - **Throttled updates**: full resamples run at most `update_rate` times
//!   per second ([`scheduler`]).
//!
//! [`Heightfield`] ties these together. [`TerrainPlugin`] runs it from Bevy's
//! frame clock and re-uploads tagged meshes built by [`GridMeshBuilder`].
//!
//! # Example
//!
//! ```ignore
//! use bevy_scrolling_terrain::{Heightfield, MotionInput, TerrainConfig};
//!
//! let mut terrain = Heightfield::new(TerrainConfig::default().with_seed("islands"))?;
//! let outcome = terrain.resample(1.0 / 60.0, MotionInput::new(1, 0));
//! if outcome.changed() {
//!     upload(terrain.vertex_buffer());
//! }
//! ```

pub mod config;
pub mod grid;
pub mod heightfield;
pub mod lod;
pub mod mesher;
pub mod modifier;
pub mod noise_source;
pub mod plugin;
pub mod scheduler;
pub mod synth;

pub use config::{ConfigError, TerrainConfig};
pub use grid::Grid;
pub use heightfield::{Heightfield, ScheduleState, TickOutcome};
pub use lod::{LodTransition, MotionState, ResolutionManager};
pub use mesher::GridMeshBuilder;
pub use modifier::{Modifier, ModifierConfig};
pub use noise_source::{NoiseSeed, NoiseSource};
pub use plugin::{TerrainMesh, TerrainMeshSettings, TerrainMotion, TerrainPlugin, resample_terrain};
pub use scheduler::UpdateScheduler;
pub use synth::{HeightfieldSynthesizer, MotionInput, ScrollOffset};
