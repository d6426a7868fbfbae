//! Bevy plugin driving a [`Heightfield`] from frame time.
//!
//! The plugin owns the synthesis context as a resource and keeps every mesh
//! tagged with [`TerrainMesh`] in sync with it. Input handling stays with the
//! host: write the current direction into [`TerrainMotion`] each frame.
//!
//! # Example
//!
//! ```ignore
//! use bevy::prelude::*;
//! use bevy_scrolling_terrain::{Heightfield, TerrainMesh, TerrainMeshSettings, TerrainPlugin};
//!
//! fn setup(
//!     mut commands: Commands,
//!     heightfield: Res<Heightfield>,
//!     settings: Res<TerrainMeshSettings>,
//!     mut meshes: ResMut<Assets<Mesh>>,
//!     mut materials: ResMut<Assets<StandardMaterial>>,
//! ) {
//!     let mesh = settings.builder().build(heightfield.grid());
//!     commands.spawn((
//!         TerrainMesh,
//!         Mesh3d(meshes.add(mesh)),
//!         MeshMaterial3d(materials.add(StandardMaterial::default())),
//!     ));
//! }
//!
//! App::new()
//!     .add_plugins((DefaultPlugins, TerrainPlugin::default()))
//!     .add_systems(Startup, setup)
//!     .run();
//! ```

use bevy::prelude::*;

use crate::config::{ConfigError, TerrainConfig};
use crate::heightfield::Heightfield;
use crate::mesher::GridMeshBuilder;
use crate::synth::MotionInput;

/// Directional input for the current frame, written by the host.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TerrainMotion(pub MotionInput);

/// Marks mesh entities that display the heightfield.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct TerrainMesh;

/// Mesh build options used when re-uploading the terrain.
#[derive(Resource, Debug, Clone, Copy)]
pub struct TerrainMeshSettings {
    pub uv_tile_size: f32,
}

impl Default for TerrainMeshSettings {
    fn default() -> Self {
        Self { uv_tile_size: 1.0 }
    }
}

impl TerrainMeshSettings {
    pub fn builder(&self) -> GridMeshBuilder {
        GridMeshBuilder::new().with_uv_tile_size(self.uv_tile_size)
    }
}

/// Registers the terrain resources and the per-frame [`resample_terrain`] system.
pub struct TerrainPlugin {
    heightfield: Heightfield,
    mesh_settings: TerrainMeshSettings,
}

impl Default for TerrainPlugin {
    fn default() -> Self {
        Self {
            heightfield: Heightfield::default(),
            mesh_settings: TerrainMeshSettings::default(),
        }
    }
}

impl TerrainPlugin {
    /// Validates `config` and synthesizes the initial terrain.
    pub fn new(config: TerrainConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            heightfield: Heightfield::new(config)?,
            mesh_settings: TerrainMeshSettings::default(),
        })
    }

    pub fn with_uv_tile_size(mut self, size: f32) -> Self {
        self.mesh_settings.uv_tile_size = size;
        self
    }
}

impl Plugin for TerrainPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(self.heightfield.clone())
            .insert_resource(self.mesh_settings)
            .init_resource::<TerrainMotion>()
            .add_systems(Update, resample_terrain);
    }
}

/// Advances the heightfield by the frame delta and rebuilds tagged meshes
/// when the vertex buffer changed.
pub fn resample_terrain(
    time: Res<Time>,
    motion: Res<TerrainMotion>,
    settings: Res<TerrainMeshSettings>,
    mut heightfield: ResMut<Heightfield>,
    mut meshes: ResMut<Assets<Mesh>>,
    terrain: Query<&Mesh3d, With<TerrainMesh>>,
) {
    let outcome = heightfield.resample(time.delta_secs(), motion.0);
    if !outcome.changed() {
        return;
    }

    let builder = settings.builder();
    for handle in &terrain {
        let Some(mesh) = meshes.get_mut(&handle.0) else {
            continue;
        };
        *mesh = builder.build(heightfield.grid());
    }
}
