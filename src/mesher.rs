//! Mesh generation from [`Grid`] data.
//!
//! Converts a [`Grid`] into a Bevy [`Mesh`] with:
//! - `TriangleList` topology
//! - Smooth per-vertex normals (area-weighted average of adjacent face normals)
//! - Tiling UV coordinates (world-space scaled by `uv_tile_size`)
//!
//! Bevy derives the mesh AABB from the position attribute, so no bounding
//! volume is computed here.

use bevy::asset::RenderAssetUsages;
use bevy::mesh::{Indices, PrimitiveTopology};
use bevy::prelude::*;

use crate::grid::Grid;

/// Converts a [`Grid`] into a Bevy [`Mesh`].
///
/// Positions are copied from the grid as-is, so the mesh is centred on the
/// origin in the XZ plane with heights along Y. Per-vertex normals are
/// computed from the triangles: each face's unnormalized cross product
/// (proportional to its area) is accumulated at its three corners, then
/// normalized.
///
/// # UV Mapping
///
/// UVs are world-space coordinates divided by `uv_tile_size`:
/// `u = x / uv_tile_size`, `v = z / uv_tile_size`.
///
/// # Example
///
/// ```ignore
/// use bevy_scrolling_terrain::{Grid, GridMeshBuilder};
///
/// let grid = Grid::new(64.0, 64.0, 1.0);
/// let mesh = GridMeshBuilder::new()
///     .with_uv_tile_size(4.0)
///     .build(&grid);
/// ```
pub struct GridMeshBuilder {
    uv_tile_size: f32,
}

impl Default for GridMeshBuilder {
    fn default() -> Self {
        Self { uv_tile_size: 1.0 }
    }
}

impl GridMeshBuilder {
    /// Creates a new builder with default settings (`uv_tile_size = 1.0`).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the world-space size of one UV tile.
    ///
    /// Clamped to a positive minimum to avoid division by zero.
    pub fn with_uv_tile_size(mut self, size: f32) -> Self {
        self.uv_tile_size = size.max(f32::EPSILON);
        self
    }

    /// Builds the mesh from the given grid.
    ///
    /// Produces a `TriangleList` mesh with positions, normals, and UV_0.
    /// A grid with a single row or column yields vertices but no triangles;
    /// its normals all point up.
    pub fn build(&self, grid: &Grid) -> Mesh {
        let w = grid.columns();
        let h = grid.rows();

        let positions: Vec<[f32; 3]> = grid.vertices().to_vec();
        let uvs: Vec<[f32; 2]> = positions
            .iter()
            .map(|p| [p[0] / self.uv_tile_size, p[2] / self.uv_tile_size])
            .collect();

        // Build CCW triangle indices (normal pointing +Y when terrain is flat).
        // Rows advance along +Z, columns along +X:
        //   tl──tr
        //   │╲  │     Triangle 1: tl, bl, tr
        //   │ ╲ │     Triangle 2: tr, bl, br
        //   bl──br
        let quad_count = w.saturating_sub(1) * h.saturating_sub(1);
        let mut indices: Vec<u32> = Vec::with_capacity(quad_count * 6);

        for z in 0..h.saturating_sub(1) {
            for x in 0..w.saturating_sub(1) {
                let tl = (z * w + x) as u32;
                let tr = (z * w + x + 1) as u32;
                let bl = ((z + 1) * w + x) as u32;
                let br = ((z + 1) * w + x + 1) as u32;

                indices.extend_from_slice(&[tl, bl, tr]);
                indices.extend_from_slice(&[tr, bl, br]);
            }
        }

        let normals = area_weighted_normals(&positions, &indices);

        let mut mesh = Mesh::new(
            PrimitiveTopology::TriangleList,
            RenderAssetUsages::default(),
        );
        mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
        mesh.insert_attribute(Mesh::ATTRIBUTE_NORMAL, normals);
        mesh.insert_attribute(Mesh::ATTRIBUTE_UV_0, uvs);
        mesh.insert_indices(Indices::U32(indices));
        mesh
    }
}

fn area_weighted_normals(positions: &[[f32; 3]], indices: &[u32]) -> Vec<[f32; 3]> {
    let mut normals: Vec<Vec3> = vec![Vec3::ZERO; positions.len()];

    for tri in indices.chunks_exact(3) {
        let [i0, i1, i2] = [tri[0] as usize, tri[1] as usize, tri[2] as usize];
        let p0 = Vec3::from(positions[i0]);
        let p1 = Vec3::from(positions[i1]);
        let p2 = Vec3::from(positions[i2]);
        let face_normal = (p1 - p0).cross(p2 - p0);
        normals[i0] += face_normal;
        normals[i1] += face_normal;
        normals[i2] += face_normal;
    }

    normals
        .iter()
        .map(|n| {
            let len = n.length();
            // Degenerate vertex (zero contributions): default to +Y.
            if len > f32::EPSILON { (*n / len).into() } else { [0.0, 1.0, 0.0] }
        })
        .collect()
}
