//! Regular vertex lattice sampled by the synthesizer.

/// Rectangular grid of vertices centred on the origin in the XZ plane.
///
/// Columns run along X and cover `length` world units; rows run along Z and
/// cover `width`. The number of vertices on each axis is
/// `floor(max(extent, 1) * resolution)`, never less than one. Vertices are
/// stored row-major (`row * columns + col`) as `[x, y, z]` triples so the
/// buffer can be handed straight to a mesh attribute.
///
/// A grid has a fixed layout: changing its extent or resolution means
/// building a new one.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    length: f32,
    width: f32,
    resolution: f32,
    columns: usize,
    rows: usize,
    vertices: Vec<[f32; 3]>,
}

impl Grid {
    /// Builds a flat grid (all heights zero).
    pub fn new(length: f32, width: f32, resolution: f32) -> Self {
        let columns = axis_count(length, resolution);
        let rows = axis_count(width, resolution);

        let mut vertices = Vec::with_capacity(columns * rows);
        for row in 0..rows {
            let z = axis_position(row, rows, width);
            for col in 0..columns {
                let x = axis_position(col, columns, length);
                vertices.push([x, 0.0, z]);
            }
        }

        Self {
            length,
            width,
            resolution,
            columns,
            rows,
            vertices,
        }
    }

    /// Builds a grid at a level of detail, flooring the density so that both
    /// axes keep at least one vertex per extent.
    pub fn at_lod(length: f32, width: f32, lod: u32) -> Self {
        Self::new(length, width, effective_resolution(length, width, lod))
    }

    pub fn length(&self) -> f32 {
        self.length
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    /// Vertices per world unit.
    pub fn resolution(&self) -> f32 {
        self.resolution
    }

    /// Vertex count along X.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Vertex count along Z.
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn vertices(&self) -> &[[f32; 3]] {
        &self.vertices
    }

    pub fn vertices_mut(&mut self) -> &mut [[f32; 3]] {
        &mut self.vertices
    }

    /// Height of the vertex at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if the index lies outside the grid.
    pub fn height(&self, row: usize, col: usize) -> f32 {
        self.vertices[self.index(row, col)][1]
    }

    /// # Panics
    ///
    /// Panics if the index lies outside the grid.
    pub fn set_height(&mut self, row: usize, col: usize, height: f32) {
        let i = self.index(row, col);
        self.vertices[i][1] = height;
    }

    /// Lowest and highest vertex height, or `None` for an all-NaN grid.
    pub fn height_range(&self) -> Option<(f32, f32)> {
        self.vertices
            .iter()
            .map(|v| v[1])
            .filter(|y| !y.is_nan())
            .fold(None, |acc, y| match acc {
                None => Some((y, y)),
                Some((lo, hi)) => Some((lo.min(y), hi.max(y))),
            })
    }

    fn index(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.rows && col < self.columns,
            "grid index ({row}, {col}) out of bounds for {}x{} grid",
            self.rows,
            self.columns
        );
        row * self.columns + col
    }
}

/// `max(1/width, 1/length, lod)`: the density a grid is built at for `lod`.
pub fn effective_resolution(length: f32, width: f32, lod: u32) -> f32 {
    (1.0 / width).max(1.0 / length).max(lod as f32)
}

fn axis_count(extent: f32, resolution: f32) -> usize {
    let n = (extent.max(1.0) * resolution).floor();
    // NaN, infinite and negative products collapse to a single vertex
    if n.is_finite() && n >= 1.0 { n as usize } else { 1 }
}

fn axis_position(i: usize, count: usize, extent: f32) -> f32 {
    if count < 2 {
        return 0.0;
    }
    -extent / 2.0 + extent * i as f32 / (count - 1) as f32
}
