//! # Mesh Accumulator
//!
//! Collects transformed triangles of one merge group and finalizes them
//! into an [`OutputMesh`].
//!
//! ## Example
//!
//! ```rust
//! use glam::DVec3;
//! use surface_collider::{BuildOutcome, MeshAccumulator};
//!
//! let mut acc = MeshAccumulator::new(false);
//! acc.add_triangle(DVec3::ZERO, DVec3::Z, DVec3::X)?;
//! let BuildOutcome::Mesh(mesh) = acc.finalize()? else { unreachable!() };
//! assert_eq!(mesh.triangles(), &[[0, 1, 2]]);
//! # Ok::<(), surface_collider::MeshError>(())
//! ```

use config::constants::MAX_VERTICES;
use glam::DVec3;

use crate::error::{MeshError, MeshResult};
use crate::mesh::{Aabb, OutputMesh};

/// Result of finalizing a merge group.
#[derive(Debug, Clone, PartialEq)]
pub enum BuildOutcome {
    /// At least one triangle survived filtering
    Mesh(OutputMesh),
    /// No geometry produced; not an error
    Empty,
}

impl BuildOutcome {
    /// Returns true if no geometry was produced.
    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Returns the mesh, if any.
    pub fn mesh(&self) -> Option<&OutputMesh> {
        match self {
            Self::Mesh(mesh) => Some(mesh),
            Self::Empty => None,
        }
    }

    /// Consumes the outcome, returning the mesh if any.
    pub fn into_mesh(self) -> Option<OutputMesh> {
        match self {
            Self::Mesh(mesh) => Some(mesh),
            Self::Empty => None,
        }
    }
}

/// Growing vertex and index buffers for one merge group.
///
/// Vertices are never shared: each triangle appends three fresh vertices.
/// The accumulator can be finalized exactly once.
#[derive(Debug, Clone)]
pub struct MeshAccumulator {
    vertices: Vec<DVec3>,
    triangles: Vec<[u32; 3]>,
    convex: bool,
    finalized: bool,
}

impl MeshAccumulator {
    /// Creates an empty accumulator. `convex` is passed through to the output.
    pub fn new(convex: bool) -> Self {
        Self::with_capacity(0, convex)
    }

    /// Creates an accumulator with room for `vertex_capacity` vertices.
    pub fn with_capacity(vertex_capacity: usize, convex: bool) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_capacity),
            triangles: Vec::with_capacity(vertex_capacity / 3),
            convex,
            finalized: false,
        }
    }

    /// Returns the number of vertices added so far.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of triangles added so far.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Returns true once [`finalize`](Self::finalize) has been called.
    #[inline]
    pub fn is_finalized(&self) -> bool {
        self.finalized
    }

    /// Appends a triangle as three new vertices and one index triple.
    ///
    /// The triple is `[n, n + 1, n + 2]` where `n` is the vertex count
    /// before the call.
    #[allow(clippy::cast_possible_truncation)]
    pub fn add_triangle(&mut self, q0: DVec3, q1: DVec3, q2: DVec3) -> MeshResult<()> {
        if self.finalized {
            return Err(MeshError::invalid_state("add_triangle called after finalize"));
        }

        let base = self.vertices.len();
        if base + 3 > MAX_VERTICES {
            return Err(MeshError::TooManyVertices {
                count: base + 3,
                max: MAX_VERTICES,
            });
        }

        // MAX_VERTICES keeps base + 2 within u32
        let base = base as u32;
        self.vertices.extend_from_slice(&[q0, q1, q2]);
        self.triangles.push([base, base + 1, base + 2]);
        Ok(())
    }

    /// Finishes the group.
    ///
    /// Returns [`BuildOutcome::Empty`] if nothing was added. Otherwise picks
    /// the index width, computes bounds and hands the buffers over to an
    /// [`OutputMesh`]. A second call fails with [`MeshError::InvalidState`].
    pub fn finalize(&mut self) -> MeshResult<BuildOutcome> {
        if self.finalized {
            return Err(MeshError::invalid_state("finalize called twice"));
        }
        self.finalized = true;

        let Some(bounds) = Aabb::from_points(&self.vertices) else {
            return Ok(BuildOutcome::Empty);
        };

        let vertices = std::mem::take(&mut self.vertices);
        let triangles = std::mem::take(&mut self.triangles);
        Ok(BuildOutcome::Mesh(OutputMesh::new(vertices, triangles, bounds, self.convex)))
    }
}
