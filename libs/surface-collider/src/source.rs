//! # Source Meshes
//!
//! Read-only render geometry handed over by the host: local vertex
//! positions, triangle indices, optional per-triangle normals and the
//! transform that places the mesh in world space.

use std::borrow::Cow;

use glam::{DAffine3, DMat4, DVec3};

use crate::error::{MeshError, MeshResult};
use crate::frame::new_affine;

/// A triangle mesh owned by the caller.
///
/// Index triples are checked against the vertex count at construction, so
/// every triangle of a `SourceMesh` can be resolved.
///
/// A mesh without vertices or without triangles is still constructible; it
/// is reported as unreadable and skipped by the group builder.
///
/// # Example
///
/// ```rust
/// use glam::{DAffine3, DVec3};
/// use surface_collider::SourceMesh;
///
/// let mesh = SourceMesh::new(
///     vec![DVec3::ZERO, DVec3::Z, DVec3::X],
///     vec![[0, 1, 2]],
///     DAffine3::IDENTITY,
/// )?;
/// assert!(mesh.is_readable());
/// assert_eq!(mesh.triangle_count(), 1);
/// # Ok::<(), surface_collider::MeshError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SourceMesh {
    name: String,
    vertices: Vec<DVec3>,
    triangles: Vec<[u32; 3]>,
    normals: Option<Vec<DVec3>>,
    local_to_world: DAffine3,
}

impl SourceMesh {
    /// Creates a source mesh from index triples.
    pub fn new(vertices: Vec<DVec3>, triangles: Vec<[u32; 3]>, local_to_world: DAffine3) -> MeshResult<Self> {
        if !local_to_world.is_finite() {
            return Err(MeshError::invalid_transform("local-to-world transform is not finite"));
        }

        let vertex_count = vertices.len();
        if let Some((index, tri)) = triangles
            .iter()
            .enumerate()
            .find(|(_, tri)| tri.iter().any(|&i| i as usize >= vertex_count))
        {
            return Err(MeshError::invalid_topology(format!(
                "triangle {index} {tri:?} references a vertex outside 0..{vertex_count}"
            )));
        }

        Ok(Self {
            name: String::new(),
            vertices,
            triangles,
            normals: None,
            local_to_world,
        })
    }

    /// Creates a source mesh from a flat index buffer `[i0, i1, i2, ...]`.
    pub fn from_indices(vertices: Vec<DVec3>, indices: &[u32], local_to_world: DAffine3) -> MeshResult<Self> {
        if indices.len() % 3 != 0 {
            return Err(MeshError::invalid_topology(format!(
                "index buffer length {} is not a multiple of 3",
                indices.len()
            )));
        }
        let triangles = indices.chunks_exact(3).map(|c| [c[0], c[1], c[2]]).collect();
        Self::new(vertices, triangles, local_to_world)
    }

    /// Creates a source mesh whose transform is given as a 4x4 matrix.
    pub fn with_matrix(vertices: Vec<DVec3>, triangles: Vec<[u32; 3]>, local_to_world: DMat4) -> MeshResult<Self> {
        Self::new(vertices, triangles, new_affine(local_to_world)?)
    }

    /// Attaches per-triangle normals (local space, one per triangle).
    pub fn with_normals(mut self, normals: Vec<DVec3>) -> MeshResult<Self> {
        if normals.len() != self.triangles.len() {
            return Err(MeshError::invalid_topology(format!(
                "{} normals for {} triangles",
                normals.len(),
                self.triangles.len()
            )));
        }
        self.normals = Some(normals);
        Ok(self)
    }

    /// Sets a name used in diagnostics.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Returns the diagnostic name (empty if none was set).
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the local vertex positions.
    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Returns the triangle index triples.
    #[inline]
    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Returns the stored per-triangle normals, if any.
    #[inline]
    pub fn normals(&self) -> Option<&[DVec3]> {
        self.normals.as_deref()
    }

    /// Returns the local-to-world transform.
    #[inline]
    pub fn local_to_world(&self) -> &DAffine3 {
        &self.local_to_world
    }

    /// Returns true if the mesh has both vertex and index data.
    #[inline]
    pub fn is_readable(&self) -> bool {
        !self.vertices.is_empty() && !self.triangles.is_empty()
    }

    /// Returns per-triangle normals in local space.
    ///
    /// Uses the stored normals when present, otherwise computes them from the
    /// triangle winding. Computed normals are not cached. Degenerate
    /// triangles get a zero normal.
    pub fn face_normals(&self) -> Cow<'_, [DVec3]> {
        match &self.normals {
            Some(normals) => Cow::Borrowed(normals),
            None => Cow::Owned(
                self.triangles
                    .iter()
                    .map(|tri| {
                        let [v0, v1, v2] = tri.map(|i| self.vertices[i as usize]);
                        (v1 - v0).cross(v2 - v0).normalize_or_zero()
                    })
                    .collect(),
            ),
        }
    }

    /// Iterates the triangles with their vertices mapped to world space, in
    /// index order.
    pub fn world_triangles(&self) -> impl Iterator<Item = [DVec3; 3]> + '_ {
        self.triangles
            .iter()
            .map(move |tri| tri.map(|i| self.local_to_world.transform_point3(self.vertices[i as usize])))
    }
}
