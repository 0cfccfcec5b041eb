//! # Output Mesh
//!
//! The merged collision surface produced for one merge group, with its
//! bounding box and index-width decision.

use config::constants::{GENERATED_MESH_NAME, INDEX_WIDTH_THRESHOLD};
use glam::DVec3;
use serde::{Deserialize, Serialize};

// =============================================================================
// BOUNDS
// =============================================================================

/// An axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    /// Minimum corner
    pub min: DVec3,
    /// Maximum corner
    pub max: DVec3,
}

impl Aabb {
    /// Computes the bounding box of a set of points.
    ///
    /// Returns `None` when there are no points.
    pub fn from_points<'a>(points: impl IntoIterator<Item = &'a DVec3>) -> Option<Self> {
        let mut points = points.into_iter();
        let first = *points.next()?;
        let (min, max) = points.fold((first, first), |(min, max), p| (min.min(*p), max.max(*p)));
        Some(Self { min, max })
    }

    /// Returns the extent along each axis.
    #[inline]
    pub fn size(&self) -> DVec3 {
        self.max - self.min
    }

    /// Returns the center point.
    #[inline]
    pub fn center(&self) -> DVec3 {
        (self.min + self.max) * 0.5
    }

    /// Returns true if the point lies inside or on the box.
    pub fn contains(&self, point: DVec3) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }
}

// =============================================================================
// INDEX WIDTH
// =============================================================================

/// Integer width of the output index buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IndexWidth {
    /// 16-bit indices
    Narrow,
    /// 32-bit indices
    Wide,
}

impl IndexWidth {
    /// Picks the index width for a mesh with `vertex_count` vertices.
    ///
    /// # Example
    ///
    /// ```rust
    /// use surface_collider::IndexWidth;
    ///
    /// assert_eq!(IndexWidth::for_vertex_count(65_536), IndexWidth::Narrow);
    /// assert_eq!(IndexWidth::for_vertex_count(65_537), IndexWidth::Wide);
    /// ```
    #[inline]
    pub fn for_vertex_count(vertex_count: usize) -> Self {
        if vertex_count > INDEX_WIDTH_THRESHOLD {
            Self::Wide
        } else {
            Self::Narrow
        }
    }

    /// Returns the size of one index in bytes.
    #[inline]
    pub fn bytes(self) -> usize {
        match self {
            Self::Narrow => 2,
            Self::Wide => 4,
        }
    }
}

/// Flattened index buffer in the width chosen for the mesh.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexBuffer {
    /// 16-bit indices
    U16(Vec<u16>),
    /// 32-bit indices
    U32(Vec<u32>),
}

impl IndexBuffer {
    /// Returns the number of indices.
    pub fn len(&self) -> usize {
        match self {
            Self::U16(indices) => indices.len(),
            Self::U32(indices) => indices.len(),
        }
    }

    /// Returns true if the buffer holds no indices.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the width of the stored indices.
    pub fn width(&self) -> IndexWidth {
        match self {
            Self::U16(_) => IndexWidth::Narrow,
            Self::U32(_) => IndexWidth::Wide,
        }
    }
}

// =============================================================================
// OUTPUT MESH
// =============================================================================

/// A finalized collision surface.
///
/// Every triangle owns three vertices of its own; triangle `i` always
/// references vertices `3i`, `3i + 1` and `3i + 2`. Vertex positions are in
/// the coordinate space of the group's reference frame.
///
/// Produced only by [`MeshAccumulator::finalize`](crate::MeshAccumulator::finalize),
/// so it is never empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutputMesh {
    vertices: Vec<DVec3>,
    triangles: Vec<[u32; 3]>,
    index_width: IndexWidth,
    bounds: Aabb,
    convex: bool,
}

impl OutputMesh {
    /// Name stamped on every generated mesh.
    pub const NAME: &'static str = GENERATED_MESH_NAME;

    pub(crate) fn new(vertices: Vec<DVec3>, triangles: Vec<[u32; 3]>, bounds: Aabb, convex: bool) -> Self {
        let index_width = IndexWidth::for_vertex_count(vertices.len());
        Self {
            vertices,
            triangles,
            index_width,
            bounds,
            convex,
        }
    }

    /// Returns true if a host mesh with this name was generated by this crate
    /// and may be freed before attaching a replacement.
    ///
    /// # Example
    ///
    /// ```rust
    /// use surface_collider::OutputMesh;
    ///
    /// assert!(OutputMesh::is_generated_name("TopSurfaceCollider"));
    /// assert!(!OutputMesh::is_generated_name("Floor_LOD0"));
    /// ```
    pub fn is_generated_name(name: &str) -> bool {
        name == Self::NAME
    }

    /// Returns the mesh name.
    #[inline]
    pub fn name(&self) -> &'static str {
        Self::NAME
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Returns the vertex positions.
    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Returns the triangle index triples.
    #[inline]
    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    /// Returns the index width chosen at finalize.
    #[inline]
    pub fn index_width(&self) -> IndexWidth {
        self.index_width
    }

    /// Returns the axis-aligned bounding box of all vertices.
    #[inline]
    pub fn bounds(&self) -> Aabb {
        self.bounds
    }

    /// Returns the advisory convex flag for the host collider.
    #[inline]
    pub fn convex(&self) -> bool {
        self.convex
    }

    /// Exports vertices as f32 array for GPU / physics engines.
    ///
    /// Returns flattened [x, y, z, x, y, z, ...] array.
    pub fn vertices_f32(&self) -> Vec<f32> {
        self.vertices.iter().flat_map(|v| v.as_vec3().to_array()).collect()
    }

    /// Exports triangle indices as u32 array.
    ///
    /// Returns flattened [i0, i1, i2, i0, i1, i2, ...] array.
    pub fn indices_u32(&self) -> Vec<u32> {
        self.triangles.iter().flatten().copied().collect()
    }

    /// Exports triangle indices in the mesh's index width.
    #[allow(clippy::cast_possible_truncation)]
    pub fn index_buffer(&self) -> IndexBuffer {
        match self.index_width {
            // Narrow width guarantees every index fits in 16 bits
            IndexWidth::Narrow => IndexBuffer::U16(
                self.triangles.iter().flatten().map(|&i| i as u16).collect(),
            ),
            IndexWidth::Wide => IndexBuffer::U32(self.indices_u32()),
        }
    }
}
