//! # Group Builder
//!
//! Runs the classify → transform → accumulate pipeline over every triangle
//! of a merge group and reports what happened.
//!
//! Triangles are visited in mesh order, then index order, so identical
//! inputs always produce identical output buffers.

use std::fmt;

use config::constants::INITIAL_VERTEX_CAPACITY;
use tracing::{debug, info, warn};

use crate::accumulator::{BuildOutcome, MeshAccumulator};
use crate::error::{MeshError, MeshResult};
use crate::filter::{classify, offset_and_transform, Classification, FilterConfig, Rejection};
use crate::frame::ReferenceFrame;
use crate::source::SourceMesh;

// =============================================================================
// INPUT
// =============================================================================

/// All source meshes merged into one output mesh under one reference frame.
///
/// The meshes are borrowed; the caller is expected to have filtered them
/// down to the eligible ones already.
#[derive(Debug, Clone)]
pub struct MergeGroup<'a> {
    /// Diagnostic label, typically the host's root object name
    pub label: String,
    /// Output coordinate space
    pub frame: ReferenceFrame,
    /// Source meshes in processing order
    pub meshes: &'a [SourceMesh],
}

impl<'a> MergeGroup<'a> {
    /// Creates an unlabelled group.
    pub fn new(frame: ReferenceFrame, meshes: &'a [SourceMesh]) -> Self {
        Self {
            label: String::new(),
            frame,
            meshes,
        }
    }

    /// Sets the diagnostic label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }
}

// =============================================================================
// OUTPUT
// =============================================================================

/// Counters collected while building a group.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildStats {
    /// Readable meshes that were scanned
    pub meshes_processed: usize,
    /// Meshes skipped because they had no vertex or index data
    pub meshes_skipped: usize,
    /// Triangles classified
    pub triangles_examined: usize,
    /// Triangles written to the output
    pub triangles_kept: usize,
    /// Triangles with a zero-length normal
    pub rejected_degenerate: usize,
    /// Triangles outside the slope cone
    pub rejected_slope: usize,
    /// Triangles below the minimum area
    pub rejected_area: usize,
}

impl BuildStats {
    /// Total number of rejected triangles.
    #[inline]
    pub fn triangles_rejected(&self) -> usize {
        self.rejected_degenerate + self.rejected_slope + self.rejected_area
    }

    fn record_rejection(&mut self, reason: Rejection) {
        match reason {
            Rejection::Degenerate => self.rejected_degenerate += 1,
            Rejection::Slope => self.rejected_slope += 1,
            Rejection::Area => self.rejected_area += 1,
            // Escalated by the caller, never counted
            Rejection::NonFinite => {}
        }
    }
}

impl std::ops::AddAssign for BuildStats {
    fn add_assign(&mut self, other: Self) {
        self.meshes_processed += other.meshes_processed;
        self.meshes_skipped += other.meshes_skipped;
        self.triangles_examined += other.triangles_examined;
        self.triangles_kept += other.triangles_kept;
        self.rejected_degenerate += other.rejected_degenerate;
        self.rejected_slope += other.rejected_slope;
        self.rejected_area += other.rejected_area;
    }
}

impl fmt::Display for BuildStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} of {} triangles kept ({} slope, {} area, {} degenerate rejected), {} mesh(es) scanned, {} skipped",
            self.triangles_kept,
            self.triangles_examined,
            self.rejected_slope,
            self.rejected_area,
            self.rejected_degenerate,
            self.meshes_processed,
            self.meshes_skipped
        )
    }
}

/// Output of one merge group.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupResult {
    /// The merged mesh, or `Empty`
    pub outcome: BuildOutcome,
    /// Counters for reporting
    pub stats: BuildStats,
}

// =============================================================================
// PUBLIC API
// =============================================================================

/// Builds the collision surface of one merge group.
///
/// ## Parameters
///
/// - `group`: reference frame and source meshes
/// - `config`: filter settings, validated before any work is done
///
/// ## Returns
///
/// The merged mesh (or `Empty`) with counters. Unreadable meshes and
/// degenerate triangles are skipped and counted. Non-finite geometry,
/// invalid configuration and vertex overflow are errors.
///
/// ## Example
///
/// ```rust
/// use glam::{DAffine3, DVec3};
/// use surface_collider::{build_group, FilterConfig, MergeGroup, ReferenceFrame, SourceMesh};
///
/// let floor = SourceMesh::new(
///     vec![DVec3::ZERO, DVec3::X, DVec3::new(1.0, 0.0, 1.0), DVec3::Z],
///     vec![[0, 2, 1], [0, 3, 2]],
///     DAffine3::IDENTITY,
/// )?;
/// let meshes = [floor];
/// let group = MergeGroup::new(ReferenceFrame::identity(), &meshes);
///
/// let result = build_group(&group, &FilterConfig::default())?;
/// assert_eq!(result.stats.triangles_kept, 2);
/// assert_eq!(result.outcome.mesh().map(|m| m.vertex_count()), Some(6));
/// # Ok::<(), surface_collider::MeshError>(())
/// ```
pub fn build_group(group: &MergeGroup<'_>, config: &FilterConfig) -> MeshResult<GroupResult> {
    config.validate()?;
    build_validated(group, config)
}

/// Builds several independent merge groups, returning results in group order.
///
/// With the `parallel` feature the groups are spread over the rayon thread
/// pool; each group still has its own accumulator and is processed in input
/// order. The first error aborts the batch.
pub fn build_groups(groups: &[MergeGroup<'_>], config: &FilterConfig) -> MeshResult<Vec<GroupResult>> {
    config.validate()?;

    #[cfg(feature = "parallel")]
    let results = {
        use rayon::prelude::*;
        groups
            .par_iter()
            .map(|group| build_validated(group, config))
            .collect::<MeshResult<Vec<_>>>()?
    };

    #[cfg(not(feature = "parallel"))]
    let results = groups
        .iter()
        .map(|group| build_validated(group, config))
        .collect::<MeshResult<Vec<_>>>()?;

    let mut total = BuildStats::default();
    for result in &results {
        total += result.stats;
    }
    info!(groups = results.len(), %total, "Surface collider batch finished");

    Ok(results)
}

// =============================================================================
// PIPELINE
// =============================================================================

fn build_validated(group: &MergeGroup<'_>, config: &FilterConfig) -> MeshResult<GroupResult> {
    let cos_max_slope = config.min_up_dot();
    let world_to_reference = group.frame.world_to_reference();
    let mut accumulator = MeshAccumulator::with_capacity(INITIAL_VERTEX_CAPACITY, config.convex_output);
    let mut stats = BuildStats::default();

    for (mesh_index, mesh) in group.meshes.iter().enumerate() {
        if !mesh.is_readable() {
            debug!(
                group = %group.label,
                mesh = mesh_index,
                name = mesh.name(),
                "Skipping source mesh without vertex or index data"
            );
            stats.meshes_skipped += 1;
            continue;
        }
        stats.meshes_processed += 1;

        let kept_before = stats.triangles_kept;
        for (triangle_index, [w0, w1, w2]) in mesh.world_triangles().enumerate() {
            stats.triangles_examined += 1;

            match classify(w0, w1, w2, cos_max_slope, config.min_triangle_area) {
                Classification::Accepted(triangle) => {
                    let [q0, q1, q2] = offset_and_transform(
                        &triangle.positions,
                        triangle.normal,
                        config.skin_offset,
                        world_to_reference,
                    );
                    accumulator.add_triangle(q0, q1, q2)?;
                    stats.triangles_kept += 1;
                }
                Classification::Rejected(Rejection::NonFinite) => {
                    return Err(MeshError::non_finite(format!(
                        "triangle {triangle_index} of mesh {mesh_index} '{}' in group '{}'",
                        mesh.name(),
                        group.label
                    )));
                }
                Classification::Rejected(reason) => stats.record_rejection(reason),
            }
        }

        debug!(
            group = %group.label,
            mesh = mesh_index,
            name = mesh.name(),
            triangles = mesh.triangle_count(),
            kept = stats.triangles_kept - kept_before,
            "Scanned source mesh"
        );
    }

    let outcome = accumulator.finalize()?;
    match &outcome {
        BuildOutcome::Mesh(mesh) => info!(
            group = %group.label,
            examined = stats.triangles_examined,
            kept = stats.triangles_kept,
            vertices = mesh.vertex_count(),
            index_width = ?mesh.index_width(),
            "Built surface collider"
        ),
        BuildOutcome::Empty => warn!(
            group = %group.label,
            examined = stats.triangles_examined,
            "No triangles passed the surface filter"
        ),
    }

    Ok(GroupResult { outcome, stats })
}
