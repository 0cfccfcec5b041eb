//! # Surface Collider
//!
//! Derives a walkable collision surface from render meshes.
//! Every triangle of the source meshes is tested against a slope cone
//! around the up-axis and a minimum area; survivors are pushed out by a thin
//! skin and merged into one mesh per reference frame.
//!
//! ## Architecture
//!
//! ```text
//! SourceMesh (local) ──local_to_world──► classify ──► offset_and_transform ──► MeshAccumulator
//!                                        (world)      (world → reference)      (finalize → OutputMesh | Empty)
//! ```
//!
//! The host owns scene traversal, eligibility checks (layers, disabled or
//! unreadable objects), attaching the result to a collider, undo and
//! user-facing reporting. This crate only reads the meshes it is given.
//!
//! ## Features
//!
//! - `parallel`: [`build_groups`] spreads independent merge groups over the
//!   rayon thread pool. Results keep group order either way. Its tests run
//!   with `cargo test -p surface-collider --features parallel`.
//!
//! ## Usage
//!
//! ```rust
//! use glam::{DAffine3, DVec3};
//! use surface_collider::{build_group, FilterConfig, IndexWidth, MergeGroup, ReferenceFrame, SourceMesh};
//!
//! // Unit square on the XZ plane, facing +Y
//! let square = SourceMesh::from_indices(
//!     vec![DVec3::ZERO, DVec3::X, DVec3::new(1.0, 0.0, 1.0), DVec3::Z],
//!     &[0, 2, 1, 0, 3, 2],
//!     DAffine3::IDENTITY,
//! )?;
//! let meshes = [square];
//! let group = MergeGroup::new(ReferenceFrame::identity(), &meshes).with_label("Floor");
//!
//! let result = build_group(&group, &FilterConfig::default())?;
//! let mesh = result.outcome.mesh().expect("square faces up");
//! assert_eq!(mesh.triangle_count(), 2);
//! assert_eq!(mesh.index_width(), IndexWidth::Narrow);
//! # Ok::<(), surface_collider::MeshError>(())
//! ```

pub mod accumulator;
pub mod builder;
pub mod error;
pub mod filter;
pub mod frame;
pub mod mesh;
pub mod source;

pub use accumulator::{BuildOutcome, MeshAccumulator};
pub use builder::{build_group, build_groups, BuildStats, GroupResult, MergeGroup};
pub use error::{MeshError, MeshResult};
pub use filter::FilterConfig;
pub use frame::ReferenceFrame;
pub use mesh::{Aabb, IndexBuffer, IndexWidth, OutputMesh};
pub use source::SourceMesh;
