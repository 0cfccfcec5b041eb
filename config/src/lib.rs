//! # Config Crate
//!
//! Centralized configuration constants for the surface collider pipeline.
//! All magic numbers and tunable defaults are defined here so the filter,
//! the accumulator and any host integration agree on them.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{min_up_dot, DEFAULT_MAX_SLOPE_DEG, INDEX_WIDTH_THRESHOLD};
//!
//! // Slope limit as the minimum dot product with the up-axis
//! let threshold = min_up_dot(DEFAULT_MAX_SLOPE_DEG);
//! assert!(threshold > 0.0 && threshold < 1.0);
//!
//! // Index width decision
//! let vertex_count = 1024;
//! assert!(vertex_count <= INDEX_WIDTH_THRESHOLD);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Engine Compatible**: Defaults match the editor tool the presets come from
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;
