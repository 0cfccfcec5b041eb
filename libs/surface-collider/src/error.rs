//! # Mesh Errors
//!
//! Error types for surface collider generation.
//!
//! ## Error Policy
//!
//! - Degenerate triangles and unreadable source meshes are expected input and
//!   never surface here; they are skipped and counted in the build stats
//! - Everything in this enum is a precondition violation or misuse and is
//!   returned to the caller immediately, with no fallback

use thiserror::Error;

/// Errors that can occur while building a surface collider.
#[derive(Debug, Error)]
pub enum MeshError {
    /// Filter settings out of range
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// What went wrong
        message: String,
    },

    /// Non-finite, singular or non-affine transform
    #[error("Invalid transform: {message}")]
    InvalidTransform {
        /// What went wrong
        message: String,
    },

    /// Invalid mesh topology (index out of range, ragged index buffer)
    #[error("Invalid topology: {message}")]
    InvalidTopology {
        /// What went wrong
        message: String,
    },

    /// Geometry evaluated to NaN or infinity
    #[error("Non-finite geometry: {message}")]
    NonFiniteGeometry {
        /// What went wrong
        message: String,
    },

    /// Accumulator used after it was finalized
    #[error("Invalid state: {message}")]
    InvalidState {
        /// What went wrong
        message: String,
    },

    /// Too many vertices for a 32-bit index buffer
    #[error("Too many vertices: {count} (max: {max})")]
    TooManyVertices {
        /// Vertex count that was requested
        count: usize,
        /// Largest supported vertex count
        max: usize,
    },
}

impl MeshError {
    /// Creates an invalid configuration error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Creates an invalid transform error.
    pub fn invalid_transform(message: impl Into<String>) -> Self {
        Self::InvalidTransform {
            message: message.into(),
        }
    }

    /// Creates an invalid topology error.
    pub fn invalid_topology(message: impl Into<String>) -> Self {
        Self::InvalidTopology {
            message: message.into(),
        }
    }

    /// Creates a non-finite geometry error.
    pub fn non_finite(message: impl Into<String>) -> Self {
        Self::NonFiniteGeometry {
            message: message.into(),
        }
    }

    /// Creates an invalid state error.
    pub fn invalid_state(message: impl Into<String>) -> Self {
        Self::InvalidState {
            message: message.into(),
        }
    }
}

/// Result type alias for surface collider operations.
///
/// ## Example
///
/// ```rust
/// use surface_collider::error::MeshResult;
/// use surface_collider::FilterConfig;
///
/// fn walkable_config() -> MeshResult<FilterConfig> {
///     FilterConfig::new(40.0, 0.002, 0.01)
/// }
/// # assert!(walkable_config().is_ok());
/// ```
pub type MeshResult<T> = Result<T, MeshError>;
