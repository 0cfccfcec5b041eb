//! # Configuration Constants
//!
//! Centralized constants for the surface collider pipeline. Filter defaults,
//! parameter bounds, index-width limits and precision values are defined here.
//!
//! ## Categories
//!
//! - **Precision**: Invertibility tolerance for reference frames
//! - **Orientation**: The ambient up-axis used by the slope filter
//! - **Filter Defaults**: Standard and lite presets for slope, skin and area
//! - **Limits**: Parameter bounds and index buffer limits

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Minimum absolute determinant for a reference frame to count as invertible.
///
/// Frames closer to singular than this are rejected.
///
/// # Example
///
/// ```rust
/// use config::constants::MIN_FRAME_DETERMINANT;
///
/// let squashed: f64 = 1e-6 * 1e-6 * 1.0;
/// assert!(squashed.abs() < MIN_FRAME_DETERMINANT);
/// ```
pub const MIN_FRAME_DETERMINANT: f64 = 1e-10;

// =============================================================================
// ORIENTATION CONSTANTS
// =============================================================================

/// The ambient up-axis, +Y.
///
/// Face normals are compared against this axis in world space to decide
/// whether a triangle is walkable.
///
/// # Example
///
/// ```rust
/// use config::constants::WORLD_UP;
///
/// let len = (WORLD_UP[0].powi(2) + WORLD_UP[1].powi(2) + WORLD_UP[2].powi(2)).sqrt();
/// assert_eq!(len, 1.0);
/// ```
pub const WORLD_UP: [f64; 3] = [0.0, 1.0, 0.0];

// =============================================================================
// FILTER DEFAULTS
// =============================================================================

/// Default maximum slope in degrees for a walkable triangle.
pub const DEFAULT_MAX_SLOPE_DEG: f64 = 35.0;

/// Default skin offset in world units.
///
/// Kept triangles are pushed this far along their face normal so the
/// generated surface never coincides with the render geometry.
pub const DEFAULT_SKIN_OFFSET: f64 = 0.002;

/// Default minimum triangle area in square world units.
///
/// Smaller triangles are treated as noise.
pub const DEFAULT_MIN_TRIANGLE_AREA: f64 = 0.01;

/// Default for the advisory convex flag carried on the output.
///
/// Level geometry is generally non-convex.
pub const DEFAULT_CONVEX_OUTPUT: bool = false;

/// Maximum slope of the lite preset, in degrees.
pub const LITE_MAX_SLOPE_DEG: f64 = 50.0;

/// Skin offset of the lite preset, in world units.
pub const LITE_SKIN_OFFSET: f64 = 0.001;

/// Minimum triangle area of the lite preset. The lite preset filters on
/// slope only.
pub const LITE_MIN_TRIANGLE_AREA: f64 = 0.0;

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Smallest accepted value for the maximum slope, in degrees.
pub const MIN_SLOPE_DEG: f64 = 0.0;

/// Largest accepted value for the maximum slope, in degrees.
///
/// # Example
///
/// ```rust
/// use config::constants::{DEFAULT_MAX_SLOPE_DEG, MAX_SLOPE_DEG, MIN_SLOPE_DEG};
///
/// assert!((MIN_SLOPE_DEG..=MAX_SLOPE_DEG).contains(&DEFAULT_MAX_SLOPE_DEG));
/// ```
pub const MAX_SLOPE_DEG: f64 = 90.0;

/// Largest vertex count that still uses a narrow (16-bit) index buffer.
///
/// Output meshes with more vertices than this switch to 32-bit indices.
///
/// # Example
///
/// ```rust
/// use config::constants::INDEX_WIDTH_THRESHOLD;
///
/// let vertex_count = 70_000;
/// let wide = vertex_count > INDEX_WIDTH_THRESHOLD;
/// assert!(wide);
/// ```
pub const INDEX_WIDTH_THRESHOLD: usize = 65_536;

/// Maximum number of vertices in a single output mesh.
///
/// Bounded by what a 32-bit index buffer can address.
///
/// # Example
///
/// ```rust
/// use config::constants::{INDEX_WIDTH_THRESHOLD, MAX_VERTICES};
///
/// assert!(MAX_VERTICES > INDEX_WIDTH_THRESHOLD);
/// ```
pub const MAX_VERTICES: usize = u32::MAX as usize;

/// Initial vertex capacity reserved per merge group.
pub const INITIAL_VERTEX_CAPACITY: usize = 4096;

// =============================================================================
// OUTPUT CONSTANTS
// =============================================================================

/// Name stamped on every generated mesh.
///
/// Hosts compare against this to recognise meshes they generated earlier
/// and may safely free before attaching a replacement.
pub const GENERATED_MESH_NAME: &str = "TopSurfaceCollider";

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Converts a maximum slope in degrees into the minimum up-dot a face normal
/// must reach.
///
/// # Example
///
/// ```rust
/// use config::constants::min_up_dot;
///
/// assert_eq!(min_up_dot(0.0), 1.0);
/// assert!(min_up_dot(90.0).abs() < 1e-15);
/// ```
#[inline]
pub fn min_up_dot(max_slope_deg: f64) -> f64 {
    max_slope_deg.to_radians().cos()
}
