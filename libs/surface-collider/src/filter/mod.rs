//! # Triangle Filter
//!
//! Per-triangle stages of the pipeline and the settings that drive them.
//!
//! ## Stages
//!
//! 1. [`classify`] keeps a world-space triangle if its face normal lies
//!    within the slope cone around the up-axis and its area is large enough
//! 2. [`offset_and_transform`] pushes a kept triangle out along its normal
//!    by the skin offset and maps it into the reference frame
//!
//! ## Presets
//!
//! - [`FilterConfig::default`]: 35° slope, 0.002 skin, 0.01 minimum area
//! - [`FilterConfig::lite`]: 50° slope, 0.001 skin, no area filter

mod classify;
mod transform;


pub use classify::{classify, Classification, Rejection, Triangle, UP};
pub use transform::offset_and_transform;

use config::constants::{
    min_up_dot, DEFAULT_CONVEX_OUTPUT, DEFAULT_MAX_SLOPE_DEG, DEFAULT_MIN_TRIANGLE_AREA, DEFAULT_SKIN_OFFSET,
    INDEX_WIDTH_THRESHOLD, LITE_MAX_SLOPE_DEG, LITE_MIN_TRIANGLE_AREA, LITE_SKIN_OFFSET, MAX_SLOPE_DEG,
    MIN_SLOPE_DEG,
};
use serde::{Deserialize, Serialize};

use crate::error::{MeshError, MeshResult};

/// Settings for one surface collider build.
///
/// # Example
///
/// ```rust
/// use surface_collider::FilterConfig;
///
/// let config = FilterConfig::new(35.0, 0.0, 0.01)?;
/// assert!(config.min_up_dot() > 0.8);
/// assert!(FilterConfig::new(120.0, 0.0, 0.01).is_err());
/// # Ok::<(), surface_collider::MeshError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Steepest accepted face, in degrees from horizontal (0..=90)
    pub max_slope_deg: f64,
    /// Distance kept triangles are pushed along their normal (>= 0)
    pub skin_offset: f64,
    /// Smallest accepted triangle area (>= 0)
    pub min_triangle_area: f64,
    /// Advisory flag passed through to the output mesh
    pub convex_output: bool,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            max_slope_deg: DEFAULT_MAX_SLOPE_DEG,
            skin_offset: DEFAULT_SKIN_OFFSET,
            min_triangle_area: DEFAULT_MIN_TRIANGLE_AREA,
            convex_output: DEFAULT_CONVEX_OUTPUT,
        }
    }
}

impl FilterConfig {
    /// Creates a validated configuration with the convex flag off.
    pub fn new(max_slope_deg: f64, skin_offset: f64, min_triangle_area: f64) -> MeshResult<Self> {
        let config = Self {
            max_slope_deg,
            skin_offset,
            min_triangle_area,
            convex_output: DEFAULT_CONVEX_OUTPUT,
        };
        config.validate()?;
        Ok(config)
    }

    /// The fixed-threshold preset: steeper slopes, thinner skin, no area filter.
    pub fn lite() -> Self {
        Self {
            max_slope_deg: LITE_MAX_SLOPE_DEG,
            skin_offset: LITE_SKIN_OFFSET,
            min_triangle_area: LITE_MIN_TRIANGLE_AREA,
            convex_output: DEFAULT_CONVEX_OUTPUT,
        }
    }

    /// Returns a copy with the convex flag set.
    #[must_use]
    pub fn with_convex_output(mut self, convex: bool) -> Self {
        self.convex_output = convex;
        self
    }

    /// Checks every field against its allowed range.
    pub fn validate(&self) -> MeshResult<()> {
        if !(MIN_SLOPE_DEG..=MAX_SLOPE_DEG).contains(&self.max_slope_deg) {
            return Err(MeshError::invalid_config(format!(
                "max_slope_deg must be within {MIN_SLOPE_DEG}..={MAX_SLOPE_DEG}, got {}",
                self.max_slope_deg
            )));
        }
        if !self.skin_offset.is_finite() || self.skin_offset < 0.0 {
            return Err(MeshError::invalid_config(format!(
                "skin_offset must be finite and >= 0, got {}",
                self.skin_offset
            )));
        }
        if !self.min_triangle_area.is_finite() || self.min_triangle_area < 0.0 {
            return Err(MeshError::invalid_config(format!(
                "min_triangle_area must be finite and >= 0, got {}",
                self.min_triangle_area
            )));
        }
        Ok(())
    }

    /// Minimum dot product between a face normal and the up-axis.
    #[inline]
    pub fn min_up_dot(&self) -> f64 {
        min_up_dot(self.max_slope_deg)
    }

    /// Largest vertex count that keeps a narrow index buffer. Fixed.
    #[inline]
    pub const fn index_width_threshold(&self) -> usize {
        INDEX_WIDTH_THRESHOLD
    }
}
