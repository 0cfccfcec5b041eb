//! Slope and area classification of world-space triangles.

use config::constants::WORLD_UP;
use glam::DVec3;

/// The ambient up-axis.
pub const UP: DVec3 = DVec3::new(WORLD_UP[0], WORLD_UP[1], WORLD_UP[2]);

/// A triangle that passed classification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    /// World-space corners, in source winding order
    pub positions: [DVec3; 3],
    /// Unit face normal
    pub normal: DVec3,
    /// Surface area
    pub area: f64,
    /// Dot product of the normal with [`UP`]
    pub up_dot: f64,
}

/// Why a triangle was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rejection {
    /// Zero-length edge cross product, no normal exists
    Degenerate,
    /// Cross product or its length is NaN or infinite
    NonFinite,
    /// Face normal is outside the slope cone
    Slope,
    /// Area below the minimum
    Area,
}

/// Outcome of [`classify`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Classification {
    /// Both predicates hold
    Accepted(Triangle),
    /// At least one predicate failed
    Rejected(Rejection),
}

impl Classification {
    /// Returns true for [`Classification::Accepted`].
    #[inline]
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }
}

/// Classifies a world-space triangle.
///
/// The normal is `normalize((p1 - p0) × (p2 - p0))`. The triangle is kept iff
/// `normal · UP >= cos_max_slope` and `area >= min_area`; both bounds are
/// inclusive. Zero-length cross products are rejected before normalizing,
/// and a cross product whose length overflows is reported as
/// [`Rejection::NonFinite`] rather than normalized to zero.
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use surface_collider::filter::{classify, Rejection, Classification};
///
/// let floor = classify(DVec3::ZERO, DVec3::Z, DVec3::X, 0.8, 0.0);
/// assert!(floor.is_accepted());
///
/// let ceiling = classify(DVec3::ZERO, DVec3::X, DVec3::Z, 0.8, 0.0);
/// assert_eq!(ceiling, Classification::Rejected(Rejection::Slope));
/// ```
pub fn classify(p0: DVec3, p1: DVec3, p2: DVec3, cos_max_slope: f64, min_area: f64) -> Classification {
    let cross = (p1 - p0).cross(p2 - p0);
    if !cross.is_finite() {
        return Classification::Rejected(Rejection::NonFinite);
    }

    let length = cross.length();
    if !length.is_finite() {
        return Classification::Rejected(Rejection::NonFinite);
    }
    if length == 0.0 {
        return Classification::Rejected(Rejection::Degenerate);
    }

    let normal = cross / length;
    let up_dot = normal.dot(UP);
    if up_dot < cos_max_slope {
        return Classification::Rejected(Rejection::Slope);
    }

    let area = 0.5 * length;
    if area < min_area {
        return Classification::Rejected(Rejection::Area);
    }

    Classification::Accepted(Triangle {
        positions: [p0, p1, p2],
        normal,
        area,
        up_dot,
    })
}
