//! Skin offset and reference-frame mapping of kept triangles.

use glam::{DAffine3, DVec3};

/// Pushes each corner `skin` units along `normal`, then maps it into the
/// reference frame as a point (translation applies).
///
/// # Example
///
/// ```rust
/// use glam::{DAffine3, DVec3};
/// use surface_collider::filter::offset_and_transform;
///
/// let q = offset_and_transform(&[DVec3::ZERO, DVec3::Z, DVec3::X], DVec3::Y, 0.5, &DAffine3::IDENTITY);
/// assert_eq!(q[0], DVec3::new(0.0, 0.5, 0.0));
/// ```
pub fn offset_and_transform(
    positions: &[DVec3; 3],
    normal: DVec3,
    skin: f64,
    world_to_reference: &DAffine3,
) -> [DVec3; 3] {
    let offset = normal * skin;
    positions.map(|p| world_to_reference.transform_point3(p + offset))
}
