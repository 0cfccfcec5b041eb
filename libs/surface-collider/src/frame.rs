//! # Reference Frame
//!
//! The output coordinate space of one merge group.

use config::constants::MIN_FRAME_DETERMINANT;
use glam::{DAffine3, DMat4, DVec4};

use crate::error::{MeshError, MeshResult};

/// An affine frame (reference-to-world) together with its inverse.
///
/// Output vertices of a merge group are expressed in this frame, whatever
/// local transforms the source meshes carried.
///
/// # Example
///
/// ```rust
/// use glam::{DAffine3, DVec3};
/// use surface_collider::ReferenceFrame;
///
/// let frame = ReferenceFrame::new(DAffine3::from_translation(DVec3::new(10.0, 0.0, 0.0)))?;
/// let local = frame.world_to_reference().transform_point3(DVec3::new(10.0, 1.0, 0.0));
/// assert_eq!(local, DVec3::new(0.0, 1.0, 0.0));
/// # Ok::<(), surface_collider::MeshError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferenceFrame {
    reference_to_world: DAffine3,
    world_to_reference: DAffine3,
}

impl Default for ReferenceFrame {
    fn default() -> Self {
        Self::identity()
    }
}

impl ReferenceFrame {
    /// The frame that coincides with world space.
    pub fn identity() -> Self {
        Self {
            reference_to_world: DAffine3::IDENTITY,
            world_to_reference: DAffine3::IDENTITY,
        }
    }

    /// Creates a frame from its reference-to-world transform.
    ///
    /// Fails with [`MeshError::InvalidTransform`] if the transform is not
    /// finite or not invertible.
    pub fn new(reference_to_world: DAffine3) -> MeshResult<Self> {
        if !reference_to_world.is_finite() {
            return Err(MeshError::invalid_transform("reference frame is not finite"));
        }

        let determinant = reference_to_world.matrix3.determinant();
        if determinant.abs() < MIN_FRAME_DETERMINANT {
            return Err(MeshError::invalid_transform(format!(
                "reference frame is singular (determinant {determinant})"
            )));
        }

        let world_to_reference = reference_to_world.inverse();
        if !world_to_reference.is_finite() {
            return Err(MeshError::invalid_transform("reference frame inverse is not finite"));
        }

        Ok(Self {
            reference_to_world,
            world_to_reference,
        })
    }

    /// Creates a frame from a 4x4 matrix, which must be affine.
    pub fn from_mat4(matrix: DMat4) -> MeshResult<Self> {
        new_affine(matrix).and_then(Self::new)
    }

    /// Returns the reference-to-world transform.
    #[inline]
    pub fn reference_to_world(&self) -> &DAffine3 {
        &self.reference_to_world
    }

    /// Returns the world-to-reference transform.
    #[inline]
    pub fn world_to_reference(&self) -> &DAffine3 {
        &self.world_to_reference
    }
}

/// Converts a 4x4 matrix into an affine transform, rejecting projective ones.
pub(crate) fn new_affine(matrix: DMat4) -> MeshResult<DAffine3> {
    if matrix.row(3) != DVec4::W {
        return Err(MeshError::invalid_transform(format!(
            "matrix is not affine (bottom row {:?})",
            matrix.row(3)
        )));
    }
    Ok(DAffine3::from_mat4(matrix))
}
