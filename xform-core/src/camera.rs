/// Camera view matrices
use nalgebra::{Matrix4, Point3, Vector3};

use crate::error::{Result, TransformError};
use crate::transform::Transform;

/// Below this length a basis vector is treated as zero
const DEGENERATE_EPSILON: f64 = 1e-9;

/// Build a view matrix mapping world coordinates into the camera frame.
///
/// The rotation block has the camera's right, up and forward vectors as its
/// columns, and the result is `rotation * translation(-eye)`. `forward` points
/// from the target back toward the camera.
pub fn look_at(eye: &Point3<f64>, target: &Point3<f64>, up_hint: &Vector3<f64>) -> Result<Matrix4<f64>> {
    let (right, up, forward) = camera_basis(eye, target, up_hint)?;

    let mut rotation = Matrix4::identity();
    rotation.fixed_view_mut::<3, 1>(0, 0).copy_from(&right);
    rotation.fixed_view_mut::<3, 1>(0, 1).copy_from(&up);
    rotation.fixed_view_mut::<3, 1>(0, 2).copy_from(&forward);

    let translation = Transform::translation_vec(&-eye.coords);

    Ok(rotation * translation)
}

/// Orthonormal right/up/forward basis for a camera at `eye` looking at `target`
pub fn camera_basis(
    eye: &Point3<f64>,
    target: &Point3<f64>,
    up_hint: &Vector3<f64>,
) -> Result<(Vector3<f64>, Vector3<f64>, Vector3<f64>)> {
    let forward = (eye - target)
        .try_normalize(DEGENERATE_EPSILON)
        .ok_or_else(|| TransformError::DegenerateView("camera position equals target".to_string()))?;

    // Only the direction of the up hint matters, so the parallel test is relative to its length
    let up_len = up_hint.norm();
    if up_len == 0.0 || !up_len.is_finite() {
        return Err(TransformError::DegenerateView(format!(
            "up hint ({}, {}, {}) has no direction",
            up_hint.x, up_hint.y, up_hint.z
        )));
    }
    let cross = up_hint.cross(&forward);
    let cross_len = cross.norm();
    if cross_len <= DEGENERATE_EPSILON * up_len {
        return Err(TransformError::DegenerateView(format!(
            "up hint ({}, {}, {}) is parallel to the view direction",
            up_hint.x, up_hint.y, up_hint.z
        )));
    }
    let right = cross / cross_len;

    let up = forward.cross(&right);

    Ok((right, up, forward))
}

/// Camera placement for the view demo
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub position: Point3<f64>,
    pub target: Point3<f64>,
    pub up: Vector3<f64>,
}

impl Camera {
    pub fn new(position: Point3<f64>, target: Point3<f64>, up: Vector3<f64>) -> Self {
        Self { position, target, up }
    }

    /// Create the view matrix (camera transformation)
    pub fn view_matrix(&self) -> Result<Matrix4<f64>> {
        look_at(&self.position, &self.target, &self.up)
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            position: Point3::new(0.0, 1.0, 0.0),
            target: Point3::origin(),
            up: Vector3::new(1.0, 1.0, 0.0),
        }
    }
}
