/// Composition of transformation matrices in application order
use std::fmt;

use nalgebra::{Matrix4, Point3, Vector3};

use crate::camera::look_at;
use crate::error::Result;
use crate::transform::{Axis, Transform};

/// Multiply matrices listed in application order.
///
/// `compose(&[a, b, c])` means "apply `a`, then `b`, then `c`" and returns `c * b * a`.
/// An empty list gives the identity.
pub fn compose(ops: &[Matrix4<f64>]) -> Matrix4<f64> {
    ops.iter().fold(Matrix4::identity(), |acc, m| m * acc)
}

/// A single parameterised transformation
#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    Translate(Vector3<f64>),
    Rotate { axis: Axis, degrees: f64 },
    Scale(Vector3<f64>),
    Shear { factor: f64, source: Axis, targets: Vec<Axis> },
    Taper { factor: f64, from: Axis, to: Axis },
    Reflect { slope: f64, intercept: f64 },
    Stretch { degrees: f64, factor: f64 },
    LookAt { eye: Point3<f64>, target: Point3<f64>, up: Vector3<f64> },
}

impl Op {
    pub fn translate(dx: f64, dy: f64, dz: f64) -> Self {
        Op::Translate(Vector3::new(dx, dy, dz))
    }

    pub fn rotate(axis: Axis, degrees: f64) -> Self {
        Op::Rotate { axis, degrees }
    }

    pub fn scale(sx: f64, sy: f64, sz: f64) -> Self {
        Op::Scale(Vector3::new(sx, sy, sz))
    }

    /// Build the matrix for this operation
    pub fn matrix(&self) -> Result<Matrix4<f64>> {
        match self {
            Op::Translate(offset) => Ok(Transform::translation_vec(offset)),
            Op::Rotate { axis, degrees } => Ok(Transform::rotation(*axis, *degrees)),
            Op::Scale(factors) => Ok(Transform::scale_vec(factors)),
            Op::Shear { factor, source, targets } => Transform::shear(*factor, *source, targets),
            Op::Taper { factor, from, to } => Transform::taper(*factor, *from, *to),
            Op::Reflect { slope, intercept } => Ok(Transform::reflect_line_2d(*slope, *intercept)),
            Op::Stretch { degrees, factor } => Ok(Transform::stretch_2d(*degrees, *factor)),
            Op::LookAt { eye, target, up } => look_at(eye, target, up),
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Op::Translate(t) => write!(f, "Translate by ({}, {}, {})", t.x, t.y, t.z),
            Op::Rotate { axis, degrees } => write!(f, "Rotate {}° around {}", degrees, axis),
            Op::Scale(s) => write!(f, "Scale by ({}, {}, {})", s.x, s.y, s.z),
            Op::Shear { factor, source, targets } => {
                let targets: String = targets.iter().map(|a| a.to_string()).collect();
                write!(f, "Shear {} by {} (factor {})", targets, source, factor)
            }
            Op::Taper { factor, from, to } => write!(f, "Taper {} by {} (factor {})", to, from, factor),
            Op::Reflect { slope, intercept } => {
                write!(f, "Reflect over y = {}x + {}", slope, intercept)
            }
            Op::Stretch { degrees, factor } => {
                write!(f, "Stretch x{} along {}° diagonal", factor, degrees)
            }
            Op::LookAt { eye, target, up } => write!(
                f,
                "Look from ({}, {}, {}) at ({}, {}, {}) with up ({}, {}, {})",
                eye.x, eye.y, eye.z, target.x, target.y, target.z, up.x, up.y, up.z
            ),
        }
    }
}

/// One labelled step of a composition
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    pub label: String,
    pub matrix: Matrix4<f64>,
}

/// Ordered list of transformation steps, first entry applied first
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Composition {
    steps: Vec<Step>,
}

impl Composition {
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Build a composition from ops listed in application order
    pub fn from_ops(ops: &[Op]) -> Result<Self> {
        let mut composition = Self::new();
        for op in ops {
            composition = composition.then_op(op)?;
        }
        Ok(composition)
    }

    /// Append a step applied after every existing step
    pub fn then(mut self, label: impl Into<String>, matrix: Matrix4<f64>) -> Self {
        self.steps.push(Step {
            label: label.into(),
            matrix,
        });
        self
    }

    pub fn then_op(self, op: &Op) -> Result<Self> {
        let matrix = op.matrix()?;
        Ok(self.then(op.to_string(), matrix))
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// The single matrix equivalent to applying every step in order
    pub fn matrix(&self) -> Matrix4<f64> {
        let matrices: Vec<Matrix4<f64>> = self.steps.iter().map(|s| s.matrix).collect();
        let composite = compose(&matrices);
        log::debug!("composed {} steps into {}", self.steps.len(), composite);
        composite
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use nalgebra::Vector4;

    #[test]
    fn test_empty_compose_is_identity() {
        assert_eq!(compose(&[]), Matrix4::identity());
        assert_eq!(Composition::new().matrix(), Matrix4::identity());
    }

    #[test]
    fn test_last_applied_is_leftmost() {
        let a = Transform::rotation_z(90.0);
        let b = Transform::translation(1.0, 0.0, 0.0);
        assert_eq!(compose(&[a, b]), b * a);
        assert_ne!(compose(&[a, b]), a * b);
    }

    #[test]
    fn test_rotate_then_translate_square_corner() {
        let m = Composition::new()
            .then("rotate", Transform::rotation_z(90.0))
            .then("translate", Transform::translation(3.0, 2.0, 0.0))
            .matrix();
        let corner = m * Vector4::new(1.0, 0.0, 0.0, 1.0);
        assert_relative_eq!(corner, Vector4::new(3.0, 3.0, 0.0, 1.0), epsilon = 1e-12);
    }

    #[test]
    fn test_from_ops_keeps_order_and_labels() {
        let ops = [Op::scale(2.0, 3.0, 4.0), Op::rotate(Axis::Z, 90.0)];
        let composition = Composition::from_ops(&ops).unwrap();
        assert_eq!(composition.len(), 2);
        assert_eq!(composition.steps()[0].label, "Scale by (2, 3, 4)");
        assert_eq!(composition.steps()[1].label, "Rotate 90° around Z");
    }

    #[test]
    fn test_from_ops_propagates_errors() {
        let ops = [Op::Taper {
            factor: 0.2,
            from: Axis::Y,
            to: Axis::Y,
        }];
        assert!(Composition::from_ops(&ops).is_err());
    }

    #[test]
    fn test_op_matrix_matches_factory() {
        assert_eq!(Op::translate(1.0, 2.0, 3.0).matrix().unwrap(), Transform::translation(1.0, 2.0, 3.0));
        let reflect = Op::Reflect {
            slope: 1.0,
            intercept: 3.0,
        };
        assert_eq!(reflect.matrix().unwrap(), Transform::reflect_line_2d(1.0, 3.0));
    }
}
