/// 4x4 homogeneous transformation matrices
use std::fmt;
use std::str::FromStr;

use nalgebra::{Matrix4, Vector3};

use crate::error::{Result, TransformError};

/// Coordinate axis selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Row/column of this axis in a homogeneous matrix
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    pub fn label(self) -> char {
        match self {
            Axis::X => 'x',
            Axis::Y => 'y',
            Axis::Z => 'z',
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label().to_ascii_uppercase())
    }
}

impl FromStr for Axis {
    type Err = TransformError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "x" => Ok(Axis::X),
            "y" => Ok(Axis::Y),
            "z" => Ok(Axis::Z),
            _ => Err(TransformError::InvalidAxis(s.to_string())),
        }
    }
}

/// Matrix factory for affine transformations acting on column vectors (`M * v`).
///
/// Angles are taken in degrees. Every builder accepts any finite input, including
/// degenerate ones such as a zero scale factor.
pub struct Transform;

#[rustfmt::skip]
impl Transform {
    /// Create a translation matrix
    pub fn translation(dx: f64, dy: f64, dz: f64) -> Matrix4<f64> {
        Matrix4::new(
            1.0, 0.0, 0.0, dx,
            0.0, 1.0, 0.0, dy,
            0.0, 0.0, 1.0, dz,
            0.0, 0.0, 0.0, 1.0,
        )
    }

    pub fn translation_vec(offset: &Vector3<f64>) -> Matrix4<f64> {
        Self::translation(offset.x, offset.y, offset.z)
    }

    /// Rotation about +X, counter-clockwise when looking from +X toward the origin
    pub fn rotation_x(degrees: f64) -> Matrix4<f64> {
        let (s, c) = degrees.to_radians().sin_cos();
        Matrix4::new(
            1.0, 0.0, 0.0, 0.0,
            0.0, c,   -s,  0.0,
            0.0, s,   c,   0.0,
            0.0, 0.0, 0.0, 1.0,
        )
    }

    /// Rotation about +Y
    pub fn rotation_y(degrees: f64) -> Matrix4<f64> {
        let (s, c) = degrees.to_radians().sin_cos();
        Matrix4::new(
            c,   0.0, s,   0.0,
            0.0, 1.0, 0.0, 0.0,
            -s,  0.0, c,   0.0,
            0.0, 0.0, 0.0, 1.0,
        )
    }

    /// Rotation about +Z
    pub fn rotation_z(degrees: f64) -> Matrix4<f64> {
        let (s, c) = degrees.to_radians().sin_cos();
        Matrix4::new(
            c,   -s,  0.0, 0.0,
            s,   c,   0.0, 0.0,
            0.0, 0.0, 1.0, 0.0,
            0.0, 0.0, 0.0, 1.0,
        )
    }

    pub fn rotation(axis: Axis, degrees: f64) -> Matrix4<f64> {
        match axis {
            Axis::X => Self::rotation_x(degrees),
            Axis::Y => Self::rotation_y(degrees),
            Axis::Z => Self::rotation_z(degrees),
        }
    }

    /// Create a non-uniform scale matrix
    pub fn scale(sx: f64, sy: f64, sz: f64) -> Matrix4<f64> {
        Matrix4::new(
            sx,  0.0, 0.0, 0.0,
            0.0, sy,  0.0, 0.0,
            0.0, 0.0, sz,  0.0,
            0.0, 0.0, 0.0, 1.0,
        )
    }

    pub fn scale_vec(factors: &Vector3<f64>) -> Matrix4<f64> {
        Self::scale(factors.x, factors.y, factors.z)
    }

    /// Shear the `targets` coordinates by `factor` times the `source` coordinate.
    ///
    /// `shear(0.5, Y, &[X, Z])` gives `x' = x + 0.5y`, `z' = z + 0.5y`.
    pub fn shear(factor: f64, source: Axis, targets: &[Axis]) -> Result<Matrix4<f64>> {
        let mut matrix = Matrix4::identity();
        let col = source.index();
        for &target in targets {
            if target == source {
                return Err(TransformError::AxisConflict(source.label()));
            }
            matrix[(target.index(), col)] += factor;
        }
        Ok(matrix)
    }

    /// Taper axis `to` by axis `from`: `to' = to + factor * from`
    pub fn taper(factor: f64, from: Axis, to: Axis) -> Result<Matrix4<f64>> {
        Self::shear(factor, from, &[to])
    }

    /// Reflection across the line `y = slope * x + intercept` in the XY plane.
    /// Z is left untouched.
    pub fn reflect_line_2d(slope: f64, intercept: f64) -> Matrix4<f64> {
        let m = slope;
        let b = intercept;
        let denom = 1.0 + m * m;
        let a = (1.0 - m * m) / denom;
        let c = 2.0 * m / denom;
        let e = (m * m - 1.0) / denom;
        Matrix4::new(
            a,   c,   0.0, -2.0 * m * b / denom,
            c,   e,   0.0, 2.0 * b / denom,
            0.0, 0.0, 1.0, 0.0,
            0.0, 0.0, 0.0, 1.0,
        )
    }

    /// Stretch by `factor` along the XY-plane direction `degrees` from +X,
    /// leaving the perpendicular direction unchanged.
    pub fn stretch_2d(degrees: f64, factor: f64) -> Matrix4<f64> {
        let (s, c) = degrees.to_radians().sin_cos();
        let k = factor - 1.0;
        Matrix4::new(
            1.0 + k * c * c, k * c * s,       0.0, 0.0,
            k * c * s,       1.0 + k * s * s, 0.0, 0.0,
            0.0,             0.0,             1.0, 0.0,
            0.0,             0.0,             0.0, 1.0,
        )
    }
}
