/// Applying composed matrices to vertices
use nalgebra::{Matrix4, Point3, Vector4};

use crate::error::{Result, TransformError};
use crate::HomogeneousVertex;

/// Multiply every vertex by `matrix`, returning a new list in the same order
pub fn apply(matrix: &Matrix4<f64>, vertices: &[HomogeneousVertex]) -> Vec<HomogeneousVertex> {
    vertices.iter().map(|v| matrix * v).collect()
}

/// Lift a 3D point to homogeneous coordinates with w = 1
pub fn homogenize(point: &Point3<f64>) -> HomogeneousVertex {
    Vector4::new(point.x, point.y, point.z, 1.0)
}

/// Divide x, y and z by w
pub fn dehomogenize(vertex: &HomogeneousVertex) -> Result<Point3<f64>> {
    let w = vertex.w;
    if w == 0.0 {
        return Err(TransformError::ZeroW {
            x: vertex.x,
            y: vertex.y,
            z: vertex.z,
        });
    }
    if w != 1.0 {
        log::warn!("dehomogenizing vertex with w = {}", w);
    }
    Ok(Point3::new(vertex.x / w, vertex.y / w, vertex.z / w))
}

/// Transform a single 3D point
pub fn apply_to_point(matrix: &Matrix4<f64>, point: &Point3<f64>) -> Result<Point3<f64>> {
    dehomogenize(&(matrix * homogenize(point)))
}

/// Transform and dehomogenize a vertex list, keeping its order
pub fn apply_and_dehomogenize(
    matrix: &Matrix4<f64>,
    vertices: &[HomogeneousVertex],
) -> Result<Vec<Point3<f64>>> {
    vertices.iter().map(|v| dehomogenize(&(matrix * v))).collect()
}
