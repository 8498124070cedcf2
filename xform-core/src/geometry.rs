/// Meshes and the demo shapes
use std::collections::BTreeSet;

use nalgebra::{Matrix4, Point3, Vector4};

use crate::apply::{apply, apply_and_dehomogenize, homogenize};
use crate::error::{Result, TransformError};
use crate::HomogeneousVertex;

/// A polygon given by indices into the mesh's vertex list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Face {
    pub indices: Vec<usize>,
}

impl Face {
    pub fn new(indices: Vec<usize>) -> Self {
        Self { indices }
    }

    /// Undirected edges of the polygon, smaller index first
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let n = self.indices.len();
        (0..n).map(move |i| {
            let a = self.indices[i];
            let b = self.indices[(i + 1) % n];
            (a.min(b), a.max(b))
        })
    }
}

/// Ordered vertex list plus faces.
///
/// Both lists are read-only from outside; `add_vertex` and `add_face` are the only
/// way in, so every face index stays inside the vertex list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    vertices: Vec<HomogeneousVertex>,
    faces: Vec<Face>,
}

impl Mesh {
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            faces: Vec::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(capacity),
            faces: Vec::new(),
        }
    }

    pub fn vertices(&self) -> &[HomogeneousVertex] {
        &self.vertices
    }

    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// Append a vertex with w = 1 and return its index
    pub fn add_vertex(&mut self, x: f64, y: f64, z: f64) -> usize {
        self.vertices.push(Vector4::new(x, y, z, 1.0));
        self.vertices.len() - 1
    }

    /// Add a face; it needs at least three indices, all within the vertex list
    pub fn add_face(&mut self, indices: Vec<usize>) -> Result<()> {
        if indices.len() < 3 {
            return Err(TransformError::InvalidFace(format!(
                "face needs at least 3 vertices, got {}",
                indices.len()
            )));
        }
        if let Some(&bad) = indices.iter().find(|&&i| i >= self.vertices.len()) {
            return Err(TransformError::InvalidFace(format!(
                "index {} out of range for {} vertices",
                bad,
                self.vertices.len()
            )));
        }
        self.faces.push(Face::new(indices));
        Ok(())
    }

    /// Unique undirected edges over all faces, sorted
    pub fn edges(&self) -> Vec<(usize, usize)> {
        let edges: BTreeSet<(usize, usize)> = self.faces.iter().flat_map(|f| f.edges()).collect();
        edges.into_iter().collect()
    }

    /// New mesh with every vertex multiplied by `matrix`; faces are unchanged
    pub fn transformed(&self, matrix: &Matrix4<f64>) -> Self {
        Self {
            vertices: apply(matrix, &self.vertices),
            faces: self.faces.clone(),
        }
    }

    /// Dehomogenized vertex positions, in vertex order
    pub fn points(&self) -> Result<Vec<Point3<f64>>> {
        apply_and_dehomogenize(&Matrix4::identity(), &self.vertices)
    }

    /// Single-vertex mesh
    pub fn point(x: f64, y: f64, z: f64) -> Self {
        let mut mesh = Self::with_capacity(1);
        mesh.vertices.push(homogenize(&Point3::new(x, y, z)));
        mesh
    }

    /// Triangle with corners (0,0,0), (1,0,0) and (0.5,1,0)
    pub fn triangle() -> Self {
        let mut mesh = Self::with_capacity(3);
        mesh.add_vertex(0.0, 0.0, 0.0);
        mesh.add_vertex(1.0, 0.0, 0.0);
        mesh.add_vertex(0.5, 1.0, 0.0);
        mesh.faces.push(Face::new(vec![0, 1, 2]));
        mesh
    }

    /// Axis-aligned square in the XY plane centred at the origin
    pub fn square(side: f64) -> Self {
        let half = side / 2.0;
        let mut mesh = Self::with_capacity(4);
        mesh.add_vertex(-half, -half, 0.0);
        mesh.add_vertex(half, -half, 0.0);
        mesh.add_vertex(half, half, 0.0);
        mesh.add_vertex(-half, half, 0.0);
        mesh.faces.push(Face::new(vec![0, 1, 2, 3]));
        mesh
    }

    /// Cube centred at the origin: bottom ring (z = -half) then top ring (z = +half)
    pub fn cube(size: f64) -> Self {
        let half = size / 2.0;
        let mut mesh = Self::with_capacity(8);
        for z in [-half, half] {
            mesh.add_vertex(-half, -half, z);
            mesh.add_vertex(half, -half, z);
            mesh.add_vertex(half, half, z);
            mesh.add_vertex(-half, half, z);
        }

        let faces = [
            [0, 1, 2, 3], // bottom
            [4, 5, 6, 7], // top
            [0, 1, 5, 4], // front
            [2, 3, 7, 6], // back
            [1, 2, 6, 5], // right
            [0, 3, 7, 4], // left
        ];
        mesh.faces.extend(faces.iter().map(|f| Face::new(f.to_vec())));
        mesh
    }

    /// Twelve hour marks on the unit circle, 12 o'clock first and going clockwise
    pub fn clock_face() -> Self {
        let mut mesh = Self::with_capacity(12);
        for hour in 0..12 {
            let (s, c) = (90.0 - 30.0 * hour as f64).to_radians().sin_cos();
            mesh.add_vertex(c, s, 0.0);
        }
        mesh.faces.push(Face::new((0..12).collect()));
        mesh
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::Transform;
    use approx::assert_relative_eq;

    #[test]
    fn test_cube_layout() {
        let cube = Mesh::cube(2.0);
        assert_eq!(cube.vertices.len(), 8);
        assert_eq!(cube.faces.len(), 6);
        assert_eq!(cube.vertices[0], Vector4::new(-1.0, -1.0, -1.0, 1.0));
        assert_eq!(cube.vertices[6], Vector4::new(1.0, 1.0, 1.0, 1.0));
        assert_eq!(cube.edges().len(), 12);
    }

    #[test]
    fn test_clock_starts_at_twelve() {
        let clock = Mesh::clock_face();
        assert_eq!(clock.vertices.len(), 12);
        assert_relative_eq!(clock.vertices[0], Vector4::new(0.0, 1.0, 0.0, 1.0), epsilon = 1e-12);
        assert_relative_eq!(clock.vertices[3], Vector4::new(1.0, 0.0, 0.0, 1.0), epsilon = 1e-12);
        assert_eq!(clock.edges().len(), 12);
    }

    #[test]
    fn test_add_face_validation() {
        let mut mesh = Mesh::square(2.0);
        assert!(mesh.add_face(vec![0, 1]).is_err());
        assert!(mesh.add_face(vec![0, 1, 4]).is_err());
        assert!(mesh.add_face(vec![0, 1, 2]).is_ok());
        assert_eq!(mesh.faces().len(), 2);
        assert!(mesh.faces().iter().flat_map(|f| &f.indices).all(|&i| i < mesh.vertices().len()));
    }

    #[test]
    fn test_transformed_keeps_faces_and_order() {
        let square = Mesh::square(2.0);
        let moved = square.transformed(&Transform::translation(3.0, 2.0, 0.0));
        assert_eq!(moved.faces, square.faces);
        let points = moved.points().unwrap();
        assert_eq!(points[0], Point3::new(2.0, 1.0, 0.0));
        assert_eq!(points[2], Point3::new(4.0, 3.0, 0.0));
    }

    #[test]
    fn test_point_mesh_has_no_faces() {
        let p = Mesh::point(6.0, 0.0, 0.0);
        assert_eq!(p.vertices.len(), 1);
        assert!(p.faces.is_empty());
        assert!(p.edges().is_empty());
    }
}
