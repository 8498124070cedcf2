//! The ten transformation demos.
//!
//! Each demo owns an explicit parameter record and builds an explicit, ordered
//! list of operations; nothing is shared between demos. Defaults reproduce the
//! classic exercise values.

use nalgebra::{Matrix4, Point3, Vector3};
use serde::Deserialize;

use crate::apply::apply_to_point;
use crate::compose::{Composition, Op, Step};
use crate::error::{Result, TransformError};
use crate::geometry::{Face, Mesh};
use crate::transform::Axis;

pub const DEMO_COUNT: usize = 10;

/// Demo 1: scale, rotate about Z, translate a triangle and a point
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct TriangleParams {
    pub scale: [f64; 3],
    pub angle: f64,
    pub translation: [f64; 3],
    pub point: [f64; 3],
}

impl Default for TriangleParams {
    fn default() -> Self {
        Self {
            scale: [2.0, 3.0, 4.0],
            angle: 90.0,
            translation: [4.0, 0.0, 2.0],
            point: [1.0, 2.0, 3.0],
        }
    }
}

/// Demo 2: camera view matrix
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct CameraParams {
    pub camera: [f64; 3],
    pub target: [f64; 3],
    pub up: [f64; 3],
    pub cube_size: f64,
}

impl Default for CameraParams {
    fn default() -> Self {
        Self {
            camera: [0.0, 1.0, 0.0],
            target: [0.0, 0.0, 0.0],
            up: [1.0, 1.0, 0.0],
            cube_size: 1.0,
        }
    }
}

/// Demo 3: stretch a clock face along a diagonal
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct ClockParams {
    pub angle: f64,
    pub stretch: f64,
}

impl Default for ClockParams {
    fn default() -> Self {
        Self {
            angle: 45.0,
            stretch: 1.5,
        }
    }
}

/// Demo 4: reflect a point across y = mx + b
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct ReflectionParams {
    pub point: [f64; 2],
    pub slope: f64,
    pub intercept: f64,
}

impl Default for ReflectionParams {
    fn default() -> Self {
        Self {
            point: [6.0, 0.0],
            slope: 1.0,
            intercept: 3.0,
        }
    }
}

/// Demo 5: translate Y, rotate X, translate Z, rotate Y
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct CompositeParams {
    pub a: f64,
    pub point: [f64; 3],
}

impl Default for CompositeParams {
    fn default() -> Self {
        Self {
            a: 2.0,
            point: [1.0, 1.0, 1.0],
        }
    }
}

/// Demo 6: shear, taper, scale, rotate, translate
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct ShearTaperParams {
    pub shear: f64,
    pub taper: f64,
    pub scale_z: f64,
    pub angle: f64,
    pub translation: [f64; 3],
    pub point: [f64; 3],
}

impl Default for ShearTaperParams {
    fn default() -> Self {
        Self {
            shear: 0.5,
            taper: 0.2,
            scale_z: 3.0,
            angle: 45.0,
            translation: [-2.0, 3.0, 1.0],
            point: [3.0, 2.0, 1.0],
        }
    }
}

/// Demo 7: rotate a square about its centre, then move it
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct SquareParams {
    pub angle: f64,
    pub translation: [f64; 2],
    pub side: f64,
}

impl Default for SquareParams {
    fn default() -> Self {
        Self {
            angle: 45.0,
            translation: [3.0, 2.0],
            side: 2.0,
        }
    }
}

/// Demo 8: non-uniform cube scaling
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct CubeScaleParams {
    pub scale: [f64; 3],
}

impl Default for CubeScaleParams {
    fn default() -> Self {
        Self {
            scale: [2.0, 1.0, 0.5],
        }
    }
}

/// Demo 9: cube rotation about Y
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct CubeRotateParams {
    pub angle: f64,
}

impl Default for CubeRotateParams {
    fn default() -> Self {
        Self { angle: 45.0 }
    }
}

/// Demo 10: scale, rotate about Z, translate a cube
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct CubeSrtParams {
    pub scale: [f64; 3],
    pub angle: f64,
    pub translation: [f64; 3],
}

impl Default for CubeSrtParams {
    fn default() -> Self {
        Self {
            scale: [2.0, 1.5, 1.0],
            angle: 30.0,
            translation: [3.0, 2.0, 1.0],
        }
    }
}

/// Parameter records for all ten demos
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct DemoParams {
    pub q1: TriangleParams,
    pub q2: CameraParams,
    pub q3: ClockParams,
    pub q4: ReflectionParams,
    pub q5: CompositeParams,
    pub q6: ShearTaperParams,
    pub q7: SquareParams,
    pub q8: CubeScaleParams,
    pub q9: CubeRotateParams,
    pub q10: CubeSrtParams,
}

impl DemoParams {
    /// Select demo `number` (1-10) with its current parameters
    pub fn demo(&self, number: usize) -> Result<Demo> {
        let demo = match number {
            1 => Demo::Triangle(self.q1),
            2 => Demo::Camera(self.q2),
            3 => Demo::Clock(self.q3),
            4 => Demo::Reflection(self.q4),
            5 => Demo::Composite(self.q5),
            6 => Demo::ShearTaper(self.q6),
            7 => Demo::Square(self.q7),
            8 => Demo::CubeScale(self.q8),
            9 => Demo::CubeRotate(self.q9),
            10 => Demo::CubeSrt(self.q10),
            _ => return Err(TransformError::InvalidDemo(number)),
        };
        Ok(demo)
    }

    pub fn demos(&self) -> Vec<Demo> {
        vec![
            Demo::Triangle(self.q1),
            Demo::Camera(self.q2),
            Demo::Clock(self.q3),
            Demo::Reflection(self.q4),
            Demo::Composite(self.q5),
            Demo::ShearTaper(self.q6),
            Demo::Square(self.q7),
            Demo::CubeScale(self.q8),
            Demo::CubeRotate(self.q9),
            Demo::CubeSrt(self.q10),
        ]
    }
}

/// A demo together with its parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Demo {
    Triangle(TriangleParams),
    Camera(CameraParams),
    Clock(ClockParams),
    Reflection(ReflectionParams),
    Composite(CompositeParams),
    ShearTaper(ShearTaperParams),
    Square(SquareParams),
    CubeScale(CubeScaleParams),
    CubeRotate(CubeRotateParams),
    CubeSrt(CubeSrtParams),
}

/// Everything a demo computed, ready for printing or drawing
#[derive(Debug, Clone, PartialEq)]
pub struct DemoReport {
    pub number: usize,
    pub title: &'static str,
    pub steps: Vec<Step>,
    pub matrix: Matrix4<f64>,
    pub faces: Vec<Face>,
    pub before: Vec<Point3<f64>>,
    pub after: Vec<Point3<f64>>,
    /// Reference points (before, after) carried through the same matrix
    pub markers: Vec<(Point3<f64>, Point3<f64>)>,
}

fn vec3(v: [f64; 3]) -> Vector3<f64> {
    Vector3::new(v[0], v[1], v[2])
}

impl Demo {
    pub fn number(&self) -> usize {
        match self {
            Demo::Triangle(_) => 1,
            Demo::Camera(_) => 2,
            Demo::Clock(_) => 3,
            Demo::Reflection(_) => 4,
            Demo::Composite(_) => 5,
            Demo::ShearTaper(_) => 6,
            Demo::Square(_) => 7,
            Demo::CubeScale(_) => 8,
            Demo::CubeRotate(_) => 9,
            Demo::CubeSrt(_) => 10,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Demo::Triangle(_) => "Triangle: scale, rotate around Z, translate",
            Demo::Camera(_) => "Camera view matrix",
            Demo::Clock(_) => "Clock stretched along a diagonal",
            Demo::Reflection(_) => "Reflection of a point over y = mx + b",
            Demo::Composite(_) => "Composite: translate Y, rotate X, translate Z, rotate Y",
            Demo::ShearTaper(_) => "Shear, taper, scale, rotate, translate",
            Demo::Square(_) => "Square: rotate around centre, then translate",
            Demo::CubeScale(_) => "Cube: non-uniform scaling",
            Demo::CubeRotate(_) => "Cube: rotation around Y",
            Demo::CubeSrt(_) => "Cube: scale, rotate, translate",
        }
    }

    /// Operations in application order
    pub fn ops(&self) -> Vec<Op> {
        match self {
            Demo::Triangle(p) => vec![
                Op::Scale(vec3(p.scale)),
                Op::rotate(Axis::Z, p.angle),
                Op::Translate(vec3(p.translation)),
            ],
            Demo::Camera(p) => vec![Op::LookAt {
                eye: Point3::from(vec3(p.camera)),
                target: Point3::from(vec3(p.target)),
                up: vec3(p.up),
            }],
            Demo::Clock(p) => vec![Op::Stretch {
                degrees: p.angle,
                factor: p.stretch,
            }],
            Demo::Reflection(p) => vec![Op::Reflect {
                slope: p.slope,
                intercept: p.intercept,
            }],
            Demo::Composite(p) => vec![
                Op::translate(0.0, p.a, 0.0),
                Op::rotate(Axis::X, 90.0),
                Op::translate(0.0, 0.0, p.a),
                Op::rotate(Axis::Y, 90.0),
            ],
            Demo::ShearTaper(p) => vec![
                Op::Shear {
                    factor: p.shear,
                    source: Axis::Y,
                    targets: vec![Axis::X, Axis::Z],
                },
                Op::Taper {
                    factor: p.taper,
                    from: Axis::Z,
                    to: Axis::Y,
                },
                Op::scale(1.0, 1.0, p.scale_z),
                Op::rotate(Axis::Y, p.angle),
                Op::Translate(vec3(p.translation)),
            ],
            Demo::Square(p) => vec![
                Op::rotate(Axis::Z, p.angle),
                Op::translate(p.translation[0], p.translation[1], 0.0),
            ],
            Demo::CubeScale(p) => vec![Op::Scale(vec3(p.scale))],
            Demo::CubeRotate(p) => vec![Op::rotate(Axis::Y, p.angle)],
            Demo::CubeSrt(p) => vec![
                Op::Scale(vec3(p.scale)),
                Op::rotate(Axis::Z, p.angle),
                Op::Translate(vec3(p.translation)),
            ],
        }
    }

    /// The shape the demo transforms
    pub fn shape(&self) -> Mesh {
        match self {
            Demo::Triangle(_) => Mesh::triangle(),
            Demo::Camera(p) => Mesh::cube(p.cube_size),
            Demo::Clock(_) => Mesh::clock_face(),
            Demo::Reflection(p) => Mesh::point(p.point[0], p.point[1], 0.0),
            Demo::Composite(p) => Mesh::point(p.point[0], p.point[1], p.point[2]),
            Demo::ShearTaper(p) => Mesh::point(p.point[0], p.point[1], p.point[2]),
            Demo::Square(p) => Mesh::square(p.side),
            Demo::CubeScale(_) | Demo::CubeRotate(_) | Demo::CubeSrt(_) => Mesh::cube(2.0),
        }
    }

    /// Points reported alongside the shape: the triangle's extra point, or the
    /// axis-frame endpoints for the single-point demos
    pub fn markers(&self) -> Vec<Point3<f64>> {
        match self {
            Demo::Triangle(p) => vec![Point3::from(vec3(p.point))],
            Demo::Composite(_) => vec![
                Point3::new(2.0, 0.0, 0.0),
                Point3::new(0.0, 2.0, 0.0),
                Point3::new(0.0, 0.0, 2.0),
            ],
            Demo::ShearTaper(_) => vec![
                Point3::origin(),
                Point3::new(5.0, 0.0, 0.0),
                Point3::new(0.0, 5.0, 0.0),
                Point3::new(0.0, 0.0, 5.0),
            ],
            _ => Vec::new(),
        }
    }

    pub fn composition(&self) -> Result<Composition> {
        Composition::from_ops(&self.ops())
    }

    /// Build the composite matrix and push the shape through it
    pub fn run(&self) -> Result<DemoReport> {
        let composition = self.composition()?;
        let matrix = composition.matrix();
        let shape = self.shape();
        let transformed = shape.transformed(&matrix);

        let markers = self
            .markers()
            .into_iter()
            .map(|p| Ok((p, apply_to_point(&matrix, &p)?)))
            .collect::<Result<Vec<_>>>()?;

        log::debug!("demo {} ran {} steps", self.number(), composition.len());

        Ok(DemoReport {
            number: self.number(),
            title: self.title(),
            steps: composition.steps().to_vec(),
            matrix,
            faces: shape.faces().to_vec(),
            before: shape.points()?,
            after: transformed.points()?,
            markers,
        })
    }
}
