/// XFORM Core Library - affine transformation matrices, composition and application
///
/// This library provides the stateless core: a matrix factory for homogeneous
/// 4x4 transforms, a composer that multiplies them in application order, and an
/// applier that pushes vertices through the result. Demo shapes and the ten
/// demo parameter sets live here too, so any front end can print or draw them.

pub mod apply;
pub mod camera;
pub mod compose;
pub mod demo;
pub mod error;
pub mod geometry;
pub mod parse;
pub mod transform;

/// Vertex in homogeneous coordinates (x, y, z, w)
pub type HomogeneousVertex = nalgebra::Vector4<f64>;

// Re-export commonly used types
pub use apply::{apply, apply_to_point, dehomogenize, homogenize};
pub use camera::{look_at, Camera};
pub use compose::{compose, Composition, Op, Step};
pub use demo::{Demo, DemoParams, DemoReport};
pub use error::{Result, TransformError};
pub use geometry::{Face, Mesh};
pub use parse::parse_chain;
pub use transform::{Axis, Transform};
