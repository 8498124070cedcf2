/// Command-line interface
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use nalgebra::Point3;
use xform_core::Mesh;

#[derive(Parser, Debug)]
#[command(name = "xform")]
#[command(version, about = "Print affine transformation demos and compose transform chains")]
pub struct Cli {
    /// TOML file overriding demo parameters ([q1] .. [q10] tables)
    #[arg(short, long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// List the ten demos
    List,

    /// Print a demo's matrices and before/after coordinates (all demos when no number is given)
    Demo {
        /// Demo number, 1-10
        number: Option<usize>,
    },

    /// Compose a transform chain and apply it to a point or shape
    Apply {
        /// Operations in application order, e.g. "scale 2 3 4; rotate z 90; translate 4 0 2"
        #[arg(short, long)]
        ops: String,

        /// Single point as x,y,z
        #[arg(short, long, value_parser = parse_point, allow_hyphen_values = true)]
        point: Option<Point3<f64>>,

        /// Built-in shape used when no point is given
        #[arg(short, long, value_enum, default_value_t = ShapeKind::Cube)]
        shape: ShapeKind,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    Triangle,
    Square,
    Cube,
    Clock,
}

impl ShapeKind {
    pub fn mesh(self) -> Mesh {
        match self {
            ShapeKind::Triangle => Mesh::triangle(),
            ShapeKind::Square => Mesh::square(2.0),
            ShapeKind::Cube => Mesh::cube(2.0),
            ShapeKind::Clock => Mesh::clock_face(),
        }
    }
}

/// Parse "x,y,z" into a point
pub fn parse_point(s: &str) -> Result<Point3<f64>, String> {
    let coords = s
        .split(',')
        .map(|c| match c.trim().parse::<f64>() {
            Ok(v) if v.is_finite() => Ok(v),
            Ok(v) => Err(format!("coordinate {:?} is not finite ({})", c, v)),
            Err(e) => Err(format!("invalid coordinate {:?}: {}", c, e)),
        })
        .collect::<Result<Vec<_>, _>>()?;

    match coords.as_slice() {
        [x, y, z] => Ok(Point3::new(*x, *y, *z)),
        _ => Err(format!("expected 3 comma-separated coordinates, got {}", coords.len())),
    }
}
