/// Terminal front end: prints the transformation demos and composes ad-hoc
/// transform chains, writing matrices and before/after coordinates to the console.
use std::io::Write;

use anyhow::{Context, Result};
use log::debug;
use xform_core::{apply::apply_and_dehomogenize, parse::parse_composition, DemoParams, Mesh};

pub mod cli;
pub mod config;
pub mod report;

pub use cli::{Cli, Command, ShapeKind};
pub use report::ReportWriter;

/// Execute one command against the given demo parameters
pub fn run<W: Write>(command: &Command, params: &DemoParams, writer: &mut ReportWriter<W>) -> Result<()> {
    match command {
        Command::List => writer.demo_list(&params.demos())?,
        Command::Demo { number: Some(n) } => {
            let report = params.demo(*n)?.run().with_context(|| format!("Demo {} failed", n))?;
            writer.demo_report(&report)?;
        }
        Command::Demo { number: None } => {
            for demo in params.demos() {
                let report = demo
                    .run()
                    .with_context(|| format!("Demo {} failed", demo.number()))?;
                writer.demo_report(&report)?;
            }
        }
        Command::Apply { ops, point, shape } => {
            let composition = parse_composition(ops).with_context(|| format!("Invalid transform chain {:?}", ops))?;
            debug!("parsed {} operations", composition.len());

            let mesh = match point {
                Some(p) => Mesh::point(p.x, p.y, p.z),
                None => shape.mesh(),
            };
            let before = mesh.points()?;
            let after = apply_and_dehomogenize(&composition.matrix(), mesh.vertices())?;
            writer.chain_result(&composition, &before, &after)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Point3;
    use xform_core::TransformError;

    fn output(command: Command, params: &DemoParams) -> Result<String> {
        let mut writer = ReportWriter::new(Vec::new());
        run(&command, params, &mut writer)?;
        Ok(String::from_utf8(writer.into_inner())?)
    }

    #[test]
    fn test_all_demos_print() {
        let text = output(Command::Demo { number: None }, &DemoParams::default()).unwrap();
        for n in 1..=10 {
            assert!(text.contains(&format!("Demo {}:", n)));
        }
    }

    #[test]
    fn test_invalid_demo_number() {
        let err = output(Command::Demo { number: Some(11) }, &DemoParams::default()).unwrap_err();
        assert_eq!(
            err.downcast_ref::<TransformError>(),
            Some(&TransformError::InvalidDemo(11))
        );
    }

    #[test]
    fn test_apply_to_point() {
        let command = Command::Apply {
            ops: "scale 2 3 4; rotate z 90; translate 4 0 2".to_string(),
            point: Some(Point3::new(1.0, 2.0, 3.0)),
            shape: ShapeKind::Cube,
        };
        let text = output(command, &DemoParams::default()).unwrap();
        assert!(text.contains("3. Translate by (4, 0, 2)"));
        assert!(text.contains("  -2.0000,   2.0000,  14.0000"));
    }

    #[test]
    fn test_apply_reports_bad_axis() {
        let command = Command::Apply {
            ops: "rotate q 10".to_string(),
            point: None,
            shape: ShapeKind::Square,
        };
        let err = output(command, &DemoParams::default()).unwrap_err();
        assert_eq!(
            err.root_cause().to_string(),
            TransformError::InvalidAxis("q".to_string()).to_string()
        );
    }

    #[test]
    fn test_degenerate_camera_is_reported() {
        let mut params = DemoParams::default();
        params.q2.up = [0.0, 1.0, 0.0];
        let err = output(Command::Demo { number: Some(2) }, &params).unwrap_err();
        assert!(err.to_string().contains("Demo 2 failed"));
    }
}
