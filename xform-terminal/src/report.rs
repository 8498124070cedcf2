/// Styled console output for demo reports and transform chains
use std::io::{self, Write};

use crossterm::{
    queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
};
use nalgebra::{Matrix4, Point3};
use xform_core::{Composition, Demo, DemoReport, Step};

/// Writes reports to any `Write` sink using crossterm colour commands
pub struct ReportWriter<W: Write> {
    out: W,
}

impl<W: Write> ReportWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn demo_list(&mut self, demos: &[Demo]) -> io::Result<()> {
        self.heading("Demos")?;
        for demo in demos {
            queue!(
                self.out,
                SetForegroundColor(Color::Cyan),
                Print(format!("{:>3}", demo.number())),
                ResetColor,
                Print(format!("  {}\n", demo.title()))
            )?;
        }
        self.out.flush()
    }

    pub fn demo_report(&mut self, report: &DemoReport) -> io::Result<()> {
        self.heading(&format!("Demo {}: {}", report.number, report.title))?;
        self.steps(report.steps.as_slice())?;
        self.label("Composite matrix")?;
        self.matrix(&report.matrix)?;

        if !report.markers.is_empty() {
            self.label("Reference points")?;
            for (i, (before, after)) in report.markers.iter().enumerate() {
                self.point_row(i, before, after)?;
            }
        }

        self.points(&report.before, &report.after)?;
        queue!(self.out, Print("\n"))?;
        self.out.flush()
    }

    pub fn chain_result(
        &mut self,
        composition: &Composition,
        before: &[Point3<f64>],
        after: &[Point3<f64>],
    ) -> io::Result<()> {
        self.heading("Transform chain")?;
        self.steps(composition.steps())?;
        self.label("Composite matrix")?;
        self.matrix(&composition.matrix())?;
        self.points(before, after)?;
        self.out.flush()
    }

    fn heading(&mut self, text: &str) -> io::Result<()> {
        queue!(
            self.out,
            SetForegroundColor(Color::Yellow),
            Print(text),
            ResetColor,
            Print("\n")
        )
    }

    fn label(&mut self, text: &str) -> io::Result<()> {
        queue!(
            self.out,
            SetForegroundColor(Color::Green),
            Print(format!("{}:\n", text)),
            ResetColor
        )
    }

    fn steps(&mut self, steps: &[Step]) -> io::Result<()> {
        for (i, step) in steps.iter().enumerate() {
            self.label(&format!("{}. {}", i + 1, step.label))?;
            self.matrix(&step.matrix)?;
        }
        Ok(())
    }

    fn matrix(&mut self, matrix: &Matrix4<f64>) -> io::Result<()> {
        for row in matrix.row_iter() {
            let cells: Vec<String> = row.iter().map(|v| number(*v)).collect();
            queue!(self.out, Print(format!("  [{} ]\n", cells.join(""))))?;
        }
        Ok(())
    }

    fn points(&mut self, before: &[Point3<f64>], after: &[Point3<f64>]) -> io::Result<()> {
        if before.is_empty() {
            return Ok(());
        }
        self.label("Vertices (before -> after)")?;
        for (i, (b, a)) in before.iter().zip(after).enumerate() {
            self.point_row(i, b, a)?;
        }
        Ok(())
    }

    fn point_row(&mut self, index: usize, before: &Point3<f64>, after: &Point3<f64>) -> io::Result<()> {
        queue!(
            self.out,
            Print(format!("  {:>2}  ({}) ", index, coords(before))),
            SetForegroundColor(Color::DarkGrey),
            Print("->"),
            ResetColor,
            Print(format!(" ({})\n", coords(after)))
        )
    }
}

/// Fixed-width number with negative zero folded to zero
fn number(v: f64) -> String {
    let v = if v.abs() < 1e-12 { 0.0 } else { v };
    format!("{:>9.4}", v)
}

fn coords(p: &Point3<f64>) -> String {
    format!("{},{},{}", number(p.x), number(p.y), number(p.z))
}

#[cfg(test)]
mod tests {
    use super::*;
    use xform_core::DemoParams;

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut ReportWriter<Vec<u8>>) -> io::Result<()>,
    {
        let mut writer = ReportWriter::new(Vec::new());
        f(&mut writer).unwrap();
        String::from_utf8(writer.into_inner()).unwrap()
    }

    #[test]
    fn test_number_folds_negative_zero() {
        assert_eq!(number(-0.0), "   0.0000");
        assert_eq!(number(-1e-15), "   0.0000");
        assert_eq!(number(-2.5), "  -2.5000");
    }

    #[test]
    fn test_demo_report_lists_steps_and_vertices() {
        let report = DemoParams::default().demo(4).unwrap().run().unwrap();
        let text = render(|w| w.demo_report(&report));
        assert!(text.contains("Demo 4: Reflection of a point over y = mx + b"));
        assert!(text.contains("1. Reflect over y = 1x + 3"));
        assert!(text.contains("Composite matrix"));
        assert!(text.contains("  -3.0000,   9.0000,   0.0000"));
    }

    #[test]
    fn test_demo_report_prints_axis_endpoints() {
        let report = DemoParams::default().demo(5).unwrap().run().unwrap();
        let text = render(|w| w.demo_report(&report));
        assert!(text.contains("Reference points"));
        assert!(text.contains("(   2.0000,   0.0000,   0.0000) -> (   4.0000,   0.0000,  -2.0000)"));
    }

    #[test]
    fn test_demo_list() {
        let demos = DemoParams::default().demos();
        let text = render(|w| w.demo_list(&demos));
        assert!(text.contains("Cube: rotation around Y"));
        assert_eq!(text.matches("\n").count(), 11);
    }
}
