/// XFORM Terminal - affine transformation demos
///
/// Usage:
///   xform list
///   xform demo [N]
///   xform apply --ops "scale 2 3 4; rotate z 90; translate 4 0 2" --point 1,2,3
///
/// Set RUST_LOG=debug to see composed matrices as they are built.

use std::io;

use anyhow::Result;
use clap::Parser;
use xform_terminal::{config, run, Cli, ReportWriter};

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let params = config::load_params(cli.config.as_deref())?;

    let stdout = io::stdout();
    let mut writer = ReportWriter::new(stdout.lock());
    run(&cli.command, &params, &mut writer)
}
