//! Spectrum - records the animated spectrum icon
//!
//! Mounts the icon centered on a canvas, steps the frame clock at a fixed
//! rate and writes each frame as SVG and/or PNG.

#![warn(missing_docs)]

mod cli;
mod logging_setup;
mod shell;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use cli::Args;
use shell::{Recorder, ShellConfig};

fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => ShellConfig::load(path)?,
        None => ShellConfig::default(),
    };
    args.apply(&mut config);

    let log_guard = logging_setup::init(&config.logging)?;
    info!("Spectrum recorder v{}", env!("CARGO_PKG_VERSION"));
    if let Some(path) = log_guard.log_file() {
        info!("Logging to {:?}", path);
    }

    if let Some(path) = &args.save_config {
        config.save(path)?;
        info!("Saved configuration to {:?}", path);
    }

    let recorder = Recorder::new(config);
    info!(
        "Icon: size {}, {}",
        recorder.config().icon.size,
        if recorder.config().icon.animated {
            "animated"
        } else {
            "static"
        }
    );
    let summary = recorder.run()?;

    println!(
        "Recorded {} frame(s) ({:.0} ms), {} file(s) written",
        summary.frames,
        summary.duration_ms,
        summary.files.len()
    );
    Ok(())
}
