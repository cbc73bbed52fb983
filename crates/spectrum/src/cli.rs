//! Command-line argument parsing.

use clap::Parser;
use std::path::PathBuf;

use crate::shell::{OutputFormat, ScreenSize, ShellConfig};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "spectrum")]
#[command(about = "Record frames of the animated spectrum icon", long_about = None)]
pub struct Args {
    /// JSON shell configuration; flags below override it
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Icon width in pixels
    #[arg(long, value_name = "PX")]
    pub size: Option<f32>,

    /// Render the static icon (no animation)
    #[arg(long = "static")]
    pub static_icon: bool,

    /// Number of frames to record
    #[arg(long, value_name = "N")]
    pub frames: Option<u32>,

    /// Frames per second of the recording clock
    #[arg(long, value_name = "N")]
    pub fps: Option<u32>,

    /// Seed for bar and ring randomness
    #[arg(long, value_name = "U64")]
    pub seed: Option<u64>,

    /// Directory frames are written to
    #[arg(long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Frame file format
    #[arg(long, value_enum, value_name = "FORMAT")]
    pub format: Option<OutputFormat>,

    /// Canvas size the icon is centered on
    #[arg(long, value_name = "WxH")]
    pub screen: Option<ScreenSize>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Write the resolved configuration to this path before recording
    #[arg(long, value_name = "PATH")]
    pub save_config: Option<PathBuf>,
}

impl Args {
    /// Override `config` with every flag that was given
    pub fn apply(&self, config: &mut ShellConfig) {
        if let Some(size) = self.size {
            config.icon.size = size;
        }
        if self.static_icon {
            config.icon.animated = false;
        }
        if let Some(frames) = self.frames {
            config.frames = frames;
        }
        if let Some(fps) = self.fps {
            config.fps = fps;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if let Some(output) = &self.output {
            config.output_dir = output.clone();
        }
        if let Some(format) = self.format {
            config.format = format;
        }
        if let Some(screen) = self.screen {
            config.screen = screen;
        }
        if let Some(level) = &self.log_level {
            config.logging.level = level.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_flags_keep_config() {
        let args = Args::parse_from(["spectrum"]);
        let mut config = ShellConfig::default();
        args.apply(&mut config);
        assert_eq!(config, ShellConfig::default());
    }

    #[test]
    fn test_flags_override_config() {
        let args = Args::parse_from([
            "spectrum",
            "--size",
            "240",
            "--static",
            "--frames",
            "3",
            "--fps",
            "30",
            "--seed",
            "77",
            "--output",
            "out/run",
            "--format",
            "both",
            "--screen",
            "800x600",
            "--log-level",
            "debug",
        ]);
        let mut config = ShellConfig::default();
        args.apply(&mut config);

        assert_eq!(config.icon.size, 240.0);
        assert!(!config.icon.animated);
        assert_eq!(config.frames, 3);
        assert_eq!(config.fps, 30);
        assert_eq!(config.seed, Some(77));
        assert_eq!(config.output_dir, PathBuf::from("out/run"));
        assert_eq!(config.format, OutputFormat::Both);
        assert_eq!(
            config.screen,
            ScreenSize {
                width: 800,
                height: 600
            }
        );
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_bad_screen_is_rejected() {
        assert!(Args::try_parse_from(["spectrum", "--screen", "800"]).is_err());
        assert!(Args::try_parse_from(["spectrum", "--format", "gif"]).is_err());
    }
}
