//! Recording shell.
//!
//! Mounts the icon centered on a full-screen canvas, drives the frame clock
//! at a fixed rate and writes every frame to disk.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Deserializer, Serialize};
use spectrum_core::{config, FrameClock, IconConfig, LogConfig, Scheduler, SpectrumIcon};
use spectrum_render::{rasterize, save_png, to_svg_on_canvas, Canvas};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{debug, info};

/// Frame file format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// SVG documents only
    #[default]
    Svg,
    /// PNG images only
    Png,
    /// Both SVG and PNG
    Both,
}

impl OutputFormat {
    fn writes_svg(self) -> bool {
        matches!(self, Self::Svg | Self::Both)
    }

    fn writes_png(self) -> bool {
        matches!(self, Self::Png | Self::Both)
    }
}

/// Canvas dimensions in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenSize {
    /// Width
    pub width: u32,
    /// Height
    pub height: u32,
}

impl Default for ScreenSize {
    fn default() -> Self {
        Self {
            width: 390,
            height: 844,
        }
    }
}

impl FromStr for ScreenSize {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let (w, h) = s
            .split_once(|c: char| c == 'x' || c == 'X')
            .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{}'", s))?;
        let width = w.trim().parse().map_err(|e| format!("bad width '{}': {}", w, e))?;
        let height = h.trim().parse().map_err(|e| format!("bad height '{}': {}", h, e))?;
        Ok(Self { width, height })
    }
}

impl fmt::Display for ScreenSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Everything the shell needs for one recording
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    /// Canvas the icon is centered on
    pub screen: ScreenSize,
    /// Canvas background color
    pub background: String,
    /// Recording clock rate
    pub fps: u32,
    /// Frames to record
    pub frames: u32,
    /// Fixed seed, random when absent
    pub seed: Option<u64>,
    /// Output directory
    pub output_dir: PathBuf,
    /// Frame file format
    pub format: OutputFormat,
    /// Icon options; fields missing from a file keep the shell defaults
    #[serde(deserialize_with = "icon_over_shell_defaults")]
    pub icon: IconConfig,
    /// Logging options
    pub logging: LogConfig,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            screen: ScreenSize::default(),
            background: "#fff".to_string(),
            fps: 60,
            frames: 120,
            seed: None,
            output_dir: PathBuf::from("frames"),
            format: OutputFormat::default(),
            icon: shell_icon(),
            logging: LogConfig::default(),
        }
    }
}

/// The shell records an animated 120 px icon unless told otherwise
fn shell_icon() -> IconConfig {
    IconConfig {
        size: 120.0,
        animated: true,
    }
}

fn icon_over_shell_defaults<'de, D>(deserializer: D) -> std::result::Result<IconConfig, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    struct IconOverrides {
        size: Option<f32>,
        animated: Option<bool>,
    }

    let overrides = IconOverrides::deserialize(deserializer)?;
    let base = shell_icon();
    Ok(IconConfig {
        size: overrides.size.unwrap_or(base.size),
        animated: overrides.animated.unwrap_or(base.animated),
    })
}

impl ShellConfig {
    /// Load from a JSON file; missing fields take their defaults
    pub fn load(path: &Path) -> Result<Self> {
        config::load_json(path).with_context(|| format!("Failed to load config {:?}", path))
    }

    /// Save as pretty JSON
    pub fn save(&self, path: &Path) -> Result<()> {
        config::save_json(self, path).with_context(|| format!("Failed to save config {:?}", path))
    }

    /// Milliseconds between frames
    pub fn frame_interval_ms(&self) -> f64 {
        1000.0 / self.fps.max(1) as f64
    }

    fn canvas(&self) -> Canvas {
        Canvas {
            width: self.screen.width,
            height: self.screen.height,
            background: self.background.clone(),
        }
    }
}

/// What a finished recording produced
#[derive(Debug, Clone, PartialEq)]
pub struct RecordingSummary {
    /// Frames rendered
    pub frames: u32,
    /// Files written
    pub files: Vec<PathBuf>,
    /// Clock time covered (ms)
    pub duration_ms: f64,
    /// Continuations still queued after unmount
    pub pending_continuations: usize,
    /// Scalars still allocated after unmount
    pub live_scalars: usize,
}

/// Drives one mounted icon and writes its frames
pub struct Recorder {
    config: ShellConfig,
    clock: FrameClock,
    icon: SpectrumIcon,
}

impl Recorder {
    /// Mount the icon described by `config`
    pub fn new(config: ShellConfig) -> Self {
        let mut clock = FrameClock::new();
        let icon = match config.seed {
            Some(seed) => SpectrumIcon::mount_seeded(config.icon, &mut clock, seed),
            None => SpectrumIcon::mount(config.icon, &mut clock),
        };
        Self {
            config,
            clock,
            icon,
        }
    }

    /// Configuration in use
    pub fn config(&self) -> &ShellConfig {
        &self.config
    }

    /// SVG document of the current frame on the canvas
    pub fn render_frame(&mut self) -> String {
        to_svg_on_canvas(&self.icon.frame(&mut self.clock), &self.config.canvas())
    }

    /// Record every frame, then unmount the icon.
    ///
    /// A static icon never changes, so only its first frame is written.
    pub fn run(mut self) -> Result<RecordingSummary> {
        if self.config.frames == 0 {
            bail!("Nothing to record: frame count is 0");
        }
        let output_dir = self.config.output_dir.clone();
        fs::create_dir_all(&output_dir)
            .with_context(|| format!("Failed to create output directory {:?}", output_dir))?;

        let frames = if self.config.icon.animated {
            self.config.frames
        } else {
            1
        };
        let interval = self.config.frame_interval_ms();
        info!(
            "Recording {} frame(s) at {} fps on a {} canvas to {:?}",
            frames, self.config.fps, self.config.screen, output_dir
        );

        let mut files = Vec::new();
        for index in 0..frames {
            if index > 0 {
                self.clock.advance(interval);
            }
            files.extend(self.write_frame(index, &output_dir)?);
        }

        let duration_ms = self.clock.now();
        let Self {
            mut clock, icon, ..
        } = self;
        icon.unmount(&mut clock);
        let stats = clock.stats();
        debug!(
            "Clock stats: {} scalars, {} timers, {} continuations run, {} dropped",
            stats.scalars_allocated,
            stats.timers_scheduled,
            stats.completions_run,
            stats.completions_dropped
        );

        Ok(RecordingSummary {
            frames,
            files,
            duration_ms,
            pending_continuations: clock.pending_continuations(),
            live_scalars: clock.live_scalars(),
        })
    }

    fn write_frame(&mut self, index: u32, dir: &Path) -> Result<Vec<PathBuf>> {
        let svg = self.render_frame();
        let stem = format!("frame_{:04}", index);
        let mut written = Vec::with_capacity(2);

        if self.config.format.writes_svg() {
            let path = dir.join(format!("{}.svg", stem));
            fs::write(&path, &svg).with_context(|| format!("Failed to write {:?}", path))?;
            written.push(path);
        }
        if self.config.format.writes_png() {
            let path = dir.join(format!("{}.png", stem));
            let pixmap = rasterize(&svg).with_context(|| format!("Failed to render frame {}", index))?;
            save_png(&pixmap, &path).with_context(|| format!("Failed to write {:?}", path))?;
            written.push(path);
        }
        Ok(written)
    }
}
