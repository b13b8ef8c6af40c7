//! Common utilities for tools

use anyhow::{Context, Result};
use serde::Serialize;
use smpte12m_core::{FrameRate, Timecode};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Pick the log level from the command line flags, falling back to the
/// configured level and then to warnings only.
pub fn log_level(debug: bool, verbose: bool, configured: Option<&str>) -> Result<LevelFilter> {
    if debug {
        return Ok(LevelFilter::DEBUG);
    }
    if verbose {
        return Ok(LevelFilter::INFO);
    }

    match configured {
        Some(level) => level
            .parse::<LevelFilter>()
            .with_context(|| format!("Invalid log level: {}", level)),
        None => Ok(LevelFilter::WARN),
    }
}

/// Install the fmt subscriber. `RUST_LOG` directives override `level`.
pub fn init_logging(level: LevelFilter) {
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

/// clap value parser for rate arguments such as `25` or `29.97df`.
pub fn parse_rate(text: &str) -> std::result::Result<FrameRate, String> {
    text.parse::<FrameRate>().map_err(|e| e.to_string())
}

/// Read a timecode argument. Text with an `@rate` suffix carries its own
/// rate; anything else is read at `rate`.
pub fn read_timecode(text: &str, rate: FrameRate) -> Result<Timecode> {
    let timecode = if text.contains('@') {
        text.parse::<Timecode>()
    } else {
        Timecode::parse(text, rate)
    };

    timecode.with_context(|| format!("Invalid timecode: {}", text))
}

/// One row of the `tc info` table
#[derive(Debug, Clone, Serialize)]
pub struct RateInfo {
    pub label: &'static str,
    pub description: &'static str,
    pub nominal_fps: u32,
    pub real_fps: String,
    pub drop_frame: bool,
    pub frames_per_day: i64,
    pub ticks_per_frame_27mhz: i64,
}

impl From<FrameRate> for RateInfo {
    fn from(rate: FrameRate) -> Self {
        Self {
            label: rate.label(),
            description: rate.description(),
            nominal_fps: rate.nominal_fps(),
            real_fps: rate.real_fps().to_string(),
            drop_frame: rate.is_drop_frame(),
            frames_per_day: rate.frames_per_day(),
            ticks_per_frame_27mhz: rate.ticks_per_frame_27mhz(),
        }
    }
}
