//! SMPTE 12M Tools library

pub mod common;
pub mod config;
pub mod demo;

pub use common::{init_logging, log_level, parse_rate, read_timecode, RateInfo};
pub use config::ToolConfig;
pub use demo::ten_minutes;
