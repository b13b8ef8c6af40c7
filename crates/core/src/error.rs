//! Error types for SMPTE 12M Core

use crate::rate::FrameRate;
use std::fmt;
use thiserror::Error;

/// Timecode error types
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TimecodeError {
    #[error("{0}")]
    BadFormat(#[from] FormatError),

    #[error("The resulting timecode {value} is out of the expected range of MaxValue {max} for {rate}")]
    MaxValueOverflow { value: i64, max: i64, rate: FrameRate },

    #[error("The resulting timecode {value} is out of the expected range of MinValue")]
    MinValueOverflow { value: i64 },

    #[error("Expected a timecode at {expected}, got {actual}")]
    RateMismatch { expected: FrameRate, actual: FrameRate },
}

/// What was wrong with a timecode that failed validation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormatError {
    #[error("The timecode {text:?} is not in the correct format")]
    Syntax { text: String },

    #[error("The timecode {field} value {value} is out of the expected range")]
    FieldRange { field: Field, value: u32 },

    #[error("Timecode frame value {frames} is not in the expected range for {}", .rate.description())]
    FrameRange { frames: u32, rate: FrameRate },

    #[error("Timecode frame value {frames} is dropped at minute {minutes} in drop-frame timecode")]
    DroppedFrame { minutes: u32, frames: u32 },

    #[error("Unknown frame rate {label:?}")]
    UnknownRate { label: String },

    #[error("Duration is not a number")]
    NotANumber,
}

/// Timecode component named in a [`FormatError::FieldRange`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Hours,
    Minutes,
    Seconds,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Hours => "hours",
            Field::Minutes => "minutes",
            Field::Seconds => "seconds",
        };
        f.write_str(name)
    }
}

/// Result type for SMPTE 12M Core operations
pub type Result<T> = std::result::Result<T, TimecodeError>;
