//! SMPTE 12M Core - timecode values, frame rates and drop-frame arithmetic
//!
//! This crate provides the [`Timecode`] value type addressing video frames as
//! `HH:MM:SS:FF` across the 23.976, 24, 25, 29.97 (drop and non-drop) and 30
//! fps standards, with conversion to and from absolute frame counts,
//! overflow-checked arithmetic, and parsing/formatting of the canonical text.

pub mod drop_frame;
pub mod error;
pub mod rate;
pub mod timecode;

pub use error::{Field, FormatError, Result, TimecodeError};
pub use rate::{FrameRate, Rational};
pub use timecode::Timecode;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::{
        error::{FormatError, Result, TimecodeError},
        rate::{FrameRate, Rational},
        timecode::Timecode,
    };
}
