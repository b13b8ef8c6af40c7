//! SMPTE frame rate standards and their per-rate constants

use crate::{drop_frame, FormatError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Seconds in one day, the span a timecode can address
pub const SECONDS_PER_DAY: i64 = 86_400;

/// 27 MHz MPEG system clock
pub const TICKS_27MHZ_PER_SECOND: i64 = 27_000_000;

/// Ratio between 27 MHz ticks and the 90 kHz PCR time base
pub const TICKS_27MHZ_PER_PCR_TICK: i64 = 300;

/// Exact rational number, used for the real frames-per-second of each rate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rational {
    pub num: i64,
    pub den: i64,
}

impl Rational {
    pub const fn new(num: i64, den: i64) -> Self {
        Self { num, den }
    }

    pub fn to_f64(self) -> f64 {
        self.num as f64 / self.den as f64
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.den == 1 {
            write!(f, "{}", self.num)
        } else {
            write!(f, "{}/{}", self.num, self.den)
        }
    }
}

/// The SMPTE 12M frame rates a [`Timecode`](crate::Timecode) can be expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FrameRate {
    /// 23.976 fps, also known as 23.98 IVTC.
    Smpte2398,
    /// 24 fps film.
    Smpte24,
    /// 25 fps, PAL.
    Smpte25,
    /// 29.97 fps drop-frame, used in the NTSC television system.
    Smpte2997Drop,
    /// 29.97 fps non-drop-frame.
    Smpte2997NonDrop,
    /// 30 fps.
    Smpte30,
}

/// Constants that vary per rate
struct RateRecord {
    nominal_fps: u32,
    real_fps: Rational,
    drop_frame: bool,
    description: &'static str,
    label: &'static str,
}

const RATE_RECORDS: [RateRecord; 6] = [
    RateRecord {
        nominal_fps: 24,
        real_fps: Rational::new(24_000, 1001),
        drop_frame: false,
        description: "SMPTE 23.98 IVTC",
        label: "23.98",
    },
    RateRecord {
        nominal_fps: 24,
        real_fps: Rational::new(24, 1),
        drop_frame: false,
        description: "SMPTE 24fps Film Sync",
        label: "24",
    },
    RateRecord {
        nominal_fps: 25,
        real_fps: Rational::new(25, 1),
        drop_frame: false,
        description: "SMPTE 25fps PAL",
        label: "25",
    },
    RateRecord {
        nominal_fps: 30,
        real_fps: Rational::new(30_000, 1001),
        drop_frame: true,
        description: "SMPTE 29.97 DropFrame",
        label: "29.97",
    },
    RateRecord {
        nominal_fps: 30,
        real_fps: Rational::new(30_000, 1001),
        drop_frame: false,
        description: "SMPTE 29.97 NonDrop",
        label: "29.97",
    },
    RateRecord {
        nominal_fps: 30,
        real_fps: Rational::new(30, 1),
        drop_frame: false,
        description: "SMPTE 30fps",
        label: "30",
    },
];

/// Ten-minute blocks in a day
const TEN_MINUTE_BLOCKS_PER_DAY: i64 = 6 * 24;

impl FrameRate {
    /// Every supported rate, in ascending order of real frame rate.
    pub const ALL: [FrameRate; 6] = [
        FrameRate::Smpte2398,
        FrameRate::Smpte24,
        FrameRate::Smpte25,
        FrameRate::Smpte2997Drop,
        FrameRate::Smpte2997NonDrop,
        FrameRate::Smpte30,
    ];

    fn record(self) -> &'static RateRecord {
        &RATE_RECORDS[self as usize]
    }

    /// Integer frames per second used for display arithmetic (24, 25 or 30).
    pub fn nominal_fps(self) -> u32 {
        self.record().nominal_fps
    }

    /// True frames per second used for duration math.
    pub fn real_fps(self) -> Rational {
        self.record().real_fps
    }

    /// Whether frame numbers 0 and 1 are skipped at most minute boundaries.
    pub fn is_drop_frame(self) -> bool {
        self.record().drop_frame
    }

    /// Number of frames in 24 hours of timecode.
    pub fn frames_per_day(self) -> i64 {
        if self.is_drop_frame() {
            drop_frame::FRAMES_PER_TEN_MINUTES * TEN_MINUTE_BLOCKS_PER_DAY
        } else {
            i64::from(self.nominal_fps()) * SECONDS_PER_DAY
        }
    }

    /// Largest absolute frame count a timecode at this rate can hold (`23:59:59:FF`).
    pub fn max_frames(self) -> i64 {
        self.frames_per_day() - 1
    }

    /// 27 MHz clock ticks per frame. Exact for every supported rate.
    pub fn ticks_per_frame_27mhz(self) -> i64 {
        let fps = self.real_fps();
        TICKS_27MHZ_PER_SECOND * fps.den / fps.num
    }

    /// Name used in diagnostics, e.g. "SMPTE 25fps PAL".
    pub fn description(self) -> &'static str {
        self.record().description
    }

    /// Short label, e.g. "29.97". Both 29.97 variants share a label.
    pub fn label(self) -> &'static str {
        self.record().label
    }

    /// Resolve a short label. For "29.97" the `drop_frame` hint picks the variant.
    pub fn from_label(label: &str, drop_frame: bool) -> Result<Self> {
        match label.trim() {
            "23.98" | "23.976" => Ok(FrameRate::Smpte2398),
            "24" => Ok(FrameRate::Smpte24),
            "25" => Ok(FrameRate::Smpte25),
            "29.97" if drop_frame => Ok(FrameRate::Smpte2997Drop),
            "29.97" => Ok(FrameRate::Smpte2997NonDrop),
            "30" => Ok(FrameRate::Smpte30),
            other => Err(FormatError::UnknownRate { label: other.to_string() }.into()),
        }
    }

    /// Map a measured frame rate to the closest standard by its integer part.
    ///
    /// 29.x maps to non-drop; there is no way to tell drop-frame from a rate alone.
    pub fn from_fps(fps: f64) -> Result<Self> {
        if fps.is_nan() {
            return Err(FormatError::NotANumber.into());
        }

        match fps.floor() as i64 {
            23 => Ok(FrameRate::Smpte2398),
            24 => Ok(FrameRate::Smpte24),
            25 => Ok(FrameRate::Smpte25),
            29 => Ok(FrameRate::Smpte2997NonDrop),
            30 => Ok(FrameRate::Smpte30),
            _ => Err(FormatError::UnknownRate { label: fps.to_string() }.into()),
        }
    }
}

impl fmt::Display for FrameRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

impl FromStr for FrameRate {
    type Err = crate::TimecodeError;

    fn from_str(s: &str) -> Result<Self> {
        let lower = s.trim().to_ascii_lowercase();
        match lower.as_str() {
            "29.97df" | "29.97-drop" | "2997df" => Ok(FrameRate::Smpte2997Drop),
            "29.97ndf" | "29.97-nondrop" | "2997ndf" => Ok(FrameRate::Smpte2997NonDrop),
            other => FrameRate::from_label(other, false),
        }
    }
}
