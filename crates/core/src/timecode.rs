//! The SMPTE 12M timecode value type
//!
//! A [`Timecode`] addresses one frame within a 24 hour day as
//! `HH:MM:SS:FF` at a fixed [`FrameRate`]. Every constructor validates, so a
//! value that exists is always normalized: fields are in range and, under
//! drop-frame, never name a skipped frame number.

use crate::error::Field;
use crate::{drop_frame, FormatError, FrameRate, Result, TimecodeError};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use tracing::{debug, trace};

const NANOS_PER_SECOND: i128 = 1_000_000_000;

/// Length of `HH:MM:SS:FF`
const TEXT_LEN: usize = 11;

/// Rate assumed by [`FromStr`] when the text carries no `@rate` suffix
const DEFAULT_LABEL: &str = "29.97";

/// A frame position within a day at a particular frame rate.
///
/// Values of different rates are never equal and have no relative order;
/// combining them fails with [`TimecodeError::RateMismatch`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Timecode {
    hours: u8,
    minutes: u8,
    seconds: u8,
    frames: u8,
    rate: FrameRate,
}

impl Timecode {
    /// Build from separate fields, checking ranges and the drop-frame rule.
    pub fn from_components(
        hours: u32,
        minutes: u32,
        seconds: u32,
        frames: u32,
        rate: FrameRate,
    ) -> Result<Self> {
        if hours >= 24 {
            return Err(FormatError::FieldRange { field: Field::Hours, value: hours }.into());
        }
        if minutes >= 60 {
            return Err(FormatError::FieldRange { field: Field::Minutes, value: minutes }.into());
        }
        if seconds >= 60 {
            return Err(FormatError::FieldRange { field: Field::Seconds, value: seconds }.into());
        }
        if frames >= rate.nominal_fps() {
            return Err(FormatError::FrameRange { frames, rate }.into());
        }
        if rate.is_drop_frame() && drop_frame::is_dropped(minutes, seconds, frames) {
            return Err(FormatError::DroppedFrame { minutes, frames }.into());
        }

        // All fields were range checked above
        Ok(Self {
            hours: hours as u8,
            minutes: minutes as u8,
            seconds: seconds as u8,
            frames: frames as u8,
            rate,
        })
    }

    /// Build from an absolute frame count, where frame 0 is `00:00:00:00`.
    pub fn from_total_frames(frames: i64, rate: FrameRate) -> Result<Self> {
        if frames < 0 {
            debug!("frame count {} is below zero", frames);
            return Err(TimecodeError::MinValueOverflow { value: frames });
        }

        let max = rate.max_frames();
        if frames > max {
            debug!("frame count {} exceeds {} for {}", frames, max, rate);
            return Err(TimecodeError::MaxValueOverflow { value: frames, max, rate });
        }

        let nominal = if rate.is_drop_frame() {
            drop_frame::to_nominal(frames)
        } else {
            frames
        };

        let fps = i64::from(rate.nominal_fps());
        let total_seconds = nominal / fps;

        Ok(Self {
            hours: (total_seconds / 3600) as u8,
            minutes: ((total_seconds / 60) % 60) as u8,
            seconds: (total_seconds % 60) as u8,
            frames: (nominal % fps) as u8,
            rate,
        })
    }

    /// Build from a real-time duration in seconds, rounding half to even on
    /// the fractional frame.
    pub fn from_seconds(seconds: f64, rate: FrameRate) -> Result<Self> {
        if seconds.is_nan() {
            return Err(FormatError::NotANumber.into());
        }

        let fps = rate.real_fps();
        let frames = (seconds * fps.num as f64 / fps.den as f64).round_ties_even();

        // Range check before the cast so infinities report the right side
        if frames < 0.0 {
            debug!("{} seconds is below zero", seconds);
            return Err(TimecodeError::MinValueOverflow { value: frames as i64 });
        }
        let max = rate.max_frames();
        if frames > max as f64 {
            debug!("{} seconds exceeds one day at {}", seconds, rate);
            return Err(TimecodeError::MaxValueOverflow { value: frames as i64, max, rate });
        }

        Self::from_total_frames(frames as i64, rate)
    }

    pub fn from_minutes(minutes: f64, rate: FrameRate) -> Result<Self> {
        Self::from_seconds(minutes * 60.0, rate)
    }

    pub fn from_hours(hours: f64, rate: FrameRate) -> Result<Self> {
        Self::from_seconds(hours * 3600.0, rate)
    }

    /// Like [`Timecode::from_seconds`], but exact to the nanosecond.
    pub fn from_duration(duration: Duration, rate: FrameRate) -> Result<Self> {
        let fps = rate.real_fps();
        let nanos = duration.as_nanos() as i128;
        let frames = div_round_half_even(
            nanos * i128::from(fps.num),
            NANOS_PER_SECOND * i128::from(fps.den),
        );

        let frames = i64::try_from(frames).unwrap_or(i64::MAX);
        Self::from_total_frames(frames, rate)
    }

    /// Frame containing the given 27 MHz clock instant.
    pub fn from_ticks_27mhz(ticks: i64, rate: FrameRate) -> Result<Self> {
        Self::from_total_frames(ticks.div_euclid(rate.ticks_per_frame_27mhz()), rate)
    }

    /// Parse `HH:MM:SS:FF` (or `HH:MM:SS;FF`) at the given rate.
    ///
    /// Either frame separator is accepted; `rate` alone decides drop-frame.
    pub fn parse(text: &str, rate: FrameRate) -> Result<Self> {
        let syntax = || -> TimecodeError { FormatError::Syntax { text: text.to_string() }.into() };

        let bytes = text.as_bytes();
        if bytes.len() != TEXT_LEN || bytes[2] != b':' || bytes[5] != b':' {
            return Err(syntax());
        }
        if bytes[8] != b':' && bytes[8] != b';' {
            return Err(syntax());
        }

        let hours = two_digits(&bytes[0..2]).ok_or_else(syntax)?;
        let minutes = two_digits(&bytes[3..5]).ok_or_else(syntax)?;
        let seconds = two_digits(&bytes[6..8]).ok_or_else(syntax)?;
        let frames = two_digits(&bytes[9..11]).ok_or_else(syntax)?;

        Self::from_components(hours, minutes, seconds, frames, rate)
    }

    pub fn hours(&self) -> u32 {
        u32::from(self.hours)
    }

    pub fn minutes(&self) -> u32 {
        u32::from(self.minutes)
    }

    pub fn seconds(&self) -> u32 {
        u32::from(self.seconds)
    }

    pub fn frames(&self) -> u32 {
        u32::from(self.frames)
    }

    pub fn rate(&self) -> FrameRate {
        self.rate
    }

    /// Absolute frame count since `00:00:00:00`.
    pub fn total_frames(&self) -> i64 {
        let hours = i64::from(self.hours);
        let minutes = i64::from(self.minutes);
        let seconds = (hours * 3600) + (minutes * 60) + i64::from(self.seconds);
        let nominal = seconds * i64::from(self.rate.nominal_fps()) + i64::from(self.frames);

        if self.rate.is_drop_frame() {
            drop_frame::from_nominal(nominal, hours * 60 + minutes)
        } else {
            nominal
        }
    }

    /// Real elapsed seconds at the rate's true frames per second.
    pub fn total_seconds(&self) -> f64 {
        let fps = self.rate.real_fps();
        self.total_frames() as f64 * fps.den as f64 / fps.num as f64
    }

    pub fn total_minutes(&self) -> f64 {
        self.total_seconds() / 60.0
    }

    pub fn total_hours(&self) -> f64 {
        self.total_seconds() / 3600.0
    }

    /// Real elapsed time, truncated to whole nanoseconds.
    pub fn duration(&self) -> Duration {
        let fps = self.rate.real_fps();
        let nanos = i128::from(self.total_frames()) * i128::from(fps.den) * NANOS_PER_SECOND
            / i128::from(fps.num);
        Duration::from_nanos(u64::try_from(nanos).unwrap_or(u64::MAX))
    }

    /// 27 MHz clock ticks at the start of this frame.
    pub fn to_ticks_27mhz(&self) -> i64 {
        self.total_frames() * self.rate.ticks_per_frame_27mhz()
    }

    /// 90 kHz PCR base ticks at the start of this frame.
    pub fn to_ticks_pcr(&self) -> i64 {
        self.to_ticks_27mhz() / crate::rate::TICKS_27MHZ_PER_PCR_TICK
    }

    /// `HH:MM:SS:FF@label`, the form [`FromStr`] reads back.
    pub fn with_rate_label(&self) -> String {
        format!("{}@{}", self, self.rate.label())
    }

    fn ensure_same_rate(&self, other: &Timecode) -> Result<()> {
        if self.rate != other.rate {
            return Err(TimecodeError::RateMismatch {
                expected: self.rate,
                actual: other.rate,
            });
        }
        Ok(())
    }

    pub fn checked_add(&self, other: &Timecode) -> Result<Self> {
        self.ensure_same_rate(other)?;
        Self::from_total_frames(self.total_frames() + other.total_frames(), self.rate)
    }

    pub fn checked_sub(&self, other: &Timecode) -> Result<Self> {
        self.ensure_same_rate(other)?;
        Self::from_total_frames(self.total_frames() - other.total_frames(), self.rate)
    }

    pub fn add_frames(&self, frames: i64) -> Result<Self> {
        Self::from_total_frames(self.total_frames().saturating_add(frames), self.rate)
    }

    pub fn sub_frames(&self, frames: i64) -> Result<Self> {
        Self::from_total_frames(self.total_frames().saturating_sub(frames), self.rate)
    }

    pub fn add_seconds(&self, seconds: f64) -> Result<Self> {
        self.checked_add(&Self::from_seconds(seconds, self.rate)?)
    }

    pub fn sub_seconds(&self, seconds: f64) -> Result<Self> {
        self.checked_sub(&Self::from_seconds(seconds, self.rate)?)
    }

    /// Add a timecode given as text, read at this value's rate.
    pub fn add_timecode(&self, text: &str) -> Result<Self> {
        self.checked_add(&Self::parse(text, self.rate)?)
    }

    /// Subtract a timecode given as text, read at this value's rate.
    pub fn sub_timecode(&self, text: &str) -> Result<Self> {
        self.checked_sub(&Self::parse(text, self.rate)?)
    }

    /// Order two timecodes of the same rate by frame count.
    pub fn compare(&self, other: &Timecode) -> Result<Ordering> {
        self.ensure_same_rate(other)?;
        Ok(self.total_frames().cmp(&other.total_frames()))
    }

    /// Re-express at another rate, keeping the real elapsed time to the
    /// nearest frame (half to even).
    pub fn to_rate(&self, target: FrameRate) -> Result<Self> {
        if target == self.rate {
            return Ok(*self);
        }

        let from = self.rate.real_fps();
        let to = target.real_fps();
        let frames = div_round_half_even(
            i128::from(self.total_frames()) * i128::from(from.den) * i128::from(to.num),
            i128::from(from.num) * i128::from(to.den),
        );

        trace!("{} at {} is frame {} at {}", self, self.rate, frames, target);
        Self::from_total_frames(i64::try_from(frames).unwrap_or(i64::MAX), target)
    }
}

/// Two ASCII digits as a number
fn two_digits(bytes: &[u8]) -> Option<u32> {
    match bytes {
        [tens, ones] if tens.is_ascii_digit() && ones.is_ascii_digit() => {
            Some(u32::from(tens - b'0') * 10 + u32::from(ones - b'0'))
        }
        _ => None,
    }
}

/// `numerator / denominator` rounded half to even. `denominator` must be positive.
fn div_round_half_even(numerator: i128, denominator: i128) -> i128 {
    let quotient = numerator.div_euclid(denominator);
    let remainder = numerator.rem_euclid(denominator);

    match (2 * remainder).cmp(&denominator) {
        Ordering::Greater => quotient + 1,
        Ordering::Equal if quotient % 2 != 0 => quotient + 1,
        _ => quotient,
    }
}

impl PartialOrd for Timecode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.compare(other).ok()
    }
}

impl fmt::Display for Timecode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let separator = if self.rate.is_drop_frame() { ';' } else { ':' };
        write!(
            f,
            "{:02}:{:02}:{:02}{}{:02}",
            self.hours, self.minutes, self.seconds, separator, self.frames
        )
    }
}

impl FromStr for Timecode {
    type Err = TimecodeError;

    /// Reads `HH:MM:SS:FF@rate`. Without a suffix the rate is 29.97, and
    /// `;` before the frames selects drop-frame.
    fn from_str(s: &str) -> Result<Self> {
        let (text, label) = s.split_once('@').unwrap_or((s, DEFAULT_LABEL));
        let drop_hint = text.as_bytes().get(8) == Some(&b';');

        let rate = FrameRate::from_label(label, drop_hint).or_else(|_| label.parse())?;
        Self::parse(text, rate)
    }
}

impl From<Timecode> for String {
    fn from(timecode: Timecode) -> Self {
        timecode.with_rate_label()
    }
}

impl TryFrom<String> for Timecode {
    type Error = TimecodeError;

    fn try_from(text: String) -> Result<Self> {
        text.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::AnyTimecode;
    use quickcheck::TestResult;
    use quickcheck_macros::quickcheck;

    const DF: FrameRate = FrameRate::Smpte2997Drop;
    const NDF: FrameRate = FrameRate::Smpte2997NonDrop;

    fn tc(text: &str, rate: FrameRate) -> Timecode {
        Timecode::parse(text, rate).unwrap()
    }

    #[test]
    fn test_ten_minutes_at_every_rate() {
        let expected = [
            (FrameRate::Smpte2398, "00:09:59:10"),
            (FrameRate::Smpte24, "00:10:00:00"),
            (FrameRate::Smpte25, "00:10:00:00"),
            (DF, "00:10:00;00"),
            (NDF, "00:09:59:12"),
            (FrameRate::Smpte30, "00:10:00:00"),
        ];

        for (rate, text) in expected {
            assert_eq!(Timecode::from_minutes(10.0, rate).unwrap().to_string(), text, "{}", rate);
        }
        assert_eq!(Timecode::from_minutes(10.0, NDF).unwrap().total_frames(), 17_982);
        let thirty = Timecode::from_minutes(10.0, FrameRate::Smpte30).unwrap();
        assert_eq!(thirty.total_frames(), 18_000);
    }

    #[test]
    fn test_from_seconds_rounds_to_nearest_frame() {
        assert_eq!(Timecode::from_seconds(37.8378, NDF).unwrap().to_string(), "00:00:37:24");
        assert_eq!(
            Timecode::from_seconds(8304.963333333335, DF).unwrap().to_string(),
            "02:18:25;00"
        );
        assert_eq!(Timecode::from_seconds(5400.0, NDF).unwrap().to_string(), "01:29:54:18");
        assert_eq!(
            Timecode::from_hours(1.5, FrameRate::Smpte30).unwrap().to_string(),
            "01:30:00:00"
        );
    }

    #[test]
    fn test_from_seconds_ties_go_to_even() {
        // 1.5 and 4.5 frames at 24 fps
        assert_eq!(Timecode::from_seconds(0.0625, FrameRate::Smpte24).unwrap().frames(), 2);
        assert_eq!(Timecode::from_seconds(0.1875, FrameRate::Smpte24).unwrap().frames(), 4);
    }

    #[test]
    fn test_from_seconds_rejects_non_finite() {
        assert_eq!(
            Timecode::from_seconds(f64::NAN, NDF),
            Err(TimecodeError::BadFormat(FormatError::NotANumber))
        );
        assert!(matches!(
            Timecode::from_seconds(f64::INFINITY, NDF),
            Err(TimecodeError::MaxValueOverflow { .. })
        ));
        assert!(matches!(
            Timecode::from_seconds(f64::NEG_INFINITY, NDF),
            Err(TimecodeError::MinValueOverflow { .. })
        ));
        assert!(matches!(
            Timecode::from_seconds(-1.0, NDF),
            Err(TimecodeError::MinValueOverflow { .. })
        ));
    }

    #[test]
    fn test_from_duration_matches_from_seconds() {
        let duration = Duration::from_secs(8304) + Duration::from_nanos(963_333_333);
        assert_eq!(Timecode::from_duration(duration, DF).unwrap().to_string(), "02:18:25;00");
        assert_eq!(
            Timecode::from_duration(Duration::from_secs(600), NDF).unwrap().to_string(),
            "00:09:59:12"
        );
        assert!(matches!(
            Timecode::from_duration(Duration::from_secs(86_400), FrameRate::Smpte25),
            Err(TimecodeError::MaxValueOverflow { .. })
        ));
    }

    #[test]
    fn test_from_ticks_27mhz() {
        let ticks = 156_523_374_000;
        let expected = [
            (FrameRate::Smpte2398, "01:36:31:08"),
            (FrameRate::Smpte24, "01:36:37:03"),
            (FrameRate::Smpte25, "01:36:37:04"),
            (DF, "01:36:37;05"),
            (NDF, "01:36:31:11"),
        ];

        for (rate, text) in expected {
            let timecode = Timecode::from_ticks_27mhz(ticks, rate).unwrap();
            assert_eq!(timecode.to_string(), text, "{}", rate);
        }
        assert_eq!(
            Timecode::from_ticks_27mhz(156_522_600_000, FrameRate::Smpte30).unwrap().to_string(),
            "01:36:37:04"
        );
        assert!(Timecode::from_ticks_27mhz(-1, FrameRate::Smpte30).is_err());
    }

    #[test]
    fn test_ticks_out() {
        let timecode = tc("01:36:37;05", DF);
        assert_eq!(timecode.total_frames(), 173_741);
        assert_eq!(timecode.to_ticks_27mhz(), 173_741 * 900_900);
        assert_eq!(timecode.to_ticks_pcr(), 173_741 * 3003);
        assert_eq!(
            Timecode::from_ticks_27mhz(timecode.to_ticks_27mhz(), DF).unwrap(),
            timecode
        );
    }

    #[test]
    fn test_drop_frame_counts() {
        assert_eq!(tc("00:00:59;29", DF).total_frames(), 1_799);
        assert_eq!(tc("00:01:00;02", DF).total_frames(), 1_800);
        assert_eq!(tc("00:10:00;00", DF).total_frames(), 17_982);
        assert_eq!(tc("01:00:00;00", DF).total_frames(), 107_892);
        assert_eq!(tc("23:59:59;29", DF).total_frames(), DF.max_frames());
        assert_eq!(Timecode::from_total_frames(1_800, DF).unwrap().to_string(), "00:01:00;02");
    }

    #[test]
    fn test_dropped_frame_is_rejected() {
        assert_eq!(
            Timecode::from_components(0, 1, 0, 0, DF),
            Err(TimecodeError::BadFormat(FormatError::DroppedFrame { minutes: 1, frames: 0 }))
        );
        assert!(Timecode::parse("00:01:00;01", DF).is_err());
        assert!(Timecode::from_components(0, 10, 0, 0, DF).is_ok());
        assert!(Timecode::from_components(0, 1, 0, 0, NDF).is_ok());
    }

    #[test]
    fn test_field_ranges() {
        assert_eq!(
            Timecode::from_components(24, 0, 0, 0, FrameRate::Smpte25),
            Err(TimecodeError::BadFormat(FormatError::FieldRange {
                field: Field::Hours,
                value: 24
            }))
        );
        assert!(Timecode::from_components(0, 60, 0, 0, FrameRate::Smpte25).is_err());
        assert!(Timecode::from_components(0, 0, 60, 0, FrameRate::Smpte25).is_err());
        assert!(Timecode::from_components(0, 0, 0, 24, FrameRate::Smpte25).is_ok());
        assert!(Timecode::from_components(0, 0, 0, 24, FrameRate::Smpte24).is_err());
    }

    #[test]
    fn test_frame_range_message_names_rate() {
        let err = Timecode::parse("00:00:00:30", FrameRate::Smpte30).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Timecode frame value 30 is not in the expected range for SMPTE 30fps"
        );
    }

    #[test]
    fn test_parse_syntax_errors() {
        for text in [
            "",
            "00:00:00",
            "00:00:00:000",
            "0:00:00:00",
            "00-00:00:00",
            "00:00:00.00",
            "00:0a:00:00",
            "+0:00:00:00",
            " 00:00:00:00",
        ] {
            assert!(
                matches!(
                    Timecode::parse(text, FrameRate::Smpte25),
                    Err(TimecodeError::BadFormat(FormatError::Syntax { .. }))
                ),
                "{:?} should not parse",
                text
            );
        }
    }

    #[test]
    fn test_parse_accepts_either_separator() {
        assert_eq!(tc("00:01:00:02", DF).to_string(), "00:01:00;02");
        assert_eq!(tc("00:01:00;00", NDF).to_string(), "00:01:00:00");
    }

    #[test]
    fn test_from_str() {
        let tc_df: Timecode = "00:01:00;02".parse().unwrap();
        assert_eq!(tc_df.rate(), DF);

        let tc_ndf: Timecode = "00:01:00:02".parse().unwrap();
        assert_eq!(tc_ndf.rate(), NDF);

        let tc_25: Timecode = "10:00:00:24@25".parse().unwrap();
        assert_eq!(tc_25.rate(), FrameRate::Smpte25);
        assert_eq!(tc_25.with_rate_label(), "10:00:00:24@25");

        let tc_named: Timecode = "00:00:00:00@29.97df".parse().unwrap();
        assert_eq!(tc_named.rate(), DF);

        assert!("00:00:00:00@48".parse::<Timecode>().is_err());
    }

    #[test]
    fn test_additions() {
        assert_eq!(
            tc("00:01:00;29", DF).checked_add(&tc("00:01:00;02", DF)).unwrap().to_string(),
            "00:02:01;01"
        );
        assert_eq!(
            tc("00:01:00:29", NDF).checked_add(&tc("00:00:00:02", NDF)).unwrap().to_string(),
            "00:01:01:01"
        );

        let ivtc = FrameRate::Smpte2398;
        assert_eq!(
            tc("00:00:10:13", ivtc).checked_add(&tc("00:00:12:22", ivtc)).unwrap().to_string(),
            "00:00:23:11"
        );
        assert_eq!(
            tc("15:54:25:12", ivtc).checked_add(&tc("01:42:35:15", ivtc)).unwrap().to_string(),
            "17:37:01:03"
        );

        let thirty = FrameRate::Smpte30;
        assert_eq!(
            tc("00:01:00:00", thirty).checked_add(&tc("00:01:00:22", thirty)).unwrap().to_string(),
            "00:02:00:22"
        );
    }

    #[test]
    fn test_chained_arithmetic() {
        let sum = tc("00:58:12;15", DF).add_timecode("01:22:12;15").unwrap();

        // Frame 00 at minute 2 does not exist under drop-frame
        assert_eq!(
            sum.sub_timecode("00:02:00;00"),
            Err(TimecodeError::BadFormat(FormatError::DroppedFrame { minutes: 2, frames: 0 }))
        );

        // 3596 frames is two nominal minutes less the two dropped numbers
        assert_eq!(sum.sub_frames(3596).unwrap().to_string(), "02:18:25;00");
        assert_eq!(
            sum.checked_sub(&Timecode::from_total_frames(3596, DF).unwrap()).unwrap().to_string(),
            "02:18:25;00"
        );
        assert_eq!(sum.sub_timecode("00:01:59;28").unwrap().to_string(), "02:18:25;00");

        let result = tc("00:01:00;02", DF)
            .add_timecode("00:10:00;00")
            .and_then(|t| t.add_timecode("01:00:00;00"))
            .unwrap();
        assert_eq!(result.to_string(), "01:11:00;02");
    }

    #[test]
    fn test_edit_session() {
        let result = tc("05:01:20;18", DF)
            .add_seconds(10.5)
            .and_then(|t| t.add_frames(20))
            .and_then(|t| t.sub_seconds(1.0))
            .and_then(|t| t.add_timecode("01:01:01;01"))
            .unwrap();
        assert_eq!(result.to_string(), "06:02:31;24");
    }

    #[test]
    fn test_crossing_a_day_overflows() {
        let thirty = FrameRate::Smpte30;
        let result = tc("12:01:00:00", thirty).checked_add(&tc("12:01:00:22", thirty));
        assert_eq!(
            result,
            Err(TimecodeError::MaxValueOverflow { value: 2_595_622, max: 2_591_999, rate: thirty })
        );

        assert!(matches!(
            tc("23:59:59;29", DF).add_frames(1),
            Err(TimecodeError::MaxValueOverflow { .. })
        ));
    }

    #[test]
    fn test_going_below_zero_underflows() {
        let result = tc("00:00:01:00", FrameRate::Smpte25).sub_frames(26);
        assert_eq!(result, Err(TimecodeError::MinValueOverflow { value: -1 }));
        assert!(tc("00:00:00;00", DF).sub_seconds(0.1).is_err());
    }

    #[test]
    fn test_rate_mismatch() {
        let a = tc("00:00:01:00", FrameRate::Smpte25);
        let b = tc("00:00:01:00", FrameRate::Smpte24);

        let expected = TimecodeError::RateMismatch {
            expected: FrameRate::Smpte25,
            actual: FrameRate::Smpte24,
        };
        assert_eq!(a.checked_add(&b), Err(expected.clone()));
        assert_eq!(a.checked_sub(&b), Err(expected.clone()));
        assert_eq!(a.compare(&b), Err(expected));
        assert_ne!(a, b);
        assert_eq!(a.partial_cmp(&b), None);
    }

    #[test]
    fn test_to_rate() {
        let source = tc("00:12:33;26", DF);
        assert_eq!(source.total_frames(), 22_594);
        assert_eq!(source.to_rate(FrameRate::Smpte25).unwrap().to_string(), "00:12:33:22");
        assert_eq!(source.to_rate(NDF).unwrap().to_string(), "00:12:33:04");
        assert_eq!(source.to_rate(DF).unwrap(), source);
        assert!(tc("23:59:59:23", FrameRate::Smpte2398).to_rate(FrameRate::Smpte24).is_err());
    }

    #[test]
    fn test_real_time_accessors() {
        let timecode = tc("01:30:00:00", FrameRate::Smpte30);
        assert_eq!(timecode.total_seconds(), 5400.0);
        assert_eq!(timecode.total_minutes(), 90.0);
        assert_eq!(timecode.total_hours(), 1.5);
        assert_eq!(timecode.duration(), Duration::from_secs(5400));

        // 1001/30000 s
        assert_eq!(tc("00:00:00:01", NDF).duration(), Duration::from_nanos(33_366_666));
    }

    #[test]
    fn test_serde_as_string() {
        let timecode = tc("01:00:00;00", DF);
        let json = serde_json::to_string(&timecode).unwrap();
        assert_eq!(json, "\"01:00:00;00@29.97\"");
        assert_eq!(serde_json::from_str::<Timecode>(&json).unwrap(), timecode);

        assert!(serde_json::from_str::<Timecode>("\"00:01:00;00@29.97\"").is_err());
    }

    #[test]
    fn test_div_round_half_even() {
        assert_eq!(div_round_half_even(5, 2), 2);
        assert_eq!(div_round_half_even(7, 2), 4);
        assert_eq!(div_round_half_even(8, 3), 3);
        assert_eq!(div_round_half_even(-5, 2), -2);
    }

    #[quickcheck]
    fn prop_frame_count_round_trip(tc: AnyTimecode) -> bool {
        let tc = tc.0;
        Timecode::from_total_frames(tc.total_frames(), tc.rate()) == Ok(tc)
    }

    #[quickcheck]
    fn prop_text_round_trip(tc: AnyTimecode) -> bool {
        let tc = tc.0;
        Timecode::parse(&tc.to_string(), tc.rate()) == Ok(tc)
            && tc.with_rate_label().parse::<Timecode>() == Ok(tc)
    }

    #[quickcheck]
    fn prop_drop_frame_never_names_skipped_number(frames: u32) -> bool {
        let tc = Timecode::from_total_frames(i64::from(frames) % DF.frames_per_day(), DF).unwrap();
        !drop_frame::is_dropped(tc.minutes(), tc.seconds(), tc.frames())
    }

    #[quickcheck]
    fn prop_order_follows_frame_count(rate: FrameRate, a: u32, b: u32) -> bool {
        let (a, b) = (i64::from(a) % rate.frames_per_day(), i64::from(b) % rate.frames_per_day());
        let tc_a = Timecode::from_total_frames(a, rate).unwrap();
        let tc_b = Timecode::from_total_frames(b, rate).unwrap();
        tc_a.compare(&tc_b) == Ok(a.cmp(&b))
    }

    #[quickcheck]
    fn prop_sub_then_add_restores(tc: AnyTimecode, offset: u32) -> TestResult {
        let a = tc.0;
        let offset = i64::from(offset) % (a.total_frames() + 1);
        let b = match Timecode::from_total_frames(offset, a.rate()) {
            Ok(b) => b,
            Err(_) => return TestResult::discard(),
        };
        TestResult::from_bool(a.checked_sub(&b).and_then(|d| d.checked_add(&b)) == Ok(a))
    }

    #[quickcheck]
    fn prop_mixed_rates_never_combine(a: AnyTimecode, b: AnyTimecode) -> TestResult {
        let (a, b) = (a.0, b.0);
        if a.rate() == b.rate() {
            return TestResult::discard();
        }
        TestResult::from_bool(
            a.checked_add(&b).is_err() && a.compare(&b).is_err() && a.partial_cmp(&b).is_none(),
        )
    }
}
