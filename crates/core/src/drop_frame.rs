//! NTSC drop-frame compensation
//!
//! 29.97 fps video runs at 30000/1001 frames per second, so a plain base-30
//! count drifts from wall-clock time by 3.6 seconds an hour. Drop-frame
//! timecode skips frame numbers 0 and 1 at the start of every minute that is
//! not a multiple of ten, which removes 108 numbers per hour and keeps the
//! display within a frame of real time.
//!
//! These helpers translate between the absolute frame count and the
//! "nominal" count a base-30 positional split expects.

/// Frame numbers skipped at each affected minute boundary
pub const DROPPED_PER_MINUTE: i64 = 2;

/// Frames in a ten-minute block: one full minute plus nine dropped minutes
pub const FRAMES_PER_TEN_MINUTES: i64 = 17_982;

/// Frames in a minute that starts with dropped frame numbers
pub const FRAMES_PER_DROPPED_MINUTE: i64 = 1_798;

/// Frame numbers skipped per ten-minute block
const DROPPED_PER_TEN_MINUTES: i64 = 9 * DROPPED_PER_MINUTE;

/// Whether the frame number never appears under drop-frame counting.
pub fn is_dropped(minutes: u32, seconds: u32, frames: u32) -> bool {
    seconds == 0 && i64::from(frames) < DROPPED_PER_MINUTE && minutes % 10 != 0
}

/// Absolute frame count to the nominal base-30 count, adding back every
/// skipped frame number up to `frames`.
pub fn to_nominal(frames: i64) -> i64 {
    let blocks = frames / FRAMES_PER_TEN_MINUTES;
    let remainder = frames % FRAMES_PER_TEN_MINUTES;

    // The first minute of a block keeps all its numbers; every later minute
    // in the block has already crossed a dropped boundary.
    let mut dropped = DROPPED_PER_TEN_MINUTES * blocks;
    if remainder >= DROPPED_PER_MINUTE {
        let later_minutes = (remainder - DROPPED_PER_MINUTE) / FRAMES_PER_DROPPED_MINUTE;
        dropped += DROPPED_PER_MINUTE * later_minutes;
    }

    frames + dropped
}

/// Nominal base-30 count to the absolute frame count. `total_minutes` is the
/// `60 * hours + minutes` of the timecode the nominal count came from.
pub fn from_nominal(nominal: i64, total_minutes: i64) -> i64 {
    nominal - DROPPED_PER_MINUTE * (total_minutes - total_minutes / 10)
}
