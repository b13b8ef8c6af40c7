//! The ten minute demonstration run by `tc demo`

use smpte12m_core::{FrameRate, Result, Timecode};
use tracing::info;

/// Ten real minutes expressed at each of `rates`.
pub fn ten_minutes(rates: &[FrameRate]) -> Result<Vec<(FrameRate, Timecode)>> {
    rates
        .iter()
        .map(|&rate| -> Result<(FrameRate, Timecode)> {
            let timecode = Timecode::from_minutes(10.0, rate)?;
            info!("10 minutes at {} is frame {}", rate, timecode.total_frames());
            Ok((rate, timecode))
        })
        .collect()
}
