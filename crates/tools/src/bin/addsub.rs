//! addsub - step through a short drop-frame edit session
//!
//! Starts at 05:01:20;18, adds 10.5 seconds, adds 20 frames, takes away one
//! second and adds 01:01:01;01, printing each step.

use anyhow::{bail, Result};
use clap::Parser;
use tracing::{info, level_filters::LevelFilter};

use smpte12m_core::prelude::*;
use smpte12m_tools::init_logging;

const START: &str = "05:01:20;18";
// 10.5 s is 314.685 frames; half-to-even rounding makes it 315, so not ;23
const EXPECTED: &str = "06:02:31;24";

#[derive(Parser)]
#[command(name = "addsub")]
#[command(about = "Timecode add/subtract walkthrough at 29.97 drop-frame")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(if cli.verbose { LevelFilter::INFO } else { LevelFilter::WARN });

    let rate = FrameRate::Smpte2997Drop;
    let mut timecode = Timecode::parse(START, rate)?;
    println!("Start:               {}", timecode);

    timecode = timecode.add_seconds(10.5)?;
    println!("+ 10.5 seconds:      {}", timecode);

    timecode = timecode.add_frames(20)?;
    println!("+ 20 frames:         {}", timecode);

    timecode = timecode.sub_seconds(1.0)?;
    println!("- 1 second:          {}", timecode);

    timecode = timecode.add_timecode("01:01:01;01")?;
    println!("+ 01:01:01;01:       {}", timecode);

    info!("Finished at frame {}", timecode.total_frames());

    if timecode.to_string() != EXPECTED {
        bail!("Expected {}, got {}", EXPECTED, timecode);
    }
    println!("✓ Matches {}", EXPECTED);

    Ok(())
}
