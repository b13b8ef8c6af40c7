//! tc - SMPTE 12M timecode calculator
//!
//! Parses, converts and does arithmetic on timecodes from the command line

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde_json::json;
use std::path::PathBuf;
use tracing::{debug, info};

use smpte12m_core::prelude::*;
use smpte12m_tools::{
    init_logging, log_level, parse_rate, read_timecode, ten_minutes, RateInfo, ToolConfig,
};

/// SMPTE 12M timecode calculator
#[derive(Parser)]
#[command(name = "tc")]
#[command(about = "SMPTE 12M timecode parsing, conversion and arithmetic")]
#[command(version)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Enable debug output
    #[arg(long, global = true)]
    debug: bool,

    /// Configuration file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show ten real minutes at the configured demo rates
    Demo,
    /// Parse a timecode and print its fields and offsets
    Show {
        timecode: String,

        /// Frame rate, e.g. 25 or 29.97df
        #[arg(short, long, value_parser = parse_rate)]
        rate: Option<FrameRate>,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Add two timecodes
    Add {
        a: String,
        b: String,

        #[arg(short, long, value_parser = parse_rate)]
        rate: Option<FrameRate>,
    },
    /// Subtract the second timecode from the first
    Sub {
        a: String,
        b: String,

        #[arg(short, long, value_parser = parse_rate)]
        rate: Option<FrameRate>,
    },
    /// Re-express a timecode at another rate
    Convert {
        timecode: String,

        /// Source rate when the timecode has no @rate suffix
        #[arg(long, value_parser = parse_rate)]
        from: Option<FrameRate>,

        /// Target rate
        #[arg(long, value_parser = parse_rate)]
        to: FrameRate,
    },
    /// Timecode of an absolute frame count
    Frames {
        #[arg(allow_hyphen_values = true)]
        count: i64,

        #[arg(short, long, value_parser = parse_rate)]
        rate: Option<FrameRate>,
    },
    /// List supported frame rates
    Info {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

fn show(timecode: &Timecode, as_json: bool) -> Result<()> {
    if as_json {
        let value = json!({
            "timecode": timecode,
            "hours": timecode.hours(),
            "minutes": timecode.minutes(),
            "seconds": timecode.seconds(),
            "frames": timecode.frames(),
            "rate": timecode.rate().description(),
            "total_frames": timecode.total_frames(),
            "total_seconds": timecode.total_seconds(),
            "ticks_27mhz": timecode.to_ticks_27mhz(),
            "ticks_pcr": timecode.to_ticks_pcr(),
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    println!("Timecode:      {}", timecode);
    println!("Rate:          {}", timecode.rate());
    println!(
        "Fields:        {}h {}m {}s {}f",
        timecode.hours(),
        timecode.minutes(),
        timecode.seconds(),
        timecode.frames()
    );
    println!("Total frames:  {}", timecode.total_frames());
    println!("Real seconds:  {:.6}", timecode.total_seconds());
    println!("27 MHz ticks:  {}", timecode.to_ticks_27mhz());
    println!("PCR ticks:     {}", timecode.to_ticks_pcr());
    Ok(())
}

fn show_info(as_json: bool) -> Result<()> {
    let rows: Vec<RateInfo> = FrameRate::ALL.iter().map(|&rate| rate.into()).collect();

    if as_json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    println!("\n=== Supported Frame Rates ===");
    for row in &rows {
        println!(
            "  • {:<6} {:<24} {:>10} fps  {:>8} frames/day  {:>8} ticks/frame{}",
            row.label,
            row.description,
            row.real_fps,
            row.frames_per_day,
            row.ticks_per_frame_27mhz,
            if row.drop_frame { "  (drop-frame)" } else { "" }
        );
    }

    println!("\n=== Example Usage ===");
    println!("  Show:     tc show 01:00:00;00 --rate 29.97df");
    println!("  Add:      tc add 00:01:00:29@29.97 00:00:00:02@29.97");
    println!("  Convert:  tc convert 00:12:33;26 --from 29.97df --to 25");
    println!("  Frames:   tc frames 17982 --rate 29.97df");
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = ToolConfig::load(cli.config.as_deref())?;
    init_logging(log_level(cli.debug, cli.verbose, config.log_level.as_deref())?);

    debug!("Using configuration {:?}", config);

    match cli.command {
        Commands::Demo => {
            for (rate, timecode) in ten_minutes(&config.demo_rates)? {
                println!("10 minutes at {}: {}", rate, timecode);
            }
        },
        Commands::Show { timecode, rate, json } => {
            let timecode = read_timecode(&timecode, rate.unwrap_or(config.default_rate))?;
            show(&timecode, json)?;
        },
        Commands::Add { a, b, rate } => {
            let rate = rate.unwrap_or(config.default_rate);
            let (a, b) = (read_timecode(&a, rate)?, read_timecode(&b, rate)?);
            let sum = a.checked_add(&b).with_context(|| format!("Cannot add {} and {}", a, b))?;
            info!("{} + {} = {} frames", a.total_frames(), b.total_frames(), sum.total_frames());
            println!("{}", sum);
        },
        Commands::Sub { a, b, rate } => {
            let rate = rate.unwrap_or(config.default_rate);
            let (a, b) = (read_timecode(&a, rate)?, read_timecode(&b, rate)?);
            let difference = a
                .checked_sub(&b)
                .with_context(|| format!("Cannot subtract {} from {}", b, a))?;
            info!(
                "{} - {} = {} frames",
                a.total_frames(),
                b.total_frames(),
                difference.total_frames()
            );
            println!("{}", difference);
        },
        Commands::Convert { timecode, from, to } => {
            let source = read_timecode(&timecode, from.unwrap_or(config.default_rate))?;
            let converted = source
                .to_rate(to)
                .with_context(|| format!("Cannot convert {} to {}", source, to))?;
            info!("Converted {} at {} to {} at {}", source, source.rate(), converted, to);
            println!("{}", converted);
        },
        Commands::Frames { count, rate } => {
            let rate = rate.unwrap_or(config.default_rate);
            let timecode = Timecode::from_total_frames(count, rate)
                .with_context(|| format!("No timecode for frame {} at {}", count, rate))?;
            println!("{}", timecode);
        },
        Commands::Info { json } => show_info(json)?,
    }

    Ok(())
}
