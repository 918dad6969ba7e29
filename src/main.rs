//! Command-line harness that samples a filter's step response.
//!
//! The response is written to stdout as JSON so it can be plotted by any
//! external tool; a short summary is logged.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::info;
use strider::{init_logging, sample_step_response, FilterTuning, RigConfig, Stabilisation};

/// Command-line names for [`Stabilisation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Strategy {
    /// Cost grows with the sample interval
    Substep,
    /// Constant cost per sample
    PoleMatching,
}

impl From<Strategy> for Stabilisation {
    fn from(strategy: Strategy) -> Self {
        match strategy {
            Strategy::Substep => Self::Substep,
            Strategy::PoleMatching => Self::PoleMatching,
        }
    }
}

/// Sample the step response of a second-order dynamics filter
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Rig config file; its filter section replaces the defaults
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Natural frequency in Hz
    #[arg(short, long)]
    frequency: Option<f32>,

    /// Damping ratio
    #[arg(short, long)]
    damping: Option<f32>,

    /// Initial response gain
    #[arg(short, long, allow_negative_numbers = true)]
    response: Option<f32>,

    /// Stability strategy
    #[arg(short, long, value_enum)]
    strategy: Option<Strategy>,

    /// Seconds per sample
    #[arg(long, default_value_t = 1.0 / 60.0)]
    delta_time: f32,

    /// Number of samples
    #[arg(short = 'n', long, default_value_t = 300)]
    samples: usize,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn tuning(&self, base: FilterTuning) -> FilterTuning {
        FilterTuning::new(
            self.frequency.unwrap_or(base.frequency),
            self.damping.unwrap_or(base.damping),
            self.response.unwrap_or(base.response),
        )
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let rig = match &args.config {
        Some(path) => RigConfig::load(path)
            .with_context(|| format!("loading rig config {}", path.display()))?,
        None => RigConfig::default(),
    };
    let tuning = args.tuning(rig.filter);
    let stabilisation = args.strategy.map_or(rig.stabilisation, Stabilisation::from);

    let response = sample_step_response(tuning, stabilisation, args.delta_time, args.samples)
        .context("sampling step response")?;

    info!(
        "f={} z={} r={} ({stabilisation:?}): peak {:.4}, overshoot {:.4}, settled {:?}",
        tuning.frequency,
        tuning.damping,
        tuning.response,
        response.peak(),
        response.overshoot(),
        response.settling_time(0.02)
    );

    let mut out = io::stdout().lock();
    serde_json::to_writer_pretty(&mut out, &response).context("writing response")?;
    writeln!(out).context("writing response")?;
    Ok(())
}
