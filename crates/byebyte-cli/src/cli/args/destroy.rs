//! Arguments for `byebyte destroy`.

use byebyte_core::engine::{DEFAULT_CONTINUOUS_CHANCE, DEFAULT_TIMES};
use byebyte_core::{DestroyOptions, RangeSpec};
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug, Clone)]
pub struct DestroyArgs {
    /// File to read
    #[arg(short, long)]
    pub input: PathBuf,

    /// Where to write the corrupted copy (not required with --dry-run)
    #[arg(short, long, required_unless_present = "dry_run")]
    pub output: Option<PathBuf>,

    /// The number of times to corrupt a random byte in the file
    #[arg(short, long, default_value_t = DEFAULT_TIMES, env = "BYEBYTE_TIMES")]
    pub times: usize,

    /// Randomly continue corrupting the next byte instead of jumping elsewhere
    #[arg(short, long)]
    pub continuous: bool,

    /// Chance from 0 to 1 (0.1 = 10%) to corrupt the byte right after the
    /// last one instead of a random one
    #[arg(
        short = 'C',
        long,
        default_value_t = DEFAULT_CONTINUOUS_CHANCE,
        env = "BYEBYTE_CONTINUOUS_CHANCE"
    )]
    pub continuous_chance: f64,

    /// Space the corruptions evenly over the range
    #[arg(short, long, conflicts_with = "continuous")]
    pub discrete: bool,

    /// First byte offset eligible for corruption
    #[arg(long, conflicts_with_all = ["min", "max"])]
    pub start: Option<usize>,

    /// Last byte offset eligible for corruption
    #[arg(long, conflicts_with_all = ["min", "max"])]
    pub stop: Option<usize>,

    /// Start of the range as a fraction of the file length (0 - 1)
    #[arg(long)]
    pub min: Option<f64>,

    /// End of the range as a fraction of the file length (0 - 1)
    #[arg(long)]
    pub max: Option<f64>,

    /// Seed for reproducible corruption
    #[arg(long, env = "BYEBYTE_SEED")]
    pub seed: Option<u64>,

    /// Path to write machine-readable JSON report
    #[arg(long)]
    pub report: Option<PathBuf>,

    /// Resolve and print the corruption window, then exit without writing
    #[arg(long)]
    pub dry_run: bool,
}

impl DestroyArgs {
    pub fn options(&self) -> DestroyOptions {
        let range = if self.min.is_some() || self.max.is_some() {
            RangeSpec::Fractions {
                min: self.min.unwrap_or(0.0),
                max: self.max.unwrap_or(1.0),
            }
        } else {
            RangeSpec::Offsets {
                start: self.start,
                stop: self.stop,
            }
        };
        DestroyOptions {
            times: self.times,
            range,
            continuous: self.continuous,
            continuous_chance: self.continuous_chance,
            discrete: self.discrete,
        }
    }
}
