//! Command-line arguments

use clap::Parser;

/// Count sign changes of the Riemann-Siegel Z-function on [LOWER, UPPER].
#[derive(Debug, Parser)]
#[command(name = "fastzeta", version, about)]
pub struct Args {
    /// Lower bound of the sampled interval (>= 0)
    #[arg(required_unless_present = "validate", allow_negative_numbers = true)]
    pub lower: Option<f64>,

    /// Upper bound of the sampled interval (>= LOWER)
    #[arg(required_unless_present = "validate", allow_negative_numbers = true)]
    pub upper: Option<f64>,

    /// Samples per unit interval (>= 1)
    #[arg(required_unless_present = "validate", allow_negative_numbers = true)]
    pub samp: Option<f64>,

    /// Number of worker threads (defaults to the available parallelism)
    #[arg(short = 't', long, env = "FASTZETA_THREADS")]
    pub threads: Option<usize>,

    /// Compare samples across block boundaries so the count does not depend on --threads
    #[arg(long)]
    pub stitch_boundaries: bool,

    /// Reduce the main-sum phase modulo 2π before taking the cosine
    #[arg(long)]
    pub reduce_phase: bool,

    /// Truncation order of the correction series (0-4)
    #[arg(long, default_value_t = 4, value_parser = clap::value_parser!(u8).range(0..=4))]
    pub order: u8,

    /// Run the single-threaded reference scan
    #[arg(long, conflicts_with = "stitch_boundaries")]
    pub sequential: bool,

    /// Evaluate Z(t) at published zeros instead of scanning
    #[arg(long, conflicts_with_all = ["lower", "upper", "samp"])]
    pub validate: bool,
}
