//! `fastzeta`: count zeros of zeta on the critical line.
//!
//! ```text
//! fastzeta LOWER UPPER SAMP [--threads N] [--stitch-boundaries] [--sequential]
//! fastzeta --validate
//! ```
//!
//! Stdout carries the estimate and the count; diagnostics go to stderr and are
//! controlled by `RUST_LOG`.

mod args;
mod error;

use std::process::ExitCode;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use fastZeta::evaluation::validation::{validate_zeros, DIRECT_SUM_TERMS};
use fastZeta::prelude::*;

use crate::args::Args;
use crate::error::{CliError, CliResult};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    debug!(?args, "parsed arguments");

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> CliResult<()> {
    if args.validate {
        return validate();
    }

    let (Some(lower), Some(upper), Some(samp)) = (args.lower, args.upper, args.samp) else {
        return Err(CliError::invalid_argument(
            "LOWER, UPPER and SAMP are required unless --validate is given",
        ));
    };

    let phase = if args.reduce_phase {
        PhaseReduction::Modulo
    } else {
        PhaseReduction::None
    };

    let builder = ZeroCounter::new()
        .range(lower, upper)
        .sampling(samp)
        .correction_order(usize::from(args.order))
        .phase_reduction(phase);

    let result = if args.sequential {
        let scan = builder.adapter(Sequential).build()?;
        announce(upper);
        scan.run()?
    } else {
        let mode = if args.stitch_boundaries {
            BoundaryMode::Stitched
        } else {
            BoundaryMode::Isolated
        };
        let mut parallel = builder.adapter(Parallel).boundary_mode(mode);
        if let Some(threads) = args.threads {
            parallel = parallel.workers(threads);
        }
        let scan = parallel.build()?;
        announce(upper);
        scan.run()?
    };

    println!(
        "I found {} Zeros in {:.3} seconds",
        result.sign_changes, result.elapsed_seconds
    );
    Ok(())
}

/// Printed once the configuration is valid and before the scan starts.
fn announce(upper: f64) {
    println!("I estimate I will find {:.3} zeros", estimate_zero_count(upper));
}

fn validate() -> CliResult<()> {
    let upper = KNOWN_ZEROS.iter().copied().fold(0.0, f64::max);
    let tables = LookupTables::for_upper(upper)?;
    let evaluator = RiemannSiegel::new(&tables);

    println!("{:>30} {:>30} {:>24}", "t", "Z(t)", "|zeta(1/2+it)|");
    for row in validate_zeros(&evaluator, &KNOWN_ZEROS, DIRECT_SUM_TERMS)? {
        let zeta = row
            .zeta_modulus
            .map_or_else(|| "-".to_string(), |m| format!("{m:.20}"));
        println!("{:>30.20} {:>30.20} {:>24}", row.t, row.z, zeta);
    }
    Ok(())
}
