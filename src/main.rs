//! QFold Demo - command line entry point.
//!
//! ## Usage
//!
//! ```bash
//! qfold                          # fold the built-in example sequence
//! qfold -s VKVKVKVKVKVKVKVK     # fold a specific sequence
//! qfold -c -l                    # also print calibration and licensing
//! qfold --no-progress            # skip the cosmetic progress display
//! ```
//!
//! Every path terminates normally: validation failures and unexpected
//! errors are reported on the console and the process still exits 0.

// Use jemalloc for better memory management (returns memory to OS)
#[cfg(not(windows))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

use std::time::Duration;

use anyhow::Result;
use clap::Parser;

use qfold_demo::display;
use qfold_demo::estimate::Estimator;
use qfold_demo::sequence::{Sequence, SequenceError, ALPHABET};

/// QFold - Quantum-Enhanced Protein Folding (demonstration version)
///
/// Shows the interface and sample outputs of the full product.
/// The full implementation is available under commercial license.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Protein amino acid sequence to fold
    #[arg(short = 's', long = "sequence", default_value = "MKTAYIAKQRQISFVKSHFSRQ")]
    sequence: String,

    /// Show quantum hardware calibration data
    #[arg(short = 'c', long = "show-calibration")]
    show_calibration: bool,

    /// Show commercial licensing options
    #[arg(short = 'l', long = "licensing-info")]
    licensing_info: bool,

    /// Skip the step-by-step progress display
    #[arg(long = "no-progress")]
    no_progress: bool,
}

/// Runs the fold for a validated sequence and prints the result block.
fn run_fold(seq: &Sequence, show_progress: bool) -> Result<()> {
    if show_progress {
        display::run_progress(seq.as_str(), display::PROGRESS_STEP_DELAY);
    }

    let estimator = Estimator::new();
    let result = estimator.estimate(seq, &mut rand::rng());
    display::print_result(&result);

    Ok(())
}

/// Reports a validation failure without aborting the program.
fn report_invalid_input(err: &SequenceError) {
    match err {
        SequenceError::InvalidResidue { .. } => {
            println!("❌ Error: Invalid amino acid sequence");
            println!("   Use only standard 20 amino acids: {}", ALPHABET);
        }
        SequenceError::TooShort { .. } => {
            println!("❌ Error: Sequence too short (minimum 5 residues)");
        }
        SequenceError::TooLong { .. } => {
            // Unsupported, not erroneous: the unbounded path is not in the demo
            println!("⚠️  Warning: Demo limited to sequences ≤100 residues");
            println!("   Full version supports unlimited length");
            println!("   📧 Contact licensing@qfold.example for licensing");
        }
    }
}

fn main() {
    let args = Args::parse();

    display::print_banner();

    if args.show_calibration {
        display::print_calibration();
    }

    match Sequence::parse(&args.sequence) {
        Ok(seq) => {
            if let Err(err) = run_fold(&seq, !args.no_progress) {
                println!("❌ Demo error: {}", err);
                println!("📧 For support: licensing@qfold.example");
            }
        }
        Err(err) => report_invalid_input(&err),
    }

    if args.licensing_info {
        display::print_licensing();
    }

    display::print_footer();
}
