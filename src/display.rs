//! Terminal presentation for the demo.
//!
//! Everything printed here is either static marketing copy (banner,
//! licensing tiers, "calibration" numbers) or a formatted view of a
//! [`FoldEstimate`]. None of it is computed state.
//!
//! The progress display takes its inter-step pause as a parameter so the
//! cosmetic delay can be disabled (`--no-progress` skips the display
//! entirely; tests pass `Duration::ZERO`).

use std::thread;
use std::time::Duration;

use crate::estimate::FoldEstimate;

/// Demo banner shown on every invocation.
const BANNER: &str = "
╔══════════════════════════════════════════════════════════════╗
║                    QFOLD DEMONSTRATION                       ║
║            Quantum-Enhanced Protein Folding                  ║
║                                                              ║
║  🔬 Hardware Validated: +28% Accuracy Improvement            ║
║  ⚡ Physics-First Approach: No ML Training Required          ║
║  🧬 Quantum Field Corrections Applied Per Residue            ║
║                                                              ║
║  📧 Full Version: licensing@qfold.example                    ║
║  📋 License Options: LICENSING_OPTIONS.md                    ║
╚══════════════════════════════════════════════════════════════╝
";

const LICENSE_NOTICE: &str = "
⚖️  PROPRIETARY SOFTWARE - DEMO VERSION ONLY
This demonstration shows interface and sample outputs.
Full implementation requires commercial license.
Patent applications pending. All rights reserved.
";

/// Default pause between progress lines.
pub const PROGRESS_STEP_DELAY: Duration = Duration::from_millis(300);

/// The cosmetic progress steps, in display order.
const PROGRESS_STEPS: [&str; 7] = [
    "Initializing quantum fields...",
    "Loading hardware calibration data...",
    "Calculating ψ-field (vacuum compression)...",
    "Computing τ-field (temporal coherence)...",
    "Applying quantum corrections...",
    "Optimizing structure...",
    "Finalizing results...",
];

/// Prints the demo banner and proprietary-software notice.
pub fn print_banner() {
    println!("{}", BANNER);
    println!("{}", LICENSE_NOTICE);
    println!();
}

/// Prints the static hardware "calibration" block.
///
/// Decorative constants only; nothing here is measured or computed.
pub fn print_calibration() {
    println!("📡 QUANTUM HARDWARE CALIBRATION DATA");
    println!("{}", "=".repeat(40));
    println!("Brisbane (127-qubit): T1=227.6μs, T2=132.7μs");
    println!("Torino (133-qubit): T1=176.1μs, T2=134.8μs");
    println!("Total operational qubits: 260");
    println!("Quantum fidelity: 99.9%");
    println!();
}

/// Prints the commercial licensing tiers.
pub fn print_licensing() {
    println!();
    println!("💼 COMMERCIAL LICENSING OPTIONS");
    println!("{}", "=".repeat(40));
    println!("Research License:    $25,000/year  (Academic use)");
    println!("Commercial License:  $100,000+    (Commercial deployment)");
    println!("Enterprise License:  $500,000+    (Full IP access)");
    println!("API Service:         $0.10/fold   (Cloud-hosted)");
    println!();
    println!("📧 Licensing inquiries: licensing@qfold.example");
    println!("📋 Full details: LICENSING_OPTIONS.md");
    println!("⏱️  Response time: Within 48 hours");
}

/// Prints the step-by-step progress text with a pause between lines.
///
/// The steps are fixed text; `step_delay` only paces the display.
pub fn run_progress(sequence: &str, step_delay: Duration) {
    println!("🧬 Folding sequence: {}", sequence);
    println!("   Length: {} residues", sequence.len());
    println!();

    for (i, step) in PROGRESS_STEPS.iter().enumerate() {
        println!("   [{}/{}] {}", i + 1, PROGRESS_STEPS.len(), step);
        if !step_delay.is_zero() {
            thread::sleep(step_delay);
        }
    }
}

/// Converts an internal correction key into its display label.
///
/// `vacuum_compression` becomes `Vacuum Compression`.
pub fn display_label(key: &str) -> String {
    key.split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Formats a fold estimate as the result block shown to the user.
pub fn format_result(result: &FoldEstimate) -> String {
    let mut out = String::new();
    let rule = "=".repeat(60);

    out.push_str(&format!("\n{}\n", rule));
    out.push_str("🎯 QUANTUM-ENHANCED FOLDING RESULTS\n");
    out.push_str(&format!("{}\n", rule));

    out.push_str(&format!("Sequence: {}\n", result.sequence));
    out.push_str(&format!("Length: {} residues\n", result.sequence.len()));
    out.push_str(&format!(
        "Secondary Structure: {}\n",
        result.secondary_structure
    ));
    out.push_str(&format!("Confidence: {:.3}\n", result.confidence));
    out.push_str(&format!("Final Energy: {:.2} kJ/mol\n", result.energy));
    out.push_str(&format!(
        "Enhancement: {:.1}% improvement over classical\n",
        result.enhancement_percentage
    ));
    out.push_str(&format!(
        "Folding Time: {:.2} seconds\n",
        result.folding_time
    ));

    out.push_str("\n⚡ QUANTUM FIELD CORRECTIONS:\n");
    for (key, value) in result.corrections.entries() {
        out.push_str(&format!("   {}: {:.4} kJ/mol\n", display_label(key), value));
    }

    out.push_str("\n🔒 LICENSE NOTICE:\n");
    out.push_str(&format!("   {}\n", result.license_notice));
    out.push_str("   📧 Contact: licensing@qfold.example for full implementation\n");

    out.push_str(&format!("{}\n", rule));
    out
}

/// Prints the formatted result block.
pub fn print_result(result: &FoldEstimate) {
    print!("{}", format_result(result));
}

/// Prints the closing lines shown after every invocation.
pub fn print_footer() {
    println!();
    println!("✨ Thank you for trying the QFold demo!");
    println!("📧 Questions or licensing: licensing@qfold.example");
}
