//! # QFold Demo - Quantum-Enhanced Protein Folding (demonstration version)
//!
//! A promotional demonstration binary. It validates an amino-acid sequence,
//! then returns either a pre-recorded showcase result or a fabricated one
//! built from simple per-residue rules and bounded random values. No real
//! folding computation happens anywhere in this crate.
//!
//! ## Architecture
//!
//! - `sequence`: validated amino-acid sequence type and input checks
//! - `estimate`: known-result table and the randomized fallback estimator
//! - `display`: banner, progress, calibration, licensing, and result text
//!
//! Randomness is confined to the fallback path and injected via
//! [`rand::Rng`]; the cosmetic progress delay is a parameter. Both can be
//! switched off in tests.

pub mod display;
pub mod estimate;
pub mod sequence;
