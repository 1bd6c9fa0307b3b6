//! Folding result estimation.
//!
//! This is a demonstration, not a folding engine. Results come from one of
//! two places:
//! - a table of pre-recorded payloads for a handful of showcase sequences,
//!   returned verbatim
//! - a fallback that classifies each residue with a fixed per-letter rule
//!   and fills the numeric fields with bounded random values
//!
//! All randomness flows through the caller-supplied [`rand::Rng`], so tests
//! can drive the fallback with a seeded generator and assert exact bounds.

use std::collections::HashMap;
use std::time::Instant;

use rand::Rng;

use crate::sequence::Sequence;

/// Secondary structure class assigned to a single residue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Structure {
    Helix,
    Beta,
    Loop,
}

impl Structure {
    /// Classifies a residue by membership in fixed helix- and beta-favoring
    /// subsets. Context-free: the class depends on this residue only.
    pub fn classify(residue: char) -> Self {
        if "AELM".contains(residue) {
            Structure::Helix
        } else if "VIFY".contains(residue) {
            Structure::Beta
        } else {
            Structure::Loop
        }
    }

    /// One-letter code used in structure strings.
    pub fn code(&self) -> char {
        match self {
            Structure::Helix => 'H',
            Structure::Beta => 'B',
            Structure::Loop => 'L',
        }
    }
}

/// The five named correction terms reported with every estimate.
///
/// The names are marketing flavor with no physical meaning; the fixed key
/// order matters only for display.
#[derive(Debug, Clone, PartialEq)]
pub struct Corrections {
    pub vacuum_compression: f64,
    pub time_structure: f64,
    pub recursive_coupling: f64,
    pub nonlocal_correlation: f64,
    pub phase_coherence: f64,
}

impl Corrections {
    /// Returns the terms as (key, value) pairs in display order.
    pub fn entries(&self) -> [(&'static str, f64); 5] {
        [
            ("vacuum_compression", self.vacuum_compression),
            ("time_structure", self.time_structure),
            ("recursive_coupling", self.recursive_coupling),
            ("nonlocal_correlation", self.nonlocal_correlation),
            ("phase_coherence", self.phase_coherence),
        ]
    }

    /// Draws fallback correction terms for a sequence of `n` residues.
    ///
    /// Each term is a fixed coefficient times `n` times a uniform multiplier
    /// from a per-term interval.
    fn sample<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Self {
        let n = n as f64;
        Self {
            vacuum_compression: -0.1 * n * rng.random_range(0.8..1.2),
            time_structure: 0.05 * n * rng.random_range(0.9..1.1),
            recursive_coupling: -0.03 * n * rng.random_range(0.7..1.3),
            nonlocal_correlation: 0.01 * n * rng.random_range(0.5..1.5),
            phase_coherence: 0.15 * n * rng.random_range(1.0..1.2),
        }
    }
}

/// A complete fabricated folding result.
#[derive(Debug, Clone)]
pub struct FoldEstimate {
    pub sequence: String,
    /// Per-residue classification over {H, B, L}. Known results carry their
    /// recorded string verbatim.
    pub secondary_structure: String,
    pub confidence: f64,
    /// "Final energy" in kJ/mol.
    pub energy: f64,
    pub enhancement_percentage: f64,
    pub corrections: Corrections,
    /// Reported wall-clock seconds, padded so the demo never looks
    /// suspiciously fast.
    pub folding_time: f64,
    pub license_notice: &'static str,
}

/// A pre-recorded payload for one showcase sequence.
#[derive(Debug, Clone)]
struct KnownResult {
    secondary_structure: &'static str,
    confidence: f64,
    energy: f64,
    enhancement: f64,
    corrections: Corrections,
}

/// The table of pre-recorded showcase results.
///
/// An arbitrary finite set of literal overrides keyed by exact sequence;
/// built once, never mutated.
#[derive(Debug)]
struct KnownResults {
    entries: HashMap<&'static str, KnownResult>,
}

impl KnownResults {
    fn new() -> Self {
        let mut entries = HashMap::new();

        entries.insert(
            "MKTAYIAKQRQISFVKSHFSRQ",
            KnownResult {
                secondary_structure: "HHHLLLLLLBBBLLLLLLLLLL",
                confidence: 0.847,
                energy: -127.34,
                enhancement: 28.4,
                corrections: Corrections {
                    vacuum_compression: -2.1847,
                    time_structure: 1.0234,
                    recursive_coupling: -0.5621,
                    nonlocal_correlation: 0.2184,
                    phase_coherence: 3.7291,
                },
            },
        );

        // Insulin B chain
        entries.insert(
            "FVNQHLCGSHLVEALYLVCGERGFFYTPKT",
            KnownResult {
                secondary_structure: "LLLLLLHHHHHHHHHHLLLBBBBBBBBB",
                confidence: 0.892,
                energy: -198.76,
                enhancement: 31.2,
                corrections: Corrections {
                    vacuum_compression: -3.2156,
                    time_structure: 1.5672,
                    recursive_coupling: -0.8934,
                    nonlocal_correlation: 0.3421,
                    phase_coherence: 5.1238,
                },
            },
        );

        // Mixed structure
        entries.insert(
            "GSPATVSTYQRKFMWLNPGE",
            KnownResult {
                secondary_structure: "LLHHHLLBBBLLLHHHLLL",
                confidence: 0.763,
                energy: -89.12,
                enhancement: 22.7,
                corrections: Corrections {
                    vacuum_compression: -1.4523,
                    time_structure: 0.7891,
                    recursive_coupling: -0.3456,
                    nonlocal_correlation: 0.1234,
                    phase_coherence: 2.3456,
                },
            },
        );

        // Beta-forming
        entries.insert(
            "VKVKVKVKVKVKVKVK",
            KnownResult {
                secondary_structure: "BBBBBBBBBBBBBBBB",
                confidence: 0.934,
                energy: -76.45,
                enhancement: 35.1,
                corrections: Corrections {
                    vacuum_compression: -1.8765,
                    time_structure: 0.4321,
                    recursive_coupling: -0.6789,
                    nonlocal_correlation: 0.0987,
                    phase_coherence: 1.9876,
                },
            },
        );

        Self { entries }
    }

    fn get(&self, sequence: &str) -> Option<&KnownResult> {
        self.entries.get(sequence)
    }

    fn contains(&self, sequence: &str) -> bool {
        self.entries.contains_key(sequence)
    }
}

/// Notice attached to pre-recorded results.
const KNOWN_NOTICE: &str = "Full analysis requires licensed version";

/// Notice attached to fallback results.
const FALLBACK_NOTICE: &str = "Demo result - Full version available for licensing";

// Padding added to the measured elapsed time so both paths report a
// plausible duration.
const KNOWN_TIME_PAD: f64 = 1.2;
const FALLBACK_TIME_PAD: f64 = 1.5;

/// Produces fold estimates from the known-result table or the fallback rules.
#[derive(Debug)]
pub struct Estimator {
    known: KnownResults,
}

impl Estimator {
    /// Creates an estimator with the built-in showcase table.
    pub fn new() -> Self {
        Self {
            known: KnownResults::new(),
        }
    }

    /// Returns true if the sequence has a pre-recorded showcase result.
    pub fn is_known(&self, sequence: &str) -> bool {
        self.known.contains(sequence)
    }

    /// Returns an estimate for a validated sequence.
    ///
    /// Known sequences return their recorded payload; anything else gets the
    /// per-residue fallback with bounded random numeric fields.
    pub fn estimate<R: Rng + ?Sized>(&self, seq: &Sequence, rng: &mut R) -> FoldEstimate {
        let start = Instant::now();

        if let Some(known) = self.known.get(seq.as_str()) {
            return FoldEstimate {
                sequence: seq.as_str().to_string(),
                secondary_structure: known.secondary_structure.to_string(),
                confidence: known.confidence,
                energy: known.energy,
                enhancement_percentage: known.enhancement,
                corrections: known.corrections.clone(),
                folding_time: start.elapsed().as_secs_f64() + KNOWN_TIME_PAD,
                license_notice: KNOWN_NOTICE,
            };
        }

        self.fallback(seq, start, rng)
    }

    /// Fabricates a plausible-looking result for an unknown sequence.
    fn fallback<R: Rng + ?Sized>(
        &self,
        seq: &Sequence,
        start: Instant,
        rng: &mut R,
    ) -> FoldEstimate {
        let n = seq.len();

        let secondary_structure: String = seq
            .as_str()
            .chars()
            .map(|residue| Structure::classify(residue).code())
            .collect();

        FoldEstimate {
            sequence: seq.as_str().to_string(),
            secondary_structure,
            confidence: (0.6 + 0.3 * rng.random::<f64>()).min(0.95),
            energy: -3.5 * n as f64 + 10.0 * rng.random::<f64>(),
            enhancement_percentage: 15.0 + 20.0 * rng.random::<f64>(),
            corrections: Corrections::sample(n, rng),
            folding_time: start.elapsed().as_secs_f64() + FALLBACK_TIME_PAD,
            license_notice: FALLBACK_NOTICE,
        }
    }
}

impl Default for Estimator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn estimate(raw: &str, seed: u64) -> FoldEstimate {
        let seq = Sequence::parse(raw).unwrap();
        let mut rng = StdRng::seed_from_u64(seed);
        Estimator::new().estimate(&seq, &mut rng)
    }

    #[test]
    fn test_classify_helix_favoring() {
        for residue in "AELM".chars() {
            assert_eq!(Structure::classify(residue), Structure::Helix);
        }
    }

    #[test]
    fn test_classify_beta_favoring() {
        for residue in "VIFY".chars() {
            assert_eq!(Structure::classify(residue), Structure::Beta);
        }
    }

    #[test]
    fn test_classify_defaults_to_loop() {
        for residue in "CDGHKNPQRSTW".chars() {
            assert_eq!(Structure::classify(residue), Structure::Loop);
        }
    }

    #[test]
    fn test_known_beta_forming_sequence() {
        let result = estimate("VKVKVKVKVKVKVKVK", 0);
        assert_eq!(result.secondary_structure, "BBBBBBBBBBBBBBBB");
        assert_eq!(result.confidence, 0.934);
        assert_eq!(result.energy, -76.45);
        assert_eq!(result.enhancement_percentage, 35.1);
        assert_eq!(result.corrections.vacuum_compression, -1.8765);
        assert_eq!(result.corrections.time_structure, 0.4321);
        assert_eq!(result.corrections.recursive_coupling, -0.6789);
        assert_eq!(result.corrections.nonlocal_correlation, 0.0987);
        assert_eq!(result.corrections.phase_coherence, 1.9876);
        assert_eq!(result.license_notice, "Full analysis requires licensed version");
    }

    #[test]
    fn test_known_default_sequence() {
        let result = estimate("MKTAYIAKQRQISFVKSHFSRQ", 0);
        assert_eq!(result.secondary_structure, "HHHLLLLLLBBBLLLLLLLLLL");
        assert_eq!(result.confidence, 0.847);
        assert_eq!(result.energy, -127.34);
        assert_eq!(result.enhancement_percentage, 28.4);
    }

    #[test]
    fn test_known_results_are_seed_independent() {
        let a = estimate("GSPATVSTYQRKFMWLNPGE", 1);
        let b = estimate("GSPATVSTYQRKFMWLNPGE", 99);
        assert_eq!(a.confidence, b.confidence);
        assert_eq!(a.energy, b.energy);
        assert_eq!(a.corrections, b.corrections);
    }

    #[test]
    fn test_fallback_structure_matches_input_length() {
        let result = estimate("MKTAYIAKQ", 7);
        assert_eq!(result.secondary_structure.len(), 9);
        assert!(result
            .secondary_structure
            .chars()
            .all(|c| matches!(c, 'H' | 'B' | 'L')));
    }

    #[test]
    fn test_fallback_structure_is_per_residue() {
        // A, E, L helix-favoring; V, I beta-favoring
        let result = estimate("AEVIL", 3);
        assert_eq!(result.secondary_structure, "HHBBH");
    }

    #[test]
    fn test_fallback_numeric_bounds() {
        let n = 9usize;
        for seed in 0..200 {
            let result = estimate("MKTAYIAKQ", seed);
            let nf = n as f64;

            assert!(result.confidence >= 0.6 && result.confidence <= 0.95);
            assert!(result.energy >= -3.5 * nf && result.energy < -3.5 * nf + 10.0);
            assert!(
                result.enhancement_percentage >= 15.0 && result.enhancement_percentage < 35.0
            );

            let c = &result.corrections;
            assert!(c.vacuum_compression <= -0.1 * nf * 0.8);
            assert!(c.vacuum_compression >= -0.1 * nf * 1.2);
            assert!(c.time_structure >= 0.05 * nf * 0.9);
            assert!(c.time_structure <= 0.05 * nf * 1.1);
            assert!(c.recursive_coupling <= -0.03 * nf * 0.7);
            assert!(c.recursive_coupling >= -0.03 * nf * 1.3);
            assert!(c.nonlocal_correlation >= 0.01 * nf * 0.5);
            assert!(c.nonlocal_correlation <= 0.01 * nf * 1.5);
            assert!(c.phase_coherence >= 0.15 * nf * 1.0);
            assert!(c.phase_coherence <= 0.15 * nf * 1.2);
        }
    }

    #[test]
    fn test_fallback_is_deterministic_for_a_fixed_seed() {
        let a = estimate("MKTAYIAKQ", 42);
        let b = estimate("MKTAYIAKQ", 42);
        assert_eq!(a.confidence, b.confidence);
        assert_eq!(a.energy, b.energy);
        assert_eq!(a.corrections, b.corrections);
    }

    #[test]
    fn test_folding_time_is_padded() {
        let known = estimate("VKVKVKVKVKVKVKVK", 0);
        assert!(known.folding_time >= 1.2);

        let fallback = estimate("MKTAYIAKQ", 0);
        assert!(fallback.folding_time >= 1.5);
    }

    #[test]
    fn test_corrections_entries_order() {
        let result = estimate("MKTAYIAKQ", 5);
        let keys: Vec<&str> = result.corrections.entries().iter().map(|(k, _)| *k).collect();
        assert_eq!(
            keys,
            vec![
                "vacuum_compression",
                "time_structure",
                "recursive_coupling",
                "nonlocal_correlation",
                "phase_coherence"
            ]
        );
    }

    #[test]
    fn test_known_table_membership() {
        let estimator = Estimator::new();
        assert!(estimator.is_known("VKVKVKVKVKVKVKVK"));
        assert!(estimator.is_known("FVNQHLCGSHLVEALYLVCGERGFFYTPKT"));
        assert!(estimator.is_known("GSPATVSTYQRKFMWLNPGE"));
        assert!(!estimator.is_known("AEVIL"));
    }
}
