//! Amino-acid sequence validation.
//!
//! This module defines the `Sequence` newtype and the checks applied to raw
//! command-line input before any estimation runs:
//! - every residue must be one of the 20 standard one-letter codes
//! - length must be within the bounds supported by the demo path
//!
//! Input is normalized (trimmed, uppercased) before validation, so
//! `"mktay"` and `" MKTAY "` both yield the canonical `"MKTAY"`.

use thiserror::Error;

/// The 20 standard amino acid one-letter codes.
pub const ALPHABET: &str = "ACDEFGHIKLMNPQRSTVWY";

/// Minimum sequence length accepted by the demo.
pub const MIN_LEN: usize = 5;

/// Maximum sequence length accepted by the demo. The full product claims an
/// unbounded path; this binary does not implement it.
pub const MAX_LEN: usize = 100;

/// Errors that can occur while validating a sequence.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum SequenceError {
    #[error("invalid residue '{residue}' at position {position} (use only {ALPHABET})")]
    InvalidResidue { residue: char, position: usize },

    #[error("sequence too short: {len} residues (minimum {MIN_LEN})")]
    TooShort { len: usize },

    #[error("sequence length {len} exceeds the demo limit of {MAX_LEN} residues")]
    TooLong { len: usize },
}

/// Result type for sequence validation.
pub type SequenceResult<T> = Result<T, SequenceError>;

/// A validated amino-acid sequence.
///
/// Construction goes through [`Sequence::parse`], so holding a `Sequence`
/// guarantees the alphabet and length invariants. The data is immutable
/// after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence(String);

impl Sequence {
    /// Normalizes and validates raw input into a `Sequence`.
    ///
    /// Surrounding whitespace is trimmed and letters are uppercased before
    /// validation. The first offending residue is reported with its
    /// 1-indexed position.
    ///
    /// # Examples
    ///
    /// ```
    /// use qfold_demo::sequence::Sequence;
    ///
    /// let seq = Sequence::parse("mktayiakq").unwrap();
    /// assert_eq!(seq.as_str(), "MKTAYIAKQ");
    /// ```
    pub fn parse(raw: &str) -> SequenceResult<Self> {
        let normalized = raw.trim().to_uppercase();

        for (i, residue) in normalized.chars().enumerate() {
            if !ALPHABET.contains(residue) {
                return Err(SequenceError::InvalidResidue {
                    residue,
                    position: i + 1,
                });
            }
        }

        let len = normalized.chars().count();
        if len < MIN_LEN {
            return Err(SequenceError::TooShort { len });
        }
        if len > MAX_LEN {
            return Err(SequenceError::TooLong { len });
        }

        Ok(Self(normalized))
    }

    /// Returns the sequence as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the number of residues.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the sequence is empty (unreachable for parsed input).
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for Sequence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_sequence() {
        let seq = Sequence::parse("MKTAYIAKQRQISFVKSHFSRQ").unwrap();
        assert_eq!(seq.as_str(), "MKTAYIAKQRQISFVKSHFSRQ");
        assert_eq!(seq.len(), 22);
    }

    #[test]
    fn test_parse_normalizes_case_and_whitespace() {
        let seq = Sequence::parse("  mktay \n").unwrap();
        assert_eq!(seq.as_str(), "MKTAY");
    }

    #[test]
    fn test_invalid_residue_rejected() {
        // B, J, O, U, X, Z are not standard amino acid codes
        let result = Sequence::parse("MKTXY");
        assert_eq!(
            result,
            Err(SequenceError::InvalidResidue {
                residue: 'X',
                position: 4
            })
        );
    }

    #[test]
    fn test_invalid_residue_checked_before_length() {
        // Alphabet violations are reported even on too-short input
        let result = Sequence::parse("M1K");
        assert!(matches!(
            result,
            Err(SequenceError::InvalidResidue { residue: '1', .. })
        ));
    }

    #[test]
    fn test_too_short_rejected() {
        let result = Sequence::parse("MKTA");
        assert_eq!(result, Err(SequenceError::TooShort { len: 4 }));
    }

    #[test]
    fn test_minimum_length_accepted() {
        assert!(Sequence::parse("MKTAY").is_ok());
    }

    #[test]
    fn test_too_long_rejected_with_distinct_variant() {
        let raw: String = std::iter::repeat('A').take(101).collect();
        let result = Sequence::parse(&raw);
        assert_eq!(result, Err(SequenceError::TooLong { len: 101 }));
    }

    #[test]
    fn test_maximum_length_accepted() {
        let raw: String = std::iter::repeat('A').take(100).collect();
        assert!(Sequence::parse(&raw).is_ok());
    }

    #[test]
    fn test_full_alphabet_accepted() {
        let seq = Sequence::parse(ALPHABET).unwrap();
        assert_eq!(seq.len(), 20);
    }
}
