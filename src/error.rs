//! Rich diagnostic error types for seshat.
//!
//! Each subsystem defines its own error type with miette `#[diagnostic]`
//! derives, providing error codes and help text so users know exactly which
//! rule was malformed and how to fix it.

use miette::Diagnostic;
use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type SeshatResult<T> = Result<T, SeshatError>;

/// Top-level error type for seshat.
#[derive(Debug, Error, Diagnostic)]
pub enum SeshatError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Rule(#[from] RuleError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Miner(#[from] MinerError),
}

// ---------------------------------------------------------------------------
// Rule validation errors
// ---------------------------------------------------------------------------

/// Errors raised when a rule set fails boundary validation.
///
/// Validation runs once, when a [`crate::rule::RuleSet`] is constructed;
/// the calculator itself never raises. Indices refer to generation order
/// (0-based position in the input sequence).
#[derive(Debug, Error, Diagnostic)]
pub enum RuleError {
    #[error("rule #{index}: {side} item set is empty")]
    #[diagnostic(
        code(seshat::rule::empty_side),
        help(
            "Both sides of a rule must be non-empty item sets. \
             Check the rule generator's output for rule #{index}."
        )
    )]
    EmptySide { index: usize, side: &'static str },

    #[error("rule #{index}: antecedent and consequent share item \"{label}\"")]
    #[diagnostic(
        code(seshat::rule::overlapping_sides),
        help(
            "Antecedent and consequent must be disjoint. A well-formed rule \
             generator never emits an item on both sides; remove the shared \
             item or drop the rule."
        )
    )]
    OverlappingSides { index: usize, label: String },

    #[error("rule #{index}: confidence {value} is outside [0, 1]")]
    #[diagnostic(
        code(seshat::rule::confidence_out_of_range),
        help("Confidence is a conditional probability and must lie in [0, 1].")
    )]
    ConfidenceOutOfRange { index: usize, value: f64 },

    #[error("rule #{index}: support {value} is outside [0, 1]")]
    #[diagnostic(
        code(seshat::rule::support_out_of_range),
        help("Support is a fraction of transactions and must lie in [0, 1].")
    )]
    SupportOutOfRange { index: usize, value: f64 },

    #[error("rule #{index}: lift {value} is negative or not finite")]
    #[diagnostic(
        code(seshat::rule::bad_lift),
        help("Lift is a ratio of probabilities and must be a finite value >= 0.")
    )]
    BadLift { index: usize, value: f64 },

    #[error("rules #{first} and #{second} have the same pair {pair}")]
    #[diagnostic(
        code(seshat::rule::duplicate_pair),
        help(
            "A rule set may contain at most one rule per (antecedent, consequent) \
             pair. Deduplicate the generator's output before analysis."
        )
    )]
    DuplicatePair {
        first: usize,
        second: usize,
        pair: String,
    },
}

// ---------------------------------------------------------------------------
// Miner errors
// ---------------------------------------------------------------------------

/// Errors raised by [`crate::miner::RuleMiner`] implementations.
#[derive(Debug, Error, Diagnostic)]
pub enum MinerError {
    #[error("minimum support {value} is outside [0, 1]")]
    #[diagnostic(
        code(seshat::miner::bad_min_support),
        help("Support is a fraction of transactions; pass a threshold in [0, 1].")
    )]
    MinSupportOutOfRange { value: f64 },

    #[error("threshold {value} for metric {metric} is negative or not finite")]
    #[diagnostic(
        code(seshat::miner::bad_threshold),
        help("Metric thresholds must be finite values >= 0.")
    )]
    ThresholdOutOfRange { metric: String, value: f64 },
}
