//! Built-in market-basket sample.
//!
//! Five grocery transactions and the rule set a conventional miner yields
//! from them at `min_support = 0.6`, `min_confidence = 0.7`. The rules
//! are pregenerated so the CLI and tests can exercise the calculator
//! without a mining dependency.

use crate::item::{ItemSet, Transaction};
use crate::rule::{Rule, RuleSet};

/// Support threshold the sample rules were generated with.
pub const MIN_SUPPORT: f64 = 0.6;
/// Confidence threshold the sample rules were generated with.
pub const MIN_CONFIDENCE: f64 = 0.7;

/// The five sample baskets.
pub fn transactions() -> Vec<Transaction> {
    vec![
        vec!["Milk".into(), "Bread".into(), "Butter".into()],
        vec!["Bread".into(), "Butter".into()],
        vec!["Milk".into(), "Bread".into()],
        vec!["Milk".into(), "Bread".into(), "Butter".into()],
        vec!["Bread".into(), "Butter".into()],
    ]
}

/// The rules mined from [`transactions`] at the sample thresholds.
///
/// Frequent itemsets at support >= 0.6: {Milk} 0.6, {Bread} 1.0,
/// {Butter} 0.8, {Milk, Bread} 0.6, {Bread, Butter} 0.8. Of the candidate
/// rules, three clear confidence 0.7 (Bread => Milk sits at 0.6 and is
/// dropped).
pub fn rules() -> RuleSet {
    RuleSet::new_unchecked(vec![
        Rule::new(
            ItemSet::from_labels(["Milk"]),
            ItemSet::from_labels(["Bread"]),
            0.6,
            1.0,
            1.0,
        ),
        Rule::new(
            ItemSet::from_labels(["Bread"]),
            ItemSet::from_labels(["Butter"]),
            0.8,
            0.8,
            1.0,
        ),
        Rule::new(
            ItemSet::from_labels(["Butter"]),
            ItemSet::from_labels(["Bread"]),
            0.8,
            1.0,
            1.0,
        ),
    ])
}
