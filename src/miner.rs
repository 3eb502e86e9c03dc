//! The external rule-generation collaborator, as a trait.
//!
//! Frequent-itemset mining and rule generation are out of scope for this
//! crate; the calculator only needs *some* source of rules. [`RuleMiner`]
//! is that seam: production callers plug in a real miner, tests and the
//! CLI use [`StaticMiner`], which serves a prebuilt rule set filtered by
//! the requested thresholds.

use tracing::debug;

use crate::error::{MinerError, SeshatResult};
use crate::item::Transaction;
use crate::rule::RuleSet;

/// The statistic a mining threshold applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MiningMetric {
    Support,
    Confidence,
    Lift,
}

impl std::fmt::Display for MiningMetric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MiningMetric::Support => write!(f, "support"),
            MiningMetric::Confidence => write!(f, "confidence"),
            MiningMetric::Lift => write!(f, "lift"),
        }
    }
}

/// A source of association rules.
///
/// Mirrors the shape of a conventional mining pipeline: transactions in,
/// frequent itemsets at `min_support`, rules thresholded on `metric >=
/// min_threshold` out. Implementations must emit at most one rule per
/// (antecedent, consequent) pair, in a stable generation order.
pub trait RuleMiner {
    fn generate(
        &self,
        transactions: &[Transaction],
        min_support: f64,
        metric: MiningMetric,
        min_threshold: f64,
    ) -> SeshatResult<RuleSet>;
}

/// A miner that serves a fixed, pregenerated rule set.
///
/// No mining happens: `generate` ignores the transactions and filters the
/// stored rules by the requested thresholds, preserving order. Intended
/// for tests and demos where the rule statistics are known up front.
#[derive(Debug, Clone)]
pub struct StaticMiner {
    rules: RuleSet,
}

impl StaticMiner {
    pub fn new(rules: RuleSet) -> Self {
        Self { rules }
    }
}

impl RuleMiner for StaticMiner {
    fn generate(
        &self,
        _transactions: &[Transaction],
        min_support: f64,
        metric: MiningMetric,
        min_threshold: f64,
    ) -> SeshatResult<RuleSet> {
        if !(0.0..=1.0).contains(&min_support) {
            return Err(MinerError::MinSupportOutOfRange { value: min_support }.into());
        }
        if !min_threshold.is_finite() || min_threshold < 0.0 {
            return Err(MinerError::ThresholdOutOfRange {
                metric: metric.to_string(),
                value: min_threshold,
            }
            .into());
        }

        let selected: Vec<_> = self
            .rules
            .iter()
            .filter(|rule| {
                let value = match metric {
                    MiningMetric::Support => rule.support,
                    MiningMetric::Confidence => rule.confidence,
                    MiningMetric::Lift => rule.lift,
                };
                rule.support >= min_support && value >= min_threshold
            })
            .cloned()
            .collect();

        debug!(
            total = self.rules.len(),
            selected = selected.len(),
            %metric,
            min_support,
            min_threshold,
            "static miner filtered rule set"
        );

        // A filtered subset of a valid set stays valid.
        Ok(RuleSet::new_unchecked(selected))
    }
}
