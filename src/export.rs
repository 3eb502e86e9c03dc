//! Export types for serializing rule sets.
//!
//! These records flatten item sets to sorted label vectors and select the
//! presentation columns (antecedent, consequent, statistics, derived
//! score) for JSON output.

use serde::{Deserialize, Serialize};

use crate::metric::ScoredRuleSet;
use crate::rule::{Rule, RuleSet};

/// Exported rule with flattened item sets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleExport {
    /// Antecedent labels in canonical order.
    pub antecedent: Vec<String>,
    /// Consequent labels in canonical order.
    pub consequent: Vec<String>,
    /// Joint support.
    pub support: f64,
    /// Rule confidence.
    pub confidence: f64,
    /// Rule lift.
    pub lift: f64,
}

impl From<&Rule> for RuleExport {
    fn from(rule: &Rule) -> Self {
        Self {
            antecedent: rule.antecedent.iter().map(str::to_string).collect(),
            consequent: rule.consequent.iter().map(str::to_string).collect(),
            support: rule.support,
            confidence: rule.confidence,
            lift: rule.lift,
        }
    }
}

/// Exported scored rule.
///
/// JSON has no infinity literal, so the in-memory `f64::INFINITY` sentinel
/// of the quotient metric is encoded as `score: null` — "no comparable
/// reverse, unbounded ratio". Every finite score serializes as a number.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredRuleExport {
    /// Antecedent labels in canonical order.
    pub antecedent: Vec<String>,
    /// Consequent labels in canonical order.
    pub consequent: Vec<String>,
    /// Rule confidence.
    pub confidence: f64,
    /// Name of the derived metric (`confidence_difference` or
    /// `confidence_quotient`).
    pub metric: String,
    /// Derived score; `None` encodes positive infinity.
    pub score: Option<f64>,
}

/// Flatten a rule set into export records, preserving order.
pub fn export_rules(rules: &RuleSet) -> Vec<RuleExport> {
    rules.iter().map(RuleExport::from).collect()
}

/// Flatten a scored rule set into export records, preserving order.
pub fn export_scored(scored: &ScoredRuleSet) -> Vec<ScoredRuleExport> {
    let metric = scored.metric().field_name();
    scored
        .iter()
        .map(|s| ScoredRuleExport {
            antecedent: s.rule.antecedent.iter().map(str::to_string).collect(),
            consequent: s.rule.consequent.iter().map(str::to_string).collect(),
            confidence: s.rule.confidence,
            metric: metric.to_string(),
            score: s.score.is_finite().then_some(s.score),
        })
        .collect()
}
