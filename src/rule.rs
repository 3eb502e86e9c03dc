//! Association rules and validated rule sets.
//!
//! A [`RuleSet`] is an *ordered* sequence of rules — the order is the rule
//! generator's emission order and is preserved through every computation so
//! output stays reproducible. Validation happens once, at construction:
//! the calculator downstream assumes a well-formed set and never re-checks.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::RuleError;
use crate::item::ItemSet;

/// A directed association rule `antecedent => consequent` with the standard
/// statistics the rule generator attaches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    /// The "if" side. Non-empty, disjoint from the consequent.
    pub antecedent: ItemSet,
    /// The "then" side. Non-empty, disjoint from the antecedent.
    pub consequent: ItemSet,
    /// Fraction of transactions containing both sides, in [0, 1].
    pub support: f64,
    /// P(consequent | antecedent), in [0, 1].
    pub confidence: f64,
    /// confidence / P(consequent), >= 0.
    pub lift: f64,
}

impl Rule {
    pub fn new(
        antecedent: ItemSet,
        consequent: ItemSet,
        support: f64,
        confidence: f64,
        lift: f64,
    ) -> Self {
        Self {
            antecedent,
            consequent,
            support,
            confidence,
            lift,
        }
    }
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} => {} (conf {:.3})",
            self.antecedent, self.consequent, self.confidence
        )
    }
}

/// An ordered, validated sequence of rules.
///
/// Construction via [`RuleSet::new`] enforces the data-model invariants:
/// non-empty disjoint sides, statistics in range, and at most one rule per
/// (antecedent, consequent) pair. [`RuleSet::new_unchecked`] skips the
/// checks for inputs already known valid (e.g. a filtered subset).
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    /// Validate and wrap a sequence of rules, preserving order.
    pub fn new(rules: Vec<Rule>) -> Result<Self, RuleError> {
        Self::validate(&rules)?;
        Ok(Self { rules })
    }

    /// Wrap without validating. The caller guarantees the invariants hold.
    pub fn new_unchecked(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Rule> {
        self.rules.iter()
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    fn validate(rules: &[Rule]) -> Result<(), RuleError> {
        let mut seen: HashMap<(&ItemSet, &ItemSet), usize> = HashMap::with_capacity(rules.len());

        for (index, rule) in rules.iter().enumerate() {
            if rule.antecedent.is_empty() {
                return Err(RuleError::EmptySide {
                    index,
                    side: "antecedent",
                });
            }
            if rule.consequent.is_empty() {
                return Err(RuleError::EmptySide {
                    index,
                    side: "consequent",
                });
            }
            if let Some(label) = rule.antecedent.first_shared_label(&rule.consequent) {
                return Err(RuleError::OverlappingSides {
                    index,
                    label: label.to_string(),
                });
            }
            if !(0.0..=1.0).contains(&rule.confidence) {
                return Err(RuleError::ConfidenceOutOfRange {
                    index,
                    value: rule.confidence,
                });
            }
            if !(0.0..=1.0).contains(&rule.support) {
                return Err(RuleError::SupportOutOfRange {
                    index,
                    value: rule.support,
                });
            }
            if !rule.lift.is_finite() || rule.lift < 0.0 {
                return Err(RuleError::BadLift {
                    index,
                    value: rule.lift,
                });
            }
            if let Some(&first) = seen.get(&(&rule.antecedent, &rule.consequent)) {
                return Err(RuleError::DuplicatePair {
                    first,
                    second: index,
                    pair: format!("{} => {}", rule.antecedent, rule.consequent),
                });
            }
            seen.insert((&rule.antecedent, &rule.consequent), index);
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = &'a Rule;
    type IntoIter = std::slice::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

// ---------------------------------------------------------------------------
// Pair index
// ---------------------------------------------------------------------------

/// Lookup index keyed by the ordered (antecedent, consequent) pair.
///
/// Replaces the naive per-rule linear scan with a single O(n) build plus
/// O(1) lookups. If the input violates the no-duplicate invariant (only
/// possible via [`RuleSet::new_unchecked`]), the *first* rule in set order
/// wins, matching the scan's first-match semantics.
pub struct PairIndex<'a> {
    by_pair: HashMap<(&'a ItemSet, &'a ItemSet), &'a Rule>,
}

impl<'a> PairIndex<'a> {
    pub fn build(rules: &'a RuleSet) -> Self {
        let mut by_pair = HashMap::with_capacity(rules.len());
        for rule in rules {
            by_pair
                .entry((&rule.antecedent, &rule.consequent))
                .or_insert(rule);
        }
        Self { by_pair }
    }

    /// The rule with exactly this (antecedent, consequent) pair, if present.
    pub fn get(&self, antecedent: &ItemSet, consequent: &ItemSet) -> Option<&'a Rule> {
        self.by_pair.get(&(antecedent, consequent)).copied()
    }

    /// The reverse of `rule` (sides swapped), if present in the indexed set.
    pub fn reverse_of(&self, rule: &Rule) -> Option<&'a Rule> {
        self.get(&rule.consequent, &rule.antecedent)
    }
}
