//! Paired-rule metric calculator.
//!
//! For every rule `A => B` in a rule set, find the reverse rule `B => A`
//! in the same set and combine the two confidences into one scalar. A
//! missing reverse counts as confidence 0. The computation is pure: the
//! input set is read-only and the scores come back in a parallel,
//! order-preserving [`ScoredRuleSet`].

use tracing::debug;

use crate::rule::{PairIndex, Rule, RuleSet};

/// Which paired metric to derive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairedMetric {
    /// `|conf(A => B) - conf(B => A)|`, always in [0, 1].
    ConfidenceDifference,
    /// `conf(A => B) / conf(B => A)`; positive infinity when the reverse
    /// confidence is 0 (including the missing-reverse fallback).
    ConfidenceQuotient,
}

impl PairedMetric {
    /// Column name used in exports and table output.
    pub fn field_name(self) -> &'static str {
        match self {
            PairedMetric::ConfidenceDifference => "confidence_difference",
            PairedMetric::ConfidenceQuotient => "confidence_quotient",
        }
    }

    fn combine(self, forward: f64, reverse: f64) -> f64 {
        match self {
            PairedMetric::ConfidenceDifference => (forward - reverse).abs(),
            PairedMetric::ConfidenceQuotient => {
                if reverse > 0.0 {
                    forward / reverse
                } else {
                    f64::INFINITY
                }
            }
        }
    }
}

impl std::fmt::Display for PairedMetric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.field_name())
    }
}

/// One rule plus its derived score. The rule's own statistics are carried
/// through untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredRule {
    pub rule: Rule,
    pub score: f64,
}

/// The output of the calculator: every input rule, in input order, each
/// annotated with the chosen metric.
#[derive(Debug, Clone)]
pub struct ScoredRuleSet {
    metric: PairedMetric,
    rules: Vec<ScoredRule>,
}

impl ScoredRuleSet {
    pub fn metric(&self) -> PairedMetric {
        self.metric
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ScoredRule> {
        self.rules.iter()
    }

    /// The derived scores in rule order.
    pub fn scores(&self) -> Vec<f64> {
        self.rules.iter().map(|s| s.score).collect()
    }
}

impl<'a> IntoIterator for &'a ScoredRuleSet {
    type Item = &'a ScoredRule;
    type IntoIter = std::slice::Iter<'a, ScoredRule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

/// Annotate every rule with the chosen paired metric.
///
/// Builds a [`PairIndex`] once, then resolves each rule's reverse in O(1).
/// Rules whose reverse is absent use confidence 0 for the reverse side.
pub fn annotate(rules: &RuleSet, metric: PairedMetric) -> ScoredRuleSet {
    let index = PairIndex::build(rules);

    let scored = rules
        .iter()
        .map(|rule| {
            let reverse_confidence = index.reverse_of(rule).map_or(0.0, |r| r.confidence);
            let score = metric.combine(rule.confidence, reverse_confidence);
            debug!(
                rule = %rule,
                reverse_confidence,
                %metric,
                score,
                "annotated rule"
            );
            ScoredRule {
                rule: rule.clone(),
                score,
            }
        })
        .collect();

    ScoredRuleSet {
        metric,
        rules: scored,
    }
}

/// Annotate with `|conf(A => B) - conf(B => A)|`.
pub fn compute_confidence_difference(rules: &RuleSet) -> ScoredRuleSet {
    annotate(rules, PairedMetric::ConfidenceDifference)
}

/// Annotate with `conf(A => B) / conf(B => A)` (infinity when unbounded).
pub fn compute_confidence_quotient(rules: &RuleSet) -> ScoredRuleSet {
    annotate(rules, PairedMetric::ConfidenceQuotient)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::ItemSet;

    fn rule(a: &[&str], c: &[&str], confidence: f64) -> Rule {
        Rule::new(
            ItemSet::from_labels(a.iter().copied()),
            ItemSet::from_labels(c.iter().copied()),
            0.5,
            confidence,
            1.0,
        )
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn difference_with_reverse_present() {
        // Spec scenario: (A=>B, 0.8) and (B=>A, 0.5) => difference 0.3 both ways.
        let rules = RuleSet::new(vec![
            rule(&["A"], &["B"], 0.8),
            rule(&["B"], &["A"], 0.5),
        ])
        .unwrap();
        let scored = compute_confidence_difference(&rules);
        assert!(approx(scored.scores()[0], 0.3));
        assert!(approx(scored.scores()[1], 0.3));
    }

    #[test]
    fn quotient_with_reverse_present() {
        let rules = RuleSet::new(vec![
            rule(&["A"], &["B"], 0.8),
            rule(&["B"], &["A"], 0.5),
        ])
        .unwrap();
        let scored = compute_confidence_quotient(&rules);
        assert!(approx(scored.scores()[0], 1.6));
        assert!(approx(scored.scores()[1], 0.625));
    }

    #[test]
    fn missing_reverse_falls_back_to_zero() {
        let rules = RuleSet::new(vec![rule(&["A"], &["B"], 0.75)]).unwrap();

        let diff = compute_confidence_difference(&rules);
        assert!(approx(diff.scores()[0], 0.75));

        let quot = compute_confidence_quotient(&rules);
        assert!(quot.scores()[0].is_infinite());
        assert!(quot.scores()[0] > 0.0);
    }

    #[test]
    fn zero_reverse_confidence_gives_infinity() {
        let rules = RuleSet::new(vec![
            rule(&["A"], &["B"], 0.75),
            rule(&["B"], &["A"], 0.0),
        ])
        .unwrap();
        let scored = compute_confidence_quotient(&rules);
        assert!(scored.scores()[0].is_infinite());
        // The zero-confidence rule itself has a finite quotient: 0 / 0.75.
        assert!(approx(scored.scores()[1], 0.0));
    }

    #[test]
    fn empty_set_yields_empty_output() {
        let rules = RuleSet::empty();
        assert!(compute_confidence_difference(&rules).is_empty());
        assert!(compute_confidence_quotient(&rules).is_empty());
    }

    #[test]
    fn difference_is_symmetric_and_bounded() {
        let rules = RuleSet::new(vec![
            rule(&["A"], &["B"], 0.9),
            rule(&["B"], &["A"], 0.2),
            rule(&["A", "C"], &["B"], 0.4),
            rule(&["B"], &["A", "C"], 0.7),
            rule(&["C"], &["D"], 0.3),
        ])
        .unwrap();
        let scored = compute_confidence_difference(&rules);
        let scores = scored.scores();

        // Symmetric pairs score identically (bitwise, |x - y| == |y - x|).
        assert_eq!(scores[0], scores[1]);
        assert_eq!(scores[2], scores[3]);
        for s in &scores {
            assert!((0.0..=1.0).contains(s));
        }
    }

    #[test]
    fn quotient_pairs_are_reciprocal() {
        let rules = RuleSet::new(vec![
            rule(&["A"], &["B"], 0.9),
            rule(&["B"], &["A"], 0.2),
        ])
        .unwrap();
        let scores = compute_confidence_quotient(&rules).scores();
        assert!(approx(scores[0], 1.0 / scores[1]));
        for s in &scores {
            assert!(*s >= 0.0);
        }
    }

    #[test]
    fn annotation_is_idempotent() {
        let rules = RuleSet::new(vec![
            rule(&["A"], &["B"], 0.8),
            rule(&["B"], &["A"], 0.5),
        ])
        .unwrap();
        let first = compute_confidence_difference(&rules).scores();
        let second = compute_confidence_difference(&rules).scores();
        assert_eq!(first, second);
    }

    #[test]
    fn input_rules_are_untouched() {
        let rules = RuleSet::new(vec![
            rule(&["A"], &["B"], 0.8),
            rule(&["B"], &["A"], 0.5),
        ])
        .unwrap();
        let before = rules.clone();
        let scored = compute_confidence_quotient(&rules);
        assert_eq!(rules.rules(), before.rules());
        // Output carries the original statistics verbatim.
        for (scored, original) in scored.iter().zip(rules.iter()) {
            assert_eq!(&scored.rule, original);
        }
    }

    #[test]
    fn duplicate_pairs_resolve_to_first_match() {
        // Invariant violation, reachable only via new_unchecked: the lookup
        // must deterministically use the first (B => A) in set order.
        let rules = RuleSet::new_unchecked(vec![
            rule(&["A"], &["B"], 0.8),
            rule(&["B"], &["A"], 0.5),
            rule(&["B"], &["A"], 0.1),
        ]);
        let scores = compute_confidence_difference(&rules).scores();
        assert!(approx(scores[0], 0.3));
    }
}
