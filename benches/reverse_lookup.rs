//! Benchmark for the indexed reverse-rule lookup.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

use seshat::item::ItemSet;
use seshat::metric::compute_confidence_difference;
use seshat::rule::{Rule, RuleSet};

/// Build `n` rules: half symmetric pairs, half without a reverse.
fn synthetic_rules(n: usize) -> RuleSet {
    let mut rules = Vec::with_capacity(n);
    for i in 0..n {
        let (a, c) = if i % 2 == 0 {
            (format!("a{}", i / 2), format!("b{}", i / 2))
        } else if i % 4 == 1 {
            (format!("b{}", i / 2), format!("a{}", i / 2))
        } else {
            (format!("lone{i}"), format!("other{i}"))
        };
        let confidence = 0.1 + 0.8 * (i as f64 / n as f64);
        rules.push(Rule::new(
            ItemSet::from_labels([a]),
            ItemSet::from_labels([c]),
            0.5,
            confidence,
            1.0,
        ));
    }
    RuleSet::new_unchecked(rules)
}

fn bench_annotate(c: &mut Criterion) {
    let mut group = c.benchmark_group("confidence_difference");
    for &size in &[64usize, 512, 4096] {
        let rules = synthetic_rules(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &rules, |b, rules| {
            b.iter(|| compute_confidence_difference(black_box(rules)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_annotate);
criterion_main!(benches);
