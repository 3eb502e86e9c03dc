//! # seshat
//!
//! Association-rule analysis focused on *paired-rule* metrics: for every
//! rule `A => B` in a rule set, find its reverse `B => A` and derive a
//! scalar comparing the two confidences.
//!
//! ## Architecture
//!
//! - **Data model** (`item`, `rule`): canonical item sets, validated rule sets
//! - **Calculator** (`metric`): confidence difference and confidence quotient
//! - **Miner interface** (`miner`): the external rule-generation collaborator,
//!   kept behind a trait so the calculator is testable with hand-built rule sets
//! - **Export** (`export`): JSON-friendly records for plain and scored rules
//!
//! ## Library usage
//!
//! ```
//! use seshat::item::ItemSet;
//! use seshat::metric::compute_confidence_difference;
//! use seshat::rule::{Rule, RuleSet};
//!
//! let rules = RuleSet::new(vec![
//!     Rule::new(ItemSet::from_labels(["Milk"]), ItemSet::from_labels(["Bread"]), 0.6, 0.8, 1.0),
//!     Rule::new(ItemSet::from_labels(["Bread"]), ItemSet::from_labels(["Milk"]), 0.6, 0.5, 1.0),
//! ]).unwrap();
//!
//! let scored = compute_confidence_difference(&rules);
//! assert!((scored.scores()[0] - 0.3).abs() < 1e-9);
//! ```

pub mod error;
pub mod export;
pub mod item;
pub mod metric;
pub mod miner;
pub mod rule;
pub mod sample;
