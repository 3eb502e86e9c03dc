//! Item sets and transactions.
//!
//! An [`ItemSet`] is the canonical unit on either side of an association
//! rule: a non-empty, ordered set of item labels. Ordering comes from the
//! underlying `BTreeSet`, so two item sets built from the same labels in
//! any order compare, hash, and display identically.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// One transaction: the labels observed together in a single basket.
pub type Transaction = Vec<String>;

/// An ordered set of item labels.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemSet(BTreeSet<String>);

impl ItemSet {
    /// Build an item set from anything yielding labels. Duplicates collapse.
    pub fn from_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ItemSet(labels.into_iter().map(Into::into).collect())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, label: &str) -> bool {
        self.0.contains(label)
    }

    /// Iterate labels in canonical (lexicographic) order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn is_disjoint(&self, other: &ItemSet) -> bool {
        self.0.is_disjoint(&other.0)
    }

    /// First label present in both sets, if any. Used for diagnostics.
    pub fn first_shared_label<'a>(&'a self, other: &'a ItemSet) -> Option<&'a str> {
        self.0.intersection(&other.0).next().map(String::as_str)
    }
}

impl std::fmt::Display for ItemSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{")?;
        for (i, label) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{label}")?;
        }
        write!(f, "}}")
    }
}

impl<S: Into<String>> FromIterator<S> for ItemSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        ItemSet::from_labels(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_order_is_independent_of_insertion_order() {
        let a = ItemSet::from_labels(["Milk", "Bread"]);
        let b = ItemSet::from_labels(["Bread", "Milk"]);
        assert_eq!(a, b);
        assert_eq!(a.to_string(), "{Bread, Milk}");
    }

    #[test]
    fn duplicates_collapse() {
        let a = ItemSet::from_labels(["Bread", "Bread", "Milk"]);
        assert_eq!(a.len(), 2);
    }

    #[test]
    fn disjointness() {
        let a = ItemSet::from_labels(["Milk"]);
        let b = ItemSet::from_labels(["Bread", "Butter"]);
        let c = ItemSet::from_labels(["Butter"]);
        assert!(a.is_disjoint(&b));
        assert!(!b.is_disjoint(&c));
        assert_eq!(b.first_shared_label(&c), Some("Butter"));
        assert_eq!(a.first_shared_label(&b), None);
    }

    #[test]
    fn serde_transparent() {
        let a = ItemSet::from_labels(["Milk", "Bread"]);
        let json = serde_json::to_string(&a).unwrap();
        assert_eq!(json, r#"["Bread","Milk"]"#);
        let back: ItemSet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, a);
    }
}
