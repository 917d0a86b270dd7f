use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The sum of `amount` for each category present in the ledger.
///
/// Categories without any expenses are absent rather than zero. Iteration is in category name
/// order, which is only meaningful for display.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryTotals(BTreeMap<String, f64>);

impl CategoryTotals {
    pub fn get(&self, category: &str) -> Option<f64> {
        self.0.get(category).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(category, total)| (category.as_str(), *total))
    }

    /// The largest absolute total, or `0.0` when there are no categories.
    pub fn max_magnitude(&self) -> f64 {
        self.0.values().fold(0.0, |max, total| max.max(total.abs()))
    }
}

impl FromIterator<(String, f64)> for CategoryTotals {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[test]
fn max_magnitude_counts_negative_totals() {
    let totals: CategoryTotals = vec![("Food".to_string(), 10.0), ("Refunds".to_string(), -30.0)]
        .into_iter()
        .collect();
    assert_eq!(totals.max_magnitude(), 30.0);
    assert_eq!(CategoryTotals::default().max_magnitude(), 0.0);
}
