use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Per-hole par values scraped from a course page. Holes are numbered
/// contiguously from 1; the table lives for a single request only.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct ParTable {
    holes: BTreeMap<i32, i32>,
}

impl ParTable {
    /// Zips hole numbers 1..=N with the given par values, in order.
    #[must_use]
    pub fn from_par_values(values: &[i32]) -> Self {
        let holes = (1..).zip(values.iter().copied()).collect();
        Self { holes }
    }

    #[must_use]
    pub fn get(&self, hole: i32) -> Option<i32> {
        self.holes.get(&hole).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.holes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.holes.is_empty()
    }

    /// Par values in hole order, reproducing the scraped digit sequence.
    #[must_use]
    pub fn par_values(&self) -> Vec<i32> {
        self.holes.values().copied().collect()
    }
}
