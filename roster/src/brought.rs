//! Order-preserving record of which species were switched in

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Species in first-switch-in order, never duplicated on re-switch.
///
/// The first two entries are the battle's leads under the doubles convention.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BroughtLog {
    species: Vec<String>,
}

impl BroughtLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a switch-in; repeat appearances keep the original position.
    pub fn record(&mut self, species: &str) {
        if !self.species.iter().any(|s| s == species) {
            self.species.push(species.to_string());
        }
    }

    /// All brought species, first-appearance order
    pub fn species(&self) -> &[String] {
        &self.species
    }

    /// The first two entries (fewer than two is valid but incomplete)
    pub fn leads(&self) -> &[String] {
        &self.species[..self.species.len().min(2)]
    }

    pub fn is_empty(&self) -> bool {
        self.species.is_empty()
    }
}
