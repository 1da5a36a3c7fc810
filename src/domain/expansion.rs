// src/domain/expansion.rs

use crate::domain::listing::ListingId;
use std::collections::BTreeSet;
use std::str::FromStr;

/// How "Read More" toggles interact across cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExpansionPolicy {
    /// At most one card is expanded; opening another closes the first.
    #[default]
    Single,
    /// Every card toggles on its own.
    PerCard,
}

impl FromStr for ExpansionPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "single" => Ok(ExpansionPolicy::Single),
            "per-card" | "per_card" => Ok(ExpansionPolicy::PerCard),
            other => Err(format!("expected `single` or `per-card`, got `{other}`")),
        }
    }
}

/// Which cards show their full description. Kept by the caller, keyed by
/// listing id, and carried between requests in the `expanded` query parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpansionState {
    policy: ExpansionPolicy,
    expanded: BTreeSet<ListingId>,
}

impl ExpansionState {
    pub fn new(policy: ExpansionPolicy) -> Self {
        Self {
            policy,
            expanded: BTreeSet::new(),
        }
    }

    /// Parses a comma-separated id list. Under `Single` only the first id counts.
    pub fn from_query(policy: ExpansionPolicy, raw: &str) -> Self {
        let mut ids = raw
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(ListingId::new);

        let expanded = match policy {
            ExpansionPolicy::Single => ids.next().into_iter().collect(),
            ExpansionPolicy::PerCard => ids.collect(),
        };

        Self { policy, expanded }
    }

    pub fn to_query(&self) -> String {
        self.expanded
            .iter()
            .map(ListingId::as_str)
            .collect::<Vec<_>>()
            .join(",")
    }

    pub fn is_empty(&self) -> bool {
        self.expanded.is_empty()
    }

    pub fn is_expanded(&self, id: &ListingId) -> bool {
        self.expanded.contains(id)
    }

    pub fn toggle(&mut self, id: &ListingId) {
        match self.policy {
            ExpansionPolicy::Single => {
                let was_open = self.expanded.contains(id);
                self.expanded.clear();
                if !was_open {
                    self.expanded.insert(id.clone());
                }
            }
            ExpansionPolicy::PerCard => {
                if !self.expanded.remove(id) {
                    self.expanded.insert(id.clone());
                }
            }
        }
    }

    /// The state after toggling `id`, leaving `self` untouched.
    pub fn toggled(&self, id: &ListingId) -> Self {
        let mut next = self.clone();
        next.toggle(id);
        next
    }
}
