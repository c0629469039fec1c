//! Per-taxon state lists for a single categorical character.

use crate::error::{BestcharError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// The states allowed for one taxon.
///
/// A taxon with more than one state is polymorphic (ambiguous) for the
/// character. Labels are distinct and kept in input order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "Vec<String>", try_from = "Vec<String>")]
pub struct Taxon {
    states: Vec<String>,
}

impl Taxon {
    /// Create a taxon from its state labels.
    ///
    /// Repeated labels are collapsed to their first occurrence. Fails if no
    /// labels are given or any label is empty.
    pub fn new<I, S>(labels: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let mut states = Vec::new();
        for label in labels {
            let label: String = label.into();
            if label.is_empty() {
                return Err(BestcharError::MalformedInput {
                    line: 0,
                    reason: "empty state label".to_string(),
                });
            }
            if seen.insert(label.clone()) {
                states.push(label);
            } else {
                tracing::warn!(state = %label, "duplicate state label in taxon ignored");
            }
        }
        if states.is_empty() {
            return Err(BestcharError::MalformedInput {
                line: 0,
                reason: "taxon has no states".to_string(),
            });
        }
        Ok(Self { states })
    }

    /// State labels in input order.
    pub fn states(&self) -> &[String] {
        &self.states
    }

    /// Number of states this taxon allows.
    pub fn n_states(&self) -> usize {
        self.states.len()
    }

    /// Whether the taxon allows more than one state.
    pub fn is_polymorphic(&self) -> bool {
        self.states.len() > 1
    }

    /// Whether the taxon allows `state`.
    pub fn contains(&self, state: &str) -> bool {
        self.states.iter().any(|s| s == state)
    }
}

impl std::fmt::Display for Taxon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.states.join("/"))
    }
}

impl From<Taxon> for Vec<String> {
    fn from(taxon: Taxon) -> Self {
        taxon.states
    }
}

impl TryFrom<Vec<String>> for Taxon {
    type Error = BestcharError;

    fn try_from(labels: Vec<String>) -> Result<Self> {
        Self::new(labels)
    }
}

/// All taxa scored for one character, in input order.
///
/// Built once and only borrowed afterwards; every coefficient reads the same
/// taxa.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "Vec<Taxon>", try_from = "Vec<Taxon>")]
pub struct TaxonStateSet {
    taxa: Vec<Taxon>,
}

impl TaxonStateSet {
    /// Create a state set. Fails on an empty collection.
    pub fn new(taxa: Vec<Taxon>) -> Result<Self> {
        if taxa.is_empty() {
            return Err(BestcharError::MalformedInput {
                line: 0,
                reason: "no taxa".to_string(),
            });
        }
        Ok(Self { taxa })
    }

    /// Build a state set from nested label lists.
    ///
    /// ```
    /// use bestchar::data::TaxonStateSet;
    ///
    /// let taxa = TaxonStateSet::from_labels(vec![vec!["red"], vec!["white", "red"]]).unwrap();
    /// assert_eq!(taxa.n_taxa(), 2);
    /// ```
    pub fn from_labels<I, T, S>(labels: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let taxa = labels
            .into_iter()
            .map(Taxon::new)
            .collect::<Result<Vec<_>>>()?;
        Self::new(taxa)
    }

    /// Number of taxa (`t`).
    pub fn n_taxa(&self) -> usize {
        self.taxa.len()
    }

    /// Number of unordered taxon pairs, `t(t-1)/2`.
    pub fn n_pairs(&self) -> usize {
        let t = self.taxa.len();
        t * t.saturating_sub(1) / 2
    }

    /// Taxa in input order.
    pub fn taxa(&self) -> &[Taxon] {
        &self.taxa
    }

    /// Iterate over taxa in input order.
    pub fn iter(&self) -> std::slice::Iter<'_, Taxon> {
        self.taxa.iter()
    }

    /// Get a taxon by index.
    pub fn get(&self, index: usize) -> Option<&Taxon> {
        self.taxa.get(index)
    }
}

impl From<TaxonStateSet> for Vec<Taxon> {
    fn from(set: TaxonStateSet) -> Self {
        set.taxa
    }
}

impl TryFrom<Vec<Taxon>> for TaxonStateSet {
    type Error = BestcharError;

    fn try_from(taxa: Vec<Taxon>) -> Result<Self> {
        Self::new(taxa)
    }
}

impl<'a> IntoIterator for &'a TaxonStateSet {
    type Item = &'a Taxon;
    type IntoIter = std::slice::Iter<'a, Taxon>;

    fn into_iter(self) -> Self::IntoIter {
        self.taxa.iter()
    }
}
