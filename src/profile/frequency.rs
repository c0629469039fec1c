//! State frequency profiling for a character.

use crate::data::TaxonStateSet;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Frequency statistics for one observed state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateFrequency {
    /// State label.
    pub state: String,
    /// Number of taxa allowing this state (`k{i}`).
    pub count: usize,
    /// Sum of `1/n` over those taxa, where `n` is the number of states the
    /// taxon allows (`SIG{i}`).
    pub sigma: f64,
}

/// Profile of the states observed for a character.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StateFrequencyProfile {
    /// Number of taxa (`t`).
    pub n_taxa: usize,
    /// Number of taxa allowing more than one state.
    pub n_polymorphic_taxa: usize,
    /// One entry per distinct state, in first-occurrence order.
    pub states: Vec<StateFrequency>,
}

impl StateFrequencyProfile {
    /// Number of distinct states (`s`).
    pub fn n_states(&self) -> usize {
        self.states.len()
    }

    /// Look up a state by label.
    pub fn get(&self, state: &str) -> Option<&StateFrequency> {
        self.states.iter().find(|s| s.state == state)
    }

    /// Iterate over states in first-occurrence order.
    pub fn iter(&self) -> std::slice::Iter<'_, StateFrequency> {
        self.states.iter()
    }

    /// Sum of all sigmas. Each taxon contributes exactly 1 in total.
    pub fn total_sigma(&self) -> f64 {
        self.states.iter().map(|s| s.sigma).sum()
    }
}

impl std::fmt::Display for StateFrequencyProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "State Frequency Profile")?;
        writeln!(f, "  Taxa:              {}", self.n_taxa)?;
        writeln!(f, "  Polymorphic taxa:  {}", self.n_polymorphic_taxa)?;
        writeln!(f, "  States:            {}", self.n_states())?;
        for s in &self.states {
            writeln!(f, "    {:<16} k={:<4} sigma={:.4}", s.state, s.count, s.sigma)?;
        }
        Ok(())
    }
}

/// Profile the states of a character in a single pass over its taxa.
pub fn profile_states(taxa: &TaxonStateSet) -> StateFrequencyProfile {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut states: Vec<StateFrequency> = Vec::new();

    for taxon in taxa {
        let share = 1.0 / taxon.n_states() as f64;
        for state in taxon.states() {
            match index.get(state.as_str()) {
                Some(&i) => {
                    states[i].count += 1;
                    states[i].sigma += share;
                    tracing::debug!(
                        state = %state,
                        count = states[i].count,
                        sigma = states[i].sigma,
                        "state seen again"
                    );
                }
                None => {
                    index.insert(state.as_str(), states.len());
                    states.push(StateFrequency {
                        state: state.clone(),
                        count: 1,
                        sigma: share,
                    });
                    tracing::debug!(state = %state, sigma = share, "new state");
                }
            }
        }
    }

    StateFrequencyProfile {
        n_taxa: taxa.n_taxa(),
        n_polymorphic_taxa: taxa.iter().filter(|t| t.is_polymorphic()).count(),
        states,
    }
}
