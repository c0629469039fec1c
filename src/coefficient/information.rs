//! Information coefficients over the state frequency distribution.
//!
//! For every state `i` with `k{i}` taxa and weight `SIG{i}`:
//!
//! ```text
//! H = -sum_i (SIG{i}/t) * log_B(k{i}/t)
//! ```
//!
//! with three choices of base `B`: 2 (Intkey), the number of states `s`
//! (Pankhurst) and the number of taxa `t` (normalized).

use crate::coefficient::Rounded;
use crate::error::{BestcharError, Result};
use crate::profile::StateFrequencyProfile;
use serde::{Deserialize, Serialize};

/// What to do when a logarithm base is 1 (a single state or a single taxon).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DegeneratePolicy {
    /// Define the coefficient as 0: there is no information to measure.
    #[default]
    Zero,
    /// Fail with a degenerate-character or degenerate-taxon-count error.
    Reject,
}

impl std::str::FromStr for DegeneratePolicy {
    type Err = BestcharError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "zero" => Ok(Self::Zero),
            "reject" => Ok(Self::Reject),
            other => Err(BestcharError::InvalidParameter(format!(
                "unknown degenerate policy '{}', expected 'zero' or 'reject'",
                other
            ))),
        }
    }
}

/// Logarithm base used by an information coefficient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogBase {
    /// Base 2, as in Intkey.
    Two,
    /// Base `s`, the number of distinct states (Pankhurst).
    States,
    /// Base `t`, the number of taxa.
    Taxa,
}

impl LogBase {
    /// Numeric base for a given profile.
    pub fn resolve(self, profile: &StateFrequencyProfile) -> f64 {
        match self {
            LogBase::Two => 2.0,
            LogBase::States => profile.n_states() as f64,
            LogBase::Taxa => profile.n_taxa as f64,
        }
    }

    /// Report label of the coefficient computed with this base.
    pub fn label(self) -> &'static str {
        match self {
            LogBase::Two => "Intkey-style information coefficient",
            LogBase::States => "Pankhurst's information coefficient",
            LogBase::Taxa => "Normalized information coefficient",
        }
    }

    fn degenerate_error(self, profile: &StateFrequencyProfile) -> BestcharError {
        match self {
            LogBase::Taxa => BestcharError::DegenerateTaxonCount {
                n_taxa: profile.n_taxa,
            },
            _ => BestcharError::DegenerateCharacter {
                n_states: profile.n_states(),
            },
        }
    }
}

/// Per-state quantities entering the information sums.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InformationTerm {
    /// State label.
    pub state: String,
    /// `k{i}/t`.
    pub proportion: f64,
    /// `SIG{i}/t`.
    pub weight: f64,
    /// `log2(k{i}/t)`.
    pub log_two: f64,
    /// `log_s(k{i}/t)`, `None` when the base is degenerate.
    pub log_states: Option<f64>,
    /// `log_t(k{i}/t)`, `None` when the base is degenerate.
    pub log_taxa: Option<f64>,
}

/// One information coefficient.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InformationScore {
    /// Logarithm base.
    pub base: LogBase,
    /// Accumulated `sum w_i * log_B(p_i)`; non-positive.
    pub weighted_log_sum: f64,
    /// Coefficient value, `-weighted_log_sum`.
    pub value: f64,
    /// Two-decimal presentation value.
    pub rounded: Rounded,
    /// Whether the base was degenerate and the value defined as 0.
    pub degenerate: bool,
}

/// The three information coefficients of a character.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InformationCoefficients {
    /// Base 2.
    pub intkey: InformationScore,
    /// Base `s`.
    pub pankhurst: InformationScore,
    /// Base `t`.
    pub normalized: InformationScore,
    /// Per-state terms, in profile order.
    pub terms: Vec<InformationTerm>,
}

impl InformationCoefficients {
    /// Scores in report order.
    pub fn scores(&self) -> [&InformationScore; 3] {
        [&self.intkey, &self.pankhurst, &self.normalized]
    }
}

/// `log_base(x)`, or `None` if the base is degenerate.
///
/// `log(1)` is exactly zero in every valid base.
fn log_in_base(x: f64, base: f64) -> Option<f64> {
    if base <= 1.0 {
        return None;
    }
    if x == 1.0 {
        return Some(0.0);
    }
    Some(x.ln() / base.ln())
}

/// `sum_i (SIG{i}/t) * log_base(k{i}/t)`, or `None` if the base is degenerate.
pub fn weighted_log_sum(profile: &StateFrequencyProfile, base: f64) -> Option<f64> {
    let t = profile.n_taxa as f64;
    profile.iter().try_fold(0.0, |sum, s| {
        let p = s.count as f64 / t;
        log_in_base(p, base).map(|log| sum + (s.sigma / t) * log)
    })
}

fn score(
    profile: &StateFrequencyProfile,
    base: LogBase,
    policy: DegeneratePolicy,
) -> Result<InformationScore> {
    let (weighted_log_sum, degenerate) = match weighted_log_sum(profile, base.resolve(profile)) {
        Some(sum) => (sum, false),
        None => match policy {
            DegeneratePolicy::Reject => return Err(base.degenerate_error(profile)),
            DegeneratePolicy::Zero => {
                tracing::warn!(
                    ?base,
                    n_states = profile.n_states(),
                    n_taxa = profile.n_taxa,
                    "degenerate logarithm base, coefficient defined as 0"
                );
                (0.0, true)
            }
        },
    };

    let rounded = Rounded::half_down(weighted_log_sum)?.negated();
    tracing::debug!(?base, weighted_log_sum, %rounded, "information coefficient");

    Ok(InformationScore {
        base,
        weighted_log_sum,
        // never -0.0
        value: 0.0 - weighted_log_sum,
        rounded,
        degenerate,
    })
}

/// Compute the Intkey, Pankhurst and normalized information coefficients.
pub fn coef_information(
    profile: &StateFrequencyProfile,
    policy: DegeneratePolicy,
) -> Result<InformationCoefficients> {
    if profile.n_taxa == 0 || profile.states.is_empty() {
        return Err(BestcharError::EmptyData(
            "no states to compute information coefficients from".to_string(),
        ));
    }

    let t = profile.n_taxa as f64;
    let s_base = LogBase::States.resolve(profile);
    let t_base = LogBase::Taxa.resolve(profile);

    let terms: Vec<InformationTerm> = profile
        .iter()
        .map(|s| {
            let proportion = s.count as f64 / t;
            let term = InformationTerm {
                state: s.state.clone(),
                proportion,
                weight: s.sigma / t,
                log_two: log_in_base(proportion, 2.0).unwrap_or(0.0),
                log_states: log_in_base(proportion, s_base),
                log_taxa: log_in_base(proportion, t_base),
            };
            tracing::debug!(
                state = %term.state,
                p = term.proportion,
                w = term.weight,
                log_two = term.log_two,
                log_states = ?term.log_states,
                log_taxa = ?term.log_taxa,
                "information term"
            );
            term
        })
        .collect();

    Ok(InformationCoefficients {
        intkey: score(profile, LogBase::Two, policy)?,
        pankhurst: score(profile, LogBase::States, policy)?,
        normalized: score(profile, LogBase::Taxa, policy)?,
        terms,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::TaxonStateSet;
    use crate::profile::profile_states;

    fn profile(labels: Vec<Vec<&str>>) -> StateFrequencyProfile {
        profile_states(&TaxonStateSet::from_labels(labels).unwrap())
    }

    fn petal_colour() -> StateFrequencyProfile {
        profile(vec![
            vec!["red"],
            vec!["white", "red"],
            vec!["white"],
            vec!["white"],
        ])
    }

    #[test]
    fn test_petal_colour() {
        let info = coef_information(&petal_colour(), DegeneratePolicy::Zero).unwrap();

        let expected = -((1.5 / 4.0) * (0.5f64).log2() + (2.5 / 4.0) * (0.75f64).log2());
        assert!((info.intkey.value - expected).abs() < 1e-10);
        assert!(info.intkey.weighted_log_sum < 0.0);
        assert_eq!(info.intkey.rounded.to_string(), "0.63");

        // two states: base s == base 2
        assert!((info.pankhurst.value - expected).abs() < 1e-10);
        assert_eq!(info.pankhurst.rounded.to_string(), "0.63");

        // base 4 halves the base-2 value
        assert!((info.normalized.value - expected / 2.0).abs() < 1e-10);
        assert_eq!(info.normalized.rounded.to_string(), "0.32");
    }

    #[test]
    fn test_terms() {
        let info = coef_information(&petal_colour(), DegeneratePolicy::Zero).unwrap();
        assert_eq!(info.terms.len(), 2);

        let red = &info.terms[0];
        assert_eq!(red.state, "red");
        assert!((red.proportion - 0.5).abs() < 1e-10);
        assert!((red.weight - 0.375).abs() < 1e-10);
        assert!((red.log_two + 1.0).abs() < 1e-10);
        assert!((red.log_taxa.unwrap() + 0.5).abs() < 1e-10);
    }

    #[test]
    fn test_single_state_zero_policy() {
        let p = profile(vec![vec!["green"], vec!["green"], vec!["green"]]);
        let info = coef_information(&p, DegeneratePolicy::Zero).unwrap();

        assert!(info.pankhurst.degenerate);
        assert_eq!(info.pankhurst.value, 0.0);
        assert_eq!(info.pankhurst.rounded.to_string(), "0.00");
        // every taxon has the state, so log(1) terms vanish
        assert!(!info.intkey.degenerate);
        assert_eq!(info.intkey.value, 0.0);
        assert_eq!(info.normalized.value, 0.0);
        assert!(info.scores().iter().all(|s| s.value.is_finite()));
    }

    #[test]
    fn test_zero_value_is_not_negative_zero() {
        let p = profile(vec![vec!["g"], vec!["g"]]);
        let info = coef_information(&p, DegeneratePolicy::Zero).unwrap();
        for s in info.scores() {
            assert!(s.value.is_sign_positive());
        }

        let json = serde_json::to_string(&info.intkey).unwrap();
        assert!(json.contains("\"value\":0.0"));
        assert!(!json.contains("-0.0"));
    }

    #[test]
    fn test_single_state_reject_policy() {
        let p = profile(vec![vec!["green"], vec!["green"]]);
        let err = coef_information(&p, DegeneratePolicy::Reject).unwrap_err();
        assert!(matches!(err, BestcharError::DegenerateCharacter { n_states: 1 }));
    }

    #[test]
    fn test_single_taxon() {
        let p = profile(vec![vec!["red", "white"]]);
        let info = coef_information(&p, DegeneratePolicy::Zero).unwrap();
        assert!(info.normalized.degenerate);
        assert!(!info.pankhurst.degenerate);

        let err = coef_information(&p, DegeneratePolicy::Reject).unwrap_err();
        assert!(matches!(err, BestcharError::DegenerateTaxonCount { n_taxa: 1 }));
    }

    #[test]
    fn test_distinct_singletons_normalized_is_one() {
        // t taxa, t distinct states: -sum (1/t) log_t(1/t) = 1
        let p = profile(vec![vec!["a"], vec!["b"], vec!["c"], vec!["d"], vec!["e"]]);
        let info = coef_information(&p, DegeneratePolicy::Zero).unwrap();
        assert!((info.normalized.value - 1.0).abs() < 1e-10);
        assert!((info.pankhurst.value - 1.0).abs() < 1e-10);
        assert!((info.intkey.value - (5.0f64).log2()).abs() < 1e-10);
    }

    #[test]
    fn test_weighted_log_sum_degenerate_base() {
        let p = petal_colour();
        assert!(weighted_log_sum(&p, 1.0).is_none());
        assert!(weighted_log_sum(&p, 2.0).unwrap() < 0.0);
    }

    #[test]
    fn test_policy_from_str() {
        assert_eq!("zero".parse::<DegeneratePolicy>().unwrap(), DegeneratePolicy::Zero);
        assert_eq!("Reject".parse::<DegeneratePolicy>().unwrap(), DegeneratePolicy::Reject);
        assert!("skip".parse::<DegeneratePolicy>().is_err());
    }
}
