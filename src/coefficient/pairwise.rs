//! Pairwise separation and Jaccard coefficients.
//!
//! Every unordered pair of taxa is compared once. A pair is separable when
//! the two taxa share no state; its Jaccard coefficient is the size of the
//! shared state set over the size of the combined state set.

use crate::coefficient::Rounded;
use crate::data::{Taxon, TaxonStateSet};
use crate::error::{BestcharError, Result};
use serde::{Deserialize, Serialize};

/// Comparison of two taxa.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PairComparison {
    /// Index of the first taxon.
    pub first: usize,
    /// Index of the second taxon (`first < second`).
    pub second: usize,
    /// States allowed by both taxa, in the first taxon's order.
    pub intersection: Vec<String>,
    /// States allowed by either taxon: each state of the first taxon is
    /// followed by the second taxon's states not listed yet.
    pub union: Vec<String>,
    /// `|intersection| / |union|`.
    pub jaccard: f64,
}

impl PairComparison {
    /// Whether the two taxa share no state.
    pub fn is_separable(&self) -> bool {
        self.intersection.is_empty()
    }
}

/// Compare two taxa by their state sets.
pub fn compare_taxa(first: usize, a: &Taxon, second: usize, b: &Taxon) -> PairComparison {
    let intersection: Vec<String> = a
        .states()
        .iter()
        .filter(|s| b.contains(s))
        .cloned()
        .collect();

    // each state of `a`, followed by the states of `b` not yet seen
    let mut union: Vec<String> = Vec::new();
    for k in a.states() {
        if !union.contains(k) {
            union.push(k.clone());
        }
        for j in b.states() {
            if j != k && !union.contains(j) {
                union.push(j.clone());
            }
        }
    }

    let jaccard = intersection.len() as f64 / union.len() as f64;

    PairComparison {
        first,
        second,
        intersection,
        union,
        jaccard,
    }
}

/// Separation coefficient and average Jaccard distance of a character.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PairwiseCoefficients {
    /// Number of taxa.
    pub n_taxa: usize,
    /// `t(t-1)/2`.
    pub total_pairs: usize,
    /// Pairs sharing no state.
    pub separable_pairs: usize,
    /// Sum of per-pair Jaccard coefficients.
    pub jaccard_similarity_sum: f64,
    /// `separable_pairs / total_pairs`.
    pub separation: f64,
    /// `1 - jaccard_similarity_sum / total_pairs`.
    pub jaccard_distance: f64,
    /// Two-decimal separation coefficient.
    pub separation_rounded: Rounded,
    /// Two-decimal Jaccard distance.
    pub jaccard_distance_rounded: Rounded,
    /// Every pair, in enumeration order.
    pub pairs: Vec<PairComparison>,
}

impl PairwiseCoefficients {
    /// Pairs sharing at least one state.
    pub fn overlapping_pairs(&self) -> usize {
        self.total_pairs - self.separable_pairs
    }
}

/// Compute the pairwise coefficients over all unordered pairs of taxa.
///
/// Pairs are visited as `(0,1), (0,2), ..., (1,2), ...`. Requires at least
/// two taxa: with fewer there are no pairs and both ratios are undefined.
pub fn coef_pairwise(taxa: &TaxonStateSet) -> Result<PairwiseCoefficients> {
    let n_taxa = taxa.n_taxa();
    if n_taxa < 2 {
        return Err(BestcharError::DegenerateTaxonCount { n_taxa });
    }
    let total_pairs = taxa.n_pairs();

    let all = taxa.taxa();
    let mut pairs = Vec::with_capacity(total_pairs);
    for (i, a) in all.iter().enumerate() {
        for (j, b) in all.iter().enumerate().skip(i + 1) {
            let pair = compare_taxa(i, a, j, b);
            tracing::debug!(
                first = i,
                second = j,
                intersection = ?pair.intersection,
                union = ?pair.union,
                jaccard = pair.jaccard,
                "pair compared"
            );
            pairs.push(pair);
        }
    }

    let separable_pairs = pairs.iter().filter(|p| p.is_separable()).count();
    let jaccard_similarity_sum: f64 = pairs.iter().map(|p| p.jaccard).sum();

    let separation = separable_pairs as f64 / total_pairs as f64;
    let jaccard_distance = 1.0 - jaccard_similarity_sum / total_pairs as f64;

    tracing::debug!(
        total_pairs,
        separable_pairs,
        jaccard_similarity_sum,
        separation,
        jaccard_distance,
        "pairwise coefficients"
    );

    Ok(PairwiseCoefficients {
        n_taxa,
        total_pairs,
        separable_pairs,
        jaccard_similarity_sum,
        separation,
        jaccard_distance,
        separation_rounded: Rounded::half_down(separation)?,
        jaccard_distance_rounded: Rounded::half_down(jaccard_distance)?,
        pairs,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn taxa(labels: Vec<Vec<&str>>) -> TaxonStateSet {
        TaxonStateSet::from_labels(labels).unwrap()
    }

    fn petal_colour() -> TaxonStateSet {
        taxa(vec![
            vec!["red"],
            vec!["white", "red"],
            vec!["white"],
            vec!["white"],
        ])
    }

    #[test]
    fn test_petal_colour() {
        let result = coef_pairwise(&petal_colour()).unwrap();

        assert_eq!(result.total_pairs, 6);
        assert_eq!(result.separable_pairs, 2);
        assert!((result.jaccard_similarity_sum - 2.5).abs() < 1e-10);
        assert!((result.separation - 2.0 / 6.0).abs() < 1e-10);
        assert!((result.jaccard_distance - (1.0 - 2.5 / 6.0)).abs() < 1e-10);
        assert_eq!(result.separation_rounded.to_string(), "0.33");
        assert_eq!(result.jaccard_distance_rounded.to_string(), "0.58");
    }

    #[test]
    fn test_enumeration_order() {
        let result = coef_pairwise(&petal_colour()).unwrap();
        let order: Vec<(usize, usize)> = result.pairs.iter().map(|p| (p.first, p.second)).collect();
        assert_eq!(order, vec![(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)]);
    }

    #[test]
    fn test_compare_taxa() {
        let a = Taxon::new(["white", "red"]).unwrap();
        let b = Taxon::new(["red", "blue"]).unwrap();
        let pair = compare_taxa(0, &a, 1, &b);

        assert_eq!(pair.intersection, vec!["red".to_string()]);
        assert_eq!(
            pair.union,
            vec!["white".to_string(), "red".to_string(), "blue".to_string()]
        );
        assert!((pair.jaccard - 1.0 / 3.0).abs() < 1e-10);
        assert!(!pair.is_separable());
    }

    #[test]
    fn test_union_order_interleaved() {
        let a = Taxon::new(["x", "y"]).unwrap();
        let b = Taxon::new(["z", "y"]).unwrap();
        let pair = compare_taxa(0, &a, 1, &b);

        assert_eq!(
            pair.union,
            vec!["x".to_string(), "z".to_string(), "y".to_string()]
        );
        assert_eq!(pair.intersection, vec!["y".to_string()]);
        assert!((pair.jaccard - 1.0 / 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_identical_taxa() {
        let a = Taxon::new(["white"]).unwrap();
        let pair = compare_taxa(2, &a, 3, &a);
        assert_eq!(pair.union.len(), 1);
        assert!((pair.jaccard - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_distinct_singletons() {
        let result = coef_pairwise(&taxa(vec![vec!["a"], vec!["b"], vec!["c"], vec!["d"]])).unwrap();
        assert_eq!(result.separable_pairs, 6);
        assert!((result.separation - 1.0).abs() < 1e-10);
        assert!((result.jaccard_distance - 1.0).abs() < 1e-10);
        assert_eq!(result.separation_rounded.to_string(), "1.00");
    }

    #[test]
    fn test_all_identical() {
        let result = coef_pairwise(&taxa(vec![vec!["a", "b"], vec!["a", "b"], vec!["b", "a"]])).unwrap();
        assert_eq!(result.separable_pairs, 0);
        assert_eq!(result.separation_rounded.to_string(), "0.00");
        assert!(result.jaccard_distance.abs() < 1e-10);
    }

    #[test]
    fn test_pair_count_identity_and_bounds() {
        let result = coef_pairwise(&taxa(vec![
            vec!["a", "b", "c"],
            vec!["b"],
            vec!["c", "d"],
            vec!["a", "d"],
            vec!["e"],
            vec!["e", "a"],
        ]))
        .unwrap();

        assert_eq!(result.total_pairs, 15);
        assert_eq!(result.pairs.len(), result.total_pairs);
        assert_eq!(
            result.separable_pairs + result.overlapping_pairs(),
            result.total_pairs
        );
        assert_eq!(
            result.pairs.iter().filter(|p| !p.intersection.is_empty()).count(),
            result.overlapping_pairs()
        );
        assert!(result.pairs.iter().all(|p| (0.0..=1.0).contains(&p.jaccard)));
        assert!((0.0..=1.0).contains(&result.jaccard_distance));
        assert!((0.0..=1.0).contains(&result.separation));
    }

    #[test]
    fn test_single_taxon_rejected() {
        let err = coef_pairwise(&taxa(vec![vec!["a", "b"]])).unwrap_err();
        assert!(matches!(err, BestcharError::DegenerateTaxonCount { n_taxa: 1 }));
    }

    #[test]
    fn test_taxa_not_mutated() {
        let set = petal_colour();
        let before = set.clone();
        coef_pairwise(&set).unwrap();
        assert_eq!(set, before);
    }
}
