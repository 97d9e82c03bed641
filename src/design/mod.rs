//! Probability sampling designs.
//!
//! Each design is a small parameter struct implementing [`Design`] for the
//! frame it draws from: a [`Population`] for simple random and systematic
//! sampling, [`Strata`](crate::Strata) for stratified sampling and
//! [`Clusters`](crate::Clusters) for one-stage cluster sampling. The random
//! source is always passed in by the caller, so a seeded generator replays
//! the same sample.
//!
//! Parameters are validated before the first random draw; a failing call
//! never consumes randomness.

mod cluster;
mod simple;
mod stratified;
mod systematic;

use std::fmt::{self, Display, Formatter};

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::{Population, Sample};

pub use cluster::{OneStageCluster, cluster_sample};
pub use simple::{SimpleRandom, simple_random_sample};
pub use stratified::{Allocation, Stratified, proportional_allocation, stratified_sample};
pub use systematic::{Systematic, systematic_sample};

/// A sampling design applied to a frame `F`.
pub trait Design<F: ?Sized> {
    type Unit;

    fn draw<R: Rng + ?Sized>(&self, frame: &F, rng: &mut R) -> Result<Sample<Self::Unit>>;
}

/// Sampling method names, used as labels in reports.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Method {
    Simple,
    Systematic,
    Stratified,
    Cluster,
}

impl Method {
    pub fn label(self) -> &'static str {
        match self {
            Method::Simple => "Simple random",
            Method::Systematic => "Systematic",
            Method::Stratified => "Stratified",
            Method::Cluster => "Cluster",
        }
    }
}

impl Display for Method {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A method together with its parameters, applied to a whole population.
///
/// Stratified and cluster plans describe how the population is split into
/// contiguous groups before drawing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum SamplingPlan {
    Simple {
        n: usize,
    },
    Systematic {
        n: usize,
        /// Fixed 0-based start; drawn uniformly from `0..k` when absent.
        #[serde(default)]
        start: Option<usize>,
    },
    Stratified {
        /// Contiguous stratum sizes, summing to the population size.
        strata: Vec<usize>,
        allocation: Allocation,
    },
    Cluster {
        cluster_size: usize,
        m: usize,
    },
}

impl SamplingPlan {
    pub fn method(&self) -> Method {
        match self {
            SamplingPlan::Simple { .. } => Method::Simple,
            SamplingPlan::Systematic { .. } => Method::Systematic,
            SamplingPlan::Stratified { .. } => Method::Stratified,
            SamplingPlan::Cluster { .. } => Method::Cluster,
        }
    }

    pub fn draw<T: Clone, R: Rng + ?Sized>(&self, population: &Population<T>, rng: &mut R) -> Result<Sample<T>> {
        match self {
            SamplingPlan::Simple { n } => SimpleRandom::new(*n).draw(population, rng),
            SamplingPlan::Systematic { n, start: None } => Systematic::new(*n).draw(population, rng),
            SamplingPlan::Systematic { n, start: Some(r) } => {
                Systematic::with_start(*n, *r).draw(population, rng)
            }
            SamplingPlan::Stratified { strata, allocation } => {
                let strata = population.strata_by_sizes(strata)?;
                Stratified::new(allocation.clone()).draw(&strata, rng)
            }
            SamplingPlan::Cluster { .. } => self.draw_labeled(population, rng).map(|(_, sample)| sample),
        }
    }

    /// Draw the plan, with the labels of the selected clusters for a cluster
    /// plan and no labels otherwise.
    pub fn draw_labeled<T: Clone, R: Rng + ?Sized>(
        &self,
        population: &Population<T>,
        rng: &mut R,
    ) -> Result<(Vec<String>, Sample<T>)> {
        match self {
            SamplingPlan::Cluster { cluster_size, m } => {
                let clusters = population.clusters_of_size(*cluster_size, "cluster")?;
                OneStageCluster::new(*m).draw_labeled(&clusters, rng)
            }
            _ => Ok((Vec::new(), self.draw(population, rng)?)),
        }
    }
}

/// `k` distinct positions out of `0..n`, uniformly over all `k`-subsets.
///
/// Small `k` (< 25% of `n`) uses reservoir sampling over positions, larger
/// `k` a partial Fisher-Yates shuffle. Callers guarantee `k <= n`.
pub(crate) fn choose_positions<R: Rng + ?Sized>(n: usize, k: usize, rng: &mut R) -> Vec<usize> {
    debug_assert!(k <= n);
    if k == 0 {
        return Vec::new();
    }

    if k < n / 4 {
        let mut reservoir: Vec<usize> = (0..k).collect();
        for i in k..n {
            let j = rng.gen_range(0..=i);
            if let Some(slot) = reservoir.get_mut(j) {
                *slot = i;
            }
        }
        reservoir
    } else {
        // Shuffle only the last k slots, then keep them.
        let mut positions: Vec<usize> = (0..n).collect();
        for i in (n - k..n).rev() {
            let j = rng.gen_range(0..=i);
            positions.swap(i, j);
        }
        positions.split_off(n - k)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{SamplingError, seeded_rng};
    use itertools::Itertools;

    #[test]
    fn choose_positions_covers_both_paths() {
        let mut rng = seeded_rng(7);
        for &(n, k) in &[(100, 3), (100, 50), (10, 10), (1, 1), (5, 0)] {
            let picked = choose_positions(n, k, &mut rng);
            assert_eq!(picked.len(), k);
            assert!(picked.iter().all(|&p| p < n));
            assert!(picked.iter().all_unique());
        }
    }

    #[test]
    fn full_draw_is_a_permutation() {
        let mut rng = seeded_rng(11);
        let mut picked = choose_positions(20, 20, &mut rng);
        picked.sort_unstable();
        assert_eq!(picked, (0..20).collect::<Vec<_>>());
    }

    #[test]
    fn plans_parse_from_toml() {
        let plan: SamplingPlan = toml::from_str(
            r#"
            method = "stratified"
            strata = [200, 100, 50]
            allocation = { kind = "proportional", total = 35 }
            "#,
        )
        .unwrap();
        assert_eq!(plan.method(), Method::Stratified);
        assert_eq!(
            plan,
            SamplingPlan::Stratified {
                strata: vec![200, 100, 50],
                allocation: Allocation::Proportional { total: 35 },
            }
        );

        let plan: SamplingPlan = toml::from_str("method = \"systematic\"\nn = 5").unwrap();
        assert_eq!(plan, SamplingPlan::Systematic { n: 5, start: None });
    }

    #[test]
    fn plans_dispatch_to_designs() {
        let population = Population::range(1, 120);
        let mut rng = seeded_rng(5);

        let plans = [
            SamplingPlan::Simple { n: 10 },
            SamplingPlan::Systematic { n: 10, start: None },
            SamplingPlan::Stratified {
                strata: vec![60, 60],
                allocation: Allocation::Equal { total: 10 },
            },
            SamplingPlan::Cluster { cluster_size: 10, m: 1 },
        ];
        for plan in &plans {
            let sample = plan.draw(&population, &mut rng).unwrap();
            assert_eq!(sample.len(), 10, "{}", plan.method());
        }

        let fixed = SamplingPlan::Systematic { n: 12, start: Some(9) };
        let sample = fixed.draw(&population, &mut rng).unwrap();
        assert_eq!(sample.data.first(), Some(&10));
    }

    #[test]
    fn oversized_strata_in_a_plan_are_an_error() {
        let plan = SamplingPlan::Stratified {
            strata: vec![usize::MAX, 2],
            allocation: Allocation::Equal { total: 1 },
        };
        let population = Population::range(1, 1);
        assert!(matches!(
            plan.draw(&population, &mut seeded_rng(0)),
            Err(SamplingError::InvalidAllocation(_))
        ));
    }

    #[test]
    fn cluster_plans_report_selected_labels() {
        let population = Population::range(1, 120);
        let plan = SamplingPlan::Cluster { cluster_size: 10, m: 3 };
        let (labels, sample) = plan.draw_labeled(&population, &mut seeded_rng(2)).unwrap();
        assert_eq!(labels.len(), 3);
        assert!(labels.iter().all(|label| label.starts_with("cluster ")));
        assert_eq!(sample, plan.draw(&population, &mut seeded_rng(2)).unwrap());

        let (labels, sample) = SamplingPlan::Simple { n: 4 }
            .draw_labeled(&population, &mut seeded_rng(2))
            .unwrap();
        assert!(labels.is_empty());
        assert_eq!(sample.len(), 4);
    }

    #[test]
    fn method_labels() {
        assert_eq!(Method::Simple.to_string(), "Simple random");
        assert_eq!(Method::Cluster.label(), "Cluster");
    }
}
