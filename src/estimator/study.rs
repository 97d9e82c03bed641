use num_traits::ToPrimitive;
#[cfg(feature = "rayon")]
use rayon::prelude::*;
use serde::Serialize;
use tracing::info;

use super::{EstimatorComparison, compare_estimators};
use crate::design::Method;
use crate::error::{Result, SamplingError};
use crate::{Mean, Population, Statistic, Variance, seeded_rng};

/// Repeats [`compare_estimators`] to show how each design's mean behaves
/// across many draws.
///
/// Replication `i` uses its own generator seeded with `seed + i`, so the
/// report does not depend on whether replications run in parallel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EstimatorStudy {
    pub replications: usize,
    pub seed: u64,
}

/// Behaviour of one design's mean over all replications.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MethodSummary {
    pub method: Method,
    /// Average of the sample means.
    pub mean_estimate: f64,
    /// `mean_estimate - μ`.
    pub bias: f64,
    /// Sample variance of the sample means.
    pub variance: f64,
    /// Mean squared error against `μ`.
    pub mse: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudyReport {
    pub replications: usize,
    pub sample_size: usize,
    pub population_mean: f64,
    pub summaries: Vec<MethodSummary>,
}

impl EstimatorStudy {
    pub fn new(replications: usize, seed: u64) -> Self {
        Self { replications, seed }
    }

    pub fn run<T>(&self, population: &Population<T>, n: usize) -> Result<StudyReport>
    where
        T: ToPrimitive + Sync,
    {
        if self.replications == 0 {
            return Err(SamplingError::ZeroSize("number of replications"));
        }
        info!(replications = self.replications, n, seed = self.seed, "running estimator study");

        let comparisons = self.replicate(population, n)?;
        let population_mean = comparisons
            .first()
            .map_or(f64::NAN, |c| c.population_mean);

        let summaries = [Method::Simple, Method::Systematic, Method::Stratified]
            .into_iter()
            .map(|method| summarize(method, population_mean, &comparisons))
            .collect();

        Ok(StudyReport {
            replications: self.replications,
            sample_size: n,
            population_mean,
            summaries,
        })
    }

    fn replication<T: ToPrimitive>(&self, population: &Population<T>, n: usize, i: usize) -> Result<EstimatorComparison> {
        let mut rng = seeded_rng(self.seed.wrapping_add(i as u64));
        compare_estimators(population, n, &mut rng)
    }

    #[cfg(not(feature = "rayon"))]
    fn replicate<T: ToPrimitive + Sync>(&self, population: &Population<T>, n: usize) -> Result<Vec<EstimatorComparison>> {
        (0..self.replications)
            .map(|i| self.replication(population, n, i))
            .collect()
    }

    #[cfg(feature = "rayon")]
    fn replicate<T: ToPrimitive + Sync>(&self, population: &Population<T>, n: usize) -> Result<Vec<EstimatorComparison>> {
        (0..self.replications)
            .into_par_iter()
            .map(|i| self.replication(population, n, i))
            .collect()
    }
}

fn summarize(method: Method, population_mean: f64, comparisons: &[EstimatorComparison]) -> MethodSummary {
    let estimates: Vec<f64> = comparisons
        .iter()
        .filter_map(|c| c.mean_of(method))
        .collect();
    let (mean_estimate, variance): (f64, f64) = (Mean, Variance::default()).compute(&estimates);
    let squared_errors: Vec<f64> = estimates
        .iter()
        .map(|e| (e - population_mean).powi(2))
        .collect();

    MethodSummary {
        method,
        mean_estimate,
        bias: mean_estimate - population_mean,
        variance,
        mse: Mean.compute(&squared_errors),
    }
}
