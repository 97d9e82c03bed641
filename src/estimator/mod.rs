//! Sample means of different designs set against the population mean.

mod study;

use std::collections::BTreeMap;

use num_traits::ToPrimitive;
use rand::Rng;
use serde::Serialize;
use tracing::debug;

use crate::design::{Allocation, Method, simple_random_sample, stratified_sample, systematic_sample};
use crate::error::{Result, SamplingError, ensure_fits};
use crate::{Mean, Population, Sample, Statistic};

pub use study::{EstimatorStudy, MethodSummary, StudyReport};

/// Label used for the population mean in [`EstimatorComparison::to_map`].
pub const POPULATION_LABEL: &str = "Population";

/// One design's sample and its mean.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Estimate {
    pub method: Method,
    pub sample: Sample<f64>,
    pub mean: f64,
}

/// Result of [`compare_estimators`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EstimatorComparison {
    pub population_size: usize,
    pub population_mean: f64,
    pub estimates: Vec<Estimate>,
}

impl EstimatorComparison {
    /// `(method, sample mean)` in the order the designs were run.
    pub fn iter(&self) -> impl Iterator<Item = (Method, f64)> + '_ {
        self.estimates.iter().map(|e| (e.method, e.mean))
    }

    pub fn mean_of(&self, method: Method) -> Option<f64> {
        self.iter().find(|(m, _)| *m == method).map(|(_, mean)| mean)
    }

    /// Sampling error `μ - x̄` of a design's estimate.
    pub fn sampling_error(&self, method: Method) -> Option<f64> {
        self.mean_of(method).map(|mean| self.population_mean - mean)
    }

    /// Method label to mean, with the population mean under [`POPULATION_LABEL`].
    pub fn to_map(&self) -> BTreeMap<&'static str, f64> {
        let mut map: BTreeMap<&'static str, f64> = self.iter().map(|(m, mean)| (m.label(), mean)).collect();
        map.insert(POPULATION_LABEL, self.population_mean);
        map
    }
}

/// Draw one simple random, one systematic and one stratified sample of size
/// `n` and report their means next to the population mean.
///
/// The stratified design splits the population into two contiguous halves
/// and draws `n / 2` from each (the first half takes the odd unit).
/// Measurements that cannot be represented as `f64` count as NaN.
pub fn compare_estimators<T, R>(population: &Population<T>, n: usize, rng: &mut R) -> Result<EstimatorComparison>
where
    T: ToPrimitive,
    R: Rng + ?Sized,
{
    if population.is_empty() {
        return Err(SamplingError::EmptyPopulation("population"));
    }
    if n == 0 {
        return Err(SamplingError::ZeroSize("sample size"));
    }
    ensure_fits(n, population.len())?;
    ensure_fits(2, population.len())?;

    let values: Population<f64> = population.map(|v| v.to_f64().unwrap_or(f64::NAN));
    let population_mean: f64 = Mean.compute(&values);

    let halves = values.strata_equal(2)?;
    let samples = [
        (Method::Simple, simple_random_sample(&values, n, rng)?),
        (Method::Systematic, systematic_sample(&values, n, rng)?),
        (Method::Stratified, stratified_sample(&halves, &Allocation::Equal { total: n }, rng)?),
    ];

    let estimates: Vec<Estimate> = samples
        .into_iter()
        .map(|(method, sample)| {
            let mean = sample.estimate(Mean);
            Estimate { method, sample, mean }
        })
        .collect();
    debug!(population_mean, ?estimates, "estimator comparison");

    Ok(EstimatorComparison {
        population_size: population.len(),
        population_mean,
        estimates,
    })
}
