use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::Design;
use super::simple::draw_units;
use crate::error::{Result, SamplingError, checked_total};
use crate::{Sample, Strata};

/// How a stratified sample is spread over the strata.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Allocation {
    /// One count per stratum, in stratum order.
    Explicit { counts: Vec<usize> },
    /// `n_i = round(total * N_i / N)`, corrected so the counts add up to `total`.
    Proportional { total: usize },
    /// `total` split evenly; the first `total mod L` strata get one extra unit.
    Equal { total: usize },
}

impl Allocation {
    /// Per-stratum counts for strata of the given sizes.
    ///
    /// Fails when a count exceeds its stratum or the counts cannot be formed.
    pub fn counts(&self, sizes: &[usize]) -> Result<Vec<usize>> {
        let counts = match self {
            Allocation::Explicit { counts } => {
                if counts.len() != sizes.len() {
                    return Err(SamplingError::InvalidAllocation(format!(
                        "{} counts given for {} strata",
                        counts.len(),
                        sizes.len()
                    )));
                }
                counts.clone()
            }
            Allocation::Proportional { total } => proportional_allocation(sizes, *total)?,
            Allocation::Equal { total } => {
                if sizes.is_empty() {
                    return Err(SamplingError::EmptyPopulation("strata set"));
                }
                let base = total / sizes.len();
                let extra = total % sizes.len();
                (0..sizes.len()).map(|i| base + usize::from(i < extra)).collect()
            }
        };

        for (i, (&count, &size)) in counts.iter().zip(sizes).enumerate() {
            if count > size {
                return Err(SamplingError::InvalidAllocation(format!(
                    "stratum {} has {size} units but {count} were allocated",
                    i + 1
                )));
            }
        }
        Ok(counts)
    }
}

/// Proportional allocation of `total` units over strata of the given sizes.
///
/// Each stratum first receives `floor(total * N_i / N)`; the units left over
/// go to the strata with the largest remainders (ties to the earlier
/// stratum), so the counts always add up to `total`.
pub fn proportional_allocation(sizes: &[usize], total: usize) -> Result<Vec<usize>> {
    let population = checked_total(sizes)?;
    if population == 0 {
        return Err(SamplingError::EmptyPopulation("strata set"));
    }
    if total > population {
        return Err(SamplingError::InvalidAllocation(format!(
            "cannot allocate {total} units over {population}"
        )));
    }

    let n = total as u128;
    let big_n = population as u128;
    let mut counts = Vec::with_capacity(sizes.len());
    let mut remainders = Vec::with_capacity(sizes.len());
    for (i, &size) in sizes.iter().enumerate() {
        let quota = n * size as u128;
        counts.push((quota / big_n) as usize);
        remainders.push((i, quota % big_n));
    }

    let assigned: usize = counts.iter().sum();
    remainders.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    for &(i, _) in remainders.iter().take(total - assigned) {
        if let Some(count) = counts.get_mut(i) {
            *count += 1;
        }
    }
    Ok(counts)
}

/// Stratified sampling: an independent simple random draw in every stratum.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Stratified {
    pub allocation: Allocation,
    /// When set, the allocated counts must add up to exactly this many units.
    pub expected_total: Option<usize>,
}

impl Stratified {
    pub fn new(allocation: Allocation) -> Self {
        Self { allocation, expected_total: None }
    }

    pub fn expect_total(mut self, total: usize) -> Self {
        self.expected_total = Some(total);
        self
    }
}

impl<T: Clone> Design<Strata<T>> for Stratified {
    type Unit = T;

    fn draw<R: Rng + ?Sized>(&self, strata: &Strata<T>, rng: &mut R) -> Result<Sample<T>> {
        if strata.is_empty() || strata.total_units() == 0 {
            return Err(SamplingError::EmptyPopulation("strata set"));
        }

        let counts = self.allocation.counts(&strata.sizes())?;
        let allocated: usize = counts.iter().sum();
        if let Some(expected) = self.expected_total {
            if allocated != expected {
                return Err(SamplingError::InvalidAllocation(format!(
                    "allocated {allocated} units but {expected} were requested"
                )));
            }
        }
        debug!(?counts, allocated, "stratified allocation");

        let mut sample = Sample::new(Vec::with_capacity(allocated));
        for (stratum, &count) in strata.iter().zip(&counts) {
            sample.extend(draw_units(stratum.units(), count, rng)?);
        }
        Ok(sample)
    }
}

/// Draw each stratum's share of `allocation` and concatenate in stratum order.
pub fn stratified_sample<T: Clone, R: Rng + ?Sized>(
    strata: &Strata<T>,
    allocation: &Allocation,
    rng: &mut R,
) -> Result<Sample<T>> {
    Stratified::new(allocation.clone()).draw(strata, rng)
}
