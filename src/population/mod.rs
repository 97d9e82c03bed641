//! Sampling frames.
//!
//! A [`Population`] is the ordered, immutable list of units a design draws
//! from. Stratified and cluster designs need the population split into
//! labeled groups; [`Strata`] and [`Clusters`] are built from a population
//! (or directly from labeled groups) and always partition it exactly.

mod group;
mod read;

use std::collections::BTreeMap;
use std::fmt::Display;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SamplingError, checked_total, ensure_fits};

pub use group::{Clusters, Group, Strata};

/// Ordered sequence of population units, fixed once built.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Population<T> {
    data: Vec<T>,
}

impl<T> Population<T> {
    pub fn new(data: Vec<T>) -> Self {
        Self { data }
    }

    /// Number of units `N`.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Project every unit onto a measurement, keeping order.
    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> Population<U> {
        Population::new(self.data.iter().map(f).collect())
    }
}

impl Population<i64> {
    /// Identifiers `start..=end`. Empty when `end < start`.
    pub fn range(start: i64, end: i64) -> Self {
        Self::new((start..=end).collect())
    }

    /// `size` integer measurements drawn uniformly from `[low, high]`.
    pub fn uniform<R: Rng + ?Sized>(size: usize, low: i64, high: i64, rng: &mut R) -> Result<Self> {
        if low > high {
            return Err(SamplingError::InvalidRange { low, high });
        }
        Ok(Self::new((0..size).map(|_| rng.gen_range(low..=high)).collect()))
    }
}

impl<T: Clone> Population<T> {
    /// Contiguous strata with the given sizes, labeled `stratum 1`, `stratum 2`, ...
    ///
    /// The sizes must add up to the population size.
    pub fn strata_by_sizes(&self, sizes: &[usize]) -> Result<Strata<T>> {
        let groups = self.split_contiguous(sizes, "stratum")?;
        Ok(Strata::from_groups(groups))
    }

    /// `parts` contiguous strata whose sizes differ by at most one unit.
    ///
    /// The first `N mod parts` strata receive the extra unit.
    pub fn strata_equal(&self, parts: usize) -> Result<Strata<T>> {
        if parts == 0 {
            return Err(SamplingError::ZeroSize("number of strata"));
        }
        ensure_fits(parts, self.len())?;
        let base = self.len() / parts;
        let extra = self.len() % parts;
        let sizes: Vec<usize> = (0..parts).map(|i| base + usize::from(i < extra)).collect();
        self.strata_by_sizes(&sizes)
    }

    /// Strata keyed by `key`, in ascending key order, labeled with the key.
    pub fn strata_by_key<K, F>(&self, key: F) -> Strata<T>
    where
        K: Ord + Display,
        F: Fn(&T) -> K,
    {
        Strata::from_groups(self.group_by_key(key))
    }

    /// Contiguous clusters of `size` units each, labeled `"{prefix} 1"`, `"{prefix} 2"`, ...
    ///
    /// The last cluster is shorter when `size` does not divide `N`.
    pub fn clusters_of_size(&self, size: usize, prefix: &str) -> Result<Clusters<T>> {
        if size == 0 {
            return Err(SamplingError::ZeroSize("cluster size"));
        }
        let groups = self
            .data
            .chunks(size)
            .enumerate()
            .map(|(i, chunk)| Group::new(format!("{prefix} {}", i + 1), chunk.to_vec()))
            .collect();
        Ok(Clusters::from_groups(groups))
    }

    /// Clusters keyed by `key`, in ascending key order, labeled with the key.
    pub fn clusters_by_key<K, F>(&self, key: F) -> Clusters<T>
    where
        K: Ord + Display,
        F: Fn(&T) -> K,
    {
        Clusters::from_groups(self.group_by_key(key))
    }

    fn split_contiguous(&self, sizes: &[usize], prefix: &str) -> Result<Vec<Group<T>>> {
        let total = checked_total(sizes)?;
        if total != self.len() {
            return Err(SamplingError::InvalidAllocation(format!(
                "group sizes add up to {total} but the population has {} units",
                self.len()
            )));
        }

        let mut groups = Vec::with_capacity(sizes.len());
        let mut rest = self.data.as_slice();
        for (i, &size) in sizes.iter().enumerate() {
            let Some((head, tail)) = rest.split_at_checked(size) else {
                return Err(SamplingError::InvalidSize { requested: size, available: rest.len() });
            };
            groups.push(Group::new(format!("{prefix} {}", i + 1), head.to_vec()));
            rest = tail;
        }
        Ok(groups)
    }

    fn group_by_key<K, F>(&self, key: F) -> Vec<Group<T>>
    where
        K: Ord + Display,
        F: Fn(&T) -> K,
    {
        let mut buckets: BTreeMap<K, Vec<T>> = BTreeMap::new();
        for unit in &self.data {
            buckets.entry(key(unit)).or_default().push(unit.clone());
        }
        buckets
            .into_iter()
            .map(|(k, units)| Group::new(k.to_string(), units))
            .collect()
    }
}

impl<T> FromIterator<T> for Population<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Population::new(iter.into_iter().collect())
    }
}

impl<T> AsRef<[T]> for Population<T> {
    fn as_ref(&self) -> &[T] { &self.data }
}

impl<'a, T> IntoIterator for &'a Population<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

/// How to build a demo population, as written in a configuration file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PopulationSpec {
    /// Identifiers `start..=end`.
    Range { start: i64, end: i64 },
    /// `size` measurements drawn uniformly from `[low, high]`.
    Uniform { size: usize, low: i64, high: i64 },
}

impl PopulationSpec {
    pub fn build<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Population<i64>> {
        match *self {
            PopulationSpec::Range { start, end } => Ok(Population::range(start, end)),
            PopulationSpec::Uniform { size, low, high } => Population::uniform(size, low, high, rng),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seeded_rng;

    #[test]
    fn range_is_inclusive() {
        let population = Population::range(1, 10);
        assert_eq!(population.as_slice(), &[1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
        assert!(Population::range(5, 4).is_empty());
    }

    #[test]
    fn uniform_values_stay_in_range() {
        let mut rng = seeded_rng(0);
        let population = Population::uniform(100, 1, 100, &mut rng).unwrap();
        assert_eq!(population.len(), 100);
        assert!(population.iter().all(|v| (1..=100).contains(v)));
    }

    #[test]
    fn uniform_rejects_inverted_range() {
        let mut rng = seeded_rng(0);
        let err = Population::uniform(10, 5, 1, &mut rng).unwrap_err();
        assert!(matches!(err, SamplingError::InvalidRange { low: 5, high: 1 }));
    }

    #[test]
    fn strata_by_sizes_partitions_contiguously() {
        let population = Population::range(1, 350);
        let strata = population.strata_by_sizes(&[200, 100, 50]).unwrap();
        assert_eq!(strata.sizes(), vec![200, 100, 50]);
        let groups = strata.groups();
        assert_eq!(groups[1].units().first(), Some(&201));
        assert_eq!(groups[2].units().last(), Some(&350));
        assert_eq!(groups[0].label(), "stratum 1");
    }

    #[test]
    fn strata_by_sizes_must_cover_population() {
        let population = Population::range(1, 10);
        let err = population.strata_by_sizes(&[4, 4]).unwrap_err();
        assert!(matches!(err, SamplingError::InvalidAllocation(_)));
    }

    #[test]
    fn strata_sizes_overflowing_usize_are_rejected() {
        let population = Population::range(1, 1);
        assert!(matches!(
            population.strata_by_sizes(&[usize::MAX, 2]),
            Err(SamplingError::InvalidAllocation(_))
        ));
        assert!(matches!(
            population.strata_by_sizes(&[usize::MAX, 1, 1]),
            Err(SamplingError::InvalidAllocation(_))
        ));
    }

    #[test]
    fn strata_equal_spreads_remainder_first() {
        let population = Population::range(1, 11);
        let strata = population.strata_equal(3).unwrap();
        assert_eq!(strata.sizes(), vec![4, 4, 3]);
        assert!(matches!(
            population.strata_equal(0),
            Err(SamplingError::ZeroSize(_))
        ));
        assert!(matches!(
            population.strata_equal(12),
            Err(SamplingError::InvalidSize { requested: 12, available: 11 })
        ));
    }

    #[test]
    fn strata_by_key_orders_and_labels_by_key() {
        let population = Population::range(1, 9);
        let strata = population.strata_by_key(|v| if v % 3 == 0 { "multiple" } else { "other" });
        let labels: Vec<&str> = strata.iter().map(Group::label).collect();
        assert_eq!(labels, vec!["multiple", "other"]);
        assert_eq!(strata.sizes(), vec![3, 6]);
    }

    #[test]
    fn clusters_of_size_keeps_short_tail() {
        let population = Population::range(1, 25);
        let clusters = population.clusters_of_size(10, "block").unwrap();
        assert_eq!(clusters.sizes(), vec![10, 10, 5]);
        assert_eq!(clusters.groups()[2].label(), "block 3");
        assert!(matches!(
            population.clusters_of_size(0, "block"),
            Err(SamplingError::ZeroSize(_))
        ));
    }

    #[test]
    fn population_spec_builds_populations() {
        let mut rng = seeded_rng(3);
        let spec: PopulationSpec = toml::from_str("kind = \"range\"\nstart = 1\nend = 20").unwrap();
        assert_eq!(spec.build(&mut rng).unwrap(), Population::range(1, 20));
    }
}
