use std::fmt::{self, Display, Formatter};

use serde::Serialize;

use crate::statistics::Statistic;

/// Units drawn from a population by one of the sampling designs.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Sample<T> {
    pub data: Vec<T>,
}

impl<T> Sample<T> {
    /// Create a new sample from raw data
    pub fn new(data: Vec<T>) -> Self {
        Self { data }
    }

    /// Get the number of observations in the sample
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if the sample contains no observations
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Fraction `n / N` of a population of `population_size` units covered by this sample.
    ///
    /// Returns NaN for an empty population.
    pub fn sampling_fraction(&self, population_size: usize) -> f64 {
        if population_size == 0 {
            return f64::NAN;
        }
        self.data.len() as f64 / population_size as f64
    }

    /// Estimate a statistic from the sample data
    pub fn estimate<Output>(&self, statistic: impl Statistic<Self, Output>) -> Output {
        statistic.compute(self)
    }

    pub(crate) fn extend(&mut self, other: Sample<T>) {
        self.data.extend(other.data);
    }
}

impl<T> FromIterator<T> for Sample<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Sample::new(iter.into_iter().collect())
    }
}

impl<T> IntoIterator for Sample<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<T> AsRef<[T]> for Sample<T> {
    fn as_ref(&self) -> &[T] { &self.data }
}

impl<T: Display> Display for Sample<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, unit) in self.data.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{unit}")?;
        }
        write!(f, "]")
    }
}
