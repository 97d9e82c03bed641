use rand::Rng;
use tracing::debug;

use super::Design;
use crate::error::{Result, SamplingError, ensure_fits};
use crate::{Population, Sample};

/// Systematic sampling: every `k`-th unit from a random start.
///
/// `k = N div n`. The start `r` is a 0-based position in `0..k`, and the
/// sample holds positions `r, r + k, ..., r + (n - 1)k`. Units at positions
/// `k * n` and beyond can never be drawn when `n` does not divide `N`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Systematic {
    pub n: usize,
    pub start: Option<usize>,
}

impl Systematic {
    pub fn new(n: usize) -> Self {
        Self { n, start: None }
    }

    /// Use a fixed 0-based start instead of a random one.
    pub fn with_start(n: usize, start: usize) -> Self {
        Self { n, start: Some(start) }
    }

    /// Sampling interval `k` for a population of `population_size` units.
    pub fn interval(&self, population_size: usize) -> Result<usize> {
        if self.n == 0 {
            return Err(SamplingError::ZeroSize("systematic sample size"));
        }
        ensure_fits(self.n, population_size)?;
        Ok(population_size / self.n)
    }
}

impl<T: Clone> Design<[T]> for Systematic {
    type Unit = T;

    fn draw<R: Rng + ?Sized>(&self, units: &[T], rng: &mut R) -> Result<Sample<T>> {
        if units.is_empty() {
            return Err(SamplingError::EmptyPopulation("population"));
        }
        let k = self.interval(units.len())?;
        let start = match self.start {
            Some(start) if start >= k => {
                return Err(SamplingError::InvalidStart { start, interval: k });
            }
            Some(start) => start,
            None => rng.gen_range(0..k),
        };
        debug!(population = units.len(), n = self.n, k, start, "systematic draw");

        Ok(units.iter().skip(start).step_by(k).take(self.n).cloned().collect())
    }
}

impl<T: Clone> Design<Population<T>> for Systematic {
    type Unit = T;

    fn draw<R: Rng + ?Sized>(&self, population: &Population<T>, rng: &mut R) -> Result<Sample<T>> {
        self.draw(population.as_slice(), rng)
    }
}

/// Draw `n` units spaced `N div n` apart from a uniformly random start.
pub fn systematic_sample<T: Clone, R: Rng + ?Sized>(
    population: &Population<T>,
    n: usize,
    rng: &mut R,
) -> Result<Sample<T>> {
    Systematic::new(n).draw(population, rng)
}
