use rand::Rng;
use tracing::debug;

use super::{Design, choose_positions};
use crate::error::{Result, SamplingError, ensure_fits};
use crate::{Population, Sample};

/// Simple random sampling without replacement.
///
/// Every subset of `n` units is equally likely. The sample lists units in
/// draw order, not population order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SimpleRandom {
    pub n: usize,
}

impl SimpleRandom {
    pub fn new(n: usize) -> Self {
        Self { n }
    }
}

impl<T: Clone> Design<[T]> for SimpleRandom {
    type Unit = T;

    fn draw<R: Rng + ?Sized>(&self, units: &[T], rng: &mut R) -> Result<Sample<T>> {
        if units.is_empty() {
            return Err(SamplingError::EmptyPopulation("population"));
        }
        draw_units(units, self.n, rng)
    }
}

impl<T: Clone> Design<Population<T>> for SimpleRandom {
    type Unit = T;

    fn draw<R: Rng + ?Sized>(&self, population: &Population<T>, rng: &mut R) -> Result<Sample<T>> {
        self.draw(population.as_slice(), rng)
    }
}

/// Draw `n` distinct units of `population` uniformly at random.
pub fn simple_random_sample<T: Clone, R: Rng + ?Sized>(
    population: &Population<T>,
    n: usize,
    rng: &mut R,
) -> Result<Sample<T>> {
    SimpleRandom::new(n).draw(population, rng)
}

/// Draw without the emptiness check; an empty slice with `n == 0` yields an empty sample.
pub(crate) fn draw_units<T: Clone, R: Rng + ?Sized>(units: &[T], n: usize, rng: &mut R) -> Result<Sample<T>> {
    ensure_fits(n, units.len())?;
    debug!(population = units.len(), n, "simple random draw");
    Ok(choose_positions(units.len(), n, rng)
        .into_iter()
        .filter_map(|i| units.get(i).cloned())
        .collect())
}
