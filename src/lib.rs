//! `stratum`: classical probability sampling designs.
//!
//! Simple random, systematic, stratified and one-stage cluster sampling over
//! an immutable [`Population`], with the random source injected by the
//! caller:
//!
//! ```
//! use stratum::{Population, seeded_rng, simple_random_sample, systematic_sample};
//!
//! let mut rng = seeded_rng(42);
//! let customers = Population::range(1, 10);
//! let sample = simple_random_sample(&customers, 3, &mut rng).unwrap();
//! assert_eq!(sample.len(), 3);
//!
//! let units = Population::range(1, 20);
//! let sample = systematic_sample(&units, 5, &mut rng).unwrap();
//! assert!(sample.data.windows(2).all(|w| w[1] - w[0] == 4));
//! ```

#![cfg_attr(test, allow(clippy::indexing_slicing))]

mod config;
mod design;
mod display;
mod error;
mod estimator;
mod population;
mod sample;
mod statistics;

pub use crate::config::{ComparisonConfig, DemoCase, DemoConfig, StudyConfig};
pub use crate::design::*;
pub use crate::display::labeled;
pub use crate::error::{Result, SamplingError};
pub use crate::estimator::*;
pub use crate::population::*;
pub use crate::sample::Sample;
pub use crate::statistics::*;
pub use rand;
pub use rand::Rng;

use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;

/// Seeded random source; the same seed replays the same draws on every platform.
pub fn seeded_rng(seed: u64) -> Xoshiro256PlusPlus {
    Xoshiro256PlusPlus::seed_from_u64(seed)
}

/// Random source seeded from the operating system.
pub fn entropy_rng() -> Xoshiro256PlusPlus {
    Xoshiro256PlusPlus::from_entropy()
}
