//! Demo configuration, read from TOML.
//!
//! ```toml
//! seed = 0
//!
//! [[demos]]
//! label = "Systematic"
//! population = { kind = "range", start = 1, end = 20 }
//! plan = { method = "systematic", n = 5 }
//!
//! [comparison]
//! population = { kind = "uniform", size = 100, low = 1, high = 100 }
//! n = 10
//!
//! [study]
//! replications = 1000
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::design::{Allocation, SamplingPlan};
use crate::error::Result;
use crate::population::PopulationSpec;

/// One labeled plan applied to its own population.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemoCase {
    pub label: String,
    pub population: PopulationSpec,
    pub plan: SamplingPlan,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonConfig {
    pub population: PopulationSpec,
    pub n: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudyConfig {
    pub replications: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Seed of the single random source; `None` seeds from the OS.
    pub seed: Option<u64>,
    pub demos: Vec<DemoCase>,
    pub comparison: Option<ComparisonConfig>,
    pub study: Option<StudyConfig>,
}

impl Default for DemoConfig {
    /// The classroom walk-through: ten customers, twenty units every fourth,
    /// three company sectors, twelve city blocks, then the comparison over a
    /// hundred uniform scores.
    fn default() -> Self {
        Self {
            seed: Some(0),
            demos: vec![
                DemoCase {
                    label: "Simple random".into(),
                    population: PopulationSpec::Range { start: 1, end: 10 },
                    plan: SamplingPlan::Simple { n: 3 },
                },
                DemoCase {
                    label: "Systematic".into(),
                    population: PopulationSpec::Range { start: 1, end: 20 },
                    plan: SamplingPlan::Systematic { n: 5, start: None },
                },
                DemoCase {
                    label: "Stratified".into(),
                    population: PopulationSpec::Range { start: 1, end: 350 },
                    plan: SamplingPlan::Stratified {
                        strata: vec![200, 100, 50],
                        allocation: Allocation::Proportional { total: 35 },
                    },
                },
                DemoCase {
                    label: "Cluster".into(),
                    population: PopulationSpec::Range { start: 1, end: 120 },
                    plan: SamplingPlan::Cluster { cluster_size: 10, m: 3 },
                },
            ],
            comparison: Some(ComparisonConfig {
                population: PopulationSpec::Uniform { size: 100, low: 1, high: 100 },
                n: 10,
            }),
            study: None,
        }
    }
}

impl DemoConfig {
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&text)?;
        debug!(path = %path.display(), demos = config.demos.len(), "loaded demo config");
        Ok(config)
    }
}
