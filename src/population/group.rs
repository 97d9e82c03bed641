use rand::Rng;
use serde::Serialize;
use tracing::debug;

use crate::error::{Result, SamplingError, ensure_fits};
use crate::design::choose_positions;

/// A labeled group of units: one stratum or one cluster.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Group<T> {
    label: String,
    units: Vec<T>,
}

impl<T> Group<T> {
    pub fn new(label: impl Into<String>, units: Vec<T>) -> Self {
        Self { label: label.into(), units }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn units(&self) -> &[T] {
        &self.units
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}

impl<T> AsRef<[T]> for Group<T> {
    fn as_ref(&self) -> &[T] { &self.units }
}

macro_rules! partition {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Serialize)]
        pub struct $name<T> {
            groups: Vec<Group<T>>,
        }

        impl<T> $name<T> {
            /// Wrap groups that are already disjoint.
            pub fn from_groups(groups: Vec<Group<T>>) -> Self {
                Self { groups }
            }

            /// Build from `(label, units)` pairs.
            pub fn from_labeled<L, I>(groups: I) -> Self
            where
                L: Into<String>,
                I: IntoIterator<Item = (L, Vec<T>)>,
            {
                Self::from_groups(groups.into_iter().map(|(l, u)| Group::new(l, u)).collect())
            }

            /// Replace the group labels, keeping the units.
            pub fn with_labels<L: Into<String>>(mut self, labels: impl IntoIterator<Item = L>) -> Result<Self> {
                let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
                if labels.len() != self.groups.len() {
                    return Err(SamplingError::InvalidAllocation(format!(
                        "{} labels given for {} groups",
                        labels.len(),
                        self.groups.len()
                    )));
                }
                for (group, label) in self.groups.iter_mut().zip(labels) {
                    group.label = label;
                }
                Ok(self)
            }

            pub fn groups(&self) -> &[Group<T>] {
                &self.groups
            }

            pub fn iter(&self) -> std::slice::Iter<'_, Group<T>> {
                self.groups.iter()
            }

            /// Number of groups.
            pub fn len(&self) -> usize {
                self.groups.len()
            }

            pub fn is_empty(&self) -> bool {
                self.groups.is_empty()
            }

            /// Unit count of every group, in order.
            pub fn sizes(&self) -> Vec<usize> {
                self.groups.iter().map(Group::len).collect()
            }

            /// Total number of units across groups.
            pub fn total_units(&self) -> usize {
                self.groups.iter().map(Group::len).sum()
            }
        }
    };
}

partition! {
    /// Disjoint, exhaustive strata of a population.
    Strata
}

partition! {
    /// Disjoint clusters partitioning a population; drawn as whole units.
    Clusters
}

impl<T> Clusters<T> {
    /// Pick `m` distinct clusters uniformly at random, in draw order.
    pub fn choose<R: Rng + ?Sized>(&self, m: usize, rng: &mut R) -> Result<Vec<&Group<T>>> {
        if self.groups.is_empty() {
            return Err(SamplingError::EmptyPopulation("cluster set"));
        }
        ensure_fits(m, self.groups.len())?;

        let chosen: Vec<&Group<T>> = choose_positions(self.groups.len(), m, rng)
            .into_iter()
            .filter_map(|i| self.groups.get(i))
            .collect();
        debug!(
            clusters = self.groups.len(),
            m,
            selected = ?chosen.iter().map(|g| g.label()).collect::<Vec<_>>(),
            "selected clusters"
        );
        Ok(chosen)
    }
}
