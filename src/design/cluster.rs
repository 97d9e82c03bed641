use rand::Rng;

use super::Design;
use crate::error::Result;
use crate::{Clusters, Sample};

/// One-stage cluster sampling: `m` whole clusters, no subsampling inside them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OneStageCluster {
    pub m: usize,
}

impl OneStageCluster {
    pub fn new(m: usize) -> Self {
        Self { m }
    }

    /// Draw as [`Design::draw`] does, also returning the labels of the chosen
    /// clusters in draw order.
    pub fn draw_labeled<T: Clone, R: Rng + ?Sized>(
        &self,
        clusters: &Clusters<T>,
        rng: &mut R,
    ) -> Result<(Vec<String>, Sample<T>)> {
        let chosen = clusters.choose(self.m, rng)?;
        let labels = chosen.iter().map(|cluster| cluster.label().to_string()).collect();
        let sample = chosen
            .into_iter()
            .flat_map(|cluster| cluster.units().iter().cloned())
            .collect();
        Ok((labels, sample))
    }
}

impl<T: Clone> Design<Clusters<T>> for OneStageCluster {
    type Unit = T;

    fn draw<R: Rng + ?Sized>(&self, clusters: &Clusters<T>, rng: &mut R) -> Result<Sample<T>> {
        self.draw_labeled(clusters, rng).map(|(_, sample)| sample)
    }
}

/// Every unit of `m` clusters chosen uniformly without replacement.
pub fn cluster_sample<T: Clone, R: Rng + ?Sized>(
    clusters: &Clusters<T>,
    m: usize,
    rng: &mut R,
) -> Result<Sample<T>> {
    OneStageCluster::new(m).draw(clusters, rng)
}
