//! One-dimensional tolerance clustering.
//!
//! Coordinates taken along one axis are grouped into lines (columns for the
//! horizontal axis, rows for the vertical axis). Values are visited in
//! ascending order; each one joins an existing cluster whose center lies within
//! the tolerance, or starts a new cluster.
//!
//! A cluster's center is a running approximation: when a value joins, the
//! center moves to the midpoint of the old center and the new value. It is not
//! the centroid of the members, and later members weigh more than earlier ones.
//!
//! Which cluster a value joins depends on the [`ClusterPolicy`]:
//!
//! - [`ClusterPolicy::FirstMatch`] picks the first cluster in creation order
//!   whose center is within tolerance.
//! - [`ClusterPolicy::Nearest`] picks the closest center among those within
//!   tolerance.
//!
//! Because values arrive in ascending order and a center never drops below
//! the value that created its cluster, only the most recently created cluster
//! can still be within reach of a new value. The two policies therefore agree
//! on every input; the choice is kept explicit so callers can state the rule
//! they depend on.

use log::trace;

use crate::config::ClusterPolicy;

/// A group of nearby axis values sharing one line.
#[derive(Debug, Clone, PartialEq)]
pub struct Cluster {
    center: f32,
    members: usize,
}

impl Cluster {
    fn new(value: f32) -> Self {
        Self {
            center: value,
            members: 1,
        }
    }

    /// Folds `value` into the running center.
    fn absorb(&mut self, value: f32) {
        self.center = (self.center + value) / 2.0;
        self.members += 1;
    }

    /// Running center of the values that joined this cluster.
    pub fn center(&self) -> f32 {
        self.center
    }

    /// Number of values that joined this cluster.
    pub fn members(&self) -> usize {
        self.members
    }
}

/// Groups `values` into clusters and returns them sorted by ascending center.
///
/// Every input value belongs to exactly one returned cluster, so the member
/// counts add up to `values.len()`.
///
/// # Arguments
///
/// * `values` - Coordinates along one axis, in any order.
/// * `tolerance` - Maximum distance between a value and a cluster center for
///   the value to join that cluster. Expected to be greater than zero.
/// * `policy` - How a value chooses among several clusters within tolerance.
pub fn clusters(values: &[f32], tolerance: f32, policy: ClusterPolicy) -> Vec<Cluster> {
    let mut sorted = values.to_vec();
    sorted.sort_by(f32::total_cmp);

    let mut clusters: Vec<Cluster> = Vec::new();
    for value in sorted {
        let distance = |center: f32| (center - value).abs();

        let target = match policy {
            ClusterPolicy::FirstMatch => clusters
                .iter_mut()
                .find(|cluster| distance(cluster.center) <= tolerance),
            ClusterPolicy::Nearest => clusters
                .iter_mut()
                .filter(|cluster| distance(cluster.center) <= tolerance)
                .min_by(|a, b| distance(a.center).total_cmp(&distance(b.center))),
        };

        match target {
            Some(cluster) => cluster.absorb(value),
            None => clusters.push(Cluster::new(value)),
        }
    }

    clusters.sort_by(|a, b| a.center.total_cmp(&b.center));
    trace!(count = clusters.len(), tolerance; "Clustered axis values");
    clusters
}

/// Groups `values` and returns only the ascending cluster centers.
pub fn cluster_centers(values: &[f32], tolerance: f32, policy: ClusterPolicy) -> Vec<f32> {
    clusters(values, tolerance, policy)
        .iter()
        .map(Cluster::center)
        .collect()
}
