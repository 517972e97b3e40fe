//! Configuration types for grid reconstruction.
//!
//! [`TransposeConfig`] implements [`serde::Deserialize`] so it can be embedded
//! in a front end's configuration file. Every field has a default.
//!
//! # Example
//!
//! ```
//! # use regrid::config::{Anchor, ClusterPolicy, TransposeConfig};
//! let config = TransposeConfig::default();
//! assert_eq!(config.horizontal_tolerance(), 8.0);
//! assert_eq!(config.cluster_policy(), ClusterPolicy::FirstMatch);
//! assert_eq!(config.anchor(), Anchor::MinCenters);
//! ```

use serde::Deserialize;

use crate::{error::TransposeError, grid::Axis};

/// Default snap tolerance for both axes, in document units.
pub const DEFAULT_TOLERANCE: f32 = 8.0;

/// How a coordinate picks the cluster it joins.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ClusterPolicy {
    /// Join the first cluster, in creation order, whose center is within
    /// tolerance. Results can depend on how values are spaced.
    #[default]
    FirstMatch,
    /// Join the cluster whose center is closest, among those within tolerance.
    Nearest,
}

/// Where the transposed grid is anchored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Anchor {
    /// The smallest column center and the smallest row center of the
    /// original arrangement.
    #[default]
    MinCenters,
    /// The smallest column center and the topmost (largest) row center, so the
    /// visual top-left corner stays in place.
    TopLeft,
}

/// Tunables for clustering and placement.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TransposeConfig {
    /// Snap tolerance used when clustering left edges into columns.
    #[serde(alias = "horizontalTolerance")]
    horizontal_tolerance: f32,

    /// Snap tolerance used when clustering top edges into rows.
    #[serde(alias = "verticalTolerance")]
    vertical_tolerance: f32,

    #[serde(alias = "clusterPolicy")]
    cluster_policy: ClusterPolicy,

    anchor: Anchor,
}

impl Default for TransposeConfig {
    fn default() -> Self {
        Self {
            horizontal_tolerance: DEFAULT_TOLERANCE,
            vertical_tolerance: DEFAULT_TOLERANCE,
            cluster_policy: ClusterPolicy::default(),
            anchor: Anchor::default(),
        }
    }
}

impl TransposeConfig {
    /// Creates a configuration with the given tolerances and default policies.
    ///
    /// # Arguments
    ///
    /// * `horizontal_tolerance` - Snap tolerance for columns.
    /// * `vertical_tolerance` - Snap tolerance for rows.
    pub fn new(horizontal_tolerance: f32, vertical_tolerance: f32) -> Self {
        Self {
            horizontal_tolerance,
            vertical_tolerance,
            ..Self::default()
        }
    }

    /// Sets the clustering policy (builder style).
    pub fn with_cluster_policy(mut self, policy: ClusterPolicy) -> Self {
        self.cluster_policy = policy;
        self
    }

    /// Sets the anchor (builder style).
    pub fn with_anchor(mut self, anchor: Anchor) -> Self {
        self.anchor = anchor;
        self
    }

    pub fn horizontal_tolerance(&self) -> f32 {
        self.horizontal_tolerance
    }

    pub fn vertical_tolerance(&self) -> f32 {
        self.vertical_tolerance
    }

    /// Returns the tolerance for the given axis.
    pub fn tolerance(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.horizontal_tolerance,
            Axis::Vertical => self.vertical_tolerance,
        }
    }

    pub fn cluster_policy(&self) -> ClusterPolicy {
        self.cluster_policy
    }

    pub fn anchor(&self) -> Anchor {
        self.anchor
    }

    /// Checks that both tolerances are usable.
    ///
    /// # Errors
    ///
    /// Returns [`TransposeError::InvalidTolerance`] for the first axis whose
    /// tolerance is not a finite number greater than zero.
    pub fn validate(&self) -> Result<(), TransposeError> {
        for axis in [Axis::Horizontal, Axis::Vertical] {
            let value = self.tolerance(axis);
            if !value.is_finite() || value <= 0.0 {
                return Err(TransposeError::InvalidTolerance { axis, value });
            }
        }
        Ok(())
    }
}
