//! Runtime description of an L_p metric
//!
//! Algorithms normally pick their metric as a type parameter. When the
//! choice comes from configuration data instead, `MetricConfig` carries it.
//! Evaluating through a `MetricConfig` runs the same accumulation as
//! [`LMetric`](crate::LMetric) but branches on the power and the root per
//! element and per call, where the const generic version has both folded
//! away. Prefer converting to a concrete `LMetric` type on hot paths.

use crate::lmetric::{finish, power_sum};
use mlkern_core::{ensure_same_dimension, Error, Kernel, Numeric, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Power and root selection of an L_p metric
///
/// ```rust
/// use mlkern_metric::{EuclideanDistance, MetricConfig};
///
/// let config: MetricConfig = MetricConfig::new(2, true).unwrap();
/// assert_eq!(config, EuclideanDistance::CONFIG);
/// assert_eq!(config.name(), "euclidean");
/// assert_eq!(config.evaluate(&[0.0, 0.0], &[3.0, 4.0]).unwrap(), 5.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MetricConfig {
    /// Power of the metric, at least 1
    pub power: u32,

    /// Whether the `power`th root of the power sum is returned
    #[serde(default)]
    pub take_root: bool,
}

impl MetricConfig {
    /// Create a validated configuration
    pub fn new(power: u32, take_root: bool) -> Result<Self> {
        let config = Self { power, take_root };
        config.validate()?;
        Ok(config)
    }

    /// The Manhattan (L1) distance
    pub const fn manhattan() -> Self {
        Self {
            power: 1,
            take_root: false,
        }
    }

    /// The squared Euclidean (L2) distance
    pub const fn squared_euclidean() -> Self {
        Self {
            power: 2,
            take_root: false,
        }
    }

    /// The Euclidean (L2) distance
    pub const fn euclidean() -> Self {
        Self {
            power: 2,
            take_root: true,
        }
    }

    /// Check that the power is in `[1, i32::MAX]`
    pub fn validate(&self) -> Result<()> {
        if self.power == 0 || self.power > i32::MAX as u32 {
            debug!(power = self.power, "rejecting metric configuration");
            return Err(Error::invalid_power(self.power));
        }
        Ok(())
    }

    /// Stable short name, used for logging and by `Kernel::name`
    pub const fn name(&self) -> &'static str {
        match (self.power, self.take_root) {
            // The root of an L1 sum is the sum itself
            (1, _) => "manhattan",
            (2, false) => "squared_euclidean",
            (2, true) => "euclidean",
            (_, false) => "lp_power_sum",
            (_, true) => "lp",
        }
    }

    /// Compute the distance between two points with this configuration
    pub fn evaluate<T: Numeric>(&self, a: &[T], b: &[T]) -> Result<f64> {
        self.validate()?;
        ensure_same_dimension(a, b)?;
        Ok(finish(power_sum(a, b, self.power), self.power, self.take_root))
    }
}

impl Default for MetricConfig {
    fn default() -> Self {
        Self::squared_euclidean()
    }
}

impl<T: Numeric> Kernel<T> for MetricConfig {
    fn evaluate(&self, a: &[T], b: &[T]) -> Result<f64> {
        MetricConfig::evaluate(self, a, b)
    }

    fn name(&self) -> &'static str {
        MetricConfig::name(self)
    }
}
