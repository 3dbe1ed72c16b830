//! The generalized L_p metric
//!
//! For two points `a` and `b` of dimension `n`:
//!
//! ```text
//! d(a, b) = ( sum_i |a_i - b_i|^p )^(1/p)
//! ```
//!
//! The root is optional. Without it the result is the power sum, which is
//! cheaper, monotonic in the true distance, and enough for ranking. Both the
//! power and the root decision are const generic parameters, so each
//! configuration compiles to its own specialized loop.

use crate::config::MetricConfig;
use mlkern_core::{ensure_same_dimension, Kernel, Numeric, Result};
use mlkern_traits::KernelTraits;

/// The L_p metric for integer `P`, optionally taking the `P`th root
///
/// `P` must be at least 1; `LMetric<0>` fails to compile when evaluated.
///
/// # Example
///
/// ```rust
/// use mlkern_metric::{EuclideanDistance, LMetric, ManhattanDistance};
///
/// let a = [0.0, 0.0];
/// let b = [3.0, 4.0];
///
/// assert_eq!(ManhattanDistance::evaluate(&a, &b).unwrap(), 7.0);
/// assert_eq!(EuclideanDistance::evaluate(&a, &b).unwrap(), 5.0);
/// assert_eq!(LMetric::<3>::evaluate(&[1.0], &[-2.0]).unwrap(), 27.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LMetric<const P: u32, const ROOT: bool = false>;

impl<const P: u32, const ROOT: bool> LMetric<P, ROOT> {
    /// Power of the metric; 1 gives the Manhattan distance
    pub const POWER: u32 = P;

    /// Whether the `P`th root of the power sum is returned
    pub const TAKE_ROOT: bool = ROOT;

    /// The runtime descriptor of this configuration
    pub const CONFIG: MetricConfig = MetricConfig {
        power: P,
        take_root: ROOT,
    };

    const VALID_POWER: () = assert!(
        P >= 1 && P <= i32::MAX as u32,
        "LMetric power must be in [1, i32::MAX]"
    );

    pub const fn new() -> Self {
        Self
    }

    /// Compute the distance between two points
    ///
    /// Returns `Error::DimensionMismatch` when `a` and `b` differ in length.
    #[inline]
    pub fn evaluate<T: Numeric>(a: &[T], b: &[T]) -> Result<f64> {
        #[allow(clippy::let_unit_value)]
        let () = Self::VALID_POWER;
        ensure_same_dimension(a, b)?;
        Ok(finish(power_sum(a, b, P), P, ROOT))
    }
}

/// `sum_i |a_i - b_i|^power`, operands already checked for equal length
///
/// Differences are formed in f64 so unsigned and wide integer elements
/// neither wrap nor overflow.
#[inline(always)]
pub(crate) fn power_sum<T: Numeric>(a: &[T], b: &[T], power: u32) -> f64 {
    debug_assert_eq!(a.len(), b.len());
    a.iter().zip(b).fold(0.0, |sum, (x, y)| {
        let diff = (x.to_f64() - y.to_f64()).abs();
        sum + match power {
            1 => diff,
            2 => diff * diff,
            p => diff.powi(p as i32),
        }
    })
}

/// Apply the optional root to a power sum
#[inline(always)]
pub(crate) fn finish(sum: f64, power: u32, take_root: bool) -> f64 {
    if !take_root {
        return sum;
    }
    match power {
        1 => sum,
        2 => sum.sqrt(),
        p => sum.powf(1.0 / p as f64),
    }
}

impl<T: Numeric, const P: u32, const ROOT: bool> Kernel<T> for LMetric<P, ROOT> {
    #[inline]
    fn evaluate(&self, a: &[T], b: &[T]) -> Result<f64> {
        LMetric::<P, ROOT>::evaluate(a, b)
    }

    fn name(&self) -> &'static str {
        Self::CONFIG.name()
    }
}

// Metrics are not normalized kernels; they take the default record.
impl<const P: u32, const ROOT: bool> KernelTraits for LMetric<P, ROOT> {}

// Convenience typedefs.

/// The Manhattan (L1) distance
pub type ManhattanDistance = LMetric<1, false>;

/// The squared Euclidean (L2) distance
pub type SquaredEuclideanDistance = LMetric<2, false>;

/// The Euclidean (L2) distance
pub type EuclideanDistance = LMetric<2, true>;

/// Manhattan distance between two points
pub fn manhattan<T: Numeric>(a: &[T], b: &[T]) -> Result<f64> {
    ManhattanDistance::evaluate(a, b)
}

/// Squared Euclidean distance between two points
pub fn squared_euclidean<T: Numeric>(a: &[T], b: &[T]) -> Result<f64> {
    SquaredEuclideanDistance::evaluate(a, b)
}

/// Euclidean distance between two points
pub fn euclidean<T: Numeric>(a: &[T], b: &[T]) -> Result<f64> {
    EuclideanDistance::evaluate(a, b)
}
