//! One query against many reference points
//!
//! Kernels are pure, so references can be scored independently. With the
//! `parallel` feature the work is split across the rayon thread pool;
//! otherwise it runs sequentially on the calling thread.

use mlkern_core::{Kernel, Numeric, Result};
use tracing::{debug, instrument};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Evaluate `kernel` between `query` and every reference point, in order
///
/// Fails if any reference differs in dimension from the query. In parallel
/// mode the reported mismatch is one of the offending references, not
/// necessarily the first.
///
/// ```rust
/// use mlkern_metric::{evaluate_batch, ManhattanDistance};
///
/// let references = vec![vec![1.0, 1.0], vec![2.0, 0.0], vec![0.0, 0.0]];
/// let distances = evaluate_batch(&ManhattanDistance::new(), &[0.0, 0.0], &references).unwrap();
/// assert_eq!(distances, vec![2.0, 2.0, 0.0]);
/// ```
#[instrument(skip_all, fields(kernel = kernel.name(), references = references.len()))]
pub fn evaluate_batch<T, K, R>(kernel: &K, query: &[T], references: &[R]) -> Result<Vec<f64>>
where
    T: Numeric,
    K: Kernel<T>,
    R: AsRef<[T]> + Sync,
{
    debug!(dimension = query.len(), "evaluating query against reference set");

    #[cfg(feature = "parallel")]
    let distances = references
        .par_iter()
        .map(|reference| kernel.evaluate(query, reference.as_ref()))
        .collect::<Result<Vec<f64>>>();

    #[cfg(not(feature = "parallel"))]
    let distances = references
        .iter()
        .map(|reference| kernel.evaluate(query, reference.as_ref()))
        .collect::<Result<Vec<f64>>>();

    if let Err(e) = &distances {
        debug!(error = %e, "batch evaluation failed");
    }
    distances
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{EuclideanDistance, LMetric, MetricConfig, SquaredEuclideanDistance};
    use mlkern_core::Error;

    #[test]
    fn test_preserves_reference_order() {
        let references = vec![vec![3.0, 4.0], vec![0.0, 0.0], vec![6.0, 8.0]];
        let distances =
            evaluate_batch(&EuclideanDistance::new(), &[0.0, 0.0], &references).unwrap();
        assert_eq!(distances, vec![5.0, 0.0, 10.0]);
    }

    #[test]
    fn test_accepts_borrowed_references() {
        let a = [1.0f32, 2.0];
        let b = [2.0f32, 4.0];
        let references: [&[f32]; 2] = [&a, &b];
        let distances =
            evaluate_batch(&SquaredEuclideanDistance::new(), &[1.0f32, 2.0], &references).unwrap();
        assert_eq!(distances, vec![0.0, 5.0]);
    }

    #[test]
    fn test_runtime_configured_kernel() {
        let references = vec![vec![1i32], vec![-2]];
        let config = MetricConfig::new(3, false).unwrap();
        let distances = evaluate_batch(&config, &[1i32], &references).unwrap();
        assert_eq!(distances, vec![0.0, 27.0]);
        assert_eq!(
            distances,
            evaluate_batch(&LMetric::<3>::new(), &[1i32], &references).unwrap()
        );
    }

    #[test]
    fn test_empty_reference_set() {
        let references: Vec<Vec<f64>> = Vec::new();
        let distances = evaluate_batch(&EuclideanDistance::new(), &[1.0], &references).unwrap();
        assert!(distances.is_empty());
    }

    #[test]
    fn test_mismatched_reference_fails() {
        let references = vec![vec![1.0, 2.0], vec![1.0], vec![3.0, 4.0]];
        let err = evaluate_batch(&EuclideanDistance::new(), &[0.0, 0.0], &references).unwrap_err();
        assert!(matches!(
            err,
            Error::DimensionMismatch {
                expected: 2,
                actual: 1
            }
        ));
    }
}
