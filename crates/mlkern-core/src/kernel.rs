//! The two-vector evaluation contract
//!
//! Metrics in this workspace and kernels implemented elsewhere share one
//! calling convention: borrow two equal-length slices, return an `f64`.
//! Algorithms take the kernel as a type parameter, so the call is resolved
//! at compile time.

use crate::{Error, Numeric, Result};

/// Base trait for anything that scores a pair of points
///
/// Implementations must be pure: the result depends only on `self` and the
/// two operands, and neither operand is modified. That makes every
/// implementation safe to share across threads without locking.
///
/// # Example
///
/// ```rust
/// use mlkern_core::{ensure_same_dimension, Kernel, Numeric, Result};
///
/// #[derive(Clone, Copy)]
/// struct DotProduct;
///
/// impl<T: Numeric> Kernel<T> for DotProduct {
///     fn evaluate(&self, a: &[T], b: &[T]) -> Result<f64> {
///         ensure_same_dimension(a, b)?;
///         Ok(a.iter().zip(b).map(|(x, y)| x.to_f64() * y.to_f64()).sum())
///     }
/// }
///
/// assert_eq!(DotProduct.evaluate(&[1.0, 2.0], &[3.0, 4.0]).unwrap(), 11.0);
/// assert!(DotProduct.evaluate(&[1.0, 2.0], &[3.0]).is_err());
/// ```
pub trait Kernel<T: Numeric = f64>: Clone + Send + Sync {
    /// Evaluate the kernel on two points of equal dimension
    fn evaluate(&self, a: &[T], b: &[T]) -> Result<f64>;

    /// Name of this kernel for debugging/logging
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

/// Check the precondition shared by every two-vector evaluation
///
/// `expected` in the returned error is the length of `a`.
#[inline]
pub fn ensure_same_dimension<T>(a: &[T], b: &[T]) -> Result<()> {
    if a.len() != b.len() {
        return Err(Error::dimension_mismatch(a.len(), b.len()));
    }
    Ok(())
}
