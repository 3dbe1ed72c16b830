//! Numeric element types accepted by kernels and metrics
//!
//! Kernels are evaluated in double precision regardless of the element type.
//! `Numeric` only says how to get an element there.
//!
//! # Design Philosophy
//!
//! - **Pure type constraints**: No computation lives on this trait
//! - **Type safety**: Both operands of an evaluation share one element type
//! - **Extensible**: Adding an element type is one macro line

use bytemuck::Pod;
use num_traits::Num;
use std::fmt::Debug;

/// Base trait for element types of the vectors a kernel is evaluated over
pub trait Numeric: Pod + Num + Copy + PartialOrd + Debug + Send + Sync {
    /// Convert to f64, the precision every evaluation is carried out in
    fn to_f64(&self) -> f64;

    /// Check if value is finite (always true for integers)
    fn is_finite(&self) -> bool;
}

macro_rules! impl_numeric_float {
    ($($t:ty),*) => {
        $(
            impl Numeric for $t {
                #[inline(always)]
                fn to_f64(&self) -> f64 {
                    *self as f64
                }

                #[inline(always)]
                fn is_finite(&self) -> bool {
                    <$t>::is_finite(*self)
                }
            }
        )*
    };
}

macro_rules! impl_numeric_int {
    ($($t:ty),*) => {
        $(
            impl Numeric for $t {
                #[inline(always)]
                fn to_f64(&self) -> f64 {
                    *self as f64
                }

                #[inline(always)]
                fn is_finite(&self) -> bool {
                    true
                }
            }
        )*
    };
}

impl_numeric_float!(f64, f32);
impl_numeric_int!(i32, u32, i64, u64);

// =============================================================================
// Tests
// =============================================================================
