//! Core traits and types for kernels and distance metrics
//!
//! This crate provides the pieces every other mlkern crate builds on:
//!
//! 1. **Errors** - A single error enum and `Result` alias
//! 2. **Numeric** - The element types a kernel may be evaluated over
//! 3. **Kernel** - The two-vector evaluation contract shared by metrics and
//!    externally implemented kernels
//!
//! # Design Philosophy
//!
//! - **Zero-Cost Abstractions**: Kernel choice is a type parameter, never a
//!   trait object
//! - **Fail Fast**: Mismatched operands are reported, never truncated
//! - **No Hidden Allocations**: Evaluation works directly on borrowed slices
//!
//! # Example
//!
//! ```rust
//! use mlkern_core::{ensure_same_dimension, Error};
//!
//! assert!(ensure_same_dimension(&[1.0, 2.0], &[3.0, 4.0]).is_ok());
//!
//! match ensure_same_dimension(&[1.0, 2.0], &[3.0]) {
//!     Err(Error::DimensionMismatch { expected, actual }) => {
//!         assert_eq!((expected, actual), (2, 1));
//!     }
//!     _ => unreachable!(),
//! }
//! ```

pub mod error;
pub mod kernel;
pub mod numeric;

// Re-export core types
pub use error::{Error, Result};
pub use kernel::{ensure_same_dimension, Kernel};
pub use numeric::Numeric;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{ensure_same_dimension, Error, Kernel, Numeric, Result};
}
