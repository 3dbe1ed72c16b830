//! Kernel traits and L_p metrics for machine-learning algorithms
//!
//! This facade re-exports the workspace crates:
//!
//! - [`mlkern_core`]: errors, numeric element types and the `Kernel` contract
//! - [`mlkern_traits`]: the compile-time kernel trait registry
//! - [`mlkern_metric`]: the generalized L_p metric and its named forms
//!
//! # Example
//!
//! ```rust
//! use mlkern::prelude::*;
//!
//! // Registry lookups are constants
//! const GAUSSIAN_NORMALIZED: bool = is_normalized!(GaussianKernel);
//! assert!(GAUSSIAN_NORMALIZED);
//! assert!(!is_normalized!(EuclideanDistance));
//!
//! // Metrics are evaluated directly on slices
//! let d = EuclideanDistance::evaluate(&[0.0, 0.0], &[3.0, 4.0]).unwrap();
//! assert_eq!(d, 5.0);
//! ```

pub use mlkern_core;
pub use mlkern_metric;
pub use mlkern_traits;

pub use mlkern_core::{Error, Kernel, Numeric, Result};
pub use mlkern_metric::{
    evaluate_batch, EuclideanDistance, LMetric, ManhattanDistance, MetricConfig,
    SquaredEuclideanDistance,
};
pub use mlkern_traits::{is_normalized, uses_squared_distance, KernelProperties, KernelTraits};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use mlkern_core::prelude::*;
    pub use mlkern_metric::prelude::*;
    pub use mlkern_traits::prelude::*;
}
