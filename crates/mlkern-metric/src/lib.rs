//! Generalized L_p metrics
//!
//! This crate provides the L_p distance used as the default kernel by
//! nearest-neighbor search, clustering and density estimation.
//!
//! # Features
//!
//! - **Compile-time configuration**: `LMetric<P, ROOT>` fixes the power and
//!   the root decision in the type, so each metric compiles to its own loop
//! - **Pre-root form**: `ROOT = false` skips the final root; cheaper and
//!   order-preserving, which is all ranking needs
//! - **Named metrics**: [`ManhattanDistance`], [`SquaredEuclideanDistance`],
//!   [`EuclideanDistance`]
//! - **Runtime descriptor**: [`MetricConfig`] for metric choices read from
//!   configuration data
//! - **Batch evaluation**: [`evaluate_batch`], parallel with the `parallel`
//!   feature
//!
//! # Example
//!
//! ```rust
//! use mlkern_metric::{EuclideanDistance, SquaredEuclideanDistance};
//! use mlkern_metric::Error;
//!
//! let a = [0.0, 0.0];
//! let b = [3.0, 4.0];
//!
//! assert_eq!(SquaredEuclideanDistance::evaluate(&a, &b).unwrap(), 25.0);
//! assert_eq!(EuclideanDistance::evaluate(&a, &b).unwrap(), 5.0);
//!
//! // Points of different dimension are rejected
//! assert!(matches!(
//!     EuclideanDistance::evaluate(&a, &[1.0]),
//!     Err(Error::DimensionMismatch { expected: 2, actual: 1 })
//! ));
//! ```

pub mod batch;
pub mod config;
pub mod lmetric;

// Re-export main types
pub use batch::evaluate_batch;
pub use config::MetricConfig;
pub use lmetric::{
    euclidean, manhattan, squared_euclidean, EuclideanDistance, LMetric, ManhattanDistance,
    SquaredEuclideanDistance,
};

// Re-export from mlkern-core
pub use mlkern_core::{Error, Kernel, Result};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        euclidean, evaluate_batch, manhattan, squared_euclidean, Error, EuclideanDistance,
        Kernel, LMetric, ManhattanDistance, MetricConfig, Result, SquaredEuclideanDistance,
    };
}
