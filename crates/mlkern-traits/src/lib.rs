//! Compile-time kernel traits
//!
//! Algorithms that accept an arbitrary kernel type often need to know a few
//! static facts about it: is `K(x, x)` always one, is it a function of the
//! squared distance. This crate answers those questions per type, at compile
//! time, with a conservative answer for every type that never said anything.
//!
//! # Overview
//!
//! - [`KernelTraits`]: implemented by a kernel to register its properties.
//!   Each property has a default, so registrations only list overrides.
//! - [`KernelProperties`]: the resolved record as a value.
//! - [`is_normalized!`], [`uses_squared_distance!`], [`kernel_properties!`]:
//!   queries that accept any type at all, registered or not.
//! - [`kernels`]: the kernel types this workspace knows about.
//!
//! # Examples
//!
//! ```rust
//! use mlkern_traits::kernels::{CosineDistance, HyperbolicTangentKernel, LinearKernel};
//! use mlkern_traits::{is_normalized, kernel_properties, KernelProperties};
//!
//! assert!(is_normalized!(CosineDistance));
//! assert!(!is_normalized!(LinearKernel));
//!
//! // Unregistered and unrelated types get the default record
//! assert!(!is_normalized!(HyperbolicTangentKernel));
//! assert!(!is_normalized!(String));
//! assert_eq!(kernel_properties!(f64), KernelProperties::DEFAULT);
//! ```
//!
//! Generic code carrying a bound can branch on a constant:
//!
//! ```rust
//! use mlkern_traits::{is_normalized, KernelTraits};
//!
//! fn self_similarity<K: KernelTraits>(computed: f64) -> f64 {
//!     if is_normalized::<K>() {
//!         1.0
//!     } else {
//!         computed
//!     }
//! }
//!
//! use mlkern_traits::kernels::{GaussianKernel, PolynomialKernel};
//! assert_eq!(self_similarity::<GaussianKernel>(0.3), 1.0);
//! assert_eq!(self_similarity::<PolynomialKernel>(0.3), 0.3);
//! ```

pub mod kernels;
pub mod registry;

// Re-exports
pub use registry::{
    is_normalized, uses_squared_distance, KernelProperties, KernelTraits, KernelTraitsOf,
    UnregisteredKernel,
};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::kernels::*;
    pub use crate::{
        is_normalized, kernel_properties, uses_squared_distance, KernelProperties, KernelTraits,
    };
}
