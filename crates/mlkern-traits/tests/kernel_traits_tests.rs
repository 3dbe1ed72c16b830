//! Tests for the kernel trait registry
//!
//! Every value here is known at compile time, so most of this file checks
//! that the queries still compile and react as expected. The `const`
//! assertions fail the build rather than the test run.

use mlkern_traits::kernels::*;
use mlkern_traits::{
    is_normalized, kernel_properties, uses_squared_distance, KernelProperties, KernelTraits,
};

// Registry answers must be usable in constant contexts.
const _: () = assert!(!is_normalized!(i32));
const _: () = assert!(is_normalized!(GaussianKernel));
const _: () = assert!(uses_squared_distance!(EpanechnikovKernel));
const _: () = assert!(!is_normalized::<LinearKernel>());

#[test]
fn test_unrelated_types_are_not_normalized() {
    // If the type is not a kernel at all, it gets the default value
    assert!(!is_normalized!(i32));
    assert!(!is_normalized!(f64));
    assert!(!is_normalized!(String));
    assert!(!is_normalized!(&'static str));
    assert!(!is_normalized!(Vec<f64>));
    assert!(!is_normalized!(()));
}

#[test]
fn test_normalized_kernels() {
    assert!(is_normalized!(CosineDistance));
    assert!(is_normalized!(EpanechnikovKernel));
    assert!(is_normalized!(GaussianKernel));
    assert!(is_normalized!(LaplacianKernel));
    assert!(is_normalized!(SphericalKernel));
    assert!(is_normalized!(TriangularKernel));
}

#[test]
fn test_unnormalized_kernels() {
    assert!(!is_normalized!(LinearKernel));
    assert!(!is_normalized!(PolynomialKernel));
    assert!(!is_normalized!(PSpectrumStringKernel));
}

#[test]
fn test_unregistered_kernel_gets_default_record() {
    assert!(!is_normalized!(HyperbolicTangentKernel));
    assert!(!uses_squared_distance!(HyperbolicTangentKernel));
    assert_eq!(
        kernel_properties!(HyperbolicTangentKernel),
        KernelProperties::DEFAULT
    );
}

#[test]
fn test_bound_and_macro_queries_agree() {
    fn via_bound<K: KernelTraits>() -> KernelProperties {
        KernelProperties::of::<K>()
    }

    assert_eq!(via_bound::<CosineDistance>(), kernel_properties!(CosineDistance));
    assert_eq!(via_bound::<GaussianKernel>(), kernel_properties!(GaussianKernel));
    assert_eq!(via_bound::<LaplacianKernel>(), kernel_properties!(LaplacianKernel));
    assert_eq!(via_bound::<PolynomialKernel>(), kernel_properties!(PolynomialKernel));
}

#[test]
fn test_squared_distance_property_is_independent() {
    // Normalized kernels do not all use squared distances
    assert!(uses_squared_distance!(GaussianKernel));
    assert!(uses_squared_distance!(EpanechnikovKernel));
    assert!(!uses_squared_distance!(LaplacianKernel));
    assert!(!uses_squared_distance!(TriangularKernel));
    assert!(!uses_squared_distance!(SphericalKernel));
    assert!(!uses_squared_distance!(CosineDistance));
    assert!(!uses_squared_distance!(LinearKernel));
    assert!(!uses_squared_distance!(u64));
}

#[test]
fn test_downstream_registration() {
    // A kernel defined outside the workspace registers the same way
    struct TruncatedCauchy;

    impl KernelTraits for TruncatedCauchy {
        const IS_NORMALIZED: bool = true;
    }

    assert!(is_normalized!(TruncatedCauchy));
    assert!(!uses_squared_distance!(TruncatedCauchy));
    assert_eq!(
        kernel_properties!(TruncatedCauchy),
        KernelProperties {
            is_normalized: true,
            uses_squared_distance: false,
        }
    );
}

#[test]
fn test_algorithm_branching_on_registry() {
    // Shape of the callers: skip the normalization constant when possible
    fn self_kernel_sum<K: KernelTraits>(n: usize, diagonal: impl Fn(usize) -> f64) -> f64 {
        if is_normalized::<K>() {
            n as f64
        } else {
            (0..n).map(diagonal).sum()
        }
    }

    assert_eq!(self_kernel_sum::<GaussianKernel>(4, |_| unreachable!()), 4.0);
    assert_eq!(self_kernel_sum::<LinearKernel>(3, |i| i as f64), 3.0);
}
