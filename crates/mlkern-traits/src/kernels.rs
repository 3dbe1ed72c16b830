//! Kernel type identities and their registrations
//!
//! These types carry their hyper-parameters and nothing else. Evaluation
//! lives with the algorithms that consume them; the registry only needs to
//! know which type is which.

use crate::KernelTraits;
use mlkern_core::{Error, Result};

fn positive(name: &str, value: f64) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(Error::non_positive(name, value))
    }
}

/// Declare a kernel whose only hyper-parameter is a bandwidth
macro_rules! bandwidth_kernel {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq)]
        pub struct $name {
            bandwidth: f64,
        }

        impl $name {
            /// Create the kernel with the given bandwidth
            pub fn new(bandwidth: f64) -> Result<Self> {
                Ok(Self {
                    bandwidth: positive("bandwidth", bandwidth)?,
                })
            }

            pub fn bandwidth(&self) -> f64 {
                self.bandwidth
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self { bandwidth: 1.0 }
            }
        }
    };
}

/// Cosine distance, `1 - cos(angle(x, y))`
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CosineDistance;

bandwidth_kernel! {
    /// Epanechnikov kernel, `max(0, 1 - |x - y|^2 / h^2)`
    EpanechnikovKernel
}

bandwidth_kernel! {
    /// Gaussian kernel, `exp(-|x - y|^2 / (2 h^2))`
    GaussianKernel
}

bandwidth_kernel! {
    /// Laplacian kernel, `exp(-|x - y| / h)`
    LaplacianKernel
}

bandwidth_kernel! {
    /// Spherical (uniform ball) kernel, `1` when `|x - y| <= h`
    SphericalKernel
}

bandwidth_kernel! {
    /// Triangular kernel, `max(0, 1 - |x - y| / h)`
    TriangularKernel
}

/// Linear kernel, `x . y`
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LinearKernel;

/// Polynomial kernel, `(x . y + offset)^degree`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolynomialKernel {
    degree: f64,
    offset: f64,
}

impl PolynomialKernel {
    pub fn new(degree: f64, offset: f64) -> Result<Self> {
        if !offset.is_finite() {
            return Err(Error::InvalidParameter(format!(
                "offset must be finite, got {offset}"
            )));
        }
        Ok(Self {
            degree: positive("degree", degree)?,
            offset,
        })
    }

    pub fn degree(&self) -> f64 {
        self.degree
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }
}

impl Default for PolynomialKernel {
    fn default() -> Self {
        Self {
            degree: 2.0,
            offset: 0.0,
        }
    }
}

/// p-spectrum string kernel: counts shared substrings of length `p`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PSpectrumStringKernel {
    p: usize,
}

impl PSpectrumStringKernel {
    pub fn new(p: usize) -> Result<Self> {
        if p == 0 {
            return Err(Error::InvalidParameter(
                "substring length must be at least 1".to_string(),
            ));
        }
        Ok(Self { p })
    }

    /// Substring length
    pub fn p(&self) -> usize {
        self.p
    }
}

impl Default for PSpectrumStringKernel {
    fn default() -> Self {
        Self { p: 5 }
    }
}

/// Hyperbolic tangent kernel, `tanh(scale * (x . y) + offset)`
///
/// Not registered: it resolves to the default record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HyperbolicTangentKernel {
    scale: f64,
    offset: f64,
}

impl HyperbolicTangentKernel {
    pub fn new(scale: f64, offset: f64) -> Result<Self> {
        if !(scale.is_finite() && offset.is_finite()) {
            return Err(Error::InvalidParameter(format!(
                "scale and offset must be finite, got {scale} and {offset}"
            )));
        }
        Ok(Self { scale, offset })
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }
}

impl Default for HyperbolicTangentKernel {
    fn default() -> Self {
        Self {
            scale: 1.0,
            offset: 0.0,
        }
    }
}

// =============================================================================
// Registrations
// =============================================================================

impl KernelTraits for CosineDistance {
    const IS_NORMALIZED: bool = true;
}

impl KernelTraits for EpanechnikovKernel {
    const IS_NORMALIZED: bool = true;
    const USES_SQUARED_DISTANCE: bool = true;
}

impl KernelTraits for GaussianKernel {
    const IS_NORMALIZED: bool = true;
    const USES_SQUARED_DISTANCE: bool = true;
}

impl KernelTraits for LaplacianKernel {
    const IS_NORMALIZED: bool = true;
}

impl KernelTraits for SphericalKernel {
    const IS_NORMALIZED: bool = true;
}

impl KernelTraits for TriangularKernel {
    const IS_NORMALIZED: bool = true;
}

// Stated explicitly even though they match the defaults.

impl KernelTraits for LinearKernel {
    const IS_NORMALIZED: bool = false;
}

impl KernelTraits for PolynomialKernel {
    const IS_NORMALIZED: bool = false;
}

impl KernelTraits for PSpectrumStringKernel {
    const IS_NORMALIZED: bool = false;
}
