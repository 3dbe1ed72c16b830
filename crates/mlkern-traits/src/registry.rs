//! Type-indexed kernel property lookup
//!
//! A kernel registers its properties by implementing [`KernelTraits`] and
//! overriding the associated consts it cares about. Every const has a
//! default in the trait definition, so a registration only names what
//! differs from the conservative record, and adding a property never
//! touches existing registrations.
//!
//! Queries come in two shapes:
//!
//! - [`is_normalized`] and friends are `const fn`s for generic code that
//!   already carries a `K: KernelTraits` bound.
//! - [`is_normalized!`](crate::is_normalized) and friends accept *any*
//!   type, registered or not. They resolve through [`KernelTraitsOf`]:
//!   an inherent const on the lookup type shadows the blanket
//!   [`UnregisteredKernel`] const whenever `K: KernelTraits` holds, and the
//!   blanket default answers otherwise. Both paths are constants.
//!
//! Inside a generic function without a `KernelTraits` bound the macros
//! cannot see a registration and answer with the default record.

use std::marker::PhantomData;

/// Static properties of a kernel type
///
/// # Example
///
/// ```rust
/// use mlkern_traits::{is_normalized, KernelTraits};
///
/// struct Bump;
///
/// impl KernelTraits for Bump {
///     const IS_NORMALIZED: bool = true;
/// }
///
/// const BUMP_NORMALIZED: bool = is_normalized::<Bump>();
/// assert!(BUMP_NORMALIZED);
/// ```
pub trait KernelTraits {
    /// `K(x, x) == 1` for every point `x`
    const IS_NORMALIZED: bool = false;

    /// The kernel is a function of the squared distance between its operands
    const USES_SQUARED_DISTANCE: bool = false;
}

/// The resolved property record of one kernel type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KernelProperties {
    pub is_normalized: bool,
    pub uses_squared_distance: bool,
}

impl KernelProperties {
    /// The record every unregistered type resolves to
    pub const DEFAULT: Self = Self {
        is_normalized: false,
        uses_squared_distance: false,
    };

    /// Collect the registered properties of `K`
    pub const fn of<K: KernelTraits + ?Sized>() -> Self {
        Self {
            is_normalized: K::IS_NORMALIZED,
            uses_squared_distance: K::USES_SQUARED_DISTANCE,
        }
    }
}

impl Default for KernelProperties {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Whether `K` is a normalized kernel
#[inline(always)]
pub const fn is_normalized<K: KernelTraits + ?Sized>() -> bool {
    K::IS_NORMALIZED
}

/// Whether `K` is evaluated on squared distances
#[inline(always)]
pub const fn uses_squared_distance<K: KernelTraits + ?Sized>() -> bool {
    K::USES_SQUARED_DISTANCE
}

/// Lookup type behind the query macros
///
/// Never constructed; only its associated consts are read.
pub struct KernelTraitsOf<K: ?Sized>(PhantomData<K>);

impl<K: ?Sized + KernelTraits> KernelTraitsOf<K> {
    pub const IS_NORMALIZED: bool = K::IS_NORMALIZED;
    pub const USES_SQUARED_DISTANCE: bool = K::USES_SQUARED_DISTANCE;
    pub const PROPERTIES: KernelProperties = KernelProperties::of::<K>();
}

/// Fallback record for types without a [`KernelTraits`] registration
///
/// Must be in scope for the fallback to apply; the query macros import it.
pub trait UnregisteredKernel {
    const IS_NORMALIZED: bool = KernelProperties::DEFAULT.is_normalized;
    const USES_SQUARED_DISTANCE: bool = KernelProperties::DEFAULT.uses_squared_distance;
    const PROPERTIES: KernelProperties = KernelProperties::DEFAULT;
}

impl<K: ?Sized> UnregisteredKernel for KernelTraitsOf<K> {}

/// Whether any type is a normalized kernel, `false` when unregistered
///
/// ```rust
/// use mlkern_traits::{is_normalized, kernels::GaussianKernel};
///
/// const GAUSSIAN: bool = is_normalized!(GaussianKernel);
/// const INTEGER: bool = is_normalized!(i32);
///
/// assert!(GAUSSIAN);
/// assert!(!INTEGER);
/// ```
#[macro_export]
macro_rules! is_normalized {
    ($kernel:ty) => {{
        #[allow(unused_imports)]
        use $crate::registry::UnregisteredKernel as _;
        <$crate::registry::KernelTraitsOf<$kernel>>::IS_NORMALIZED
    }};
}

/// Whether any type is evaluated on squared distances, `false` when unregistered
#[macro_export]
macro_rules! uses_squared_distance {
    ($kernel:ty) => {{
        #[allow(unused_imports)]
        use $crate::registry::UnregisteredKernel as _;
        <$crate::registry::KernelTraitsOf<$kernel>>::USES_SQUARED_DISTANCE
    }};
}

/// The full [`KernelProperties`] record of any type
#[macro_export]
macro_rules! kernel_properties {
    ($kernel:ty) => {{
        #[allow(unused_imports)]
        use $crate::registry::UnregisteredKernel as _;
        <$crate::registry::KernelTraitsOf<$kernel>>::PROPERTIES
    }};
}
