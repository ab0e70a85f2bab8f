//! Totally ordered element domains
//!
//! [`MinHeap`](crate::MinHeap) requires `T: Ord`. Integers and strings already
//! qualify; `f64` does not, because NaN compares unequal to everything. This
//! module provides:
//!
//! - [`FiniteF64`]: an `f64` wrapper that only admits finite values and is `Ord`
//! - [`Predecessor`]: "a value strictly smaller than this one", for domains
//!   where such a value can be computed

use std::cmp::Ordering;
use std::fmt;

use crate::traits::IncomparableElementError;

/// A finite `f64` with a total order
///
/// NaN and the infinities are rejected on construction, so every pair of
/// `FiniteF64` values compares consistently and `-0.0 == 0.0`.
///
/// # Example
///
/// ```rust
/// use rust_min_heap::ordered::FiniteF64;
///
/// let x = FiniteF64::new(1.5).unwrap();
/// assert!(FiniteF64::new(f64::NAN).is_err());
/// assert!(x > FiniteF64::new(-2.0).unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(transparent)]
pub struct FiniteF64(f64);

impl FiniteF64 {
    /// Wraps `value`, failing if it is NaN or infinite
    pub fn new(value: f64) -> Result<Self, IncomparableElementError> {
        if value.is_finite() {
            Ok(Self(value))
        } else {
            Err(IncomparableElementError { value })
        }
    }

    /// Returns the wrapped value
    #[inline]
    pub fn get(self) -> f64 {
        self.0
    }
}

impl Eq for FiniteF64 {}

impl PartialOrd for FiniteF64 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FiniteF64 {
    fn cmp(&self, other: &Self) -> Ordering {
        // Both sides are finite, so partial_cmp always answers
        self.0.partial_cmp(&other.0).unwrap_or(Ordering::Equal)
    }
}

impl TryFrom<f64> for FiniteF64 {
    type Error = IncomparableElementError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<FiniteF64> for f64 {
    fn from(value: FiniteF64) -> Self {
        value.0
    }
}

impl fmt::Display for FiniteF64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Element domains that can produce a strictly smaller value
///
/// `predecessor` returns `self - 1` when that value exists and is strictly
/// smaller, and `None` otherwise.
pub trait Predecessor: Sized {
    /// A value strictly smaller than `self`, if one is representable
    fn predecessor(&self) -> Option<Self>;
}

macro_rules! impl_predecessor_int {
    ($($t:ty),*) => {
        $(
            impl Predecessor for $t {
                #[inline]
                fn predecessor(&self) -> Option<Self> {
                    self.checked_sub(1)
                }
            }
        )*
    };
}

impl_predecessor_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl Predecessor for FiniteF64 {
    fn predecessor(&self) -> Option<Self> {
        // Large magnitudes absorb the subtraction entirely
        let candidate = FiniteF64::new(self.0 - 1.0).ok()?;
        (candidate < *self).then_some(candidate)
    }
}
