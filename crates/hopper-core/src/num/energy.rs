// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Energy Numeric Trait
//!
//! Unified floating-point bounds for basin-hopping control components.
//! `EnergyNumeric` collects what the controller needs from the type used for
//! energies, step sizes, temperatures and rescaling factors: IEEE float
//! operations from `num_traits::Float`, conversions from primitive numbers,
//! formatting for status output, and thread-safety markers so a controller can
//! be moved into a worker thread together with its run.
//!
//! `f32` and `f64` satisfy the bound.

use num_traits::{Float, FromPrimitive, ToPrimitive};

/// A trait alias for floating-point types usable as energies in a
/// basin-hopping search.
pub trait EnergyNumeric:
    Float
    + FromPrimitive
    + ToPrimitive
    + std::fmt::Debug
    + std::fmt::Display
    + Default
    + Send
    + Sync
    + 'static
{
    /// Converts the value to `f64` for reporting, yielding NaN if the value
    /// has no `f64` representation.
    #[inline]
    fn to_f64_lossy(self) -> f64 {
        self.to_f64().unwrap_or(f64::NAN)
    }

    /// Converts an `f64` into `Self`, yielding NaN if it cannot be represented.
    #[inline]
    fn from_f64_lossy(value: f64) -> Self {
        <Self as FromPrimitive>::from_f64(value).unwrap_or_else(Self::nan)
    }
}

impl<T> EnergyNumeric for T where
    T: Float
        + FromPrimitive
        + ToPrimitive
        + std::fmt::Debug
        + std::fmt::Display
        + Default
        + Send
        + Sync
        + 'static
{
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roundtrip<F: EnergyNumeric>(value: f64) -> f64 {
        F::from_f64_lossy(value).to_f64_lossy()
    }

    #[test]
    fn test_f64_conversion_is_exact() {
        assert_eq!(roundtrip::<f64>(0.38), 0.38);
        assert_eq!(roundtrip::<f64>(-1.5e10), -1.5e10);
    }

    #[test]
    fn test_f32_conversion_is_close() {
        assert!((roundtrip::<f32>(0.95) - 0.95).abs() < 1e-6);
    }

    #[test]
    fn test_nan_passes_through() {
        assert!(roundtrip::<f64>(f64::NAN).is_nan());
    }
}
