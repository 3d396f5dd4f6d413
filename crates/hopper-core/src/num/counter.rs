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

//! By-value saturating arithmetic for trial counters.
//!
//! Counters in a long basin-hopping run are incremented once per trial move.
//! They never wrap: once a counter reaches the bound of its type it stays
//! there. The traits mirror the inherent `saturating_*` methods on unsigned
//! primitives so that generic statistics code can use one spelling.

use core::ops::{Add, Sub};

macro_rules! saturating_counter_impl {
    ($trait_name:ident, $method:ident, $src_method:ident, $($t:ty),+) => {
        $(
            impl $trait_name for $t {
                #[inline(always)]
                fn $method(self, v: Self) -> Self {
                    <$t>::$src_method(self, v)
                }
            }
        )+
    };
}

/// Saturating addition by value.
///
/// # Examples
///
/// ```rust
/// # use hopper_core::num::counter::SaturatingAddVal;
///
/// let calls: u64 = u64::MAX - 1;
/// assert_eq!(calls.saturating_add_val(5), u64::MAX);
/// ```
pub trait SaturatingAddVal: Sized + Add<Self, Output = Self> {
    /// Adds `v`, clamping at the upper bound of the type.
    fn saturating_add_val(self, v: Self) -> Self;
}

/// Saturating subtraction by value.
///
/// # Examples
///
/// ```rust
/// # use hopper_core::num::counter::SaturatingSubVal;
///
/// let attempts: u32 = 3;
/// assert_eq!(attempts.saturating_sub_val(7), 0);
/// ```
pub trait SaturatingSubVal: Sized + Sub<Self, Output = Self> {
    /// Subtracts `v`, clamping at the lower bound of the type.
    fn saturating_sub_val(self, v: Self) -> Self;
}

saturating_counter_impl!(
    SaturatingAddVal,
    saturating_add_val,
    saturating_add,
    u8,
    u16,
    u32,
    u64,
    usize
);
saturating_counter_impl!(
    SaturatingSubVal,
    saturating_sub_val,
    saturating_sub,
    u8,
    u16,
    u32,
    u64,
    usize
);
