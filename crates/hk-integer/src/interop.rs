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

//! # Interoperability
//!
//! Trait impls that let an [`Integer`] stand in for its representation in
//! the wider ecosystem:
//!
//! - `bytemuck`: `Integer<T>` is `Pod`, `Zeroable` and a
//!   `TransparentWrapper<T>`, so slices of primitives and slices of
//!   wrappers convert in place without copying.
//! - `num-traits`: `Zero`, `One`, `Bounded` and `Num`, so generic numeric
//!   code written against those bounds accepts wrappers directly.

use crate::{integer::Integer, num::integral::Integral};
use bytemuck::{Pod, TransparentWrapper, Zeroable};
use num_traits::{Bounded, Num, One};
use std::num::ParseIntError;

// SAFETY: `Integer<T>` is `#[repr(transparent)]` over its only field `T`.
unsafe impl<T> TransparentWrapper<T> for Integer<T> where T: Integral {}

// SAFETY: the all-zero bit pattern of every primitive integer is zero.
unsafe impl<T> Zeroable for Integer<T> where T: Integral {}

// SAFETY: transparent over a `Pod` primitive, so there is no padding and
// every bit pattern is a valid value.
unsafe impl<T> Pod for Integer<T> where T: Integral {}

impl<T> Integer<T>
where
    T: Integral,
{
    /// Views a slice of primitives as a slice of wrappers, without copying.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use hk_integer::Integer;
    /// let raw = [1u16, 2, 3];
    /// let wrapped = Integer::wrap_slice(&raw);
    /// assert_eq!(wrapped[2].get(), 3);
    /// ```
    #[inline(always)]
    pub fn wrap_slice(values: &[T]) -> &[Self] {
        <Self as TransparentWrapper<T>>::wrap_slice(values)
    }

    /// Views a mutable slice of primitives as a mutable slice of wrappers.
    #[inline(always)]
    pub fn wrap_slice_mut(values: &mut [T]) -> &mut [Self] {
        <Self as TransparentWrapper<T>>::wrap_slice_mut(values)
    }

    /// Views a slice of wrappers as a slice of primitives, without copying.
    #[inline(always)]
    pub fn peel_slice(values: &[Self]) -> &[T] {
        <Self as TransparentWrapper<T>>::peel_slice(values)
    }

    /// Views a mutable slice of wrappers as a mutable slice of primitives.
    #[inline(always)]
    pub fn peel_slice_mut(values: &mut [Self]) -> &mut [T] {
        <Self as TransparentWrapper<T>>::peel_slice_mut(values)
    }
}

impl<T> num_traits::Zero for Integer<T>
where
    T: Integral,
{
    #[inline(always)]
    fn zero() -> Self {
        Self::ZERO
    }

    #[inline(always)]
    fn is_zero(&self) -> bool {
        Integer::is_zero(self)
    }
}

impl<T> One for Integer<T>
where
    T: Integral,
{
    #[inline(always)]
    fn one() -> Self {
        Self::ONE
    }
}

impl<T> Bounded for Integer<T>
where
    T: Integral,
{
    #[inline(always)]
    fn min_value() -> Self {
        Self::MIN
    }

    #[inline(always)]
    fn max_value() -> Self {
        Self::MAX
    }
}

impl<T> Num for Integer<T>
where
    T: Integral,
{
    type FromStrRadixErr = ParseIntError;

    fn from_str_radix(str: &str, radix: u32) -> Result<Self, Self::FromStrRadixErr> {
        <T as Num>::from_str_radix(str, radix).map(Self::new)
    }
}
