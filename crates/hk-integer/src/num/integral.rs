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

//! # Integral Representations
//!
//! [`Integral`] is the bound every representation of an
//! [`Integer`](crate::integer::Integer) must satisfy. It is sealed: the set
//! of valid representations is exactly the primitive integers from 8 to 64
//! bits plus the pointer-sized ones, and instantiating a wrapper over
//! anything else is rejected at compile time.
//!
//! The bound spells out each native operator and compound assignment with a
//! `Self` right-hand side, so generic code in this crate can forward to the
//! primitive without casts or extra checks.
//!
//! Note: `i128` and `u128` are intentionally excluded.

use crate::num::constants::{PlusOne, Zero};
use num_traits::{Num, PrimInt};
use std::{
    fmt::{Binary, Debug, Display, LowerHex, Octal, UpperHex},
    hash::Hash,
    num::ParseIntError,
    ops::{
        AddAssign, BitAndAssign, BitOrAssign, BitXorAssign, DivAssign, MulAssign, RemAssign, Shl,
        ShlAssign, Shr, ShrAssign, SubAssign,
    },
    str::FromStr,
};

mod sealed {
    pub trait Sealed {}
}

/// A primitive integer type that can be wrapped by an
/// [`Integer`](crate::integer::Integer).
///
/// Implemented for `i8`, `i16`, `i32`, `i64`, `isize`, `u8`, `u16`, `u32`,
/// `u64` and `usize`. This trait cannot be implemented outside this crate.
///
/// # Examples
///
/// ```rust
/// # use hk_integer::num::integral::Integral;
/// fn describe<T: Integral>() -> (u32, bool) {
///     (T::BITS, T::SIGNED)
/// }
///
/// assert_eq!(describe::<i16>(), (16, true));
/// assert_eq!(describe::<u64>(), (64, false));
/// ```
///
/// Wrapping a floating point type does not compile:
///
/// ```compile_fail
/// # use hk_integer::Integer;
/// let _ = Integer::<f32>::default();
/// ```
///
/// Neither does wrapping a 128-bit integer:
///
/// ```compile_fail
/// # use hk_integer::Integer;
/// let _ = Integer::new(1u128);
/// ```
///
/// And the trait cannot be implemented for a foreign type:
///
/// ```compile_fail
/// # use hk_integer::num::integral::Integral;
/// #[derive(Clone, Copy)]
/// struct Meters(u32);
///
/// impl Integral for Meters {
///     const BITS: u32 = 32;
///     const SIGNED: bool = false;
///     const MIN: Self = Meters(0);
///     const MAX: Self = Meters(u32::MAX);
/// }
/// ```
pub trait Integral:
    sealed::Sealed
    + PrimInt
    + Num<FromStrRadixErr = ParseIntError>
    + Zero
    + PlusOne
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
    + RemAssign
    + BitAndAssign
    + BitOrAssign
    + BitXorAssign
    + Shl<Self, Output = Self>
    + Shr<Self, Output = Self>
    + ShlAssign
    + ShrAssign
    + Default
    + Hash
    + Debug
    + Display
    + Binary
    + Octal
    + LowerHex
    + UpperHex
    + FromStr<Err = ParseIntError>
    + bytemuck::Pod
    + Send
    + Sync
    + 'static
{
    /// The width of the representation in bits.
    const BITS: u32;
    /// Whether the representation is signed.
    const SIGNED: bool;
    /// The smallest value of the representation.
    const MIN: Self;
    /// The largest value of the representation.
    const MAX: Self;
}

macro_rules! impl_integral {
    ($($t:ty),+) => {
        $(
            impl sealed::Sealed for $t {}

            impl Integral for $t {
                const BITS: u32 = <$t>::BITS;
                const SIGNED: bool = <$t>::MIN != 0;
                const MIN: Self = <$t>::MIN;
                const MAX: Self = <$t>::MAX;
            }
        )+
    };
}

impl_integral!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
