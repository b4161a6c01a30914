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

//! # Strongly Typed Integers (Zero-Cost)
//!
//! `Integer<T>` wraps a single primitive integer `T` and gives it a distinct
//! type identity while reproducing every operation of the primitive. It
//! compiles down to a transparent `T`: no added storage, no padding, no
//! dynamic dispatch.
//!
//! ## Semantics
//!
//! Every operation forwards to the native operator on `T`. Overflow panics
//! when overflow checks are enabled and wraps otherwise, division by zero
//! panics, exactly like the bare primitive. Nothing is masked or checked
//! on top.
//!
//! Rust moves leave the source inaccessible, so the "moved-from holds zero"
//! contract is exposed through [`Integer::take`] and [`Integer::move_from`].
//!
//! ## Usage
//!
//! ```rust
//! use hk_integer::Integer;
//!
//! let mut i = Integer::new(10_i32);
//! i += 15;
//!
//! assert!(i > Integer::new(20));
//! assert!(i == Integer::new(25));
//! assert_eq!(i.get(), 25);
//! ```

use crate::num::integral::Integral;
use std::{
    borrow::Borrow,
    cmp::Ordering,
    ops::{Neg, Not},
};

/// A zero-cost, strongly typed wrapper around a primitive integer `T`.
///
/// Size and alignment are exactly those of `T`. Equality, ordering and
/// hashing are derived from the stored value, so the order is the native
/// total order of `T`.
///
/// # Examples
///
/// ```rust
/// # use hk_integer::Integer;
/// let a = Integer::<u8>::new(200);
/// let b = Integer::<u8>::new(50);
///
/// assert_eq!((a + b).get(), 250);
/// assert!(b < a);
/// assert_eq!(std::mem::size_of::<Integer<u8>>(), 1);
/// ```
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Integer<T>
where
    T: Integral,
{
    value: T,
}

impl<T> Integer<T>
where
    T: Integral,
{
    /// The zero value of the representation.
    pub const ZERO: Self = Self::new(T::ZERO);

    /// The value one of the representation.
    pub const ONE: Self = Self::new(T::PLUS_ONE);

    /// The smallest value of the representation.
    pub const MIN: Self = Self::new(T::MIN);

    /// The largest value of the representation.
    pub const MAX: Self = Self::new(T::MAX);

    /// Creates a new `Integer` holding `value` unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use hk_integer::Integer;
    /// let i = Integer::new(-7i16);
    /// assert_eq!(i.get(), -7);
    /// ```
    #[inline(always)]
    pub const fn new(value: T) -> Self {
        Self { value }
    }

    /// Returns a copy of the stored value.
    #[inline(always)]
    pub const fn get(&self) -> T {
        self.value
    }

    /// Returns a mutable reference to the stored value.
    ///
    /// Writes through the reference are visible to every later operation on
    /// this wrapper.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use hk_integer::Integer;
    /// let mut i = Integer::new(1u32);
    /// *i.get_mut() = 42;
    /// assert_eq!(i.get(), 42);
    /// ```
    #[inline(always)]
    pub fn get_mut(&mut self) -> &mut T {
        &mut self.value
    }

    /// Consumes the wrapper and returns the stored value.
    #[inline(always)]
    pub fn into_inner(self) -> T {
        self.value
    }

    /// Moves the value out of `self`, leaving zero behind.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use hk_integer::Integer;
    /// let mut source = Integer::new(9i64);
    /// let moved = source.take();
    /// assert_eq!(moved.get(), 9);
    /// assert_eq!(source.get(), 0);
    /// ```
    #[inline(always)]
    pub fn take(&mut self) -> Self {
        Self::new(std::mem::replace(&mut self.value, T::ZERO))
    }

    /// Replaces the stored value with the value of `rhs`.
    ///
    /// Assigning a wrapper to itself leaves the value unchanged.
    #[inline(always)]
    pub fn assign(&mut self, rhs: &Self) -> &mut Self {
        if !std::ptr::eq(&*self, rhs) {
            self.value = rhs.value;
        }
        self
    }

    /// Moves the value of `source` into `self` and resets `source` to zero.
    ///
    /// Assigning a wrapper to itself leaves the value unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use hk_integer::Integer;
    /// let mut dst = Integer::new(1u16);
    /// let mut src = Integer::new(500u16);
    /// dst.move_from(&mut src);
    /// assert_eq!(dst.get(), 500);
    /// assert_eq!(src.get(), 0);
    /// ```
    #[inline(always)]
    pub fn move_from(&mut self, source: &mut Self) -> &mut Self {
        if !std::ptr::eq(&*self, &*source) {
            self.value = std::mem::replace(&mut source.value, T::ZERO);
        }
        self
    }

    /// Prefix increment: adds one in place and returns the new state.
    ///
    /// # Panics
    ///
    /// Panics on overflow when overflow checks are enabled, like `+= 1` on
    /// the primitive.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use hk_integer::Integer;
    /// let mut i = Integer::new(1u8);
    /// assert_eq!(i.inc().get(), 2);
    /// assert_eq!(i.get(), 2);
    /// ```
    #[inline(always)]
    pub fn inc(&mut self) -> &mut Self {
        self.value += T::PLUS_ONE;
        self
    }

    /// Postfix increment: returns the prior state, then adds one in place.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use hk_integer::Integer;
    /// let mut i = Integer::new(1u8);
    /// assert_eq!(i.post_inc().get(), 1);
    /// assert_eq!(i.get(), 2);
    /// ```
    #[inline(always)]
    pub fn post_inc(&mut self) -> Self {
        let old = *self;
        self.inc();
        old
    }

    /// Prefix decrement: subtracts one in place and returns the new state.
    ///
    /// # Panics
    ///
    /// Panics on overflow when overflow checks are enabled, like `-= 1` on
    /// the primitive.
    #[inline(always)]
    pub fn dec(&mut self) -> &mut Self {
        self.value -= T::PLUS_ONE;
        self
    }

    /// Postfix decrement: returns the prior state, then subtracts one in place.
    #[inline(always)]
    pub fn post_dec(&mut self) -> Self {
        let old = *self;
        self.dec();
        old
    }

    /// Unary plus: a copy holding the same value.
    #[inline(always)]
    pub const fn pos(self) -> Self {
        self
    }

    /// Returns `true` if the stored value is zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use hk_integer::Integer;
    /// assert!(Integer::new(0i32).is_zero());
    /// assert!(!Integer::new(3i32).is_zero());
    /// ```
    #[inline(always)]
    pub fn is_zero(&self) -> bool {
        self.value == T::ZERO
    }

    /// Logical negation: `true` iff the stored value is zero.
    ///
    /// Rust's `!` on integers is the bitwise complement, which is what the
    /// [`Not`] impl of this type provides.
    #[inline(always)]
    pub fn logical_not(&self) -> bool {
        self.is_zero()
    }

    /// Truthiness of the stored value: `true` iff it is non-zero.
    #[inline(always)]
    pub fn to_bool(&self) -> bool {
        !self.is_zero()
    }

    /// Logical and of two already evaluated values.
    ///
    /// Both operands are values, so nothing is short-circuited: any side
    /// effect that produced `rhs` has already happened.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use hk_integer::Integer;
    /// let a = Integer::new(4u8);
    /// assert!(a.logical_and(&Integer::new(1)));
    /// assert!(!a.logical_and(&Integer::new(0)));
    /// ```
    #[inline(always)]
    pub fn logical_and(&self, rhs: &Self) -> bool {
        self.to_bool() & rhs.to_bool()
    }

    /// Logical or of two already evaluated values.
    ///
    /// Like [`Integer::logical_and`], this never short-circuits.
    #[inline(always)]
    pub fn logical_or(&self, rhs: &Self) -> bool {
        self.to_bool() | rhs.to_bool()
    }
}

impl<T> Default for Integer<T>
where
    T: Integral,
{
    #[inline(always)]
    fn default() -> Self {
        Self::ZERO
    }
}

impl<T> From<T> for Integer<T>
where
    T: Integral,
{
    #[inline(always)]
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

// A blanket `impl<T> From<Integer<T>> for T` is rejected by the orphan rules.
macro_rules! impl_from_integer_for {
    ($($t:ty),+) => {
        $(
            impl From<Integer<$t>> for $t {
                #[inline(always)]
                fn from(integer: Integer<$t>) -> Self {
                    integer.value
                }
            }
        )+
    };
}

impl_from_integer_for!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl<T> AsRef<T> for Integer<T>
where
    T: Integral,
{
    #[inline(always)]
    fn as_ref(&self) -> &T {
        &self.value
    }
}

impl<T> AsMut<T> for Integer<T>
where
    T: Integral,
{
    #[inline(always)]
    fn as_mut(&mut self) -> &mut T {
        &mut self.value
    }
}

impl<T> Borrow<T> for Integer<T>
where
    T: Integral,
{
    #[inline(always)]
    fn borrow(&self) -> &T {
        &self.value
    }
}

impl<T> PartialEq<T> for Integer<T>
where
    T: Integral,
{
    #[inline(always)]
    fn eq(&self, other: &T) -> bool {
        self.value == *other
    }
}

impl<T> PartialOrd<T> for Integer<T>
where
    T: Integral,
{
    #[inline(always)]
    fn partial_cmp(&self, other: &T) -> Option<Ordering> {
        self.value.partial_cmp(other)
    }
}

impl<T> Neg for Integer<T>
where
    T: Integral + Neg<Output = T>,
{
    type Output = Self;

    #[inline(always)]
    fn neg(self) -> Self::Output {
        Self::new(-self.value)
    }
}

impl<T> Neg for &Integer<T>
where
    T: Integral + Neg<Output = T>,
{
    type Output = Integer<T>;

    #[inline(always)]
    fn neg(self) -> Self::Output {
        -*self
    }
}

impl<T> Not for Integer<T>
where
    T: Integral,
{
    type Output = Self;

    #[inline(always)]
    fn not(self) -> Self::Output {
        Self::new(!self.value)
    }
}

impl<T> Not for &Integer<T>
where
    T: Integral,
{
    type Output = Integer<T>;

    #[inline(always)]
    fn not(self) -> Self::Output {
        !*self
    }
}
