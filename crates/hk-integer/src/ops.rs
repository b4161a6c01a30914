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

//! # Arithmetic and Bitwise Operators
//!
//! Operator impls for [`Integer`]. Every operator comes as a pair:
//!
//! - the compound form (`+=`, `<<=`, ...) mutates the left operand with the
//!   native compound operator of the representation;
//! - the binary form (`+`, `<<`, ...) copies the left operand, applies the
//!   compound form and returns the copy.
//!
//! Both forms are generated by one macro from the compound operator token,
//! so the binary form cannot diverge from the compound one. The right-hand
//! side may be an `Integer<T>`, a `&Integer<T>` or a bare `T`; the left-hand
//! side of the binary form may be an `Integer<T>` or a `&Integer<T>`.
//!
//! Division and remainder by zero, and shifts by the bit width or more,
//! panic exactly like the primitive operator.

use crate::{integer::Integer, num::integral::Integral};
use std::iter::{Product, Sum};

macro_rules! impl_binary_op {
    ($op_trait:ident, $op_method:ident, $assign_trait:ident, $assign_method:ident, $assign_op:tt) => {
        impl<T> std::ops::$assign_trait for Integer<T>
        where
            T: Integral,
        {
            #[inline(always)]
            fn $assign_method(&mut self, rhs: Self) {
                *self.get_mut() $assign_op rhs.get();
            }
        }

        impl<'a, T> std::ops::$assign_trait<&'a Integer<T>> for Integer<T>
        where
            T: Integral,
        {
            #[inline(always)]
            fn $assign_method(&mut self, rhs: &'a Integer<T>) {
                *self.get_mut() $assign_op rhs.get();
            }
        }

        impl<T> std::ops::$assign_trait<T> for Integer<T>
        where
            T: Integral,
        {
            #[inline(always)]
            fn $assign_method(&mut self, rhs: T) {
                *self.get_mut() $assign_op rhs;
            }
        }

        impl_binary_op!(@binary $op_trait, $op_method, $assign_op, Integer<T>);
        impl_binary_op!(@binary $op_trait, $op_method, $assign_op, &'a Integer<T>);
        impl_binary_op!(@binary $op_trait, $op_method, $assign_op, T);
    };
    (@binary $op_trait:ident, $op_method:ident, $assign_op:tt, $rhs:ty) => {
        impl<'a, T> std::ops::$op_trait<$rhs> for Integer<T>
        where
            T: Integral,
        {
            type Output = Integer<T>;

            #[inline(always)]
            fn $op_method(self, rhs: $rhs) -> Self::Output {
                let mut out = self;
                out $assign_op rhs;
                out
            }
        }

        impl<'a, 'b, T> std::ops::$op_trait<$rhs> for &'b Integer<T>
        where
            T: Integral,
        {
            type Output = Integer<T>;

            #[inline(always)]
            fn $op_method(self, rhs: $rhs) -> Self::Output {
                let mut out = *self;
                out $assign_op rhs;
                out
            }
        }
    };
}

impl_binary_op!(Add, add, AddAssign, add_assign, +=);
impl_binary_op!(Sub, sub, SubAssign, sub_assign, -=);
impl_binary_op!(Mul, mul, MulAssign, mul_assign, *=);
impl_binary_op!(Div, div, DivAssign, div_assign, /=);
impl_binary_op!(Rem, rem, RemAssign, rem_assign, %=);
impl_binary_op!(BitAnd, bitand, BitAndAssign, bitand_assign, &=);
impl_binary_op!(BitOr, bitor, BitOrAssign, bitor_assign, |=);
impl_binary_op!(BitXor, bitxor, BitXorAssign, bitxor_assign, ^=);
impl_binary_op!(Shl, shl, ShlAssign, shl_assign, <<=);
impl_binary_op!(Shr, shr, ShrAssign, shr_assign, >>=);

impl<T> Sum for Integer<T>
where
    T: Integral,
{
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |mut acc, x| {
            acc += x;
            acc
        })
    }
}

impl<'a, T> Sum<&'a Integer<T>> for Integer<T>
where
    T: Integral,
{
    fn sum<I: Iterator<Item = &'a Integer<T>>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |mut acc, x| {
            acc += x;
            acc
        })
    }
}

impl<T> Product for Integer<T>
where
    T: Integral,
{
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ONE, |mut acc, x| {
            acc *= x;
            acc
        })
    }
}

impl<'a, T> Product<&'a Integer<T>> for Integer<T>
where
    T: Integral,
{
    fn product<I: Iterator<Item = &'a Integer<T>>>(iter: I) -> Self {
        iter.fold(Self::ONE, |mut acc, x| {
            acc *= x;
            acc
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng, rngs::StdRng};

    const SAMPLES: usize = 1_000;

    fn w<T: Integral>(v: T) -> Integer<T> {
        Integer::new(v)
    }

    #[test]
    fn test_binary_ops() {
        let a = w(20i32);
        let b = w(6i32);

        assert_eq!((a + b).get(), 26);
        assert_eq!((a - b).get(), 14);
        assert_eq!((a * b).get(), 120);
        assert_eq!((a / b).get(), 3);
        assert_eq!((a % b).get(), 2);
        assert_eq!((a & b).get(), 20 & 6);
        assert_eq!((a | b).get(), 20 | 6);
        assert_eq!((a ^ b).get(), 20 ^ 6);
        assert_eq!((a << w(2)).get(), 80);
        assert_eq!((a >> w(2)).get(), 5);
    }

    #[test]
    fn test_binary_ops_leave_operands_untouched() {
        let a = w(7u16);
        let b = w(3u16);
        let _ = a * b;
        assert_eq!(a.get(), 7);
        assert_eq!(b.get(), 3);
    }

    #[test]
    fn test_assignment_ops() {
        let mut i = w(10i64);

        i += w(5);
        assert_eq!(i.get(), 15);

        i -= w(5);
        assert_eq!(i.get(), 10);

        i *= w(4);
        assert_eq!(i.get(), 40);

        i /= w(3);
        assert_eq!(i.get(), 13);

        i %= w(5);
        assert_eq!(i.get(), 3);

        i <<= w(4);
        assert_eq!(i.get(), 48);

        i >>= w(1);
        assert_eq!(i.get(), 24);

        i &= w(0b1_1000);
        assert_eq!(i.get(), 24);

        i |= w(0b1);
        assert_eq!(i.get(), 25);

        i ^= w(0b1_1001);
        assert_eq!(i.get(), 0);
    }

    #[test]
    fn test_rhs_variants_agree() {
        let a = w(100u32);
        let b = w(7u32);

        assert_eq!(a + b, a + &b);
        assert_eq!(a + b, a + 7u32);
        assert_eq!(a + b, &a + b);
        assert_eq!(a + b, &a + &b);
        assert_eq!(a + b, &a + 7u32);

        let mut x = a;
        x -= &b;
        let mut y = a;
        y -= 7u32;
        assert_eq!(x, y);
        assert_eq!(x, a - b);
    }

    #[test]
    fn test_sum_and_product() {
        let values = [w(1i32), w(2), w(3), w(4)];

        let sum: Integer<i32> = values.iter().sum();
        assert_eq!(sum.get(), 10);

        let product: Integer<i32> = values.into_iter().product();
        assert_eq!(product.get(), 24);

        let empty: [Integer<u8>; 0] = [];
        assert_eq!(empty.iter().sum::<Integer<u8>>().get(), 0);
        assert_eq!(empty.iter().product::<Integer<u8>>().get(), 1);
    }

    #[test]
    fn test_wrapped_scenario() {
        let mut i = w(10i32);
        i += w(15);

        assert!(i > w(20));
        assert!(i == w(25));
        assert_eq!(i.get(), 25);
        assert!(w(10i32) + w(15) > w(20));
        assert_eq!(w(10i32) + w(15), w(25));
    }

    #[test]
    fn test_wrapping_ops_match_native() {
        let a = w(250u8);
        let b = w(10u8);
        assert_eq!((a & b) | (a ^ b), w((250u8 & 10) | (250u8 ^ 10)));
        assert_eq!((!a).get(), 5);
    }

    #[test]
    #[should_panic(expected = "attempt to divide by zero")]
    fn test_div_by_zero_matches_native() {
        let _ = w(1i32) / w(0i32);
    }

    #[test]
    #[should_panic(expected = "attempt to calculate the remainder with a divisor of zero")]
    fn test_rem_by_zero_matches_native() {
        let mut i = w(9u64);
        i %= 0u64;
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "attempt to add with overflow")]
    fn test_add_overflow_matches_native() {
        let _ = w(i8::MAX) + w(1i8);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "attempt to shift left with overflow")]
    fn test_shift_overflow_matches_native() {
        let _ = w(1u32) << w(32u32);
    }

    #[test]
    #[cfg(not(debug_assertions))]
    fn test_add_wraps_without_overflow_checks() {
        assert_eq!((w(200u8) + w(100u8)).get(), 44);
        assert_eq!(w(i8::MAX) + w(1i8), w(i8::MIN));

        let mut i = w(u16::MAX);
        i += 2u16;
        assert_eq!(i.get(), 1);
    }

    #[test]
    #[cfg(not(debug_assertions))]
    fn test_sub_and_mul_wrap_without_overflow_checks() {
        assert_eq!((w(0u32) - w(1u32)).get(), u32::MAX);
        assert_eq!(w(i16::MIN) - w(1i16), w(i16::MAX));
        assert_eq!((w(16u8) * w(17u8)).get(), 16);
    }

    #[test]
    #[cfg(not(debug_assertions))]
    fn test_shift_masks_without_overflow_checks() {
        assert_eq!((w(1u32) << w(32u32)).get(), 1u32.wrapping_shl(32));
        assert_eq!((w(-8i64) >> w(65i64)).get(), (-8i64).wrapping_shr(65));
    }

    // Compares every operator, binary and compound, against the primitive on
    // random operands. Only results the primitive can produce without
    // overflow are compared, so the checks hold with and without overflow
    // checks.
    macro_rules! random_parity_test {
        ($name:ident, $t:ty, $seed:expr) => {
            random_parity_test!($name, $t, $t, $seed);
        };
        ($name:ident, $t:ty, $sample:ty, $seed:expr) => {
            #[test]
            fn $name() {
                let mut rng = StdRng::seed_from_u64($seed);
                let half = (<$t>::BITS / 2) as $t;
                for _ in 0..SAMPLES {
                    let full: ($t, $t) = (
                        rng.random::<$sample>() as $t,
                        rng.random::<$sample>() as $t,
                    );
                    let narrow = (full.0 >> half, full.1 >> half);
                    let s: $t = rng.random_range(0..(<$t>::BITS as $sample)) as $t;

                    for (a, b) in [full, narrow] {
                        let (wa, wb) = (w(a), w(b));

                        random_parity_test!(@checked wa, wb, a.checked_add(b), +, +=);
                        random_parity_test!(@checked wa, wb, a.checked_sub(b), -, -=);
                        random_parity_test!(@checked wa, wb, a.checked_mul(b), *, *=);
                        random_parity_test!(@checked wa, wb, a.checked_div(b), /, /=);
                        random_parity_test!(@checked wa, wb, a.checked_rem(b), %, %=);
                        random_parity_test!(@checked wa, wb, Some(a & b), &, &=);
                        random_parity_test!(@checked wa, wb, Some(a | b), |, |=);
                        random_parity_test!(@checked wa, wb, Some(a ^ b), ^, ^=);
                        random_parity_test!(@checked wa, w(s), Some(a << s), <<, <<=);
                        random_parity_test!(@checked wa, w(s), Some(a >> s), >>, >>=);

                        assert_eq!((!wa).get(), !a);
                        assert_eq!(wa.cmp(&wb), a.cmp(&b));
                        assert_eq!(wa == wb, a == b);
                    }
                }
            }
        };
        (@checked $wa:expr, $wb:expr, $expected:expr, $op:tt, $assign_op:tt) => {
            if let Some(expected) = $expected {
                assert_eq!(($wa $op $wb).get(), expected);

                let mut compound = $wa;
                compound $assign_op $wb;
                assert_eq!(compound.get(), expected);
            }
        };
    }

    random_parity_test!(test_random_parity_i8, i8, 1);
    random_parity_test!(test_random_parity_i16, i16, 2);
    random_parity_test!(test_random_parity_i32, i32, 3);
    random_parity_test!(test_random_parity_i64, i64, 4);
    random_parity_test!(test_random_parity_isize, isize, i64, 5);
    random_parity_test!(test_random_parity_u8, u8, 6);
    random_parity_test!(test_random_parity_u16, u16, 7);
    random_parity_test!(test_random_parity_u32, u32, 8);
    random_parity_test!(test_random_parity_u64, u64, 9);
    random_parity_test!(test_random_parity_usize, usize, u64, 10);
}
