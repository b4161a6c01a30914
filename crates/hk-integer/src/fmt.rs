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

//! Formatting and parsing for [`Integer`].
//!
//! `Display` and the radix traits print the bare value and honour every
//! formatter flag, so a wrapper formats exactly like its representation.
//! `Debug` names the wrapper. Parsing forwards to the primitive and passes
//! its `ParseIntError` through unchanged.

use crate::{integer::Integer, num::integral::Integral};
use std::{fmt, num::ParseIntError, str::FromStr};

impl<T> fmt::Debug for Integer<T>
where
    T: Integral,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Integer").field(&self.get()).finish()
    }
}

macro_rules! impl_fmt_forward {
    ($($fmt_trait:ident),+) => {
        $(
            impl<T> fmt::$fmt_trait for Integer<T>
            where
                T: Integral,
            {
                #[inline]
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    fmt::$fmt_trait::fmt(&self.get(), f)
                }
            }
        )+
    };
}

impl_fmt_forward!(Display, Binary, Octal, LowerHex, UpperHex);

impl<T> FromStr for Integer<T>
where
    T: Integral,
{
    type Err = ParseIntError;

    /// Parses a decimal value exactly as `T::from_str` does.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use hk_integer::Integer;
    /// let i: Integer<i32> = "-25".parse().unwrap();
    /// assert_eq!(i.get(), -25);
    /// assert!("300".parse::<Integer<u8>>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<T>().map(Self::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_representation() {
        assert_eq!(format!("{}", Integer::new(25i32)), "25");
        assert_eq!(format!("{}", Integer::new(-3i8)), "-3");
        assert_eq!(format!("{:>5}", Integer::new(42u16)), "   42");
        assert_eq!(format!("{:+}", Integer::new(7i64)), "+7");
    }

    #[test]
    fn test_debug_names_wrapper() {
        assert_eq!(format!("{:?}", Integer::new(25i32)), "Integer(25)");
        assert_eq!(format!("{:?}", Integer::<u8>::default()), "Integer(0)");
    }

    #[test]
    fn test_radix_formatting() {
        let i = Integer::new(255u8);
        assert_eq!(format!("{:b}", i), "11111111");
        assert_eq!(format!("{:o}", i), "377");
        assert_eq!(format!("{:x}", i), "ff");
        assert_eq!(format!("{:#X}", i), "0xFF");
        assert_eq!(format!("{:08b}", Integer::new(5u8)), "00000101");
    }

    #[test]
    fn test_parse() {
        let i: Integer<i64> = "1234".parse().unwrap();
        assert_eq!(i.get(), 1234);

        let u: Integer<usize> = "+8".parse().unwrap();
        assert_eq!(u.get(), 8);
    }

    #[test]
    fn test_parse_error_is_native() {
        let wrapped = "12a".parse::<Integer<u32>>().unwrap_err();
        let native = "12a".parse::<u32>().unwrap_err();
        assert_eq!(wrapped, native);

        let wrapped = "-1".parse::<Integer<u8>>().unwrap_err();
        let native = "-1".parse::<u8>().unwrap_err();
        assert_eq!(wrapped.kind(), native.kind());
    }
}
