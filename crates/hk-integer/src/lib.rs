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

//! # HK Integer
//!
//! Zero-cost, strongly typed wrappers around primitive integers.
//! [`Integer<T>`](Integer) gives a primitive integer a distinct type identity
//! while keeping its exact size, alignment and arithmetic: every operator
//! forwards to the native one, including its overflow and division-by-zero
//! behavior. The wrapper is a single choke point for future policies (overflow
//! handling, unit tagging) without touching call sites.
//!
//! ## Modules
//!
//! - `integer`: The [`Integer`] type with construction, access, move-out
//!   (`take`, `move_from`), prefix/postfix increment and decrement, unary and
//!   logical operations, and comparisons.
//! - `num`: Associated-constant traits (`Zero`, `PlusOne`) and the sealed
//!   `Integral` bound that restricts representations to primitive integers.
//! - `catalog`: Named instantiations (`Int32`, `UIntFast16`, `IntPtr`, `Long`,
//!   ...) and a constant table describing them.
//!
//! Operator impls (`+ - * / % & | ^ << >>` with their compound forms),
//! formatting, parsing and `bytemuck`/`num-traits` interop are implemented on
//! [`Integer`] directly.
//!
//! ## Usage
//!
//! ```rust
//! use hk_integer::catalog::Int;
//!
//! let mut i = Int::new(10);
//! i += 15;
//!
//! assert!(i > Int::new(20));
//! assert_eq!(i, Int::new(25));
//! assert_eq!(i.get(), 25);
//! assert_eq!(std::mem::size_of_val(&i), std::mem::size_of::<i32>());
//! ```

pub mod catalog;
pub mod integer;
pub mod num;

mod fmt;
mod interop;
mod ops;

pub use integer::Integer;
pub use num::integral::Integral;
