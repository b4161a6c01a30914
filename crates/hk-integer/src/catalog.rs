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

//! # Naming Catalog
//!
//! Named instantiations of [`Integer`] for every platform-independent
//! integer name: exact widths, "fast" and "least" widths, maximum width,
//! pointer width and the C platform types.
//!
//! The mapping from name to representation is a fixed table. Platform
//! dependent entries are resolved at compile time through `core::ffi` and
//! `target_pointer_width`; nothing here adds behavior beyond instantiating
//! the generic wrapper.
//!
//! [`ENTRIES`] describes the same table at runtime. It is generated from the
//! same invocation as the aliases, so the two cannot drift.
//!
//! ```rust
//! use hk_integer::catalog::{ENTRIES, Int32, UIntPtr};
//!
//! let i = Int32::new(-1);
//! let p = UIntPtr::new(usize::MAX);
//! assert_eq!(i.get(), -1);
//! assert_eq!(p.get(), usize::MAX);
//!
//! let entry = ENTRIES.iter().find(|e| e.name == "Int32").unwrap();
//! assert_eq!((entry.size, entry.signed), (4, true));
//! ```

use crate::{integer::Integer, num::integral::Integral};
use std::ffi::{
    c_int, c_long, c_longlong, c_schar, c_short, c_uchar, c_uint, c_ulong, c_ulonglong, c_ushort,
};

/// Fastest representation of at least the given width.
///
/// 8-bit and 64-bit names map to the exact width; 16-bit and 32-bit names
/// map to the pointer width on 64-bit targets and to 32 bits elsewhere.
mod fast {
    #[cfg(target_pointer_width = "64")]
    pub(super) type Fast16 = i64;
    #[cfg(target_pointer_width = "64")]
    pub(super) type UFast16 = u64;
    #[cfg(target_pointer_width = "64")]
    pub(super) type Fast32 = i64;
    #[cfg(target_pointer_width = "64")]
    pub(super) type UFast32 = u64;

    #[cfg(not(target_pointer_width = "64"))]
    pub(super) type Fast16 = i32;
    #[cfg(not(target_pointer_width = "64"))]
    pub(super) type UFast16 = u32;
    #[cfg(not(target_pointer_width = "64"))]
    pub(super) type Fast32 = i32;
    #[cfg(not(target_pointer_width = "64"))]
    pub(super) type UFast32 = u32;
}

/// One row of the naming catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CatalogEntry {
    /// The alias name, e.g. `"Int32"`.
    pub name: &'static str,
    /// Size of the representation in bytes.
    pub size: usize,
    /// Whether the representation is signed.
    pub signed: bool,
}

impl CatalogEntry {
    /// Width of the representation in bits.
    #[inline(always)]
    pub const fn bits(&self) -> usize {
        self.size * 8
    }
}

impl std::fmt::Display for CatalogEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sign = if self.signed { "signed" } else { "unsigned" };
        write!(f, "{} ({}-bit {})", self.name, self.bits(), sign)
    }
}

macro_rules! catalog {
    ($($(#[$meta:meta])* $alias:ident => $repr:ty;)+) => {
        $(
            $(#[$meta])*
            pub type $alias = Integer<$repr>;
        )+

        /// Every alias of the catalog with the layout of its representation.
        pub const ENTRIES: &[CatalogEntry] = &[
            $(
                CatalogEntry {
                    name: stringify!($alias),
                    size: std::mem::size_of::<$repr>(),
                    signed: <$repr as Integral>::SIGNED,
                },
            )+
        ];
    };
}

catalog! {
    /// C `signed char`.
    SignedChar => c_schar;
    /// C `unsigned char`.
    UnsignedChar => c_uchar;
    /// C `short`.
    Short => c_short;
    /// C `unsigned short`.
    UnsignedShort => c_ushort;
    /// C `int`.
    Int => c_int;
    /// C `unsigned int`.
    UnsignedInt => c_uint;
    /// C `long`.
    Long => c_long;
    /// C `unsigned long`.
    UnsignedLong => c_ulong;
    /// C `long long`.
    LongLong => c_longlong;
    /// C `unsigned long long`.
    UnsignedLongLong => c_ulonglong;

    /// Exactly 8-bit signed.
    Int8 => i8;
    /// Exactly 16-bit signed.
    Int16 => i16;
    /// Exactly 32-bit signed.
    Int32 => i32;
    /// Exactly 64-bit signed.
    Int64 => i64;
    /// Exactly 8-bit unsigned.
    UInt8 => u8;
    /// Exactly 16-bit unsigned.
    UInt16 => u16;
    /// Exactly 32-bit unsigned.
    UInt32 => u32;
    /// Exactly 64-bit unsigned.
    UInt64 => u64;

    /// Fastest signed type of at least 8 bits.
    IntFast8 => i8;
    /// Fastest signed type of at least 16 bits.
    IntFast16 => fast::Fast16;
    /// Fastest signed type of at least 32 bits.
    IntFast32 => fast::Fast32;
    /// Fastest signed type of at least 64 bits.
    IntFast64 => i64;
    /// Fastest unsigned type of at least 8 bits.
    UIntFast8 => u8;
    /// Fastest unsigned type of at least 16 bits.
    UIntFast16 => fast::UFast16;
    /// Fastest unsigned type of at least 32 bits.
    UIntFast32 => fast::UFast32;
    /// Fastest unsigned type of at least 64 bits.
    UIntFast64 => u64;

    /// Smallest signed type of at least 8 bits.
    IntLeast8 => i8;
    /// Smallest signed type of at least 16 bits.
    IntLeast16 => i16;
    /// Smallest signed type of at least 32 bits.
    IntLeast32 => i32;
    /// Smallest signed type of at least 64 bits.
    IntLeast64 => i64;
    /// Smallest unsigned type of at least 8 bits.
    UIntLeast8 => u8;
    /// Smallest unsigned type of at least 16 bits.
    UIntLeast16 => u16;
    /// Smallest unsigned type of at least 32 bits.
    UIntLeast32 => u32;
    /// Smallest unsigned type of at least 64 bits.
    UIntLeast64 => u64;

    /// Widest supported signed type.
    IntMax => i64;
    /// Widest supported unsigned type.
    UIntMax => u64;

    /// Signed type wide enough to hold a pointer.
    IntPtr => isize;
    /// Unsigned type wide enough to hold a pointer.
    UIntPtr => usize;
}
