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

//! Walks through the basic operations of a wrapped integer and prints the
//! results.
//!
//! Run with `cargo run -p hk-integer --example simple`.

use hk_integer::catalog::{ENTRIES, Int};

fn main() {
    let mut i = Int::new(10);

    i += 15;

    if i > Int::new(20) {
        println!("Greater!");
    }

    if i == Int::new(25) {
        println!("Equal!");
    }

    println!("Value: {}", i.get());
    println!("sizeof(i) = {}", std::mem::size_of_val(&i));

    let before = i.post_inc();
    println!("Post-increment: {} -> {}", before, i);

    let moved = i.take();
    println!("Moved {:?}, source now {:?}", moved, i);

    println!("{}", "-".repeat(40));
    for entry in ENTRIES {
        println!("{}", entry);
    }
}
