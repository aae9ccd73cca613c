// Copyright 2015 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A double-ended priority queue implemented with an interval heap.
//!
//! An `IntervalHeap` can be used wherever a [`BinaryHeap`][bh] can, but has the ability to
//! efficiently access the heap's smallest item and accepts custom comparators. If you only need
//! access to either the smallest item or the greatest item, `BinaryHeap` is more efficient.
//!
//! Insertion has amortized `O(log n)` time complexity. Popping the smallest or greatest item is
//! `O(log n)`. Retrieving the smallest or greatest item is `O(1)`. Building a heap from a vector
//! takes `O(n)`.
//!
//! Items are ordered by a comparator from the [`compare`][cmp] crate, fixed when the heap is
//! created:
//!
//! ```
//! use compare::{Compare, natural};
//! use interval_heap::IntervalHeap;
//!
//! let mut heap = IntervalHeap::from_vec_and_comparator(vec![4, 1, 7, 3], natural().rev());
//! assert_eq!(heap.pop_min(), Some(7));
//! assert_eq!(heap.pop_max(), Some(1));
//! assert_eq!(heap.into_sorted_vec(), [4, 3]);
//! ```
//!
//! [bh]: https://doc.rust-lang.org/stable/std/collections/struct.BinaryHeap.html
//! [cmp]: https://docs.rs/compare

// An interval heap is a binary tree structure with the following properties:
//
// (1) Each node (except possibly the last leaf) contains two values
//     where the first one is less than or equal to the second one.
// (2) Each node represents a closed interval.
// (3) A child node's interval is completely contained in the parent node's
//     interval.
//
// This implies that the min and max items are always in the root node.
//
// The nodes are stored in a single Vec. Node `i` occupies offsets `2i` and
// `2i + 1`; its parent is node `(i - 1) / 2`. With 13 items (7 nodes), where
// the numbers are offsets into the Vec:
//
//          (0 1)
//         /     \
//    (2 3)       (4 5)
//    /   \       /    \
//  (6 7)(8 9)(10 11)(12 --)
//
// The lo items form a min-heap and the hi items a max-heap. When the item
// count is odd, the last node holds a single item that counts as both.

mod heap;
mod iter;
mod peek;
mod sift;

pub use crate::heap::IntervalHeap;
pub use crate::iter::{Drain, IntoIter, Iter};
pub use crate::peek::PeekMut;
