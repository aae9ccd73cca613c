// Copyright 2015 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Index arithmetic and the procedures that restore the interval heap
//! properties of a slice.
//!
//! Everything here works on node indices. Node `i` owns the offsets `2i`
//! (its "lo" slot) and `2i + 1` (its "hi" slot). The last node may only own
//! `2i`, in which case that single slot serves as both lo and hi.

use std::cmp;

use compare::Compare;

/// One half of the double-ended order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Side {
    /// The lo slots, which form a min-heap.
    Min,
    /// The hi slots, which form a max-heap.
    Max,
}

impl Side {
    /// Returns `true` if `a` must sit closer to the root than `b` on this side.
    #[inline]
    pub(crate) fn outranks<T, C: Compare<T>>(self, cmp: &C, a: &T, b: &T) -> bool {
        match self {
            Side::Min => cmp.compares_lt(a, b),
            Side::Max => cmp.compares_gt(a, b),
        }
    }
}

#[inline]
fn parent(node: usize) -> usize {
    debug_assert!(node > 0);
    (node - 1) / 2
}

#[inline]
fn first_child(node: usize) -> usize { 2 * node + 1 }

/// Returns the offset of `node`'s slot on `side` in a heap of `len` items.
///
/// `node` must exist, i.e. `2 * node < len`.
#[inline]
pub(crate) fn slot(node: usize, side: Side, len: usize) -> usize {
    debug_assert!(2 * node < len);
    match side {
        Side::Min => 2 * node,
        Side::Max => cmp::min(2 * node + 1, len - 1),
    }
}

/// Swaps the two items of `node` if they are out of order.
#[inline]
pub(crate) fn order_node<T, C: Compare<T>>(v: &mut [T], node: usize, cmp: &C) {
    let lo = 2 * node;
    let hi = lo + 1;
    if hi < v.len() && cmp.compares_gt(&v[lo], &v[hi]) {
        v.swap(lo, hi);
    }
}

/// Moves the item at offset `pos` towards the root along `side` until its
/// parent no longer ranks below it.
pub(crate) fn sift_up<T, C: Compare<T>>(v: &mut [T], mut pos: usize, side: Side, cmp: &C) {
    let len = v.len();
    let mut node = pos / 2;
    while node > 0 {
        let up = parent(node);
        // Only the last node can be a half-node, so the parent is always full.
        let above = slot(up, side, len);
        if !side.outranks(cmp, &v[pos], &v[above]) {
            break;
        }
        v.swap(pos, above);
        pos = above;
        node = up;
    }
}

/// Moves the item in `node`'s `side` slot towards the leaves.
///
/// The subtree rooted at `node` must be a valid interval heap except for
/// the relation between that slot and the same-side slots below it, and
/// `node` itself must be ordered.
pub(crate) fn sift_down<T, C: Compare<T>>(v: &mut [T], mut node: usize, side: Side, cmp: &C) {
    let len = v.len();
    loop {
        let first = first_child(node);
        if 2 * first >= len {
            return; // leaf
        }

        // Pick the child whose value is most extreme on this side.
        let mut child = first;
        let second = first + 1;
        if 2 * second < len
            && side.outranks(cmp, &v[slot(second, side, len)], &v[slot(first, side, len)])
        {
            child = second;
        }

        let pos = slot(node, side, len);
        let below = slot(child, side, len);
        if !side.outranks(cmp, &v[below], &v[pos]) {
            return;
        }
        v.swap(pos, below);
        node = child;
        order_node(v, node, cmp);
    }
}

/// Restores the heap properties after an item has been appended to an
/// otherwise valid interval heap.
pub(crate) fn push_last<T, C: Compare<T>>(v: &mut [T], cmp: &C) {
    debug_assert!(!v.is_empty());
    let pos = v.len() - 1;
    let node = pos / 2;

    let (pos, side) = if pos % 2 == 1 {
        // The new item completes its node and only needs to climb the side
        // it ends up on.
        if cmp.compares_gt(&v[pos - 1], &v[pos]) {
            v.swap(pos - 1, pos);
            (pos - 1, Side::Min)
        } else {
            (pos, Side::Max)
        }
    } else if node == 0 {
        return;
    } else {
        // A half-node is both lo and hi, so it may violate either side but
        // never both at once.
        let up = parent(node);
        if cmp.compares_lt(&v[pos], &v[2 * up]) {
            (pos, Side::Min)
        } else if cmp.compares_gt(&v[pos], &v[2 * up + 1]) {
            (pos, Side::Max)
        } else {
            return;
        }
    };

    sift_up(v, pos, side, cmp);
}

/// Turns an arbitrary slice into an interval heap in linear time.
pub(crate) fn heapify<T, C: Compare<T>>(v: &mut [T], cmp: &C) {
    // A trailing half-node is a leaf and has nothing to order.
    for node in (0..v.len() / 2).rev() {
        order_node(v, node, cmp);
        sift_down(v, node, Side::Min, cmp);
        sift_down(v, node, Side::Max, cmp);
    }
}

/// Sorts a valid interval heap in ascending order, in place.
pub(crate) fn sort<T, C: Compare<T>>(v: &mut [T], cmp: &C) {
    let mut end = v.len();
    // Two items are already in order; one or none trivially so.
    while end > 2 {
        end -= 1;
        v.swap(1, end);
        sift_down(&mut v[..end], 0, Side::Max, cmp);
    }
}

/// Returns `true` if `v` satisfies every interval heap property.
pub(crate) fn is_heap<T, C: Compare<T>>(v: &[T], cmp: &C) -> bool {
    let len = v.len();
    (0..(len + 1) / 2).all(|node| {
        let lo = &v[slot(node, Side::Min, len)];
        let hi = &v[slot(node, Side::Max, len)];
        if !cmp.compares_le(lo, hi) {
            return false;
        }
        if node == 0 {
            return true;
        }
        let up = parent(node);
        cmp.compares_ge(lo, &v[2 * up]) && cmp.compares_le(hi, &v[2 * up + 1])
    })
}
