// Copyright 2015 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::fmt::{self, Debug};
use std::ops::{Deref, DerefMut};

use compare::{Compare, Natural};

use crate::heap::IntervalHeap;
use crate::sift::{self, Side};

/// A guard giving mutable access to the smallest or greatest item of an
/// `IntervalHeap`.
///
/// Acquire through [`IntervalHeap::min_mut`](struct.IntervalHeap.html#method.min_mut) or
/// [`IntervalHeap::max_mut`](struct.IntervalHeap.html#method.max_mut). The heap is
/// repaired when the guard goes out of scope.
pub struct PeekMut<'a, T: 'a, C: 'a + Compare<T> = Natural<T>> {
    heap: &'a mut IntervalHeap<T, C>,
    side: Side,
    // Cleared once the peeked item has been popped.
    dirty: bool,
}

impl<'a, T: 'a, C: 'a + Compare<T>> PeekMut<'a, T, C> {
    /// The heap must not be empty.
    pub(crate) fn new(heap: &'a mut IntervalHeap<T, C>, side: Side) -> PeekMut<'a, T, C> {
        debug_assert!(!heap.is_empty());
        PeekMut { heap, side, dirty: true }
    }

    /// Removes the peeked item from the heap and returns it, including any
    /// modifications made through the guard.
    pub fn pop(mut this: PeekMut<'a, T, C>) -> T {
        this.dirty = false;
        this.heap.remove_root(this.side)
    }

    fn root(&self) -> usize {
        sift::slot(0, self.side, self.heap.data.len())
    }

    fn repair(&mut self) {
        let heap = &mut *self.heap;
        // A modified item may have crossed the other end of the root interval.
        sift::order_node(&mut heap.data, 0, &heap.cmp);
        sift::sift_down(&mut heap.data, 0, self.side, &heap.cmp);
        debug_assert!(heap.is_valid());
    }
}

impl<'a, T: 'a, C: 'a + Compare<T>> Drop for PeekMut<'a, T, C> {
    fn drop(&mut self) {
        if self.dirty {
            self.repair();
        }
    }
}

impl<'a, T: 'a, C: 'a + Compare<T>> Deref for PeekMut<'a, T, C> {
    type Target = T;
    fn deref(&self) -> &T {
        &self.heap.data[self.root()]
    }
}

impl<'a, T: 'a, C: 'a + Compare<T>> DerefMut for PeekMut<'a, T, C> {
    fn deref_mut(&mut self) -> &mut T {
        let root = self.root();
        &mut self.heap.data[root]
    }
}

impl<'a, T: 'a + Debug, C: 'a + Compare<T>> Debug for PeekMut<'a, T, C> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_tuple("PeekMut").field(&**self).finish()
    }
}

#[cfg(test)]
mod test {
    use crate::{IntervalHeap, PeekMut};

    #[test]
    fn test_pop_returns_modified_item() {
        let mut heap = IntervalHeap::from(vec![1, 9, 4, 6, 5]);
        {
            let mut min = heap.min_mut().unwrap();
            *min = 7;
            assert_eq!(PeekMut::pop(min), 7);
        }
        assert_eq!(heap.len(), 4);
        assert_eq!(heap.into_sorted_vec(), [4, 5, 6, 9]);
    }

    #[test]
    fn test_unmodified_guard_keeps_heap() {
        let mut heap = IntervalHeap::from(vec![3, 8, 5]);
        let before = heap.clone().into_vec();
        assert_eq!(heap.max_mut().map(|max| *max), Some(8));
        assert_eq!(heap.into_vec(), before);
    }

    #[test]
    fn test_single_item() {
        let mut heap = IntervalHeap::from(vec![4]);
        *heap.max_mut().unwrap() = 2;
        assert_eq!(heap.min_max(), Some((&2, &2)));
        assert_eq!(PeekMut::pop(heap.max_mut().unwrap()), 2);
        assert!(heap.is_empty());
    }

    #[test]
    fn test_debug() {
        let mut heap = IntervalHeap::from(vec![3, 1]);
        assert_eq!(format!("{:?}", heap.max_mut().unwrap()), "PeekMut(3)");
    }
}
