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
use std::iter::FromIterator;

use compare::{natural, Compare, Natural};

use crate::iter::{Drain, IntoIter, Iter};
use crate::peek::PeekMut;
use crate::sift::{self, Side};

/// A double-ended priority queue implemented with an interval heap.
///
/// It is a logic error for an item to be modified in such a way that the
/// item's ordering relative to any other item, as determined by the heap's
/// comparator, changes while it is in the heap. This is normally only
/// possible through `Cell`, `RefCell`, global state, I/O, or unsafe code.
#[derive(Clone)]
pub struct IntervalHeap<T, C: Compare<T> = Natural<T>> {
    pub(crate) data: Vec<T>,
    pub(crate) cmp: C,
}

impl<T, C: Compare<T> + Default> Default for IntervalHeap<T, C> {
    #[inline]
    fn default() -> IntervalHeap<T, C> {
        Self::with_comparator(C::default())
    }
}

impl<T: Ord> IntervalHeap<T> {
    /// Returns an empty heap ordered according to the natural order of its items.
    ///
    /// # Examples
    ///
    /// ```
    /// use interval_heap::IntervalHeap;
    ///
    /// let heap = IntervalHeap::<u32>::new();
    /// assert!(heap.is_empty());
    /// ```
    pub fn new() -> IntervalHeap<T> {
        Self::with_comparator(natural())
    }

    /// Returns an empty heap with the given capacity and ordered according to the
    /// natural order of its items.
    ///
    /// # Examples
    ///
    /// ```
    /// use interval_heap::IntervalHeap;
    ///
    /// let heap = IntervalHeap::<u32>::with_capacity(5);
    /// assert!(heap.is_empty());
    /// assert!(heap.capacity() >= 5);
    /// ```
    pub fn with_capacity(capacity: usize) -> IntervalHeap<T> {
        Self::with_capacity_and_comparator(capacity, natural())
    }
}

impl<T: Ord> From<Vec<T>> for IntervalHeap<T> {
    /// Returns a heap containing all the items of the given vector and ordered
    /// according to the natural order of its items.
    ///
    /// # Examples
    ///
    /// ```
    /// use interval_heap::IntervalHeap;
    ///
    /// let heap = IntervalHeap::from(vec![5, 1, 6, 4]);
    /// assert_eq!(heap.len(), 4);
    /// assert_eq!(heap.min_max(), Some((&1, &6)));
    /// ```
    fn from(vec: Vec<T>) -> IntervalHeap<T> {
        Self::from_vec_and_comparator(vec, natural())
    }
}

impl<T, C: Compare<T>> IntervalHeap<T, C> {
    /// Returns an empty heap ordered according to the given comparator.
    ///
    /// # Examples
    ///
    /// ```
    /// use compare::{Compare, natural};
    /// use interval_heap::IntervalHeap;
    ///
    /// let mut heap = IntervalHeap::with_comparator(natural().rev());
    /// heap.push(5);
    /// heap.push(3);
    /// heap.push(8);
    /// assert_eq!(heap.min_max(), Some((&8, &3)));
    /// ```
    pub fn with_comparator(cmp: C) -> IntervalHeap<T, C> {
        IntervalHeap { data: Vec::new(), cmp }
    }

    /// Returns an empty heap with the given capacity and ordered according to the given
    /// comparator.
    pub fn with_capacity_and_comparator(capacity: usize, cmp: C) -> IntervalHeap<T, C> {
        IntervalHeap { data: Vec::with_capacity(capacity), cmp }
    }

    /// Returns a heap containing all the items of the given vector and ordered
    /// according to the given comparator.
    ///
    /// This takes `O(n)` time.
    pub fn from_vec_and_comparator(mut vec: Vec<T>, cmp: C) -> IntervalHeap<T, C> {
        sift::heapify(&mut vec, &cmp);
        let heap = IntervalHeap { data: vec, cmp };
        debug_assert!(heap.is_valid());
        heap
    }

    /// Returns a reference to the comparator ordering the heap.
    pub fn comparator(&self) -> &C {
        &self.cmp
    }

    /// Returns an iterator visiting all items in the heap in arbitrary order.
    pub fn iter(&self) -> Iter<T> {
        debug_assert!(self.is_valid());
        Iter(self.data.iter())
    }

    /// Returns a reference to the smallest item in the heap.
    ///
    /// Returns `None` if the heap is empty.
    pub fn min(&self) -> Option<&T> {
        debug_assert!(self.is_valid());
        self.data.first()
    }

    /// Returns a reference to the greatest item in the heap.
    ///
    /// Returns `None` if the heap is empty.
    pub fn max(&self) -> Option<&T> {
        debug_assert!(self.is_valid());
        self.data.get(1).or_else(|| self.data.first())
    }

    /// Returns references to the smallest and greatest items in the heap.
    ///
    /// Returns `None` if the heap is empty.
    pub fn min_max(&self) -> Option<(&T, &T)> {
        debug_assert!(self.is_valid());
        match self.data.as_slice() {
            [] => None,
            [only] => Some((only, only)),
            [min, max, ..] => Some((min, max)),
        }
    }

    /// Returns a guard giving mutable access to the smallest item in the heap.
    ///
    /// The heap is repaired when the guard is dropped. Returns `None` if the heap
    /// is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use interval_heap::IntervalHeap;
    ///
    /// let mut heap = IntervalHeap::from(vec![2, 1, 3]);
    /// if let Some(mut min) = heap.min_mut() {
    ///     *min = 5;
    /// }
    /// assert_eq!(heap.min_max(), Some((&2, &5)));
    /// ```
    pub fn min_mut(&mut self) -> Option<PeekMut<T, C>> {
        self.peek_mut(Side::Min)
    }

    /// Returns a guard giving mutable access to the greatest item in the heap.
    ///
    /// The heap is repaired when the guard is dropped. Returns `None` if the heap
    /// is empty.
    pub fn max_mut(&mut self) -> Option<PeekMut<T, C>> {
        self.peek_mut(Side::Max)
    }

    fn peek_mut(&mut self, side: Side) -> Option<PeekMut<T, C>> {
        debug_assert!(self.is_valid());
        if self.data.is_empty() {
            None
        } else {
            Some(PeekMut::new(self, side))
        }
    }

    /// Returns the number of items the heap can hold without reallocation.
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Reserves the minimum capacity for exactly `additional` more items to be inserted into the
    /// heap.
    ///
    /// Does nothing if the capacity is already sufficient.
    ///
    /// Note that the allocator may give the heap more space than it
    /// requests. Therefore capacity can not be relied upon to be precisely
    /// minimal. Prefer `reserve` if future insertions are expected.
    pub fn reserve_exact(&mut self, additional: usize) {
        self.data.reserve_exact(additional);
    }

    /// Reserves capacity for at least `additional` more items to be inserted into the heap.
    ///
    /// The heap may reserve more space to avoid frequent reallocations.
    pub fn reserve(&mut self, additional: usize) {
        self.data.reserve(additional);
    }

    /// Discards as much additional capacity from the heap as possible.
    pub fn shrink_to_fit(&mut self) {
        self.data.shrink_to_fit()
    }

    /// Removes the smallest item from the heap and returns it.
    ///
    /// Returns `None` if the heap was empty.
    pub fn pop_min(&mut self) -> Option<T> {
        if self.data.is_empty() {
            None
        } else {
            debug_assert!(self.is_valid());
            Some(self.remove_root(Side::Min))
        }
    }

    /// Removes the greatest item from the heap and returns it.
    ///
    /// Returns `None` if the heap was empty.
    pub fn pop_max(&mut self) -> Option<T> {
        if self.data.is_empty() {
            None
        } else {
            debug_assert!(self.is_valid());
            Some(self.remove_root(Side::Max))
        }
    }

    /// Removes the root item on `side`. The heap must not be empty.
    ///
    /// Apart from that root item, the heap must be valid.
    pub(crate) fn remove_root(&mut self, side: Side) -> T {
        let root = sift::slot(0, side, self.data.len());
        // The last item replaces the root. It lies within the root's interval,
        // so the root node stays ordered.
        let item = self.data.swap_remove(root);
        sift::sift_down(&mut self.data, 0, side, &self.cmp);
        debug_assert!(self.is_valid());
        item
    }

    /// Pushes an item onto the heap.
    pub fn push(&mut self, item: T) {
        debug_assert!(self.is_valid());
        self.data.push(item);
        sift::push_last(&mut self.data, &self.cmp);
        debug_assert!(self.is_valid());
    }

    /// Consumes the heap and returns its items as a vector in arbitrary order.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Consumes the heap and returns its items as a vector in sorted (ascending) order.
    pub fn into_sorted_vec(self) -> Vec<T> {
        let mut vec = self.data;
        sift::sort(&mut vec, &self.cmp);
        vec
    }

    /// Returns the number of items in the heap.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the heap contains no items.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Removes all items from the heap.
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Clears the heap, returning an iterator over the removed items in arbitrary order.
    pub fn drain(&mut self) -> Drain<T> {
        Drain(self.data.drain(..))
    }

    /// Checks if the heap is valid.
    ///
    /// The heap is valid if every node's lo item is less than or equal to its hi
    /// item, and every node's interval lies within its parent's interval. A
    /// trailing half-node's only item counts as both lo and hi.
    pub(crate) fn is_valid(&self) -> bool {
        sift::is_heap(&self.data, &self.cmp)
    }
}

impl<T: Debug, C: Compare<T>> Debug for IntervalHeap<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self).finish()
    }
}

impl<T, C: Compare<T> + Default> FromIterator<T> for IntervalHeap<T, C> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> IntervalHeap<T, C> {
        IntervalHeap::from_vec_and_comparator(iter.into_iter().collect(), C::default())
    }
}

impl<T, C: Compare<T>> Extend<T> for IntervalHeap<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        self.reserve(lower);
        for item in iter {
            self.push(item);
        }
    }
}

impl<'a, T: 'a + Copy, C: Compare<T>> Extend<&'a T> for IntervalHeap<T, C> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T, C: Compare<T>> IntoIterator for IntervalHeap<T, C> {
    type Item = T;
    type IntoIter = IntoIter<T>;
    fn into_iter(self) -> IntoIter<T> {
        IntoIter(self.data.into_iter())
    }
}

impl<'a, T, C: Compare<T>> IntoIterator for &'a IntervalHeap<T, C> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;
    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}
