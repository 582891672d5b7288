use std::cmp::Ordering;
use log::{debug, trace};
use crate::base_case::insertion_sort_by;
use crate::config::THRESHOLD;
use crate::merge::merge_into_by;

/// Merge sort over a borrowed slice with one reusable scratch buffer.
///
/// The scratch buffer never holds more than `arr.len()` elements, so sorting
/// needs O(n) extra space in total. Keep a sorter around to sort many inputs
/// without reallocating.
#[derive(Debug, Clone)]
pub struct MergeSorter<T> {
    scratch: Vec<T>,
}

impl<T> Default for MergeSorter<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> MergeSorter<T> {
    pub fn new() -> Self {
        MergeSorter { scratch: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        MergeSorter { scratch: Vec::with_capacity(capacity) }
    }

    /// Drops buffered elements, keeps the allocation.
    pub fn clear(&mut self) {
        self.scratch.clear();
    }

    pub fn capacity(&self) -> usize {
        self.scratch.capacity()
    }
}

impl<T: Clone> MergeSorter<T> {
    pub fn sort(&mut self, arr: &mut [T])
    where
        T: Ord,
    {
        self.sort_by(arr, T::cmp);
    }

    /// Sorts `arr` in place with `cmp`. Stable.
    pub fn sort_by<F>(&mut self, arr: &mut [T], mut cmp: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        debug!("Sorting {} elements, scratch capacity {}", arr.len(), self.scratch.capacity());
        self.scratch.reserve(arr.len());
        self.sort_rec(arr, &mut cmp);
        self.clear();
    }

    fn sort_rec<F>(&mut self, arr: &mut [T], cmp: &mut F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        if arr.len() <= THRESHOLD {
            trace!("Base case of length {}", arr.len());
            insertion_sort_by(arr, cmp);
            return;
        }

        let mid = arr.len() / 2;
        self.sort_rec(&mut arr[..mid], cmp);
        self.sort_rec(&mut arr[mid..], cmp);

        // halves already in order
        if cmp(&arr[mid - 1], &arr[mid]) != Ordering::Greater {
            return;
        }

        self.scratch.clear();
        let (left, right) = arr.split_at(mid);
        merge_into_by(left, right, &mut self.scratch, cmp);
        arr.clone_from_slice(&self.scratch);
    }
}
