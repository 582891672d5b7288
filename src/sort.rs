//! Top-down merge sort over owned sequences.
//!
//! Every entry point funnels into [`sort_by`], so any element type with a
//! three-way comparison gets the same algorithm.

use std::cmp::Ordering;
use log::debug;
use crate::merge::merge_by;

/// Sorts `v` in non-decreasing order. Stable.
pub fn sort<T: Ord>(v: Vec<T>) -> Vec<T> {
    sort_by(v, T::cmp)
}

/// Sorts `v` with the comparator `cmp`. Equal elements keep their input order.
pub fn sort_by<T, F>(v: Vec<T>, mut cmp: F) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    debug!("Sorting {} elements", v.len());
    sort_rec(v, &mut cmp)
}

/// Sorts `v` by the key extracted with `f`.
pub fn sort_by_key<T, K, F>(v: Vec<T>, mut f: F) -> Vec<T>
where
    K: Ord,
    F: FnMut(&T) -> K,
{
    sort_by(v, |a, b| f(a).cmp(&f(b)))
}

fn sort_rec<T, F>(mut v: Vec<T>, cmp: &mut F) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    if v.len() <= 1 {
        return v;
    }

    let right = v.split_off(v.len() / 2);
    let left = sort_rec(v, cmp);
    let right = sort_rec(right, cmp);
    merge_by(left, right, cmp)
}
