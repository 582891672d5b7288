use std::cmp::Ordering;
use std::fmt::Debug;

pub fn is_sorted<T: Ord>(arr: &[T]) -> bool {
    is_sorted_by(arr, T::cmp)
}

pub fn is_sorted_by<T, F>(arr: &[T], mut cmp: F) -> bool
where
    F: FnMut(&T, &T) -> Ordering,
{
    arr.windows(2).all(|w| cmp(&w[0], &w[1]) != Ordering::Greater)
}

/// Panics at the first adjacent pair that is out of order.
#[track_caller]
pub fn assert_sorted<T: Ord + Debug>(arr: &[T]) {
    for i in 1..arr.len() {
        assert!(
            arr[i - 1] <= arr[i],
            "Array not sorted! {:?} (i={}) > {:?} (i={})",
            arr[i - 1],
            i - 1,
            arr[i],
            i
        );
    }
}

/// Whether `a` and `b` hold the same multiset of elements.
pub fn is_permutation<T: Ord + Clone>(a: &[T], b: &[T]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut a = a.to_vec();
    let mut b = b.to_vec();
    a.sort_unstable();
    b.sort_unstable();
    a == b
}
