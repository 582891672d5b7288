use std::cmp::Ordering;

/// Stable insertion sort. An element only moves past elements strictly greater than it.
pub fn insertion_sort_by<T, F>(arr: &mut [T], cmp: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    for j in 1..arr.len() {
        let mut i: usize = 0;
        while i < j && cmp(&arr[i], &arr[j]) != Ordering::Greater {
            i += 1;
        }
        arr[i..=j].rotate_right(1);
    }
}
