use std::cmp::Ordering;
use log::trace;

/// Merges two sorted runs into one, taking from `left` on ties.
pub fn merge_by<T, F>(left: Vec<T>, right: Vec<T>, cmp: &mut F) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    trace!("Merging runs of length {} and {}", left.len(), right.len());
    let mut output = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    loop {
        let take_left = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => cmp(l, r) != Ordering::Greater,
            _ => break,
        };
        let next = if take_left { left.next() } else { right.next() };
        output.extend(next);
    }

    // at most one of these is non-empty
    output.extend(left);
    output.extend(right);
    output
}

/// Appends the stable merge of two sorted slices to `out`.
pub fn merge_into_by<T, F>(left: &[T], right: &[T], out: &mut Vec<T>, cmp: &mut F)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    out.reserve(left.len() + right.len());
    let (mut i, mut j) = (0, 0);

    while i < left.len() && j < right.len() {
        if cmp(&left[i], &right[j]) != Ordering::Greater {
            out.push(left[i].clone());
            i += 1;
        } else {
            out.push(right[j].clone());
            j += 1;
        }
    }

    out.extend_from_slice(&left[i..]);
    out.extend_from_slice(&right[j..]);
}
