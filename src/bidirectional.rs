//! Introsort for ranges that can only step forward and back.
//!
//! Without O(1) offsets every distance is a walk, so lengths are never recomputed. The caller
//! provides the length once, the partition counts the steps each cursor takes, and those counts
//! are the lengths of the two parts.

use crate::median::median3_by;
use crate::predicate::Predicate;
use crate::range::Bidirectional;

/// Sorts `range` of `len` elements.
///
/// Quicksort stops subdividing once a sub-range holds `threshold` or fewer elements, the final
/// insertion sort pass puts those in order.
pub(crate) fn sort<R, P>(range: &mut R, len: usize, threshold: usize, is_less: &mut P)
where
    R: Bidirectional + ?Sized,
    P: Predicate<R::Item>,
{
    let first = range.start();
    let last = range.end();

    quicksort(range, first, last, len, threshold, is_less);
    insertion_sort(range, first, last, is_less);
}

struct Split<Pos> {
    left_end: Pos,
    left_len: usize,
    right_start: Pos,
    right_len: usize,
}

fn quicksort<R, P>(
    range: &mut R,
    mut first: R::Pos,
    mut last: R::Pos,
    mut len: usize,
    threshold: usize,
    is_less: &mut P,
) where
    R: Bidirectional + ?Sized,
    P: Predicate<R::Item>,
{
    #[cfg(test)]
    let _frame = crate::stack_depth::enter();

    loop {
        if len <= threshold.max(1) {
            return;
        }

        let split = partition(range, first, last, len, is_less);

        // Shorter side first, see the random access version.
        if split.left_len < split.right_len {
            quicksort(range, first, split.left_end, split.left_len, threshold, is_less);
            first = split.right_start;
            len = split.right_len;
        } else {
            quicksort(range, split.right_start, last, split.right_len, threshold, is_less);
            last = split.left_end;
            len = split.left_len;
        }
    }
}

fn partition<R, P>(
    range: &mut R,
    first: R::Pos,
    last: R::Pos,
    len: usize,
    is_less: &mut P,
) -> Split<R::Pos>
where
    R: Bidirectional + ?Sized,
    P: Predicate<R::Item>,
{
    // Offset of the last element.
    let span = len - 1;

    let mut i = first;
    let mut j = range.prev(last);

    let mid = range.advance(first, span / 2);
    let mut pivot = median3_by(i, mid, j, |a, b| is_less.lt(range.get(a), range.get(b)));

    // i sits at offset i_steps, j at offset span - j_steps.
    let mut i_steps = 0;
    let mut j_steps = 0;

    loop {
        while i_steps < span && is_less.lt(range.get(i), range.get(pivot)) {
            i = range.next(i);
            i_steps += 1;
        }
        while j_steps < span && is_less.lt(range.get(pivot), range.get(j)) {
            j = range.prev(j);
            j_steps += 1;
        }

        // The cursors met.
        if i_steps + j_steps >= span {
            break;
        }

        range.swap(i, j);

        if pivot == i {
            pivot = j;
        } else if pivot == j {
            pivot = i;
        }

        i = range.next(i);
        j = range.prev(j);
        i_steps += 1;
        j_steps += 1;
    }

    if i_steps + j_steps <= len {
        Split {
            left_end: i,
            left_len: i_steps,
            right_start: range.next(j),
            right_len: j_steps,
        }
    } else {
        // Only reachable if `is_less` is not a strict weak ordering, keep the parts disjoint.
        Split {
            left_end: i,
            left_len: i_steps,
            right_start: i,
            right_len: len - i_steps,
        }
    }
}

fn insertion_sort<R, P>(range: &mut R, first: R::Pos, last: R::Pos, is_less: &mut P)
where
    R: Bidirectional + ?Sized,
    P: Predicate<R::Item>,
{
    if first == last {
        return;
    }

    let mut i = range.next(first);

    while i != last {
        let mut j = i;

        while j != first {
            let prev = range.prev(j);

            if !is_less.lt(range.get(j), range.get(prev)) {
                break;
            }

            range.swap(prev, j);
            j = prev;
        }

        i = range.next(i);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::depth::depth_budget;
    use crate::predicate::{LessThan, NaturalOrder};
    use crate::range::{BidirectionalView, Forward};
    use crate::stack_depth;

    fn adversarial_inputs(len: usize) -> Vec<Vec<u32>> {
        let len32 = len as u32;
        let tooth = len32 / len32.ilog2();

        vec![
            (0..len32).map(|i| if i < len32 / 2 { i } else { len32 - i }).collect(),
            (0..len32).map(|i| i % tooth).collect(),
            (0..len32).map(|i| tooth - i % tooth).collect(),
            (0..len32).rev().collect(),
        ]
    }

    #[test]
    fn step_counts_are_part_lengths() {
        let mut v = [7, 2, 9, 4, 5, 1, 8, 3, 6, 0];
        let len = v.len();

        let mut view = BidirectionalView::new(&mut v);
        let (first, last) = (view.start(), view.end());
        let split = partition(&mut view, first, last, len, &mut NaturalOrder);

        // Positions of the view are plain offsets.
        assert_eq!(split.left_end, split.left_len);
        assert_eq!(split.right_start, len - split.right_len);
        assert!(split.left_end <= split.right_start);

        let max_left = v[..split.left_end].iter().max().copied().unwrap_or(i32::MIN);
        let min_right = v[split.right_start..].iter().min().copied().unwrap_or(i32::MAX);
        assert!(max_left <= min_right, "{v:?}");
    }

    #[test]
    fn matches_random_access_permutation() {
        // Same pivots and same partition scheme, so even the intermediate permutation before
        // the insertion sort pass is identical. Checked via a key with ties.
        let input: Vec<(i32, usize)> = [5, 1, 5, 3, 1, 9, 3, 5, 0, 2, 2, 7, 1, 8, 5, 5]
            .iter()
            .enumerate()
            .map(|(idx, val)| (*val, idx))
            .collect();
        let len = input.len();
        let mut by_key = LessThan(|a: &(i32, usize), b: &(i32, usize)| a.0 < b.0);

        let mut a = input.clone();
        crate::random_access::sort(&mut a[..], len, 2, &mut by_key);

        let mut b = input;
        sort(&mut BidirectionalView::new(&mut b), len, 2, &mut by_key);

        assert_eq!(a, b);
    }

    #[test]
    fn recursion_depth_is_logarithmic() {
        for len in [1_000, 4_096, 10_000] {
            let max_depth = (len as f64).log2() as usize + 1;

            for (threshold, mut v) in adversarial_inputs(len)
                .into_iter()
                .flat_map(|v| [(depth_budget(len), v.clone()), (1, v)])
            {
                stack_depth::take_deepest();
                sort(&mut BidirectionalView::new(&mut v), len, threshold, &mut NaturalOrder);

                let depth = stack_depth::take_deepest();
                assert!(depth <= max_depth, "len {len}: depth {depth}");
                assert!(v.windows(2).all(|w| w[0] <= w[1]));
            }
        }
    }
}
