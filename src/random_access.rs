//! Introsort for ranges with O(1) offsets.
//!
//! Positions are handled as offsets from the start of the range and translated with
//! [`RandomAccess::offset`].

use crate::median::median3_by;
use crate::predicate::Predicate;
use crate::range::RandomAccess;

/// Sorts `range` of `len` elements.
///
/// Quicksort stops subdividing once a sub-range holds `threshold` or fewer elements, the final
/// insertion sort pass puts those in order.
pub(crate) fn sort<R, P>(range: &mut R, len: usize, threshold: usize, is_less: &mut P)
where
    R: RandomAccess + ?Sized,
    P: Predicate<R::Item>,
{
    let base = range.start();

    quicksort(range, base, 0, len, threshold, is_less);
    insertion_sort(range, base, len, is_less);
}

#[inline(always)]
fn at<R: RandomAccess + ?Sized>(range: &R, base: R::Pos, offset: usize) -> &R::Item {
    range.get(range.offset(base, offset))
}

/// Sorts the offsets `lo..hi` recursively.
fn quicksort<R, P>(
    range: &mut R,
    base: R::Pos,
    mut lo: usize,
    mut hi: usize,
    threshold: usize,
    is_less: &mut P,
) where
    R: RandomAccess + ?Sized,
    P: Predicate<R::Item>,
{
    #[cfg(test)]
    let _frame = crate::stack_depth::enter();

    loop {
        if hi - lo <= threshold.max(1) {
            return;
        }

        let (left_end, right_start) = partition(range, base, lo, hi, is_less);

        // Recurse into the shorter side and continue with the longer one, the stack depth stays
        // within log2(len) even if every pivot is bad.
        if left_end - lo < hi - right_start {
            quicksort(range, base, lo, left_end, threshold, is_less);
            lo = right_start;
        } else {
            quicksort(range, base, right_start, hi, threshold, is_less);
            hi = left_end;
        }
    }
}

/// Hoare partition of the offsets `lo..hi` around the median of the first, middle and last
/// element. Returns the end of the left part and the start of the right part.
///
/// The pivot is tracked by position, if it gets swapped the position follows it.
fn partition<R, P>(
    range: &mut R,
    base: R::Pos,
    lo: usize,
    hi: usize,
    is_less: &mut P,
) -> (usize, usize)
where
    R: RandomAccess + ?Sized,
    P: Predicate<R::Item>,
{
    let last = hi - 1;
    let mid = lo + (last - lo) / 2;

    let mut pivot = median3_by(lo, mid, last, |a, b| {
        is_less.lt(at(range, base, a), at(range, base, b))
    });

    let mut i = lo;
    let mut j = last;

    loop {
        // The bounds checks only ever trigger if `is_less` is not a strict weak ordering. With a
        // valid ordering the pivot value stops both scans.
        while i < last && is_less.lt(at(range, base, i), at(range, base, pivot)) {
            i += 1;
        }
        while j > lo && is_less.lt(at(range, base, pivot), at(range, base, j)) {
            j -= 1;
        }

        if i >= j {
            break;
        }

        let pos_i = range.offset(base, i);
        let pos_j = range.offset(base, j);
        range.swap(pos_i, pos_j);

        if pivot == i {
            pivot = j;
        } else if pivot == j {
            pivot = i;
        }

        i += 1;
        j -= 1;
    }

    // Valid orderings cross by at most one position, never let the parts overlap.
    (i, (j + 1).max(i))
}

fn insertion_sort<R, P>(range: &mut R, base: R::Pos, len: usize, is_less: &mut P)
where
    R: RandomAccess + ?Sized,
    P: Predicate<R::Item>,
{
    for i in 1..len {
        let mut j = i;

        while j > 0 {
            let prev = range.offset(base, j - 1);
            let cur = range.offset(base, j);

            if !is_less.lt(range.get(cur), range.get(prev)) {
                break;
            }

            range.swap(prev, cur);
            j -= 1;
        }
    }
}
