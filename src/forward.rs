//! Comb sort, the only strategy available without stepping back.

use crate::predicate::Predicate;
use crate::range::Forward;

#[inline]
fn shrink(gap: usize) -> usize {
    // gap * 10 / 13 without the intermediate product.
    (gap / 13 * 10 + gap % 13 * 10 / 13).max(1)
}

/// Sorts `range` of `len` elements by compare-and-swap passes over a shrinking gap. Passes with
/// gap 1 repeat until one of them performs no swap.
pub(crate) fn sort<R, P>(range: &mut R, len: usize, is_less: &mut P)
where
    R: Forward + ?Sized,
    P: Predicate<R::Item>,
{
    let first = range.start();
    let last = range.end();

    let mut gap = shrink(len);
    let mut unit_passes = 0;

    loop {
        let mut swapped = false;

        let mut i = first;
        let mut k = range.advance(first, gap);

        while k != last {
            if is_less.lt(range.get(k), range.get(i)) {
                range.swap(i, k);
                swapped = true;
            }

            i = range.next(i);
            k = range.next(k);
        }

        if gap == 1 {
            // A single gap-1 pass does not sort in general, keep passing until nothing moves.
            unit_passes += 1;

            // With gap 1 every pass settles at least one more element at the end, len passes
            // always suffice for a strict weak ordering.
            if !swapped || unit_passes >= len {
                break;
            }
        }

        gap = shrink(gap);
    }
}
