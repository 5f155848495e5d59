//! Linear range algorithms. The backward searches need a bidirectional range, everything else
//! works on every tier.

use crate::predicate::Predicate;
use crate::range::{Bidirectional, Forward};

/// Returns `true` if no element is ordered before its predecessor.
pub fn is_sorted<R, P>(range: &R, mut is_less: P) -> bool
where
    R: Forward + ?Sized,
    P: Predicate<R::Item>,
{
    let last = range.end();
    let mut prev = range.start();
    if prev == last {
        return true;
    }

    let mut cur = range.next(prev);
    while cur != last {
        if is_less.lt(range.get(cur), range.get(prev)) {
            return false;
        }

        prev = cur;
        cur = range.next(cur);
    }

    true
}

/// Position of the first element equivalent to `value`.
pub fn find<R, P>(range: &R, value: &R::Item, mut predicate: P) -> Option<R::Pos>
where
    R: Forward + ?Sized,
    P: Predicate<R::Item>,
{
    let last = range.end();
    let mut pos = range.start();

    while pos != last {
        if predicate.eq(range.get(pos), value) {
            return Some(pos);
        }
        pos = range.next(pos);
    }

    None
}

/// Position of the first element `pred` accepts.
pub fn find_if<R, F>(range: &R, mut pred: F) -> Option<R::Pos>
where
    R: Forward + ?Sized,
    F: FnMut(&R::Item) -> bool,
{
    let last = range.end();
    let mut pos = range.start();

    while pos != last {
        if pred(range.get(pos)) {
            return Some(pos);
        }
        pos = range.next(pos);
    }

    None
}

/// Position of the last element equivalent to `value`.
pub fn rfind<R, P>(range: &R, value: &R::Item, mut predicate: P) -> Option<R::Pos>
where
    R: Bidirectional + ?Sized,
    P: Predicate<R::Item>,
{
    rfind_if(range, |item| predicate.eq(item, value))
}

/// Position of the last element `pred` accepts, searching from the back.
pub fn rfind_if<R, F>(range: &R, mut pred: F) -> Option<R::Pos>
where
    R: Bidirectional + ?Sized,
    F: FnMut(&R::Item) -> bool,
{
    let first = range.start();
    let mut pos = range.end();

    while pos != first {
        pos = range.prev(pos);
        if pred(range.get(pos)) {
            return Some(pos);
        }
    }

    None
}

/// Calls `f` on every element in order and hands `f` back.
pub fn for_each<R, F>(range: &R, mut f: F) -> F
where
    R: Forward + ?Sized,
    F: FnMut(&R::Item),
{
    let last = range.end();
    let mut pos = range.start();

    while pos != last {
        f(range.get(pos));
        pos = range.next(pos);
    }

    f
}

/// Position of the first smallest element, `None` for an empty range.
pub fn min_element<R, P>(range: &R, mut is_less: P) -> Option<R::Pos>
where
    R: Forward + ?Sized,
    P: Predicate<R::Item>,
{
    let last = range.end();
    let mut best = range.start();
    if best == last {
        return None;
    }

    let mut pos = range.next(best);
    while pos != last {
        if is_less.lt(range.get(pos), range.get(best)) {
            best = pos;
        }
        pos = range.next(pos);
    }

    Some(best)
}

/// Position of the first largest element, `None` for an empty range.
pub fn max_element<R, P>(range: &R, mut is_less: P) -> Option<R::Pos>
where
    R: Forward + ?Sized,
    P: Predicate<R::Item>,
{
    let last = range.end();
    let mut best = range.start();
    if best == last {
        return None;
    }

    let mut pos = range.next(best);
    while pos != last {
        if is_less.lt(range.get(best), range.get(pos)) {
            best = pos;
        }
        pos = range.next(pos);
    }

    Some(best)
}

/// The larger of `a` and `b`, `a` if they are equivalent.
#[inline]
pub fn max2<T: PartialOrd>(a: T, b: T) -> T {
    if a < b {
        b
    } else {
        a
    }
}

/// The smaller of `a` and `b`, `b` if they are equivalent.
#[inline]
pub fn min2<T: PartialOrd>(a: T, b: T) -> T {
    if a < b {
        a
    } else {
        b
    }
}

/// The largest of one or more values.
///
/// `max!(a, b, c)` folds from the right, `max2(a, max2(b, c))`.
#[macro_export]
macro_rules! max {
    ($x:expr $(,)?) => {
        $x
    };
    ($x:expr, $($rest:expr),+ $(,)?) => {
        $crate::algorithm::max2($x, $crate::max!($($rest),+))
    };
}

/// The smallest of one or more values.
#[macro_export]
macro_rules! min {
    ($x:expr $(,)?) => {
        $x
    };
    ($x:expr, $($rest:expr),+ $(,)?) => {
        $crate::algorithm::min2($x, $crate::min!($($rest),+))
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::list::List;
    use crate::predicate::{Descending, NaturalOrder};
    use crate::range::{BidirectionalView, ForwardView};

    #[test]
    fn sortedness() {
        assert!(is_sorted(&[] as &[i32], NaturalOrder));
        assert!(is_sorted(&[1][..], NaturalOrder));
        assert!(is_sorted(&[1, 1, 2, 3][..], NaturalOrder));
        assert!(!is_sorted(&[1, 3, 2][..], NaturalOrder));
        assert!(is_sorted(&[3, 2, 2, 1][..], Descending));
    }

    #[test]
    fn find_and_extremes() {
        let mut v = [4, 9, 1, 9, 1, 7];
        let view = ForwardView::new(&mut v);

        assert_eq!(find(&view, &9, NaturalOrder), Some(1));
        assert_eq!(find(&view, &5, NaturalOrder), None);
        assert_eq!(min_element(&view, NaturalOrder), Some(2));
        assert_eq!(max_element(&view, NaturalOrder), Some(1));

        assert_eq!(min_element(&[] as &[i32], NaturalOrder), None);
    }

    #[test]
    fn searches_from_both_ends() {
        let mut v = [4, 9, 1, 9, 1, 7];

        let view = ForwardView::new(&mut v);
        assert_eq!(find_if(&view, |x| *x > 5), Some(1));
        assert_eq!(find_if(&view, |x| *x > 9), None);

        let view = BidirectionalView::new(&mut v);
        assert_eq!(rfind(&view, &9, NaturalOrder), Some(3));
        assert_eq!(rfind(&view, &4, NaturalOrder), Some(0));
        assert_eq!(rfind(&view, &5, NaturalOrder), None);
        assert_eq!(rfind_if(&view, |x| *x < 5), Some(4));
        assert_eq!(rfind_if(&view, |x| *x > 9), None);

        assert_eq!(rfind(&v[..], &1, NaturalOrder), Some(4));
        assert_eq!(rfind_if(&[] as &[i32], |_| true), None);
    }

    #[test]
    fn list_searches() {
        let mut list: List<&str> = ["b", "a", "c", "a"].into_iter().collect();
        // Arena order no longer matches link order.
        list.push_front("a");

        assert_eq!(find(&list, &"a", NaturalOrder), Some(4));
        assert_eq!(rfind(&list, &"a", NaturalOrder), Some(3));
        assert_eq!(rfind_if(&list, |s| *s != "a"), Some(2));
        assert_eq!(find_if(&list, |s| *s == "c"), Some(2));

        let mut seen = Vec::new();
        for_each(&list, |s| seen.push(*s));
        assert_eq!(seen, ["a", "b", "a", "c", "a"]);
    }

    #[test]
    fn max_is_not_min() {
        // Every ordering of three distinct values and some ties.
        let triples = [
            (1, 2, 3),
            (1, 3, 2),
            (2, 1, 3),
            (2, 3, 1),
            (3, 1, 2),
            (3, 2, 1),
            (5, 5, 1),
            (1, 5, 5),
            (7, 7, 7),
        ];

        for (a, b, c) in triples {
            let pairwise_max = std::cmp::max(std::cmp::max(a, b), c);
            let pairwise_min = std::cmp::min(std::cmp::min(a, b), c);

            assert_eq!(max!(a, b, c), pairwise_max);
            assert_eq!(min!(a, b, c), pairwise_min);
        }

        assert_eq!(max!(4), 4);
        assert_eq!(max!(-3, 8, 1, 8, 2), 8);
        assert_eq!(min!(-3, 8, 1, 8, 2), -3);
    }
}
