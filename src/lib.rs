//! In-place sorting that picks its algorithm from the traversal capability of the range.
//!
//! - Random access ranges, e.g. slices, use an introsort built on O(1) offsets.
//! - Bidirectional ranges, e.g. [`List`], use the same introsort, deriving sub-range lengths
//!   from the steps the partition takes instead of walking distances.
//! - Forward ranges, e.g. [`ForwardList`], use comb sort.
//!
//! The choice happens at compile time through [`Forward::Category`].
//!
//! ```ignore
//! let mut v = [5, 3, 4, 1, 2];
//! tiersort::sort(&mut v[..]);
//! assert_eq!(v, [1, 2, 3, 4, 5]);
//! ```

use core::cmp::Ordering;

pub mod algorithm;
pub mod depth;
pub mod dispatch;
pub mod forward_list;
pub mod list;
pub mod median;
pub mod predicate;
pub mod range;

mod bidirectional;
mod forward;
mod random_access;

#[cfg(test)]
mod stack_depth;

pub use depth::depth_budget;
pub use dispatch::{
    classify, sort_with, BidirectionalTag, Category, ForwardTag, RandomAccessTag, Tier,
};
pub use forward_list::ForwardList;
pub use list::List;
pub use median::median_of_three;
pub use predicate::{ByOrdering, Descending, LessThan, NaturalOrder, Predicate};
pub use range::{Bidirectional, BidirectionalView, Forward, ForwardView, RandomAccess};

/// Sorts `range` in ascending order. The sort is not stable.
#[inline]
pub fn sort<R>(range: &mut R)
where
    R: Forward + ?Sized,
    R::Item: Ord,
{
    sort_with(range, NaturalOrder);
}

/// Sorts `range` with a three-way comparison function. The sort is not stable.
#[inline]
pub fn sort_by<R, F>(range: &mut R, compare: F)
where
    R: Forward + ?Sized,
    F: FnMut(&R::Item, &R::Item) -> Ordering,
{
    sort_with(range, ByOrdering(compare));
}

/// Sorts `range` with an `is_less` function that returns `true` if the first argument is
/// ordered strictly before the second. The sort is not stable.
#[inline]
pub fn sort_by_less<R, F>(range: &mut R, is_less: F)
where
    R: Forward + ?Sized,
    F: FnMut(&R::Item, &R::Item) -> bool,
{
    sort_with(range, LessThan(is_less));
}
