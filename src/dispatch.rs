//! Capability classification and strategy dispatch.
//!
//! Every range names one of the tag types below as its [`Forward::Category`]. The tag decides
//! at compile time which algorithm sorts the range, there is no runtime dispatch involved.

use crate::depth::depth_budget;
use crate::predicate::Predicate;
use crate::range::{Bidirectional, Forward, RandomAccess};

/// The traversal tier a range advertises.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Tier {
    Forward,
    Bidirectional,
    RandomAccess,
}

/// A traversal tier able to sort ranges of type `R`.
///
/// Implemented by the tag types, the bound on the impl is what ties a tag to the traversal
/// capability its algorithm needs.
pub trait Category<R: Forward + ?Sized> {
    const TIER: Tier;

    /// Sorts the whole of `range`.
    fn sort<P>(range: &mut R, is_less: &mut P)
    where
        P: Predicate<R::Item>;
}

/// Ranges sorted with comb sort.
#[derive(Copy, Clone, Debug)]
pub struct ForwardTag;

/// Ranges sorted with the step counting introsort.
#[derive(Copy, Clone, Debug)]
pub struct BidirectionalTag;

/// Ranges sorted with the offset based introsort.
#[derive(Copy, Clone, Debug)]
pub struct RandomAccessTag;

impl<R: Forward + ?Sized> Category<R> for ForwardTag {
    const TIER: Tier = Tier::Forward;

    fn sort<P>(range: &mut R, is_less: &mut P)
    where
        P: Predicate<R::Item>,
    {
        let len = range.len();
        if len < 2 {
            return;
        }

        crate::forward::sort(range, len, is_less);
    }
}

impl<R: Bidirectional + ?Sized> Category<R> for BidirectionalTag {
    const TIER: Tier = Tier::Bidirectional;

    fn sort<P>(range: &mut R, is_less: &mut P)
    where
        P: Predicate<R::Item>,
    {
        // The only full walk over the range, sub-range lengths are derived from step counts.
        let len = range.len();
        if len < 2 {
            return;
        }

        crate::bidirectional::sort(range, len, depth_budget(len), is_less);
    }
}

impl<R: RandomAccess + ?Sized> Category<R> for RandomAccessTag {
    const TIER: Tier = Tier::RandomAccess;

    fn sort<P>(range: &mut R, is_less: &mut P)
    where
        P: Predicate<R::Item>,
    {
        let len = range.len();
        if len < 2 {
            return;
        }

        crate::random_access::sort(range, len, depth_budget(len), is_less);
    }
}

/// Returns the tier `range` advertises.
#[inline]
pub fn classify<R: Forward + ?Sized>(_range: &R) -> Tier {
    <R::Category as Category<R>>::TIER
}

/// Sorts `range` with the algorithm matching its tier.
#[inline]
pub fn sort_with<R, P>(range: &mut R, mut predicate: P)
where
    R: Forward + ?Sized,
    P: Predicate<R::Item>,
{
    <R::Category as Category<R>>::sort(range, &mut predicate);
}
