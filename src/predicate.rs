//! Ordering predicates.

use core::cmp::Ordering;

/// A comparison capability over `T`.
///
/// `lt` must implement a strict weak ordering for the sort to produce a sorted result. If it
/// doesn't, the resulting order is unspecified, but the range will still contain all of its
/// original elements.
pub trait Predicate<T: ?Sized> {
    /// Returns `true` if `a` is ordered strictly before `b`.
    fn lt(&mut self, a: &T, b: &T) -> bool;

    /// Returns `true` if `a` and `b` are equivalent.
    ///
    /// Defaults to incomparability under `lt`.
    fn eq(&mut self, a: &T, b: &T) -> bool {
        !self.lt(a, b) && !self.lt(b, a)
    }
}

impl<T: ?Sized, P: Predicate<T> + ?Sized> Predicate<T> for &mut P {
    #[inline]
    fn lt(&mut self, a: &T, b: &T) -> bool {
        (**self).lt(a, b)
    }

    #[inline]
    fn eq(&mut self, a: &T, b: &T) -> bool {
        (**self).eq(a, b)
    }
}

/// The natural ordering of the element type, `a < b` and `a == b`.
#[derive(Copy, Clone, Debug, Default)]
pub struct NaturalOrder;

impl<T: PartialOrd + ?Sized> Predicate<T> for NaturalOrder {
    #[inline]
    fn lt(&mut self, a: &T, b: &T) -> bool {
        a < b
    }

    #[inline]
    fn eq(&mut self, a: &T, b: &T) -> bool {
        a == b
    }
}

/// The reverse of the natural ordering, sorts from largest to smallest.
#[derive(Copy, Clone, Debug, Default)]
pub struct Descending;

impl<T: PartialOrd + ?Sized> Predicate<T> for Descending {
    #[inline]
    fn lt(&mut self, a: &T, b: &T) -> bool {
        b < a
    }

    #[inline]
    fn eq(&mut self, a: &T, b: &T) -> bool {
        a == b
    }
}

/// Adapts an `is_less` closure.
#[derive(Copy, Clone, Debug)]
pub struct LessThan<F>(pub F);

impl<T: ?Sized, F> Predicate<T> for LessThan<F>
where
    F: FnMut(&T, &T) -> bool,
{
    #[inline]
    fn lt(&mut self, a: &T, b: &T) -> bool {
        (self.0)(a, b)
    }
}

/// Adapts a three-way comparison closure, as used by `slice::sort_by`.
#[derive(Copy, Clone, Debug)]
pub struct ByOrdering<F>(pub F);

impl<T: ?Sized, F> Predicate<T> for ByOrdering<F>
where
    F: FnMut(&T, &T) -> Ordering,
{
    #[inline]
    fn lt(&mut self, a: &T, b: &T) -> bool {
        (self.0)(a, b) == Ordering::Less
    }

    #[inline]
    fn eq(&mut self, a: &T, b: &T) -> bool {
        (self.0)(a, b) == Ordering::Equal
    }
}
