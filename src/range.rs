//! Range descriptors, the traversal capabilities a sort can rely on.
//!
//! A range describes the half-open interval `[start(), end())` over some mutable storage. The
//! storage itself is accessed through positions, `end()` is never dereferenced.
//!
//! The three tiers form a hierarchy, `RandomAccess: Bidirectional: Forward`. Which algorithm is
//! used is not decided by the traits that happen to be implemented, but by the tier a range
//! advertises via [`Forward::Category`]. This allows a type to advertise a lower tier than it
//! could support, see [`BidirectionalView`] and [`ForwardView`].

use crate::dispatch::{BidirectionalTag, Category, ForwardTag, RandomAccessTag};

/// Forward-only traversal, O(1) step to the next position.
pub trait Forward {
    type Item;

    /// A position inside the range, or the one-past-the-end position.
    type Pos: Copy + Eq;

    /// The tier this range advertises.
    type Category: Category<Self>;

    fn start(&self) -> Self::Pos;

    fn end(&self) -> Self::Pos;

    /// The position after `pos`. `pos` must not be `end()`.
    fn next(&self, pos: Self::Pos) -> Self::Pos;

    /// `pos` must not be `end()`.
    fn get(&self, pos: Self::Pos) -> &Self::Item;

    /// Swaps the elements at `a` and `b`. Positions stay valid, they now refer to the other
    /// element.
    fn swap(&mut self, a: Self::Pos, b: Self::Pos);

    /// Steps `count` times forward.
    #[inline]
    fn advance(&self, mut pos: Self::Pos, count: usize) -> Self::Pos {
        for _ in 0..count {
            pos = self.next(pos);
        }

        pos
    }

    /// Number of forward steps from `from` to `to`.
    #[inline]
    fn distance(&self, mut from: Self::Pos, to: Self::Pos) -> usize {
        let mut count = 0;
        while from != to {
            from = self.next(from);
            count += 1;
        }

        count
    }

    /// Number of elements in the range.
    #[inline]
    fn len(&self) -> usize {
        self.distance(self.start(), self.end())
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.start() == self.end()
    }
}

/// O(1) step forward and back.
pub trait Bidirectional: Forward {
    /// The position before `pos`. `pos` must not be `start()`.
    fn prev(&self, pos: Self::Pos) -> Self::Pos;
}

/// O(1) offset.
pub trait RandomAccess: Bidirectional {
    /// The position `n` steps after `pos`, in constant time. The result must not lie past
    /// `end()`.
    fn offset(&self, pos: Self::Pos, n: usize) -> Self::Pos;
}

// --- Slices ---

impl<T> Forward for [T] {
    type Item = T;
    type Pos = usize;
    type Category = RandomAccessTag;

    #[inline]
    fn start(&self) -> usize {
        0
    }

    #[inline]
    fn end(&self) -> usize {
        <[T]>::len(self)
    }

    #[inline]
    fn next(&self, pos: usize) -> usize {
        pos + 1
    }

    #[inline]
    fn get(&self, pos: usize) -> &T {
        &self[pos]
    }

    #[inline]
    fn swap(&mut self, a: usize, b: usize) {
        <[T]>::swap(self, a, b);
    }

    #[inline]
    fn advance(&self, pos: usize, count: usize) -> usize {
        pos + count
    }

    #[inline]
    fn distance(&self, from: usize, to: usize) -> usize {
        to - from
    }
}

impl<T> Bidirectional for [T] {
    #[inline]
    fn prev(&self, pos: usize) -> usize {
        pos - 1
    }
}

impl<T> RandomAccess for [T] {
    #[inline]
    fn offset(&self, pos: usize, n: usize) -> usize {
        pos + n
    }
}

/// Presents a slice as a bidirectional range, hiding the O(1) offset.
#[derive(Debug)]
pub struct BidirectionalView<'a, T> {
    v: &'a mut [T],
}

impl<'a, T> BidirectionalView<'a, T> {
    pub fn new(v: &'a mut [T]) -> Self {
        Self { v }
    }
}

impl<T> Forward for BidirectionalView<'_, T> {
    type Item = T;
    type Pos = usize;
    type Category = BidirectionalTag;

    #[inline]
    fn start(&self) -> usize {
        0
    }

    #[inline]
    fn end(&self) -> usize {
        self.v.len()
    }

    #[inline]
    fn next(&self, pos: usize) -> usize {
        pos + 1
    }

    #[inline]
    fn get(&self, pos: usize) -> &T {
        &self.v[pos]
    }

    #[inline]
    fn swap(&mut self, a: usize, b: usize) {
        self.v.swap(a, b);
    }
}

impl<T> Bidirectional for BidirectionalView<'_, T> {
    #[inline]
    fn prev(&self, pos: usize) -> usize {
        pos - 1
    }
}

/// Presents a slice as a forward-only range.
#[derive(Debug)]
pub struct ForwardView<'a, T> {
    v: &'a mut [T],
}

impl<'a, T> ForwardView<'a, T> {
    pub fn new(v: &'a mut [T]) -> Self {
        Self { v }
    }
}

impl<T> Forward for ForwardView<'_, T> {
    type Item = T;
    type Pos = usize;
    type Category = ForwardTag;

    #[inline]
    fn start(&self) -> usize {
        0
    }

    #[inline]
    fn end(&self) -> usize {
        self.v.len()
    }

    #[inline]
    fn next(&self, pos: usize) -> usize {
        pos + 1
    }

    #[inline]
    fn get(&self, pos: usize) -> &T {
        &self.v[pos]
    }

    #[inline]
    fn swap(&mut self, a: usize, b: usize) {
        self.v.swap(a, b);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slice_positions() {
        let v = [4, 8, 15, 16, 23, 42];
        let r: &[i32] = &v;

        assert_eq!(Forward::len(r), 6);
        assert_eq!(*Forward::get(r, r.advance(r.start(), 4)), 23);
        assert_eq!(r.offset(r.start(), 4), r.advance(r.start(), 4));
        assert_eq!(r.offset(2, 4), r.end());
        assert_eq!(r.distance(1, 5), 4);
        assert_eq!(*Forward::get(r, r.prev(r.end())), 42);
    }

    #[test]
    fn views_walk() {
        let mut v = [3, 1, 2];

        let bidi = BidirectionalView::new(&mut v);
        assert_eq!(bidi.len(), 3);
        assert_eq!(*bidi.get(bidi.prev(bidi.end())), 2);

        let mut fwd = ForwardView::new(&mut v);
        assert!(!fwd.is_empty());
        let last = fwd.advance(fwd.start(), 2);
        fwd.swap(0, last);
        assert_eq!(v, [2, 1, 3]);
    }
}
