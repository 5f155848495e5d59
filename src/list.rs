//! Doubly linked list stored in a single arena.
//!
//! Positions are arena indices, sorting swaps the stored values and leaves the links untouched,
//! so positions stay valid while a sort runs.

use core::fmt;

use crate::dispatch::BidirectionalTag;
use crate::range::{Bidirectional, Forward};

const NIL: usize = usize::MAX;

struct Node<T> {
    value: T,
    prev: usize,
    next: usize,
}

pub struct List<T> {
    nodes: Vec<Node<T>>,
    head: usize,
    tail: usize,
}

impl<T> List<T> {
    pub const fn new() -> Self {
        Self {
            nodes: Vec::new(),
            head: NIL,
            tail: NIL,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn front(&self) -> Option<&T> {
        self.nodes.get(self.head).map(|node| &node.value)
    }

    pub fn back(&self) -> Option<&T> {
        self.nodes.get(self.tail).map(|node| &node.value)
    }

    pub fn push_back(&mut self, value: T) {
        let idx = self.nodes.len();
        self.nodes.push(Node {
            value,
            prev: self.tail,
            next: NIL,
        });

        if self.tail == NIL {
            self.head = idx;
        } else {
            self.nodes[self.tail].next = idx;
        }
        self.tail = idx;
    }

    pub fn push_front(&mut self, value: T) {
        let idx = self.nodes.len();
        self.nodes.push(Node {
            value,
            prev: NIL,
            next: self.head,
        });

        if self.head == NIL {
            self.tail = idx;
        } else {
            self.nodes[self.head].prev = idx;
        }
        self.head = idx;
    }

    pub fn pop_front(&mut self) -> Option<T> {
        (self.head != NIL).then(|| self.remove(self.head))
    }

    pub fn pop_back(&mut self) -> Option<T> {
        (self.tail != NIL).then(|| self.remove(self.tail))
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.head = NIL;
        self.tail = NIL;
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            pos: self.head,
            remaining: self.len(),
        }
    }

    /// Unlinks the node at `idx` and fills the hole with the last arena slot.
    fn remove(&mut self, idx: usize) -> T {
        let (prev, next) = (self.nodes[idx].prev, self.nodes[idx].next);
        self.link(prev, next);

        let moved = self.nodes.len() - 1;
        if moved != idx {
            let (prev, next) = (self.nodes[moved].prev, self.nodes[moved].next);
            self.link(prev, idx);
            self.link(idx, next);
        }

        self.nodes.swap_remove(idx).value
    }

    /// Makes `next` follow `prev`, either may be `NIL`.
    fn link(&mut self, prev: usize, next: usize) {
        if prev == NIL {
            self.head = next;
        } else {
            self.nodes[prev].next = next;
        }

        if next == NIL {
            self.tail = prev;
        } else {
            self.nodes[next].prev = prev;
        }
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for List<T> {}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for List<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

pub struct Iter<'a, T> {
    list: &'a List<T>,
    pos: usize,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let node = self.list.nodes.get(self.pos)?;
        self.pos = node.next;
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T> Forward for List<T> {
    type Item = T;
    type Pos = usize;
    type Category = BidirectionalTag;

    #[inline]
    fn start(&self) -> usize {
        self.head
    }

    #[inline]
    fn end(&self) -> usize {
        NIL
    }

    #[inline]
    fn next(&self, pos: usize) -> usize {
        self.nodes[pos].next
    }

    #[inline]
    fn get(&self, pos: usize) -> &T {
        &self.nodes[pos].value
    }

    #[inline]
    fn swap(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }

        let (lo, hi) = (a.min(b), a.max(b));
        let (left, right) = self.nodes.split_at_mut(hi);
        core::mem::swap(&mut left[lo].value, &mut right[0].value);
    }

    #[inline]
    fn len(&self) -> usize {
        self.nodes.len()
    }
}

impl<T> Bidirectional for List<T> {
    #[inline]
    fn prev(&self, pos: usize) -> usize {
        if pos == NIL {
            self.tail
        } else {
            self.nodes[pos].prev
        }
    }
}
