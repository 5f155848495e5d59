//! Singly linked list stored in a single arena. A forward-only range.

use core::fmt;

use crate::dispatch::ForwardTag;
use crate::range::Forward;

const NIL: usize = usize::MAX;

struct Node<T> {
    value: T,
    next: usize,
}

pub struct ForwardList<T> {
    nodes: Vec<Node<T>>,
    head: usize,
    tail: usize,
}

impl<T> ForwardList<T> {
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

    pub fn push_front(&mut self, value: T) {
        let idx = self.nodes.len();
        self.nodes.push(Node {
            value,
            next: self.head,
        });

        if self.head == NIL {
            self.tail = idx;
        }
        self.head = idx;
    }

    pub fn push_back(&mut self, value: T) {
        let idx = self.nodes.len();
        self.nodes.push(Node { value, next: NIL });

        if self.tail == NIL {
            self.head = idx;
        } else {
            self.nodes[self.tail].next = idx;
        }
        self.tail = idx;
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            pos: self.head,
        }
    }
}

impl<T> Default for ForwardList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for ForwardList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> FromIterator<T> for ForwardList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        for value in iter {
            list.push_back(value);
        }
        list
    }
}

pub struct Iter<'a, T> {
    list: &'a ForwardList<T>,
    pos: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let node = self.list.nodes.get(self.pos)?;
        self.pos = node.next;
        Some(&node.value)
    }
}

impl<T> Forward for ForwardList<T> {
    type Item = T;
    type Pos = usize;
    type Category = ForwardTag;

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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_order() {
        let mut list = ForwardList::new();
        list.push_back(2);
        list.push_front(1);
        list.push_back(3);

        assert_eq!(list.len(), 3);
        assert_eq!(list.front(), Some(&1));
        assert_eq!(format!("{list:?}"), "[1, 2, 3]");
    }

    #[test]
    fn walk() {
        let list: ForwardList<char> = "abcd".chars().collect();

        assert_eq!(list.distance(list.start(), list.end()), 4);
        assert_eq!(*list.get(list.advance(list.start(), 2)), 'c');
    }
}
