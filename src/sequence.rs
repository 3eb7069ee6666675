use crate::errors::{Result, SequenceError};
use crate::node::Node;
use core::fmt;
use core::ops::{Bound, RangeBounds};
use std::collections::HashMap;

/// Returned by [`Sequence::index_of`] when no element matches.
pub const NOT_FOUND: isize = -1;

/// A singly-linked sequence with a cached tail for O(1) append.
///
/// Nodes are stored by id and link to their successor by id. Every node is
/// reachable from `head` through exactly one predecessor link; `tail` is only
/// a cached id of the last node and is `None` exactly when `head` is.
#[derive(Clone)]
pub struct Sequence<T> {
    pub(crate) nodes: HashMap<usize, Node<T>>,
    pub(crate) head: Option<usize>,
    pub(crate) tail: Option<usize>,
    next_id: usize,
}

/// Iterator over values from head to tail.
pub struct Iter<'a, T> {
    seq: &'a Sequence<T>,
    next: Option<usize>,
}

/// Iterator over mutable values from head to tail.
pub struct IterMut<'a, T> {
    inner: std::vec::IntoIter<&'a mut T>,
}

/// Owning iterator, consumes the sequence from the head.
pub struct IntoIter<T> {
    seq: Sequence<T>,
}

impl<T> Default for Sequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Sequence<T> {
    /// Create a new empty sequence.
    pub fn new() -> Self {
        Self {
            nodes: HashMap::new(),
            head: None,
            tail: None,
            next_id: 0,
        }
    }

    /// Number of elements, counted by walking the chain.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Is the sequence empty?
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// First element, if any.
    pub fn front(&self) -> Option<&T> {
        self.head.and_then(|id| self.value(id))
    }

    /// Last element, if any. O(1) through the cached tail.
    pub fn back(&self) -> Option<&T> {
        self.tail.and_then(|id| self.value(id))
    }

    /// Append a value at the end. O(1).
    pub fn append(&mut self, value: T) {
        let id = self.alloc(value);
        match self.tail {
            Some(tail) => self.set_next(tail, Some(id)),
            None => self.head = Some(id),
        }
        self.tail = Some(id);
    }

    /// Insert `value` so that it ends up at position `index`.
    ///
    /// Indices `<= 0` prepend, indices `>= len()` append.
    pub fn insert(&mut self, index: isize, value: T) {
        if index <= 0 {
            self.prepend(value);
            return;
        }
        let index = index as usize;
        let prev = match self.id_at(index - 1) {
            Some(prev) if index < self.len() => prev,
            _ => {
                self.append(value);
                return;
            }
        };

        // 0 < index < len, so the successor exists and the tail is unchanged.
        let id = self.alloc(value);
        self.set_next(id, self.next_of(Some(prev)));
        self.set_next(prev, Some(id));
        debug_assert!(self.chain_is_consistent());
    }

    /// Does any element compare equal to `value`?
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|v| v == value)
    }

    /// Position of the first element equal to `value`.
    pub fn position(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|v| v == value)
    }

    /// Position of the first element equal to `value`, or [`NOT_FOUND`].
    pub fn index_of(&self, value: &T) -> isize
    where
        T: PartialEq,
    {
        self.index_of_in(value, ..)
    }

    /// Like [`index_of`](Self::index_of), but only positions inside `range`
    /// are compared. The range is not checked against the length: a start
    /// past the end simply finds nothing.
    pub fn index_of_in<R>(&self, value: &T, range: R) -> isize
    where
        T: PartialEq,
        R: RangeBounds<usize>,
    {
        let start = match range.start_bound() {
            Bound::Included(&s) => s,
            Bound::Excluded(&s) => s.saturating_add(1),
            Bound::Unbounded => 0,
        };
        let stop = match range.end_bound() {
            Bound::Included(&e) => e.saturating_add(1),
            Bound::Excluded(&e) => e,
            Bound::Unbounded => usize::MAX,
        };

        self.iter()
            .enumerate()
            .skip(start)
            .take_while(|(i, _)| *i < stop)
            .find(|(_, v)| *v == value)
            .map_or(NOT_FOUND, |(i, _)| i as isize)
    }

    /// Remove the first element equal to `value`.
    ///
    /// Fails with [`SequenceError::Empty`] on an empty sequence and
    /// [`SequenceError::NotFound`] when nothing matches; the sequence is left
    /// untouched in both cases.
    pub fn remove(&mut self, value: &T) -> Result<()>
    where
        T: PartialEq,
    {
        if self.is_empty() {
            return Err(SequenceError::Empty);
        }
        let index = self.position(value).ok_or(SequenceError::NotFound)?;
        self.unlink_at(index);
        Ok(())
    }

    /// Remove and return the last element.
    pub fn pop(&mut self) -> Result<T> {
        self.pop_at(-1)
    }

    /// Remove and return the element at `index`. Negative indices count
    /// from the end.
    pub fn pop_at(&mut self, index: isize) -> Result<T> {
        let len = self.len();
        let position = if index < 0 {
            index + len as isize
        } else {
            index
        };
        let out_of_range = SequenceError::IndexOutOfRange { index, len };
        if position < 0 || position as usize >= len {
            return Err(out_of_range);
        }
        self.unlink_at(position as usize).ok_or(out_of_range)
    }

    /// Reverse the sequence in place by relinking nodes.
    pub fn reverse(&mut self) {
        // The current head ends up last.
        self.tail = self.head;

        let mut prev = None;
        let mut curr = self.head;
        while let Some(id) = curr {
            curr = self.next_of(Some(id));
            self.set_next(id, prev);
            prev = Some(id);
        }
        self.head = prev;
        debug_assert!(self.chain_is_consistent());
    }

    /// Drop every element.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.head = None;
        self.tail = None;
    }

    /// Iterate values from head to tail.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            seq: self,
            next: self.head,
        }
    }

    /// Iterate mutable values from head to tail.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        let mut slots: HashMap<usize, (&mut T, Option<usize>)> = self
            .nodes
            .iter_mut()
            .map(|(id, node)| (*id, (&mut node.value, node.next)))
            .collect();

        let mut values = Vec::with_capacity(slots.len());
        let mut curr = self.head;
        while let Some((value, next)) = curr.and_then(|id| slots.remove(&id)) {
            values.push(value);
            curr = next;
        }
        IterMut {
            inner: values.into_iter(),
        }
    }

    /// Successor of `prev`, or the head when `prev` is `None`.
    pub(crate) fn next_of(&self, prev: Option<usize>) -> Option<usize> {
        match prev {
            None => self.head,
            Some(id) => self.nodes.get(&id).and_then(|node| node.next),
        }
    }

    pub(crate) fn set_next(&mut self, id: usize, next: Option<usize>) {
        if let Some(node) = self.nodes.get_mut(&id) {
            node.next = next;
        }
    }

    /// Point the link after `prev` (the head when `None`) at `to`.
    pub(crate) fn set_link(&mut self, prev: Option<usize>, to: Option<usize>) {
        match prev {
            None => self.head = to,
            Some(id) => self.set_next(id, to),
        }
    }

    /// Does walking from `head` visit every stored node once, without a
    /// cycle, and end at `tail`?
    pub(crate) fn chain_is_consistent(&self) -> bool {
        let mut last = None;
        let mut curr = self.head;
        let mut steps = 0;
        while let Some(id) = curr {
            if steps == self.nodes.len() {
                return false;
            }
            let Some(node) = self.nodes.get(&id) else {
                return false;
            };
            last = Some(id);
            curr = node.next;
            steps += 1;
        }
        let tail_is_last = self
            .tail
            .and_then(|id| self.nodes.get(&id))
            .map_or(true, Node::is_last);
        steps == self.nodes.len() && last == self.tail && tail_is_last
    }

    fn value(&self, id: usize) -> Option<&T> {
        self.nodes.get(&id).map(|node| &node.value)
    }

    fn alloc(&mut self, value: T) -> usize {
        let id = self.next_id;
        self.next_id += 1;
        self.nodes.insert(id, Node::new(value));
        id
    }

    fn prepend(&mut self, value: T) {
        let id = self.alloc(value);
        self.set_next(id, self.head);
        if self.head.is_none() {
            self.tail = Some(id);
        }
        self.head = Some(id);
    }

    fn take_front(&mut self) -> Option<T> {
        let id = self.head?;
        let node = self.nodes.remove(&id)?;
        self.head = node.next;
        if self.head.is_none() {
            self.tail = None;
        }
        Some(node.value)
    }

    /// Id of the node at position `index`.
    fn id_at(&self, index: usize) -> Option<usize> {
        let mut curr = self.head;
        for _ in 0..index {
            curr = self.nodes.get(&curr?)?.next;
        }
        curr
    }

    fn unlink_at(&mut self, index: usize) -> Option<T> {
        let prev = match index {
            0 => None,
            _ => Some(self.id_at(index - 1)?),
        };
        let id = self.next_of(prev)?;
        let node = self.nodes.remove(&id)?;
        self.set_link(prev, node.next);
        if self.tail == Some(id) {
            self.tail = prev;
        }
        debug_assert!(self.chain_is_consistent());
        Some(node.value)
    }
}

impl<T: PartialEq> PartialEq for Sequence<T> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for Sequence<T> {}

impl<T: fmt::Debug> fmt::Debug for Sequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Renders `a -> b -> c`; an empty sequence renders as nothing.
impl<T: fmt::Display> fmt::Display for Sequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut values = self.iter();
        if let Some(first) = values.next() {
            write!(f, "{first}")?;
            for value in values {
                write!(f, " -> {value}")?;
            }
        }
        Ok(())
    }
}

impl<T> Extend<T> for Sequence<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.append(value);
        }
    }
}

impl<T> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut seq = Sequence::new();
        seq.extend(iter);
        seq
    }
}

impl<T> From<Vec<T>> for Sequence<T> {
    fn from(values: Vec<T>) -> Self {
        values.into_iter().collect()
    }
}

impl<T, const N: usize> From<[T; N]> for Sequence<T> {
    fn from(values: [T; N]) -> Self {
        values.into_iter().collect()
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.seq.nodes.get(&self.next?)?;
        self.next = node.next;
        Some(&node.value)
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.seq.take_front()
    }
}

impl<T> IntoIterator for Sequence<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { seq: self }
    }
}

impl<'a, T> IntoIterator for &'a Sequence<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Sequence<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
