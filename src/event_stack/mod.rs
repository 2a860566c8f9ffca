//! A singly-linked LIFO stack for holding text-edit events.

mod iter;


use core::fmt;
use std::iter::FromIterator;

use log::trace;

pub use iter::{IntoIter, Iter};

/// A link in the stack's chain. Each node owns the node beneath it.
struct Node<T> {
    value: T,
    next: Option<Box<Node<T>>>,
}

/// A last-in-first-out stack backed by a chain of owned nodes.
///
/// The stack never interprets its payload. Popping or peeking an empty stack
/// is a normal call that returns `None`. Absent payloads can be stored by
/// using an optional payload type, in which case `pop` distinguishes
/// "nothing on the stack" (`None`) from "an absent value was pushed"
/// (`Some(None)`).
pub struct EventStack<T> {
    top: Option<Box<Node<T>>>,
    size: usize,
}

impl<T> Default for EventStack<T> {
    fn default() -> Self {
        Self { top: None, size: 0 }
    }
}

impl<T> EventStack<T> {
    pub fn new() -> Self {
        Default::default()
    }

    /// Returns the number of values on the stack.
    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Pushes `value` onto the top of the stack.
    pub fn push(&mut self, value: T) {
        let next = self.top.take();
        self.top = Some(Box::new(Node { value, next }));
        self.size += 1;
        trace!("event stack push, len {}", self.size);
    }

    /// Removes the top value and returns it, or `None` if the stack is empty.
    /// An empty stack is left unchanged.
    pub fn pop(&mut self) -> Option<T> {
        let node = self.top.take()?;
        let Node { value, next } = *node;
        self.top = next;
        self.size -= 1;
        trace!("event stack pop, len {}", self.size);
        Some(value)
    }

    /// Returns the top value without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.top.as_ref().map(|node| &node.value)
    }

    pub fn peek_mut(&mut self) -> Option<&mut T> {
        self.top.as_mut().map(|node| &mut node.value)
    }

    /// Releases every node on the stack.
    pub fn clear(&mut self) {
        let mut link = self.top.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
        self.size = 0;
    }

    /// Iterates from the top of the stack to the bottom.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.top.as_deref(), self.size)
    }
}

impl<T> EventStack<Option<T>> {
    /// Pops the top value, collapsing "empty stack" and "absent value" into
    /// the same `None` result.
    pub fn pop_flattened(&mut self) -> Option<T> {
        self.pop().flatten()
    }
}

// The default recursive drop of `Box<Node<T>>` would recurse once per node.
impl<T> Drop for EventStack<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: fmt::Debug> fmt::Debug for EventStack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Extend<T> for EventStack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<T> FromIterator<T> for EventStack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut stack = Self::new();
        stack.extend(iter);
        stack
    }
}

impl<T> IntoIterator for EventStack<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}

impl<'a, T> IntoIterator for &'a EventStack<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
