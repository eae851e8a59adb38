//! Bounded LIFO stack used for undo and redo history.

use std::collections::VecDeque;

/// LIFO stack that discards its oldest element once it exceeds capacity.
///
/// # Example
///
/// ```rust
/// use shiftledger::engine::BoundedStack;
///
/// let mut stack = BoundedStack::new(2);
/// stack.push(1);
/// stack.push(2);
/// assert_eq!(stack.push(3), Some(1)); // oldest evicted
/// assert_eq!(stack.pop(), Some(3));
/// assert_eq!(stack.len(), 1);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct BoundedStack<T> {
    items: VecDeque<T>,
    capacity: usize,
}

impl<T> BoundedStack<T> {
    pub fn new(capacity: usize) -> Self {
        Self {
            items: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Build from items ordered bottom first, keeping only the newest
    /// `capacity` of them. Returns the stack and how many were dropped.
    pub fn from_vec(items: Vec<T>, capacity: usize) -> (Self, usize) {
        let mut items = VecDeque::from(items);
        let overflow = items.len().saturating_sub(capacity);
        items.drain(..overflow);
        (Self { items, capacity }, overflow)
    }

    /// Push onto the top, returning the evicted bottom element if the
    /// stack was full.
    pub fn push(&mut self, item: T) -> Option<T> {
        if self.capacity == 0 {
            return Some(item);
        }
        let evicted = if self.items.len() >= self.capacity {
            self.items.pop_front()
        } else {
            None
        };
        self.items.push_back(item);
        evicted
    }

    pub fn pop(&mut self) -> Option<T> {
        self.items.pop_back()
    }

    pub fn peek(&self) -> Option<&T> {
        self.items.back()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Keep only the elements matching `keep`, returning how many were removed.
    pub fn retain<F: FnMut(&T) -> bool>(&mut self, keep: F) -> usize {
        let before = self.items.len();
        self.items.retain(keep);
        before - self.items.len()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Elements from bottom (oldest) to top (newest).
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }
}

impl<T: Clone> BoundedStack<T> {
    /// Copy of the elements, bottom first.
    pub fn to_vec(&self) -> Vec<T> {
        self.items.iter().cloned().collect()
    }
}
