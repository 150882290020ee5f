// SPDX-License-Identifier: MPL-2.0
//! Bounded rotating queue.
//!
//! Pushing into a full queue evicts the oldest entry, so the queue always
//! keeps the most recent items. It backs both the coordinator's pending
//! show-requests and the diagnostics event log.

use super::banner::QueueCapacity;
use std::collections::VecDeque;

/// A FIFO queue with fixed capacity and oldest-first eviction.
///
/// # Example
///
/// ```
/// use iced_banner::domain::queue::RotatingQueue;
///
/// let mut queue = RotatingQueue::with_raw_capacity(2);
/// assert_eq!(queue.push(1), None);
/// assert_eq!(queue.push(2), None);
/// assert_eq!(queue.push(3), Some(1));
///
/// let items: Vec<_> = queue.iter().copied().collect();
/// assert_eq!(items, vec![2, 3]);
/// ```
#[derive(Debug, Clone)]
pub struct RotatingQueue<T> {
    data: VecDeque<T>,
    capacity: usize,
}

impl<T> RotatingQueue<T> {
    /// Creates a queue with the given capacity.
    #[must_use]
    pub fn new(capacity: QueueCapacity) -> Self {
        Self::with_raw_capacity(capacity.value())
    }

    /// Creates a queue with a raw capacity value (at least 1).
    #[must_use]
    pub fn with_raw_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            data: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Appends an item, returning the evicted oldest item when full.
    pub fn push(&mut self, item: T) -> Option<T> {
        let evicted = if self.data.len() >= self.capacity {
            self.data.pop_front()
        } else {
            None
        };
        self.data.push_back(item);
        evicted
    }

    /// Puts an item back at the head of the queue.
    ///
    /// Used when a dequeued item cannot be served yet. If the queue filled
    /// up in the meantime, the item is handed back.
    pub fn push_front(&mut self, item: T) -> Result<(), T> {
        if self.data.len() >= self.capacity {
            return Err(item);
        }
        self.data.push_front(item);
        Ok(())
    }

    /// Removes and returns the oldest item.
    pub fn pop_front(&mut self) -> Option<T> {
        self.data.pop_front()
    }

    /// Removes every item matching the predicate, returning how many.
    pub fn remove_where(&mut self, mut predicate: impl FnMut(&T) -> bool) -> usize {
        let before = self.data.len();
        self.data.retain(|item| !predicate(item));
        before - self.data.len()
    }

    /// Iterates from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.data.len() >= self.capacity
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Removes every item, returning them oldest first.
    pub fn drain(&mut self) -> impl Iterator<Item = T> + '_ {
        self.data.drain(..)
    }

    pub fn clear(&mut self) {
        self.data.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_capacity_keeps_only_newest() {
        let mut queue = RotatingQueue::new(QueueCapacity::default());
        queue.push("first");
        let evicted = queue.push("second");

        assert_eq!(evicted, Some("first"));
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.pop_front(), Some("second"));
    }

    #[test]
    fn raw_capacity_is_at_least_one() {
        let queue: RotatingQueue<u8> = RotatingQueue::with_raw_capacity(0);
        assert_eq!(queue.capacity(), 1);
    }

    #[test]
    fn never_exceeds_capacity() {
        let mut queue = RotatingQueue::with_raw_capacity(3);
        for i in 0..10 {
            queue.push(i);
            assert!(queue.len() <= 3);
        }
        let items: Vec<_> = queue.iter().copied().collect();
        assert_eq!(items, vec![7, 8, 9]);
    }

    #[test]
    fn push_front_refuses_when_full() {
        let mut queue = RotatingQueue::with_raw_capacity(1);
        queue.push(1);
        assert_eq!(queue.push_front(0), Err(0));

        let head = queue.pop_front().unwrap();
        assert_eq!(queue.push_front(head), Ok(()));
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn remove_where_reports_count() {
        let mut queue = RotatingQueue::with_raw_capacity(4);
        queue.push(1);
        queue.push(2);
        queue.push(3);

        assert_eq!(queue.remove_where(|n| n % 2 == 1), 2);
        assert_eq!(queue.iter().copied().collect::<Vec<_>>(), vec![2]);
    }

    #[test]
    fn drain_and_clear_empty_the_queue() {
        let mut queue = RotatingQueue::with_raw_capacity(2);
        queue.push('a');
        queue.push('b');
        assert_eq!(queue.drain().collect::<String>(), "ab");
        assert!(queue.is_empty());

        queue.push('c');
        queue.clear();
        assert!(queue.is_empty());
    }
}
