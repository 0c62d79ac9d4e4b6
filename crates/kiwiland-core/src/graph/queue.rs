//! Min-priority queue backing the shortest-path frontier.
//!
//! There is no decrease-key: the same item may be pushed several times with
//! different priorities, and callers skip stale entries when they pop them.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

/// Heap entry ordered by priority only
#[derive(Debug, Clone)]
struct HeapEntry<T, P> {
    item: T,
    priority: P,
}

impl<T, P: Ord> PartialEq for HeapEntry<T, P> {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority
    }
}

impl<T, P: Ord> Eq for HeapEntry<T, P> {}

impl<T, P: Ord> PartialOrd for HeapEntry<T, P> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T, P: Ord> Ord for HeapEntry<T, P> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority.cmp(&other.priority)
    }
}

/// Min-heap over `(item, priority)` pairs
#[derive(Debug, Clone)]
pub struct PriorityQueue<T, P: Ord> {
    heap: BinaryHeap<Reverse<HeapEntry<T, P>>>,
}

impl<T, P: Ord> PriorityQueue<T, P> {
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
        }
    }

    /// Insert an item, O(log n). Duplicates are allowed.
    pub fn push(&mut self, item: T, priority: P) {
        self.heap.push(Reverse(HeapEntry { item, priority }));
    }

    /// Remove the item with the smallest priority
    pub fn pop(&mut self) -> Option<T> {
        self.pop_with_priority().map(|(item, _)| item)
    }

    /// Remove the item with the smallest priority, along with that priority
    pub fn pop_with_priority(&mut self) -> Option<(T, P)> {
        self.heap
            .pop()
            .map(|Reverse(HeapEntry { item, priority })| (item, priority))
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

impl<T, P: Ord> Default for PriorityQueue<T, P> {
    fn default() -> Self {
        Self::new()
    }
}
