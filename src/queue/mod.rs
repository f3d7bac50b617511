//! Binary min-heap priority queue
//!
//! Elements live in a 1-indexed array: the children of slot `i` are `2i` and
//! `2i + 1`, its parent is `i / 2`. Slot 0 is scratch space holding the
//! element being inserted while it percolates up. Capacity is tied to a
//! depth, `capacity = 2^depth - 1`, and growing adds one level, which
//! roughly doubles it. The queue never shrinks.
//!
//! There is no decrease-key. Callers that need to lower a priority insert
//! a new entry and skip the superseded one when it comes out.

use std::fmt;

use crate::config::{QueueConfig, MAX_DEPTH};
use crate::error::{PathstepError, Result};

/// Depth a new queue starts at
pub const INITIAL_DEPTH: u32 = crate::config::DEFAULT_INITIAL_DEPTH;

/// Array-backed binary min-heap
#[derive(Debug, Clone)]
pub struct PriorityQueue<T> {
    /// `2^depth` slots; `store[1..=count]` are occupied
    store: Vec<Option<T>>,
    count: usize,
    depth: u32,
}

impl<T: Ord> PriorityQueue<T> {
    pub fn new() -> Self {
        Self::with_depth(INITIAL_DEPTH)
    }

    /// Create a queue with room for `2^depth - 1` elements.
    ///
    /// `depth` is clamped to `1..=MAX_DEPTH`.
    pub fn with_depth(depth: u32) -> Self {
        let depth = depth.clamp(1, MAX_DEPTH);
        let mut store = Vec::new();
        store.resize_with(slots_for_depth(depth), || None);
        PriorityQueue {
            store,
            count: 0,
            depth,
        }
    }

    pub fn from_config(config: &QueueConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::with_depth(config.initial_depth))
    }

    /// Number of queued elements
    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Number of elements that fit before the next resize
    pub fn capacity(&self) -> usize {
        self.store.len() - 1
    }

    pub fn capacity_depth(&self) -> u32 {
        self.depth
    }

    /// Insert an element, growing the store by one level when full
    pub fn insert(&mut self, item: T) {
        self.count += 1;
        if self.count > self.capacity() {
            self.resize(self.depth + 1);
        }

        self.store[0] = Some(item);
        self.percolate_up(self.count);
    }

    /// The minimum element, without removing it
    pub fn peek(&self) -> Result<&T> {
        if self.count == 0 {
            return Err(PathstepError::empty_collection("peek"));
        }
        self.store[1]
            .as_ref()
            .ok_or_else(|| PathstepError::empty_collection("peek"))
    }

    /// Remove and return the minimum element
    pub fn dequeue(&mut self) -> Result<T> {
        if self.count == 0 {
            return Err(PathstepError::empty_collection("dequeue"));
        }

        let result = self.store[1].take();
        if self.count > 1 {
            self.store[1] = self.store[self.count].take();
        }
        self.count -= 1;

        if self.count > 0 {
            self.percolate_down(1);
        }

        result.ok_or_else(|| PathstepError::empty_collection("dequeue"))
    }

    /// Replace the contents with `items` and restore the heap order in
    /// linear time.
    ///
    /// The depth becomes the smallest one that fits `items`, unless the
    /// queue is already deeper.
    pub fn build_heap(&mut self, items: Vec<T>) {
        let count = items.len();
        let depth = depth_for_len(count).max(self.depth);

        let mut store = Vec::with_capacity(slots_for_depth(depth));
        store.push(None);
        store.extend(items.into_iter().map(Some));
        store.resize_with(slots_for_depth(depth), || None);

        self.store = store;
        self.count = count;
        self.depth = depth;

        // Slots past count / 2 are leaves
        for index in (1..=count / 2).rev() {
            self.percolate_down(index);
        }
    }

    /// Remove every element, keeping the current capacity
    pub fn clear(&mut self) {
        for slot in &mut self.store {
            *slot = None;
        }
        self.count = 0;
    }

    /// Elements in heap-array order (root first)
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.store[1..=self.count].iter().filter_map(Option::as_ref)
    }

    fn resize(&mut self, depth: u32) {
        if depth <= self.depth {
            return;
        }
        self.store.resize_with(slots_for_depth(depth), || None);
        self.depth = depth;
    }

    fn less(&self, a: usize, b: usize) -> bool {
        match (&self.store[a], &self.store[b]) {
            (Some(x), Some(y)) => x < y,
            _ => false,
        }
    }

    /// Move the element parked in slot 0 up from `index` to its place.
    fn percolate_up(&mut self, mut index: usize) {
        // Reaching the root compares slot 0 with itself, which ends the loop
        while self.less(0, index / 2) {
            self.store[index] = self.store[index / 2].take();
            index /= 2;
        }
        self.store[index] = self.store[0].take();
    }

    /// Move the element at `index` down until no child is smaller.
    fn percolate_down(&mut self, mut index: usize) {
        let Some(item) = self.store[index].take() else {
            return;
        };

        while index * 2 <= self.count {
            let mut child = index * 2;
            if child < self.count && self.less(child + 1, child) {
                child += 1;
            }

            if self.store[child].as_ref().is_some_and(|c| *c < item) {
                self.store[index] = self.store[child].take();
                index = child;
            } else {
                break;
            }
        }

        self.store[index] = Some(item);
    }
}

fn slots_for_depth(depth: u32) -> usize {
    1usize << depth
}

/// Smallest depth whose capacity holds `len` elements
fn depth_for_len(len: usize) -> u32 {
    (usize::BITS - len.leading_zeros()).max(1)
}

impl<T: Ord> Default for PriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> FromIterator<T> for PriorityQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.build_heap(iter.into_iter().collect());
        queue
    }
}

impl<T: Ord> Extend<T> for PriorityQueue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.insert(item);
        }
    }
}

impl<T: Ord + fmt::Display> fmt::Display for PriorityQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, item) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", item)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests;
