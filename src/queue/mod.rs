//! Severity-keyed max-priority queue.
//!
//! An array-backed binary max-heap over site severity. Entries carry a
//! monotone insertion sequence number so that equal severities come out
//! in first-in, first-out order — the extraction sequence for a fixed
//! input is fully deterministic.
//!
//! # Complexity
//! `insert` and `extract_max` are O(log k) for k queued entries;
//! `is_empty` and `len` are O(1).
//!
//! # Reference
//! Cormen et al. (2009), "Introduction to Algorithms", Ch. 6 (Heapsort)

use std::cmp::Ordering;
use std::error::Error;
use std::fmt;

/// Default bound on queued entries.
pub const DEFAULT_QUEUE_CAPACITY: usize = 1024;

/// A queued site awaiting dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueueEntry {
    /// Index of the site in the allocator's site list.
    pub index: usize,
    /// Severity score; higher extracts first.
    pub priority: i64,
    /// Insertion sequence number; earlier wins among equal priorities.
    pub seq: u64,
}

impl QueueEntry {
    /// Heap order: priority descending, then insertion order ascending.
    fn heap_cmp(&self, other: &QueueEntry) -> Ordering {
        self.priority
            .cmp(&other.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Queue operation failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueueError {
    /// `extract_max` was called on an empty queue. The allocator loop
    /// must guard with `is_empty`, so this is an invariant violation.
    Empty,
    /// `insert` would exceed the queue's capacity bound.
    CapacityExceeded {
        /// The configured bound.
        capacity: usize,
    },
}

impl fmt::Display for QueueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueueError::Empty => write!(f, "extract_max on an empty queue"),
            QueueError::CapacityExceeded { capacity } => {
                write!(f, "queue capacity of {capacity} entries exceeded")
            }
        }
    }
}

impl Error for QueueError {}

/// Binary max-heap of pending sites, keyed by severity.
///
/// # Example
/// ```
/// use relief_dispatch::queue::SeverityQueue;
///
/// let mut queue = SeverityQueue::new();
/// queue.insert(0, 5).unwrap();
/// queue.insert(1, 10).unwrap();
///
/// let top = queue.extract_max().unwrap();
/// assert_eq!((top.index, top.priority), (1, 10));
/// ```
#[derive(Debug, Clone)]
pub struct SeverityQueue {
    entries: Vec<QueueEntry>,
    capacity: usize,
    next_seq: u64,
}

impl SeverityQueue {
    /// Creates an empty queue with the default capacity bound.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_QUEUE_CAPACITY)
    }

    /// Creates an empty queue holding at most `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::new(),
            capacity,
            next_seq: 0,
        }
    }

    /// Whether no entries remain.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of queued entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Inserts a site with the given priority.
    ///
    /// Appends the entry, then sifts it up while its parent orders
    /// strictly below it.
    pub fn insert(&mut self, index: usize, priority: i64) -> Result<(), QueueError> {
        if self.entries.len() >= self.capacity {
            return Err(QueueError::CapacityExceeded {
                capacity: self.capacity,
            });
        }

        let entry = QueueEntry {
            index,
            priority,
            seq: self.next_seq,
        };
        self.next_seq += 1;
        self.entries.push(entry);
        self.sift_up(self.entries.len() - 1);
        Ok(())
    }

    /// Removes and returns the highest-priority entry.
    ///
    /// The last entry is promoted into the root slot, then sifted down
    /// toward whichever child orders strictly above it.
    pub fn extract_max(&mut self) -> Result<QueueEntry, QueueError> {
        if self.entries.is_empty() {
            return Err(QueueError::Empty);
        }

        let last = self.entries.len() - 1;
        self.entries.swap(0, last);
        let root = self.entries.pop().ok_or(QueueError::Empty)?;
        if !self.entries.is_empty() {
            self.sift_down(0);
        }
        Ok(root)
    }

    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let parent = (i - 1) / 2;
            if self.entries[parent].heap_cmp(&self.entries[i]) != Ordering::Less {
                break;
            }
            self.entries.swap(parent, i);
            i = parent;
        }
    }

    fn sift_down(&mut self, mut i: usize) {
        let len = self.entries.len();
        loop {
            let left = 2 * i + 1;
            let right = 2 * i + 2;
            let mut largest = i;

            if left < len && self.entries[left].heap_cmp(&self.entries[largest]) == Ordering::Greater
            {
                largest = left;
            }
            if right < len
                && self.entries[right].heap_cmp(&self.entries[largest]) == Ordering::Greater
            {
                largest = right;
            }

            if largest == i {
                break;
            }
            self.entries.swap(i, largest);
            i = largest;
        }
    }

    /// Whether the max-heap invariant holds at every position.
    /// Exposed for tests.
    #[cfg(test)]
    fn is_valid_heap(&self) -> bool {
        (0..self.entries.len()).all(|i| {
            let left = 2 * i + 1;
            let right = 2 * i + 2;
            (left >= self.entries.len()
                || self.entries[i].heap_cmp(&self.entries[left]) != Ordering::Less)
                && (right >= self.entries.len()
                    || self.entries[i].heap_cmp(&self.entries[right]) != Ordering::Less)
        })
    }
}

impl Default for SeverityQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_extraction_order_non_increasing() {
        let mut queue = SeverityQueue::new();
        for (i, &p) in [5_i64, 10, 3, 7, 10, 1, 8].iter().enumerate() {
            queue.insert(i, p).unwrap();
        }

        let mut prev = i64::MAX;
        while !queue.is_empty() {
            let entry = queue.extract_max().unwrap();
            assert!(entry.priority <= prev);
            prev = entry.priority;
        }
    }

    #[test]
    fn test_equal_priorities_extract_fifo() {
        let mut queue = SeverityQueue::new();
        queue.insert(0, 7).unwrap();
        queue.insert(1, 7).unwrap();
        queue.insert(2, 9).unwrap();
        queue.insert(3, 7).unwrap();

        assert_eq!(queue.extract_max().unwrap().index, 2);
        assert_eq!(queue.extract_max().unwrap().index, 0);
        assert_eq!(queue.extract_max().unwrap().index, 1);
        assert_eq!(queue.extract_max().unwrap().index, 3);
    }

    #[test]
    fn test_exhaustion_fails_with_empty() {
        let mut queue = SeverityQueue::new();
        for i in 0..4 {
            queue.insert(i, i as i64).unwrap();
        }
        for _ in 0..4 {
            assert!(queue.extract_max().is_ok());
        }
        assert_eq!(queue.extract_max(), Err(QueueError::Empty));
        assert!(queue.is_empty());
    }

    #[test]
    fn test_capacity_bound() {
        let mut queue = SeverityQueue::with_capacity(2);
        queue.insert(0, 1).unwrap();
        queue.insert(1, 2).unwrap();
        assert_eq!(
            queue.insert(2, 3),
            Err(QueueError::CapacityExceeded { capacity: 2 })
        );
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn test_heap_invariant_random_interleaving() {
        let mut rng = SmallRng::seed_from_u64(42);
        let mut queue = SeverityQueue::new();
        let mut next_index = 0_usize;

        for _ in 0..500 {
            if queue.is_empty() || rng.random_bool(0.6) {
                queue.insert(next_index, rng.random_range(0..50)).unwrap();
                next_index += 1;
            } else {
                queue.extract_max().unwrap();
            }
            assert!(queue.is_valid_heap());
        }
    }

    #[test]
    fn test_single_entry() {
        let mut queue = SeverityQueue::new();
        queue.insert(9, 0).unwrap();
        let entry = queue.extract_max().unwrap();
        assert_eq!(entry.index, 9);
        assert_eq!(entry.priority, 0);
        assert!(queue.is_empty());
    }
}
