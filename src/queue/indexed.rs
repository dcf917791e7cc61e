//! Indexed max-priority queue.
//!
//! An array-backed binary max-heap of tasks with an auxiliary id → heap-index
//! map, giving O(log n) inserts, extractions, and in-place priority updates
//! addressed by task id.
//!
//! # Invariants
//!
//! After every public operation:
//! - Heap order: each slot outranks both of its children.
//! - Index map: `position[heap[i].id] == i` for every index, and the map's
//!   key set equals the resident id set exactly.
//!
//! Every structural move goes through a single internal swap that rewrites
//! the array and the two affected map entries together. No other code path
//! relocates a slot.
//!
//! # Tie-Breaking
//!
//! Equal priorities extract FIFO: each slot carries a monotonically
//! increasing insertion stamp, and ranking falls back to the stamp when
//! priorities tie. The stamp is assigned at insert and kept across priority
//! updates, so a run is fully reproducible.
//!
//! # Reference
//! Cormen et al. (2009), "Introduction to Algorithms", Ch. 6.5

use std::cmp::Ordering;
use std::collections::HashMap;

use crate::models::Task;

/// Queue-level failure.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum QueueError {
    /// Insert was called with an id that is already resident.
    ///
    /// Recoverable: the queue is structurally unchanged afterward.
    #[error("duplicate task id: {id}")]
    DuplicateId {
        /// The offending task id.
        id: String,
    },
}

/// A resident task plus its insertion stamp.
#[derive(Debug, Clone)]
struct Slot {
    task: Task,
    seq: u64,
}

impl Slot {
    /// Max-heap ranking: higher priority wins, earlier insertion breaks ties.
    fn outranks(&self, other: &Slot) -> bool {
        match self.task.priority.cmp(&other.task.priority) {
            Ordering::Greater => true,
            Ordering::Less => false,
            Ordering::Equal => self.seq < other.seq,
        }
    }
}

/// Array-backed max-heap of tasks with an id → position index.
///
/// The position map makes resident tasks addressable by id, which is what
/// allows [`update_priority`](Self::update_priority) to re-rank a task in
/// O(log n) instead of scanning the array.
///
/// # Example
///
/// ```
/// use u_dispatch::models::Task;
/// use u_dispatch::queue::IndexedPriorityQueue;
///
/// let mut queue = IndexedPriorityQueue::new();
/// queue.insert(Task::new("low").with_priority(1))?;
/// queue.insert(Task::new("high").with_priority(9))?;
///
/// queue.update_priority("low", 20);
/// assert_eq!(queue.extract_max().map(|t| t.id), Some("low".to_string()));
/// # Ok::<(), u_dispatch::queue::QueueError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct IndexedPriorityQueue {
    /// Heap array; index 0 holds the maximum.
    heap: Vec<Slot>,
    /// task id → current index in `heap`.
    position: HashMap<String, usize>,
    /// Next insertion stamp.
    next_seq: u64,
}

impl IndexedPriorityQueue {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty queue with pre-allocated capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: Vec::with_capacity(capacity),
            position: HashMap::with_capacity(capacity),
            next_seq: 0,
        }
    }

    /// Inserts a task. O(log n).
    ///
    /// Fails with [`QueueError::DuplicateId`] if a task with the same id is
    /// already resident; the queue is unchanged in that case.
    pub fn insert(&mut self, task: Task) -> Result<(), QueueError> {
        if self.position.contains_key(&task.id) {
            return Err(QueueError::DuplicateId { id: task.id });
        }

        let index = self.heap.len();
        self.position.insert(task.id.clone(), index);
        self.heap.push(Slot {
            task,
            seq: self.next_seq,
        });
        self.next_seq += 1;
        self.swim(index);
        Ok(())
    }

    /// Removes and returns the highest-priority task. O(log n).
    ///
    /// Returns `None` if the queue is empty; callers expecting a task should
    /// check [`is_empty`](Self::is_empty) first.
    pub fn extract_max(&mut self) -> Option<Task> {
        if self.heap.is_empty() {
            return None;
        }

        let last = self.heap.len() - 1;
        self.swap(0, last);
        let slot = self.heap.pop()?;
        self.position.remove(&slot.task.id);
        if !self.heap.is_empty() {
            self.sink(0);
        }
        Some(slot.task)
    }

    /// Changes the priority of a resident task and re-ranks it. O(log n).
    ///
    /// Silently does nothing if `id` is not resident — "update if present"
    /// semantics, so callers may adjust priorities speculatively against
    /// tasks that have already been dispatched.
    pub fn update_priority(&mut self, id: &str, new_priority: i32) {
        let Some(&index) = self.position.get(id) else {
            return;
        };

        let old_priority = self.heap[index].task.priority;
        self.heap[index].task.priority = new_priority;
        match new_priority.cmp(&old_priority) {
            Ordering::Greater => self.swim(index),
            Ordering::Less => self.sink(index),
            Ordering::Equal => {}
        }
    }

    /// The highest-priority task without removing it.
    pub fn peek(&self) -> Option<&Task> {
        self.heap.first().map(|slot| &slot.task)
    }

    /// Whether a task with the given id is resident.
    pub fn contains(&self, id: &str) -> bool {
        self.position.contains_key(id)
    }

    /// The current priority of a resident task.
    pub fn priority_of(&self, id: &str) -> Option<i32> {
        self.position
            .get(id)
            .map(|&index| self.heap[index].task.priority)
    }

    /// Number of resident tasks.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Whether the queue holds zero tasks. O(1).
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Swaps slots `i` and `j` and rewrites their position entries.
    ///
    /// The only code path that relocates slots; pairing both updates here is
    /// what keeps the array and the map synchronized.
    fn swap(&mut self, i: usize, j: usize) {
        self.heap.swap(i, j);
        self.position.insert(self.heap[i].task.id.clone(), i);
        self.position.insert(self.heap[j].task.id.clone(), j);
    }

    /// Moves the slot at `index` toward the root until its parent outranks it.
    fn swim(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.heap[index].outranks(&self.heap[parent]) {
                self.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    /// Moves the slot at `index` toward the leaves until no child outranks it.
    fn sink(&mut self, mut index: usize) {
        let n = self.heap.len();
        loop {
            let left = 2 * index + 1;
            let right = 2 * index + 2;
            let mut largest = index;

            if left < n && self.heap[left].outranks(&self.heap[largest]) {
                largest = left;
            }
            if right < n && self.heap[right].outranks(&self.heap[largest]) {
                largest = right;
            }
            if largest == index {
                break;
            }
            self.swap(index, largest);
            index = largest;
        }
    }
}
