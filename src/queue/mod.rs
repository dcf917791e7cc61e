//! Indexed priority queue.
//!
//! The crate's central data structure: a binary max-heap addressable by
//! task id, so a resident task's priority can be changed in O(log n)
//! without removal and reinsertion.

mod indexed;

pub use indexed::{IndexedPriorityQueue, QueueError};
