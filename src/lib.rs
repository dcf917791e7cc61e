//! Discrete-event task dispatching.
//!
//! Simulates priority-based dispatch over discrete time: tasks arrive at
//! fixed ticks, wait in an indexed max-priority queue, and are dispatched
//! one per tick in strict priority order among those that have arrived.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Task`, `DispatchEvent`, `DispatchLog`
//! - **`queue`**: `IndexedPriorityQueue`, an array-backed binary max-heap
//!   with an id → position index supporting O(log n) priority updates
//! - **`scheduler`**: `TickedScheduler` simulation loop and `DispatchKpi`
//!   metrics
//! - **`validation`**: Input integrity checks (duplicate ids)
//!
//! # Architecture
//!
//! The queue is the sole shared mutable state: the scheduler loop feeds
//! arrived tasks into it and pulls the maximum out once per tick. Everything
//! is single-threaded and synchronous; all arrival times and priorities are
//! known upfront, so a run is fully deterministic.
//!
//! # References
//!
//! - Cormen et al. (2009), "Introduction to Algorithms", Ch. 6: Heapsort and
//!   priority queues
//! - Banks et al. (2010), "Discrete-Event System Simulation"
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"

pub mod models;
pub mod queue;
pub mod scheduler;
pub mod validation;
