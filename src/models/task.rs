//! Task model.
//!
//! A task is the unit of dispatch: an identity, a scheduling priority, and
//! the tick at which it arrives. Tasks are inert data — queue residency and
//! priority changes are managed by the owning queue.

use serde::{Deserialize, Serialize};

/// One discrete unit of simulated time.
pub type Tick = u64;

/// A task awaiting dispatch.
///
/// # Time Representation
/// Arrival times are in ticks relative to the simulation start (t=0).
/// The consumer defines the wall-clock meaning of a tick.
///
/// # Priority Mutation
/// The priority of a *resident* task must only change through
/// [`update_priority`](crate::queue::IndexedPriorityQueue::update_priority).
/// The queue owns its copy of every resident task, so holders of a `Task`
/// value outside the queue cannot desynchronize heap order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique task identifier.
    pub id: String,
    /// Dispatch priority (higher = dispatched sooner).
    pub priority: i32,
    /// Tick at which the task becomes eligible for admission.
    pub arrival_time: Tick,
}

impl Task {
    /// Creates a task with priority 0 arriving at tick 0.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            priority: 0,
            arrival_time: 0,
        }
    }

    /// Sets the dispatch priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the arrival tick.
    pub fn with_arrival(mut self, arrival_time: Tick) -> Self {
        self.arrival_time = arrival_time;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_defaults() {
        let task = Task::new("T1");
        assert_eq!(task.id, "T1");
        assert_eq!(task.priority, 0);
        assert_eq!(task.arrival_time, 0);
    }

    #[test]
    fn test_task_builder() {
        let task = Task::new("T1").with_priority(7).with_arrival(3);
        assert_eq!(task.priority, 7);
        assert_eq!(task.arrival_time, 3);
    }

    #[test]
    fn test_task_serde_round_trip() {
        let task = Task::new("T1").with_priority(-2).with_arrival(10);
        let json = serde_json::to_string(&task).unwrap();
        let back: Task = serde_json::from_str(&json).unwrap();
        assert_eq!(back, task);
    }
}
