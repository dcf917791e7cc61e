//! Dispatch log (solution) model.
//!
//! The observable outcome of a scheduler run: which task left the queue at
//! which tick, in order. The log is plain data — a reporting or CLI layer
//! renders it; this crate only produces it.

use serde::{Deserialize, Serialize};

use super::Tick;

/// A single dispatch: one task leaving the queue at one tick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispatchEvent {
    /// Tick at which the dispatch happened.
    pub tick: Tick,
    /// Dispatched task id.
    pub task_id: String,
    /// Task priority at the moment of dispatch.
    pub priority: i32,
}

impl DispatchEvent {
    /// Creates a new dispatch event.
    pub fn new(tick: Tick, task_id: impl Into<String>, priority: i32) -> Self {
        Self {
            tick,
            task_id: task_id.into(),
            priority,
        }
    }
}

/// Ordered record of every dispatch in a run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispatchLog {
    /// Dispatch events in dispatch order.
    pub events: Vec<DispatchEvent>,
    /// Tick at which the loop reached its terminal state.
    pub final_tick: Tick,
}

impl DispatchLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a dispatch event.
    pub fn add_event(&mut self, event: DispatchEvent) {
        self.events.push(event);
    }

    /// Number of dispatches.
    pub fn event_count(&self) -> usize {
        self.events.len()
    }

    /// Whether no task was dispatched.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Task ids in dispatch order.
    pub fn dispatch_order(&self) -> Vec<&str> {
        self.events.iter().map(|e| e.task_id.as_str()).collect()
    }

    /// The event for a given task, if it was dispatched.
    pub fn event_for_task(&self, task_id: &str) -> Option<&DispatchEvent> {
        self.events.iter().find(|e| e.task_id == task_id)
    }

    /// Tick of the last dispatch, if any.
    pub fn last_dispatch_tick(&self) -> Option<Tick> {
        self.events.last().map(|e| e.tick)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_log() -> DispatchLog {
        let mut log = DispatchLog::new();
        log.add_event(DispatchEvent::new(0, "T1", 3));
        log.add_event(DispatchEvent::new(1, "T2", 5));
        log.add_event(DispatchEvent::new(3, "T3", 2));
        log.final_tick = 4;
        log
    }

    #[test]
    fn test_dispatch_order() {
        let log = sample_log();
        assert_eq!(log.dispatch_order(), vec!["T1", "T2", "T3"]);
        assert_eq!(log.event_count(), 3);
        assert!(!log.is_empty());
    }

    #[test]
    fn test_event_for_task() {
        let log = sample_log();
        let e = log.event_for_task("T2").unwrap();
        assert_eq!(e.tick, 1);
        assert_eq!(e.priority, 5);
        assert!(log.event_for_task("missing").is_none());
    }

    #[test]
    fn test_last_dispatch_tick() {
        let log = sample_log();
        assert_eq!(log.last_dispatch_tick(), Some(3));
        assert_eq!(DispatchLog::new().last_dispatch_tick(), None);
    }

    #[test]
    fn test_log_serde_round_trip() {
        let log = sample_log();
        let json = serde_json::to_string(&log).unwrap();
        let back: DispatchLog = serde_json::from_str(&json).unwrap();
        assert_eq!(back, log);
    }
}
