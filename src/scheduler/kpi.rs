//! Dispatch quality metrics (KPIs).
//!
//! Computes standard queueing indicators from a completed dispatch log
//! and its input tasks.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Dispatched Count | Number of tasks dispatched |
//! | Makespan | Ticks from start to terminal state |
//! | Total Wait | Sum of (dispatch tick - arrival tick) |
//! | Maximum Wait | Largest single wait |
//! | Avg Wait | Mean wait across dispatched tasks |
//! | Idle Ticks | Ticks on which nothing was dispatched |
//!
//! # Reference
//! Pinedo (2016), "Scheduling", Ch. 1.2: Performance Measures

use std::collections::HashMap;

use crate::models::{DispatchLog, Task, Tick};

/// Dispatch performance indicators.
///
/// All time values are in ticks.
#[derive(Debug, Clone)]
pub struct DispatchKpi {
    /// Number of tasks dispatched.
    pub dispatched_count: usize,
    /// Ticks from start to the loop's terminal state.
    pub makespan_ticks: Tick,
    /// Sum of waiting ticks across all dispatched tasks.
    pub total_wait_ticks: Tick,
    /// Largest single wait.
    pub max_wait_ticks: Tick,
    /// Mean wait across dispatched tasks.
    pub avg_wait_ticks: f64,
    /// Ticks on which the queue was empty and nothing was dispatched.
    pub idle_ticks: Tick,
}

impl DispatchKpi {
    /// Computes KPIs from a dispatch log and its input tasks.
    ///
    /// # Arguments
    /// * `log` - The completed run.
    /// * `tasks` - The input tasks (for arrival ticks).
    pub fn calculate(log: &DispatchLog, tasks: &[Task]) -> Self {
        let arrivals: HashMap<&str, Tick> = tasks
            .iter()
            .map(|t| (t.id.as_str(), t.arrival_time))
            .collect();

        let mut total_wait: Tick = 0;
        let mut max_wait: Tick = 0;
        let mut counted: usize = 0;

        for event in &log.events {
            if let Some(&arrival) = arrivals.get(event.task_id.as_str()) {
                counted += 1;
                let wait = event.tick.saturating_sub(arrival);
                total_wait += wait;
                max_wait = max_wait.max(wait);
            }
        }

        let avg_wait_ticks = if counted == 0 {
            0.0
        } else {
            total_wait as f64 / counted as f64
        };

        // One dispatch slot per tick, so every unused tick was idle.
        let idle_ticks = log.final_tick.saturating_sub(log.event_count() as Tick);

        Self {
            dispatched_count: log.event_count(),
            makespan_ticks: log.final_tick,
            total_wait_ticks: total_wait,
            max_wait_ticks: max_wait,
            avg_wait_ticks,
            idle_ticks,
        }
    }

    /// Whether the run meets the given wait threshold.
    pub fn meets_threshold(&self, max_wait_ticks: Tick) -> bool {
        self.max_wait_ticks <= max_wait_ticks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::TickedScheduler;

    fn task(id: &str, priority: i32, arrival: Tick) -> Task {
        Task::new(id).with_priority(priority).with_arrival(arrival)
    }

    #[test]
    fn test_kpi_for_contended_run() {
        // T3 arrives at 0 but dispatches last, at tick 3.
        let tasks = vec![
            task("T1", 3, 0),
            task("T2", 5, 1),
            task("T3", 2, 0),
            task("T4", 4, 2),
        ];
        let log = TickedScheduler::new().run(tasks.clone()).unwrap();

        let kpi = DispatchKpi::calculate(&log, &tasks);
        assert_eq!(kpi.dispatched_count, 4);
        assert_eq!(kpi.makespan_ticks, 4);
        assert_eq!(kpi.total_wait_ticks, 3);
        assert_eq!(kpi.max_wait_ticks, 3);
        assert!((kpi.avg_wait_ticks - 0.75).abs() < 1e-10);
        assert_eq!(kpi.idle_ticks, 0);
    }

    #[test]
    fn test_kpi_counts_idle_ticks() {
        let tasks = vec![task("early", 1, 0), task("late", 1, 5)];
        let log = TickedScheduler::new().run(tasks.clone()).unwrap();

        let kpi = DispatchKpi::calculate(&log, &tasks);
        assert_eq!(kpi.makespan_ticks, 6);
        assert_eq!(kpi.idle_ticks, 4);
        assert_eq!(kpi.total_wait_ticks, 0);
    }

    #[test]
    fn test_kpi_empty_run() {
        let log = DispatchLog::new();
        let kpi = DispatchKpi::calculate(&log, &[]);
        assert_eq!(kpi.dispatched_count, 0);
        assert_eq!(kpi.avg_wait_ticks, 0.0);
        assert_eq!(kpi.idle_ticks, 0);
    }

    #[test]
    fn test_meets_threshold() {
        let tasks = vec![task("a", 2, 0), task("b", 1, 0)];
        let log = TickedScheduler::new().run(tasks.clone()).unwrap();
        let kpi = DispatchKpi::calculate(&log, &tasks);

        // "b" waits one tick behind "a".
        assert!(kpi.meets_threshold(1));
        assert!(!kpi.meets_threshold(0));
    }
}
