//! Tick-driven dispatch loop.
//!
//! # Algorithm
//!
//! 1. Stable-sort tasks by arrival tick (same-tick arrivals keep input order).
//! 2. On each tick, admit every pending task whose arrival tick has been
//!    reached, then extract and dispatch the highest-priority resident task,
//!    if any.
//! 3. Advance the tick and repeat until the pending list is exhausted and
//!    the queue is empty.
//!
//! One task is dispatched per tick; tasks not dispatched stay queued and
//! compete against newer arrivals on the next tick. Admission uses a cursor
//! over the sorted list, so total admission work is O(n) across a run.
//!
//! # Complexity
//! O(n log n) for the arrival sort plus O(n log n) queue work over a run.
//!
//! # Reference
//! Banks et al. (2010), "Discrete-Event System Simulation", Ch. 3

use log::{debug, trace};

use crate::models::{DispatchEvent, DispatchLog, Task, Tick};
use crate::queue::{IndexedPriorityQueue, QueueError};

/// Tick budget applied when none is configured.
const DEFAULT_MAX_TICKS: Tick = 1_000_000;

/// Scheduler-level failure.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    /// Two input tasks share an id, so admission cannot proceed.
    #[error("cannot admit task: {source}")]
    DuplicateTask {
        /// The underlying queue rejection.
        #[from]
        source: QueueError,
    },

    /// The loop ran past its configured tick budget before draining.
    #[error("tick limit exceeded: {limit}")]
    TickLimitExceeded {
        /// The configured budget.
        limit: Tick,
    },
}

/// Priority-driven discrete-time dispatcher.
///
/// Drives simulated time forward one tick at a time, admitting arrived
/// tasks into an [`IndexedPriorityQueue`] and dispatching the single
/// highest-priority resident task per tick.
///
/// # Example
///
/// ```
/// use u_dispatch::models::Task;
/// use u_dispatch::scheduler::TickedScheduler;
///
/// let tasks = vec![
///     Task::new("T1").with_priority(3).with_arrival(0),
///     Task::new("T2").with_priority(5).with_arrival(1),
///     Task::new("T3").with_priority(2).with_arrival(0),
///     Task::new("T4").with_priority(4).with_arrival(2),
/// ];
///
/// let log = TickedScheduler::new().run(tasks)?;
/// assert_eq!(log.dispatch_order(), vec!["T1", "T2", "T4", "T3"]);
/// # Ok::<(), u_dispatch::scheduler::DispatchError>(())
/// ```
#[derive(Debug, Clone)]
pub struct TickedScheduler {
    max_ticks: Tick,
}

impl TickedScheduler {
    /// Creates a scheduler with the default tick budget.
    pub fn new() -> Self {
        Self {
            max_ticks: DEFAULT_MAX_TICKS,
        }
    }

    /// Sets the tick budget for a run.
    pub fn with_max_ticks(mut self, max_ticks: Tick) -> Self {
        self.max_ticks = max_ticks;
        self
    }

    /// Runs the loop to completion and returns the full dispatch log.
    pub fn run(&self, tasks: Vec<Task>) -> Result<DispatchLog, DispatchError> {
        let mut events = Vec::new();
        let final_tick = self.run_with(tasks, |event| events.push(event.clone()))?;
        Ok(DispatchLog { events, final_tick })
    }

    /// Runs the loop, streaming each dispatch to `observer` as it happens.
    ///
    /// Returns the tick at which the loop reached its terminal state (the
    /// first tick with nothing pending and nothing queued).
    pub fn run_with<F>(&self, mut tasks: Vec<Task>, mut observer: F) -> Result<Tick, DispatchError>
    where
        F: FnMut(&DispatchEvent),
    {
        // Stable sort: same-tick arrivals keep input order.
        tasks.sort_by_key(|t| t.arrival_time);

        let mut queue = IndexedPriorityQueue::with_capacity(tasks.len());
        let mut pending = tasks.into_iter().peekable();
        let mut tick: Tick = 0;
        let mut dispatched = 0usize;

        while pending.peek().is_some() || !queue.is_empty() {
            if tick >= self.max_ticks {
                return Err(DispatchError::TickLimitExceeded {
                    limit: self.max_ticks,
                });
            }

            // Admission: move every task whose arrival tick has been reached.
            while let Some(task) = pending.next_if(|t| t.arrival_time <= tick) {
                trace!("tick {tick}: admitting {} (priority {})", task.id, task.priority);
                queue.insert(task)?;
            }

            // One dispatch slot per tick.
            if let Some(task) = queue.extract_max() {
                trace!("tick {tick}: dispatching {} (priority {})", task.id, task.priority);
                let event = DispatchEvent {
                    tick,
                    task_id: task.id,
                    priority: task.priority,
                };
                observer(&event);
                dispatched += 1;
            }

            tick += 1;
        }

        debug!("dispatch loop drained: {dispatched} tasks over {tick} ticks");
        Ok(tick)
    }
}

impl Default for TickedScheduler {
    fn default() -> Self {
        Self::new()
    }
}
