//! Tick-driven dispatch simulation and metrics.
//!
//! `TickedScheduler` advances discrete time one tick at a time, admitting
//! arrived tasks into the priority queue and dispatching the single
//! highest-priority resident task per tick. `DispatchKpi` computes queueing
//! metrics from the resulting log.
//!
//! # References
//!
//! - Banks et al. (2010), "Discrete-Event System Simulation", Ch. 3
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4

mod kpi;
mod ticked;

pub use kpi::DispatchKpi;
pub use ticked::{DispatchError, TickedScheduler};
