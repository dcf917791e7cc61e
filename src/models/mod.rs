//! Dispatch domain models.
//!
//! Core data types for describing a dispatch run: the tasks that arrive
//! over simulated time and the event sequence the simulation produces.

mod dispatch;
mod task;

pub use dispatch::{DispatchEvent, DispatchLog};
pub use task::{Task, Tick};
