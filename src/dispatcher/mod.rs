//! Allocation orchestration and run metrics.
//!
//! `ReliefAllocator` drives one batch run: it seeds the severity queue,
//! serves sites highest-severity first, routes each one from the
//! dispatch center, and emits the ordered dispatch records.
//! `DispatchSummary` aggregates a finished run for reporting.

mod allocator;
mod summary;

pub use allocator::{DispatchError, DispatchOutcome, ReliefAllocator, CENTER_NODE};
pub use summary::DispatchSummary;
