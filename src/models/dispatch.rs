//! Dispatch event records.
//!
//! The allocator emits one `DispatchRecord` per site, in dispatch order.
//! Records are structured data for an external reporting layer; the core
//! never formats output itself.

use serde::{Deserialize, Serialize};

/// Routing outcome of a single dispatch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RouteOutcome {
    /// A route from the dispatch center was found.
    Delivered {
        /// Total road distance from the center.
        distance: i64,
        /// Node sequence from the center to the site, inclusive.
        path: Vec<usize>,
    },
    /// No path exists from the center to the site. The site is still
    /// marked served so the run can complete with a full summary.
    NoRoute,
}

impl RouteOutcome {
    /// Distance when delivered, `None` when unreachable.
    pub fn distance(&self) -> Option<i64> {
        match self {
            RouteOutcome::Delivered { distance, .. } => Some(*distance),
            RouteOutcome::NoRoute => None,
        }
    }

    /// Whether a route was found.
    pub fn is_delivered(&self) -> bool {
        matches!(self, RouteOutcome::Delivered { .. })
    }
}

/// One dispatch event: a site being served, in priority order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispatchRecord {
    /// Index of the served site in the site list.
    pub site_index: usize,
    /// Site name (denormalized for reporting convenience).
    pub site_name: String,
    /// 1-based position in the dispatch sequence.
    pub order: usize,
    /// Severity at dispatch time.
    pub severity: i64,
    /// Routing result for this dispatch.
    pub outcome: RouteOutcome,
}
