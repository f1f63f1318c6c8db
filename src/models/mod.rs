//! Relief dispatch domain models.
//!
//! Core data types for one allocation run: the affected sites, their
//! serve state, and the dispatch events the allocator emits.
//!
//! # Node Mapping
//!
//! | Entity | Graph node |
//! |--------|-----------|
//! | Dispatch center | 0 |
//! | Site at list index `i` | `i + 1` |

mod dispatch;
mod site;

pub use dispatch::{DispatchRecord, RouteOutcome};
pub use site::{Location, SeverityZone, Site, SiteStatus};
