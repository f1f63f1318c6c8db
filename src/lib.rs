//! Relief dispatch core.
//!
//! Allocates a scarce responder to the highest-severity affected site
//! first, then computes that site's road distance from a fixed dispatch
//! center. The crate returns structured dispatch records; reading input
//! and rendering reports belong to external collaborators.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Site`, `SiteStatus`, `SeverityZone`,
//!   `Location`, `DispatchRecord`, `RouteOutcome`
//! - **`graph`**: `RoadNetwork` — undirected weighted graph with
//!   Dijkstra shortest-path queries from the dispatch center
//! - **`queue`**: `SeverityQueue` — binary max-heap over severity with
//!   deterministic FIFO ordering among ties
//! - **`dispatcher`**: `ReliefAllocator` — the allocation loop — and
//!   `DispatchSummary` run metrics
//! - **`validation`**: Input integrity checks run before any dispatch
//!
//! # Model
//!
//! Node 0 is the dispatch center; the site at list index `i` is graph
//! node `i + 1`. One run is single-threaded and batch: every site is
//! served exactly once, and a site with no route from the center is
//! recorded as served-without-route rather than aborting the run.

pub mod dispatcher;
pub mod graph;
pub mod models;
pub mod queue;
pub mod validation;
