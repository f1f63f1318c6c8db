//! Severity-driven relief allocator.
//!
//! # Algorithm
//!
//! 1. Validate the site list against the road network.
//! 2. Seed the severity queue with every site.
//! 3. Loop: extract the highest-severity pending site, route it from
//!    the dispatch center, mark it served, record the event.
//! 4. Terminate when the queue is empty and compute the summary.
//!
//! An unreachable site is a recovered outcome: it is recorded as served
//! without a route so the run always completes with a full summary.

use std::error::Error;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::graph::{GraphConfigError, RoadNetwork, RouteError};
use crate::models::{DispatchRecord, RouteOutcome, Site, SiteStatus};
use crate::queue::{QueueError, SeverityQueue};
use crate::validation::{validate_input, ValidationError};

/// Graph node of the dispatch center.
pub const CENTER_NODE: usize = 0;

/// Allocation run failures.
#[derive(Debug, Clone, PartialEq)]
pub enum DispatchError {
    /// The site list failed pre-run validation.
    InvalidInput(Vec<ValidationError>),
    /// The road network configuration was rejected.
    Graph(GraphConfigError),
    /// A queue operation failed. Inside the guarded loop this means a
    /// broken invariant, not a recoverable condition.
    Queue(QueueError),
    /// A route query used a node outside the network. Node indices are
    /// validated at construction, so this is an invariant violation.
    Route(RouteError),
    /// `run` was called a second time on a finished allocator.
    AlreadyRun,
}

impl fmt::Display for DispatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DispatchError::InvalidInput(errors) => {
                write!(f, "invalid input ({} validation errors)", errors.len())
            }
            DispatchError::Graph(e) => write!(f, "graph configuration rejected: {e}"),
            DispatchError::Queue(e) => write!(f, "queue invariant violated: {e}"),
            DispatchError::Route(e) => write!(f, "route invariant violated: {e}"),
            DispatchError::AlreadyRun => write!(f, "allocation run already completed"),
        }
    }
}

impl Error for DispatchError {}

impl From<GraphConfigError> for DispatchError {
    fn from(e: GraphConfigError) -> Self {
        DispatchError::Graph(e)
    }
}

impl From<QueueError> for DispatchError {
    fn from(e: QueueError) -> Self {
        DispatchError::Queue(e)
    }
}

/// Result of a completed allocation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DispatchOutcome {
    /// Dispatch events in serve order.
    pub records: Vec<DispatchRecord>,
    /// Aggregate metrics over the records.
    pub summary: super::DispatchSummary,
}

/// Allocates the responder to sites in severity order.
///
/// Owns the authoritative site records and their serve state. The road
/// network is read-only throughout the run.
///
/// # Example
/// ```
/// use relief_dispatch::dispatcher::ReliefAllocator;
/// use relief_dispatch::graph::RoadNetwork;
/// use relief_dispatch::models::Site;
///
/// let sites = vec![Site::new("Area A", 5), Site::new("Area B", 10)];
/// let network = RoadNetwork::build(3, &[(0, 1, 12), (0, 2, 15)]).unwrap();
///
/// let mut allocator = ReliefAllocator::new(sites, network).unwrap();
/// let outcome = allocator.run().unwrap();
/// assert_eq!(outcome.records[0].site_name, "Area B");
/// ```
#[derive(Debug, Clone)]
pub struct ReliefAllocator {
    sites: Vec<Site>,
    network: RoadNetwork,
    queue: SeverityQueue,
    finished: bool,
}

impl ReliefAllocator {
    /// Validates the input and seeds the queue with every site.
    ///
    /// The network must have exactly `sites.len() + 1` nodes (node 0 is
    /// the dispatch center, site `i` is node `i + 1`).
    pub fn new(sites: Vec<Site>, network: RoadNetwork) -> Result<Self, DispatchError> {
        validate_input(&sites, network.node_count()).map_err(DispatchError::InvalidInput)?;

        let mut queue = SeverityQueue::new();
        for (index, site) in sites.iter().enumerate() {
            queue.insert(index, site.severity)?;
        }

        Ok(Self {
            sites,
            network,
            queue,
            finished: false,
        })
    }

    /// Runs the allocation loop to completion.
    ///
    /// Serves every site exactly once, highest severity first, and
    /// returns the ordered dispatch records with a summary. Unreachable
    /// sites are recorded with `RouteOutcome::NoRoute` rather than
    /// aborting the run.
    pub fn run(&mut self) -> Result<DispatchOutcome, DispatchError> {
        if self.finished {
            return Err(DispatchError::AlreadyRun);
        }

        let mut records = Vec::with_capacity(self.sites.len());

        while !self.queue.is_empty() {
            let entry = self.queue.extract_max()?;
            let site_node = entry.index + 1;

            let outcome = match self.network.shortest_path(CENTER_NODE, site_node) {
                Ok(route) => RouteOutcome::Delivered {
                    distance: route.distance,
                    path: route.path,
                },
                Err(RouteError::Unreachable { .. }) => RouteOutcome::NoRoute,
                Err(e @ RouteError::NodeOutOfRange { .. }) => {
                    return Err(DispatchError::Route(e))
                }
            };

            let site = &mut self.sites[entry.index];
            site.status = SiteStatus::Served;

            records.push(DispatchRecord {
                site_index: entry.index,
                site_name: site.name.clone(),
                order: records.len() + 1,
                severity: entry.priority,
                outcome,
            });
        }

        self.finished = true;
        let summary = super::DispatchSummary::calculate(&records);
        Ok(DispatchOutcome { records, summary })
    }

    /// The authoritative site records, including post-run serve state.
    pub fn sites(&self) -> &[Site] {
        &self.sites
    }

    /// Whether the run has completed.
    pub fn is_finished(&self) -> bool {
        self.finished
    }
}
