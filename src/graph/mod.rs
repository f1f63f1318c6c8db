//! Road network and shortest-path queries.
//!
//! `RoadNetwork` stores an undirected weighted graph over the dispatch
//! center (node 0) and the affected sites (nodes 1..n-1). Edges model
//! physical road distances, so each edge is inserted in both adjacency
//! rows. The graph is validated at construction and read-only afterward;
//! `shortest_path` is a pure query.
//!
//! # Algorithm
//! Dijkstra with a binary-heap frontier — valid because construction
//! rejects negative weights. Multi-hop routes are always considered, so
//! a center→A→B detour beats a larger (or missing) direct center→B edge.
//!
//! # Reference
//! Cormen et al. (2009), "Introduction to Algorithms", Ch. 24.3

use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::error::Error;
use std::fmt;

/// Default bound on node count.
pub const DEFAULT_NODE_CAPACITY: usize = 1024;

/// Graph construction failures. All are fatal before any query runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphConfigError {
    /// An edge carries a negative weight, which breaks Dijkstra.
    NegativeWeight {
        /// Edge endpoints.
        from: usize,
        /// Edge endpoints.
        to: usize,
        /// The offending weight.
        weight: i64,
    },
    /// An edge endpoint is outside `0..node_count`.
    NodeOutOfRange {
        /// The offending node index.
        index: usize,
        /// The configured node count.
        node_count: usize,
    },
    /// The requested node count exceeds the capacity bound.
    CapacityExceeded {
        /// The requested node count.
        requested: usize,
        /// The configured bound.
        capacity: usize,
    },
}

impl fmt::Display for GraphConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphConfigError::NegativeWeight { from, to, weight } => {
                write!(f, "edge ({from}, {to}) has negative weight {weight}")
            }
            GraphConfigError::NodeOutOfRange { index, node_count } => {
                write!(f, "node {index} out of range for {node_count} nodes")
            }
            GraphConfigError::CapacityExceeded {
                requested,
                capacity,
            } => {
                write!(f, "{requested} nodes requested, capacity is {capacity}")
            }
        }
    }
}

impl Error for GraphConfigError {}

/// Shortest-path query failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    /// No path exists between the two nodes. A legitimate domain
    /// outcome, distinct from a zero-cost route.
    Unreachable {
        /// Query origin.
        from: usize,
        /// Query target.
        to: usize,
    },
    /// A query endpoint is outside the node set.
    NodeOutOfRange {
        /// The offending node index.
        index: usize,
        /// The graph's node count.
        node_count: usize,
    },
}

impl fmt::Display for RouteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteError::Unreachable { from, to } => {
                write!(f, "no route from node {from} to node {to}")
            }
            RouteError::NodeOutOfRange { index, node_count } => {
                write!(f, "node {index} out of range for {node_count} nodes")
            }
        }
    }
}

impl Error for RouteError {}

/// A shortest route between two nodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    /// Total weight along the route.
    pub distance: i64,
    /// Node sequence from origin to target, inclusive. A same-node
    /// query yields a single-element path.
    pub path: Vec<usize>,
}

/// An undirected weighted road network, read-only after construction.
///
/// # Example
/// ```
/// use relief_dispatch::graph::RoadNetwork;
///
/// let network = RoadNetwork::build(3, &[(0, 1, 12), (0, 2, 15), (1, 2, 20)]).unwrap();
/// let route = network.shortest_path(0, 2).unwrap();
/// assert_eq!(route.distance, 15);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RoadNetwork {
    /// Adjacency rows: `adjacency[u]` lists `(v, weight)` neighbors.
    adjacency: Vec<Vec<(usize, i64)>>,
}

impl RoadNetwork {
    /// Builds a network with the default node capacity.
    pub fn build(
        node_count: usize,
        edges: &[(usize, usize, i64)],
    ) -> Result<Self, GraphConfigError> {
        Self::build_with_capacity(node_count, edges, DEFAULT_NODE_CAPACITY)
    }

    /// Builds a network bounded by an explicit node capacity.
    ///
    /// Rejects the configuration before any query can run: negative
    /// weights, out-of-range endpoints, and capacity overruns are all
    /// construction-time errors.
    pub fn build_with_capacity(
        node_count: usize,
        edges: &[(usize, usize, i64)],
        capacity: usize,
    ) -> Result<Self, GraphConfigError> {
        if node_count > capacity {
            return Err(GraphConfigError::CapacityExceeded {
                requested: node_count,
                capacity,
            });
        }

        let mut adjacency = vec![Vec::new(); node_count];
        for &(u, v, weight) in edges {
            for endpoint in [u, v] {
                if endpoint >= node_count {
                    return Err(GraphConfigError::NodeOutOfRange {
                        index: endpoint,
                        node_count,
                    });
                }
            }
            if weight < 0 {
                return Err(GraphConfigError::NegativeWeight {
                    from: u,
                    to: v,
                    weight,
                });
            }
            // Roads run both ways.
            adjacency[u].push((v, weight));
            adjacency[v].push((u, weight));
        }

        Ok(Self { adjacency })
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Minimum-weight route between two nodes.
    ///
    /// Dijkstra over the full node set. `start == end` is a zero-cost
    /// route; an exhausted frontier without reaching `end` signals
    /// `Unreachable`.
    pub fn shortest_path(&self, start: usize, end: usize) -> Result<Route, RouteError> {
        let n = self.adjacency.len();
        for index in [start, end] {
            if index >= n {
                return Err(RouteError::NodeOutOfRange {
                    index,
                    node_count: n,
                });
            }
        }

        let mut dist: Vec<Option<i64>> = vec![None; n];
        let mut prev: Vec<Option<usize>> = vec![None; n];
        let mut frontier = BinaryHeap::new();

        dist[start] = Some(0);
        frontier.push(Reverse((0_i64, start)));

        while let Some(Reverse((cost, node))) = frontier.pop() {
            if node == end {
                return Ok(Route {
                    distance: cost,
                    path: self.trace_path(&prev, start, end),
                });
            }
            // Stale frontier entry for an already-settled node.
            if dist[node].is_some_and(|best| cost > best) {
                continue;
            }

            for &(next, weight) in &self.adjacency[node] {
                let candidate = cost + weight;
                if dist[next].map_or(true, |best| candidate < best) {
                    dist[next] = Some(candidate);
                    prev[next] = Some(node);
                    frontier.push(Reverse((candidate, next)));
                }
            }
        }

        Err(RouteError::Unreachable {
            from: start,
            to: end,
        })
    }

    fn trace_path(&self, prev: &[Option<usize>], start: usize, end: usize) -> Vec<usize> {
        let mut path = vec![end];
        let mut node = end;
        while node != start {
            match prev[node] {
                Some(p) => {
                    path.push(p);
                    node = p;
                }
                None => break,
            }
        }
        path.reverse();
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_network() -> RoadNetwork {
        RoadNetwork::build(4, &[(0, 1, 12), (0, 2, 15), (1, 2, 20)]).unwrap()
    }

    #[test]
    fn test_direct_edge_beats_detour() {
        let network = sample_network();
        let route = network.shortest_path(0, 2).unwrap();
        assert_eq!(route.distance, 15);
        assert_eq!(route.path, vec![0, 2]);
    }

    #[test]
    fn test_multi_hop_beats_direct_edge() {
        let network = RoadNetwork::build(3, &[(0, 1, 2), (1, 2, 3), (0, 2, 10)]).unwrap();
        let route = network.shortest_path(0, 2).unwrap();
        assert_eq!(route.distance, 5);
        assert_eq!(route.path, vec![0, 1, 2]);
    }

    #[test]
    fn test_multi_hop_when_no_direct_edge() {
        let network = RoadNetwork::build(3, &[(0, 1, 12), (1, 2, 20)]).unwrap();
        let route = network.shortest_path(0, 2).unwrap();
        assert_eq!(route.distance, 32);
        assert_eq!(route.path, vec![0, 1, 2]);
    }

    #[test]
    fn test_same_node_is_zero_cost() {
        let network = sample_network();
        let route = network.shortest_path(2, 2).unwrap();
        assert_eq!(route.distance, 0);
        assert_eq!(route.path, vec![2]);
    }

    #[test]
    fn test_isolated_node_is_unreachable() {
        let network = sample_network();
        assert_eq!(
            network.shortest_path(0, 3),
            Err(RouteError::Unreachable { from: 0, to: 3 })
        );
    }

    #[test]
    fn test_undirected_symmetry() {
        let network = sample_network();
        let forward = network.shortest_path(0, 1).unwrap();
        let back = network.shortest_path(1, 0).unwrap();
        assert_eq!(forward.distance, back.distance);
    }

    #[test]
    fn test_build_rejects_negative_weight() {
        assert_eq!(
            RoadNetwork::build(3, &[(0, 1, -4)]),
            Err(GraphConfigError::NegativeWeight {
                from: 0,
                to: 1,
                weight: -4
            })
        );
    }

    #[test]
    fn test_build_rejects_out_of_range_node() {
        assert_eq!(
            RoadNetwork::build(3, &[(0, 5, 7)]),
            Err(GraphConfigError::NodeOutOfRange {
                index: 5,
                node_count: 3
            })
        );
    }

    #[test]
    fn test_build_rejects_capacity_overrun() {
        assert_eq!(
            RoadNetwork::build_with_capacity(8, &[], 4),
            Err(GraphConfigError::CapacityExceeded {
                requested: 8,
                capacity: 4
            })
        );
    }

    #[test]
    fn test_query_rejects_out_of_range_node() {
        let network = sample_network();
        assert_eq!(
            network.shortest_path(0, 9),
            Err(RouteError::NodeOutOfRange {
                index: 9,
                node_count: 4
            })
        );
    }

    #[test]
    fn test_rebuild_is_idempotent() {
        let edges = [(0, 1, 12), (0, 2, 15), (1, 2, 20)];
        let a = RoadNetwork::build(4, &edges).unwrap();
        let b = RoadNetwork::build(4, &edges).unwrap();

        for start in 0..4 {
            for end in 0..4 {
                assert_eq!(a.shortest_path(start, end), b.shortest_path(start, end));
            }
        }
    }
}
