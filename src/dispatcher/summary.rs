//! Run-level aggregate metrics.
//!
//! Computed once from the full dispatch record sequence, for the
//! reporting layer's final summary table.
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Delivered count | Dispatches with a route |
//! | Unreachable count | Dispatches without a route |
//! | Total / max / avg distance | Over delivered dispatches only |
//! | Highest severity first | Dispatch sequence is severity-sorted |

use serde::{Deserialize, Serialize};

use crate::models::DispatchRecord;

/// Aggregate metrics for one allocation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DispatchSummary {
    /// Total sites dispatched.
    pub site_count: usize,
    /// Sites reached with a route.
    pub delivered_count: usize,
    /// Sites served without a route.
    pub unreachable_count: usize,
    /// Sum of delivered distances.
    pub total_distance: i64,
    /// Largest single delivered distance.
    pub max_distance: i64,
    /// Mean delivered distance. Zero when nothing was delivered.
    pub avg_distance: f64,
    /// Whether the dispatch sequence is non-increasing in severity.
    pub highest_severity_first: bool,
}

impl DispatchSummary {
    /// Computes summary metrics from an ordered dispatch sequence.
    pub fn calculate(records: &[DispatchRecord]) -> Self {
        let mut delivered_count = 0_usize;
        let mut total_distance = 0_i64;
        let mut max_distance = 0_i64;

        for record in records {
            if let Some(distance) = record.outcome.distance() {
                delivered_count += 1;
                total_distance += distance;
                max_distance = max_distance.max(distance);
            }
        }

        let avg_distance = if delivered_count > 0 {
            total_distance as f64 / delivered_count as f64
        } else {
            0.0
        };

        let highest_severity_first = records
            .windows(2)
            .all(|pair| pair[0].severity >= pair[1].severity);

        Self {
            site_count: records.len(),
            delivered_count,
            unreachable_count: records.len() - delivered_count,
            total_distance,
            max_distance,
            avg_distance,
            highest_severity_first,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RouteOutcome;

    fn record(order: usize, severity: i64, outcome: RouteOutcome) -> DispatchRecord {
        DispatchRecord {
            site_index: order - 1,
            site_name: format!("Site {order}"),
            order,
            severity,
            outcome,
        }
    }

    #[test]
    fn test_summary_mixed_outcomes() {
        let records = vec![
            record(
                1,
                10,
                RouteOutcome::Delivered {
                    distance: 15,
                    path: vec![0, 1],
                },
            ),
            record(
                2,
                5,
                RouteOutcome::Delivered {
                    distance: 12,
                    path: vec![0, 2],
                },
            ),
            record(3, 3, RouteOutcome::NoRoute),
        ];

        let summary = DispatchSummary::calculate(&records);
        assert_eq!(summary.site_count, 3);
        assert_eq!(summary.delivered_count, 2);
        assert_eq!(summary.unreachable_count, 1);
        assert_eq!(summary.total_distance, 27);
        assert_eq!(summary.max_distance, 15);
        assert!((summary.avg_distance - 13.5).abs() < 1e-9);
        assert!(summary.highest_severity_first);
    }

    #[test]
    fn test_summary_empty() {
        let summary = DispatchSummary::calculate(&[]);
        assert_eq!(summary.site_count, 0);
        assert_eq!(summary.delivered_count, 0);
        assert_eq!(summary.avg_distance, 0.0);
        assert!(summary.highest_severity_first);
    }

    #[test]
    fn test_summary_detects_out_of_order_severity() {
        let records = vec![
            record(1, 3, RouteOutcome::NoRoute),
            record(2, 9, RouteOutcome::NoRoute),
        ];
        let summary = DispatchSummary::calculate(&records);
        assert!(!summary.highest_severity_first);
    }
}
