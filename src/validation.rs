//! Input validation for an allocation run.
//!
//! Checks structural integrity of the site list against the road
//! network before the dispatch loop starts. Detects:
//! - Duplicate site names
//! - Negative severity scores
//! - An empty site list
//! - A node count that does not match the site list
//!
//! All failures are collected and reported together; nothing runs until
//! the input is clean, so a started run never produces a partial summary.

use crate::models::Site;
use std::collections::HashSet;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two sites share the same name.
    DuplicateName,
    /// A site has a severity below zero.
    NegativeSeverity,
    /// No sites were supplied.
    EmptySiteList,
    /// The network's node count is not `sites.len() + 1`.
    NodeCountMismatch,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the input for an allocation run.
///
/// `node_count` is the road network's node count, which must equal the
/// site count plus one (node 0 is the dispatch center).
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(sites: &[Site], node_count: usize) -> ValidationResult {
    let mut errors = Vec::new();

    if sites.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptySiteList,
            "no affected sites supplied",
        ));
    }

    let mut names = HashSet::new();
    for site in sites {
        if !names.insert(site.name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateName,
                format!("Duplicate site name: {}", site.name),
            ));
        }
        if site.severity < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeSeverity,
                format!("Site '{}' has negative severity {}", site.name, site.severity),
            ));
        }
    }

    if node_count != sites.len() + 1 {
        errors.push(ValidationError::new(
            ValidationErrorKind::NodeCountMismatch,
            format!(
                "network has {} nodes, expected {} (center + {} sites)",
                node_count,
                sites.len() + 1,
                sites.len()
            ),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
