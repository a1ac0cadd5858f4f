//! Input validation for planning problems.
//!
//! The planning components accept any input and degrade quietly on
//! malformed data. These checks let callers reject such data up front.
//! Detects:
//! - Duplicate IDs
//! - Dependencies on stages missing from the input
//! - Circular stage dependencies (DAG validation)
//! - Reversed time slots and negative earnings
//!
//! # Reference
//! Cormen et al. (2009), "Introduction to Algorithms", Ch. 22.4 (Topological Sort)

use std::collections::{BTreeMap, HashSet};
use thiserror::Error;

use crate::models::{SimulatedCapabilities, SimulatedProject, Stage};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entities share the same ID.
    DuplicateId,
    /// A stage depends on a stage that isn't in the input.
    InvalidDependency,
    /// Stage dependency graph contains a cycle.
    CyclicDependency,
    /// A time slot ends before it starts.
    InvalidTimeSlot,
    /// A project has negative earnings.
    NegativeEarnings,
}

impl ValidationError {
    /// Creates an error.
    pub fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a stage graph before leveling.
///
/// Checks:
/// 1. No duplicate stage IDs
/// 2. All dependencies point to stages in the input
/// 3. No circular dependencies
///
/// A graph passing these checks is leveled completely by
/// [`StageParallelization::of`](crate::parallelization::StageParallelization::of).
pub fn validate_stages(stages: &[Stage]) -> ValidationResult {
    let mut errors = Vec::new();

    let mut ids = HashSet::new();
    for stage in stages {
        if !ids.insert(stage.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate stage ID: {}", stage.id),
            ));
        }
    }

    for stage in stages {
        for dep in &stage.dependencies {
            if !ids.contains(dep.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::InvalidDependency,
                    format!("Stage '{}' depends on unknown stage '{}'", stage.id, dep),
                ));
            }
        }
    }

    if let Some(cycle_err) = detect_cycles(stages) {
        errors.push(cycle_err);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates allocation simulation input.
///
/// Checks:
/// 1. No duplicate project IDs
/// 2. No demand or offering slot ends before it starts
/// 3. No negative earnings
///
/// The pool is a multiset: identical offerings are separate units.
pub fn validate_simulation(
    projects: &[SimulatedProject],
    pool: &SimulatedCapabilities,
) -> ValidationResult {
    let mut errors = Vec::new();

    let mut project_ids = HashSet::new();
    for project in projects {
        if !project_ids.insert(project.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate project ID: {}", project.id),
            ));
        }
        if project.earnings < 0.0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeEarnings,
                format!("Project '{}' has negative earnings {}", project.id, project.earnings),
            ));
        }
        for demand in project.missing_demands.all() {
            if demand.slot.duration_ms() < 0 {
                errors.push(ValidationError::new(
                    ValidationErrorKind::InvalidTimeSlot,
                    format!(
                        "Project '{}' demands '{}' for a reversed slot",
                        project.id, demand.capability.name
                    ),
                ));
            }
        }
    }

    for offering in pool.capabilities() {
        if offering.time_slot.duration_ms() < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidTimeSlot,
                format!(
                    "Resource {} offers '{}' for a reversed slot",
                    offering.resource_id, offering.capability.name
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Detects cycles in the stage dependency graph using DFS.
///
/// Edges run from a stage to its dependencies. Dependencies on unknown
/// stages are reported elsewhere and ignored here. Stages are visited in
/// ID order so the reported stage is stable.
fn detect_cycles(stages: &[Stage]) -> Option<ValidationError> {
    let adj: BTreeMap<&str, Vec<&str>> = stages
        .iter()
        .map(|s| {
            (
                s.id.as_str(),
                s.dependencies.iter().map(String::as_str).collect(),
            )
        })
        .collect();

    let mut visited = HashSet::new();
    let mut in_stack = HashSet::new();

    for &node in adj.keys() {
        if !visited.contains(node) && has_cycle_dfs(node, &adj, &mut visited, &mut in_stack) {
            return Some(ValidationError::new(
                ValidationErrorKind::CyclicDependency,
                format!("Circular dependency detected involving stage '{node}'"),
            ));
        }
    }

    None
}

fn has_cycle_dfs<'a>(
    node: &'a str,
    adj: &BTreeMap<&'a str, Vec<&'a str>>,
    visited: &mut HashSet<&'a str>,
    in_stack: &mut HashSet<&'a str>,
) -> bool {
    visited.insert(node);
    in_stack.insert(node);

    if let Some(neighbors) = adj.get(node) {
        for &next in neighbors {
            if in_stack.contains(next) {
                return true; // Back edge → cycle
            }
            if !visited.contains(next) && has_cycle_dfs(next, adj, visited, in_stack) {
                return true;
            }
        }
    }

    in_stack.remove(node);
    false
}
