//! Allocation result model.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{AvailableResourceCapability, SimulatedProject};

/// Offerings assigned to one chosen project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectAllocation {
    /// ID of the chosen project.
    pub project_id: String,
    /// Assigned offerings, one per missing demand, in demand order.
    pub resources: Vec<AvailableResourceCapability>,
}

/// Outcome of one allocation simulation.
///
/// A project is listed iff every one of its missing demands was matched to
/// a distinct offering. No offering appears under two projects, and
/// `profit` is the sum of the chosen projects' earnings.
///
/// `resources_allocated_to_projects[i]` belongs to `chosen_projects[i]`,
/// so projects sharing an ID still keep separate entries.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AllocationResult {
    /// Total earnings of the chosen projects.
    pub profit: f64,
    /// Chosen projects, in input order.
    pub chosen_projects: Vec<SimulatedProject>,
    /// Offerings assigned to each chosen project, parallel to `chosen_projects`.
    pub resources_allocated_to_projects: Vec<ProjectAllocation>,
}

impl AllocationResult {
    /// An outcome with nothing allocated.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a result, deriving `profit` from the chosen projects.
    pub fn from_allocations(allocations: Vec<(SimulatedProject, Vec<AvailableResourceCapability>)>) -> Self {
        let mut chosen_projects = Vec::with_capacity(allocations.len());
        let mut resources_allocated_to_projects = Vec::with_capacity(allocations.len());
        for (project, resources) in allocations {
            resources_allocated_to_projects.push(ProjectAllocation {
                project_id: project.id.clone(),
                resources,
            });
            chosen_projects.push(project);
        }
        let profit = chosen_projects.iter().map(|p| p.earnings).sum();
        Self {
            profit,
            chosen_projects,
            resources_allocated_to_projects,
        }
    }

    /// Whether a project with this ID was chosen.
    pub fn is_chosen(&self, project_id: &str) -> bool {
        self.chosen_projects.iter().any(|p| p.id == project_id)
    }

    /// IDs of chosen projects, in input order.
    pub fn chosen_ids(&self) -> Vec<&str> {
        self.chosen_projects.iter().map(|p| p.id.as_str()).collect()
    }

    /// Chosen projects paired with their assigned offerings, in input order.
    pub fn allocations(
        &self,
    ) -> impl Iterator<Item = (&SimulatedProject, &[AvailableResourceCapability])> {
        self.chosen_projects
            .iter()
            .zip(&self.resources_allocated_to_projects)
            .map(|(p, a)| (p, a.resources.as_slice()))
    }

    /// Offerings assigned to the first chosen project with this ID.
    pub fn resources_for(&self, project_id: &str) -> Option<&[AvailableResourceCapability]> {
        self.resources_allocated_to_projects
            .iter()
            .find(|a| a.project_id == project_id)
            .map(|a| a.resources.as_slice())
    }

    /// Total number of offerings consumed.
    pub fn allocated_count(&self) -> usize {
        self.resources_allocated_to_projects
            .iter()
            .map(|a| a.resources.len())
            .sum()
    }
}

impl fmt::Display for AllocationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "profit={} chosen=[{}]",
            self.profit,
            self.chosen_ids().join(", ")
        )
    }
}
