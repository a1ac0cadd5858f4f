//! Stage model and leveling output.
//!
//! A stage is a unit of project work that may depend on other stages.
//! Leveling groups stages into waves: every stage in wave `k` depends
//! only on stages in waves `0..k`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// A unit of work with dependencies on other stages.
///
/// Stages are identified by `id`; dependencies reference other stage IDs.
/// Equality and ordering consider all fields, so two stages with the same
/// ID but different dependency sets are distinct values.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Stage {
    /// Unique stage identifier.
    pub id: String,
    /// Human-readable name (defaults to the ID).
    pub name: String,
    /// IDs of stages that must complete before this one starts.
    pub dependencies: BTreeSet<String>,
}

impl Stage {
    /// Creates a stage with no dependencies. The name defaults to the ID.
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            id,
            dependencies: BTreeSet::new(),
        }
    }

    /// Sets the stage name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Adds a dependency by stage ID.
    pub fn with_dependency(mut self, stage_id: impl Into<String>) -> Self {
        self.dependencies.insert(stage_id.into());
        self
    }

    /// Adds a dependency on another stage.
    pub fn depends_on(self, stage: &Stage) -> Self {
        self.with_dependency(stage.id.clone())
    }

    /// Returns a copy of this stage with the given dependency set.
    pub fn with_dependencies(&self, dependencies: BTreeSet<String>) -> Self {
        Self {
            id: self.id.clone(),
            name: self.name.clone(),
            dependencies,
        }
    }

    /// Whether this stage depends on anything.
    pub fn has_any_dependency(&self) -> bool {
        !self.dependencies.is_empty()
    }
}

/// A group of stages with no unresolved dependency at one leveling round.
///
/// Members may run concurrently; their order carries no meaning. They are
/// kept sorted by stage ID so output is reproducible.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ParallelStages {
    stages: Vec<Stage>,
}

impl ParallelStages {
    /// Creates a group from any collection of stages.
    pub fn new(stages: impl IntoIterator<Item = Stage>) -> Self {
        let mut stages: Vec<Stage> = stages.into_iter().collect();
        stages.sort_by(|a, b| a.id.cmp(&b.id));
        Self { stages }
    }

    /// Member stages in ascending ID order.
    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    /// Whether a stage with this ID is a member.
    pub fn contains(&self, stage_id: &str) -> bool {
        self.stages
            .binary_search_by(|s| s.id.as_str().cmp(stage_id))
            .is_ok()
    }

    /// Member stage IDs in ascending order.
    pub fn ids(&self) -> Vec<&str> {
        self.stages.iter().map(|s| s.id.as_str()).collect()
    }

    /// Number of member stages.
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    /// Whether the group is empty.
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }
}

impl fmt::Display for ParallelStages {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.stages.iter().map(|s| s.name.as_str()).collect();
        names.sort_unstable();
        write!(f, "{}", names.join(", "))
    }
}

/// Ordered sequence of waves.
///
/// Wave `i` must complete before wave `i + 1` may start.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ParallelStagesList {
    waves: Vec<ParallelStages>,
}

impl ParallelStagesList {
    /// Creates an empty list.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Appends a wave.
    pub fn push(&mut self, wave: ParallelStages) {
        self.waves.push(wave);
    }

    /// Returns a new list with `wave` appended.
    pub fn add(mut self, wave: ParallelStages) -> Self {
        self.push(wave);
        self
    }

    /// All waves in execution order.
    pub fn waves(&self) -> &[ParallelStages] {
        &self.waves
    }

    /// Iterates waves in execution order.
    pub fn iter(&self) -> std::slice::Iter<'_, ParallelStages> {
        self.waves.iter()
    }

    /// Number of waves.
    pub fn len(&self) -> usize {
        self.waves.len()
    }

    /// Whether there are no waves.
    pub fn is_empty(&self) -> bool {
        self.waves.is_empty()
    }

    /// Total number of stages across all waves.
    pub fn stage_count(&self) -> usize {
        self.waves.iter().map(ParallelStages::len).sum()
    }

    /// Index of the wave containing the stage, if any.
    pub fn wave_of(&self, stage_id: &str) -> Option<usize> {
        self.waves.iter().position(|w| w.contains(stage_id))
    }

    /// Whether any wave contains the stage.
    pub fn contains(&self, stage_id: &str) -> bool {
        self.wave_of(stage_id).is_some()
    }
}

impl<'a> IntoIterator for &'a ParallelStagesList {
    type Item = &'a ParallelStages;
    type IntoIter = std::slice::Iter<'a, ParallelStages>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for ParallelStagesList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let waves: Vec<String> = self.waves.iter().map(ToString::to_string).collect();
        write!(f, "{}", waves.join(" | "))
    }
}
