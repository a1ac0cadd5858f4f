//! Wave-by-wave topological leveling.
//!
//! # Algorithm
//!
//! 1. Split the pending stages into `ready` (no remaining dependency) and
//!    `blocked`.
//! 2. If nothing is ready, stop.
//! 3. Emit `ready` as the next wave.
//! 4. If nothing is blocked, stop.
//! 5. Drop the just-emitted stage IDs from every blocked stage's remaining
//!    dependencies and repeat with the blocked stages.
//!
//! Remaining dependencies live in a private per-stage working set; output
//! waves hold the caller's original stage values.
//!
//! # Complexity
//! O(V·(V+E)) worst case (one wave per stage in a chain).

use std::collections::{BTreeSet, HashSet};

use crate::error::PlanError;
use crate::models::{ParallelStages, ParallelStagesList, Stage};

/// Splits a stage graph into ordered waves of concurrently runnable stages.
///
/// # Example
///
/// ```
/// use u_plan::models::Stage;
/// use u_plan::parallelization::StageParallelization;
///
/// let design = Stage::new("design");
/// let backend = Stage::new("backend").depends_on(&design);
/// let frontend = Stage::new("frontend").depends_on(&design);
/// let release = Stage::new("release").depends_on(&backend).depends_on(&frontend);
///
/// let waves = StageParallelization::new().of(&[design, backend, frontend, release]);
/// assert_eq!(waves.to_string(), "design | backend, frontend | release");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct StageParallelization;

impl StageParallelization {
    /// Creates a leveler.
    pub fn new() -> Self {
        Self
    }

    /// Levels `stages` into waves.
    ///
    /// Input is a set: a stage value given twice is placed once.
    /// Stages caught in a cycle or depending on a stage absent from the
    /// input never become ready and are left out of the result. A warning
    /// is logged when that happens; use [`try_of`](Self::try_of) to treat
    /// it as an error instead.
    pub fn of<'a>(&self, stages: impl IntoIterator<Item = &'a Stage>) -> ParallelStagesList {
        let (waves, unresolved) = level(stages);
        if !unresolved.is_empty() {
            tracing::warn!(
                dropped = unresolved.len(),
                waves = waves.len(),
                "stage leveling stopped with unresolvable dependencies"
            );
        }
        waves
    }

    /// Levels `stages` into waves, failing if any stage cannot be placed.
    ///
    /// # Errors
    /// [`PlanError::UnresolvableDependencies`] listing, in ascending ID
    /// order, every stage that never became ready.
    pub fn try_of<'a>(
        &self,
        stages: impl IntoIterator<Item = &'a Stage>,
    ) -> Result<ParallelStagesList, PlanError> {
        let (waves, unresolved) = level(stages);
        if unresolved.is_empty() {
            Ok(waves)
        } else {
            Err(PlanError::UnresolvableDependencies { stages: unresolved })
        }
    }
}

/// Returns the waves and the sorted IDs of stages left blocked.
///
/// The input is treated as a set: repeated stage values are leveled once.
fn level<'a>(stages: impl IntoIterator<Item = &'a Stage>) -> (ParallelStagesList, Vec<String>) {
    let distinct: BTreeSet<&'a Stage> = stages.into_iter().collect();
    let mut pending: Vec<(&'a Stage, BTreeSet<&'a str>)> = distinct
        .into_iter()
        .map(|s| (s, s.dependencies.iter().map(String::as_str).collect()))
        .collect();
    let mut waves = ParallelStagesList::empty();

    while !pending.is_empty() {
        let (ready, blocked): (Vec<_>, Vec<_>) =
            pending.into_iter().partition(|(_, deps)| deps.is_empty());
        pending = blocked;

        if ready.is_empty() {
            break;
        }

        let ready_ids: HashSet<&'a str> = ready.iter().map(|(s, _)| s.id.as_str()).collect();
        tracing::debug!(
            wave = waves.len(),
            ready = ready.len(),
            blocked = pending.len(),
            "stage wave resolved"
        );
        waves.push(ParallelStages::new(ready.into_iter().map(|(s, _)| s.clone())));

        for (_, deps) in &mut pending {
            deps.retain(|d| !ready_ids.contains(d));
        }
    }

    let mut unresolved: Vec<String> = pending.into_iter().map(|(s, _)| s.id.clone()).collect();
    unresolved.sort();
    unresolved.dedup();
    (waves, unresolved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};
    use std::collections::HashMap;

    fn ids(waves: &ParallelStagesList) -> Vec<Vec<&str>> {
        waves.iter().map(|w| w.ids()).collect()
    }

    #[test]
    fn test_empty_input() {
        let stages: Vec<Stage> = Vec::new();
        let waves = StageParallelization::new().of(&stages);
        assert!(waves.is_empty());
        assert!(StageParallelization::new().try_of(&stages).is_ok());
    }

    #[test]
    fn test_single_stage() {
        let waves = StageParallelization::new().of(&[Stage::new("A")]);
        assert_eq!(ids(&waves), vec![vec!["A"]]);
    }

    #[test]
    fn test_independent_stages_share_a_wave() {
        let stages = vec![Stage::new("Stage1"), Stage::new("Stage2")];
        let waves = StageParallelization::new().of(&stages);
        assert_eq!(waves.to_string(), "Stage1, Stage2");
    }

    #[test]
    fn test_chain() {
        let a = Stage::new("A");
        let b = Stage::new("B").depends_on(&a);
        let c = Stage::new("C").depends_on(&b);

        let waves = StageParallelization::new().of(&[c, a, b]);
        assert_eq!(ids(&waves), vec![vec!["A"], vec!["B"], vec!["C"]]);
    }

    #[test]
    fn test_diamond() {
        let a = Stage::new("A");
        let b = Stage::new("B");
        let c = Stage::new("C").depends_on(&a).depends_on(&b);

        let waves = StageParallelization::new().of(&[a, b, c]);
        assert_eq!(ids(&waves), vec![vec!["A", "B"], vec!["C"]]);
    }

    #[test]
    fn test_mixed_depths() {
        let s1 = Stage::new("Stage1");
        let s2 = Stage::new("Stage2");
        let s3 = Stage::new("Stage3").depends_on(&s1);
        let s4 = Stage::new("Stage4").depends_on(&s2).depends_on(&s3);

        let waves = StageParallelization::new().of(&[s1, s2, s3, s4]);
        assert_eq!(waves.to_string(), "Stage1, Stage2 | Stage3 | Stage4");
    }

    #[test]
    fn test_output_keeps_original_dependencies() {
        let a = Stage::new("A");
        let b = Stage::new("B").depends_on(&a);

        let waves = StageParallelization::new().of(&[a, b.clone()]);
        assert_eq!(waves.waves()[1].stages(), &[b]);
    }

    #[test]
    fn test_repeated_stage_is_leveled_once() {
        let a = Stage::new("A");
        let b = Stage::new("B").depends_on(&a);

        let waves = StageParallelization::new().of(&[a.clone(), a, b]);
        assert_eq!(waves.stage_count(), 2);
        assert_eq!(ids(&waves), vec![vec!["A"], vec!["B"]]);
    }

    #[test]
    fn test_accepts_sets() {
        let a = Stage::new("A");
        let b = Stage::new("B").depends_on(&a);
        let set: BTreeSet<Stage> = [a, b].into_iter().collect();

        let waves = StageParallelization::new().of(&set);
        assert_eq!(waves.len(), 2);
    }

    #[test]
    fn test_cycle_truncates_silently() {
        let a = Stage::new("A");
        let b = Stage::new("B").depends_on(&a).with_dependency("C");
        let c = Stage::new("C").with_dependency("B");

        let waves = StageParallelization::new().of(&[a, b, c]);
        assert_eq!(ids(&waves), vec![vec!["A"]]);
    }

    #[test]
    fn test_full_cycle_yields_nothing() {
        let a = Stage::new("A").with_dependency("B");
        let b = Stage::new("B").with_dependency("A");

        let waves = StageParallelization::new().of(&[a, b]);
        assert!(waves.is_empty());
    }

    #[test]
    fn test_dangling_dependency_truncates() {
        let a = Stage::new("A");
        let b = Stage::new("B").with_dependency("missing");
        let c = Stage::new("C").depends_on(&b);

        let waves = StageParallelization::new().of(&[a, b, c]);
        assert_eq!(ids(&waves), vec![vec!["A"]]);
    }

    #[test]
    fn test_try_of_reports_blocked_stages() {
        let a = Stage::new("A");
        let c = Stage::new("C").with_dependency("B");
        let b = Stage::new("B").with_dependency("C");

        let err = StageParallelization::new().try_of(&[a, c, b]).unwrap_err();
        assert_eq!(
            err,
            PlanError::UnresolvableDependencies {
                stages: vec!["B".into(), "C".into()]
            }
        );
    }

    #[test]
    fn test_try_of_ok_for_dag() {
        let a = Stage::new("A");
        let b = Stage::new("B").depends_on(&a);
        let waves = StageParallelization::new().try_of(&[a, b]).unwrap();
        assert_eq!(waves.to_string(), "A | B");
    }

    /// Random DAG: stage `i` may only depend on stages `< i`.
    fn random_dag(rng: &mut SmallRng, n: usize) -> Vec<Stage> {
        (0..n)
            .map(|i| {
                let mut stage = Stage::new(format!("S{i:03}"));
                for j in 0..i {
                    if rng.random_bool(0.15) {
                        stage = stage.with_dependency(format!("S{j:03}"));
                    }
                }
                stage
            })
            .collect()
    }

    #[test]
    fn test_random_dags_are_partitioned_in_dependency_order() {
        let mut rng = SmallRng::seed_from_u64(42);
        for _ in 0..50 {
            let n = rng.random_range(1..40);
            let stages = random_dag(&mut rng, n);
            let waves = StageParallelization::new().try_of(&stages).unwrap();

            // Every stage exactly once.
            assert_eq!(waves.stage_count(), stages.len());
            let wave_index: HashMap<&str, usize> = waves
                .iter()
                .enumerate()
                .flat_map(|(k, w)| w.stages().iter().map(move |s| (s.id.as_str(), k)))
                .collect();
            assert_eq!(wave_index.len(), stages.len());

            for stage in &stages {
                let k = wave_index[stage.id.as_str()];
                // Dependencies sit strictly earlier.
                for dep in &stage.dependencies {
                    assert!(wave_index[dep.as_str()] < k);
                }
                // Maximality: a stage in wave k > 0 waits on something in wave k - 1.
                if k > 0 {
                    assert!(stage
                        .dependencies
                        .iter()
                        .any(|d| wave_index[d.as_str()] == k - 1));
                }
            }
        }
    }
}
