//! Stage parallelization.
//!
//! Levels a stage dependency graph into ordered waves. Each wave is a
//! maximal group of stages whose dependencies all sit in earlier waves,
//! so its members may run concurrently.
//!
//! # Malformed Graphs
//!
//! A cycle, or a dependency on a stage missing from the input, leaves some
//! stages permanently blocked. [`StageParallelization::of`] stops at that
//! point and returns the waves found so far; [`StageParallelization::try_of`]
//! reports the blocked stages as [`PlanError::UnresolvableDependencies`].
//!
//! # Reference
//! Kahn (1962), "Topological sorting of large networks", CACM 5(11)
//!
//! [`PlanError::UnresolvableDependencies`]: crate::PlanError::UnresolvableDependencies

mod leveler;

pub use leveler::StageParallelization;
