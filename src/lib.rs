//! Planning primitives for the U-Engine ecosystem.
//!
//! Two independent, pure computations used by a project/resource planning
//! pipeline:
//!
//! - **`parallelization`**: Levels a stage dependency graph into ordered
//!   waves of stages that may run concurrently.
//! - **`simulation`**: Picks the subset of under-resourced projects that
//!   maximizes total earnings against a finite, consumable resource pool.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Stage`, `ParallelStagesList`, `Capability`,
//!   `TimeSlot`, `Demand`, `SimulatedProject`, `SimulatedCapabilities`,
//!   `AllocationResult`
//! - **`validation`**: Input integrity checks (duplicate IDs, DAG cycles,
//!   dangling dependencies, malformed time slots)
//! - **`error`**: Crate error type
//!
//! Neither component performs I/O or holds state between calls.
//!
//! # References
//!
//! - Kahn (1962), "Topological sorting of large networks"
//! - Kellerer, Pferschy & Pisinger (2004), "Knapsack Problems"

pub mod error;
pub mod models;
pub mod parallelization;
pub mod simulation;
pub mod validation;

pub use error::PlanError;
