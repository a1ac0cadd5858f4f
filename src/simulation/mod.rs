//! Resource allocation simulation.
//!
//! Given candidate projects with unmet demands and a finite pool of
//! consumable offerings, selects the projects whose staffing maximizes
//! total earnings.
//!
//! # Matching
//!
//! An offering satisfies a demand iff the capabilities are equal and the
//! offering's slot is at least as long as the demanded one. Calendar
//! overlap is not checked. Within a project, demands are matched first-fit
//! (see [`allocate_first_fit`]).
//!
//! # Key Types
//!
//! - [`SimulationFacade`]: Runs the search
//! - [`SimulationConfig`]: Memoization and tie-break settings
//! - [`SearchStats`]: Search counters

mod config;
mod facade;
mod matching;

pub use config::{SimulationConfig, TieBreak};
pub use facade::{SearchStats, SimulationFacade};
pub use matching::allocate_first_fit;
