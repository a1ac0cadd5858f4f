//! Planning domain models.
//!
//! Immutable value types exchanged with the planning components. Callers
//! build them from persisted domain state; nothing here has a lifecycle
//! beyond a single computation.
//!
//! # Domain Mappings
//!
//! | u-plan | Software | Construction | Events |
//! |--------|----------|--------------|--------|
//! | Stage | Milestone | Build Phase | Setup Step |
//! | Capability | Skill | Equipment | Venue |
//! | SimulatedProject | Feature Bid | Tender | Booking |
//! | AvailableResourceCapability | Engineer-week | Crane-day | Room-slot |

mod allocation;
mod capability;
mod project;
mod resource;
mod stage;
mod time_slot;

pub use allocation::{AllocationResult, ProjectAllocation};
pub use capability::{Capability, CapabilityKind, Demand, Demands};
pub use project::SimulatedProject;
pub use resource::{AdditionalPricedCapability, AvailableResourceCapability, SimulatedCapabilities};
pub use stage::{ParallelStages, ParallelStagesList, Stage};
pub use time_slot::TimeSlot;
