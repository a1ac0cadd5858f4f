//! Resource capability pool model.
//!
//! A pool is a finite list of concrete offerings. Each offering is one
//! resource providing one capability over one time slot, and is consumed
//! once assigned to a demand.

use serde::{Deserialize, Serialize};

use super::{Capability, Demand, TimeSlot};

/// One consumable offering from the resource pool.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AvailableResourceCapability {
    /// Offering resource identifier (person, device, room).
    pub resource_id: String,
    /// Capability offered.
    pub capability: Capability,
    /// When the capability is available.
    pub time_slot: TimeSlot,
}

impl AvailableResourceCapability {
    /// Creates an offering.
    pub fn new(resource_id: impl Into<String>, capability: Capability, time_slot: TimeSlot) -> Self {
        Self {
            resource_id: resource_id.into(),
            capability,
            time_slot,
        }
    }

    /// Whether this offering can satisfy `demand`.
    ///
    /// Requires an equal capability and a slot at least as long as the
    /// demanded one. Calendar overlap is deliberately not checked.
    #[inline]
    pub fn satisfies(&self, demand: &Demand) -> bool {
        self.capability == demand.capability
            && self.time_slot.duration_ms() >= demand.slot.duration_ms()
    }
}

/// The total resource pool for one simulation run.
///
/// Pool order is significant: matching picks the first fitting offering.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SimulatedCapabilities {
    capabilities: Vec<AvailableResourceCapability>,
}

impl SimulatedCapabilities {
    /// Creates a pool from offerings in pool order.
    pub fn new(capabilities: impl IntoIterator<Item = AvailableResourceCapability>) -> Self {
        Self {
            capabilities: capabilities.into_iter().collect(),
        }
    }

    /// Creates an empty pool.
    pub fn none() -> Self {
        Self::default()
    }

    /// All offerings in pool order.
    pub fn capabilities(&self) -> &[AvailableResourceCapability] {
        &self.capabilities
    }

    /// Returns a new pool with `more` appended after the existing offerings.
    pub fn add(&self, more: impl IntoIterator<Item = AvailableResourceCapability>) -> Self {
        let mut capabilities = self.capabilities.clone();
        capabilities.extend(more);
        Self { capabilities }
    }

    /// Number of offerings.
    pub fn len(&self) -> usize {
        self.capabilities.len()
    }

    /// Whether the pool is empty.
    pub fn is_empty(&self) -> bool {
        self.capabilities.is_empty()
    }
}

/// An offering that could be acquired for a price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdditionalPricedCapability {
    /// Acquisition cost, in the same unit as project earnings.
    pub price: f64,
    /// The offering itself.
    pub capability: AvailableResourceCapability,
}

impl AdditionalPricedCapability {
    /// Creates a priced offering.
    pub fn new(price: f64, capability: AvailableResourceCapability) -> Self {
        Self { price, capability }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn java(duration_ms: i64) -> AvailableResourceCapability {
        AvailableResourceCapability::new("R1", Capability::skill("java"), TimeSlot::of_duration(duration_ms))
    }

    #[test]
    fn test_satisfies_equal_duration() {
        let demand = Demand::for_duration(Capability::skill("java"), 5);
        assert!(java(5).satisfies(&demand));
        assert!(java(8).satisfies(&demand));
        assert!(!java(3).satisfies(&demand));
    }

    #[test]
    fn test_satisfies_ignores_calendar_position() {
        let demand = Demand::new(Capability::skill("java"), TimeSlot::new(0, 5));
        let later = AvailableResourceCapability::new(
            "R1",
            Capability::skill("java"),
            TimeSlot::new(1_000, 1_005),
        );
        assert!(later.satisfies(&demand));
    }

    #[test]
    fn test_satisfies_requires_same_capability() {
        let demand = Demand::for_duration(Capability::permission("java"), 5);
        assert!(!java(10).satisfies(&demand));
    }

    #[test]
    fn test_add_keeps_order() {
        let pool = SimulatedCapabilities::new(vec![java(1)]);
        let bigger = pool.add(vec![java(2)]);
        assert_eq!(pool.len(), 1);
        assert_eq!(bigger.len(), 2);
        assert_eq!(bigger.capabilities()[1].time_slot.duration_ms(), 2);
        assert!(SimulatedCapabilities::none().is_empty());
    }
}
