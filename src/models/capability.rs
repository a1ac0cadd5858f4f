//! Capability and demand models.
//!
//! A capability is an opaque tag for what a resource can provide: a skill,
//! a permission, or an asset. A demand asks for a capability for at least
//! a given duration.

use serde::{Deserialize, Serialize};

use super::TimeSlot;

/// Capability classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CapabilityKind {
    /// Something a person knows how to do (e.g., "rust", "welding").
    Skill,
    /// Something a person is allowed to do (e.g., "deploy-prod").
    Permission,
    /// A device or facility (e.g., "gpu", "crane").
    Asset,
}

/// A resource capability tag.
///
/// Two capabilities match iff both name and kind are equal.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Capability {
    /// Capability name.
    pub name: String,
    /// Capability classification.
    pub kind: CapabilityKind,
}

impl Capability {
    /// Creates a capability.
    pub fn new(name: impl Into<String>, kind: CapabilityKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    /// Creates a skill capability.
    pub fn skill(name: impl Into<String>) -> Self {
        Self::new(name, CapabilityKind::Skill)
    }

    /// Creates a permission capability.
    pub fn permission(name: impl Into<String>) -> Self {
        Self::new(name, CapabilityKind::Permission)
    }

    /// Creates an asset capability.
    pub fn asset(name: impl Into<String>) -> Self {
        Self::new(name, CapabilityKind::Asset)
    }
}

/// A need for a capability available for at least `slot`'s duration.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Demand {
    /// Required capability.
    pub capability: Capability,
    /// Requested slot. Only its duration is used when matching.
    pub slot: TimeSlot,
}

impl Demand {
    /// Creates a demand.
    pub fn new(capability: Capability, slot: TimeSlot) -> Self {
        Self { capability, slot }
    }

    /// Creates a demand for `duration_ms` starting at the epoch.
    pub fn for_duration(capability: Capability, duration_ms: i64) -> Self {
        Self::new(capability, TimeSlot::of_duration(duration_ms))
    }
}

/// Ordered collection of demands.
///
/// Order matters: demands are matched one at a time, first to last.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Demands {
    demands: Vec<Demand>,
}

impl Demands {
    /// Creates a collection from demands in matching order.
    pub fn of(demands: impl IntoIterator<Item = Demand>) -> Self {
        Self {
            demands: demands.into_iter().collect(),
        }
    }

    /// Creates an empty collection.
    pub fn none() -> Self {
        Self::default()
    }

    /// All demands in matching order.
    pub fn all(&self) -> &[Demand] {
        &self.demands
    }

    /// Number of demands.
    pub fn len(&self) -> usize {
        self.demands.len()
    }

    /// Whether there are no demands.
    pub fn is_empty(&self) -> bool {
        self.demands.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capability_equality_includes_kind() {
        assert_eq!(Capability::skill("rust"), Capability::skill("rust"));
        assert_ne!(Capability::skill("rust"), Capability::asset("rust"));
        assert_ne!(Capability::permission("deploy"), Capability::permission("audit"));
    }

    #[test]
    fn test_demands_keep_order() {
        let demands = Demands::of(vec![
            Demand::for_duration(Capability::skill("b"), 10),
            Demand::for_duration(Capability::skill("a"), 20),
        ]);
        assert_eq!(demands.len(), 2);
        assert_eq!(demands.all()[0].capability.name, "b");
        assert_eq!(demands.all()[1].slot.duration_ms(), 20);
        assert!(Demands::none().is_empty());
    }
}
