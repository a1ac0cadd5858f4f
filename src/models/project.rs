//! Simulated project model.

use serde::{Deserialize, Serialize};

use super::{Demand, Demands};

/// A candidate project whose resource needs are not yet met.
///
/// `earnings` are realized only if every missing demand is satisfied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulatedProject {
    /// Unique project identifier.
    pub id: String,
    /// Earnings realized when the project is fully staffed.
    pub earnings: f64,
    /// Demands still to be satisfied, in matching order.
    pub missing_demands: Demands,
}

impl SimulatedProject {
    /// Creates a project with no missing demands.
    pub fn new(id: impl Into<String>, earnings: f64) -> Self {
        Self {
            id: id.into(),
            earnings,
            missing_demands: Demands::none(),
        }
    }

    /// Sets all missing demands at once.
    pub fn with_missing_demands(mut self, demands: Demands) -> Self {
        self.missing_demands = demands;
        self
    }

    /// Appends one missing demand.
    pub fn with_demand(mut self, demand: Demand) -> Self {
        let mut all = self.missing_demands.all().to_vec();
        all.push(demand);
        self.missing_demands = Demands::of(all);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Capability;

    #[test]
    fn test_project_builder() {
        let p = SimulatedProject::new("P1", 100.0)
            .with_demand(Demand::for_duration(Capability::skill("java"), 5))
            .with_demand(Demand::for_duration(Capability::asset("gpu"), 3));

        assert_eq!(p.id, "P1");
        assert_eq!(p.earnings, 100.0);
        assert_eq!(p.missing_demands.len(), 2);
        assert_eq!(p.missing_demands.all()[1].capability, Capability::asset("gpu"));
    }
}
