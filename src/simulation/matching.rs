//! First-fit demand matching.
//!
//! Demands are matched in order, each to the first remaining offering (in
//! pool order) that satisfies it. A matched offering is consumed. If any
//! demand finds no match the whole project is rejected; alternative
//! assignments are never tried, so a project may be rejected even though
//! some other assignment of the same offerings would have fit.

use crate::models::{AvailableResourceCapability, SimulatedCapabilities, SimulatedProject};

/// Matches `project` against the offerings at positions `remaining`.
///
/// Returns the positions assigned (one per demand, in demand order) and the
/// positions still free, or `None` if some demand cannot be met. `remaining`
/// must be ascending; the returned free list stays ascending.
pub(crate) fn first_fit(
    project: &SimulatedProject,
    pool: &[AvailableResourceCapability],
    remaining: &[usize],
) -> Option<(Vec<usize>, Vec<usize>)> {
    let mut free = remaining.to_vec();
    let mut assigned = Vec::with_capacity(project.missing_demands.len());

    for demand in project.missing_demands.all() {
        let pos = free.iter().position(|&i| pool[i].satisfies(demand))?;
        assigned.push(free.remove(pos));
    }

    Some((assigned, free))
}

/// Matches `project` against the whole pool.
///
/// Returns the offerings that would be assigned, one per demand in demand
/// order, or `None` if the project cannot be fully staffed.
pub fn allocate_first_fit(
    project: &SimulatedProject,
    pool: &SimulatedCapabilities,
) -> Option<Vec<AvailableResourceCapability>> {
    let offerings = pool.capabilities();
    let all: Vec<usize> = (0..offerings.len()).collect();
    let (assigned, _) = first_fit(project, offerings, &all)?;
    Some(assigned.into_iter().map(|i| offerings[i].clone()).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Capability, Demand, TimeSlot};

    fn unit(id: &str, skill: &str, duration_ms: i64) -> AvailableResourceCapability {
        AvailableResourceCapability::new(id, Capability::skill(skill), TimeSlot::of_duration(duration_ms))
    }

    #[test]
    fn test_takes_first_match_in_pool_order() {
        let pool = SimulatedCapabilities::new(vec![
            unit("R1", "python", 10),
            unit("R2", "java", 10),
            unit("R3", "java", 10),
        ]);
        let project = SimulatedProject::new("P", 1.0)
            .with_demand(Demand::for_duration(Capability::skill("java"), 5));

        let assigned = allocate_first_fit(&project, &pool).unwrap();
        assert_eq!(assigned.len(), 1);
        assert_eq!(assigned[0].resource_id, "R2");
    }

    #[test]
    fn test_consumes_matched_units() {
        let pool = vec![unit("R1", "java", 10), unit("R2", "java", 10)];
        let project = SimulatedProject::new("P", 1.0)
            .with_demand(Demand::for_duration(Capability::skill("java"), 5))
            .with_demand(Demand::for_duration(Capability::skill("java"), 5));

        let (assigned, free) = first_fit(&project, &pool, &[0, 1]).unwrap();
        assert_eq!(assigned, vec![0, 1]);
        assert!(free.is_empty());
    }

    #[test]
    fn test_partial_match_rejects_project() {
        let pool = SimulatedCapabilities::new(vec![unit("R1", "java", 10)]);
        let project = SimulatedProject::new("P", 1.0)
            .with_demand(Demand::for_duration(Capability::skill("java"), 5))
            .with_demand(Demand::for_duration(Capability::skill("java"), 5));

        assert!(allocate_first_fit(&project, &pool).is_none());
    }

    #[test]
    fn test_too_short_unit_is_skipped() {
        let pool = vec![unit("R1", "java", 3), unit("R2", "java", 5)];
        let project = SimulatedProject::new("P", 1.0)
            .with_demand(Demand::for_duration(Capability::skill("java"), 5));

        let (assigned, free) = first_fit(&project, &pool, &[0, 1]).unwrap();
        assert_eq!(assigned, vec![1]);
        assert_eq!(free, vec![0]);
    }

    #[test]
    fn test_no_demands_always_fits() {
        let project = SimulatedProject::new("P", 1.0);
        let assigned = allocate_first_fit(&project, &SimulatedCapabilities::none()).unwrap();
        assert!(assigned.is_empty());
    }

    #[test]
    fn test_first_fit_is_not_optimal_matching() {
        // Short demand grabs the long unit first, leaving the long demand unmet
        // although the reverse assignment would satisfy both.
        let pool = SimulatedCapabilities::new(vec![unit("long", "java", 10), unit("short", "java", 2)]);
        let project = SimulatedProject::new("P", 1.0)
            .with_demand(Demand::for_duration(Capability::skill("java"), 2))
            .with_demand(Demand::for_duration(Capability::skill("java"), 10));

        assert!(allocate_first_fit(&project, &pool).is_none());
    }
}
