//! Profit-maximizing project selection.
//!
//! # Algorithm
//!
//! Include/exclude search over the project list, in order:
//!
//! 1. Past the last project, nothing more can be earned.
//! 2. Otherwise compute the best outcome without the current project.
//! 3. If the current project can be fully staffed by first-fit from the
//!    remaining pool, compute its earnings plus the best outcome for the
//!    rest with the reduced pool.
//! 4. Keep the better branch, resolving ties with [`TieBreak`].
//!
//! Each subproblem returns only the decisions for projects at or after its
//! index, so its value depends on nothing but (index, remaining pool). That
//! pair is the memo key. The remaining pool is held as the ascending list
//! of original pool positions still free, which makes the key canonical.
//!
//! # Complexity
//! Exponential in the number of projects in the worst case. Intended for
//! candidate lists in the tens.
//!
//! # Reference
//! Kellerer, Pferschy & Pisinger (2004), "Knapsack Problems", Ch. 9
//! (multidimensional knapsack)

use std::collections::HashMap;

use super::config::{SimulationConfig, TieBreak};
use super::matching::first_fit;
use crate::models::{
    AdditionalPricedCapability, AllocationResult, AvailableResourceCapability,
    SimulatedCapabilities, SimulatedProject,
};

/// Counters from one search run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Subproblems actually expanded.
    pub subproblems: usize,
    /// Subproblems answered from the memo.
    pub memo_hits: usize,
}

/// Picks the most profitable set of projects to staff from a resource pool.
///
/// # Example
///
/// ```
/// use u_plan::models::{
///     AvailableResourceCapability, Capability, Demand, SimulatedCapabilities,
///     SimulatedProject, TimeSlot,
/// };
/// use u_plan::simulation::SimulationFacade;
///
/// let java = Capability::skill("java");
/// let projects = vec![
///     SimulatedProject::new("P1", 100.0).with_demand(Demand::for_duration(java.clone(), 5)),
///     SimulatedProject::new("P2", 200.0).with_demand(Demand::for_duration(java.clone(), 5)),
/// ];
/// let pool = SimulatedCapabilities::new(vec![
///     AvailableResourceCapability::new("dev-1", java, TimeSlot::of_duration(5)),
/// ]);
///
/// let result = SimulationFacade::new().optimize(&projects, &pool);
/// assert_eq!(result.profit, 200.0);
/// assert_eq!(result.chosen_ids(), vec!["P2"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SimulationFacade {
    config: SimulationConfig,
}

impl SimulationFacade {
    /// Creates a facade with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a facade with the given configuration.
    pub fn with_config(config: SimulationConfig) -> Self {
        Self { config }
    }

    /// Current configuration.
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Chooses which under-resourced projects to staff for maximum earnings.
    ///
    /// Same as [`optimize`](Self::optimize).
    pub fn which_project_with_missing_demands_is_most_profitable_to_allocate_resources_to(
        &self,
        projects: &[SimulatedProject],
        total_capability: &SimulatedCapabilities,
    ) -> AllocationResult {
        self.optimize(projects, total_capability)
    }

    /// Chooses which under-resourced projects to staff for maximum earnings.
    pub fn optimize(
        &self,
        projects: &[SimulatedProject],
        pool: &SimulatedCapabilities,
    ) -> AllocationResult {
        self.optimize_with_stats(projects, pool).0
    }

    /// Like [`optimize`](Self::optimize), also returning search counters.
    pub fn optimize_with_stats(
        &self,
        projects: &[SimulatedProject],
        pool: &SimulatedCapabilities,
    ) -> (AllocationResult, SearchStats) {
        let offerings = pool.capabilities();
        let mut search = Search {
            projects,
            pool: offerings,
            memoize: self.config.memoize,
            tie_break: self.config.tie_break,
            memo: HashMap::new(),
            stats: SearchStats::default(),
        };
        let all: Vec<usize> = (0..offerings.len()).collect();
        let best = search.best(0, &all);

        let allocations = best
            .picks
            .into_iter()
            .map(|(project, units)| {
                let resources = units.into_iter().map(|i| offerings[i].clone()).collect();
                (projects[project].clone(), resources)
            })
            .collect();
        let result = AllocationResult::from_allocations(allocations);

        tracing::debug!(
            projects = projects.len(),
            pool = offerings.len(),
            chosen = result.chosen_projects.len(),
            profit = result.profit,
            subproblems = search.stats.subproblems,
            memo_hits = search.stats.memo_hits,
            "allocation simulation finished"
        );

        (result, search.stats)
    }

    /// Net gain from buying one extra offering.
    ///
    /// Best profit with the offering added to the pool, minus best profit
    /// without it, minus its price. Negative when the purchase does not pay
    /// for itself.
    pub fn profit_after_buying_new_capability(
        &self,
        projects: &[SimulatedProject],
        capabilities_without_new_one: &SimulatedCapabilities,
        new_priced_capability: &AdditionalPricedCapability,
    ) -> f64 {
        let capabilities_with_new_one =
            capabilities_without_new_one.add([new_priced_capability.capability.clone()]);
        let without = self.optimize(projects, capabilities_without_new_one);
        let with = self.optimize(projects, &capabilities_with_new_one);
        with.profit - without.profit - new_priced_capability.price
    }
}

/// Decisions for a suffix of the project list.
#[derive(Debug, Clone, Default)]
struct Branch {
    /// Earnings of the picked projects.
    profit: f64,
    /// (project index, assigned pool positions), ascending by project index.
    picks: Vec<(usize, Vec<usize>)>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct MemoKey {
    index: usize,
    remaining: Vec<usize>,
}

struct Search<'a> {
    projects: &'a [SimulatedProject],
    pool: &'a [AvailableResourceCapability],
    memoize: bool,
    tie_break: TieBreak,
    memo: HashMap<MemoKey, Branch>,
    stats: SearchStats,
}

impl Search<'_> {
    fn best(&mut self, index: usize, remaining: &[usize]) -> Branch {
        let projects = self.projects;
        let Some(project) = projects.get(index) else {
            return Branch::default();
        };

        let key = MemoKey {
            index,
            remaining: remaining.to_vec(),
        };
        if self.memoize {
            if let Some(hit) = self.memo.get(&key) {
                self.stats.memo_hits += 1;
                tracing::trace!(index, remaining = remaining.len(), "memo hit");
                return hit.clone();
            }
        }
        self.stats.subproblems += 1;

        let exclude = self.best(index + 1, remaining);
        let include = first_fit(project, self.pool, remaining).map(|(assigned, free)| {
            let rest = self.best(index + 1, &free);
            let mut picks = Vec::with_capacity(rest.picks.len() + 1);
            picks.push((index, assigned));
            picks.extend(rest.picks);
            Branch {
                profit: project.earnings + rest.profit,
                picks,
            }
        });

        let chosen = match include {
            Some(include) if self.tie_break.includes(include.profit, exclude.profit) => include,
            _ => exclude,
        };

        if self.memoize {
            self.memo.insert(key, chosen.clone());
        }
        chosen
    }
}
