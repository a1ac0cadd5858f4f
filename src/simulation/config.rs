//! Simulation configuration.
//!
//! [`SimulationConfig`] holds the knobs of the project-selection search.

/// How equal-profit branches are resolved.
///
/// Both choices reach the same optimal profit; they differ only in which
/// projects end up in the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TieBreak {
    /// Include a project only if doing so strictly increases profit.
    #[default]
    PreferExclusion,
    /// Include a project whenever doing so does not decrease profit.
    PreferInclusion,
}

impl TieBreak {
    /// Whether the include branch wins over the exclude branch.
    #[inline]
    pub fn includes(self, include_profit: f64, exclude_profit: f64) -> bool {
        match self {
            Self::PreferExclusion => include_profit > exclude_profit,
            Self::PreferInclusion => include_profit >= exclude_profit,
        }
    }
}

/// Configuration for the allocation search.
///
/// # Defaults
///
/// ```
/// use u_plan::simulation::{SimulationConfig, TieBreak};
///
/// let config = SimulationConfig::default();
/// assert!(config.memoize);
/// assert_eq!(config.tie_break, TieBreak::PreferExclusion);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationConfig {
    /// Cache subproblem results keyed by (project index, remaining pool).
    ///
    /// Disabling it never changes the result, only the running time.
    pub memoize: bool,

    /// Rule for equal-profit include/exclude branches.
    pub tie_break: TieBreak,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            memoize: true,
            tie_break: TieBreak::default(),
        }
    }
}

impl SimulationConfig {
    /// Enables or disables memoization.
    pub fn with_memoize(mut self, memoize: bool) -> Self {
        self.memoize = memoize;
        self
    }

    /// Sets the tie-break rule.
    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }
}
