use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::denomination::Denomination;
use super::enablement::EnablementSet;

/// Greedy vs random decomposition over a batch of amounts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonReport {
    /// Number of amounts decomposed by each mode.
    pub total_amounts: usize,
    /// Denominations both modes were allowed to use.
    pub enabled: EnablementSet,
    /// Results of the greedy decomposer.
    pub greedy: ScenarioResult,
    /// Results of the randomized decomposer.
    pub random: ScenarioResult,
    /// How many more coins the random decomposer handed out.
    pub overhead: OverheadMetrics,
}

/// Results for one decomposition mode.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ScenarioResult {
    /// Amounts that were decomposed successfully.
    pub decomposed: usize,
    /// Amounts that failed with no feasible decomposition.
    pub infeasible: usize,
    /// Coins and bills handed out across all successful decompositions.
    pub total_coins: u64,
    /// Average coins per successful decomposition.
    pub avg_coins: f64,
    /// Coins handed out per denomination.
    pub by_denomination: BTreeMap<Denomination, u64>,
}

/// Extra coins used by the random decomposer over the greedy one.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OverheadMetrics {
    /// Amounts both modes decomposed successfully.
    pub compared: usize,
    /// Random coins minus greedy coins over the compared amounts.
    pub extra_coins: u64,
    /// Random coins divided by greedy coins over the compared amounts.
    pub coin_ratio: f64,
}
