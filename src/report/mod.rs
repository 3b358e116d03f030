//! Comparison report for the two decomposers.
//!
//! Runs greedy and random decomposition over the same amounts and
//! quantifies how many extra coins the random decomposer hands out.

use rand::Rng;
use tracing::info;

use crate::engine::ChangeEngine;
use crate::error::ChangeError;
use crate::models::amount::Amount;
use crate::models::change::{ChangeResult, DecomposeMode};
use crate::models::enablement::EnablementSet;
use crate::models::report::{ComparisonReport, OverheadMetrics, ScenarioResult};

/// Generate a report comparing greedy and random decomposition.
///
/// Infeasible amounts are counted per mode. Any other error (an amount
/// outside the engine's bounds) is returned as-is.
pub fn generate_report<R: Rng>(
    amounts: &[Amount],
    enabled: &EnablementSet,
    engine: &mut ChangeEngine<R>,
) -> Result<ComparisonReport, ChangeError> {
    let mut greedy = ScenarioResult::default();
    let mut random = ScenarioResult::default();
    let mut overhead = OverheadMetrics::default();
    let mut greedy_compared: u64 = 0;
    let mut random_compared: u64 = 0;

    for &amount in amounts {
        let g = tally(&mut greedy, engine.decompose_amount(amount, DecomposeMode::Greedy, enabled))?;
        let r = tally(&mut random, engine.decompose_amount(amount, DecomposeMode::Random, enabled))?;

        if let (Some(g), Some(r)) = (g, r) {
            overhead.compared += 1;
            greedy_compared += u64::from(g);
            random_compared += u64::from(r);
        }
    }

    finish(&mut greedy);
    finish(&mut random);
    overhead.extra_coins = random_compared.saturating_sub(greedy_compared);
    overhead.coin_ratio = if greedy_compared == 0 {
        0.0
    } else {
        random_compared as f64 / greedy_compared as f64
    };

    info!(
        amounts = amounts.len(),
        greedy_coins = greedy.total_coins,
        random_coins = random.total_coins,
        "comparison report generated"
    );

    Ok(ComparisonReport {
        total_amounts: amounts.len(),
        enabled: *enabled,
        greedy,
        random,
        overhead,
    })
}

/// Fold one outcome into a scenario; returns the coin count on success.
fn tally(
    scenario: &mut ScenarioResult,
    outcome: Result<ChangeResult, ChangeError>,
) -> Result<Option<u32>, ChangeError> {
    match outcome {
        Ok(change) => {
            scenario.decomposed += 1;
            scenario.total_coins += u64::from(change.coin_count());
            for (denomination, count) in change.iter() {
                *scenario.by_denomination.entry(denomination).or_insert(0) += u64::from(count);
            }
            Ok(Some(change.coin_count()))
        }
        Err(ChangeError::NoFeasibleDecomposition { .. }) => {
            scenario.infeasible += 1;
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

fn finish(scenario: &mut ScenarioResult) {
    scenario.avg_coins = if scenario.decomposed == 0 {
        0.0
    } else {
        scenario.total_coins as f64 / scenario.decomposed as f64
    };
}
