//! Change engine: turns an amount into denomination counts.
//!
//! Validates the input, then runs either the greedy or the randomized
//! decomposer over a caller-owned enablement set. Results are returned
//! whole or not at all.

pub mod greedy;
pub mod random;
pub mod strategy;
pub mod validate;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::config::Bounds;
use crate::error::{ChangeError, Result};
use crate::models::amount::Amount;
use crate::models::change::{ChangeResult, DecomposeMode};
use crate::models::enablement::EnablementSet;

/// Runs decompositions with its own random source and amount bounds.
pub struct ChangeEngine<R = StdRng> {
    rng: R,
    bounds: Bounds,
}

impl ChangeEngine<StdRng> {
    /// Creates an engine seeded from system entropy.
    pub fn new() -> Self {
        ChangeEngine::with_rng(StdRng::from_entropy())
    }

    /// Creates an engine whose random decompositions are reproducible.
    pub fn seeded(seed: u64) -> Self {
        ChangeEngine::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for ChangeEngine<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> ChangeEngine<R> {
    /// Creates an engine drawing from the given random source.
    pub fn with_rng(rng: R) -> Self {
        ChangeEngine {
            rng,
            bounds: Bounds::default(),
        }
    }

    /// Replaces the accepted amount range.
    pub fn with_bounds(mut self, bounds: Bounds) -> Self {
        self.bounds = bounds;
        self
    }

    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    /// Validate raw input and decompose it.
    pub fn decompose(
        &mut self,
        raw: &str,
        mode: DecomposeMode,
        enabled: &EnablementSet,
    ) -> Result<ChangeResult> {
        let amount = validate::parse_amount(raw, &self.bounds)?;
        self.decompose_amount(amount, mode, enabled)
    }

    /// Decompose an already parsed amount. The range is checked again.
    pub fn decompose_amount(
        &mut self,
        amount: Amount,
        mode: DecomposeMode,
        enabled: &EnablementSet,
    ) -> Result<ChangeResult> {
        let amount = validate::validate_amount(amount, &self.bounds)?;
        if enabled.is_empty() {
            debug!(%amount, "no denominations enabled");
            return Err(ChangeError::NoFeasibleDecomposition {
                amount,
                remaining: amount,
            });
        }

        match mode {
            DecomposeMode::Greedy => greedy::decompose(amount, enabled),
            DecomposeMode::Random => random::decompose(amount, enabled, &mut self.rng),
        }
    }
}

/// Validate `raw` and decompose it with a freshly seeded engine.
pub fn decompose(raw: &str, mode: DecomposeMode, enabled: &EnablementSet) -> Result<ChangeResult> {
    ChangeEngine::new().decompose(raw, mode, enabled)
}
