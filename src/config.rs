//! Compiled-in configuration for the change maker.
//!
//! The denomination table lives on [`Denomination`](crate::models::denomination::Denomination);
//! this module holds the accepted amount range and the defaults the
//! front ends start from.

use serde::{Deserialize, Serialize};

use crate::models::amount::Amount;

/// Smallest amount change can be made for ($0.01).
pub const MIN_AMOUNT: Amount = Amount::from_cents(1);

/// Largest amount change can be made for ($1000.00).
pub const MAX_AMOUNT: Amount = Amount::from_cents(100_000);

/// Input shown on start-up and restored by a reset.
pub const DEFAULT_INPUT: &str = "1.41";

/// Time budget for drawing the coins of one denomination, in milliseconds.
pub const DEFAULT_ANIMATION_DELAY_MS: u64 = 250;

/// Inclusive range of amounts accepted by the validator.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Bounds {
    pub min: Amount,
    pub max: Amount,
}

impl Bounds {
    pub fn new(min: Amount, max: Amount) -> Self {
        Bounds { min, max }
    }

    pub fn contains(&self, amount: Amount) -> bool {
        (self.min..=self.max).contains(&amount)
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Bounds::new(MIN_AMOUNT, MAX_AMOUNT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bounds_are_one_cent_to_one_thousand_dollars() {
        let bounds = Bounds::default();
        assert_eq!(bounds.min.cents(), 1);
        assert_eq!(bounds.max.cents(), 100_000);
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let bounds = Bounds::default();
        assert!(bounds.contains(MIN_AMOUNT));
        assert!(bounds.contains(MAX_AMOUNT));
        assert!(!bounds.contains(Amount::from_cents(0)));
        assert!(!bounds.contains(Amount::from_cents(100_001)));
    }
}
