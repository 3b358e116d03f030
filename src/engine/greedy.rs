//! Greedy decomposition: always take the largest enabled denomination
//! that still fits, rescanning from the top after every coin.
//!
//! For the US coin set this yields the minimum number of coins.

use tracing::{debug, warn};

use super::strategy::largest_usable;
use crate::error::{ChangeError, Result};
use crate::models::amount::Amount;
use crate::models::change::ChangeResult;
use crate::models::enablement::EnablementSet;

pub fn decompose(amount: Amount, enabled: &EnablementSet) -> Result<ChangeResult> {
    let mut change = ChangeResult::empty();
    let mut remaining = amount.cents();

    while remaining > 0 {
        let Some(denomination) = largest_usable(enabled, remaining) else {
            let remaining = Amount::from_cents(remaining);
            warn!(%amount, %remaining, "greedy decomposition stuck");
            return Err(ChangeError::NoFeasibleDecomposition { amount, remaining });
        };
        change.add(denomination);
        remaining -= denomination.value();
    }

    debug!(%amount, coins = change.coin_count(), "greedy decomposition complete");
    Ok(change)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::denomination::Denomination;

    fn cents(c: u32) -> Amount {
        Amount::from_cents(c)
    }

    #[test]
    fn test_one_of_each_for_141() {
        let change = decompose(cents(141), &EnablementSet::all()).unwrap();
        for d in Denomination::ALL {
            assert_eq!(change.count(d), 1, "expected one {d}");
        }
    }

    #[test]
    fn test_skips_disabled_dime() {
        let change = decompose(cents(30), &EnablementSet::without(&[Denomination::Dime])).unwrap();
        assert_eq!(
            change,
            ChangeResult::from_counts([(Denomination::Quarter, 1), (Denomination::Nickel, 1)])
        );
    }

    #[test]
    fn test_fails_when_remainder_is_below_every_enabled_value() {
        let err = decompose(cents(3), &EnablementSet::without(&[Denomination::Penny])).unwrap_err();
        assert_eq!(
            err,
            ChangeError::NoFeasibleDecomposition {
                amount: cents(3),
                remaining: cents(3)
            }
        );
    }

    #[test]
    fn test_fails_partway_through() {
        // 0.08 without pennies: a nickel fits, then 3 cents are stuck.
        let err = decompose(cents(8), &EnablementSet::without(&[Denomination::Penny])).unwrap_err();
        assert_eq!(
            err,
            ChangeError::NoFeasibleDecomposition {
                amount: cents(8),
                remaining: cents(3)
            }
        );
    }

    #[test]
    fn test_fails_with_nothing_enabled() {
        let result = decompose(cents(100), &EnablementSet::none());
        assert!(matches!(result, Err(ChangeError::NoFeasibleDecomposition { .. })));
    }

    #[test]
    fn test_only_pennies() {
        let only_pennies = EnablementSet::from_toggles(
            Denomination::ALL.into_iter().map(|d| (d, d == Denomination::Penny)),
        );
        let change = decompose(cents(99), &only_pennies).unwrap();
        assert_eq!(change.count(Denomination::Penny), 99);
        assert_eq!(change.coin_count(), 99);
    }

    #[test]
    fn test_sums_to_amount_for_every_cent_up_to_twenty_dollars() {
        let all = EnablementSet::all();
        for c in 1..=2_000 {
            let change = decompose(cents(c), &all).unwrap();
            assert_eq!(change.total(), cents(c));
        }
    }

    #[test]
    fn test_maximum_amount_is_all_dollars() {
        let change = decompose(cents(100_000), &EnablementSet::all()).unwrap();
        assert_eq!(change.count(Denomination::Dollar), 1000);
        assert_eq!(change.coin_count(), 1000);
    }
}
