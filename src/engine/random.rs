//! Randomized decomposition: draw a denomination uniformly from the
//! whole fixed set and take it when it is enabled and fits.
//!
//! Any valid decomposition is acceptable; repeated calls on the same
//! amount may differ. Draws that miss are simply retried, so smaller
//! denominations show up more often as the remainder shrinks.

use rand::Rng;
use tracing::{debug, warn};

use super::strategy::{fits, largest_usable};
use crate::error::{ChangeError, Result};
use crate::models::amount::Amount;
use crate::models::change::ChangeResult;
use crate::models::denomination::Denomination;
use crate::models::enablement::EnablementSet;

pub fn decompose<R: Rng + ?Sized>(
    amount: Amount,
    enabled: &EnablementSet,
    rng: &mut R,
) -> Result<ChangeResult> {
    let mut change = ChangeResult::empty();
    let mut remaining = amount.cents();
    let mut draws: u64 = 0;

    while remaining > 0 {
        // Without this check the draw loop never ends.
        if largest_usable(enabled, remaining).is_none() {
            let remaining = Amount::from_cents(remaining);
            warn!(%amount, %remaining, draws, "random decomposition stuck");
            return Err(ChangeError::NoFeasibleDecomposition { amount, remaining });
        }

        let denomination = Denomination::ALL[rng.gen_range(0..Denomination::COUNT)];
        draws += 1;
        if fits(enabled, denomination, remaining) {
            change.add(denomination);
            remaining -= denomination.value();
        }
    }

    debug!(%amount, coins = change.coin_count(), draws, "random decomposition complete");
    Ok(change)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn cents(c: u32) -> Amount {
        Amount::from_cents(c)
    }

    #[test]
    fn test_always_sums_to_amount() {
        let mut rng = StdRng::seed_from_u64(7);
        let all = EnablementSet::all();
        for _ in 0..500 {
            let change = decompose(cents(141), &all, &mut rng).unwrap();
            assert_eq!(change.total(), cents(141));
        }
    }

    #[test]
    fn test_never_uses_disabled_denominations() {
        let mut rng = StdRng::seed_from_u64(11);
        let no_quarter = EnablementSet::without(&[Denomination::Quarter]);
        for _ in 0..200 {
            let change = decompose(cents(475), &no_quarter, &mut rng).unwrap();
            assert_eq!(change.count(Denomination::Quarter), 0);
            assert_eq!(change.total(), cents(475));
        }
    }

    #[test]
    fn test_results_vary_between_calls() {
        let mut rng = StdRng::seed_from_u64(3);
        let all = EnablementSet::all();
        let first = decompose(cents(500), &all, &mut rng).unwrap();
        let varied = (0..50).any(|_| decompose(cents(500), &all, &mut rng).unwrap() != first);
        assert!(varied, "50 random decompositions of 5.00 were all identical");
    }

    #[test]
    fn test_same_seed_gives_same_result() {
        let all = EnablementSet::all();
        let a = decompose(cents(987), &all, &mut StdRng::seed_from_u64(99)).unwrap();
        let b = decompose(cents(987), &all, &mut StdRng::seed_from_u64(99)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_fails_instead_of_spinning() {
        let mut rng = StdRng::seed_from_u64(1);
        let no_penny = EnablementSet::without(&[Denomination::Penny]);
        let err = decompose(cents(3), &no_penny, &mut rng).unwrap_err();
        assert_eq!(
            err,
            ChangeError::NoFeasibleDecomposition {
                amount: cents(3),
                remaining: cents(3)
            }
        );

        let result = decompose(cents(100), &EnablementSet::none(), &mut rng);
        assert!(matches!(result, Err(ChangeError::NoFeasibleDecomposition { .. })));
    }

    #[test]
    fn test_only_nickels_is_deterministic() {
        let only_nickels = EnablementSet::from_toggles(
            Denomination::ALL.into_iter().map(|d| (d, d == Denomination::Nickel)),
        );
        let change = decompose(cents(35), &only_nickels, &mut StdRng::seed_from_u64(5)).unwrap();
        assert_eq!(change, ChangeResult::from_counts([(Denomination::Nickel, 7)]));
    }
}
