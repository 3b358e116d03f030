use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::amount::Amount;
use super::denomination::Denomination;
use crate::error::ChangeError;

/// How a decomposition picks its next denomination.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum DecomposeMode {
    /// Always take the largest enabled denomination that fits.
    #[default]
    Greedy,
    /// Draw denominations at random until one fits.
    Random,
}

impl std::fmt::Display for DecomposeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DecomposeMode::Greedy => write!(f, "greedy"),
            DecomposeMode::Random => write!(f, "random"),
        }
    }
}

impl std::str::FromStr for DecomposeMode {
    type Err = ChangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "greedy" => Ok(DecomposeMode::Greedy),
            "random" => Ok(DecomposeMode::Random),
            _ => Err(ChangeError::UnknownMode(s.to_string())),
        }
    }
}

/// Count of each denomination making up an amount.
///
/// Always holds all five denominations, dollar first, zero counts
/// included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<Denomination, u32>", into = "BTreeMap<Denomination, u32>")]
pub struct ChangeResult {
    counts: BTreeMap<Denomination, u32>,
}

impl ChangeResult {
    pub(crate) fn empty() -> Self {
        ChangeResult {
            counts: Denomination::ALL.into_iter().map(|d| (d, 0)).collect(),
        }
    }

    pub(crate) fn add(&mut self, denomination: Denomination) {
        *self.counts.entry(denomination).or_insert(0) += 1;
    }

    /// Build a result from explicit counts; unlisted denominations are zero.
    pub fn from_counts<I>(counts: I) -> Self
    where
        I: IntoIterator<Item = (Denomination, u32)>,
    {
        let mut change = ChangeResult::empty();
        change.counts.extend(counts);
        change
    }

    pub fn count(&self, denomination: Denomination) -> u32 {
        self.counts.get(&denomination).copied().unwrap_or(0)
    }

    /// Denominations and counts, dollar first.
    pub fn iter(&self) -> impl Iterator<Item = (Denomination, u32)> + '_ {
        self.counts.iter().map(|(&d, &n)| (d, n))
    }

    /// Total number of coins and bills. Saturates at `u32::MAX`.
    pub fn coin_count(&self) -> u32 {
        self.counts.values().fold(0u32, |acc, &n| acc.saturating_add(n))
    }

    /// Sum of count × value over every denomination. Saturates at the
    /// largest representable amount.
    pub fn total(&self) -> Amount {
        let cents: u64 = self
            .iter()
            .map(|(d, n)| u64::from(d.value()) * u64::from(n))
            .sum();
        Amount::from_cents(u32::try_from(cents).unwrap_or(u32::MAX))
    }
}

impl From<BTreeMap<Denomination, u32>> for ChangeResult {
    fn from(counts: BTreeMap<Denomination, u32>) -> Self {
        ChangeResult::from_counts(counts)
    }
}

impl From<ChangeResult> for BTreeMap<Denomination, u32> {
    fn from(change: ChangeResult) -> Self {
        change.counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_holds_all_denominations_in_order() {
        let change = ChangeResult::empty();
        let keys: Vec<_> = change.iter().map(|(d, _)| d).collect();
        assert_eq!(keys, Denomination::ALL.to_vec());
        assert_eq!(change.coin_count(), 0);
        assert_eq!(change.total(), Amount::from_cents(0));
    }

    #[test]
    fn test_total_and_coin_count() {
        let change = ChangeResult::from_counts([
            (Denomination::Dollar, 2),
            (Denomination::Dime, 3),
            (Denomination::Penny, 4),
        ]);
        assert_eq!(change.total(), Amount::from_cents(234));
        assert_eq!(change.coin_count(), 9);
        assert_eq!(change.count(Denomination::Quarter), 0);
    }

    #[test]
    fn test_serializes_in_denomination_order() {
        let change = ChangeResult::from_counts([(Denomination::Penny, 1), (Denomination::Dollar, 1)]);
        let json = serde_json::to_string(&change).unwrap();
        assert_eq!(
            json,
            r#"{"dollar":1,"quarter":0,"dime":0,"nickel":0,"penny":1}"#
        );
    }

    #[test]
    fn test_deserializing_fills_missing_denominations() {
        let change: ChangeResult = serde_json::from_str(r#"{"penny":3}"#).unwrap();
        let keys: Vec<_> = change.iter().map(|(d, _)| d).collect();
        assert_eq!(keys, Denomination::ALL.to_vec());
        assert_eq!(change.count(Denomination::Penny), 3);
        assert_eq!(change.count(Denomination::Dollar), 0);

        let empty: ChangeResult = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, ChangeResult::empty());
    }

    #[test]
    fn test_huge_counts_saturate_instead_of_overflowing() {
        let change = ChangeResult::from_counts([
            (Denomination::Dollar, u32::MAX),
            (Denomination::Penny, u32::MAX),
        ]);
        assert_eq!(change.total(), Amount::from_cents(u32::MAX));
        assert_eq!(change.coin_count(), u32::MAX);
    }

    #[test]
    fn test_mode_round_trips_through_text() {
        assert_eq!("Random".parse::<DecomposeMode>(), Ok(DecomposeMode::Random));
        assert_eq!(DecomposeMode::Greedy.to_string(), "greedy");
        assert!("optimal".parse::<DecomposeMode>().is_err());
    }
}
