use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::denomination::Denomination;

/// Which denominations a decomposition may use.
///
/// Owned by the presentation layer and handed to the decomposers by
/// reference, so a decomposition always sees one stable snapshot.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(from = "BTreeMap<Denomination, bool>", into = "BTreeMap<Denomination, bool>")]
pub struct EnablementSet {
    enabled: [bool; Denomination::COUNT],
}

impl EnablementSet {
    /// Every denomination enabled.
    pub fn all() -> Self {
        EnablementSet {
            enabled: [true; Denomination::COUNT],
        }
    }

    /// Every denomination disabled.
    pub fn none() -> Self {
        EnablementSet {
            enabled: [false; Denomination::COUNT],
        }
    }

    /// Start from all enabled and apply the given toggles.
    pub fn from_toggles<I>(toggles: I) -> Self
    where
        I: IntoIterator<Item = (Denomination, bool)>,
    {
        let mut set = EnablementSet::all();
        set.apply_toggles(toggles);
        set
    }

    /// All enabled except the listed denominations.
    pub fn without(disabled: &[Denomination]) -> Self {
        EnablementSet::from_toggles(disabled.iter().map(|&d| (d, false)))
    }

    /// Copy external toggle state into the set.
    pub fn apply_toggles<I>(&mut self, toggles: I)
    where
        I: IntoIterator<Item = (Denomination, bool)>,
    {
        for (denomination, enabled) in toggles {
            self.set(denomination, enabled);
        }
    }

    pub fn is_enabled(&self, denomination: Denomination) -> bool {
        self.enabled[denomination.index()]
    }

    pub fn set(&mut self, denomination: Denomination, enabled: bool) {
        self.enabled[denomination.index()] = enabled;
    }

    /// Flip one denomination and return its new state.
    pub fn toggle(&mut self, denomination: Denomination) -> bool {
        let slot = &mut self.enabled[denomination.index()];
        *slot = !*slot;
        *slot
    }

    /// Re-enable every denomination.
    pub fn reset(&mut self) {
        *self = EnablementSet::all();
    }

    /// True when no denomination is enabled.
    pub fn is_empty(&self) -> bool {
        !self.enabled.iter().any(|&e| e)
    }

    /// Enabled denominations, largest value first.
    pub fn enabled(&self) -> impl Iterator<Item = Denomination> + '_ {
        Denomination::ALL
            .into_iter()
            .filter(move |&d| self.is_enabled(d))
    }
}

impl Default for EnablementSet {
    fn default() -> Self {
        EnablementSet::all()
    }
}

impl From<BTreeMap<Denomination, bool>> for EnablementSet {
    fn from(toggles: BTreeMap<Denomination, bool>) -> Self {
        EnablementSet::from_toggles(toggles)
    }
}

impl From<EnablementSet> for BTreeMap<Denomination, bool> {
    fn from(set: EnablementSet) -> Self {
        Denomination::ALL
            .into_iter()
            .map(|d| (d, set.is_enabled(d)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_enables_everything() {
        let set = EnablementSet::default();
        assert!(Denomination::ALL.iter().all(|&d| set.is_enabled(d)));
        assert!(!set.is_empty());
    }

    #[test]
    fn test_without_disables_only_listed() {
        let set = EnablementSet::without(&[Denomination::Dime]);
        assert!(!set.is_enabled(Denomination::Dime));
        let enabled: Vec<_> = set.enabled().collect();
        assert_eq!(
            enabled,
            vec![
                Denomination::Dollar,
                Denomination::Quarter,
                Denomination::Nickel,
                Denomination::Penny
            ]
        );
    }

    #[test]
    fn test_reset_reenables_everything() {
        let mut set = EnablementSet::none();
        assert!(set.is_empty());
        set.reset();
        assert_eq!(set, EnablementSet::all());
    }

    #[test]
    fn test_toggle_flips_state() {
        let mut set = EnablementSet::all();
        assert!(!set.toggle(Denomination::Penny));
        assert!(!set.is_enabled(Denomination::Penny));
        assert!(set.toggle(Denomination::Penny));
    }

    #[test]
    fn test_serde_uses_ordered_map() {
        let set = EnablementSet::without(&[Denomination::Nickel]);
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(
            json,
            r#"{"dollar":true,"quarter":true,"dime":true,"nickel":false,"penny":true}"#
        );

        let parsed: EnablementSet = serde_json::from_str(r#"{"penny":false}"#).unwrap();
        assert_eq!(parsed, EnablementSet::without(&[Denomination::Penny]));
    }
}
