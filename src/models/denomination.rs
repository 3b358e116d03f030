use serde::{Deserialize, Serialize};

use crate::error::ChangeError;

/// A US coin or bill the change maker can hand out.
///
/// Variants are declared from the largest to the smallest value, so the
/// derived `Ord` sorts a dollar before a penny.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Denomination {
    Dollar,
    Quarter,
    Dime,
    Nickel,
    Penny,
}

impl Denomination {
    /// Number of denominations in the fixed set.
    pub const COUNT: usize = 5;

    /// Every denomination, largest value first.
    pub const ALL: [Denomination; Denomination::COUNT] = [
        Denomination::Dollar,
        Denomination::Quarter,
        Denomination::Dime,
        Denomination::Nickel,
        Denomination::Penny,
    ];

    /// Value in cents.
    pub fn value(self) -> u32 {
        match self {
            Denomination::Dollar => 100,
            Denomination::Quarter => 25,
            Denomination::Dime => 10,
            Denomination::Nickel => 5,
            Denomination::Penny => 1,
        }
    }

    /// Position in [`Denomination::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Denomination::Dollar => "dollar",
            Denomination::Quarter => "quarter",
            Denomination::Dime => "dime",
            Denomination::Nickel => "nickel",
            Denomination::Penny => "penny",
        }
    }

    pub fn plural(self) -> &'static str {
        match self {
            Denomination::Dollar => "dollars",
            Denomination::Quarter => "quarters",
            Denomination::Dime => "dimes",
            Denomination::Nickel => "nickels",
            Denomination::Penny => "pennies",
        }
    }
}

impl std::fmt::Display for Denomination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for Denomination {
    type Err = ChangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Denomination::ALL
            .into_iter()
            .find(|d| d.name() == wanted || d.plural() == wanted)
            .ok_or_else(|| ChangeError::UnknownDenomination(s.to_string()))
    }
}
