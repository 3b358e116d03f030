use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A non-negative monetary amount, held as a whole number of cents.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[serde(transparent)]
pub struct Amount(u32);

impl Amount {
    pub const fn from_cents(cents: u32) -> Self {
        Amount(cents)
    }

    pub const fn cents(self) -> u32 {
        self.0
    }

    /// The amount in dollars, with two fractional digits.
    pub fn to_decimal(self) -> Decimal {
        Decimal::new(i64::from(self.0), 2)
    }
}

impl std::fmt::Display for Amount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}
