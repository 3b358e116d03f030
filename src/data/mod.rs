//! Sample amounts for comparing the decomposers.
//!
//! Uses seeded RNG for reproducible datasets across runs.
//!
//! # Data Distribution
//! - 200 amounts by default
//! - 40% small change: $0.01–$0.99
//! - 35% everyday: $1.00–$19.99
//! - 25% large: $20.00–$1000.00

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::{MAX_AMOUNT, MIN_AMOUNT};
use crate::models::amount::Amount;

/// Data seed for reproducible generation.
const DATA_SEED: u64 = 42;

/// Generate `count` amounts with the weighted distribution above.
pub fn generate_sample_amounts(count: usize) -> Vec<Amount> {
    let mut rng = StdRng::seed_from_u64(DATA_SEED);
    (0..count).map(|_| generate_amount(&mut rng)).collect()
}

/// Get the standard sample dataset of 200 amounts.
///
/// Always returns the same data (seeded RNG).
pub fn get_sample_dataset() -> Vec<Amount> {
    generate_sample_amounts(200)
}

fn generate_amount(rng: &mut StdRng) -> Amount {
    let roll: f64 = rng.gen();
    let cents = if roll < 0.40 {
        rng.gen_range(MIN_AMOUNT.cents()..100)
    } else if roll < 0.75 {
        rng.gen_range(100..2_000)
    } else {
        rng.gen_range(2_000..=MAX_AMOUNT.cents())
    };
    Amount::from_cents(cents)
}
