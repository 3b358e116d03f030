//! Denomination selection shared by both decomposers.
//!
//! Applies the enablement set to the fixed denomination table.

use crate::models::denomination::Denomination;
use crate::models::enablement::EnablementSet;

/// The largest enabled denomination whose value fits in `remaining` cents.
///
/// `None` means no enabled denomination can reduce `remaining`, and a
/// decomposition that reaches this point can never finish.
pub fn largest_usable(enabled: &EnablementSet, remaining: u32) -> Option<Denomination> {
    enabled.enabled().find(|d| d.value() <= remaining)
}

/// Whether `denomination` may be taken out of `remaining` cents.
pub fn fits(enabled: &EnablementSet, denomination: Denomination, remaining: u32) -> bool {
    enabled.is_enabled(denomination) && denomination.value() <= remaining
}
