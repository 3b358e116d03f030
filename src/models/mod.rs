//! Domain models for the change maker.
//!
//! These types are shared across all modules: engine, render, data, and report.

pub mod amount;
pub mod change;
pub mod denomination;
pub mod enablement;
pub mod report;

pub use amount::Amount;
pub use change::{ChangeResult, DecomposeMode};
pub use denomination::Denomination;
pub use enablement::EnablementSet;
