//! Make Change shared library.
//!
//! This crate contains the change-making logic: amount validation,
//! the greedy and randomized decomposers, and the domain types they
//! share with the command-line front ends.
//!
//! Each binary in `src/bin/` imports from this library to keep the
//! presentation code thin and the decomposition logic reusable.

pub mod config;
pub mod data;
pub mod engine;
pub mod error;
pub mod logger;
pub mod models;
pub mod render;
pub mod report;

pub use engine::{decompose, ChangeEngine};
pub use error::{ChangeError, Result};

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
