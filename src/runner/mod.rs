//! Check run orchestration.

pub mod check;

pub use check::{CheckRunner, RunSummary};
