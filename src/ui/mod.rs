//! Terminal output.
//!
//! - [`report`] - Writes version lines, instruction blocks, and warnings

pub mod report;

pub use report::Reporter;
