//! Command-line interface for the `binsearch` binary.

pub mod args;
pub mod constants;
pub mod dispatch;
