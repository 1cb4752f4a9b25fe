//! Command line interface for the kotoba binary.

pub mod args;
pub mod commands;
pub mod output;
