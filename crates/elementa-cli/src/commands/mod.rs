//! CLI command implementations.

pub mod config;
pub mod rule;
pub mod run;
