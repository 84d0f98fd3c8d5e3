//! Command-line configuration.

pub mod config;
