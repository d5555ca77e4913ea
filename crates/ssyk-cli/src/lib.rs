//! CLI library components for the SSYK translator.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod summary;
pub mod types;
