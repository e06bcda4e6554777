//! CLI command implementations

pub mod completions;
pub mod config;
pub mod doctor;
pub mod generate;
pub mod mode;
pub mod version;
