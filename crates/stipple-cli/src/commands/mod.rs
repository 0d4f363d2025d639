//! CLI subcommands

pub mod demo;
pub mod kinds;
pub mod labels;
