//! CLI command handlers

pub mod links;
pub mod rank;
pub mod transition;
