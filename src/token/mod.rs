//! Token management module
//!
//! Create, delete, list and view named tokens, and assign them to contexts.

mod commands;

pub use commands::run_token_command;
