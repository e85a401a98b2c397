//! Context management module
//!
//! Named contexts bundle a server endpoint, a platform and an assigned token,
//! and one of them can be marked as the current context.

mod commands;

pub use commands::run_context_command;
