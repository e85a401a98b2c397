//! Mesh config management
//!
//! The on-disk config holding named tokens, named contexts and the
//! context-to-token assignments, plus resolution of the active context.

mod models;
mod resolve;
mod store;

pub use models::{context_not_found_message, Context, MeshConfig, Token};
pub use resolve::{resolve_context_name_from, ContextSource};
pub use store::ConfigStore;
