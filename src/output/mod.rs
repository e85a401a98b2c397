//! Output formatting module
//!
//! Renders tokens, contexts and the raw config as text, tables, JSON or YAML.
//! Renderers return strings; command handlers decide where they go.

mod common;
mod contexts;
mod tokens;

pub use contexts::{render_config, render_context, render_context_table};
pub use tokens::{render_all_tokens, render_token, render_token_list};
