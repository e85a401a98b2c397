//! meshctl - Manage tokens and contexts in a local mesh config
//!
//! Tokens are named references to credential files. Contexts are named
//! profiles (endpoint, platform) that can each have one token assigned.
//! Everything lives in a single YAML file, `~/.meshctl/config.yaml` by default.
//!
//! # Example
//!
//! ```bash
//! # Create a context and a token, then assign the token to it
//! meshctl context set local --endpoint http://localhost:9081
//! meshctl token create default -f ~/.meshctl/auth.json
//! meshctl token set default
//!
//! # Show the token of the current context
//! meshctl token view
//!
//! # Show every token with its location
//! meshctl token view --all
//! ```

pub mod cli;
pub mod config;
pub mod context;
pub mod error;
pub mod meshconfig;
pub mod output;
pub mod token;

pub use cli::{Cli, Command, ContextAction, OutputFormat, TokenAction};
pub use context::run_context_command;
pub use error::{CommandError, MeshctlError, Result};
pub use meshconfig::{
    resolve_context_name_from, ConfigStore, Context, ContextSource, MeshConfig, Token,
};
pub use token::run_token_command;
