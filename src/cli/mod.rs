//! CLI argument parsing

mod common;
mod context;
mod token;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::{defaults, meshconfig};

pub use common::OutputFormat;
pub use context::{
    ConfigFormat, ContextAction, DeleteContextArgs, SetContextArgs, UseContextArgs,
    ViewConfigArgs,
};
pub use token::{
    CreateTokenArgs, DeleteTokenArgs, ListTokenArgs, SetTokenArgs, TokenAction, ViewTokenArgs,
};

/// Mesh config token and context manager
#[derive(Parser, Debug)]
#[command(name = "meshctl")]
#[command(version)]
#[command(about = "Manage tokens and contexts in your mesh config", long_about = None)]
pub struct Cli {
    /// Path to the config file (default: ~/.meshctl/config.yaml)
    #[arg(long, global = true, env = meshconfig::PATH_ENV_VAR)]
    pub config: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, global = true, default_value = defaults::LOG_LEVEL)]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level command groups
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Manage user tokens and their context assignments
    #[command(arg_required_else_help = true)]
    Token {
        #[command(subcommand)]
        action: TokenAction,
    },

    /// Manage named contexts
    #[command(arg_required_else_help = true, visible_alias = "ctx")]
    Context {
        #[command(subcommand)]
        action: ContextAction,
    },
}
