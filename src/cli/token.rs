//! Token management CLI arguments

use clap::builder::NonEmptyStringValueParser;
use clap::{Parser, Subcommand};

use super::common::OutputFormat;
use crate::config::defaults;

/// Token subcommands
#[derive(Subcommand, Debug)]
pub enum TokenAction {
    /// Create a token in your mesh config
    #[command(after_help = "EXAMPLES:\n  \
        meshctl token create <token-name> -f <token-path>\n  \
        meshctl token create <token-name>   # default path is auth.json")]
    Create(CreateTokenArgs),

    /// Delete a token from your mesh config
    Delete(DeleteTokenArgs),

    /// Set token for the current context or the context given with --context
    Set(SetTokenArgs),

    /// List all the tokens in your mesh config
    List(ListTokenArgs),

    /// View a specific token, or the token of the current context
    #[command(after_help = "EXAMPLES:\n  \
        meshctl token view <token-name>\n  \
        meshctl token view          # show token of current context\n  \
        meshctl token view --all")]
    View(ViewTokenArgs),
}

/// Arguments for 'token create'
#[derive(Parser, Debug)]
pub struct CreateTokenArgs {
    /// Token name
    #[arg(value_parser = NonEmptyStringValueParser::new())]
    pub name: String,
    /// Location of the token file
    #[arg(short = 'f', long = "filepath", default_value = defaults::TOKEN_LOCATION)]
    pub filepath: String,
}

/// Arguments for 'token delete'
#[derive(Parser, Debug)]
pub struct DeleteTokenArgs {
    /// Token name to delete
    pub name: String,
}

/// Arguments for 'token set'
#[derive(Parser, Debug)]
pub struct SetTokenArgs {
    /// Token name to assign
    pub name: String,
    /// Context to assign the token to (defaults to the current context)
    #[arg(long)]
    pub context: Option<String>,
}

/// Arguments for 'token list'
#[derive(Parser, Debug)]
pub struct ListTokenArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,
}

/// Arguments for 'token view'
#[derive(Parser, Debug)]
pub struct ViewTokenArgs {
    /// Token name (defaults to the token of the current context)
    pub name: Option<String>,
    /// View all the tokens
    #[arg(long, conflicts_with = "name")]
    pub all: bool,
    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,
}
