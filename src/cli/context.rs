//! Context management CLI arguments

use clap::{Parser, Subcommand, ValueEnum};

/// Context subcommands
#[derive(Subcommand, Debug)]
pub enum ContextAction {
    /// Create or update a context entry in the config file
    Set(SetContextArgs),

    /// Set the current-context in the config file
    #[command(visible_alias = "switch")]
    Use(UseContextArgs),

    /// List all contexts
    List,

    /// Display the current-context
    Current,

    /// Delete the specified context from the config file
    Delete(DeleteContextArgs),

    /// Display config file contents
    View(ViewConfigArgs),
}

/// Arguments for 'context set'
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
        meshctl context set local --endpoint http://localhost:9081 --platform docker\n  \
        meshctl context set remote --endpoint https://mesh.example.com --token ci\n  \
        meshctl context set local --platform kubernetes   # update existing context")]
pub struct SetContextArgs {
    /// Context name
    pub name: String,
    /// Server endpoint URL
    #[arg(long)]
    pub endpoint: Option<String>,
    /// Deployment platform
    #[arg(long)]
    pub platform: Option<String>,
    /// Name of an existing token to assign
    #[arg(long)]
    pub token: Option<String>,
}

/// Arguments for 'context use'
#[derive(Parser, Debug)]
pub struct UseContextArgs {
    /// Context name to activate
    pub name: String,
}

/// Arguments for 'context delete'
#[derive(Parser, Debug)]
pub struct DeleteContextArgs {
    /// Context name to delete
    pub name: String,
}

/// Arguments for 'context view'
#[derive(Parser, Debug)]
pub struct ViewConfigArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value_t = ConfigFormat::Yaml)]
    pub output: ConfigFormat,
}

/// Formats the raw config can be printed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ConfigFormat {
    Yaml,
    Json,
}
