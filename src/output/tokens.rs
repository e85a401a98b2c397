//! Token output formatter

use comfy_table::{presets::NOTHING, Table};

use super::common::{to_json, to_yaml};
use crate::cli::OutputFormat;
use crate::error::Result;
use crate::meshconfig::Token;

/// Render the token names for `token list`
pub fn render_token_list(tokens: &[Token], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => {
            let mut out = String::from("Available tokens:");
            if tokens.is_empty() {
                out.push_str("\nNo tokens configured.");
            }
            for t in tokens {
                out.push('\n');
                out.push_str(&t.name);
            }
            Ok(out)
        }
        OutputFormat::Table => Ok(token_table(tokens)),
        OutputFormat::Json => {
            let names: Vec<&str> = tokens.iter().map(|t| t.name.as_str()).collect();
            to_json(&names)
        }
        OutputFormat::Yaml => {
            let names: Vec<&str> = tokens.iter().map(|t| t.name.as_str()).collect();
            to_yaml(&names)
        }
    }
}

/// Render every token with its location for `token view --all`
pub fn render_all_tokens(tokens: &[Token], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => {
            let mut out = String::from("Listing all available tokens...");
            for t in tokens {
                out.push_str(&format!("\n-> token: {}\n   location: {}", t.name, t.location));
            }
            Ok(out)
        }
        OutputFormat::Table => Ok(token_table(tokens)),
        OutputFormat::Json => to_json(&tokens),
        OutputFormat::Yaml => to_yaml(&tokens),
    }
}

/// Render a single token for `token view`
pub fn render_token(token: &Token, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(format!(
            "token: {}\nlocation: {}",
            token.name, token.location
        )),
        OutputFormat::Table => Ok(token_table(std::slice::from_ref(token))),
        OutputFormat::Json => to_json(token),
        OutputFormat::Yaml => to_yaml(token),
    }
}

fn token_table(tokens: &[Token]) -> String {
    let mut table = Table::new();
    table.load_preset(NOTHING);
    table.set_header(vec!["NAME", "LOCATION"]);
    for t in tokens {
        table.add_row(vec![t.name.as_str(), t.location.as_str()]);
    }
    table.to_string()
}
