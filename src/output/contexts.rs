//! Context output formatter

use comfy_table::{presets::UTF8_FULL_CONDENSED, Cell, ContentArrangement, Table};

use super::common::{to_json, to_yaml};
use crate::cli::ConfigFormat;
use crate::error::Result;
use crate::meshconfig::{Context, MeshConfig};

const NOT_SET: &str = "<not set>";

/// Render all contexts as a table, marking the current one
pub fn render_context_table(config: &MeshConfig) -> String {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("CURRENT"),
            Cell::new("NAME"),
            Cell::new("ENDPOINT"),
            Cell::new("PLATFORM"),
            Cell::new("TOKEN"),
        ]);

    for (name, ctx) in &config.contexts {
        let is_current = config.current_context.as_ref().is_some_and(|c| c == name);
        let current_marker = if is_current { "*" } else { "" };

        table.add_row(vec![
            Cell::new(current_marker),
            Cell::new(name),
            Cell::new(&ctx.endpoint),
            Cell::new(ctx.platform.as_deref().unwrap_or(NOT_SET)),
            Cell::new(ctx.token.as_deref().unwrap_or(NOT_SET)),
        ]);
    }

    table.to_string()
}

/// Render the details of a single context
pub fn render_context(name: &str, ctx: &Context) -> String {
    format!(
        "Current context: {}\n  Endpoint: {}\n  Platform: {}\n  Token:    {}",
        name,
        ctx.endpoint,
        ctx.platform.as_deref().unwrap_or(NOT_SET),
        ctx.token.as_deref().unwrap_or(NOT_SET)
    )
}

/// Render the whole config
pub fn render_config(config: &MeshConfig, format: ConfigFormat) -> Result<String> {
    match format {
        ConfigFormat::Yaml => to_yaml(config),
        ConfigFormat::Json => to_json(config),
    }
}
