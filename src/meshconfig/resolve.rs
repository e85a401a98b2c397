//! Context resolution from multiple sources

use log::debug;

use crate::config::context as context_config;
use crate::error::{MeshctlError, Result};

use super::models::MeshConfig;

/// Where a resolved context name came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextSource {
    Flag,
    Env,
    ConfigFile,
}

/// Resolve the context name from explicit sources, in order:
/// 1. --context CLI flag
/// 2. MESHCTL_CONTEXT env var value
/// 3. current-context from the config
///
/// Empty strings count as unset.
pub fn resolve_context_name_from(
    cli_context: Option<&str>,
    env_context: Option<&str>,
    config: &MeshConfig,
) -> Result<(String, ContextSource)> {
    if let Some(name) = cli_context.filter(|n| !n.is_empty()) {
        debug!("Using context from CLI flag: {}", name);
        return Ok((name.to_string(), ContextSource::Flag));
    }

    if let Some(name) = env_context.filter(|n| !n.is_empty()) {
        debug!(
            "Using context from {} env var: {}",
            context_config::ENV_VAR,
            name
        );
        return Ok((name.to_string(), ContextSource::Env));
    }

    if let Some(name) = config.current_context.as_deref().filter(|n| !n.is_empty()) {
        debug!("Using context from config file: {}", name);
        return Ok((name.to_string(), ContextSource::ConfigFile));
    }

    Err(MeshctlError::ContextUnresolved(format!(
        "No context specified. Pass --context, set {}, or run 'meshctl context use <name>'.",
        context_config::ENV_VAR
    )))
}
