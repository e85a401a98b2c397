//! Context command handlers

use crate::cli::{ContextAction, SetContextArgs, ViewConfigArgs};
use crate::error::MeshctlError;
use crate::meshconfig::{context_not_found_message, ConfigStore, Context};
use crate::output::{render_config, render_context, render_context_table};

type CommandResult = Result<(), Box<dyn std::error::Error>>;

/// Dispatch context subcommands
pub fn run_context_command(action: &ContextAction, store: &ConfigStore) -> CommandResult {
    match action {
        ContextAction::List => run_context_list(store),
        ContextAction::Set(args) => run_context_set(store, args),
        ContextAction::Use(args) => run_context_use(store, &args.name),
        ContextAction::Delete(args) => run_context_delete(store, &args.name),
        ContextAction::Current => run_context_show(store),
        ContextAction::View(args) => run_config_view(store, args),
    }
}

/// List all contexts
fn run_context_list(store: &ConfigStore) -> CommandResult {
    let config = store.load()?;

    if config.contexts.is_empty() {
        println!("No contexts configured.");
        println!("\nUse 'meshctl context set <name> --endpoint <url>' to create one.");
        return Ok(());
    }

    println!("{}", render_context_table(&config));
    Ok(())
}

/// Show the current context details
fn run_context_show(store: &ConfigStore) -> CommandResult {
    let config = store.load()?;

    let current_name = config.current_context.as_ref().ok_or_else(|| {
        MeshctlError::ContextUnresolved(
            "No current context set. Use 'meshctl context use <name>' to set one.".to_string(),
        )
    })?;

    let ctx = config.contexts.get(current_name).ok_or_else(|| {
        MeshctlError::ContextNotFound(format!(
            "Current context '{}' not found in config. Available: {}",
            current_name,
            config.context_names()
        ))
    })?;

    println!("{}", render_context(current_name, ctx));
    Ok(())
}

/// Create or update a named context
fn run_context_set(store: &ConfigStore, args: &SetContextArgs) -> CommandResult {
    let mut config = store.load()?;

    if let Some(token) = &args.token {
        if config.token(token).is_none() {
            return Err(MeshctlError::TokenNotFound(token.clone()).into());
        }
    }

    if let Some(existing) = config.contexts.get_mut(&args.name) {
        if let Some(endpoint) = &args.endpoint {
            existing.endpoint = endpoint.clone();
        }
        if args.platform.is_some() {
            existing.platform = args.platform.clone();
        }
        if args.token.is_some() {
            existing.token = args.token.clone();
        }
        store.save(&config)?;
        println!("Updated context '{}'", args.name);
    } else {
        let endpoint = args.endpoint.as_ref().ok_or_else(|| {
            MeshctlError::Config(format!(
                "--endpoint is required when creating a new context. Usage:\n  \
                 meshctl context set {} --endpoint <URL> [--platform <PLATFORM>] [--token <NAME>]",
                args.name
            ))
        })?;

        let ctx = Context {
            endpoint: endpoint.clone(),
            token: args.token.clone(),
            platform: args.platform.clone(),
        };

        config.contexts.insert(args.name.clone(), ctx);

        // First context becomes current
        if config.contexts.len() == 1 {
            config.current_context = Some(args.name.clone());
        }

        store.save(&config)?;
        println!("Created context '{}'", args.name);
    }

    Ok(())
}

/// Switch the active context
fn run_context_use(store: &ConfigStore, name: &str) -> CommandResult {
    let mut config = store.load()?;

    if !config.contexts.contains_key(name) {
        return Err(MeshctlError::ContextNotFound(context_not_found_message(
            name,
            &config.context_names(),
        ))
        .into());
    }

    config.current_context = Some(name.to_string());
    store.save(&config)?;
    println!("Switched to context '{}'", name);

    Ok(())
}

/// Delete a named context
fn run_context_delete(store: &ConfigStore, name: &str) -> CommandResult {
    let mut config = store.load()?;

    if config.contexts.remove(name).is_none() {
        return Err(MeshctlError::ContextNotFound(context_not_found_message(
            name,
            &config.context_names(),
        ))
        .into());
    }

    if config.current_context.as_deref() == Some(name) {
        config.current_context = None;
    }

    store.save(&config)?;
    println!("Deleted context '{}'", name);

    Ok(())
}

/// Display the raw config file contents
fn run_config_view(store: &ConfigStore, args: &ViewConfigArgs) -> CommandResult {
    let config = store.load()?;
    println!("{}", render_config(&config, args.output)?);
    Ok(())
}
