//! Token command handlers

use log::{debug, warn};

use crate::cli::{
    CreateTokenArgs, DeleteTokenArgs, ListTokenArgs, SetTokenArgs, TokenAction, ViewTokenArgs,
};
use crate::config::context as context_config;
use crate::error::{CommandError, MeshctlError};
use crate::meshconfig::{resolve_context_name_from, ConfigStore, Token};
use crate::output::{render_all_tokens, render_token, render_token_list};

type CommandResult = Result<(), Box<dyn std::error::Error>>;

/// Dispatch token subcommands
pub fn run_token_command(action: &TokenAction, store: &ConfigStore) -> CommandResult {
    let env_context = std::env::var(context_config::ENV_VAR).ok();
    let env_context = env_context.as_deref();
    match action {
        TokenAction::Create(args) => run_token_create(store, args),
        TokenAction::Delete(args) => run_token_delete(store, args),
        TokenAction::Set(args) => run_token_set(store, args, env_context),
        TokenAction::List(args) => run_token_list(store, args),
        TokenAction::View(args) => run_token_view(store, args, env_context),
    }
}

/// Add a token to the config
fn run_token_create(store: &ConfigStore, args: &CreateTokenArgs) -> CommandResult {
    let mut config = store.load()?;

    config
        .add_token(Token::new(&args.name, &args.filepath))
        .map_err(|e| CommandError::new("Could not create specified token to config", e))?;
    store.save(&config)?;

    debug!("Token {} stored with location {}", args.name, args.filepath);
    println!("Token {} created.", args.name);
    Ok(())
}

/// Remove a token from the config, unassigning it from any context
fn run_token_delete(store: &ConfigStore, args: &DeleteTokenArgs) -> CommandResult {
    let mut config = store.load()?;

    let (_, unassigned) = config.delete_token(&args.name).map_err(|e| {
        CommandError::new(
            format!("Could not delete token \"{}\" from config", args.name),
            e,
        )
    })?;
    store.save(&config)?;

    for ctx in &unassigned {
        warn!(
            "Token {} was assigned to context \"{}\"; the assignment has been cleared",
            args.name, ctx
        );
    }
    println!("Token {} deleted.", args.name);
    Ok(())
}

/// Assign a token to the resolved context
fn run_token_set(
    store: &ConfigStore,
    args: &SetTokenArgs,
    env_context: Option<&str>,
) -> CommandResult {
    let mut config = store.load()?;

    let (ctx, source) = resolve_context_name_from(args.context.as_deref(), env_context, &config)
        .map_err(|e| CommandError::new(format!("Could not set token \"{}\"", args.name), e))?;
    debug!("Assigning token {} to context {} ({:?})", args.name, ctx, source);

    config.set_token_for_context(&args.name, &ctx).map_err(|e| {
        CommandError::new(
            format!("Could not set token \"{}\" on context {}", args.name, ctx),
            e,
        )
    })?;
    store.save(&config)?;

    println!("Token {} set for context {}", args.name, ctx);
    Ok(())
}

/// Print every token name
fn run_token_list(store: &ConfigStore, args: &ListTokenArgs) -> CommandResult {
    let config = store.load()?;
    println!("{}", render_token_list(&config.tokens, args.output)?);
    Ok(())
}

/// Print one token, all tokens, or the token of the current context
fn run_token_view(
    store: &ConfigStore,
    args: &ViewTokenArgs,
    env_context: Option<&str>,
) -> CommandResult {
    let config = store.load()?;

    if args.all {
        println!("{}", render_all_tokens(&config.tokens, args.output)?);
        return Ok(());
    }

    let token = match &args.name {
        Some(name) => config
            .token(name)
            .ok_or_else(|| MeshctlError::TokenNotFound(name.clone()))?,
        None => {
            let wrap = |e: MeshctlError| {
                CommandError::new("Could not get token for the current context", e)
            };
            let (ctx, _) = resolve_context_name_from(None, env_context, &config).map_err(wrap)?;
            let token = config.token_for_context(&ctx).map_err(wrap)?;
            warn!(
                "Token unspecified. Displaying token for current context \"{}\"",
                ctx
            );
            token
        }
    };

    println!("{}", render_token(token, args.output)?);
    Ok(())
}
