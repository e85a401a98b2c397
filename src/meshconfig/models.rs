//! Mesh config data models and in-memory operations

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{MeshctlError, Result};

/// Top-level mesh configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct MeshConfig {
    /// Name of the currently active context
    #[serde(rename = "current-context", skip_serializing_if = "Option::is_none")]
    pub current_context: Option<String>,
    /// Map of context name to context configuration
    #[serde(default)]
    pub contexts: BTreeMap<String, Context>,
    /// Named tokens, in creation order
    #[serde(default)]
    pub tokens: Vec<Token>,
}

/// A named profile with an optional assigned token
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Context {
    /// Server endpoint URL
    pub endpoint: String,
    /// Name of the token assigned to this context
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    /// Deployment platform (e.g. docker, kubernetes)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
}

/// A named reference to credential material on disk
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Token {
    pub name: String,
    /// Filesystem path to the credential file
    pub location: String,
}

impl Token {
    pub fn new(name: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            location: location.into(),
        }
    }
}

impl MeshConfig {
    /// Look up a token by name
    pub fn token(&self, name: &str) -> Option<&Token> {
        self.tokens.iter().find(|t| t.name == name)
    }

    /// Append a token. Fails if a token with the same name exists.
    pub fn add_token(&mut self, token: Token) -> Result<()> {
        if self.token(&token.name).is_some() {
            return Err(MeshctlError::TokenExists(token.name));
        }
        self.tokens.push(token);
        Ok(())
    }

    /// Remove a token by name and return it.
    ///
    /// Contexts that had the token assigned are unassigned; their names are
    /// returned alongside the removed token, sorted.
    pub fn delete_token(&mut self, name: &str) -> Result<(Token, Vec<String>)> {
        let idx = self
            .tokens
            .iter()
            .position(|t| t.name == name)
            .ok_or_else(|| MeshctlError::TokenNotFound(name.to_string()))?;
        let removed = self.tokens.remove(idx);

        let mut unassigned = Vec::new();
        for (ctx_name, ctx) in self.contexts.iter_mut() {
            if ctx.token.as_deref() == Some(name) {
                ctx.token = None;
                unassigned.push(ctx_name.clone());
            }
        }

        Ok((removed, unassigned))
    }

    /// Assign an existing token to an existing context
    pub fn set_token_for_context(&mut self, token_name: &str, context_name: &str) -> Result<()> {
        if self.token(token_name).is_none() {
            return Err(MeshctlError::TokenNotFound(token_name.to_string()));
        }
        let available = self.context_names();
        let ctx = self.contexts.get_mut(context_name).ok_or_else(|| {
            MeshctlError::ContextNotFound(context_not_found_message(context_name, &available))
        })?;
        ctx.token = Some(token_name.to_string());
        Ok(())
    }

    /// Resolve the token assigned to a context
    pub fn token_for_context(&self, context_name: &str) -> Result<&Token> {
        let ctx = self.contexts.get(context_name).ok_or_else(|| {
            MeshctlError::ContextNotFound(context_not_found_message(
                context_name,
                &self.context_names(),
            ))
        })?;
        let token_name = ctx.token.as_deref().ok_or_else(|| {
            MeshctlError::TokenNotFound(format!("for context \"{}\"", context_name))
        })?;
        self.token(token_name)
            .ok_or_else(|| MeshctlError::TokenNotFound(token_name.to_string()))
    }

    /// Context names joined for error messages
    pub fn context_names(&self) -> String {
        self.contexts.keys().cloned().collect::<Vec<_>>().join(", ")
    }
}

/// Message for an unknown context, listing the available ones
pub fn context_not_found_message(name: &str, available: &str) -> String {
    format!(
        "Context '{}' not found. Available contexts: {}",
        name, available
    )
}
