//! Mesh config file I/O

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use log::debug;
use tempfile::NamedTempFile;

use crate::config::meshconfig as file_config;
use crate::error::{MeshctlError, Result};

use super::models::MeshConfig;

/// Handles reading and writing the mesh config file
pub struct ConfigStore {
    config_path: PathBuf,
}

impl Default for ConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigStore {
    /// Create a new store using the default config path (~/.meshctl/config.yaml)
    pub fn new() -> Self {
        Self {
            config_path: Self::default_config_path(),
        }
    }

    /// Create a store with a custom config path
    pub fn with_path(path: PathBuf) -> Self {
        Self { config_path: path }
    }

    /// Store for an optional override path, falling back to the default
    pub fn from_override(path: Option<&Path>) -> Self {
        match path {
            Some(p) => Self::with_path(p.to_path_buf()),
            None => Self::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.config_path
    }

    fn default_config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(file_config::DIR_NAME)
            .join(file_config::FILE_NAME)
    }

    /// Load the mesh config from disk.
    /// Returns Default if file doesn't exist, errors on corrupt YAML.
    pub fn load(&self) -> Result<MeshConfig> {
        let exists = self.config_path.try_exists().map_err(|e| {
            MeshctlError::Config(format!(
                "Failed to access config {}: {}",
                self.config_path.display(),
                e
            ))
        })?;
        if !exists {
            debug!(
                "Config file {} not found, starting empty",
                self.config_path.display()
            );
            return Ok(MeshConfig::default());
        }

        let content = fs::read_to_string(&self.config_path).map_err(|e| {
            MeshctlError::Config(format!(
                "Failed to read config {}: {}",
                self.config_path.display(),
                e
            ))
        })?;

        if content.trim().is_empty() {
            return Ok(MeshConfig::default());
        }

        serde_yml::from_str(&content).map_err(|e| {
            MeshctlError::Config(format!(
                "Failed to parse config {}: {}",
                self.config_path.display(),
                e
            ))
        })
    }

    /// Save the mesh config to disk.
    /// Writes a uniquely named tmp file next to the target and renames it over
    /// the target; creates parent dir if needed.
    pub fn save(&self, config: &MeshConfig) -> Result<()> {
        let parent = match self.config_path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        fs::create_dir_all(parent).map_err(|e| {
            MeshctlError::Config(format!(
                "Failed to create config directory {}: {}",
                parent.display(),
                e
            ))
        })?;

        let yaml = serde_yml::to_string(config)
            .map_err(|e| MeshctlError::Config(format!("Failed to serialize config: {}", e)))?;

        let mut tmp = NamedTempFile::new_in(parent).map_err(|e| {
            MeshctlError::Config(format!(
                "Failed to create temp config file in {}: {}",
                parent.display(),
                e
            ))
        })?;
        tmp.write_all(yaml.as_bytes())
            .and_then(|_| tmp.as_file().sync_all())
            .map_err(|e| {
                MeshctlError::Config(format!(
                    "Failed to write temp config file {}: {}",
                    tmp.path().display(),
                    e
                ))
            })?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let permissions = fs::Permissions::from_mode(0o600);
            tmp.as_file().set_permissions(permissions).map_err(|e| {
                MeshctlError::Config(format!("Failed to set permissions on config file: {}", e))
            })?;
        }

        tmp.persist(&self.config_path).map_err(|e| {
            MeshctlError::Config(format!(
                "Failed to rename temp config file to {}: {}",
                self.config_path.display(),
                e.error
            ))
        })?;

        debug!("Wrote config {}", self.config_path.display());
        Ok(())
    }
}
