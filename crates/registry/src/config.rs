use std::{
    env, fs,
    path::{Path, PathBuf},
    sync::Arc,
};

use dirs_next::{config_dir, home_dir};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::{ManifestProvider, ProviderChain, ResourceFactory};

/// Environment variable overriding the configuration file location.
pub const CONFIG_PATH_ENV: &str = "FORMATION_CONFIG_PATH";

/// Which catalog manifests to load at startup.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryConfig {
    #[serde(default)]
    pub manifests: Vec<ManifestSource>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestSource {
    /// Manifest location; a leading `~` expands to the home directory.
    pub path: String,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_enabled() -> bool {
    true
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to access config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file: {0}")]
    Json(#[from] serde_json::Error),
}

impl RegistryConfig {
    /// Load the configuration from [`default_config_path`].
    ///
    /// A missing or unreadable file yields the default configuration.
    pub fn load() -> Self {
        let path = default_config_path();
        match Self::load_from_path(&path) {
            Ok(config) => config,
            Err(ConfigError::Io { source, .. }) if source.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no registry config found, using defaults");
                Self::default()
            }
            Err(error) => {
                warn!(path = %path.display(), error = %error, "ignoring unreadable registry config");
                Self::default()
            }
        }
    }

    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn save_to_path(&self, path: &Path) -> Result<(), ConfigError> {
        let io_error = |source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(io_error)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content).map_err(io_error)
    }

    /// Expanded paths of the enabled manifests, in configuration order.
    pub fn manifest_paths(&self) -> Vec<PathBuf> {
        self.manifests
            .iter()
            .filter(|source| source.enabled)
            .map(|source| expand_tilde(&source.path))
            .collect()
    }

    /// Build a provider chain with one provider per enabled manifest.
    ///
    /// Manifests that fail to load are logged and skipped.
    pub fn build_chain(&self) -> ProviderChain {
        let chain = ProviderChain::new();
        for path in self.manifest_paths() {
            match ManifestProvider::load(&path) {
                Ok(provider) => chain.register(provider),
                Err(error) => warn!(path = %path.display(), error = %error, "skipping catalog manifest"),
            }
        }
        chain
    }

    pub fn build_factory(&self) -> ResourceFactory {
        ResourceFactory::new(Arc::new(self.build_chain()))
    }
}

/// Get the default path for the registry configuration file.
pub fn default_config_path() -> PathBuf {
    if let Ok(path) = env::var(CONFIG_PATH_ENV)
        && !path.trim().is_empty()
    {
        return expand_tilde(&path);
    }

    config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("formation")
        .join("config.json")
}

/// Expand a leading `~` to the user's home directory.
pub fn expand_tilde(path: &str) -> PathBuf {
    if path == "~" {
        return home_dir().unwrap_or_else(|| PathBuf::from(path));
    }
    if let Some(rest) = path.strip_prefix("~/")
        && let Some(home) = home_dir()
    {
        return home.join(rest);
    }
    PathBuf::from(path)
}
