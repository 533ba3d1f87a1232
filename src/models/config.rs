use chroma_core::{Catalog, CatalogError};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Application configuration loaded from a YAML file
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    /// Optional YAML list of `{name, hex}` entries replacing the built-in catalog
    #[serde(default)]
    pub catalog_file: Option<PathBuf>,

    /// How long a rendered preview stays available for sharing
    #[serde(default = "default_share_ttl")]
    pub share_ttl_secs: u64,

    /// Request size limits
    #[serde(default)]
    pub limits: Limits,
}

fn default_share_ttl() -> u64 {
    900 // 15 minutes
}

/// Upper bounds on user-controlled preview sizes
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Largest accepted `range` for similar-color previews
    #[serde(default = "default_max_similar")]
    pub max_similar: usize,

    /// Largest accepted layer count for palette previews
    #[serde(default = "default_max_palette_layers")]
    pub max_palette_layers: usize,

    /// Colors generated per palette layer
    #[serde(default = "default_colors_per_layer")]
    pub colors_per_layer: usize,
}

fn default_max_similar() -> usize {
    10
}

fn default_max_palette_layers() -> usize {
    3
}

fn default_colors_per_layer() -> usize {
    5
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_similar: default_max_similar(),
            max_palette_layers: default_max_palette_layers(),
            colors_per_layer: default_colors_per_layer(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            catalog_file: None,
            share_ttl_secs: default_share_ttl(),
            limits: Limits::default(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse {}: {source}", path.display())]
    Yaml {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    #[error("Invalid catalog {}: {source}", path.display())]
    Catalog { path: PathBuf, source: CatalogError },
}

/// One entry of an external catalog file
#[derive(Debug, Deserialize)]
struct CatalogEntry {
    name: String,
    hex: String,
}

impl AppConfig {
    /// Load configuration from `path`, or defaults when no path is given.
    ///
    /// A missing or malformed file is logged and replaced by defaults.
    pub fn load(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            tracing::debug!("No config file set, using defaults");
            return Self::default();
        };

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str::<Self>(&content) {
                Ok(config) => {
                    tracing::info!(
                        path = %path.display(),
                        catalog = ?config.catalog_file,
                        share_ttl_secs = config.share_ttl_secs,
                        "Loaded configuration"
                    );
                    config
                }
                Err(e) => {
                    tracing::warn!(%e, path = %path.display(), "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(%e, path = %path.display(), "Failed to read config, using defaults");
                Self::default()
            }
        }
    }

    /// Build the color catalog this configuration selects.
    ///
    /// Relative `catalog_file` paths resolve against the working directory.
    pub fn load_catalog(&self) -> Result<Catalog, ConfigError> {
        let Some(path) = &self.catalog_file else {
            return Ok(Catalog::builtin().clone());
        };

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;
        let entries: Vec<CatalogEntry> =
            serde_yaml::from_str(&content).map_err(|source| ConfigError::Yaml {
                path: path.clone(),
                source,
            })?;

        let pairs: Vec<(&str, &str)> = entries
            .iter()
            .map(|e| (e.name.as_str(), e.hex.as_str()))
            .collect();
        let catalog = Catalog::from_entries(&pairs).map_err(|source| ConfigError::Catalog {
            path: path.clone(),
            source,
        })?;

        tracing::info!(path = %path.display(), colors = catalog.len(), "Loaded color catalog");
        Ok(catalog)
    }
}
