//! `~/.showcase/config.toml` loading.
//!
//! ```toml
//! [app]
//! theme = "navy"
//! ascii_only = false
//! high_contrast = false
//! reduced_motion = true
//!
//! [catalog]
//! path = "${HOME}/showcase/catalog.toml"
//! assets_dir = "${HOME}/showcase/assets"
//! ```
//!
//! Every table and key is optional.

use std::path::{Path, PathBuf};
use std::{env, fs, io};

use serde::Deserialize;
use thiserror::Error;

use showcase_types::ui::{ThemeName, UiOptions};

/// Environment variable that overrides `[catalog] path`.
pub const CATALOG_ENV: &str = "SHOWCASE_CATALOG";

#[derive(Debug, Default, Deserialize)]
pub struct ShowcaseConfig {
    pub app: Option<AppConfig>,
    pub catalog: Option<CatalogConfig>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl ConfigError {
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct AppConfig {
    /// "gold" (default) or "navy".
    pub theme: Option<String>,
    /// Use ASCII-only glyphs for icons and decorations.
    #[serde(default)]
    pub ascii_only: bool,
    /// Enable a high-contrast color palette.
    #[serde(default)]
    pub high_contrast: bool,
    /// Finish entrance animations immediately and jump instead of gliding.
    #[serde(default)]
    pub reduced_motion: bool,
}

#[derive(Debug, Default, Deserialize)]
pub struct CatalogConfig {
    /// Replacement catalog file. Supports `${VAR}` expansion.
    pub path: Option<String>,
    /// Directory preview images are looked up in. Supports `${VAR}` expansion.
    pub assets_dir: Option<String>,
}

/// Replace `${VAR}` with the variable's value (empty if unset).
pub fn expand_env_vars(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut rest = value;

    while let Some(start) = rest.find("${") {
        let after = &rest[start + 2..];
        let Some(end) = after.find('}') else {
            break;
        };
        out.push_str(&rest[..start]);
        let var = &after[..end];
        if !var.is_empty() {
            out.push_str(&env::var(var).unwrap_or_default());
        }
        rest = &after[end + 1..];
    }

    out.push_str(rest);
    out
}

impl ShowcaseConfig {
    /// Load the user's config. `Ok(None)` when there is no config file.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        match config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(None),
        }
    }

    pub fn load_from(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        match toml::from_str(&content) {
            Ok(config) => Ok(Some(config)),
            Err(err) => {
                tracing::warn!("Failed to parse config at {:?}: {}", path, err);
                Err(ConfigError::Parse {
                    path: path.to_path_buf(),
                    source: err,
                })
            }
        }
    }

    #[must_use]
    pub fn path() -> Option<PathBuf> {
        config_path()
    }

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        let Some(app) = &self.app else {
            return UiOptions::default();
        };
        let theme = match app.theme.as_deref() {
            None => ThemeName::default(),
            Some(raw) => ThemeName::parse(raw).unwrap_or_else(|| {
                tracing::warn!(theme = raw, "Unknown theme; using default");
                ThemeName::default()
            }),
        };
        UiOptions {
            theme,
            ascii_only: app.ascii_only,
            high_contrast: app.high_contrast,
            reduced_motion: app.reduced_motion,
        }
    }

    /// Catalog file to load instead of the built-in one, if any.
    ///
    /// `SHOWCASE_CATALOG` wins over `[catalog] path`.
    #[must_use]
    pub fn catalog_path(&self) -> Option<PathBuf> {
        let from_env = env::var(CATALOG_ENV).ok();
        self.catalog_path_with(from_env.as_deref())
    }

    fn catalog_path_with(&self, env_override: Option<&str>) -> Option<PathBuf> {
        let raw = env_override
            .filter(|value| !value.trim().is_empty())
            .map(str::to_string)
            .or_else(|| {
                self.catalog
                    .as_ref()
                    .and_then(|catalog| catalog.path.as_deref())
                    .map(expand_env_vars)
            })?;
        non_blank_path(&raw)
    }

    #[must_use]
    pub fn assets_dir(&self) -> Option<PathBuf> {
        let raw = self.catalog.as_ref()?.assets_dir.as_deref()?;
        non_blank_path(&expand_env_vars(raw))
    }
}

fn non_blank_path(raw: &str) -> Option<PathBuf> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| PathBuf::from(trimmed))
}

/// Root directory for config and logs: `~/.showcase`.
#[must_use]
pub fn showcase_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".showcase"))
}

#[must_use]
pub fn config_path() -> Option<PathBuf> {
    showcase_dir().map(|dir| dir.join("config.toml"))
}
