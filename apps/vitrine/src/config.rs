//! # Application Configuration
//!
//! Optional `vitrine.toml` layered over built-in defaults; CLI flags win
//! over both. [`AppConfig::defaults`] returns the defaults without touching
//! the filesystem (useful in tests).
//!
//! ```toml
//! [catalog]
//! data = "catalog.json"
//! languages = "minimal"        # or "extended"
//! default_language = "ko"
//!
//! [server]
//! host = "127.0.0.1"
//! port = 8080
//! ```

use serde::Deserialize;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use vitrine_core::{CatalogConfig, CatalogError, Language};

// =============================================================================
// CONFIG TYPES
// =============================================================================

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub catalog: CatalogSection,
    #[serde(default)]
    pub server: ServerSection,
}

/// `[catalog]` section of `vitrine.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogSection {
    /// Path to the catalog JSON data file.
    #[serde(default)]
    pub data: Option<PathBuf>,
    /// Which language set to support: `minimal` (5) or `extended` (10).
    #[serde(default = "default_languages")]
    pub languages: String,
    /// Default display language code.
    #[serde(default = "default_language")]
    pub default_language: String,
}

fn default_languages() -> String {
    "minimal".to_string()
}
fn default_language() -> String {
    "ko".to_string()
}

impl Default for CatalogSection {
    fn default() -> Self {
        Self {
            data: None,
            languages: default_languages(),
            default_language: default_language(),
        }
    }
}

/// `[server]` section of `vitrine.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSection {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}
fn default_port() -> u16 {
    8080
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

// =============================================================================
// LOADING
// =============================================================================

impl AppConfig {
    /// Load configuration.
    ///
    /// An explicit path must exist and parse; without one, `vitrine.toml`
    /// in the working directory is used if present, else the built-in
    /// defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, CatalogError> {
        match path {
            Some(explicit) => Self::from_file(explicit),
            None => {
                let implicit = Path::new("vitrine.toml");
                if implicit.exists() {
                    Self::from_file(implicit)
                } else {
                    Ok(Self::defaults())
                }
            }
        }
    }

    /// The built-in defaults, no filesystem access.
    #[must_use]
    pub fn defaults() -> Self {
        Self::default()
    }

    fn from_file(path: &Path) -> Result<Self, CatalogError> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            CatalogError::IoError(format!("Cannot read config '{}': {}", path.display(), e))
        })?;
        toml::from_str(&raw).map_err(|e| {
            CatalogError::SerializationError(format!(
                "Invalid config '{}': {}",
                path.display(),
                e
            ))
        })
    }

    /// Build the core catalog configuration from the `[catalog]` section.
    pub fn catalog_config(&self) -> Result<CatalogConfig, CatalogError> {
        let base = match self.catalog.languages.as_str() {
            "minimal" => CatalogConfig::minimal(),
            "extended" => CatalogConfig::extended(),
            other => {
                return Err(CatalogError::SerializationError(format!(
                    "Unknown language set {other:?} (expected \"minimal\" or \"extended\")"
                )));
            }
        };

        let default_language = Language::from_code(&self.catalog.default_language)
            .ok_or_else(|| CatalogError::UnknownLanguage(self.catalog.default_language.clone()))?;

        if default_language == base.default_language() {
            return Ok(base);
        }
        let supported: BTreeSet<Language> = base.supported().iter().copied().collect();
        CatalogConfig::custom(default_language, supported)
    }
}

// =============================================================================
// TESTS
// =============================================================================
