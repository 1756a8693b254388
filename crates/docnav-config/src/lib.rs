//! Configuration management for docnav.
//!
//! Parses `docnav.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! Programmatic settings can be applied during load via [`Overrides`].
//!
//! ```toml
//! [menu]
//! title = "Design System"
//! subtitle = "v2"
//!
//! [navigation]
//! base_path = "/docs"
//! use_hash_urls = false
//!
//! [collapse]
//! collapsible = true
//! storage_key = "sidebar"
//! state_dir = ".docnav/state"
//!
//! [docs]
//! source_dir = "docs"
//!
//! [[sections]]
//! type = "folder"
//! id = "components"
//! title = "Components"
//! children = [
//!     { type = "document", id = "buttons" },
//!     { type = "component", id = "playground", label = "Playground", route = "/playground" },
//! ]
//! ```
//!
//! ## Environment Variable Expansion
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `navigation.base_path`
//! - `docs.source_dir`
//! - `collapse.state_dir`

mod expand;

use docnav_menu::Declaration;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct Overrides {
    /// Override docs source directory.
    pub source_dir: Option<PathBuf>,
    /// Override navigation base path.
    pub base_path: Option<String>,
    /// Override hash URL mode.
    pub use_hash_urls: Option<bool>,
    /// Override collapsible flag.
    pub collapsible: Option<bool>,
    /// Override collapse state directory.
    pub state_dir: Option<PathBuf>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "docnav.toml";

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Menu header.
    pub menu: MenuConfig,
    /// URL scheme.
    pub navigation: NavigationConfig,
    /// Collapse settings (state directory is a relative string from TOML).
    collapse: CollapseConfigRaw,
    /// Documentation settings (paths are relative strings from TOML).
    docs: DocsConfigRaw,
    /// Static menu structure.
    pub sections: Vec<Declaration>,

    /// Resolved docs configuration (set after loading).
    #[serde(skip)]
    pub docs_resolved: DocsConfig,
    /// Resolved collapse configuration (set after loading).
    #[serde(skip)]
    pub collapse_resolved: CollapseConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Menu header configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct MenuConfig {
    /// Menu title.
    pub title: String,
    /// Optional line under the title.
    pub subtitle: Option<String>,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            title: "Documentation".to_owned(),
            subtitle: None,
        }
    }
}

/// URL scheme configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    /// Prefix for document URLs, e.g. `/docs`. Empty for root.
    pub base_path: String,
    /// Use `#id` fragment links instead of paths.
    pub use_hash_urls: bool,
}

/// Raw collapse configuration as parsed from TOML.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct CollapseConfigRaw {
    collapsible: Option<bool>,
    storage_key: Option<String>,
    state_dir: Option<String>,
}

/// Resolved collapse configuration.
#[derive(Debug)]
pub struct CollapseConfig {
    /// Whether folders honor collapse state.
    pub collapsible: bool,
    /// Key the collapse state is stored under.
    pub storage_key: String,
    /// Directory for persisted state.
    pub state_dir: PathBuf,
}

impl Default for CollapseConfig {
    fn default() -> Self {
        Self {
            collapsible: true,
            storage_key: "sidebar".to_owned(),
            state_dir: PathBuf::from(".docnav/state"),
        }
    }
}

/// Raw docs configuration as parsed from TOML (paths as strings).
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct DocsConfigRaw {
    source_dir: Option<String>,
}

/// Resolved documentation configuration with absolute paths.
#[derive(Debug, Default)]
pub struct DocsConfig {
    /// Source directory for markdown files.
    pub source_dir: PathBuf,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`navigation.base_path`").
        field: String,
        /// Error message (e.g., "${`DOCS_PREFIX`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional overrides.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `docnav.toml` in current directory and parents.
    ///
    /// Overrides are applied after loading and path resolution, and the
    /// result is validated again.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// or the final configuration is invalid.
    pub fn load(
        config_path: Option<&Path>,
        overrides: Option<&Overrides>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = std::env::current_dir()
            .ok()
            .and_then(|cwd| Self::discover_from(&cwd))
        {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(overrides) = overrides {
            config.apply_overrides(overrides);
            config.validate()?;
        }

        Ok(config)
    }

    /// Apply overrides to the configuration.
    fn apply_overrides(&mut self, overrides: &Overrides) {
        if let Some(source_dir) = &overrides.source_dir {
            self.docs_resolved.source_dir.clone_from(source_dir);
        }
        if let Some(base_path) = &overrides.base_path {
            self.navigation.base_path.clone_from(base_path);
        }
        if let Some(use_hash_urls) = overrides.use_hash_urls {
            self.navigation.use_hash_urls = use_hash_urls;
        }
        if let Some(collapsible) = overrides.collapsible {
            self.collapse_resolved.collapsible = collapsible;
        }
        if let Some(state_dir) = &overrides.state_dir {
            self.collapse_resolved.state_dir.clone_from(state_dir);
        }
    }

    /// Search for the config file in `start` and its parents.
    fn discover_from(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        Self {
            menu: MenuConfig::default(),
            navigation: NavigationConfig::default(),
            collapse: CollapseConfigRaw::default(),
            docs: DocsConfigRaw::default(),
            sections: Vec::new(),
            docs_resolved: DocsConfig {
                source_dir: base.join("docs"),
            },
            collapse_resolved: CollapseConfig {
                state_dir: base.join(".docnav/state"),
                ..CollapseConfig::default()
            },
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        // Expand environment variables before path resolution
        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Called automatically after loading from file and after overrides.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.menu.title, "menu.title")?;
        self.validate_navigation()?;
        self.validate_collapse()?;
        Ok(())
    }

    /// Validate navigation configuration.
    fn validate_navigation(&self) -> Result<(), ConfigError> {
        let base_path = &self.navigation.base_path;
        if base_path.is_empty() {
            return Ok(());
        }

        if !base_path.starts_with('/') {
            return Err(ConfigError::Validation(
                "navigation.base_path must start with /".to_owned(),
            ));
        }
        // "/" itself is rejected too: the root is spelled as an empty base path
        if base_path.ends_with('/') {
            return Err(ConfigError::Validation(
                "navigation.base_path cannot end with /".to_owned(),
            ));
        }

        Ok(())
    }

    /// Validate collapse configuration.
    fn validate_collapse(&self) -> Result<(), ConfigError> {
        let key = &self.collapse_resolved.storage_key;
        require_non_empty(key, "collapse.storage_key")?;

        if key.contains(['/', '\\']) || key == "." || key == ".." {
            return Err(ConfigError::Validation(
                "collapse.storage_key must be a plain name".to_owned(),
            ));
        }

        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.navigation.base_path =
            expand::expand_env(&self.navigation.base_path, "navigation.base_path")?;

        if let Some(ref source_dir) = self.docs.source_dir {
            self.docs.source_dir = Some(expand::expand_env(source_dir, "docs.source_dir")?);
        }

        if let Some(ref state_dir) = self.collapse.state_dir {
            self.collapse.state_dir = Some(expand::expand_env(state_dir, "collapse.state_dir")?);
        }

        Ok(())
    }

    /// Resolve relative paths to absolute paths based on config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        let resolve = |path: Option<&str>, default: &str| config_dir.join(path.unwrap_or(default));

        self.docs_resolved = DocsConfig {
            source_dir: resolve(self.docs.source_dir.as_deref(), "docs"),
        };

        let defaults = CollapseConfig::default();
        self.collapse_resolved = CollapseConfig {
            collapsible: self.collapse.collapsible.unwrap_or(defaults.collapsible),
            storage_key: self
                .collapse
                .storage_key
                .clone()
                .unwrap_or(defaults.storage_key),
            state_dir: resolve(self.collapse.state_dir.as_deref(), ".docnav/state"),
        };
    }
}
