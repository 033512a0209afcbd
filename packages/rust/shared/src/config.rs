//! Application configuration for docshard.
//!
//! Config is looked up at `./docshard.toml` first (project-local), then at
//! `~/.docshard/docshard.toml`. CLI flags override config file values, which
//! override defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, ShardError};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "docshard.toml";

/// Default config directory name under the user's home.
const CONFIG_DIR_NAME: &str = ".docshard";

// ---------------------------------------------------------------------------
// Config structs (matching docshard.toml schema)
// ---------------------------------------------------------------------------

/// Top-level application config, deserialized from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Global defaults.
    #[serde(default)]
    pub defaults: DefaultsConfig,

    /// Registered documents that can be sharded by name (or all at once).
    #[serde(default)]
    pub documents: Vec<DocumentEntry>,
}

/// `[defaults]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Root directory for destination folders of registered documents
    /// that do not set an explicit `dest`.
    #[serde(default = "default_output_root")]
    pub output_root: String,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            output_root: default_output_root(),
        }
    }
}

fn default_output_root() -> String {
    "docs".into()
}

/// `[[documents]]` entry — a registered document in the shard registry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentEntry {
    /// Short name used on the command line (e.g. `prd`, `architecture`).
    pub name: String,
    /// Path to the source markdown file.
    pub source: String,
    /// Destination directory. Defaults to `<output_root>/<name>/`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dest: Option<String>,
}

impl DocumentEntry {
    /// Resolve the destination directory for this entry.
    pub fn resolved_dest(&self, defaults: &DefaultsConfig) -> PathBuf {
        match &self.dest {
            Some(d) => PathBuf::from(d),
            None => PathBuf::from(&defaults.output_root).join(&self.name),
        }
    }
}

// ---------------------------------------------------------------------------
// Config loading
// ---------------------------------------------------------------------------

/// Get the path to the user config directory (`~/.docshard/`).
pub fn config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| ShardError::config("could not determine home directory"))?;
    Ok(home.join(CONFIG_DIR_NAME))
}

/// Get the path to the user config file (`~/.docshard/docshard.toml`).
pub fn config_file_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE_NAME))
}

/// Load the application config. Project-local `./docshard.toml` wins over
/// the user config; defaults are returned when neither exists.
pub fn load_config() -> Result<AppConfig> {
    let local = PathBuf::from(CONFIG_FILE_NAME);
    if local.exists() {
        return load_config_from(&local);
    }

    let user = config_file_path()?;
    if user.exists() {
        return load_config_from(&user);
    }

    tracing::debug!("no config file found, using defaults");
    Ok(AppConfig::default())
}

/// Load the application config from a specific file path.
pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    let content =
        std::fs::read_to_string(path).map_err(|e| ShardError::source_io(path, e))?;

    toml::from_str(&content)
        .map_err(|e| ShardError::config(format!("failed to parse {}: {e}", path.display())))
}

/// Create the user config directory and write a default config file.
/// Returns the path to the created file.
pub fn init_config() -> Result<PathBuf> {
    let dir = config_dir()?;
    std::fs::create_dir_all(&dir).map_err(|e| ShardError::write_io(&dir, e))?;

    let path = dir.join(CONFIG_FILE_NAME);
    let config = AppConfig::default();
    let content =
        toml::to_string_pretty(&config).map_err(|e| ShardError::config(e.to_string()))?;

    std::fs::write(&path, content).map_err(|e| ShardError::write_io(&path, e))?;
    tracing::info!(?path, "created default config file");

    Ok(path)
}
