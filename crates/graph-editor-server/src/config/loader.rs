//! TOML configuration: default styles, random graph bounds, file format.
//!
//! ```toml
//! default_format = "extended"
//! log_level = "debug"
//! seed = 7
//!
//! [style.vertex]
//! fill = "0x87ceebff"
//! radius = 40
//!
//! [style.edge]
//! width = 2
//!
//! [random]
//! min_vertices = 4
//! max_vertices = 8
//! ```

use std::path::{Path, PathBuf};

use graph_editor::{Format, RandomGraphSpec, StyleConfig};
use serde::{Deserialize, Serialize};

use crate::types::{ServerError, ServerResult};

const CONFIG_DIR: &str = "graph-editor";
const CONFIG_FILE: &str = "config.toml";

/// Server configuration, every field optional in the file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    /// Styles given to new vertices and edges.
    pub style: StyleConfig,
    /// Parameters of `graph_random`.
    pub random: RandomGraphSpec,
    /// Format used by `file_save` when none is given for a new file.
    pub default_format: Format,
    /// Log filter used when `RUST_LOG` is unset.
    pub log_level: String,
    /// Fixed RNG seed for reproducible random graphs.
    pub seed: Option<u64>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            style: StyleConfig::default(),
            random: RandomGraphSpec::default(),
            default_format: Format::Minimal,
            log_level: "info".to_string(),
            seed: None,
        }
    }
}

impl ServerConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml(text: &str) -> ServerResult<Self> {
        let config: ServerConfig =
            toml::from_str(text).map_err(|e| ServerError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> ServerResult<()> {
        self.style
            .validate()
            .map_err(|e| ServerError::Config(e.to_string()))?;
        self.random
            .validate()
            .map_err(|e| ServerError::Config(e.to_string()))?;
        Ok(())
    }
}

/// `<config dir>/graph-editor/config.toml`, if the platform has one.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Load the configuration.
///
/// An explicit path must exist. Without one, the default location is used
/// when present and built-in defaults otherwise.
pub fn load_config(explicit: Option<&Path>) -> ServerResult<ServerConfig> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => match default_config_path() {
            Some(path) if path.exists() => path,
            _ => {
                tracing::debug!("No configuration file, using defaults");
                return Ok(ServerConfig::default());
            }
        },
    };

    let text = std::fs::read_to_string(&path).map_err(|e| {
        ServerError::Config(format!("failed to read {}: {e}", path.display()))
    })?;
    let config = ServerConfig::from_toml(&text)?;
    tracing::info!("Loaded configuration from {}", path.display());
    Ok(config)
}

/// Graph file to open at startup: the argument when given, nothing otherwise.
pub fn resolve_graph_path(arg: Option<&str>) -> Option<PathBuf> {
    arg.map(str::trim)
        .filter(|s| !s.is_empty())
        .map(PathBuf::from)
}
