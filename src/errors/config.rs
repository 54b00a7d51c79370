// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a configuration file
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The config file could not be read
    #[error("Failed to read config file '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The extension is not one of yaml, yml, toml or json
    #[error("Unsupported config format for '{}': expected .yaml, .yml, .toml or .json", .0.display())]
    UnsupportedFormat(PathBuf),

    #[error("Invalid YAML config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid TOML config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid JSON config: {0}")]
    Json(#[from] serde_json::Error),
}
