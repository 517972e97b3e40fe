//! Error types for the regrid CLI.

use std::{io, path::PathBuf};

use thiserror::Error;

use regrid::TransposeError;

use crate::config::ConfigError;

/// Everything that can end a CLI run.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to read scene {path}: {source}")]
    SceneParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to encode scene: {0}")]
    SceneEncode(#[from] toml::ser::Error),

    #[error(transparent)]
    Transpose(#[from] TransposeError),

    #[error("Preview error: {0}")]
    Preview(String),
}
