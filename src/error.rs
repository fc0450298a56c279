//! Error types
//!
//! The simulation itself cannot fail once running. These cover construction
//! of the world and loading of startup settings.

use std::path::PathBuf;

use thiserror::Error;

/// Precondition violations when building the simulation
#[derive(Debug, Error)]
pub enum SimError {
    #[error("settings rejected")]
    Settings(#[from] ConfigError),

    #[error("invalid size {width}x{height}: both dimensions must be positive")]
    InvalidSize { width: f32, height: f32 },

    #[error("non-finite {what}: {value}")]
    NonFiniteValue { what: &'static str, value: f32 },
}

/// Problems with a settings file or its values
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid setting `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },

    #[error("failed to read settings from {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse settings from {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl ConfigError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            field,
            reason: reason.into(),
        }
    }
}
