//! Error types for quickfilter
//!
//! Matching itself never fails. These errors come from loading the annotation
//! config and binding a filter to its target tag.

use std::path::PathBuf;

use thiserror::Error;

use crate::registry::TagKind;

/// Main error type for config loading and filter binding
#[derive(Error, Debug)]
pub enum FilterError {
    #[error("Filter target '{0}' is not a known tag")]
    UnknownTarget(String),

    #[error("Filter target '{name}' is a {kind} tag, expected labels or choices")]
    UnsupportedTarget { name: String, kind: TagKind },

    #[error("Invalid minlength '{0}': expected a non-negative integer")]
    InvalidMinLength(String),

    #[error("Invalid hotkey '{0}'")]
    InvalidHotkey(String),

    #[error("Duplicate tag name '{0}'")]
    DuplicateTag(String),

    #[error("Failed to read config '{}': {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

/// Result type alias for quickfilter operations
pub type Result<T> = std::result::Result<T, FilterError>;

impl FilterError {
    /// Dangling bindings disable the filter but leave the labels usable
    pub fn is_binding_error(&self) -> bool {
        matches!(
            self,
            FilterError::UnknownTarget(_) | FilterError::UnsupportedTarget { .. }
        )
    }
}
