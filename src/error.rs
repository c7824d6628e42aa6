//! Error types for pagination-html
//!
//! This module defines the error hierarchy for the entire crate.
//! All fallible public APIs return `Result<T, Error>` where Error is defined here.
//!
//! Numeric inputs never produce errors: out-of-range page numbers, counts
//! and page sizes are clamped. Only escaping and configuration loading fail.

use crate::escape::EscapeError;
use std::fmt;
use thiserror::Error;

/// The main error type for pagination-html
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Rendering Errors
    // ============================================================================
    #[error("could not escape {field}: {source}")]
    Rendering {
        field: RenderField,
        #[source]
        source: EscapeError,
    },

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),
}

/// Semantic field whose escaping failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderField {
    /// Text of the previous link
    PreviousText,
    /// Aria label or href of the previous link
    PreviousAttr,
    /// Text of the next link
    NextText,
    /// Aria label or href of the next link
    NextAttr,
    /// Text of a numbered, current or dots item
    ItemText,
    /// Aria label or href of a numbered or current item
    ItemAttr,
    /// Aria label of the nav landmark
    NavAttr,
}

impl fmt::Display for RenderField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::PreviousText => "\"previous\" text",
            Self::PreviousAttr => "\"previous\" aria label or \"previous\" href",
            Self::NextText => "\"next\" text",
            Self::NextAttr => "\"next\" aria label or \"next\" href",
            Self::ItemText => "\"item\" text",
            Self::ItemAttr => "\"item\" aria label or \"item\" href",
            Self::NavAttr => "\"nav\" aria label",
        };
        f.write_str(label)
    }
}

impl Error {
    /// Create a rendering error for a field
    pub fn rendering(field: RenderField, source: EscapeError) -> Self {
        Self::Rendering { field, source }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Field that failed to escape, if this is a rendering error
    pub fn render_field(&self) -> Option<RenderField> {
        match self {
            Self::Rendering { field, .. } => Some(*field),
            _ => None,
        }
    }
}

/// Result type alias for pagination-html
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait mapping escape failures onto a rendering field
pub trait EscapeResultExt<T> {
    /// Tag an escape failure with the field being rendered
    fn for_field(self, field: RenderField) -> Result<T>;
}

impl<T> EscapeResultExt<T> for std::result::Result<T, EscapeError> {
    fn for_field(self, field: RenderField) -> Result<T> {
        self.map_err(|source| Error::rendering(field, source))
    }
}
