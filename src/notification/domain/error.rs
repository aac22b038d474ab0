//! Error types for notice composition.

use thiserror::Error;

/// Error returned when a notice template fails to render.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("failed to render notice template '{template}': {reason}")]
pub struct NoticeRenderError {
    /// Template name.
    pub template: &'static str,
    /// Renderer diagnostic.
    pub reason: String,
}

/// Error returned while parsing a notice language.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unsupported notice language '{0}', expected en or zh")]
pub struct ParseNoticeLanguageError(pub String);
