//! Error types for the Vetrina content studio.
//!
//! Each domain gets its own error type with source-location tracking; the
//! [`VetrinaError`] umbrella collects them for APIs that cross domains.

mod config;
mod gemini;
mod studio;

pub use config::ConfigError;
pub use gemini::{GeminiError, GeminiErrorKind};
pub use studio::{StudioError, StudioErrorKind};

/// Umbrella error for the Vetrina workspace.
#[derive(Debug, Clone, derive_more::Display, derive_more::From)]
pub enum VetrinaError {
    /// Configuration error
    #[display("{_0}")]
    Config(ConfigError),
    /// Gemini service error
    #[display("{_0}")]
    Gemini(GeminiError),
    /// Studio state error
    #[display("{_0}")]
    Studio(StudioError),
}

impl std::error::Error for VetrinaError {}

/// Result type alias for Vetrina operations.
pub type VetrinaResult<T> = Result<T, VetrinaError>;
