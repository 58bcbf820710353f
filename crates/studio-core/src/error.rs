//! Error Types

use thiserror::Error;

/// Result type alias for studio operations
pub type Result<T> = std::result::Result<T, StudioError>;

/// Studio error types
#[derive(Error, Debug)]
pub enum StudioError {
    /// Prompt is empty or whitespace only
    #[error("Prompt is empty")]
    EmptyPrompt,

    /// Prompt is below the minimum description length
    #[error("Prompt too short: {len} characters (min: {min})")]
    PromptTooShort { len: usize, min: usize },

    /// A simulated run is already in flight
    #[error("Generation already in progress")]
    GenerationInProgress,

    /// Duration value not present in the duration table
    #[error("Unknown duration: {0}s")]
    UnknownDuration(u32),

    /// Package name not present in the catalog
    #[error("Unknown package: {0}")]
    UnknownPackage(String),

    /// Simulated generation failed
    #[error("Generation failed: {0}")]
    GenerationFailed(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl StudioError {
    /// Whether the error came from local input validation
    pub const fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::EmptyPrompt | Self::PromptTooShort { .. } | Self::UnknownDuration(_)
        )
    }

    /// Convert to the message shown in the notification surface
    pub fn user_message(&self) -> String {
        match self {
            Self::EmptyPrompt => "Please enter a video description".into(),
            Self::PromptTooShort { min, .. } => format!(
                "Please provide a more detailed description (at least {min} characters)"
            ),
            Self::GenerationInProgress => "A video is already being generated".into(),
            Self::UnknownDuration(secs) => format!("{secs}s is not an available video duration"),
            Self::GenerationFailed(_) => "Failed to generate video".into(),
            _ => "An unexpected error occurred.".into(),
        }
    }
}
