use thiserror::Error;

/// Failures outside the game rules: bad configuration or a broken terminal.
///
/// Player input never produces an `AppError`; it is answered with feedback.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {detail}")]
    Config { detail: String },
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl AppError {
    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config {
            detail: detail.into(),
        }
    }

    /// Stable code for log fields and exit diagnostics.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Config { .. } => "CONFIG_ERROR",
            AppError::Io(_) => "IO_ERROR",
            AppError::Serialize(_) => "SERIALIZE_ERROR",
        }
    }
}
