//! Error taxonomy for rejected gestures and bad configuration.
//!
//! Every variant is local-recoverable: the gesture that produced it is
//! discarded and the board keeps its prior state.

/// Errors produced by board operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// A color outside the palette was requested.
    #[error("invalid color: {0}")]
    InvalidColor(String),
    /// A drop or activation named a kind or tool outside the closed set.
    #[error("unknown element kind: {0:?}")]
    UnknownElementKind(String),
    /// The media-capture provider reported a failure.
    #[error("capture failed: {0}")]
    CaptureFailed(String),
    /// A configuration value could not be parsed.
    #[error("config parse failed: {0}")]
    ConfigParse(String),
}

impl BoardError {
    /// Stable machine-readable code for this error.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidColor(_) => "E_INVALID_COLOR",
            Self::UnknownElementKind(_) => "E_UNKNOWN_ELEMENT_KIND",
            Self::CaptureFailed(_) => "E_CAPTURE_FAILED",
            Self::ConfigParse(_) => "E_CONFIG_PARSE",
        }
    }
}

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;
