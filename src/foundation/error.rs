/// Convenience result type used across the crate.
pub type IconResult<T> = Result<T, IconError>;

/// Top-level error taxonomy.
///
/// Raster operations never fail; errors only come from structurally invalid buffers handed to the
/// encoder, invalid render settings, or IO performed by sinks.
#[derive(thiserror::Error, Debug)]
pub enum IconError {
    /// Invalid caller-provided data (dimensions, buffer lengths, settings).
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while producing the encoded image stream.
    #[error("encode error: {0}")]
    Encode(String),

    /// Errors when serializing or deserializing settings.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl IconError {
    /// Build an [`IconError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build an [`IconError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// Build an [`IconError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
