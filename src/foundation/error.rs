/// Convenience result type used across reelforge.
pub type ReelResult<T> = Result<T, ReelError>;

/// Top-level error taxonomy used by engine APIs.
///
/// Only [`ReelError::InvalidTemplate`] is produced by [`crate::compose`] for well-typed input;
/// every other anomaly inside a template (unknown component, missing slot value, bad duration)
/// is absorbed with a fallback and reported as a warning instead.
#[derive(thiserror::Error, Debug)]
pub enum ReelError {
    /// Invalid user-provided options or arguments.
    #[error("validation error: {0}")]
    Validation(String),

    /// The template is absent or structurally unusable; nothing can be composed.
    #[error("invalid template: {0}")]
    InvalidTemplate(String),

    /// Errors while evaluating a composed render tree at a frame.
    #[error("evaluation error: {0}")]
    Evaluation(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ReelError {
    /// Build a [`ReelError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ReelError::InvalidTemplate`] value.
    pub fn invalid_template(msg: impl Into<String>) -> Self {
        Self::InvalidTemplate(msg.into())
    }

    /// Build a [`ReelError::Evaluation`] value.
    pub fn evaluation(msg: impl Into<String>) -> Self {
        Self::Evaluation(msg.into())
    }

    /// Build a [`ReelError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// `true` for the template-wide stop condition hosts surface as an error placeholder.
    pub fn is_invalid_template(&self) -> bool {
        matches!(self, Self::InvalidTemplate(_))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
