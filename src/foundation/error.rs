/// Convenience result type used across scrollphase.
pub type ScrollPhaseResult<T> = Result<T, ScrollPhaseError>;

/// Top-level error taxonomy used by engine APIs.
///
/// Configuration problems surface when a timeline, style, scroll range, or scene is built. Once
/// construction succeeds, per-frame transform computation cannot fail.
#[derive(thiserror::Error, Debug)]
pub enum ScrollPhaseError {
    /// Invalid phase boundaries, degenerate scroll ranges, or non-finite/negative parameters.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A sampling or evaluation request that cannot be honored (e.g. an empty sweep).
    #[error("evaluation error: {0}")]
    Evaluation(String),

    /// Errors when reading, serializing, or deserializing scene data.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ScrollPhaseError {
    /// Build a [`ScrollPhaseError::Configuration`] value.
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Build a [`ScrollPhaseError::Evaluation`] value.
    pub fn evaluation(msg: impl Into<String>) -> Self {
        Self::Evaluation(msg.into())
    }

    /// Build a [`ScrollPhaseError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// True for [`ScrollPhaseError::Configuration`].
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }
}

impl From<serde_json::Error> for ScrollPhaseError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
