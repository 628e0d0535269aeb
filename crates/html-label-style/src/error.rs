//! Error types for style composition.

/// Result type alias for style operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while composing a label's style.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A composer was requested without the label whose properties it reads.
    #[error("cannot compose a style without a label")]
    MissingLabel,
}
