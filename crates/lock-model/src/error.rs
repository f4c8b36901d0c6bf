//! Error types for lock-model

/// Result type for lock-model operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in lock-model operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// String form of an extension id did not match `<module file>%<name>`.
    #[error("invalid extension id '{value}': expected '<module file>%<name>'")]
    InvalidExtensionId { value: String },
}
