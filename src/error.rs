use thiserror::Error;

/// Unified error type for relkit operations
#[derive(Error, Debug)]
pub enum RelkitError {
    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Version parsing error: {0}")]
    Version(String),

    #[error("Reference error: {0}")]
    Ref(String),

    #[error("Report error: {0}")]
    Report(String),

    #[error("Recipe bundling error: {0}")]
    Recipe(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Archive error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("Kubernetes error: {0}")]
    Kube(#[from] kube::Error),
}

/// Convenience type alias for Results in relkit
pub type Result<T> = std::result::Result<T, RelkitError>;

impl RelkitError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        RelkitError::Config(msg.into())
    }

    /// Create a version error with context
    pub fn version(msg: impl Into<String>) -> Self {
        RelkitError::Version(msg.into())
    }

    /// Create a reference error with context
    pub fn reference(msg: impl Into<String>) -> Self {
        RelkitError::Ref(msg.into())
    }

    /// Create a report error with context
    pub fn report(msg: impl Into<String>) -> Self {
        RelkitError::Report(msg.into())
    }

    /// Create a recipe error with context
    pub fn recipe(msg: impl Into<String>) -> Self {
        RelkitError::Recipe(msg.into())
    }
}
