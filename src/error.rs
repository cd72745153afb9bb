use thiserror::Error;

/// Failure kinds surfaced by the installer core.
///
/// Every component fails fast with the most specific kind; the orchestrator
/// passes errors through unchanged so the caller can report the original kind.
#[derive(Debug, Error)]
pub enum InstallerError {
    /// Invalid or incomplete configuration, detected before any network or
    /// filesystem mutation.
    #[error("{0}")]
    Config(String),

    /// Catalog fetch or asset download transport/status failure.
    #[error("network error: {0}")]
    Network(String),

    /// The release endpoint returned a body that is not a release list.
    #[error("malformed release list: {0}")]
    Parse(#[from] serde_json::Error),

    /// No release/asset combination satisfies the version and variant filters.
    #[error("no matching asset found")]
    NotFound,

    /// Uninstall target missing, or an extraction/permission-change failure.
    #[error("filesystem error: {0}")]
    Filesystem(#[from] std::io::Error),
}

impl From<reqwest::Error> for InstallerError {
    fn from(err: reqwest::Error) -> Self {
        InstallerError::Network(err.to_string())
    }
}
