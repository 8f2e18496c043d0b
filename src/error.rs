// src/error.rs
use thiserror::Error;

/// Everything that can stop a catalog load or a CLI run.
///
/// Malformed sheet content is deliberately absent: the parser and the
/// normalizers fill defaults instead of failing.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The export answered with a non-success HTTP status.
    #[error("Failed to load CSV")]
    FailedToLoad,

    /// The page has no export URL configured.
    #[error("No sheet URL set for the {0} page")]
    MissingUrl(&'static str),

    /// Connection, TLS or timeout failure before a status was received.
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Bad command-line arguments.
    #[error("{0}")]
    Usage(String),
}

impl CatalogError {
    pub fn usage(msg: impl Into<String>) -> Self {
        CatalogError::Usage(msg.into())
    }

    /// The sheet could not be fetched at all, as opposed to a local
    /// file or argument problem.
    pub fn is_load_failure(&self) -> bool {
        matches!(
            self,
            CatalogError::FailedToLoad | CatalogError::MissingUrl(_) | CatalogError::Transport(_)
        )
    }

    /// Text shown in place of the status line when a load fails.
    pub fn status_text(&self) -> String {
        format!("Error: {self}")
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
