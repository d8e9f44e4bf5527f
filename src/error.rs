//! Navigator error types

use thiserror::Error;

/// Errors returned by [`Navigator`](crate::Navigator) operations.
#[derive(Debug, Error)]
pub enum NavigatorError {
    /// Target path does not exist when existence was required
    #[error("{path} does not exist")]
    NotFound { path: String },

    /// Create-without-overwrite collision
    #[error("{path} already exists: use overwrite or choose another name")]
    AlreadyExists { path: String },

    /// Attempt to ascend past the filesystem root
    #[error("cannot go up beyond the root directory")]
    RootBoundary,

    /// Backend operation failed
    #[error("i/o failure at {path}: {reason:#}")]
    Io { path: String, reason: anyhow::Error },
}

impl NavigatorError {
    pub(crate) fn io<P: Into<String>>(path: P, reason: anyhow::Error) -> Self {
        NavigatorError::Io {
            path: path.into(),
            reason,
        }
    }

    /// Offending path, when the error carries one.
    pub fn path(&self) -> Option<&str> {
        match self {
            NavigatorError::NotFound { path }
            | NavigatorError::AlreadyExists { path }
            | NavigatorError::Io { path, .. } => Some(path),
            NavigatorError::RootBoundary => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, NavigatorError>;
