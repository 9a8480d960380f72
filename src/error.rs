//! Crate-wide error type.

use thiserror::Error as ThisError;

use crate::model::CaseId;

#[derive(Debug, ThisError)]
pub enum Error {
    /// Generation criteria rejected before any work starts.
    #[error("invalid criteria: {0}")]
    InvalidCriteria(String),
    /// A fixed starting case was requested that is not in the supplied pool.
    #[error("unknown start case: {0}")]
    UnknownStartCase(CaseId),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn invalid_criteria(message: impl Into<String>) -> Self {
        Self::InvalidCriteria(message.into())
    }

    pub fn other(message: impl Into<String>) -> Self {
        Self::Other(message.into())
    }
}
