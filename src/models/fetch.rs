//! Observable state of a one-shot remote fetch.
//!
//! Every fetch-backed view goes `Loading -> Ready` or `Loading -> Failed`,
//! both terminal for that view instance. Re-entering a view creates a new
//! state starting back at `Loading`.

use crate::error::AppError;
use crate::models::MessagesConfig;

/// Failure classification for user-facing reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The requested record does not exist (HTTP 404)
    NotFound,
    /// No response was received at all
    Network,
    /// The service answered, but not usefully (bad status, bad payload)
    Service,
}

/// A terminal fetch failure with its user-facing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchFailure {
    pub kind: FailureKind,
    pub message: String,
}

impl FetchFailure {
    /// Classify an error and resolve its user-facing message.
    pub fn from_error(error: &AppError, messages: &MessagesConfig) -> Self {
        if error.is_not_found() {
            Self {
                kind: FailureKind::NotFound,
                message: messages.not_found.clone(),
            }
        } else if error.is_network() {
            Self {
                kind: FailureKind::Network,
                message: messages.network_error.clone(),
            }
        } else {
            Self {
                kind: FailureKind::Service,
                message: messages.fetch_failed.clone(),
            }
        }
    }
}

/// State of one fetch-backed view instance.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    Loading,
    Ready(T),
    Failed(FetchFailure),
}

impl<T> FetchState<T> {
    /// Resolve a loading state from a fetch result.
    pub fn from_result(
        result: crate::error::Result<T>,
        messages: &MessagesConfig,
    ) -> Self {
        match result {
            Ok(value) => Self::Ready(value),
            Err(error) => Self::Failed(FetchFailure::from_error(&error, messages)),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }

    /// The failure, if the fetch ended in one.
    pub fn failure(&self) -> Option<&FetchFailure> {
        match self {
            Self::Failed(failure) => Some(failure),
            _ => None,
        }
    }
}
