//! UI-facing state for a single use-case execution.

use serde::Serialize;

use crate::error::{ErrorKind, SdkError, SdkResult};

/// Failure as seen by a state holder: what went wrong, in displayable form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Failure {
    pub kind: ErrorKind,
    pub message: String,
}

impl From<&SdkError> for Failure {
    fn from(error: &SdkError) -> Self {
        Self {
            kind: error.kind(),
            message: error.to_string(),
        }
    }
}

/// Lifecycle of one operation as rendered by a UI state holder.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", content = "value", rename_all = "snake_case")]
pub enum OperationState<T> {
    Idle,
    Loading,
    Success(T),
    Error(Failure),
}

impl<T> Default for OperationState<T> {
    fn default() -> Self {
        OperationState::Idle
    }
}

impl<T> OperationState<T> {
    pub fn from_result(result: SdkResult<T>) -> Self {
        match result {
            Ok(value) => OperationState::Success(value),
            Err(error) => OperationState::Error(Failure::from(&error)),
        }
    }

    /// Moves to `Loading`; a state holder calls this before starting the call.
    pub fn start(&mut self) {
        *self = OperationState::Loading;
    }

    pub fn finish(&mut self, result: SdkResult<T>) {
        *self = Self::from_result(result);
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, OperationState::Success(_) | OperationState::Error(_))
    }

    pub fn success(&self) -> Option<&T> {
        match self {
            OperationState::Success(value) => Some(value),
            OperationState::Idle | OperationState::Loading | OperationState::Error(_) => None,
        }
    }
}
