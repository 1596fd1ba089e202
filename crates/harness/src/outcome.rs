use std::fmt;
use std::time::Duration;

use axum::http::StatusCode;
use serde::Serialize;
use thiserror::Error;

use crate::orchestration::ResourceState;

/// Terminal result of a single smoke test
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "detail", rename_all = "lowercase")]
pub enum TestOutcome {
    Passed,
    Failed(String),
    Skipped(String),
}

impl TestOutcome {
    /// Compare an observed status against the expected one
    pub fn expect_status(expected: StatusCode, actual: StatusCode) -> Self {
        if actual == expected {
            TestOutcome::Passed
        } else {
            TestOutcome::Failed(format!("expected status {}, got {}", expected, actual))
        }
    }

    pub fn is_passed(&self) -> bool {
        matches!(self, TestOutcome::Passed)
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, TestOutcome::Skipped(_))
    }
}

impl fmt::Display for TestOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TestOutcome::Passed => write!(f, "passed"),
            TestOutcome::Failed(message) => write!(f, "failed: {}", message),
            TestOutcome::Skipped(reason) => write!(f, "skipped: {}", reason),
        }
    }
}

/// Conditions that stop a smoke test from reaching a verdict
#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("application failed to start: {0}")]
    Setup(String),

    #[error("request to {path} failed: {message}")]
    Request { path: String, message: String },

    #[error("resource '{resource}' did not reach state {state} within {timeout:?}")]
    Timeout {
        resource: String,
        state: ResourceState,
        timeout: Duration,
    },

    #[error("orchestration host error: {0}")]
    Host(String),
}

impl HarnessError {
    pub fn request(path: &str, message: impl fmt::Display) -> Self {
        HarnessError::Request {
            path: path.to_string(),
            message: message.to_string(),
        }
    }

    /// Whether the error is reported as a failed test rather than an errored one.
    ///
    /// Only setup and host errors mean the test never got to run.
    pub fn is_failure(&self) -> bool {
        matches!(self, HarnessError::Request { .. } | HarnessError::Timeout { .. })
    }
}
