//! Error taxonomy of the API layer.
//!
//! - [`TransportError`]: the call never produced a well-formed envelope
//!   (network failure, malformed body, or a failing status without errors).
//! - [`ErrorResponse`]: the server answered with a well-formed envelope
//!   reporting one or more domain errors.
//! - [`PollError`]: a task was observed failing, or never left the
//!   in-progress state within the attempt budget or deadline.

use std::fmt;
use std::time::Duration;

use thiserror::Error;

use super::response::{ErrorEntry, Response, NOT_FOUND};
use super::task::Task;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error(transparent)]
    Domain(#[from] ErrorResponse),
    #[error(transparent)]
    Poll(#[from] PollError),
}

impl ApiError {
    /// True only for a domain error carrying HTTP status 404.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::Domain(err) if err.is_not_found())
    }

    pub fn as_domain(&self) -> Option<&ErrorResponse> {
        match self {
            ApiError::Domain(err) => Some(err),
            _ => None,
        }
    }
}

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request to {url} failed: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("invalid API URL {url}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("malformed response body: {0}")]
    MalformedBody(#[from] serde_json::Error),
    #[error("unexpected: received status {status} but no errors in response body")]
    UnexpectedStatus { status: u16 },
    #[error("response has no {what}")]
    MissingData { what: &'static str },
    #[error("failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),
}

/// A response whose status is outside the success range, carrying the
/// server's structured errors.
#[derive(Debug)]
pub struct ErrorResponse {
    response: Response,
}

impl ErrorResponse {
    pub fn new(response: Response) -> Self {
        Self { response }
    }

    pub fn status_code(&self) -> u16 {
        self.response.status_code
    }

    pub fn errors(&self) -> &[ErrorEntry] {
        &self.response.errors
    }

    pub fn response(&self) -> &Response {
        &self.response
    }

    pub fn is_not_found(&self) -> bool {
        self.response.status_code == NOT_FOUND
    }
}

impl fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = self.status_code();
        if self.errors().is_empty() {
            return write!(f, "[ERROR] Received HTTP status code {status}");
        }
        for (i, e) in self.errors().iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let context = serde_json::to_string(&e.context).map_err(|_| fmt::Error)?;
            write!(
                f,
                "[ERROR] HTTP status: {status}, Error Code: {}, Message: {}, Context: {context}",
                e.error_code, e.message
            )?;
        }
        Ok(())
    }
}

impl std::error::Error for ErrorResponse {}

#[derive(Debug, Error)]
pub enum PollError {
    /// The server moved the task to a terminal status other than success.
    #[error("task {} ended with status {}", .task.id, .task.status)]
    Failed { task: Task },
    /// The task was still in progress after every allowed attempt.
    #[error("gave up on task {task_id} after {attempts} attempts (last status: {})", .last_status.as_deref().unwrap_or("unknown"))]
    TimedOut {
        task_id: String,
        attempts: u32,
        last_status: Option<String>,
    },
    #[error("task {task_id} did not complete within {deadline:?}")]
    DeadlineExceeded { task_id: String, deadline: Duration },
}

impl PollError {
    /// True when the client stopped waiting, as opposed to the server
    /// reporting a failure.
    pub fn is_timeout(&self) -> bool {
        !matches!(self, PollError::Failed { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn entry(code: &str, message: &str, context: serde_json::Value) -> ErrorEntry {
        ErrorEntry {
            error_code: code.to_string(),
            message: message.to_string(),
            context: serde_json::from_value(context).unwrap(),
        }
    }

    #[test]
    fn message_lists_each_error_in_order() {
        let response = Response {
            status_code: 400,
            errors: vec![
                entry("FOO_ERROR", "message1", json!({"field": "name"})),
                entry("BAR_ERROR", "message2", json!({})),
            ],
            ..Response::default()
        };
        let err = ErrorResponse::new(response);
        let lines: Vec<String> = err.to_string().lines().map(str::to_string).collect();

        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[0],
            r#"[ERROR] HTTP status: 400, Error Code: FOO_ERROR, Message: message1, Context: {"field":"name"}"#
        );
        assert_eq!(
            lines[1],
            "[ERROR] HTTP status: 400, Error Code: BAR_ERROR, Message: message2, Context: {}"
        );
    }

    #[test]
    fn not_found_only_for_domain_404() {
        let not_found = ApiError::from(ErrorResponse::new(Response {
            status_code: 404,
            ..Response::default()
        }));
        let bad_request = ApiError::from(ErrorResponse::new(Response {
            status_code: 400,
            ..Response::default()
        }));
        let protocol = ApiError::from(TransportError::UnexpectedStatus { status: 404 });

        assert!(not_found.is_not_found());
        assert!(!bad_request.is_not_found());
        assert!(!protocol.is_not_found());
    }

    #[test]
    fn timeout_is_distinguishable_from_failure() {
        let gave_up = PollError::TimedOut {
            task_id: "t1".into(),
            attempts: 3,
            last_status: Some("PENDING".into()),
        };
        assert!(gave_up.is_timeout());
        assert!(gave_up.to_string().contains("PENDING"));

        let failed = PollError::Failed {
            task: Task {
                id: "t1".into(),
                status: "FAILED".into(),
                created: String::new(),
                result: None,
            },
        };
        assert!(!failed.is_timeout());
    }
}
