//! Response envelope shared by every endpoint.
//!
//! A body may carry a synchronous payload (`data`), an asynchronous task
//! acknowledgment (`taskId`/`taskStatus`), side-channel `metadata`, or a list
//! of domain `errors`. Each field is optional. A `data` key that is present
//! is kept verbatim even when it is `null`; an explicit `null` inside an
//! error entry decodes to the empty value.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::value::RawValue;
use serde_json::{Map, Value};

use super::de::{null_as_default, present_raw};
use super::error::{ErrorResponse, TransportError};

pub const OK: u16 = 200;
pub const MULTIPLE_CHOICES: u16 = 300;
pub const BAD_REQUEST: u16 = 400;
pub const NOT_FOUND: u16 = 404;

/// One structured error reported by the API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorEntry {
    #[serde(rename = "errorCode", default, deserialize_with = "null_as_default")]
    pub error_code: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub message: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub context: Map<String, Value>,
}

#[derive(Debug, Clone, Default)]
pub struct Response {
    pub status_code: u16,
    pub task_id: Option<String>,
    pub task_status: Option<String>,
    /// Raw resource representation; decoded by the caller. `Some("null")`
    /// when the body carried `"data": null`.
    pub data: Option<Box<RawValue>>,
    pub metadata: Option<Map<String, Value>>,
    pub errors: Vec<ErrorEntry>,
}

#[derive(Deserialize)]
struct Envelope {
    #[serde(rename = "taskId")]
    task_id: Option<String>,
    #[serde(rename = "taskStatus")]
    task_status: Option<String>,
    #[serde(default, deserialize_with = "present_raw")]
    data: Option<Box<RawValue>>,
    metadata: Option<Map<String, Value>>,
    errors: Option<Vec<ErrorEntry>>,
}

impl Response {
    /// Decode a raw HTTP body received with `status_code`.
    ///
    /// A failing status must come with at least one structured error;
    /// anything else is a protocol violation.
    pub fn parse(status_code: u16, body: &[u8]) -> Result<Self, TransportError> {
        let envelope: Envelope = serde_json::from_slice(body)?;
        let errors = envelope.errors.unwrap_or_default();

        if errors.is_empty() && !is_in_ok_range(status_code) {
            return Err(TransportError::UnexpectedStatus {
                status: status_code,
            });
        }

        Ok(Self {
            status_code,
            task_id: envelope.task_id,
            task_status: envelope.task_status,
            data: envelope.data,
            metadata: envelope.metadata,
            errors,
        })
    }

    /// Decided by the status alone: a 2xx envelope that also lists errors is
    /// still a success.
    pub fn is_error(&self) -> bool {
        !is_in_ok_range(self.status_code)
    }

    /// Task id of an asynchronous acknowledgment, if the call started one.
    pub fn task_id(&self) -> Option<&str> {
        self.task_id.as_deref().filter(|id| !id.is_empty())
    }

    /// Turn a failing envelope into a domain error.
    pub fn into_result(self) -> Result<Self, ErrorResponse> {
        if self.is_error() {
            Err(ErrorResponse::new(self))
        } else {
            Ok(self)
        }
    }

    /// Decode `data` into `T`.
    pub fn data_as<T: DeserializeOwned>(&self) -> Result<T, TransportError> {
        let raw = self
            .data
            .as_ref()
            .ok_or(TransportError::MissingData { what: "data" })?;
        Ok(serde_json::from_str(raw.get())?)
    }
}

fn is_in_ok_range(status_code: u16) -> bool {
    (OK..MULTIPLE_CHOICES).contains(&status_code)
}
