//! Transport, response envelope and task polling for the cloud.ca API.

pub mod client;
pub mod de;
pub mod error;
pub mod request;
pub mod response;
pub mod task;

pub use client::{ApiClient, CcaClient, CcaClientBuilder, DEFAULT_API_URL};
pub use error::{ApiError, ErrorResponse, PollError, TransportError};
pub use request::{Method, Options, Request};
pub use response::{ErrorEntry, Response, NOT_FOUND};
pub use task::{Task, TaskService, TaskState};
