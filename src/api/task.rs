//! Asynchronous task polling.
//!
//! Mutating calls may answer with a task id instead of a payload. The task is
//! observed through `GET tasks/<id>` until it leaves the in-progress state.

use std::sync::Arc;
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::value::RawValue;
use tokio::time::{sleep, timeout};
use tracing::debug;

use super::client::ApiClient;
use super::de::null_as_default;
use super::error::{ApiError, PollError, TransportError};
use super::request::Request;

pub const PENDING: &str = "PENDING";
pub const SUCCESS: &str = "SUCCESS";
pub const FAILED: &str = "FAILED";

pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub created: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<Box<RawValue>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskState {
    Pending,
    Succeeded,
    Failed,
}

impl Task {
    /// Only `PENDING` keeps the task open; any status other than `SUCCESS`
    /// is a failure.
    pub fn state(&self) -> TaskState {
        match self.status.as_str() {
            PENDING => TaskState::Pending,
            SUCCESS => TaskState::Succeeded,
            _ => TaskState::Failed,
        }
    }

    pub fn is_completed(&self) -> bool {
        self.state() == TaskState::Succeeded
    }

    pub fn is_failed(&self) -> bool {
        self.state() == TaskState::Failed
    }

    pub fn result_as<T: DeserializeOwned>(&self) -> Result<T, TransportError> {
        let raw = self
            .result
            .as_ref()
            .ok_or(TransportError::MissingData { what: "task result" })?;
        Ok(serde_json::from_str(raw.get())?)
    }
}

pub struct TaskService<C> {
    client: Arc<C>,
    poll_interval: Duration,
}

impl<C> Clone for TaskService<C> {
    fn clone(&self) -> Self {
        Self {
            client: Arc::clone(&self.client),
            poll_interval: self.poll_interval,
        }
    }
}

impl<C: ApiClient> TaskService<C> {
    pub fn new(client: Arc<C>) -> Self {
        Self {
            client,
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }

    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    pub fn poll_interval(&self) -> Duration {
        self.poll_interval
    }

    pub async fn get(&self, task_id: &str) -> Result<Task, ApiError> {
        let response = self
            .client
            .execute(Request::get(format!("tasks/{task_id}")))
            .await?
            .into_result()?;
        Ok(response.data_as()?)
    }

    /// Poll until the task leaves `PENDING`, for at most `max_tries`
    /// requests (at least one).
    ///
    /// Returns the task result on success. A 404 on the task endpoint counts
    /// as an in-progress observation; any other error ends polling at once.
    pub async fn poll(
        &self,
        task_id: &str,
        max_tries: u32,
    ) -> Result<Option<Box<RawValue>>, ApiError> {
        let attempts = max_tries.max(1);
        let mut last_status = None;

        for attempt in 1..=attempts {
            match self.get(task_id).await {
                Ok(task) => match task.state() {
                    TaskState::Succeeded => {
                        debug!(task_id, attempt, "task succeeded");
                        return Ok(task.result);
                    }
                    TaskState::Failed => {
                        debug!(task_id, attempt, status = %task.status, "task failed");
                        return Err(PollError::Failed { task }.into());
                    }
                    TaskState::Pending => {
                        debug!(task_id, attempt, attempts, "task pending");
                        last_status = Some(task.status);
                    }
                },
                Err(err) if err.is_not_found() => {
                    debug!(task_id, attempt, "task not visible yet");
                }
                Err(err) => return Err(err),
            }

            if attempt < attempts {
                sleep(self.poll_interval).await;
            }
        }

        Err(PollError::TimedOut {
            task_id: task_id.to_string(),
            attempts,
            last_status,
        }
        .into())
    }

    /// [`poll`](Self::poll) bounded by a wall-clock deadline.
    pub async fn poll_with_deadline(
        &self,
        task_id: &str,
        max_tries: u32,
        deadline: Duration,
    ) -> Result<Option<Box<RawValue>>, ApiError> {
        match timeout(deadline, self.poll(task_id, max_tries)).await {
            Ok(outcome) => outcome,
            Err(_) => Err(PollError::DeadlineExceeded {
                task_id: task_id.to_string(),
                deadline,
            }
            .into()),
        }
    }
}
