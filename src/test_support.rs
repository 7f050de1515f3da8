//! Scripted [`ApiClient`] double for unit tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use crate::api::{ApiClient, ApiError, ErrorEntry, Request, Response};

/// Replays canned outcomes in order and records every request it receives.
#[derive(Default)]
pub struct FakeClient {
    outcomes: Mutex<VecDeque<Result<Response, ApiError>>>,
    requests: Mutex<Vec<Request>>,
}

impl FakeClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_response(&self, response: Response) {
        self.outcomes.lock().unwrap().push_back(Ok(response));
    }

    pub fn push_error(&self, error: ApiError) {
        self.outcomes.lock().unwrap().push_back(Err(error));
    }

    /// Successful envelope whose `data` is the given JSON.
    pub fn push_data(&self, data: &str) {
        let body = format!(r#"{{"data":{data}}}"#);
        self.push_response(Response::parse(200, body.as_bytes()).unwrap());
    }

    /// Envelope acknowledging an asynchronous task.
    pub fn push_task(&self, task_id: &str) {
        let body = format!(r#"{{"taskId":"{task_id}","taskStatus":"PENDING"}}"#);
        self.push_response(Response::parse(200, body.as_bytes()).unwrap());
    }

    /// Task-status envelope as returned by `GET tasks/<id>`.
    pub fn push_task_status(&self, task_id: &str, status: &str, result: &str) {
        let body = format!(
            r#"{{"data":{{"id":"{task_id}","status":"{status}","created":"2015-07-07","result":{result}}}}}"#
        );
        self.push_response(Response::parse(200, body.as_bytes()).unwrap());
    }

    pub fn push_domain_error(&self, status: u16, code: &str) {
        self.push_response(Response {
            status_code: status,
            errors: vec![ErrorEntry {
                error_code: code.to_string(),
                message: format!("{code} raised by fake"),
                context: Default::default(),
            }],
            ..Response::default()
        });
    }

    pub fn requests(&self) -> Vec<Request> {
        self.requests.lock().unwrap().clone()
    }
}

impl ApiClient for FakeClient {
    async fn execute(&self, request: Request) -> Result<Response, ApiError> {
        let endpoint = request.endpoint.clone();
        self.requests.lock().unwrap().push(request);
        let next = self.outcomes.lock().unwrap().pop_front();
        next.unwrap_or_else(|| panic!("no canned response left for {endpoint}"))
    }

    fn api_url(&self) -> &str {
        "https://fake.test/v1"
    }

    fn api_key(&self) -> &str {
        "fake-key"
    }
}
