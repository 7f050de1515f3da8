use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::value::RawValue;

use crate::api::{ApiClient, ApiError, Options, Request, TaskService, TransportError};
use crate::configuration::encode;

/// Attempt budget for tasks started by entity operations: ten minutes at the
/// default one second cadence.
pub const DEFAULT_MAX_TRIES: u32 = 600;

/// Result payload of an entity call: the envelope's `data`, or the task
/// result when the call started a task.
pub type Payload = Option<Box<RawValue>>;

/// CRUD and operations over
/// `services/<service code>/<environment>/<entity type>[/<id>]`.
pub struct EntityService<C> {
    client: Arc<C>,
    tasks: TaskService<C>,
    service_code: String,
    environment_name: String,
    entity_type: &'static str,
    max_tries: u32,
}

impl<C: ApiClient> EntityService<C> {
    pub fn new(
        client: Arc<C>,
        tasks: TaskService<C>,
        service_code: &str,
        environment_name: &str,
        entity_type: &'static str,
    ) -> Self {
        Self {
            client,
            tasks,
            service_code: service_code.to_string(),
            environment_name: environment_name.to_string(),
            entity_type,
            max_tries: DEFAULT_MAX_TRIES,
        }
    }

    pub fn with_max_tries(mut self, max_tries: u32) -> Self {
        self.max_tries = max_tries;
        self
    }

    pub fn entity_type(&self) -> &'static str {
        self.entity_type
    }

    pub async fn get(&self, id: &str, options: Options) -> Result<Payload, ApiError> {
        self.send(Request::get(self.endpoint(Some(id))).with_options(options))
            .await
    }

    pub async fn list(&self, options: Options) -> Result<Payload, ApiError> {
        self.send(Request::get(self.endpoint(None)).with_options(options))
            .await
    }

    pub async fn create(&self, body: Option<Vec<u8>>, options: Options) -> Result<Payload, ApiError> {
        self.send(
            Request::post(self.endpoint(None))
                .with_body(body)
                .with_options(options),
        )
        .await
    }

    pub async fn update(
        &self,
        id: &str,
        body: Option<Vec<u8>>,
        options: Options,
    ) -> Result<Payload, ApiError> {
        self.send(
            Request::put(self.endpoint(Some(id)))
                .with_body(body)
                .with_options(options),
        )
        .await
    }

    pub async fn delete(
        &self,
        id: &str,
        body: Option<Vec<u8>>,
        options: Options,
    ) -> Result<Payload, ApiError> {
        self.send(
            Request::delete(self.endpoint(Some(id)))
                .with_body(body)
                .with_options(options),
        )
        .await
    }

    /// POST an operation (`?operation=<name>`) against one entity.
    pub async fn execute(
        &self,
        id: &str,
        operation: &str,
        body: Option<Vec<u8>>,
        options: Options,
    ) -> Result<Payload, ApiError> {
        self.send(
            Request::post(self.endpoint(Some(id)))
                .with_body(body)
                .with_options(options)
                .with_option("operation", operation),
        )
        .await
    }

    fn endpoint(&self, id: Option<&str>) -> String {
        let base = format!(
            "services/{}/{}/{}",
            self.service_code, self.environment_name, self.entity_type
        );
        match id {
            Some(id) => format!("{base}/{id}"),
            None => base,
        }
    }

    async fn send(&self, request: Request) -> Result<Payload, ApiError> {
        let response = self.client.execute(request).await?.into_result()?;
        match response.task_id() {
            Some(task_id) => self.tasks.poll(task_id, self.max_tries).await,
            None => Ok(response.data),
        }
    }
}

pub(crate) fn decode<T: DeserializeOwned>(payload: Payload) -> Result<T, ApiError> {
    let raw = payload.ok_or(TransportError::MissingData { what: "data" })?;
    Ok(serde_json::from_str(raw.get()).map_err(TransportError::from)?)
}

pub(crate) fn body<B: Serialize>(value: &B) -> Result<Option<Vec<u8>>, ApiError> {
    encode(value).map(Some)
}
