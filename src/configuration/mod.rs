//! Organization-level configuration: environments, service connections,
//! organizations and users.

mod environment;
mod organization;
mod service_connection;
mod types;
mod user;

use std::sync::Arc;

use serde::Serialize;

use crate::api::{ApiClient, ApiError, Options, Request, Response, TransportError};

pub use environment::{EnvironmentService, ENVIRONMENT_CONFIGURATION_TYPE};
pub use organization::{OrganizationService, ORGANIZATION_CONFIGURATION_TYPE};
pub use service_connection::{ServiceConnectionService, SERVICE_CONNECTION_CONFIGURATION_TYPE};
pub use types::{Environment, Organization, Role, ServiceConnection, User};
pub use user::{UserService, USER_CONFIGURATION_TYPE};

/// CRUD over `<configuration type>[/<id>]` endpoints.
pub struct ConfigurationService<C> {
    client: Arc<C>,
}

impl<C> Clone for ConfigurationService<C> {
    fn clone(&self) -> Self {
        Self {
            client: Arc::clone(&self.client),
        }
    }
}

impl<C: ApiClient> ConfigurationService<C> {
    pub fn new(client: Arc<C>) -> Self {
        Self { client }
    }

    pub async fn get(&self, kind: &str, id: &str) -> Result<Response, ApiError> {
        self.send(Request::get(endpoint(kind, Some(id)))).await
    }

    pub async fn list(&self, kind: &str, options: Options) -> Result<Response, ApiError> {
        self.send(Request::get(endpoint(kind, None)).with_options(options))
            .await
    }

    pub async fn create<B: Serialize>(&self, kind: &str, body: &B) -> Result<Response, ApiError> {
        self.send(Request::post(endpoint(kind, None)).with_body(Some(encode(body)?)))
            .await
    }

    pub async fn update<B: Serialize>(
        &self,
        kind: &str,
        id: &str,
        body: &B,
    ) -> Result<Response, ApiError> {
        self.send(Request::put(endpoint(kind, Some(id))).with_body(Some(encode(body)?)))
            .await
    }

    pub async fn delete(&self, kind: &str, id: &str) -> Result<Response, ApiError> {
        self.send(Request::delete(endpoint(kind, Some(id)))).await
    }

    async fn send(&self, request: Request) -> Result<Response, ApiError> {
        Ok(self.client.execute(request).await?.into_result()?)
    }
}

fn endpoint(kind: &str, id: Option<&str>) -> String {
    match id {
        Some(id) => format!("{kind}/{id}"),
        None => kind.to_string(),
    }
}

pub(crate) fn encode<B: Serialize>(body: &B) -> Result<Vec<u8>, ApiError> {
    Ok(serde_json::to_vec(body).map_err(TransportError::Encode)?)
}
