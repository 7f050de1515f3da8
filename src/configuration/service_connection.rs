use std::sync::Arc;

use crate::api::{ApiClient, ApiError, Options};

use super::types::ServiceConnection;
use super::ConfigurationService;

pub const SERVICE_CONNECTION_CONFIGURATION_TYPE: &str = "services/connections";

pub struct ServiceConnectionService<C> {
    configuration: ConfigurationService<C>,
}

impl<C: ApiClient> ServiceConnectionService<C> {
    pub fn new(client: Arc<C>) -> Self {
        Self {
            configuration: ConfigurationService::new(client),
        }
    }

    pub async fn get(&self, id: &str) -> Result<ServiceConnection, ApiError> {
        let response = self
            .configuration
            .get(SERVICE_CONNECTION_CONFIGURATION_TYPE, id)
            .await?;
        Ok(response.data_as()?)
    }

    pub async fn list(&self) -> Result<Vec<ServiceConnection>, ApiError> {
        let response = self
            .configuration
            .list(SERVICE_CONNECTION_CONFIGURATION_TYPE, Options::new())
            .await?;
        Ok(response.data_as()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::FakeClient;

    fn connection(id: &str, code: &str) -> ServiceConnection {
        ServiceConnection {
            id: id.into(),
            name: format!("{code} connection"),
            service_code: code.into(),
        }
    }

    #[tokio::test]
    async fn get_decodes_connection() {
        let client = Arc::new(FakeClient::new());
        client.push_data(&serde_json::to_string(&connection("connection_id", "compute-qc")).unwrap());

        let found = ServiceConnectionService::new(Arc::clone(&client))
            .get("connection_id")
            .await
            .unwrap();

        assert_eq!(found, connection("connection_id", "compute-qc"));
        assert_eq!(client.requests()[0].endpoint, "services/connections/connection_id");
    }

    #[tokio::test]
    async fn list_decodes_connections() {
        let expected = vec![connection("c1", "compute-qc"), connection("c2", "objects")];
        let client = Arc::new(FakeClient::new());
        client.push_data(&serde_json::to_string(&expected).unwrap());

        let found = ServiceConnectionService::new(client).list().await.unwrap();
        assert_eq!(found, expected);
    }

    #[tokio::test]
    async fn get_propagates_errors() {
        let client = Arc::new(FakeClient::new());
        client.push_domain_error(400, "some_get_error");

        let err = ServiceConnectionService::new(client).get("c1").await.unwrap_err();
        assert_eq!(err.as_domain().unwrap().errors()[0].error_code, "some_get_error");
    }
}
