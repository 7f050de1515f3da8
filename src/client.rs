//! Entry point bundling the transport with every service.

use std::sync::Arc;

use crate::api::{ApiClient, ApiError, CcaClient, TaskService};
use crate::configuration::{EnvironmentService, OrganizationService, ServiceConnectionService, UserService};
use crate::services::Resources;

/// cloud.ca client: task polling, configuration services, and
/// per-environment [`Resources`].
pub struct Client<C = CcaClient> {
    api: Arc<C>,
    pub tasks: TaskService<C>,
    pub environments: EnvironmentService<C>,
    pub service_connections: ServiceConnectionService<C>,
    pub organizations: OrganizationService<C>,
    pub users: UserService<C>,
}

impl Client<CcaClient> {
    /// Client against the default API URL.
    pub fn new(api_key: &str) -> Result<Self, ApiError> {
        Ok(Self::with_api(CcaClient::builder(api_key).build()?))
    }
}

impl<C: ApiClient> Client<C> {
    pub fn with_api(api: C) -> Self {
        let api = Arc::new(api);
        Self {
            tasks: TaskService::new(Arc::clone(&api)),
            environments: EnvironmentService::new(Arc::clone(&api)),
            service_connections: ServiceConnectionService::new(Arc::clone(&api)),
            organizations: OrganizationService::new(Arc::clone(&api)),
            users: UserService::new(Arc::clone(&api)),
            api,
        }
    }

    /// Replace the task service, e.g. to poll at a different cadence.
    pub fn with_tasks(mut self, tasks: TaskService<C>) -> Self {
        self.tasks = tasks;
        self
    }

    pub fn api(&self) -> &C {
        &self.api
    }

    /// Services scoped to `environment_name` of the `service_code` connection.
    pub fn resources(&self, service_code: &str, environment_name: &str) -> Resources<C> {
        Resources::new(
            Arc::clone(&self.api),
            self.tasks.clone(),
            service_code,
            environment_name,
        )
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::api::DEFAULT_API_URL;
    use crate::test_support::FakeClient;

    #[test]
    fn new_targets_default_url() {
        let client = Client::new("key").unwrap();
        assert_eq!(client.api().api_url(), DEFAULT_API_URL);
        assert_eq!(client.api().api_key(), "key");
    }

    #[tokio::test]
    async fn resources_share_transport_and_tasks() {
        let client = Client::with_api(FakeClient::new());
        let tasks = TaskService::new(Arc::clone(&client.api)).with_poll_interval(Duration::from_millis(1));
        let client = client.with_tasks(tasks);
        client.api().push_task("t-1");
        client.api().push_task_status("t-1", "PENDING", "null");
        client.api().push_task_status("t-1", "SUCCESS", "{}");

        client
            .resources("compute-qc", "dev")
            .instances
            .start("i-1")
            .await
            .unwrap();

        let endpoints: Vec<String> = client.api().requests().into_iter().map(|r| r.endpoint).collect();
        assert_eq!(
            endpoints,
            ["services/compute-qc/dev/instances/i-1", "tasks/t-1", "tasks/t-1"]
        );
    }

    #[tokio::test]
    async fn configuration_services_use_same_transport() {
        let client = Client::with_api(FakeClient::new());
        client.api().push_data(r#"[{"id":"c-1","name":"compute","serviceCode":"compute-qc"}]"#);

        let connections = client.service_connections.list().await.unwrap();
        assert_eq!(connections[0].service_code, "compute-qc");
        assert_eq!(client.api().requests()[0].endpoint, "services/connections");
    }
}
