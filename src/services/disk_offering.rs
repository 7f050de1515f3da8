use serde::{Deserialize, Serialize};

use crate::api::{ApiClient, ApiError, Options};

use super::entity::{decode, EntityService};

pub const DISK_OFFERING_ENTITY_TYPE: &str = "diskofferings";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiskOffering {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub gb_size: u32,
}

pub struct DiskOfferingService<C> {
    entity: EntityService<C>,
}

impl<C: ApiClient> DiskOfferingService<C> {
    pub fn new(entity: EntityService<C>) -> Self {
        Self { entity }
    }

    pub async fn get(&self, id: &str) -> Result<DiskOffering, ApiError> {
        decode(self.entity.get(id, Options::new()).await?)
    }

    pub async fn list(&self) -> Result<Vec<DiskOffering>, ApiError> {
        decode(self.entity.list(Options::new()).await?)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::api::TaskService;
    use crate::test_support::FakeClient;

    fn service(client: &Arc<FakeClient>) -> DiskOfferingService<FakeClient> {
        DiskOfferingService::new(EntityService::new(
            Arc::clone(client),
            TaskService::new(Arc::clone(client)),
            "compute-qc",
            "dev",
            DISK_OFFERING_ENTITY_TYPE,
        ))
    }

    #[tokio::test]
    async fn get_disk_offering() {
        let client = Arc::new(FakeClient::new());
        client.push_data(r#"{"id":"do-1","name":"20GB","gbSize":20}"#);

        let offering = service(&client).get("do-1").await.unwrap();
        assert_eq!(
            offering,
            DiskOffering {
                id: "do-1".into(),
                name: "20GB".into(),
                gb_size: 20,
            }
        );
        assert_eq!(
            client.requests()[0].endpoint,
            "services/compute-qc/dev/diskofferings/do-1"
        );
    }

    #[tokio::test]
    async fn list_propagates_errors() {
        let client = Arc::new(FakeClient::new());
        client.push_domain_error(500, "SERVER_ERROR");

        assert!(service(&client).list().await.is_err());
    }
}
