use serde::{Deserialize, Serialize};

use crate::api::{ApiClient, ApiError, Options};

use super::entity::{decode, EntityService};

pub const ZONE_ENTITY_TYPE: &str = "zones";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    pub id: String,
    #[serde(default)]
    pub name: String,
}

pub struct ZoneService<C> {
    entity: EntityService<C>,
}

impl<C: ApiClient> ZoneService<C> {
    pub fn new(entity: EntityService<C>) -> Self {
        Self { entity }
    }

    pub async fn get(&self, id: &str) -> Result<Zone, ApiError> {
        decode(self.entity.get(id, Options::new()).await?)
    }

    pub async fn list(&self) -> Result<Vec<Zone>, ApiError> {
        decode(self.entity.list(Options::new()).await?)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::api::TaskService;
    use crate::test_support::FakeClient;

    fn service(client: &Arc<FakeClient>) -> ZoneService<FakeClient> {
        ZoneService::new(EntityService::new(
            Arc::clone(client),
            TaskService::new(Arc::clone(client)),
            "compute-qc",
            "dev",
            ZONE_ENTITY_TYPE,
        ))
    }

    #[tokio::test]
    async fn list_zones() {
        let client = Arc::new(FakeClient::new());
        client.push_data(r#"[{"id":"zoneid1","name":"zone1"},{"id":"zoneid2","name":"zone2"}]"#);

        let zones = service(&client).list().await.unwrap();
        assert_eq!(
            zones,
            vec![
                Zone {
                    id: "zoneid1".into(),
                    name: "zone1".into(),
                },
                Zone {
                    id: "zoneid2".into(),
                    name: "zone2".into(),
                },
            ]
        );
    }

    #[tokio::test]
    async fn get_propagates_errors() {
        let client = Arc::new(FakeClient::new());
        client.push_domain_error(404, "NOT_FOUND");

        let err = service(&client).get("zoneid").await.unwrap_err();
        assert!(err.is_not_found());
    }
}
