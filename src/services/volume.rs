use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::api::{ApiClient, ApiError, Options};

use super::entity::{body, decode, EntityService};

pub const VOLUME_ENTITY_TYPE: &str = "volumes";

pub const VOLUME_ATTACH_OPERATION: &str = "attachToInstance";
pub const VOLUME_DETACH_OPERATION: &str = "detachFromInstance";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Volume {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(rename = "type", default, skip_serializing_if = "String::is_empty")]
    pub volume_type: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub creation_date: String,
    #[serde(rename = "sizeInGb", default, skip_serializing_if = "Option::is_none")]
    pub size_in_gb: Option<u32>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub disk_offering_id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub template_id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub zone_name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub state: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub instance_name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub instance_id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub instance_state: String,
}

pub struct VolumeService<C> {
    entity: EntityService<C>,
}

impl<C: ApiClient> VolumeService<C> {
    pub fn new(entity: EntityService<C>) -> Self {
        Self { entity }
    }

    pub async fn get(&self, id: &str) -> Result<Volume, ApiError> {
        decode(self.entity.get(id, Options::new()).await?)
    }

    pub async fn list(&self) -> Result<Vec<Volume>, ApiError> {
        decode(self.entity.list(Options::new()).await?)
    }

    pub async fn create(&self, volume: &Volume) -> Result<Volume, ApiError> {
        decode(self.entity.create(body(volume)?, Options::new()).await?)
    }

    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.entity.delete(id, None, Options::new()).await?;
        Ok(())
    }

    /// Attach `volume.id` to `volume.instance_id`.
    pub async fn attach_to_instance(&self, volume: &Volume) -> Result<(), ApiError> {
        let payload = json!({ "instanceId": volume.instance_id });
        self.entity
            .execute(&volume.id, VOLUME_ATTACH_OPERATION, body(&payload)?, Options::new())
            .await?;
        Ok(())
    }

    pub async fn detach_from_instance(&self, volume: &Volume) -> Result<(), ApiError> {
        self.entity
            .execute(&volume.id, VOLUME_DETACH_OPERATION, None, Options::new())
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use super::*;
    use crate::api::{Method, TaskService};
    use crate::test_support::FakeClient;

    fn service(client: &Arc<FakeClient>) -> VolumeService<FakeClient> {
        let tasks = TaskService::new(Arc::clone(client)).with_poll_interval(Duration::from_millis(1));
        VolumeService::new(EntityService::new(
            Arc::clone(client),
            tasks,
            "compute-qc",
            "dev",
            VOLUME_ENTITY_TYPE,
        ))
    }

    #[tokio::test]
    async fn get_decodes_volume() {
        let client = Arc::new(FakeClient::new());
        client.push_data(
            r#"{"id":"vol-1","name":"data","type":"DATA","creationDate":"2015-07-07",
                "sizeInGb":50,"diskOfferingId":"do-1","zoneName":"QC-1","state":"Ready",
                "instanceName":"web","instanceId":"i-1","instanceState":"Running"}"#,
        );

        let volume = service(&client).get("vol-1").await.unwrap();

        assert_eq!(volume.volume_type, "DATA");
        assert_eq!(volume.size_in_gb, Some(50));
        assert_eq!(volume.instance_id, "i-1");
    }

    #[tokio::test]
    async fn attach_waits_for_task() {
        let client = Arc::new(FakeClient::new());
        client.push_task("t-attach");
        client.push_task_status("t-attach", "PENDING", "null");
        client.push_task_status("t-attach", "SUCCESS", r#"{"id":"vol-1"}"#);

        let volume = Volume {
            id: "vol-1".into(),
            instance_id: "i-1".into(),
            ..Volume::default()
        };
        service(&client).attach_to_instance(&volume).await.unwrap();

        let requests = client.requests();
        assert_eq!(requests.len(), 3);
        assert_eq!(requests[0].options["operation"], VOLUME_ATTACH_OPERATION);
        let sent: serde_json::Value =
            serde_json::from_slice(requests[0].body.as_deref().unwrap()).unwrap();
        assert_eq!(sent["instanceId"], "i-1");
    }

    #[tokio::test]
    async fn detach_uses_operation() {
        let client = Arc::new(FakeClient::new());
        client.push_data("{}");

        let volume = Volume {
            id: "vol-1".into(),
            ..Volume::default()
        };
        service(&client).detach_from_instance(&volume).await.unwrap();

        assert_eq!(client.requests()[0].options["operation"], VOLUME_DETACH_OPERATION);
    }

    #[tokio::test]
    async fn delete_propagates_errors() {
        let client = Arc::new(FakeClient::new());
        client.push_domain_error(400, "VOLUME_ATTACHED");

        let err = service(&client).delete("vol-1").await.unwrap_err();
        assert_eq!(err.as_domain().unwrap().errors()[0].error_code, "VOLUME_ATTACHED");
        assert_eq!(client.requests()[0].method, Method::Delete);
    }
}
