use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::api::{ApiClient, ApiError, Options};

use super::entity::{body, decode, EntityService};

pub const INSTANCE_ENTITY_TYPE: &str = "instances";

pub const INSTANCE_START_OPERATION: &str = "start";
pub const INSTANCE_STOP_OPERATION: &str = "stop";
pub const INSTANCE_REBOOT_OPERATION: &str = "reboot";
pub const INSTANCE_PURGE_OPERATION: &str = "purge";
pub const INSTANCE_RECOVER_OPERATION: &str = "recover";
pub const INSTANCE_ASSOCIATE_SSH_KEY_OPERATION: &str = "associateSSHKey";
pub const INSTANCE_CHANGE_COMPUTE_OFFERING_OPERATION: &str = "changeComputeOffering";
pub const INSTANCE_RESET_PASSWORD_OPERATION: &str = "resetPassword";
pub const INSTANCE_CREATE_RECOVERY_POINT_OPERATION: &str = "createRecoveryPoint";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Instance {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub state: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub template_id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub template_name: String,
    #[serde(default)]
    pub is_password_enabled: bool,
    #[serde(default)]
    pub is_ssh_key_enabled: bool,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub username: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub password: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub compute_offering_id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub compute_offering_name: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub cpu_count: u32,
    #[serde(rename = "memoryInMB", default, skip_serializing_if = "is_zero")]
    pub memory_in_mb: u32,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub zone_id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub zone_name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub project_id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub network_id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub network_name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub vpc_id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub vpc_name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub mac_address: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub ip_address: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub volume_id_to_attach: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub ssh_key_name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub public_key: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub user_data: String,
}

fn is_zero(value: &u32) -> bool {
    *value == 0
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DestroyOptions {
    pub purge_immediately: bool,
    pub delete_snapshots: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct RecoveryPoint {
    pub name: String,
    pub description: String,
}

pub struct InstanceService<C> {
    entity: EntityService<C>,
}

impl<C: ApiClient> InstanceService<C> {
    pub fn new(entity: EntityService<C>) -> Self {
        Self { entity }
    }

    pub async fn get(&self, id: &str) -> Result<Instance, ApiError> {
        decode(self.entity.get(id, Options::new()).await?)
    }

    pub async fn list(&self) -> Result<Vec<Instance>, ApiError> {
        self.list_with_options(Options::new()).await
    }

    pub async fn list_with_options(&self, options: Options) -> Result<Vec<Instance>, ApiError> {
        decode(self.entity.list(options).await?)
    }

    /// A 404 means the instance is gone; any other error propagates.
    pub async fn exists(&self, id: &str) -> Result<bool, ApiError> {
        match self.get(id).await {
            Ok(_) => Ok(true),
            Err(err) if err.is_not_found() => Ok(false),
            Err(err) => Err(err),
        }
    }

    pub async fn create(&self, instance: &Instance) -> Result<Instance, ApiError> {
        decode(self.entity.create(body(instance)?, Options::new()).await?)
    }

    pub async fn destroy(&self, id: &str, purge: bool) -> Result<(), ApiError> {
        self.destroy_with_options(
            id,
            &DestroyOptions {
                purge_immediately: purge,
                ..DestroyOptions::default()
            },
        )
        .await
    }

    pub async fn destroy_with_options(
        &self,
        id: &str,
        options: &DestroyOptions,
    ) -> Result<(), ApiError> {
        self.entity
            .delete(id, body(options)?, Options::new())
            .await?;
        Ok(())
    }

    pub async fn start(&self, id: &str) -> Result<(), ApiError> {
        self.operation(id, INSTANCE_START_OPERATION).await
    }

    pub async fn stop(&self, id: &str) -> Result<(), ApiError> {
        self.operation(id, INSTANCE_STOP_OPERATION).await
    }

    pub async fn reboot(&self, id: &str) -> Result<(), ApiError> {
        self.operation(id, INSTANCE_REBOOT_OPERATION).await
    }

    pub async fn purge(&self, id: &str) -> Result<(), ApiError> {
        self.operation(id, INSTANCE_PURGE_OPERATION).await
    }

    pub async fn recover(&self, id: &str) -> Result<(), ApiError> {
        self.operation(id, INSTANCE_RECOVER_OPERATION).await
    }

    pub async fn associate_ssh_key(&self, id: &str, ssh_key_name: &str) -> Result<(), ApiError> {
        let payload = json!({ "sshKeyName": ssh_key_name });
        self.entity
            .execute(id, INSTANCE_ASSOCIATE_SSH_KEY_OPERATION, body(&payload)?, Options::new())
            .await?;
        Ok(())
    }

    /// Move `instance.id` to `instance.compute_offering_id`, with
    /// `cpu_count`/`memory_in_mb` for custom offerings.
    pub async fn change_compute_offering(&self, instance: &Instance) -> Result<(), ApiError> {
        let mut payload = json!({ "computeOfferingId": instance.compute_offering_id });
        if instance.cpu_count > 0 {
            payload["cpuCount"] = json!(instance.cpu_count);
        }
        if instance.memory_in_mb > 0 {
            payload["memoryInMB"] = json!(instance.memory_in_mb);
        }
        self.entity
            .execute(
                &instance.id,
                INSTANCE_CHANGE_COMPUTE_OFFERING_OPERATION,
                body(&payload)?,
                Options::new(),
            )
            .await?;
        Ok(())
    }

    /// Returns the new password.
    pub async fn reset_password(&self, id: &str) -> Result<String, ApiError> {
        let payload = self
            .entity
            .execute(id, INSTANCE_RESET_PASSWORD_OPERATION, None, Options::new())
            .await?;
        let instance: Instance = decode(payload)?;
        Ok(instance.password)
    }

    pub async fn create_recovery_point(
        &self,
        id: &str,
        recovery_point: &RecoveryPoint,
    ) -> Result<(), ApiError> {
        let payload = json!({ "recoveryPoint": recovery_point });
        self.entity
            .execute(
                id,
                INSTANCE_CREATE_RECOVERY_POINT_OPERATION,
                body(&payload)?,
                Options::new(),
            )
            .await?;
        Ok(())
    }

    async fn operation(&self, id: &str, operation: &str) -> Result<(), ApiError> {
        self.entity.execute(id, operation, None, Options::new()).await?;
        Ok(())
    }
}
