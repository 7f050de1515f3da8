use serde::{Deserialize, Serialize};

use crate::api::{ApiClient, ApiError, Options};

use super::entity::{body, decode, EntityService};

pub const PORT_FORWARDING_RULE_ENTITY_TYPE: &str = "portforwardingrules";

/// Ports travel as strings on the wire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortForwardingRule {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub instance_id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub instance_name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub network_id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub private_ip: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub private_ip_id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub private_port_start: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub private_port_end: String,
    #[serde(rename = "ipAddress", default, skip_serializing_if = "String::is_empty")]
    pub public_ip: String,
    #[serde(rename = "ipAddressId", default, skip_serializing_if = "String::is_empty")]
    pub public_ip_id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub public_port_start: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub public_port_end: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub protocol: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub state: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub vpc_id: String,
}

pub struct PortForwardingRuleService<C> {
    entity: EntityService<C>,
}

impl<C: ApiClient> PortForwardingRuleService<C> {
    pub fn new(entity: EntityService<C>) -> Self {
        Self { entity }
    }

    pub async fn get(&self, id: &str) -> Result<PortForwardingRule, ApiError> {
        decode(self.entity.get(id, Options::new()).await?)
    }

    pub async fn list(&self) -> Result<Vec<PortForwardingRule>, ApiError> {
        self.list_with_options(Options::new()).await
    }

    pub async fn list_with_options(
        &self,
        options: Options,
    ) -> Result<Vec<PortForwardingRule>, ApiError> {
        decode(self.entity.list(options).await?)
    }

    pub async fn create(&self, rule: &PortForwardingRule) -> Result<PortForwardingRule, ApiError> {
        decode(self.entity.create(body(rule)?, Options::new()).await?)
    }

    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.entity.delete(id, None, Options::new()).await?;
        Ok(())
    }
}
