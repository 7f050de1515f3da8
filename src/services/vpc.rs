use serde::{Deserialize, Serialize};

use crate::api::{ApiClient, ApiError, Options};

use super::entity::{body, decode, EntityService};

pub const VPC_ENTITY_TYPE: &str = "vpcs";

pub const VPC_RESTART_ROUTER_OPERATION: &str = "restartRouter";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vpc {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub state: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub cidr: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub zone_id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub zone_name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub network_domain: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub source_nat_ip: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub vpn_status: String,
    #[serde(rename = "type", default, skip_serializing_if = "String::is_empty")]
    pub vpc_type: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub vpc_offering_id: String,
}

pub struct VpcService<C> {
    entity: EntityService<C>,
}

impl<C: ApiClient> VpcService<C> {
    pub fn new(entity: EntityService<C>) -> Self {
        Self { entity }
    }

    pub async fn get(&self, id: &str) -> Result<Vpc, ApiError> {
        decode(self.entity.get(id, Options::new()).await?)
    }

    pub async fn list(&self) -> Result<Vec<Vpc>, ApiError> {
        decode(self.entity.list(Options::new()).await?)
    }

    pub async fn create(&self, vpc: &Vpc) -> Result<Vpc, ApiError> {
        decode(self.entity.create(body(vpc)?, Options::new()).await?)
    }

    pub async fn restart_router(&self, id: &str) -> Result<(), ApiError> {
        self.entity
            .execute(id, VPC_RESTART_ROUTER_OPERATION, None, Options::new())
            .await?;
        Ok(())
    }
}
