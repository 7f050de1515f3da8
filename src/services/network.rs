use serde::{Deserialize, Serialize};

use crate::api::{ApiClient, ApiError, Options};

use super::entity::{decode, EntityService};

pub const NETWORK_ENTITY_TYPE: &str = "networks";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Network {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "zoneid", default)]
    pub zone_id: String,
    #[serde(rename = "zonename", default)]
    pub zone_name: String,
    #[serde(default)]
    pub cidr: String,
    #[serde(rename = "type", default)]
    pub network_type: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub gateway: String,
    #[serde(rename = "networkOfferingId", default)]
    pub network_offering_id: String,
    #[serde(rename = "vpcId", default)]
    pub vpc_id: String,
    #[serde(default)]
    pub domain: String,
    #[serde(rename = "domainid", default)]
    pub domain_id: String,
    #[serde(default)]
    pub project: String,
    #[serde(rename = "projectid", default)]
    pub project_id: String,
    #[serde(rename = "networkACLId", default)]
    pub network_acl_id: String,
}

pub struct NetworkService<C> {
    entity: EntityService<C>,
}

impl<C: ApiClient> NetworkService<C> {
    pub fn new(entity: EntityService<C>) -> Self {
        Self { entity }
    }

    pub async fn get(&self, id: &str) -> Result<Network, ApiError> {
        decode(self.entity.get(id, Options::new()).await?)
    }

    pub async fn list(&self) -> Result<Vec<Network>, ApiError> {
        self.list_with_options(Options::new()).await
    }

    pub async fn list_with_options(&self, options: Options) -> Result<Vec<Network>, ApiError> {
        decode(self.entity.list(options).await?)
    }
}
