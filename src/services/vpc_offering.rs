use serde::{Deserialize, Serialize};

use crate::api::{ApiClient, ApiError, Options};

use super::entity::{decode, EntityService};

pub const VPC_OFFERING_ENTITY_TYPE: &str = "vpcofferings";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VpcOffering {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub state: String,
}

pub struct VpcOfferingService<C> {
    entity: EntityService<C>,
}

impl<C: ApiClient> VpcOfferingService<C> {
    pub fn new(entity: EntityService<C>) -> Self {
        Self { entity }
    }

    pub async fn get(&self, id: &str) -> Result<VpcOffering, ApiError> {
        decode(self.entity.get(id, Options::new()).await?)
    }

    pub async fn list(&self) -> Result<Vec<VpcOffering>, ApiError> {
        decode(self.entity.list(Options::new()).await?)
    }
}
