use serde::{Deserialize, Serialize};

use crate::api::{ApiClient, ApiError, Options};

use super::entity::{decode, EntityService};

pub const COMPUTE_OFFERING_ENTITY_TYPE: &str = "computeofferings";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComputeOffering {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "memoryInMB", default)]
    pub memory_in_mb: u32,
    #[serde(default)]
    pub cpu_count: u32,
    /// Custom offerings take CPU and memory from the instance request.
    #[serde(default)]
    pub custom: bool,
}

pub struct ComputeOfferingService<C> {
    entity: EntityService<C>,
}

impl<C: ApiClient> ComputeOfferingService<C> {
    pub fn new(entity: EntityService<C>) -> Self {
        Self { entity }
    }

    pub async fn get(&self, id: &str) -> Result<ComputeOffering, ApiError> {
        decode(self.entity.get(id, Options::new()).await?)
    }

    pub async fn list(&self) -> Result<Vec<ComputeOffering>, ApiError> {
        decode(self.entity.list(Options::new()).await?)
    }
}
