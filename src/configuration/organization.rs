use std::sync::Arc;

use crate::api::{ApiClient, ApiError, Options};

use super::types::Organization;
use super::ConfigurationService;

pub const ORGANIZATION_CONFIGURATION_TYPE: &str = "organizations";

pub struct OrganizationService<C> {
    configuration: ConfigurationService<C>,
}

impl<C: ApiClient> OrganizationService<C> {
    pub fn new(client: Arc<C>) -> Self {
        Self {
            configuration: ConfigurationService::new(client),
        }
    }

    pub async fn get(&self, id: &str) -> Result<Organization, ApiError> {
        let response = self
            .configuration
            .get(ORGANIZATION_CONFIGURATION_TYPE, id)
            .await?;
        Ok(response.data_as()?)
    }

    pub async fn list(&self) -> Result<Vec<Organization>, ApiError> {
        let response = self
            .configuration
            .list(ORGANIZATION_CONFIGURATION_TYPE, Options::new())
            .await?;
        Ok(response.data_as()?)
    }
}
