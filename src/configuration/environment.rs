use std::sync::Arc;

use crate::api::{ApiClient, ApiError, Options};

use super::types::Environment;
use super::ConfigurationService;

pub const ENVIRONMENT_CONFIGURATION_TYPE: &str = "environments";

pub struct EnvironmentService<C> {
    configuration: ConfigurationService<C>,
}

impl<C: ApiClient> EnvironmentService<C> {
    pub fn new(client: Arc<C>) -> Self {
        Self {
            configuration: ConfigurationService::new(client),
        }
    }

    pub async fn get(&self, id: &str) -> Result<Environment, ApiError> {
        let response = self
            .configuration
            .get(ENVIRONMENT_CONFIGURATION_TYPE, id)
            .await?;
        Ok(response.data_as()?)
    }

    pub async fn list(&self) -> Result<Vec<Environment>, ApiError> {
        self.list_with_options(Options::new()).await
    }

    pub async fn list_with_options(&self, options: Options) -> Result<Vec<Environment>, ApiError> {
        let response = self
            .configuration
            .list(ENVIRONMENT_CONFIGURATION_TYPE, options)
            .await?;
        Ok(response.data_as()?)
    }

    pub async fn create(&self, environment: &Environment) -> Result<Environment, ApiError> {
        let response = self
            .configuration
            .create(ENVIRONMENT_CONFIGURATION_TYPE, environment)
            .await?;
        Ok(response.data_as()?)
    }

    pub async fn update(&self, id: &str, environment: &Environment) -> Result<Environment, ApiError> {
        let response = self
            .configuration
            .update(ENVIRONMENT_CONFIGURATION_TYPE, id, environment)
            .await?;
        Ok(response.data_as()?)
    }

    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.configuration
            .delete(ENVIRONMENT_CONFIGURATION_TYPE, id)
            .await?;
        Ok(())
    }
}
