use std::sync::Arc;

use crate::api::{ApiClient, ApiError, Options};

use super::types::User;
use super::ConfigurationService;

pub const USER_CONFIGURATION_TYPE: &str = "users";

pub struct UserService<C> {
    configuration: ConfigurationService<C>,
}

impl<C: ApiClient> UserService<C> {
    pub fn new(client: Arc<C>) -> Self {
        Self {
            configuration: ConfigurationService::new(client),
        }
    }

    pub async fn get(&self, id: &str) -> Result<User, ApiError> {
        let response = self.configuration.get(USER_CONFIGURATION_TYPE, id).await?;
        Ok(response.data_as()?)
    }

    pub async fn list(&self) -> Result<Vec<User>, ApiError> {
        let response = self
            .configuration
            .list(USER_CONFIGURATION_TYPE, Options::new())
            .await?;
        Ok(response.data_as()?)
    }
}
