use serde::{Deserialize, Serialize};

use crate::api::{ApiClient, ApiError, Options};

use super::entity::{decode, EntityService};

pub const SSH_KEY_ENTITY_TYPE: &str = "sshkeys";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SshKey {
    pub name: String,
    #[serde(default)]
    pub fingerprint: String,
}

/// SSH keys are addressed by name.
pub struct SshKeyService<C> {
    entity: EntityService<C>,
}

impl<C: ApiClient> SshKeyService<C> {
    pub fn new(entity: EntityService<C>) -> Self {
        Self { entity }
    }

    pub async fn get(&self, name: &str) -> Result<SshKey, ApiError> {
        decode(self.entity.get(name, Options::new()).await?)
    }

    pub async fn list(&self) -> Result<Vec<SshKey>, ApiError> {
        decode(self.entity.list(Options::new()).await?)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::api::TaskService;
    use crate::test_support::FakeClient;

    #[tokio::test]
    async fn get_by_name() {
        let client = Arc::new(FakeClient::new());
        client.push_data(r#"{"name":"deploy","fingerprint":"aa:bb"}"#);

        let service = SshKeyService::new(EntityService::new(
            Arc::clone(&client),
            TaskService::new(Arc::clone(&client)),
            "compute-qc",
            "dev",
            SSH_KEY_ENTITY_TYPE,
        ));
        let key = service.get("deploy").await.unwrap();

        assert_eq!(
            key,
            SshKey {
                name: "deploy".into(),
                fingerprint: "aa:bb".into(),
            }
        );
        assert_eq!(client.requests()[0].endpoint, "services/compute-qc/dev/sshkeys/deploy");
    }
}
