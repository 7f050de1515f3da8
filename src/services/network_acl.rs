use serde::{Deserialize, Serialize};

use crate::api::{ApiClient, ApiError, Options};

use super::entity::{body, decode, EntityService};

pub const NETWORK_ACL_ENTITY_TYPE: &str = "networkacls";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkAcl {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub vpc_id: String,
}

pub struct NetworkAclService<C> {
    entity: EntityService<C>,
}

impl<C: ApiClient> NetworkAclService<C> {
    pub fn new(entity: EntityService<C>) -> Self {
        Self { entity }
    }

    pub async fn get(&self, id: &str) -> Result<NetworkAcl, ApiError> {
        decode(self.entity.get(id, Options::new()).await?)
    }

    pub async fn list(&self) -> Result<Vec<NetworkAcl>, ApiError> {
        decode(self.entity.list(Options::new()).await?)
    }

    pub async fn create(&self, acl: &NetworkAcl) -> Result<NetworkAcl, ApiError> {
        decode(self.entity.create(body(acl)?, Options::new()).await?)
    }

    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.entity.delete(id, None, Options::new()).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use super::*;
    use crate::api::TaskService;
    use crate::test_support::FakeClient;

    fn service(client: &Arc<FakeClient>) -> NetworkAclService<FakeClient> {
        let tasks = TaskService::new(Arc::clone(client)).with_poll_interval(Duration::from_millis(1));
        NetworkAclService::new(EntityService::new(
            Arc::clone(client),
            tasks,
            "compute-qc",
            "dev",
            NETWORK_ACL_ENTITY_TYPE,
        ))
    }

    #[tokio::test]
    async fn get_network_acl() {
        let client = Arc::new(FakeClient::new());
        client.push_data(
            r#"{"id":"acl-1","name":"web","description":"web tier","vpcId":"vpc-1"}"#,
        );

        let acl = service(&client).get("acl-1").await.unwrap();
        assert_eq!(
            acl,
            NetworkAcl {
                id: "acl-1".into(),
                name: "web".into(),
                description: "web tier".into(),
                vpc_id: "vpc-1".into(),
            }
        );
        assert_eq!(client.requests()[0].endpoint, "services/compute-qc/dev/networkacls/acl-1");
    }

    #[tokio::test]
    async fn list_propagates_errors() {
        let client = Arc::new(FakeClient::new());
        client.push_domain_error(400, "BAD_REQUEST");

        assert!(service(&client).list().await.is_err());
    }

    #[tokio::test]
    async fn create_returns_created_acl() {
        let client = Arc::new(FakeClient::new());
        client.push_task("t-acl");
        client.push_task_status(
            "t-acl",
            "SUCCESS",
            r#"{"id":"new_id","name":"web","description":"web tier","vpcId":"vpc-1"}"#,
        );

        let draft = NetworkAcl {
            name: "web".into(),
            description: "web tier".into(),
            vpc_id: "vpc-1".into(),
            ..NetworkAcl::default()
        };
        let created = service(&client).create(&draft).await.unwrap();

        assert_eq!(created.id, "new_id");
        assert_eq!(
            client.requests()[0].body.as_deref(),
            Some(br#"{"name":"web","description":"web tier","vpcId":"vpc-1"}"#.as_slice())
        );
    }

    #[tokio::test]
    async fn delete_reports_failure() {
        let client = Arc::new(FakeClient::new());
        client.push_data("{}");
        client.push_domain_error(409, "ACL_IN_USE");

        let acls = service(&client);
        acls.delete("acl-1").await.unwrap();
        assert!(matches!(acls.delete("acl-1").await, Err(ApiError::Domain(_))));
    }
}
