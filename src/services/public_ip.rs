use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::api::{ApiClient, ApiError, Options};

use super::entity::{body, decode, EntityService};

pub const PUBLIC_IP_ENTITY_TYPE: &str = "publicipaddresses";

pub const PUBLIC_IP_ENABLE_STATIC_NAT_OPERATION: &str = "enableStaticNat";
pub const PUBLIC_IP_DISABLE_STATIC_NAT_OPERATION: &str = "disableStaticNat";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicIp {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub ip_address: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub state: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub zone_id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub zone_name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub network_id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub network_name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub vpc_id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub vpc_name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub instance_id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub instance_name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub private_ip_id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub private_ip: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub purposes: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ports: Vec<String>,
}

pub struct PublicIpService<C> {
    entity: EntityService<C>,
}

impl<C: ApiClient> PublicIpService<C> {
    pub fn new(entity: EntityService<C>) -> Self {
        Self { entity }
    }

    pub async fn get(&self, id: &str) -> Result<PublicIp, ApiError> {
        decode(self.entity.get(id, Options::new()).await?)
    }

    pub async fn list(&self) -> Result<Vec<PublicIp>, ApiError> {
        self.list_with_options(Options::new()).await
    }

    pub async fn list_with_options(&self, options: Options) -> Result<Vec<PublicIp>, ApiError> {
        decode(self.entity.list(options).await?)
    }

    /// Acquire a new public IP for `public_ip.vpc_id`.
    pub async fn acquire(&self, public_ip: &PublicIp) -> Result<PublicIp, ApiError> {
        decode(self.entity.create(body(public_ip)?, Options::new()).await?)
    }

    pub async fn release(&self, id: &str) -> Result<(), ApiError> {
        self.entity.delete(id, None, Options::new()).await?;
        Ok(())
    }

    /// Map `public_ip.id` one-to-one onto the private IP `public_ip.private_ip_id`.
    pub async fn enable_static_nat(&self, public_ip: &PublicIp) -> Result<(), ApiError> {
        let payload = json!({ "privateIpId": public_ip.private_ip_id });
        self.entity
            .execute(
                &public_ip.id,
                PUBLIC_IP_ENABLE_STATIC_NAT_OPERATION,
                body(&payload)?,
                Options::new(),
            )
            .await?;
        Ok(())
    }

    pub async fn disable_static_nat(&self, id: &str) -> Result<(), ApiError> {
        self.entity
            .execute(id, PUBLIC_IP_DISABLE_STATIC_NAT_OPERATION, None, Options::new())
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use super::*;
    use crate::api::{Method, TaskService};
    use crate::test_support::FakeClient;

    fn service(client: &Arc<FakeClient>) -> PublicIpService<FakeClient> {
        let tasks = TaskService::new(Arc::clone(client)).with_poll_interval(Duration::from_millis(1));
        PublicIpService::new(EntityService::new(
            Arc::clone(client),
            tasks,
            "compute-qc",
            "dev",
            PUBLIC_IP_ENTITY_TYPE,
        ))
    }

    #[tokio::test]
    async fn list_public_ips() {
        let client = Arc::new(FakeClient::new());
        client.push_data(
            r#"[{"id":"list_id_1","ipAddress":"172.31.3.208"},{"id":"list_id_2","ipAddress":"172.31.3.209"}]"#,
        );

        let ips = service(&client).list().await.unwrap();
        assert_eq!(
            ips,
            vec![
                PublicIp {
                    id: "list_id_1".into(),
                    ip_address: "172.31.3.208".into(),
                    ..PublicIp::default()
                },
                PublicIp {
                    id: "list_id_2".into(),
                    ip_address: "172.31.3.209".into(),
                    ..PublicIp::default()
                },
            ]
        );
        assert_eq!(
            client.requests()[0].endpoint,
            "services/compute-qc/dev/publicipaddresses"
        );
    }

    #[tokio::test]
    async fn acquire_sends_vpc_and_waits_for_task() {
        let client = Arc::new(FakeClient::new());
        client.push_task("t-ip");
        client.push_task_status("t-ip", "SUCCESS", r#"{"id":"new_id","ipAddress":"new_ip_address"}"#);

        let draft = PublicIp {
            vpc_id: "vpcId".into(),
            ..PublicIp::default()
        };
        let acquired = service(&client).acquire(&draft).await.unwrap();

        assert_eq!(acquired.id, "new_id");
        assert_eq!(acquired.ip_address, "new_ip_address");
        let requests = client.requests();
        assert_eq!(requests[0].method, Method::Post);
        assert_eq!(requests[0].body.as_deref(), Some(br#"{"vpcId":"vpcId"}"#.as_slice()));
    }

    #[tokio::test]
    async fn release_deletes_ip() {
        let client = Arc::new(FakeClient::new());
        client.push_data("{}");

        service(&client).release("ip-1").await.unwrap();
        let request = &client.requests()[0];
        assert_eq!(request.method, Method::Delete);
        assert_eq!(request.endpoint, "services/compute-qc/dev/publicipaddresses/ip-1");
    }

    #[tokio::test]
    async fn enable_static_nat_targets_private_ip() {
        let client = Arc::new(FakeClient::new());
        client.push_data("{}");

        let public_ip = PublicIp {
            id: "ip-1".into(),
            private_ip_id: "private_ip_id".into(),
            ..PublicIp::default()
        };
        service(&client).enable_static_nat(&public_ip).await.unwrap();

        let request = &client.requests()[0];
        assert_eq!(request.endpoint, "services/compute-qc/dev/publicipaddresses/ip-1");
        assert_eq!(request.options["operation"], PUBLIC_IP_ENABLE_STATIC_NAT_OPERATION);
        assert_eq!(
            request.body.as_deref(),
            Some(br#"{"privateIpId":"private_ip_id"}"#.as_slice())
        );
    }

    #[tokio::test]
    async fn disable_static_nat_propagates_errors() {
        let client = Arc::new(FakeClient::new());
        client.push_domain_error(400, "STATIC_NAT_NOT_ENABLED");

        let err = service(&client).disable_static_nat("ip-1").await.unwrap_err();
        assert!(matches!(err, ApiError::Domain(_)));
        assert_eq!(
            client.requests()[0].options["operation"],
            PUBLIC_IP_DISABLE_STATIC_NAT_OPERATION
        );
    }
}
