use serde::{Deserialize, Serialize};

use crate::api::{ApiClient, ApiError, Options};

use super::entity::{body, decode, EntityService};

pub const NETWORK_ACL_RULE_ENTITY_TYPE: &str = "networkaclrules";

/// Query option selecting the rules of one ACL.
pub const NETWORK_ACL_ID_OPTION: &str = "network_acl_id";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkAclRule {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub network_acl_id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub rule_number: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub cidr: String,
    /// `Allow` or `Deny`
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub action: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub protocol: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub start_port: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub end_port: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub icmp_type: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub icmp_code: String,
    /// `Ingress` or `Egress`
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub traffic_type: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub state: String,
}

pub struct NetworkAclRuleService<C> {
    entity: EntityService<C>,
}

impl<C: ApiClient> NetworkAclRuleService<C> {
    pub fn new(entity: EntityService<C>) -> Self {
        Self { entity }
    }

    pub async fn get(&self, id: &str) -> Result<NetworkAclRule, ApiError> {
        decode(self.entity.get(id, Options::new()).await?)
    }

    pub async fn list(&self) -> Result<Vec<NetworkAclRule>, ApiError> {
        self.list_with_options(Options::new()).await
    }

    pub async fn list_by_network_acl_id(
        &self,
        network_acl_id: &str,
    ) -> Result<Vec<NetworkAclRule>, ApiError> {
        let mut options = Options::new();
        options.insert(NETWORK_ACL_ID_OPTION.to_string(), network_acl_id.to_string());
        self.list_with_options(options).await
    }

    pub async fn list_with_options(&self, options: Options) -> Result<Vec<NetworkAclRule>, ApiError> {
        decode(self.entity.list(options).await?)
    }

    pub async fn create(&self, rule: &NetworkAclRule) -> Result<NetworkAclRule, ApiError> {
        decode(self.entity.create(body(rule)?, Options::new()).await?)
    }

    pub async fn update(&self, id: &str, rule: &NetworkAclRule) -> Result<NetworkAclRule, ApiError> {
        decode(self.entity.update(id, body(rule)?, Options::new()).await?)
    }

    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.entity.delete(id, None, Options::new()).await?;
        Ok(())
    }
}
