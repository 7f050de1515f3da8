use serde::{Deserialize, Serialize};

use crate::api::{ApiClient, ApiError, Options};

use super::entity::{body, decode, EntityService};

pub const REMOTE_ACCESS_VPN_ENTITY_TYPE: &str = "remoteaccessvpns";
pub const REMOTE_ACCESS_VPN_USER_ENTITY_TYPE: &str = "remoteaccessvpnusers";

pub const REMOTE_ACCESS_VPN_ENABLE_OPERATION: &str = "enable";
pub const REMOTE_ACCESS_VPN_DISABLE_OPERATION: &str = "disable";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteAccessVpn {
    pub id: String,
    #[serde(default)]
    pub certificate: String,
    #[serde(default)]
    pub preshared_key: String,
    #[serde(default)]
    pub public_ip_address: String,
    #[serde(default)]
    pub public_ip_address_id: String,
    #[serde(default)]
    pub state: String,
    #[serde(rename = "type", default)]
    pub vpn_type: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RemoteAccessVpnUser {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub username: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub password: String,
}

pub struct RemoteAccessVpnService<C> {
    entity: EntityService<C>,
}

impl<C: ApiClient> RemoteAccessVpnService<C> {
    pub fn new(entity: EntityService<C>) -> Self {
        Self { entity }
    }

    pub async fn get(&self, id: &str) -> Result<RemoteAccessVpn, ApiError> {
        decode(self.entity.get(id, Options::new()).await?)
    }

    pub async fn list(&self) -> Result<Vec<RemoteAccessVpn>, ApiError> {
        decode(self.entity.list(Options::new()).await?)
    }

    pub async fn enable(&self, id: &str) -> Result<(), ApiError> {
        self.entity
            .execute(id, REMOTE_ACCESS_VPN_ENABLE_OPERATION, None, Options::new())
            .await?;
        Ok(())
    }

    pub async fn disable(&self, id: &str) -> Result<(), ApiError> {
        self.entity
            .execute(id, REMOTE_ACCESS_VPN_DISABLE_OPERATION, None, Options::new())
            .await?;
        Ok(())
    }
}

pub struct RemoteAccessVpnUserService<C> {
    entity: EntityService<C>,
}

impl<C: ApiClient> RemoteAccessVpnUserService<C> {
    pub fn new(entity: EntityService<C>) -> Self {
        Self { entity }
    }

    pub async fn get(&self, id: &str) -> Result<RemoteAccessVpnUser, ApiError> {
        decode(self.entity.get(id, Options::new()).await?)
    }

    pub async fn list(&self) -> Result<Vec<RemoteAccessVpnUser>, ApiError> {
        decode(self.entity.list(Options::new()).await?)
    }

    pub async fn create(&self, user: &RemoteAccessVpnUser) -> Result<(), ApiError> {
        self.entity.create(body(user)?, Options::new()).await?;
        Ok(())
    }

    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.entity.delete(id, None, Options::new()).await?;
        Ok(())
    }
}
