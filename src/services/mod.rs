//! Resources scoped to one service connection and environment.

mod compute_offering;
mod disk_offering;
mod entity;
mod instance;
mod network;
mod network_acl;
mod network_acl_rule;
mod port_forwarding_rule;
mod public_ip;
mod remote_access_vpn;
mod ssh_key;
mod template;
mod volume;
mod vpc;
mod vpc_offering;
mod zone;

use std::sync::Arc;

use crate::api::{ApiClient, TaskService};

pub use compute_offering::{
    ComputeOffering, ComputeOfferingService, COMPUTE_OFFERING_ENTITY_TYPE,
};
pub use disk_offering::{DiskOffering, DiskOfferingService, DISK_OFFERING_ENTITY_TYPE};
pub use entity::{EntityService, Payload, DEFAULT_MAX_TRIES};
pub use instance::{
    DestroyOptions, Instance, InstanceService, RecoveryPoint, INSTANCE_ENTITY_TYPE,
};
pub use network::{Network, NetworkService, NETWORK_ENTITY_TYPE};
pub use network_acl::{NetworkAcl, NetworkAclService, NETWORK_ACL_ENTITY_TYPE};
pub use network_acl_rule::{
    NetworkAclRule, NetworkAclRuleService, NETWORK_ACL_ID_OPTION, NETWORK_ACL_RULE_ENTITY_TYPE,
};
pub use port_forwarding_rule::{
    PortForwardingRule, PortForwardingRuleService, PORT_FORWARDING_RULE_ENTITY_TYPE,
};
pub use public_ip::{
    PublicIp, PublicIpService, PUBLIC_IP_DISABLE_STATIC_NAT_OPERATION,
    PUBLIC_IP_ENABLE_STATIC_NAT_OPERATION, PUBLIC_IP_ENTITY_TYPE,
};
pub use remote_access_vpn::{
    RemoteAccessVpn, RemoteAccessVpnService, RemoteAccessVpnUser, RemoteAccessVpnUserService,
    REMOTE_ACCESS_VPN_ENTITY_TYPE, REMOTE_ACCESS_VPN_USER_ENTITY_TYPE,
};
pub use ssh_key::{SshKey, SshKeyService, SSH_KEY_ENTITY_TYPE};
pub use template::{Template, TemplateService, TEMPLATE_ENTITY_TYPE};
pub use volume::{Volume, VolumeService, VOLUME_ENTITY_TYPE};
pub use vpc::{Vpc, VpcService, VPC_ENTITY_TYPE};
pub use vpc_offering::{VpcOffering, VpcOfferingService, VPC_OFFERING_ENTITY_TYPE};
pub use zone::{Zone, ZoneService, ZONE_ENTITY_TYPE};

/// Every per-resource service for one `(service code, environment)` pair.
pub struct Resources<C> {
    service_code: String,
    environment_name: String,
    pub instances: InstanceService<C>,
    pub volumes: VolumeService<C>,
    pub networks: NetworkService<C>,
    pub vpcs: VpcService<C>,
    pub ssh_keys: SshKeyService<C>,
    pub zones: ZoneService<C>,
    pub remote_access_vpns: RemoteAccessVpnService<C>,
    pub remote_access_vpn_users: RemoteAccessVpnUserService<C>,
    pub templates: TemplateService<C>,
    pub compute_offerings: ComputeOfferingService<C>,
    pub disk_offerings: DiskOfferingService<C>,
    pub vpc_offerings: VpcOfferingService<C>,
    pub public_ips: PublicIpService<C>,
    pub port_forwarding_rules: PortForwardingRuleService<C>,
    pub network_acls: NetworkAclService<C>,
    pub network_acl_rules: NetworkAclRuleService<C>,
}

impl<C: ApiClient> Resources<C> {
    pub fn new(
        client: Arc<C>,
        tasks: TaskService<C>,
        service_code: &str,
        environment_name: &str,
    ) -> Self {
        let entity = |entity_type: &'static str| {
            EntityService::new(
                Arc::clone(&client),
                tasks.clone(),
                service_code,
                environment_name,
                entity_type,
            )
        };

        Self {
            service_code: service_code.to_string(),
            environment_name: environment_name.to_string(),
            instances: InstanceService::new(entity(INSTANCE_ENTITY_TYPE)),
            volumes: VolumeService::new(entity(VOLUME_ENTITY_TYPE)),
            networks: NetworkService::new(entity(NETWORK_ENTITY_TYPE)),
            vpcs: VpcService::new(entity(VPC_ENTITY_TYPE)),
            ssh_keys: SshKeyService::new(entity(SSH_KEY_ENTITY_TYPE)),
            zones: ZoneService::new(entity(ZONE_ENTITY_TYPE)),
            remote_access_vpns: RemoteAccessVpnService::new(entity(REMOTE_ACCESS_VPN_ENTITY_TYPE)),
            remote_access_vpn_users: RemoteAccessVpnUserService::new(entity(
                REMOTE_ACCESS_VPN_USER_ENTITY_TYPE,
            )),
            templates: TemplateService::new(entity(TEMPLATE_ENTITY_TYPE)),
            compute_offerings: ComputeOfferingService::new(entity(COMPUTE_OFFERING_ENTITY_TYPE)),
            disk_offerings: DiskOfferingService::new(entity(DISK_OFFERING_ENTITY_TYPE)),
            vpc_offerings: VpcOfferingService::new(entity(VPC_OFFERING_ENTITY_TYPE)),
            public_ips: PublicIpService::new(entity(PUBLIC_IP_ENTITY_TYPE)),
            port_forwarding_rules: PortForwardingRuleService::new(entity(
                PORT_FORWARDING_RULE_ENTITY_TYPE,
            )),
            network_acls: NetworkAclService::new(entity(NETWORK_ACL_ENTITY_TYPE)),
            network_acl_rules: NetworkAclRuleService::new(entity(NETWORK_ACL_RULE_ENTITY_TYPE)),
        }
    }

    pub fn service_code(&self) -> &str {
        &self.service_code
    }

    pub fn environment_name(&self) -> &str {
        &self.environment_name
    }
}
