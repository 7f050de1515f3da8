use serde::{Deserialize, Serialize};

use crate::api::{ApiClient, ApiError, Options};

use super::entity::{decode, EntityService};

pub const TEMPLATE_ENTITY_TYPE: &str = "templates";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(default)]
    pub size: u64,
    #[serde(default)]
    pub available_publicly: bool,
    #[serde(default)]
    pub ready: bool,
    #[serde(default)]
    pub ssh_key_enabled: bool,
    #[serde(default)]
    pub extractable: bool,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub os_type: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub os_type_id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub hypervisor: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub format: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub project_id: String,
}

pub struct TemplateService<C> {
    entity: EntityService<C>,
}

impl<C: ApiClient> TemplateService<C> {
    pub fn new(entity: EntityService<C>) -> Self {
        Self { entity }
    }

    pub async fn get(&self, id: &str) -> Result<Template, ApiError> {
        decode(self.entity.get(id, Options::new()).await?)
    }

    pub async fn list(&self) -> Result<Vec<Template>, ApiError> {
        self.list_with_options(Options::new()).await
    }

    pub async fn list_with_options(&self, options: Options) -> Result<Vec<Template>, ApiError> {
        decode(self.entity.list(options).await?)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::api::TaskService;
    use crate::test_support::FakeClient;

    fn service(client: &Arc<FakeClient>) -> TemplateService<FakeClient> {
        TemplateService::new(EntityService::new(
            Arc::clone(client),
            TaskService::new(Arc::clone(client)),
            "compute-qc",
            "dev",
            TEMPLATE_ENTITY_TYPE,
        ))
    }

    #[tokio::test]
    async fn get_decodes_template() {
        let client = Arc::new(FakeClient::new());
        client.push_data(
            r#"{"id":"tpl-1","name":"Ubuntu 22.04","description":"ubuntu","size":10737418240,
                "availablePublicly":true,"ready":true,"sshKeyEnabled":true,"extractable":false,
                "osType":"Ubuntu","osTypeId":"os-1","hypervisor":"XenServer","format":"VHD",
                "projectId":"p-1"}"#,
        );

        let template = service(&client).get("tpl-1").await.unwrap();
        assert_eq!(
            template,
            Template {
                id: "tpl-1".into(),
                name: "Ubuntu 22.04".into(),
                description: "ubuntu".into(),
                size: 10_737_418_240,
                available_publicly: true,
                ready: true,
                ssh_key_enabled: true,
                extractable: false,
                os_type: "Ubuntu".into(),
                os_type_id: "os-1".into(),
                hypervisor: "XenServer".into(),
                format: "VHD".into(),
                project_id: "p-1".into(),
            }
        );
        assert_eq!(
            client.requests()[0].endpoint,
            "services/compute-qc/dev/templates/tpl-1"
        );
    }

    #[tokio::test]
    async fn list_passes_filters() {
        let client = Arc::new(FakeClient::new());
        client.push_data(r#"[{"id":"tpl-1","name":"a"},{"id":"tpl-2","name":"b"}]"#);

        let mut options = Options::new();
        options.insert("zoneId".into(), "zone-1".into());
        let templates = service(&client).list_with_options(options).await.unwrap();

        assert_eq!(templates.len(), 2);
        assert_eq!(templates[1].id, "tpl-2");
        assert_eq!(client.requests()[0].options["zoneId"], "zone-1");
    }

    #[tokio::test]
    async fn list_propagates_errors() {
        let client = Arc::new(FakeClient::new());
        client.push_domain_error(400, "BAD_REQUEST");

        let err = service(&client).list().await.unwrap_err();
        assert!(matches!(err, ApiError::Domain(_)));
    }
}
