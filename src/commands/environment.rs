//! Environment commands

use anyhow::{Context, Result};
use cca::{ApiClient, Client};
use serde_json::{json, Value};

use crate::cli::{EnvironmentAction, EnvironmentCommand};
use crate::output::Output;

pub async fn run<C: ApiClient>(cmd: EnvironmentCommand, client: &Client<C>, out: &Output) -> Result<()> {
    let result = execute(cmd.action, client).await?;
    out.result(&result)
}

async fn execute<C: ApiClient>(action: EnvironmentAction, client: &Client<C>) -> Result<Value> {
    match action {
        EnvironmentAction::List => {
            let environments = client
                .environments
                .list()
                .await
                .context("Failed to list environments")?;
            Ok(serde_json::to_value(environments)?)
        }
        EnvironmentAction::Get { id } => {
            let environment = client
                .environments
                .get(&id)
                .await
                .with_context(|| format!("Failed to get environment {id}"))?;
            Ok(serde_json::to_value(environment)?)
        }
        EnvironmentAction::Delete { id } => {
            client
                .environments
                .delete(&id)
                .await
                .with_context(|| format!("Failed to delete environment {id}"))?;
            Ok(json!({ "deleted": true }))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_util::client_for;
    use crate::output::{exit_code, EXIT_DOMAIN};
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn list_renders_environments() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/environments"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"{"data":[{"id":"env-1","name":"dev","description":"Development",
                    "serviceConnection":{"id":"c-1","name":"compute","serviceCode":"compute-qc"}}]}"#,
            ))
            .mount(&server)
            .await;

        let value = execute(EnvironmentAction::List, &client_for(&server)).await.unwrap();

        assert_eq!(value[0]["name"], "dev");
        assert_eq!(value[0]["serviceConnection"]["serviceCode"], "compute-qc");
    }

    #[tokio::test]
    async fn delete_reports_deleted() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/v1/environments/env-1"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
            .expect(1)
            .mount(&server)
            .await;

        let value = execute(EnvironmentAction::Delete { id: "env-1".into() }, &client_for(&server))
            .await
            .unwrap();
        assert_eq!(value, json!({ "deleted": true }));
    }

    #[tokio::test]
    async fn domain_errors_keep_their_exit_code() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(403).set_body_string(
                r#"{"errors":[{"errorCode":"FORBIDDEN","message":"missing permission"}]}"#,
            ))
            .mount(&server)
            .await;

        let err = execute(EnvironmentAction::Get { id: "env-1".into() }, &client_for(&server))
            .await
            .unwrap_err();
        assert_eq!(exit_code(&err), EXIT_DOMAIN);
        assert!(format!("{err:#}").contains("Failed to get environment env-1"));
    }
}
