//! Instance commands

use anyhow::{Context, Result};
use cca::{ApiClient, Client};
use serde_json::json;
use tracing::info;

use crate::cli::{InstanceAction, InstanceCommand};
use crate::output::Output;

pub async fn run<C: ApiClient>(cmd: InstanceCommand, client: &Client<C>, out: &Output) -> Result<()> {
    let resources = client.resources(&cmd.scope.service_code, &cmd.scope.environment);
    let instances = &resources.instances;

    let result = match cmd.action {
        InstanceAction::List => {
            let list = instances.list().await.context("Failed to list instances")?;
            serde_json::to_value(list)?
        }
        InstanceAction::Get { id } => {
            let instance = instances
                .get(&id)
                .await
                .with_context(|| format!("Failed to get instance {id}"))?;
            serde_json::to_value(instance)?
        }
        InstanceAction::Exists { id } => {
            let exists = instances
                .exists(&id)
                .await
                .with_context(|| format!("Failed to look up instance {id}"))?;
            json!({ "exists": exists })
        }
        InstanceAction::Start { id } => {
            info!(instance = %id, "starting instance");
            instances
                .start(&id)
                .await
                .with_context(|| format!("Failed to start instance {id}"))?;
            json!({ "started": true })
        }
        InstanceAction::Stop { id } => {
            info!(instance = %id, "stopping instance");
            instances
                .stop(&id)
                .await
                .with_context(|| format!("Failed to stop instance {id}"))?;
            json!({ "stopped": true })
        }
        InstanceAction::Reboot { id } => {
            info!(instance = %id, "rebooting instance");
            instances
                .reboot(&id)
                .await
                .with_context(|| format!("Failed to reboot instance {id}"))?;
            json!({ "rebooted": true })
        }
        InstanceAction::Destroy { id, purge } => {
            info!(instance = %id, purge, "destroying instance");
            instances
                .destroy(&id, purge)
                .await
                .with_context(|| format!("Failed to destroy instance {id}"))?;
            json!({ "destroyed": true })
        }
        InstanceAction::ResetPassword { id } => {
            let password = instances
                .reset_password(&id)
                .await
                .with_context(|| format!("Failed to reset password of instance {id}"))?;
            json!({ "password": password })
        }
    };

    out.result(&result)
}
