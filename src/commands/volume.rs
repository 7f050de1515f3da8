//! Volume commands

use anyhow::{Context, Result};
use cca::services::Volume;
use cca::{ApiClient, Client};
use serde_json::{json, Value};

use crate::cli::{VolumeAction, VolumeCommand};
use crate::output::Output;

pub async fn run<C: ApiClient>(cmd: VolumeCommand, client: &Client<C>, out: &Output) -> Result<()> {
    let resources = client.resources(&cmd.scope.service_code, &cmd.scope.environment);
    let volumes = &resources.volumes;

    let result: Value = match cmd.action {
        VolumeAction::List => serde_json::to_value(volumes.list().await.context("Failed to list volumes")?)?,
        VolumeAction::Get { id } => serde_json::to_value(
            volumes
                .get(&id)
                .await
                .with_context(|| format!("Failed to get volume {id}"))?,
        )?,
        VolumeAction::Attach { id, instance_id } => {
            let volume = Volume {
                id: id.clone(),
                instance_id: instance_id.clone(),
                ..Volume::default()
            };
            volumes
                .attach_to_instance(&volume)
                .await
                .with_context(|| format!("Failed to attach volume {id} to instance {instance_id}"))?;
            json!({ "attached": true })
        }
        VolumeAction::Detach { id } => {
            let volume = Volume {
                id: id.clone(),
                ..Volume::default()
            };
            volumes
                .detach_from_instance(&volume)
                .await
                .with_context(|| format!("Failed to detach volume {id}"))?;
            json!({ "detached": true })
        }
        VolumeAction::Delete { id } => {
            volumes
                .delete(&id)
                .await
                .with_context(|| format!("Failed to delete volume {id}"))?;
            json!({ "deleted": true })
        }
    };

    out.result(&result)
}
