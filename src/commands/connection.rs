//! Service connection commands

use anyhow::{Context, Result};
use cca::{ApiClient, Client};
use serde_json::Value;

use crate::cli::{ConnectionAction, ConnectionCommand};
use crate::output::Output;

pub async fn run<C: ApiClient>(cmd: ConnectionCommand, client: &Client<C>, out: &Output) -> Result<()> {
    let result = execute(cmd.action, client).await?;
    out.result(&result)
}

async fn execute<C: ApiClient>(action: ConnectionAction, client: &Client<C>) -> Result<Value> {
    match action {
        ConnectionAction::List => {
            let connections = client
                .service_connections
                .list()
                .await
                .context("Failed to list service connections")?;
            Ok(serde_json::to_value(connections)?)
        }
        ConnectionAction::Get { id } => {
            let connection = client
                .service_connections
                .get(&id)
                .await
                .with_context(|| format!("Failed to get service connection {id}"))?;
            Ok(serde_json::to_value(connection)?)
        }
    }
}
