//! Network commands

use anyhow::{Context, Result};
use cca::{ApiClient, Client};

use crate::cli::{NetworkAction, NetworkCommand};
use crate::output::Output;

pub async fn run<C: ApiClient>(cmd: NetworkCommand, client: &Client<C>, out: &Output) -> Result<()> {
    let resources = client.resources(&cmd.scope.service_code, &cmd.scope.environment);

    match cmd.action {
        NetworkAction::List => {
            let networks = resources
                .networks
                .list()
                .await
                .context("Failed to list networks")?;
            out.result(&networks)
        }
        NetworkAction::Get { id } => {
            let network = resources
                .networks
                .get(&id)
                .await
                .with_context(|| format!("Failed to get network {id}"))?;
            out.result(&network)
        }
    }
}
