//! Remote access VPN commands

use anyhow::{Context, Result};
use cca::{ApiClient, Client};
use serde_json::json;

use crate::cli::{VpnAction, VpnCommand};
use crate::output::Output;

pub async fn run<C: ApiClient>(cmd: VpnCommand, client: &Client<C>, out: &Output) -> Result<()> {
    let resources = client.resources(&cmd.scope.service_code, &cmd.scope.environment);
    let vpns = &resources.remote_access_vpns;

    match cmd.action {
        VpnAction::List => {
            let list = vpns.list().await.context("Failed to list remote access VPNs")?;
            out.result(&list)
        }
        VpnAction::Get { id } => {
            let vpn = vpns
                .get(&id)
                .await
                .with_context(|| format!("Failed to get remote access VPN {id}"))?;
            out.result(&vpn)
        }
        VpnAction::Enable { id } => {
            vpns.enable(&id)
                .await
                .with_context(|| format!("Failed to enable remote access VPN {id}"))?;
            out.result(&json!({ "enabled": true }))
        }
        VpnAction::Disable { id } => {
            vpns.disable(&id)
                .await
                .with_context(|| format!("Failed to disable remote access VPN {id}"))?;
            out.result(&json!({ "disabled": true }))
        }
    }
}
