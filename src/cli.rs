//! CLI definition using clap

use cca::api::DEFAULT_API_URL;
use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use crate::config::{OutputFormat, DEFAULT_OUTPUT_FORMAT};

#[derive(Parser)]
#[command(name = "cca")]
#[command(version)]
#[command(about = "cloud.ca command line interface")]
#[command(long_about = r#"
cca - manage cloud.ca resources from the command line

Command groups:
  environment  environments of your organization
  connection   service connections
  instance     compute instances of one environment
  volume       volumes of one environment
  network      networks of one environment
  vpn          remote access VPNs of one environment

Authentication:
  Pass --api-key or set CCA_API_KEY (a .env file in the project directory is
  loaded automatically).
"#)]
#[command(after_help = r#"
Examples:

  List environments:
    cca environment list

  List instances of an environment:
    cca instance --service-code compute-qc --environment dev list

  Stop an instance and wait for the task to finish:
    cca instance -s compute-qc -e dev stop --id 1f7a0d8e

  Render as YAML:
    cca connection list --output yaml
"#)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalFlags,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Flags shared by every command. Validated by `GlobalFlags::normalize`.
#[derive(Args, Debug, Clone)]
pub struct GlobalFlags {
    /// API url of cloud.ca resources
    #[arg(long, global = true, env = "CCA_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// API key to access cloud.ca resources
    #[arg(long, global = true, env = "CCA_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Accept self-signed TLS certificates
    #[arg(long, global = true)]
    pub insecure: bool,

    #[arg(
        long,
        global = true,
        default_value = DEFAULT_OUTPUT_FORMAT.as_str(),
        help = format!("Output format {}", OutputFormat::format_strings())
    )]
    pub output: String,

    /// Log level [off, error, warn, info, debug, trace]
    #[arg(long, global = true, default_value = "info")]
    pub loglevel: String,

    /// Disable colored error output
    #[arg(long, global = true)]
    pub nocolor: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage environments and users' access to them
    #[command(visible_alias = "env")]
    Environment(EnvironmentCommand),

    /// Inspect service connections
    Connection(ConnectionCommand),

    /// Manage compute instances
    Instance(InstanceCommand),

    /// Manage volumes
    Volume(VolumeCommand),

    /// Inspect networks
    Network(NetworkCommand),

    /// Manage remote access VPNs
    Vpn(VpnCommand),

    /// Generate shell completion scripts
    #[command(after_help = "Examples:
  source <(cca completion bash)
  cca completion zsh > \"${fpath[1]}/_cca\"")]
    Completion {
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Print the cca CLI version
    Version,
}

/// Service connection and environment every resource command runs against.
#[derive(Args, Debug, Clone)]
pub struct ScopeArgs {
    /// Service code of the connection (e.g. compute-qc)
    #[arg(short, long)]
    pub service_code: String,

    /// Environment name (e.g. dev)
    #[arg(short, long)]
    pub environment: String,
}

// ============ Environment Commands ============

#[derive(Args)]
pub struct EnvironmentCommand {
    #[command(subcommand)]
    pub action: EnvironmentAction,
}

#[derive(Subcommand)]
pub enum EnvironmentAction {
    /// List environments of your organization
    #[command(visible_alias = "ls")]
    List,

    /// Get a specific environment
    #[command(after_help = "Examples:
  cca environment get --id 3b8a2d1c")]
    Get {
        /// ID of environment
        #[arg(long)]
        id: String,
    },

    /// Delete a specific environment
    #[command(after_help = "Examples:
  cca environment delete --id 3b8a2d1c")]
    Delete {
        /// ID of environment to delete
        #[arg(long)]
        id: String,
    },
}

// ============ Connection Commands ============

#[derive(Args)]
pub struct ConnectionCommand {
    #[command(subcommand)]
    pub action: ConnectionAction,
}

#[derive(Subcommand)]
pub enum ConnectionAction {
    /// List service connections
    #[command(visible_alias = "ls")]
    List,

    /// Get a specific service connection
    Get {
        /// ID of service connection
        #[arg(long)]
        id: String,
    },
}

// ============ Instance Commands ============

#[derive(Args)]
pub struct InstanceCommand {
    #[command(flatten)]
    pub scope: ScopeArgs,

    #[command(subcommand)]
    pub action: InstanceAction,
}

#[derive(Subcommand)]
pub enum InstanceAction {
    /// List instances
    #[command(visible_alias = "ls")]
    List,

    /// Get a specific instance
    Get {
        #[arg(long)]
        id: String,
    },

    /// Check whether an instance exists
    Exists {
        #[arg(long)]
        id: String,
    },

    /// Start an instance
    Start {
        #[arg(long)]
        id: String,
    },

    /// Stop an instance
    Stop {
        #[arg(long)]
        id: String,
    },

    /// Reboot an instance
    Reboot {
        #[arg(long)]
        id: String,
    },

    /// Destroy an instance
    #[command(after_help = "Examples:
  cca instance -s compute-qc -e dev destroy --id 1f7a0d8e --purge")]
    Destroy {
        #[arg(long)]
        id: String,

        /// Purge immediately instead of keeping the instance recoverable
        #[arg(long)]
        purge: bool,
    },

    /// Reset the password of an instance
    ResetPassword {
        #[arg(long)]
        id: String,
    },
}

// ============ Volume Commands ============

#[derive(Args)]
pub struct VolumeCommand {
    #[command(flatten)]
    pub scope: ScopeArgs,

    #[command(subcommand)]
    pub action: VolumeAction,
}

#[derive(Subcommand)]
pub enum VolumeAction {
    /// List volumes
    #[command(visible_alias = "ls")]
    List,

    /// Get a specific volume
    Get {
        #[arg(long)]
        id: String,
    },

    /// Attach a volume to an instance
    Attach {
        #[arg(long)]
        id: String,

        /// Instance to attach the volume to
        #[arg(long)]
        instance_id: String,
    },

    /// Detach a volume from its instance
    Detach {
        #[arg(long)]
        id: String,
    },

    /// Delete a volume
    Delete {
        #[arg(long)]
        id: String,
    },
}

// ============ Network Commands ============

#[derive(Args)]
pub struct NetworkCommand {
    #[command(flatten)]
    pub scope: ScopeArgs,

    #[command(subcommand)]
    pub action: NetworkAction,
}

#[derive(Subcommand)]
pub enum NetworkAction {
    /// List networks
    #[command(visible_alias = "ls")]
    List,

    /// Get a specific network
    Get {
        #[arg(long)]
        id: String,
    },
}

// ============ VPN Commands ============

#[derive(Args)]
pub struct VpnCommand {
    #[command(flatten)]
    pub scope: ScopeArgs,

    #[command(subcommand)]
    pub action: VpnAction,
}

#[derive(Subcommand)]
pub enum VpnAction {
    /// List remote access VPNs
    #[command(visible_alias = "ls")]
    List,

    /// Get a specific remote access VPN
    Get {
        #[arg(long)]
        id: String,
    },

    /// Enable a remote access VPN
    Enable {
        #[arg(long)]
        id: String,
    },

    /// Disable a remote access VPN
    Disable {
        #[arg(long)]
        id: String,
    },
}
