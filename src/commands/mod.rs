//! One module per command group.

pub mod completion;
pub mod connection;
pub mod environment;
pub mod instance;
pub mod network;
pub mod version;
pub mod volume;
pub mod vpn;
