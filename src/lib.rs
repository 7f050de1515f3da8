//! Bindings for the cloud.ca API and the building blocks of the `cca` CLI.
//!
//! ```no_run
//! # async fn run() -> Result<(), cca::ApiError> {
//! let client = cca::Client::new("my-api-key")?;
//! let instances = client.resources("compute-qc", "dev").instances.list().await?;
//! println!("{} instances", instances.len());
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod client;
pub mod configuration;
pub mod services;

#[cfg(test)]
mod test_support;

pub use api::{ApiClient, ApiError, CcaClient};
pub use client::Client;
