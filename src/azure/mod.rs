//! Azure CLI interaction.
//!
//! This module handles all Azure-related operations:
//! - [`cli`] - Command execution for Azure CLI
//! - [`query`] - The read-only queries an export runs
//! - [`client`] - The [`CloudClient`] seam and its implementations

mod cli;
mod client;
mod query;

// Re-export public types and functions
pub use cli::run;
pub use client::{AzCli, CloudClient, RecordingClient};
pub use query::QueryKind;
