//! Cloud query clients.
//!
//! The orchestrator only talks to a [`CloudClient`]. [`AzCli`] runs the real
//! Azure CLI against the session it is already logged in to, while
//! [`RecordingClient`] returns canned output so exports can run without Azure.

use super::cli;
use super::QueryKind;
use crate::config::Config;
use crate::error::ExportError;
use std::cell::RefCell;
use std::collections::HashSet;

/// Something that can answer read-only queries about a resource group.
pub trait CloudClient {
    /// Run `kind` against `resource_group` and return the raw response.
    fn query(&self, kind: QueryKind, resource_group: &str) -> Result<Vec<u8>, ExportError>;
}

/// Client backed by the `az` command line tool.
#[derive(Debug, Clone)]
pub struct AzCli {
    az_bin: String,
    max_output_bytes: usize,
}

impl AzCli {
    pub fn new(az_bin: impl Into<String>, max_output_bytes: usize) -> Self {
        AzCli {
            az_bin: az_bin.into(),
            max_output_bytes,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.az_bin.clone(), config.max_output_bytes)
    }
}

impl CloudClient for AzCli {
    fn query(&self, kind: QueryKind, resource_group: &str) -> Result<Vec<u8>, ExportError> {
        let cmd = kind.command_line(&self.az_bin, resource_group);
        cli::run(&cmd, self.max_output_bytes)
    }
}

/// A fake client that records every query and answers with canned JSON.
///
/// ```
/// use azure_rg_export::azure::{CloudClient, QueryKind, RecordingClient};
///
/// let client = RecordingClient::new().fail_on("rg1", QueryKind::Aks);
/// assert!(client.query(QueryKind::Resources, "rg1").is_ok());
/// assert!(client.query(QueryKind::Aks, "rg1").is_err());
/// assert_eq!(client.calls().len(), 2);
/// ```
#[derive(Debug, Default)]
pub struct RecordingClient {
    failures: HashSet<(String, QueryKind)>,
    calls: RefCell<Vec<(String, QueryKind)>>,
}

impl RecordingClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `kind` fail for `resource_group` with exit code 1.
    pub fn fail_on(mut self, resource_group: &str, kind: QueryKind) -> Self {
        self.failures.insert((resource_group.to_string(), kind));
        self
    }

    /// Every query seen so far, in order.
    pub fn calls(&self) -> Vec<(String, QueryKind)> {
        self.calls.borrow().clone()
    }

    /// The canned response for a query; stable across calls.
    pub fn canned_response(kind: QueryKind, resource_group: &str) -> Vec<u8> {
        format!("{{\"resourceGroup\": \"{resource_group}\", \"query\": \"{kind}\"}}\n")
            .into_bytes()
    }
}

impl CloudClient for RecordingClient {
    fn query(&self, kind: QueryKind, resource_group: &str) -> Result<Vec<u8>, ExportError> {
        self.calls
            .borrow_mut()
            .push((resource_group.to_string(), kind));

        if self.failures.contains(&(resource_group.to_string(), kind)) {
            return Err(ExportError::ExternalCommandFailure {
                command: kind.command_line("az", resource_group),
                code: Some(1),
                stderr: format!("ERROR: Resource group '{resource_group}' could not be found.\n"),
            });
        }
        Ok(Self::canned_response(kind, resource_group))
    }
}
