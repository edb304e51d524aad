//! Per resource group export job and its fixed sub-exports.

use super::OutputRoot;
use crate::azure::QueryKind;
use crate::error::ExportError;
use std::path::{Path, PathBuf};

/// A query paired with the file suffix its output is saved under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubExport {
    pub kind: QueryKind,
    pub suffix: &'static str,
}

/// Every export run for a group, in execution order.
pub const SUB_EXPORTS: [SubExport; 9] = [
    SubExport {
        kind: QueryKind::Template,
        suffix: "template",
    },
    SubExport {
        kind: QueryKind::Resources,
        suffix: "resources",
    },
    SubExport {
        kind: QueryKind::Aks,
        suffix: "aks",
    },
    SubExport {
        kind: QueryKind::Nsgs,
        suffix: "nsgs",
    },
    SubExport {
        kind: QueryKind::Vnets,
        suffix: "vnets",
    },
    SubExport {
        kind: QueryKind::LoadBalancers,
        suffix: "lbs",
    },
    SubExport {
        kind: QueryKind::PublicIps,
        suffix: "public-ips",
    },
    SubExport {
        kind: QueryKind::Disks,
        suffix: "disks",
    },
    SubExport {
        kind: QueryKind::StorageAccounts,
        suffix: "storage-accounts",
    },
];

impl SubExport {
    /// `<group>-<suffix>.json`
    pub fn file_name(&self, resource_group: &str) -> String {
        format!("{resource_group}-{}.json", self.suffix)
    }
}

/// One resource group's export into `<root>/<group>/`.
#[derive(Debug)]
pub struct ExportJob<'a> {
    resource_group: &'a str,
    dir: PathBuf,
}

impl<'a> ExportJob<'a> {
    pub fn new(root: &OutputRoot, resource_group: &'a str) -> Self {
        ExportJob {
            resource_group,
            dir: root.path().join(resource_group),
        }
    }

    pub fn resource_group(&self) -> &str {
        self.resource_group
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Create the group directory; an existing one is reused.
    pub fn create_dir(&self) -> Result<(), ExportError> {
        std::fs::create_dir_all(&self.dir).map_err(|e| ExportError::io(&self.dir, e))
    }

    pub fn file_path(&self, sub: &SubExport) -> PathBuf {
        self.dir.join(sub.file_name(self.resource_group))
    }

    /// Save a query response, replacing any earlier file.
    pub fn write_output(&self, sub: &SubExport, data: &[u8]) -> Result<PathBuf, ExportError> {
        let path = self.file_path(sub);
        std::fs::write(&path, data).map_err(|e| ExportError::io(&path, e))?;
        log::debug!("Wrote {} bytes to {}", data.len(), path.display());
        Ok(path)
    }
}
