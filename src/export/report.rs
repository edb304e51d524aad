//! Export results and the closing summary.

use crate::error::ExportError;
use crate::models::SUB_EXPORTS;
use std::path::{Path, PathBuf};

/// A group whose export stopped early in continue-on-error mode.
#[derive(Debug)]
pub struct GroupFailure {
    pub resource_group: String,
    pub error: ExportError,
}

/// Outcome of a whole run.
#[derive(Debug)]
pub struct ExportReport {
    root: PathBuf,
    /// Exported groups with the files written for each.
    pub exported: Vec<(String, Vec<PathBuf>)>,
    pub failures: Vec<GroupFailure>,
}

impl ExportReport {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        ExportReport {
            root: root.into(),
            exported: Vec::new(),
            failures: Vec::new(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn record_success(&mut self, resource_group: &str, files: Vec<PathBuf>) {
        self.exported.push((resource_group.to_string(), files));
    }

    pub fn record_failure(&mut self, resource_group: &str, error: ExportError) {
        self.failures.push(GroupFailure {
            resource_group: resource_group.to_string(),
            error,
        });
    }

    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    /// Process exit status: 1 when any group failed in continue-on-error mode.
    pub fn exit_code(&self) -> i32 {
        if self.is_success() {
            0
        } else {
            1
        }
    }

    /// Summary text: the file layout of each group and how to redeploy one.
    pub fn summary(&self, location: &str) -> String {
        let root = self.root.display();
        let mut lines = vec![format!("Exports written to {root}/"), String::new()];

        lines.push("Files per resource group:".to_string());
        for sub in SUB_EXPORTS.iter() {
            lines.push(format!(
                "  {root}/<resource-group>/{}",
                sub.file_name("<resource-group>")
            ));
        }

        lines.push(String::new());
        lines.push("To recreate a resource group from its template:".to_string());
        lines.push(format!(
            "  az group create --name <resource-group> --location {location}"
        ));
        lines.push(format!(
            "  az deployment group create --resource-group <resource-group> --template-file {root}/<resource-group>/<resource-group>-template.json"
        ));

        if !self.failures.is_empty() {
            lines.push(String::new());
            lines.push(format!("{} resource group(s) failed:", self.failures.len()));
            for failure in &self.failures {
                lines.push(format!("  {}: {}", failure.resource_group, failure.error));
            }
        }

        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_lists_each_pattern_once() {
        let report = ExportReport::new("azure-export-20240101-000000");
        let summary = report.summary("westeurope");

        for sub in SUB_EXPORTS.iter() {
            let line = format!(
                "  azure-export-20240101-000000/<resource-group>/<resource-group>-{}.json",
                sub.suffix
            );
            assert_eq!(
                summary.lines().filter(|l| *l == line).count(),
                1,
                "pattern for {} should appear once",
                sub.suffix
            );
        }
        assert!(summary.contains("--location westeurope"));
        assert!(summary.contains("az deployment group create"));
        assert!(!summary.contains("failed"));
    }

    #[test]
    fn test_summary_lists_failures() {
        let mut report = ExportReport::new("root");
        assert_eq!(report.exit_code(), 0);
        report.record_failure(
            "rg-x",
            ExportError::ExternalCommandFailure {
                command: "az aks list".to_string(),
                code: Some(3),
                stderr: String::new(),
            },
        );
        assert!(!report.is_success());
        assert_eq!(report.exit_code(), 1);
        assert!(report.summary("<location>").contains("  rg-x: "));
    }
}
