//! Runs the fixed export sequence for every requested resource group.

use super::ExportReport;
use crate::azure::CloudClient;
use crate::config::Config;
use crate::error::ExportError;
use crate::models::{ExportJob, ExportRequest, OutputRoot, SUB_EXPORTS};
use crate::output::terminal;
use chrono::NaiveDateTime;
use colored::Colorize;
use std::path::PathBuf;

/// Drives an export against an injected [`CloudClient`].
pub struct Orchestrator<C: CloudClient> {
    client: C,
    config: Config,
}

impl<C: CloudClient> Orchestrator<C> {
    pub fn new(client: C, config: Config) -> Self {
        Orchestrator { client, config }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// Export every group named in `request_line` into a new output root.
    pub fn run(&self, request_line: &str) -> Result<ExportReport, ExportError> {
        self.run_at(request_line, self.config.now())
    }

    /// Same as [`Orchestrator::run`] with an explicit start time.
    ///
    /// Groups are exported one after the other in input order. The first
    /// failure ends the run unless `continue_on_error` is set, in which case
    /// the failing group is recorded and the next group starts. Files that
    /// were already written stay on disk either way.
    pub fn run_at(
        &self,
        request_line: &str,
        started: NaiveDateTime,
    ) -> Result<ExportReport, ExportError> {
        let request = ExportRequest::parse(request_line)?;
        log::info!(
            "#Start export of {} resource group(s): {:?}",
            request.len(),
            request.groups()
        );

        let root = OutputRoot::create(&self.config.output_dir, &started)?;
        let mut report = ExportReport::new(root.path());

        for (i, group) in request.groups().iter().enumerate() {
            terminal::group_started(group, i, request.len());
            let job = ExportJob::new(&root, group);

            match self.export_group(&job) {
                Ok(files) => report.record_success(group, files),
                Err(e) if self.config.continue_on_error => {
                    log::error!(
                        "{failed} export of {group}: {e}",
                        failed = "failed".on_red()
                    );
                    terminal::group_failed(group, &e);
                    report.record_failure(group, e);
                }
                Err(e) => {
                    log::error!("Aborting export at {group}: {e}");
                    return Err(e);
                }
            }
        }

        log::info!(
            "Export done: {} ok, {} failed, root={}",
            report.exported.len(),
            report.failures.len(),
            report.root().display()
        );
        Ok(report)
    }

    fn export_group(&self, job: &ExportJob) -> Result<Vec<PathBuf>, ExportError> {
        job.create_dir()?;

        let group = job.resource_group();
        let mut files = Vec::with_capacity(SUB_EXPORTS.len());
        for sub in SUB_EXPORTS.iter() {
            terminal::sub_export_started(group, sub.suffix);
            let data = self.client.query(sub.kind, group)?;
            let path = job.write_output(sub, &data)?;
            terminal::sub_export_done(&path, data.len());
            files.push(path);
        }
        Ok(files)
    }
}
