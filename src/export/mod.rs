//! Export orchestration.
//!
//! - [`orchestrator`] - The per group export loop
//! - [`report`] - Run results and the closing summary

mod orchestrator;
mod report;

pub use orchestrator::Orchestrator;
pub use report::{ExportReport, GroupFailure};
