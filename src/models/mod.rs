//! Domain models for resource group export.
//!
//! - [`ExportRequest`] - The resource groups asked for
//! - [`OutputRoot`] - The timestamped output directory
//! - [`ExportJob`] and [`SubExport`] - One group's export and its fixed steps

mod job;
mod output_root;
mod request;

// Re-export public types
pub use job::{ExportJob, SubExport, SUB_EXPORTS};
pub use output_root::{OutputRoot, OUTPUT_ROOT_PREFIX, TIMESTAMP_FORMAT};
pub use request::ExportRequest;
