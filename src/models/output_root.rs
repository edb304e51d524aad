//! Timestamped top level output directory.

use crate::error::ExportError;
use chrono::NaiveDateTime;
use std::path::{Path, PathBuf};

pub const OUTPUT_ROOT_PREFIX: &str = "azure-export-";

/// `YYYYMMDD-HHMMSS`, second resolution.
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d-%H%M%S";

/// The `azure-export-<timestamp>` directory of one run.
#[derive(Debug, Clone)]
pub struct OutputRoot {
    path: PathBuf,
}

impl OutputRoot {
    pub fn name_for(started: &NaiveDateTime) -> String {
        format!("{OUTPUT_ROOT_PREFIX}{}", started.format(TIMESTAMP_FORMAT))
    }

    /// Create the root under `parent`.
    ///
    /// Fails if the directory already exists, e.g. a second run started in
    /// the same second.
    pub fn create(parent: &Path, started: &NaiveDateTime) -> Result<Self, ExportError> {
        std::fs::create_dir_all(parent).map_err(|e| ExportError::io(parent, e))?;
        let path = parent.join(Self::name_for(started));
        std::fs::create_dir(&path).map_err(|e| ExportError::io(&path, e))?;
        log::info!("Created output root {}", path.display());
        Ok(OutputRoot { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn started() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 7)
            .unwrap()
            .and_hms_opt(9, 5, 2)
            .unwrap()
    }

    #[test]
    fn test_name_for() {
        assert_eq!(OutputRoot::name_for(&started()), "azure-export-20240307-090502");
    }

    #[test]
    fn test_create_collision() {
        let tmp = tempfile::tempdir().unwrap();
        let root = OutputRoot::create(tmp.path(), &started()).unwrap();
        assert!(root.path().is_dir());

        let err = OutputRoot::create(tmp.path(), &started()).unwrap_err();
        assert!(matches!(err, ExportError::IoFailure { .. }));
    }
}
