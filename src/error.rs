//! Error types for the export run.

use std::path::PathBuf;
use thiserror::Error;

/// Broad classification of an [`ExportError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NoInput,
    InvalidInput,
    IoFailure,
    ExternalCommandFailure,
}

/// Everything that can stop an export.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The input line held no resource group names.
    #[error("no resource group names given")]
    NoInput,

    /// A name that is not a single directory name, e.g. `a/b` or `/tmp/x`.
    #[error("invalid resource group name '{0}'")]
    InvalidGroupName(String),

    /// A directory or output file could not be created.
    #[error("failed to write {}: {source}", path.display())]
    IoFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The external query exited with a non-zero status.
    #[error("'{command}' failed (exit code {})", code.map_or("none".to_string(), |c| c.to_string()))]
    ExternalCommandFailure {
        command: String,
        code: Option<i32>,
        stderr: String,
    },

    /// The external program could not be started at all.
    #[error("failed to execute '{command}': {source}")]
    Launch {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("response too large: {len} bytes (limit {limit}) for '{command}'")]
    OutputTooLarge {
        command: String,
        len: usize,
        limit: usize,
    },
}

impl ExportError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ExportError::IoFailure {
            path: path.into(),
            source,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ExportError::NoInput => ErrorKind::NoInput,
            ExportError::InvalidGroupName(_) => ErrorKind::InvalidInput,
            ExportError::IoFailure { .. } => ErrorKind::IoFailure,
            ExportError::ExternalCommandFailure { .. }
            | ExportError::Launch { .. }
            | ExportError::OutputTooLarge { .. } => ErrorKind::ExternalCommandFailure,
        }
    }

    /// Process exit status for this error.
    ///
    /// A failed query passes its own exit code through, the way a shell
    /// running with `set -e` would.
    pub fn exit_code(&self) -> i32 {
        match self {
            ExportError::ExternalCommandFailure {
                code: Some(code), ..
            } if *code != 0 => *code,
            _ => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_groups_command_errors() {
        let launch = ExportError::Launch {
            command: "az".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(launch.kind(), ErrorKind::ExternalCommandFailure);

        let too_large = ExportError::OutputTooLarge {
            command: "az".to_string(),
            len: 10,
            limit: 5,
        };
        assert_eq!(too_large.kind(), ErrorKind::ExternalCommandFailure);
        assert_eq!(ExportError::NoInput.kind(), ErrorKind::NoInput);
    }

    #[test]
    fn test_exit_code_passes_through_command_status() {
        let err = ExportError::ExternalCommandFailure {
            command: "az aks list".to_string(),
            code: Some(3),
            stderr: "ERROR: boom".to_string(),
        };
        assert_eq!(err.exit_code(), 3);

        let killed = ExportError::ExternalCommandFailure {
            command: "az aks list".to_string(),
            code: None,
            stderr: String::new(),
        };
        assert_eq!(killed.exit_code(), 1);
        assert_eq!(ExportError::NoInput.exit_code(), 1);
    }

    #[test]
    fn test_display_includes_path() {
        let err = ExportError::io(
            "/tmp/x",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(err.to_string(), "failed to write /tmp/x: denied");
    }
}
