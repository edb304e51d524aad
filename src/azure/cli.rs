//! Azure CLI command execution.
//!
//! Provides utilities for running Azure CLI commands and capturing their output.

use crate::error::ExportError;
use colored::Colorize;
use regex::Regex;
use std::process::Command;
use std::sync::OnceLock;

/// Regex for splitting command strings while preserving quoted substrings.
static COMMAND_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_command_regex() -> &'static Regex {
    COMMAND_REGEX.get_or_init(|| {
        Regex::new(r#"'([^']*)'\s*|\"([^\"]*)\"\s*|([^'\s]*)\s*"#).expect("Invalid Regex")
    })
}

/// Run a command and return its stdout verbatim.
///
/// The command string is split on spaces, with quoted substrings preserved.
/// On a non-zero exit the command's stderr is relayed unchanged to our own
/// stderr and returned inside the error.
///
/// # Arguments
/// * `cmd` - The command string to execute
/// * `max_output_bytes` - Reject responses larger than this
pub fn run(cmd: &str, max_output_bytes: usize) -> Result<Vec<u8>, ExportError> {
    log::debug!("run({cmd})", cmd = cmd.on_blue());

    let cmds: Vec<&str> = split_and_strip(cmd);
    log::trace!("split cmds={:?}", cmds);

    let (program, args) = match cmds.split_first() {
        Some((program, args)) if !program.is_empty() => (program, args),
        _ => {
            return Err(ExportError::Launch {
                command: cmd.to_string(),
                source: std::io::Error::new(std::io::ErrorKind::InvalidInput, "empty command"),
            })
        }
    };

    let output = Command::new(program).args(args).output().map_err(|e| {
        log::error!("Command execution failed: {}", e);
        ExportError::Launch {
            command: cmd.to_string(),
            source: e,
        }
    })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
        log::trace!(
            "code={code:?}, status={status}\n┎######\nstderr=\n{stderr}\n┖######",
            code = output.status.code(),
            status = output.status,
            stderr = stderr.red()
        );
        log::warn!(
            "{failed} to run {cmd}",
            failed = "failed".on_red(),
            cmd = cmd.on_blue()
        );
        eprint!("{stderr}");
        return Err(ExportError::ExternalCommandFailure {
            command: cmd.to_string(),
            code: output.status.code(),
            stderr,
        });
    }

    log::debug!("Success cmd: {cmd}");
    log::debug!("Success output.stdout.len(): {}", output.stdout.len());

    if output.stdout.len() > max_output_bytes {
        return Err(ExportError::OutputTooLarge {
            command: cmd.to_string(),
            len: output.stdout.len(),
            limit: max_output_bytes,
        });
    }

    Ok(output.stdout)
}

/// Split a command string on spaces, preserving quoted substrings.
fn split_and_strip(input: &str) -> Vec<&str> {
    get_command_regex()
        .find_iter(input)
        .map(|m| m.as_str().trim().trim_matches('\'').trim_matches('"'))
        .collect()
}
