//! Terminal input and progress output.

use crate::error::ExportError;
use crate::export::ExportReport;
use colored::Colorize;
use std::io::{BufRead, Write};
use std::path::Path;

/// Ask for resource group names and read one line of answer.
pub fn prompt_for_groups<R: BufRead, W: Write>(
    mut input: R,
    mut prompt: W,
) -> Result<String, ExportError> {
    write!(prompt, "Enter resource group names (space separated): ")
        .and_then(|_| prompt.flush())
        .map_err(|e| ExportError::io("<stdout>", e))?;

    let mut line = String::new();
    input
        .read_line(&mut line)
        .map_err(|e| ExportError::io("<stdin>", e))?;
    Ok(line)
}

pub fn group_started(resource_group: &str, index: usize, total: usize) {
    println!(
        "{} [{}/{}] Exporting resource group {}",
        "==>".blue(),
        index + 1,
        total,
        resource_group.bold()
    );
}

pub fn sub_export_started(resource_group: &str, suffix: &str) {
    println!("    exporting {suffix} for {resource_group} ...");
}

pub fn sub_export_done(path: &Path, len: usize) {
    println!("    {} {} ({len} bytes)", "saved".green(), path.display());
}

pub fn group_failed(resource_group: &str, error: &ExportError) {
    println!(
        "{} {resource_group}: {error}, continuing with next group",
        "FAILED".on_red()
    );
}

pub fn print_summary(report: &ExportReport, location: &str) {
    println!();
    if report.is_success() {
        println!("{}", "Export complete".green().bold());
    } else {
        println!("{}", "Export finished with failures".red().bold());
    }
    println!("{}", report.summary(location));
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_prompt_reads_one_line() {
        let mut prompt = Vec::new();
        let line = prompt_for_groups(Cursor::new("rg1 rg2\nrg3\n"), &mut prompt).unwrap();
        assert_eq!(line, "rg1 rg2\n");
        assert!(String::from_utf8(prompt)
            .unwrap()
            .starts_with("Enter resource group names"));
    }

    #[test]
    fn test_prompt_at_eof() {
        let line = prompt_for_groups(Cursor::new(""), Vec::new()).unwrap();
        assert_eq!(line, "");
    }
}
