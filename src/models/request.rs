//! The list of resource groups to export.

use crate::error::ExportError;
use std::path::{Component, Path};

/// Resource group names in the order they were given.
///
/// Duplicates are kept; exporting the same group twice overwrites the first
/// export's files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRequest {
    groups: Vec<String>,
}

impl ExportRequest {
    /// Split a whitespace separated line into group names.
    ///
    /// Every name must be a single plain directory name so its export stays
    /// inside the output root.
    pub fn parse(line: &str) -> Result<Self, ExportError> {
        let groups: Vec<String> = line.split_whitespace().map(str::to_string).collect();
        if groups.is_empty() {
            return Err(ExportError::NoInput);
        }
        if let Some(bad) = groups.iter().find(|g| !is_plain_name(g)) {
            return Err(ExportError::InvalidGroupName(bad.clone()));
        }
        Ok(ExportRequest { groups })
    }

    pub fn groups(&self) -> &[String] {
        &self.groups
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// Exactly one normal path component: no separators, `.`, `..` or roots.
fn is_plain_name(name: &str) -> bool {
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(c)), None) if c == name
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_keeps_order_and_duplicates() {
        let request = ExportRequest::parse("  rg-b rg-a\trg-b \n").unwrap();
        assert_eq!(request.groups(), ["rg-b", "rg-a", "rg-b"]);
        assert_eq!(request.len(), 3);
    }

    #[test]
    fn test_parse_empty_line() {
        assert!(matches!(ExportRequest::parse(""), Err(ExportError::NoInput)));
        assert!(matches!(
            ExportRequest::parse(" \t \n"),
            Err(ExportError::NoInput)
        ));
    }

    #[test]
    fn test_parse_rejects_paths() {
        for line in ["/tmp/x", "rg1 a/b", "..", ".", "rg1 ./rg2", "rg1/"] {
            match ExportRequest::parse(line) {
                Err(ExportError::InvalidGroupName(_)) => {}
                other => panic!("{line:?} should be rejected, got {other:?}"),
            }
        }
        assert!(ExportRequest::parse("rg.prod rg_2 (legacy)").is_ok());
    }
}
