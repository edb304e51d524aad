//! Command line arguments.

use crate::config::{self, Config};
use chrono_tz::Tz;
use clap::builder::BoolishValueParser;
use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Export Azure resource group templates and resource listings to JSON files.
#[derive(Parser, Debug)]
#[command(name = "azure-rg-export")]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Resource groups to export; prompted for on stdin when omitted
    pub groups: Vec<String>,

    /// Directory the azure-export-<timestamp> folder is created in
    #[arg(short, long, default_value = ".", env = "AZ_EXPORT_OUTPUT_DIR")]
    pub output_dir: PathBuf,

    /// Keep exporting the remaining groups after one fails
    #[arg(
        long,
        env = "AZ_EXPORT_CONTINUE_ON_ERROR",
        action = ArgAction::SetTrue,
        value_parser = BoolishValueParser::new()
    )]
    pub continue_on_error: bool,

    /// Azure CLI program
    #[arg(long = "az", default_value = config::DEFAULT_AZ_BIN, env = "AZ_EXPORT_AZ_BIN")]
    pub az_bin: String,

    /// Largest response accepted from a single query, in bytes
    #[arg(long, default_value_t = config::DEFAULT_MAX_OUTPUT_BYTES, env = "AZ_EXPORT_MAX_OUTPUT_BYTES")]
    pub max_output_bytes: usize,

    /// Timezone for the output folder timestamp, e.g. Pacific/Auckland (default: local time)
    #[arg(long, value_parser = config::parse_timezone, env = "AZ_EXPORT_TZ")]
    pub timezone: Option<Tz>,

    /// Location shown in the recreate instructions
    #[arg(long, default_value = config::DEFAULT_LOCATION, env = "AZ_EXPORT_LOCATION")]
    pub location: String,

    /// log4rs configuration file
    #[arg(long, default_value = config::DEFAULT_LOG_CONFIG, env = "AZ_EXPORT_LOG_CONFIG")]
    pub log_config: PathBuf,
}

impl Args {
    pub fn config(&self) -> Config {
        Config {
            output_dir: self.output_dir.clone(),
            continue_on_error: self.continue_on_error,
            az_bin: self.az_bin.clone(),
            max_output_bytes: self.max_output_bytes,
            timezone: self.timezone,
            location: self.location.clone(),
        }
    }

    /// Groups from the command line as one request line, if any were given.
    pub fn request_line(&self) -> Option<String> {
        if self.groups.is_empty() {
            None
        } else {
            Some(self.groups.join(" "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["azure-rg-export"]).unwrap();
        assert!(args.request_line().is_none());
        let config = args.config();
        assert_eq!(config.az_bin, "az");
        assert_eq!(config.max_output_bytes, config::DEFAULT_MAX_OUTPUT_BYTES);
        assert!(config.timezone.is_none());
    }

    #[test]
    fn test_groups_and_flags() {
        let args = Args::try_parse_from([
            "azure-rg-export",
            "--continue-on-error",
            "--timezone",
            "Pacific/Auckland",
            "-o",
            "/tmp/backups",
            "rg1",
            "rg2",
        ])
        .unwrap();
        assert_eq!(args.request_line().as_deref(), Some("rg1 rg2"));
        let config = args.config();
        assert!(config.continue_on_error);
        assert_eq!(config.timezone, Some(chrono_tz::Pacific::Auckland));
        assert_eq!(config.output_dir, PathBuf::from("/tmp/backups"));
    }

    #[test]
    fn test_rejects_unknown_timezone() {
        assert!(Args::try_parse_from(["azure-rg-export", "--timezone", "Nowhere/Town"]).is_err());
    }

    #[test]
    fn test_continue_on_error_from_env() {
        let cases = [
            ("1", true),
            ("yes", true),
            ("true", true),
            ("0", false),
            ("no", false),
        ];
        for (value, expected) in cases {
            std::env::set_var("AZ_EXPORT_CONTINUE_ON_ERROR", value);
            let args = Args::try_parse_from(["azure-rg-export"]);
            std::env::remove_var("AZ_EXPORT_CONTINUE_ON_ERROR");
            let args = args.unwrap_or_else(|e| panic!("{value:?} rejected: {e}"));
            assert_eq!(args.continue_on_error, expected, "value {value:?}");
        }
    }
}
