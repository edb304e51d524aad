//! Runtime configuration.

use chrono::NaiveDateTime;
use chrono_tz::Tz;
use std::path::PathBuf;

/// Default Azure CLI program.
pub const DEFAULT_AZ_BIN: &str = "az";

/// Largest stdout accepted from a single query (64 MiB).
pub const DEFAULT_MAX_OUTPUT_BYTES: usize = 64 * 1024 * 1024;

/// Placeholder shown in the recreate hint when no location is configured.
pub const DEFAULT_LOCATION: &str = "<location>";

pub const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";

#[derive(Debug, Clone)]
pub struct Config {
    /// Directory the timestamped output root is created in.
    pub output_dir: PathBuf,
    /// Record a failed group and move on instead of aborting the run.
    pub continue_on_error: bool,
    pub az_bin: String,
    pub max_output_bytes: usize,
    /// Zone used for the output root timestamp, local time when unset.
    pub timezone: Option<Tz>,
    pub location: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            output_dir: PathBuf::from("."),
            continue_on_error: false,
            az_bin: DEFAULT_AZ_BIN.to_string(),
            max_output_bytes: DEFAULT_MAX_OUTPUT_BYTES,
            timezone: None,
            location: DEFAULT_LOCATION.to_string(),
        }
    }
}

impl Config {
    /// Wall clock time used to name the output root.
    pub fn now(&self) -> NaiveDateTime {
        match self.timezone {
            Some(tz) => chrono::Utc::now().with_timezone(&tz).naive_local(),
            None => chrono::Local::now().naive_local(),
        }
    }
}

/// Parse an IANA zone name such as `Pacific/Auckland`.
pub fn parse_timezone(name: &str) -> Result<Tz, String> {
    name.parse::<Tz>().map_err(|_| format!("unknown timezone '{name}'"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_timezone() {
        assert_eq!(
            parse_timezone("Pacific/Auckland"),
            Ok(chrono_tz::Pacific::Auckland)
        );
        assert!(parse_timezone("Mars/Olympus_Mons").is_err());
    }

    #[test]
    fn test_default_is_fail_fast() {
        let config = Config::default();
        assert!(!config.continue_on_error);
        assert_eq!(config.az_bin, "az");
        assert_eq!(config.output_dir, PathBuf::from("."));
    }
}
