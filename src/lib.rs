// cargo watch -x 'fmt' -x 'run'  // 'run -- rg-one rg-two'

pub mod args;
pub mod azure;
pub mod config;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod output;

pub use config::Config;
pub use error::{ErrorKind, ExportError};
pub use export::{ExportReport, Orchestrator};
