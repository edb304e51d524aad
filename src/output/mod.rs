//! Console output for the export run.
//!
//! - [`terminal`] - Prompt, progress lines and the closing summary

pub mod terminal;

pub use terminal::{print_summary, prompt_for_groups};
