//! CLI module - argument parsing, interactive prompts and the conversion run

pub mod args;
pub mod convert;
pub mod prompts;

pub use args::{default_output_name, Cli, RunConfig};
pub use convert::run_convert;
pub use prompts::*;
