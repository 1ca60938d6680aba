//! CLI argument parsing for sprint-tui.

mod args;

pub use args::{parse_args, CliConfig};
