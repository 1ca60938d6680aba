//! CLI argument parsing and configuration.

use std::io;
use std::path::PathBuf;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Configuration from CLI arguments
pub struct CliConfig {
    /// Sprint file to load. None means the bundled sample.
    pub sprint_file: Option<PathBuf>,
    /// Whether to watch the sprint file for changes.
    pub watch: bool,
}

/// Print usage information
pub fn print_usage() {
    eprintln!("Sprint TUI - Terminal dashboard for sprint velocity and capacity");
    eprintln!();
    eprintln!("Usage: sprint-tui [sprint-file] [OPTIONS]");
    eprintln!();
    eprintln!("Arguments:");
    eprintln!("  [sprint-file]  Path to a sprint JSON file");
    eprintln!("                 If omitted, shows the bundled sample sprint");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --no-watch     Do not reload when the sprint file changes");
    eprintln!("  -h, --help     Show this help message");
    eprintln!("  -V, --version  Show version");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  sprint-tui                        # Browse the sample sprint");
    eprintln!("  sprint-tui team/sprint-24-12.json # Load a sprint export");
    eprintln!("  sprint-tui sprint.json --no-watch # Ignore file changes");
}

/// Parse CLI arguments and return configuration
pub fn parse_args() -> io::Result<CliConfig> {
    let args: Vec<String> = std::env::args().collect();
    let mut sprint_file: Option<PathBuf> = None;
    let mut watch = true;

    let mut i = 1;
    while i < args.len() {
        let arg = &args[i];
        if arg == "-h" || arg == "--help" {
            print_usage();
            std::process::exit(0);
        } else if arg == "-V" || arg == "--version" {
            println!("sprint-tui {}", VERSION);
            std::process::exit(0);
        } else if arg == "--no-watch" {
            watch = false;
            i += 1;
        } else if !arg.starts_with('-') {
            if sprint_file.is_some() {
                print_usage();
                return Err(io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("Unexpected extra argument: {}", arg),
                ));
            }
            sprint_file = Some(PathBuf::from(arg));
            i += 1;
        } else {
            print_usage();
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Unknown argument: {}", arg),
            ));
        }
    }

    Ok(CliConfig { sprint_file, watch })
}
