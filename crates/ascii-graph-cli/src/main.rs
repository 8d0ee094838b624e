//! ascii-graph CLI - Extract graphs from ASCII-art diagrams

mod cli;

use ascii_graph::core::logging::init_logging;
use clap::Parser;

fn main() {
    let cli_args = cli::Cli::parse();

    // Environment variables win over flags, matching init_logging's own fallbacks
    let (level, format) = cli_args.logging_settings();
    if let Err(e) = init_logging(level.as_deref(), format.as_deref()) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    let app = cli::AsciiGraphApp::new();

    if let Err(e) = app.run(cli_args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
