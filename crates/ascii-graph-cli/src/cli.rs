//! Command-line interface for the ascii-graph utility
//!
//! Reads an ASCII-art diagram from a file or stdin and prints the extracted
//! graph.

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use tracing::debug;

use ascii_graph::core::logging::{LOG_FORMAT_ENV, LOG_LEVEL_ENV};
use ascii_graph::{Database, GraphDatabase};

/// ascii-graph - Extract graphs from ASCII-art diagrams
#[derive(Parser)]
#[command(name = "ascii-graph")]
#[command(about = "A Rust utility to extract graphs from ASCII-art diagrams")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Set log level (trace|debug|info|warn|error)
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Set log format (compact|pretty|json)
    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

impl Cli {
    /// Log level and format, with environment variables taking precedence
    pub fn logging_settings(&self) -> (Option<String>, Option<String>) {
        let level = std::env::var(LOG_LEVEL_ENV)
            .ok()
            .or_else(|| std::env::var("RUST_LOG").ok())
            .or_else(|| Some(self.log_level.as_str().to_string()));

        let format = std::env::var(LOG_FORMAT_ENV)
            .ok()
            .or_else(|| Some(self.log_format.as_str().to_string()));

        (level, format)
    }
}

/// Log level options
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

/// Log format options
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Pretty,
    Json,
}

impl LogFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogFormat::Compact => "compact",
            LogFormat::Pretty => "pretty",
            LogFormat::Json => "json",
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Extract the graph of a diagram
    Convert {
        /// Input file containing the diagram (use - for stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output file for the graph (use - for stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Check that every line in a diagram ends at a word
    Validate {
        /// Input file to validate (use - for stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,
    },

    /// List the words of a diagram with their positions
    Words {
        /// Input file to scan (use - for stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Show in JSON format
        #[arg(long)]
        json: bool,
    },
}

/// Supported graph output formats
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One line per node: `row,column "text" -> row,column "text" @angle; ...`
    #[default]
    Text,
    /// Array of `{ node, neighbors }` entries
    Json,
}

/// Render a graph in the human-readable line format
pub fn format_text(database: &GraphDatabase) -> String {
    database
        .entries()
        .iter()
        .map(|entry| {
            let neighbors: Vec<String> =
                entry.neighbors.iter().map(|neighbor| neighbor.to_string()).collect();
            format!("{} -> {}", entry.node, neighbors.join("; "))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render a graph as pretty-printed JSON
pub fn format_json(database: &GraphDatabase) -> Result<String> {
    serde_json::to_string_pretty(&database.entries()).context("Failed to serialize graph")
}

/// Main CLI application
#[derive(Debug, Default)]
pub struct AsciiGraphApp;

impl AsciiGraphApp {
    /// Create a new application instance
    pub fn new() -> Self {
        Self
    }

    /// Run the application with the given CLI arguments
    pub fn run(&self, cli: Cli) -> Result<()> {
        if cli.verbose {
            eprintln!("ascii-graph v{}", env!("CARGO_PKG_VERSION"));
        }

        match cli.command {
            Commands::Convert {
                input,
                output,
                format,
            } => self.convert_command(input, output, format, cli.verbose),
            Commands::Validate { input } => self.validate_command(input, cli.verbose),
            Commands::Words { input, json } => self.words_command(input, json, cli.verbose),
        }
    }

    /// Extract a graph and render it in the requested format
    pub fn convert(&self, content: &str, format: OutputFormat) -> Result<String> {
        let database = ascii_graph::parse(content)?;
        debug!(
            node_count = database.node_count(),
            edge_count = database.edge_count(),
            "Converted diagram"
        );

        match format {
            OutputFormat::Text => Ok(format_text(&database)),
            OutputFormat::Json => format_json(&database),
        }
    }

    /// Handle the convert command
    fn convert_command(
        &self,
        input: Option<PathBuf>,
        output: Option<PathBuf>,
        format: OutputFormat,
        verbose: bool,
    ) -> Result<()> {
        let content = self.read_input(input)?;

        if verbose {
            eprintln!("Read {} bytes of input", content.len());
        }

        let rendered = self.convert(&content, format)?;

        if verbose {
            eprintln!("Successfully extracted graph");
        }

        self.write_output(output, &rendered)
    }

    /// Handle the validate command
    fn validate_command(&self, input: Option<PathBuf>, verbose: bool) -> Result<()> {
        let content = self.read_input(input)?;

        if verbose {
            eprintln!("Read {} bytes of input", content.len());
        }

        match ascii_graph::parse(&content) {
            Ok(database) => {
                println!(
                    "✓ Valid diagram: {} nodes, {} edges",
                    database.node_count(),
                    database.edge_count()
                );
                Ok(())
            }
            Err(e) => {
                println!("✗ Invalid diagram: {}", e);
                Err(e.into())
            }
        }
    }

    /// Handle the words command
    fn words_command(&self, input: Option<PathBuf>, json: bool, verbose: bool) -> Result<()> {
        let content = self.read_input(input)?;
        let words = ascii_graph::words(&content)?;

        if verbose {
            eprintln!("Located {} words", words.len());
        }

        if json {
            let rendered = serde_json::to_string_pretty(words.words())
                .context("Failed to serialize words")?;
            println!("{}", rendered);
        } else {
            for word in words.words() {
                println!("{}", word);
            }
        }
        Ok(())
    }

    /// Read input from file or stdin
    pub fn read_input(&self, input: Option<PathBuf>) -> Result<String> {
        match input {
            Some(path) if path.to_string_lossy() != "-" => fs::read_to_string(&path)
                .map_err(|e| anyhow!("Failed to read input file '{}': {}", path.display(), e)),
            _ => {
                let mut content = String::new();
                io::stdin().read_to_string(&mut content)?;
                Ok(content)
            }
        }
    }

    /// Write output to file or stdout
    pub fn write_output(&self, output: Option<PathBuf>, content: &str) -> Result<()> {
        match output {
            Some(path) if path.to_string_lossy() != "-" => {
                fs::write(&path, content).map_err(|e| {
                    anyhow!("Failed to write output file '{}': {}", path.display(), e)
                })?;
            }
            _ => {
                let mut stdout = io::stdout();
                if content.is_empty() || content.ends_with('\n') {
                    write!(stdout, "{}", content)?;
                } else {
                    writeln!(stdout, "{}", content)?;
                }
                stdout.flush()?;
            }
        }
        Ok(())
    }
}
