//! CLI argument definitions using clap

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "certwatch")]
#[command(version)]
#[command(about = "Monitor TLS certificate expiry for a set of hostnames", long_about = None)]
pub struct Cli {
    /// Hostnames to check
    #[arg(value_name = "HOST")]
    pub hosts: Vec<String>,

    /// Read hostnames from a file (one per line, '#' starts a comment)
    #[arg(short = 'f', long, value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Port to connect to (default: 443)
    #[arg(long, value_name = "PORT")]
    pub port: Option<u16>,

    /// Connection and handshake timeout in seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Days remaining below which a certificate counts as expiring soon
    #[arg(long, value_name = "DAYS")]
    pub threshold: Option<i64>,

    /// Number of hosts to check concurrently (1 = sequential)
    #[arg(long, value_name = "N")]
    pub parallel: Option<usize>,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Only show hosts that are expired, expiring, or failed
    #[arg(long)]
    pub issues_only: bool,

    /// Suppress output, report via exit code only
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Load settings from a TOML file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}
