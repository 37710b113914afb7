use std::path::PathBuf;

use clap::Parser;

/// Tabhost: a tabbed browser shell.
#[derive(Parser, Debug)]
#[command(name = "tabhost", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log filter override (e.g. `tabhost=debug`).
    #[arg(long)]
    pub log_level: Option<String>,
}

pub fn parse() -> Args {
    Args::parse()
}
