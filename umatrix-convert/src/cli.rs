use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "umatrix-convert")]
#[command(about = "Convert browser add-on exports to uMatrix rules")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Convert add-on exports into a uMatrix rules file.
    Convert(ConvertArgs),
    /// Show parsed sections of a single export.
    Inspect(InspectArgs),
}

#[derive(Parser, Debug)]
pub struct ConvertArgs {
    /// Output rules file, shared by every input of the session.
    #[arg(short, long)]
    pub output: PathBuf,
    /// Firefox permissions.sqlite holding Cookie Monster data.
    #[arg(long)]
    pub permissions: Option<PathBuf>,
    /// RequestPolicy settings export.
    #[arg(long)]
    pub request_policy: Option<PathBuf>,
    /// NoScript whitelist export.
    #[arg(long)]
    pub noscript: Option<PathBuf>,
    /// Emit per-type RequestPolicy rules instead of wildcard-type rules.
    #[arg(long)]
    pub advanced: bool,
    /// Append to an existing output file instead of replacing it.
    #[arg(long)]
    pub append: bool,
    /// Delete the output file if any input fails to convert.
    #[arg(long)]
    pub discard_on_error: bool,
    /// Output format for the session summary.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Parser, Debug)]
pub struct InspectArgs {
    /// Export file to inspect.
    pub file: PathBuf,
    /// Format of the export.
    #[arg(long, value_enum)]
    pub source: Source,
    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
    /// List entries, not just per-section counts.
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum, PartialEq, Eq)]
pub enum Source {
    RequestPolicy,
    Noscript,
    CookieMonster,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
