//! CLI argument definitions for the txguard binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::output::OutputFormat;

/// Output format flag
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Format {
    /// Aligned tables and plain messages
    Human,
    /// The JSON records the dialogue engine receives
    Json,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Human => OutputFormat::Human,
            Format::Json => OutputFormat::Json,
        }
    }
}

/// txguard: authorization gate for a transaction-reading assistant
#[derive(Parser, Debug)]
#[command(name = "txguard")]
#[command(about = "Call the banking assistant's tools through the txguard access gate")]
#[command(version)]
pub struct Cli {
    /// JSON store file. The sample bank is used when omitted or missing.
    #[arg(short = 'D', long, global = true, env = "TXGUARD_DATA")]
    pub data: Option<PathBuf>,

    /// Owner id the session is logged in as
    #[arg(short, long, global = true, default_value_t = 1, env = "TXGUARD_USER")]
    pub user: u64,

    /// Output format
    #[arg(short, long, global = true, default_value = "human")]
    pub format: Format,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Invoke a tool the way the dialogue engine would
    Call(CallArgs),
    /// List the tools advertised to the dialogue engine
    Tools,
    /// List the users in the store
    Users,
    /// Show the validation verdict for an argument without touching the store
    Check(CheckArgs),
    /// Write the sample bank to a JSON store file
    InitData(InitDataArgs),
}

/// Arguments for the call command
#[derive(clap::Args, Debug)]
pub struct CallArgs {
    /// Tool name (GetCurrentUser or GetUserTransactions)
    pub tool: String,

    /// Raw argument forwarded to the tool, untrusted
    #[arg(default_value = "")]
    pub input: String,
}

/// Arguments for the check command
#[derive(clap::Args, Debug)]
pub struct CheckArgs {
    /// Raw argument to classify
    pub input: String,
}

/// Arguments for the init-data command
#[derive(clap::Args, Debug)]
pub struct InitDataArgs {
    /// Destination file
    pub path: PathBuf,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}
