use crate::types::{DemoName, LogLevel, OutputFormat};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "a2ui")]
#[command(about = "Lint and emit A2UI message streams", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (default: $A2UI_CONFIG, then <config dir>/a2ui/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level for stderr diagnostics (default: $RUST_LOG, else warn)
    #[arg(long, global = true)]
    pub log_level: Option<LogLevel>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate every component snapshot in a JSONL message stream
    Lint {
        /// Input file, or "-" for stdin
        #[arg(default_value = "-")]
        input: String,

        #[arg(long, default_value = "plain")]
        format: OutputFormat,
    },

    /// Print a sample surface as a message stream
    Demo {
        name: DemoName,

        /// Indented output for reading (not valid JSONL)
        #[arg(long)]
        pretty: bool,

        /// Pause between streaming stages
        #[arg(long, default_value = "0")]
        delay_ms: u64,
    },
}
