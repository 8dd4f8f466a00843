use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(
    name = "exoshape-tools",
    version,
    about = "Locate and validate the external tools used by the exoShape pipeline"
)]
pub struct Cli {
    /// Alternate config file (default: config/tools.toml)
    #[arg(long)]
    pub config: Option<String>,
    #[arg(long, short, value_enum, default_value_t = RunMode::Check)]
    pub mode: RunMode,
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum RunMode {
    /// Load the configuration and verify every tool path on disk
    Check,
    /// Print the effective configuration as TOML
    Show,
    /// Write a starter config file populated with the built-in defaults
    Init,
}
