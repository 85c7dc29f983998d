//! Clap argument types.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use siteconf::config::ConfigRecord;
use siteconf::constants::CONFIG_FILENAME;
use siteconf::output::RecordRenderer;

/// Scaffold and check maps/backend credential files.
#[derive(Parser, Debug)]
#[command(name = "siteconf", version = siteconf::constants::VERSION)]
pub struct Cli {
    /// Enable debug logging on stderr.
    #[arg(long, short = 'v', global = true, default_value_t = false)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Copy the template to a new credentials file.
    Init(InitArgs),

    /// Load the credentials file and report whether it is usable.
    Check(ConfigArgs),

    /// Print the loaded credentials.
    Show(ShowArgs),

    /// Print the template to stdout.
    Template,

    /// Print version information.
    Version,
}

/// Arguments for the `init` subcommand.
#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Where to write the new credentials file.
    #[arg(long, default_value = CONFIG_FILENAME)]
    pub path: PathBuf,

    /// Overwrite an existing file.
    #[arg(long, default_value_t = false)]
    pub force: bool,
}

/// Location of the credentials file.
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    /// Credentials file to load (`.json` or TOML).
    #[arg(long, short = 'c', default_value = CONFIG_FILENAME)]
    pub config: PathBuf,
}

/// Arguments for the `show` subcommand.
#[derive(Parser, Debug)]
pub struct ShowArgs {
    #[command(flatten)]
    pub source: ConfigArgs,

    /// Output format.
    #[arg(long, default_value = "terminal")]
    pub format: OutputFormat,

    /// Print API keys in clear text instead of redacting them.
    #[arg(long, default_value_t = false)]
    pub reveal: bool,
}

/// Output format options.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    Terminal,
    Json,
    Toml,
}

impl OutputFormat {
    /// Render a record using the renderer for this format.
    pub fn render(&self, record: &ConfigRecord) -> String {
        match self {
            OutputFormat::Terminal => siteconf::output::terminal::TerminalRenderer.render(record),
            OutputFormat::Json => siteconf::output::json::JsonRenderer.render(record),
            OutputFormat::Toml => siteconf::output::toml::TomlRenderer.render(record),
        }
    }
}
