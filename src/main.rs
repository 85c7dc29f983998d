//! siteconf — credential file scaffolding and checks.
//!
//! Entry point and error handling boundary. Uses `anyhow` for
//! ergonomic error propagation and user-facing messages.

mod cli;

use siteconf::config;
use siteconf::constants;
use siteconf::logging;

use std::process;

use anyhow::{Context, Result};
use clap::Parser;

use cli::args::{Cli, Command, ConfigArgs, InitArgs, ShowArgs};
use config::{ConfigError, ConfigProvider};

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match cli.command {
        Command::Init(args) => run_init(args),
        Command::Check(args) => run_check(args),
        Command::Show(args) => run_show(args),
        Command::Template => {
            print!("{}", config::TEMPLATE);
            Ok(())
        }
        Command::Version => run_version(),
    }
}

/// Print version information.
fn run_version() -> Result<()> {
    use colored::Colorize;

    println!(
        "{} {}",
        constants::APP_NAME.bold(),
        constants::VERSION.green().bold()
    );
    Ok(())
}

/// Write the template to a new credentials file.
fn run_init(args: InitArgs) -> Result<()> {
    config::write_template(&args.path, args.force).context("failed to scaffold config")?;
    cli::print_ok(&format!("Wrote {}", args.path.display()));
    cli::print_hint("Replace every YOUR_..._HERE / YOUR_PROJECT_ID value, then run `siteconf check`.");
    Ok(())
}

/// Load the credentials file and report the outcome.
fn run_check(args: ConfigArgs) -> Result<()> {
    let provider = ConfigProvider::new(&args.config);
    let record = load_or_explain(&provider)?;
    cli::print_ok(&format!(
        "{} is complete (project {})",
        args.config.display(),
        record.backend_project_id,
    ));
    Ok(())
}

/// Print the loaded credentials in the requested format.
fn run_show(args: ShowArgs) -> Result<()> {
    let provider = ConfigProvider::new(&args.source.config);
    let record = load_or_explain(&provider)?;
    let rendered = if args.reveal {
        args.format.render(record)
    } else {
        args.format.render(&record.redacted())
    };
    print!("{rendered}");
    Ok(())
}

/// Load through the provider, adding a remediation hint for setup errors.
fn load_or_explain(provider: &ConfigProvider) -> Result<&config::ConfigRecord> {
    match provider.load() {
        Ok(record) => Ok(record),
        Err(err) => {
            if matches!(err, ConfigError::MissingConfig { .. }) {
                cli::print_hint(&format!(
                    "Run `siteconf init --path {}` to create it from the template.",
                    provider.path().display(),
                ));
            }
            Err(err).context("configuration is not usable")
        }
    }
}
