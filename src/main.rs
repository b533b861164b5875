//! greeter CLI - print a greeting for a name
//!
//! Usage: greeter [OPTIONS] [COMMAND]
//!
//! Commands:
//!   config  Print the resolved configuration

mod cli;

use std::io;

use anyhow::{Context, Result};
use clap::Parser;

use greeter::config::{self, Config, LoadedConfig};
use greeter::{logging, sink_for, GreetOptions, GreetUseCase, OutputFormat};

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let project_root = std::env::current_dir().context("failed to resolve working directory")?;
    let loaded = config::discover(cli.config.as_deref(), &project_root)
        .context("failed to load configuration")?;
    let config = loaded
        .config
        .clone()
        .with_env_overrides()
        .context("failed to apply environment overrides")?;
    let config = cli.apply(config);

    logging::init_tracing(config.output.verbosity);
    report_loaded(&loaded);

    match cli.command {
        Some(Commands::Config) => cmd_config(&config),
        None => cmd_greet(&config),
    }
}

fn report_loaded(loaded: &LoadedConfig) {
    match loaded.source.path() {
        Some(path) => tracing::debug!(path = %path.display(), "using config file"),
        None => tracing::debug!("no config file found, using defaults"),
    }

    for warning in &loaded.warnings {
        let location = match warning.line {
            Some(line) => format!("{}:{}", warning.file.display(), line),
            None => warning.file.display().to_string(),
        };
        match &warning.suggestion {
            Some(suggestion) => tracing::warn!(
                "unknown config key '{}' in {} (did you mean '{}'?)",
                warning.key,
                location,
                suggestion
            ),
            None => tracing::warn!("unknown config key '{}' in {}", warning.key, location),
        }
    }
}

fn cmd_greet(config: &Config) -> Result<()> {
    let sink = sink_for(config.output.format, io::stdout().lock());
    let mut use_case = GreetUseCase::new(sink);
    use_case
        .execute(&GreetOptions::from(config))
        .context("failed to write greeting")?;
    Ok(())
}

fn cmd_config(config: &Config) -> Result<()> {
    match config.output.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(config)?),
        OutputFormat::Text => print!("{}", config.to_toml()?),
    }
    Ok(())
}
