use std::path::PathBuf;

use clap::{Parser, Subcommand};
use greeter::{Config, OutputFormat};

/// greeter - print a greeting for a name
#[derive(Parser, Debug)]
#[command(name = "greeter")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Name to greet (overrides config and GREETER_NAME)
    #[arg(short, long)]
    pub name: Option<String>,

    /// Message placed before the name (overrides config and GREETER_MESSAGE)
    #[arg(short, long, allow_hyphen_values = true)]
    pub message: Option<String>,

    /// Config file to use instead of ./greeter.toml or the user config
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Emit JSON instead of plain text
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the resolved configuration instead of greeting
    Config,
}

impl Cli {
    /// Layer command-line flags on top of an already resolved config.
    pub fn apply(&self, mut config: Config) -> Config {
        if let Some(name) = &self.name {
            config.greeting.name = name.clone();
        }
        if let Some(message) = &self.message {
            config.greeting.message = message.clone();
        }
        if self.json {
            config.output.format = OutputFormat::Json;
        }
        config.output.verbosity = config.output.verbosity.raised(self.verbose);
        config
    }
}
