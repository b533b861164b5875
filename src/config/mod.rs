//! Configuration module for greeter
//!
//! Configuration hierarchy, highest priority first:
//! 1. CLI flags
//! 2. Environment variables (GREETER_*)
//! 3. Explicit `--config` file, else project config (./greeter.toml)
//! 4. User config (<config_dir>/greeter/config.toml)
//! 5. Built-in defaults

mod loader;
mod types;

pub use loader::{
    apply_overrides, discover, user_config_path, ConfigSource, ConfigWarning, LoadedConfig,
    CONFIG_HOME_VAR, PROJECT_CONFIG_FILE,
};
pub use types::{Config, GreetingConfig, OutputConfig, Verbosity, DEFAULT_MESSAGE, DEFAULT_NAME};
