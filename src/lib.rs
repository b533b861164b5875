//! greeter - formats a greeting from a name and a message
//!
//! The core is the `Greeter` value type. Around it sit a layered
//! configuration, a greet use case and the sinks that present the result.

pub mod application;
pub mod config;
pub mod error;
pub mod greeter;
pub mod logging;
pub mod presentation;

// Re-exports for convenience
pub use application::{GreetOptions, GreetUseCase};
pub use config::{Config, ConfigSource, ConfigWarning, LoadedConfig, Verbosity};
pub use error::{GreeterError, GreeterResult};
pub use greeter::Greeter;
pub use presentation::{sink_for, GreetingSink, JsonSink, OutputFormat, TextSink};
