//! Greet Use Case
//!
//! Builds a `Greeter` from the resolved options, formats the greeting and
//! hands it to the sink unchanged.

use crate::config::Config;
use crate::error::GreeterResult;
use crate::greeter::Greeter;
use crate::presentation::GreetingSink;

/// Inputs of a single greeting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GreetOptions {
    /// Name held by the greeter
    pub name: String,
    /// Message placed before the name
    pub message: String,
}

impl GreetOptions {
    pub fn new(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            message: message.into(),
        }
    }
}

impl From<&Config> for GreetOptions {
    fn from(config: &Config) -> Self {
        Self::new(
            config.greeting.name.clone(),
            config.greeting.message.clone(),
        )
    }
}

/// Greet use case - parameterized by the sink the greeting is delivered to
pub struct GreetUseCase<S: GreetingSink> {
    sink: S,
}

impl<S: GreetingSink> GreetUseCase<S> {
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    /// Execute the greet use case, returning the delivered greeting
    pub fn execute(&mut self, options: &GreetOptions) -> GreeterResult<String> {
        let greeter = Greeter::new(options.name.as_str());
        tracing::debug!(name = greeter.name(), "created greeter");

        let greeting = greeter.greet(&options.message);
        self.sink.deliver(&greeting)?;
        tracing::info!(greeting = %greeting, "delivered greeting");

        Ok(greeting)
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}
