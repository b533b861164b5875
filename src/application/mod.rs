//! Application Layer
//!
//! Use cases that orchestrate the flow from resolved configuration to output.
//!
//! ## Use Cases
//!
//! - `GreetUseCase` - Build a greeter, format the greeting, deliver it to a sink

pub mod greet;

pub use greet::{GreetOptions, GreetUseCase};
