//! Common test utilities for greeter CLI tests.
//!
//! - `TestEnv`: isolated working and config directories plus helpers to run
//!   the `greeter` binary inside them.

pub mod env;

pub use env::*;
