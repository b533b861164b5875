//! Presentation Layer
//!
//! The boundary where a finished greeting leaves the program.

pub mod output;

pub use output::{sink_for, GreetingEvent, GreetingSink, JsonSink, OutputFormat, TextSink};
