//! Output Rendering
//!
//! Greeting sinks for the terminal: plain text or one JSON event per line.

use std::io::{self, Write};

use serde::{Deserialize, Serialize};

/// Output format for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output for scripting
    Json,
}

impl OutputFormat {
    pub const NAMES: &'static [&'static str] = &["text", "json"];

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "text" => Some(OutputFormat::Text),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

/// Receives a finished greeting and presents it.
pub trait GreetingSink {
    fn deliver(&mut self, greeting: &str) -> io::Result<()>;
}

impl<S: GreetingSink + ?Sized> GreetingSink for Box<S> {
    fn deliver(&mut self, greeting: &str) -> io::Result<()> {
        (**self).deliver(greeting)
    }
}

/// Writes the greeting verbatim followed by a newline.
pub struct TextSink<W: Write> {
    writer: W,
}

impl<W: Write> TextSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> GreetingSink for TextSink<W> {
    fn deliver(&mut self, greeting: &str) -> io::Result<()> {
        writeln!(self.writer, "{}", greeting)?;
        self.writer.flush()
    }
}

/// Event emitted for each delivered greeting in JSON mode.
#[derive(Debug, Clone, Serialize)]
pub struct GreetingEvent<'a> {
    pub event: &'static str,
    pub message: &'a str,
}

impl<'a> GreetingEvent<'a> {
    pub fn new(message: &'a str) -> Self {
        Self {
            event: "greeting",
            message,
        }
    }
}

/// Writes one `{"event":"greeting","message":...}` line per greeting.
pub struct JsonSink<W: Write> {
    writer: W,
}

impl<W: Write> JsonSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> GreetingSink for JsonSink<W> {
    fn deliver(&mut self, greeting: &str) -> io::Result<()> {
        serde_json::to_writer(&mut self.writer, &GreetingEvent::new(greeting))?;
        writeln!(self.writer)?;
        self.writer.flush()
    }
}

/// Pick the sink for `format`.
pub fn sink_for<'w, W: Write + 'w>(format: OutputFormat, writer: W) -> Box<dyn GreetingSink + 'w> {
    match format {
        OutputFormat::Text => Box::new(TextSink::new(writer)),
        OutputFormat::Json => Box::new(JsonSink::new(writer)),
    }
}
