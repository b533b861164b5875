//! The `Greeter` value type.
//!
//! A `Greeter` holds a name and formats greetings addressed to it. Inputs are
//! taken verbatim: empty names and messages are valid and keep their separator.

/// Holds a name and formats greetings for it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Greeter {
    name: String,
}

impl Greeter {
    /// Create a greeter for `fullname`, stored exactly as given.
    pub fn new(fullname: impl Into<String>) -> Self {
        Self {
            name: fullname.into(),
        }
    }

    /// The name this greeter addresses.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns `message`, a single space, then the held name.
    pub fn greet(&self, message: &str) -> String {
        let mut greeting = String::with_capacity(message.len() + 1 + self.name.len());
        greeting.push_str(message);
        greeting.push(' ');
        greeting.push_str(&self.name);
        greeting
    }
}
