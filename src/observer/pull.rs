use std::io::{self, Write};

/// Keeps every message ever published. Readers come and look.
#[derive(Debug, Default)]
pub struct NewsChannel {
    messages: Vec<String>,
}

impl NewsChannel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn publish_message(&mut self, message: impl Into<String>) {
        self.messages.push(message.into());
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }
}

#[derive(Debug, Clone)]
pub struct Employee {
    name: String,
}

impl Employee {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Reads the whole history of `news_channel`, oldest first.
    pub fn retrieve_messages(&self, news_channel: &NewsChannel, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "NEWS FOR {}:", self.name)?;
        for message in news_channel.messages() {
            writeln!(out, "{message}")?;
        }
        Ok(())
    }
}
