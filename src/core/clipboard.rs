//! Clipboard targets for rendered snippets.
//!
//! [`SystemClipboard`] writes to the OS clipboard through `arboard`;
//! [`StdoutClipboard`] prints instead, for pipes and scripts.

use crate::core::error::Result;
use std::io::Write;

/// Destination for rendered text. Writing overwrites previous content.
pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> Result<()>;
}

/// The operating system clipboard.
///
/// The connection is opened on the first write, so a command that fails
/// earlier never reports an unreachable clipboard. Once opened it stays open
/// for as long as this value lives.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_connected(&self) -> bool {
        self.inner.is_some()
    }

    fn connection(&mut self) -> Result<&mut arboard::Clipboard> {
        let inner = match self.inner.take() {
            Some(inner) => inner,
            None => {
                log::debug!("Connecting to the system clipboard");
                arboard::Clipboard::new()?
            }
        };
        Ok(self.inner.insert(inner))
    }
}

impl Clipboard for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        self.connection()?.set_text(text)?;
        log::debug!("Wrote {} bytes to the system clipboard", text.len());
        Ok(())
    }
}

/// Writes the text to stdout as-is
#[derive(Debug, Default)]
pub struct StdoutClipboard;

impl Clipboard for StdoutClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(text.as_bytes())?;
        stdout.flush()?;
        Ok(())
    }
}

/// Keeps the last written text in memory
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    contents: Option<String>,
}

impl MemoryClipboard {
    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }
}

impl Clipboard for MemoryClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        self.contents = Some(text.to_string());
        Ok(())
    }
}
