//! Clipboard seam.
//!
//! The core hands a plain string to a [`ClipboardWriter`]; success or
//! failure is reported back to the user as a notice, never as a hard error.
//! The default implementation emits an OSC 52 escape sequence, which reaches
//! the system clipboard through the terminal itself and works over SSH.

use std::io::Write;

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;

use crate::error::ClipboardError;

/// Copy-to-clipboard seam.
pub trait ClipboardWriter {
    /// Place `text` on the clipboard.
    fn copy(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// OSC 52 clipboard writer targeting an arbitrary byte sink (normally the
/// controlling terminal via stdout).
pub struct Osc52Clipboard<W: Write> {
    out: W,
}

impl<W: Write> Osc52Clipboard<W> {
    #[must_use]
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> ClipboardWriter for Osc52Clipboard<W> {
    fn copy(&mut self, text: &str) -> Result<(), ClipboardError> {
        // OSC 52: ESC ] 52 ; c ; <base64 payload> BEL
        let payload = BASE64.encode(text.as_bytes());
        let seq = format!("\x1b]52;c;{payload}\x07");
        self.out
            .write_all(seq.as_bytes())
            .and_then(|()| self.out.flush())
            .map_err(|e| ClipboardError::WriteFailed(e.to_string()))
    }
}

/// Discarding writer for tests and non-interactive runs.
#[derive(Debug, Default)]
pub struct NullClipboard;

impl ClipboardWriter for NullClipboard {
    fn copy(&mut self, _text: &str) -> Result<(), ClipboardError> {
        Ok(())
    }
}
