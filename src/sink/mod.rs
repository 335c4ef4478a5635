//! The built-in backends (console, file, buffer) can't cover every
//! destination — the `Sink` trait lets callers plug in their own without
//! modifying hermes itself.

mod buffer;
mod console;
mod file;

pub use buffer::BufferSink;
pub use console::ConsoleSink;
pub use file::FileSink;

use crate::error::Error;
use std::sync::Arc;

/// A destination for finished log lines.
///
/// The logger's only contract with a sink is "accept a sequence of characters
/// ending in a newline" — the line arrives fully formatted (placeholders
/// substituted, color escapes applied, newline appended) and must be written
/// unchanged. Buffering and flushing policy belong to the sink.
pub trait Sink: Send + Sync {
    /// Writes one finished, newline-terminated line.
    ///
    /// # Errors
    /// I/O errors from the underlying destination. The logger's fan-out loop
    /// ignores these; direct callers may inspect them.
    fn write_line(&self, line: &str) -> Result<(), Error>;
}

/// The caller keeps ownership of the sink and the logger holds a shared
/// handle — the original's non-owning stream references, expressed safely.
impl<S: Sink + ?Sized> Sink for Arc<S> {
    fn write_line(&self, line: &str) -> Result<(), Error> {
        (**self).write_line(line)
    }
}
