//! In-memory accumulation, mainly for tests and capture scenarios. Wrap it in
//! an [`std::sync::Arc`] to keep a reading handle while the logger writes:
//!
//! ```
//! use hermes::{BufferSink, Logger};
//! use std::sync::Arc;
//!
//! let buf = Arc::new(BufferSink::new());
//! let mut logger = Logger::with_sink("app", Box::new(Arc::clone(&buf)));
//! logger.disable_color();
//! logger.info("started");
//! assert!(buf.contents().ends_with('\n'));
//! ```

use super::Sink;
use crate::error::Error;
use std::sync::Mutex;

/// Accumulates written lines into a string.
#[derive(Debug, Default)]
pub struct BufferSink {
    buf: Mutex<String>,
}

impl BufferSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything written so far.
    ///
    /// # Panics
    /// Panics if a previous writer panicked while holding the lock.
    #[must_use]
    pub fn contents(&self) -> String {
        self.buf.lock().expect("buffer lock poisoned").clone()
    }

    /// Discards accumulated output — lets one buffer serve several assertions.
    ///
    /// # Panics
    /// Panics if a previous writer panicked while holding the lock.
    pub fn clear(&self) {
        self.buf.lock().expect("buffer lock poisoned").clear();
    }
}

impl Sink for BufferSink {
    fn write_line(&self, line: &str) -> Result<(), Error> {
        self.buf
            .lock()
            .map_err(|_| Error::Io(std::io::Error::other("buffer lock poisoned")))?
            .push_str(line);
        Ok(())
    }
}
