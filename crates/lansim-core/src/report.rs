//! Best-effort report sink.

use std::io::Write;

/// Wraps the writable sink where simulation output is reported.
///
/// Writes are best-effort: an I/O failure never reaches the caller, the
/// affected text is simply lost. Each dropped write is counted and logged
/// at the warn level, so the policy is observable without being fatal.
pub struct Report<W: Write> {
    sink: W,
    dropped_writes: usize,
}

impl<W: Write> Report<W> {
    /// Creates a report over an already-open sink.
    pub fn new(sink: W) -> Self {
        Self {
            sink,
            dropped_writes: 0,
        }
    }

    /// Appends text to the sink and flushes it.
    ///
    /// On failure the text is dropped and the simulation continues.
    pub fn append(&mut self, text: &str) {
        let result = self
            .sink
            .write_all(text.as_bytes())
            .and_then(|_| self.sink.flush());
        if let Err(e) = result {
            self.dropped_writes += 1;
            crate::log_warn!("report", "write to report sink dropped: {}", e);
        }
    }

    /// Returns the number of appends lost to sink failures.
    pub fn dropped_writes(&self) -> usize {
        self.dropped_writes
    }

    /// Consumes the report and returns the underlying sink.
    pub fn into_inner(self) -> W {
        self.sink
    }
}
