//! Output sinks
//!
//! A sink receives one encoded record per call. `StdoutSink` is the only
//! destination the logger writes to in production; `MemorySink` captures
//! lines in-process so hosts and tests can inspect what was emitted.

use std::io::Write;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::error::{ForensicError, ForensicResult};
use crate::record::ForensicRecord;

/// Destination for encoded forensic lines
pub trait Sink: Send + Sync {
    /// Write one line. `line` carries no trailing newline.
    fn write_line(&self, line: &str) -> ForensicResult<()>;
}

// ============================================================================
// STDOUT
// ============================================================================

/// Writes each record as its own line on standard output
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink;

impl Sink for StdoutSink {
    fn write_line(&self, line: &str) -> ForensicResult<()> {
        // One locked write per record keeps concurrent lines whole
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        out.write_all(line.as_bytes())?;
        out.write_all(b"\n")?;
        out.flush()?;
        Ok(())
    }
}

// ============================================================================
// MEMORY
// ============================================================================

/// In-process capture of emitted lines
///
/// Clones share the same buffer, so a test can hand one clone to a
/// `Forensic` context and read through the other.
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw lines in emission order
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }

    /// Decode every captured line
    pub fn records(&self) -> ForensicResult<Vec<ForensicRecord>> {
        self.lines
            .lock()
            .iter()
            .map(|line| ForensicRecord::from_jsonl(line))
            .collect()
    }

    /// Messages of captured records, in order
    pub fn messages(&self) -> ForensicResult<Vec<String>> {
        Ok(self.records()?.into_iter().map(|r| r.msg).collect())
    }

    pub fn len(&self) -> usize {
        self.lines.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.lock().is_empty()
    }

    /// Drop captured lines and return them
    pub fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.lines.lock())
    }
}

impl Sink for MemorySink {
    fn write_line(&self, line: &str) -> ForensicResult<()> {
        if line.contains('\n') {
            return Err(ForensicError::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                "record spans multiple lines",
            )));
        }
        self.lines.lock().push(line.to_string());
        Ok(())
    }
}

impl<S: Sink + ?Sized> Sink for Arc<S> {
    fn write_line(&self, line: &str) -> ForensicResult<()> {
        (**self).write_line(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Level;
    use std::time::Instant;

    #[test]
    fn test_memory_sink_shares_buffer_across_clones() {
        let sink = MemorySink::new();
        let writer = sink.clone();

        writer.write_line("{\"a\":1}").unwrap();
        writer.write_line("{\"a\":2}").unwrap();

        assert_eq!(sink.len(), 2);
        assert_eq!(sink.lines(), vec!["{\"a\":1}", "{\"a\":2}"]);
    }

    #[test]
    fn test_memory_sink_decodes_records() {
        let sink = MemorySink::new();
        let record = ForensicRecord::new("decoded", Instant::now(), "corr", Level::Info);
        sink.write_line(&record.to_jsonl().unwrap()).unwrap();

        assert_eq!(sink.records().unwrap(), vec![record]);
        assert_eq!(sink.messages().unwrap(), vec!["decoded".to_string()]);
    }

    #[test]
    fn test_memory_sink_rejects_multiline() {
        let sink = MemorySink::new();
        assert!(sink.write_line("one\ntwo").is_err());
        assert!(sink.is_empty());
    }

    #[test]
    fn test_take_drains() {
        let sink = MemorySink::new();
        sink.write_line("x").unwrap();
        assert_eq!(sink.take(), vec!["x"]);
        assert!(sink.is_empty());
    }

    #[test]
    fn test_arc_sink_forwards() {
        fn write_twice<S: Sink>(sink: &S) {
            sink.write_line("a").unwrap();
            sink.write_line("b").unwrap();
        }

        let inner = MemorySink::new();
        let shared = Arc::new(inner.clone());
        write_twice(&shared);
        assert_eq!(inner.lines(), vec!["a", "b"]);
    }

    #[test]
    fn test_stdout_sink_writes() {
        assert!(StdoutSink.write_line("{\"msg\":\"stdout sink test\"}").is_ok());
    }
}
