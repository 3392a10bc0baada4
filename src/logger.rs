//! Forensic Logger
//!
//! `Forensic` is the injectable context behind every helper in this crate:
//! enable flag, session identity and output sink. Build one per test (or per
//! subsystem) instead of sharing the process-wide default.

use std::fmt;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::Instant;

use chrono::{DateTime, Utc};

use crate::config::ForensicConfig;
use crate::record::{ForensicRecord, Level};
use crate::session::Session;
use crate::sink::{Sink, StdoutSink};

pub struct Forensic {
    enabled: AtomicBool,
    session: Session,
    sink: Box<dyn Sink>,
    events_emitted: AtomicU64,
}

impl Forensic {
    /// Context writing to stdout with the given configuration
    pub fn new(config: ForensicConfig) -> Self {
        Self::with_sink(config, StdoutSink)
    }

    /// Context writing to a custom sink
    pub fn with_sink(config: ForensicConfig, sink: impl Sink + 'static) -> Self {
        let session = match config.correlation_id {
            Some(id) => Session::with_correlation_id(id),
            None => Session::new(),
        };
        Self::from_parts(config.enabled, session, Box::new(sink))
    }

    pub(crate) fn from_parts(enabled: bool, session: Session, sink: Box<dyn Sink>) -> Self {
        Self {
            enabled: AtomicBool::new(enabled),
            session,
            sink,
            events_emitted: AtomicU64::new(0),
        }
    }

    // ------------------------------------------------------------------------
    // Toggle
    // ------------------------------------------------------------------------

    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Relaxed)
    }

    pub fn set_enabled(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::Relaxed);
    }

    // ------------------------------------------------------------------------
    // Session
    // ------------------------------------------------------------------------

    pub fn correlation_id(&self) -> &str {
        self.session.correlation_id()
    }

    /// Start marker captured when this context was created
    pub fn process_start(&self) -> Instant {
        self.session.started()
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.session.started_at()
    }

    /// Records successfully written by this context
    pub fn events_emitted(&self) -> u64 {
        self.events_emitted.load(Ordering::Relaxed)
    }

    // ------------------------------------------------------------------------
    // Logging
    // ------------------------------------------------------------------------

    /// Log `message` at INFO with elapsed time measured from `start`
    pub fn log(&self, message: impl AsRef<str>, start: Instant) {
        self.log_with_level(message, start, Level::Info);
    }

    /// Log `message` at `level` with elapsed time measured from `start`
    ///
    /// No-op while disabled. Encoding or write failures are reported through
    /// the `log` facade and never reach the caller.
    pub fn log_with_level(&self, message: impl AsRef<str>, start: Instant, level: Level) {
        if !self.is_enabled() {
            return;
        }

        let record = ForensicRecord::new(message.as_ref(), start, self.correlation_id(), level);
        self.emit(&record);
    }

    /// Log a WARN record if `condition` is false
    ///
    /// Elapsed time is measured from the context's start marker. A failed
    /// check never interrupts the caller.
    pub fn check(&self, condition: bool, message: impl AsRef<str>) {
        if self.is_enabled() && !condition {
            self.log_with_level(message, self.process_start(), Level::Warn);
        }
    }

    fn emit(&self, record: &ForensicRecord) {
        let line = match record.to_jsonl() {
            Ok(line) => line,
            Err(e) => {
                log::warn!("Failed to encode forensic record: {}", e);
                return;
            }
        };

        match self.sink.write_line(&line) {
            Ok(()) => {
                self.events_emitted.fetch_add(1, Ordering::Relaxed);
            }
            Err(e) => log::warn!("Failed to write forensic record: {}", e),
        }
    }
}

impl Default for Forensic {
    fn default() -> Self {
        Self::new(ForensicConfig::default())
    }
}

impl fmt::Debug for Forensic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Forensic")
            .field("enabled", &self.is_enabled())
            .field("correlation_id", &self.correlation_id())
            .field("events_emitted", &self.events_emitted())
            .finish_non_exhaustive()
    }
}
