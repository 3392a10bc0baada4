//! Process-wide default logger
//!
//! Free functions mirroring the `Forensic` methods, backed by one lazily
//! created context. The default writes to stdout, starts enabled, and uses
//! the per-process correlation id from `session::process_correlation_id`.
//!
//! ## Usage
//! ```no_run
//! use forensic_helpers::global;
//!
//! global::log("Starting process", global::process_start());
//! let rows = global::scope("LoadData", || vec![1, 2, 3]);
//! global::check(!rows.is_empty(), "No rows returned");
//! ```

use std::sync::OnceLock;
use std::time::Instant;

use crate::config::ForensicConfig;
use crate::error::{ForensicError, ForensicResult};
use crate::logger::Forensic;
use crate::record::Level;
use crate::scope::ForensicScope;
use crate::session::{process_correlation_id, Session};
use crate::sink::{Sink, StdoutSink};

static FORENSIC: OnceLock<Forensic> = OnceLock::new();

fn build(config: ForensicConfig, sink: Box<dyn Sink>) -> Forensic {
    let session = match config.correlation_id {
        Some(id) => Session::with_correlation_id(id),
        None => Session::with_correlation_id(process_correlation_id()),
    };
    Forensic::from_parts(config.enabled, session, sink)
}

/// Configure the process-wide logger
///
/// Must run before the first logging call; afterwards the default is fixed
/// and this returns `ForensicError::AlreadyInitialized`.
pub fn init(config: ForensicConfig) -> ForensicResult<()> {
    init_with_sink(config, StdoutSink)
}

/// Configure the process-wide logger with a custom sink
pub fn init_with_sink(config: ForensicConfig, sink: impl Sink + 'static) -> ForensicResult<()> {
    let mut installed = false;
    FORENSIC.get_or_init(|| {
        installed = true;
        build(config, Box::new(sink))
    });

    if installed {
        log::debug!("Forensic logger initialized (corr_id={})", correlation_id());
        Ok(())
    } else {
        Err(ForensicError::AlreadyInitialized)
    }
}

/// The process-wide logger, created with defaults on first use
pub fn forensic() -> &'static Forensic {
    FORENSIC.get_or_init(|| build(ForensicConfig::default(), Box::new(StdoutSink)))
}

pub fn is_enabled() -> bool {
    forensic().is_enabled()
}

pub fn set_enabled(enabled: bool) {
    forensic().set_enabled(enabled);
}

pub fn correlation_id() -> &'static str {
    forensic().correlation_id()
}

pub fn process_start() -> Instant {
    forensic().process_start()
}

pub fn log(message: impl AsRef<str>, start: Instant) {
    forensic().log(message, start);
}

pub fn log_with_level(message: impl AsRef<str>, start: Instant, level: Level) {
    forensic().log_with_level(message, start, level);
}

pub fn check(condition: bool, message: impl AsRef<str>) {
    forensic().check(condition, message);
}

pub fn enter(name: impl Into<String>) -> ForensicScope<'static> {
    forensic().enter(name)
}

pub fn scope<T>(name: impl Into<String>, action: impl FnOnce() -> T) -> T {
    forensic().scope(name, action)
}
