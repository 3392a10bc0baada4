//! Session identity
//!
//! Correlation id and start markers for one logging context. Written once at
//! construction, read-only afterwards, so concurrent reads need no locking.

use std::sync::OnceLock;
use std::time::Instant;

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Write-once identity of a forensic context
#[derive(Debug, Clone)]
pub struct Session {
    correlation_id: String,
    started: Instant,
    started_at: DateTime<Utc>,
}

impl Session {
    /// Start a session with a fresh random correlation id
    pub fn new() -> Self {
        Self::with_correlation_id(new_correlation_id())
    }

    /// Start a session with a caller-supplied correlation id
    pub fn with_correlation_id(correlation_id: impl Into<String>) -> Self {
        Self {
            correlation_id: correlation_id.into(),
            started: Instant::now(),
            started_at: Utc::now(),
        }
    }

    pub fn correlation_id(&self) -> &str {
        &self.correlation_id
    }

    /// Monotonic marker captured when the session started
    pub fn started(&self) -> Instant {
        self.started
    }

    /// Wall-clock time the session started (UTC)
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// Generate a new random correlation id (UUID v4)
pub fn new_correlation_id() -> String {
    Uuid::new_v4().to_string()
}

// ============================================================================
// PROCESS ID
// ============================================================================

static PROCESS_CORRELATION_ID: OnceLock<String> = OnceLock::new();

/// Correlation id generated once per process run
pub fn process_correlation_id() -> &'static str {
    PROCESS_CORRELATION_ID.get_or_init(new_correlation_id)
}
