//! Forensic Record Types
//!
//! One record per emitted line. Records are built, encoded and dropped
//! immediately; nothing keeps them around.

use std::fmt;
use std::str::FromStr;
use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ForensicError;

// ============================================================================
// LEVEL
// ============================================================================

/// Severity label carried by every record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Level {
    Debug,
    #[default]
    Info,
    /// Used by failed assumption checks
    Warn,
    Error,
}

impl Level {
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = ForensicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "DEBUG" => Ok(Level::Debug),
            "INFO" => Ok(Level::Info),
            "WARN" | "WARNING" => Ok(Level::Warn),
            "ERROR" => Ok(Level::Error),
            other => Err(ForensicError::Parse(format!("unknown level '{}'", other))),
        }
    }
}

// ============================================================================
// RECORD
// ============================================================================

/// A single forensic log event
///
/// Field order is the wire order: `ts`, `elapsed_ms`, `corr_id`, `level`, `msg`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForensicRecord {
    /// Emission time (UTC, RFC 3339)
    pub ts: DateTime<Utc>,
    /// Whole milliseconds since the caller's start marker
    pub elapsed_ms: u64,
    pub corr_id: String,
    pub level: Level,
    pub msg: String,
}

impl ForensicRecord {
    /// Build a record stamped with the current time
    pub fn new(message: &str, start: Instant, correlation_id: &str, level: Level) -> Self {
        Self::at(Utc::now(), Instant::now(), message, start, correlation_id, level)
    }

    /// Build a record for an explicit emission instant
    pub fn at(
        ts: DateTime<Utc>,
        now: Instant,
        message: &str,
        start: Instant,
        correlation_id: &str,
        level: Level,
    ) -> Self {
        Self {
            ts,
            elapsed_ms: elapsed_ms(start, now),
            corr_id: correlation_id.to_string(),
            level,
            msg: message.to_string(),
        }
    }

    /// Encode as a single compact JSON line (no trailing newline)
    pub fn to_jsonl(&self) -> Result<String, ForensicError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decode a line previously produced by `to_jsonl`
    pub fn from_jsonl(line: &str) -> Result<Self, ForensicError> {
        Ok(serde_json::from_str(line.trim_end())?)
    }
}

/// Milliseconds from `start` to `now`, truncated; zero if `start` is later
pub fn elapsed_ms(start: Instant, now: Instant) -> u64 {
    duration_ms(now.saturating_duration_since(start))
}

fn duration_ms(d: Duration) -> u64 {
    u64::try_from(d.as_millis()).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_wire_names() {
        assert_eq!(serde_json::to_string(&Level::Info).unwrap(), "\"INFO\"");
        assert_eq!(serde_json::to_string(&Level::Warn).unwrap(), "\"WARN\"");
        assert_eq!(Level::default(), Level::Info);
    }

    #[test]
    fn test_level_from_str() {
        assert_eq!("info".parse::<Level>().unwrap(), Level::Info);
        assert_eq!("Warning".parse::<Level>().unwrap(), Level::Warn);
        assert_eq!(" ERROR ".parse::<Level>().unwrap(), Level::Error);
        assert!(matches!("loud".parse::<Level>(), Err(ForensicError::Parse(_))));
    }

    #[test]
    fn test_field_order() {
        let start = Instant::now();
        let record = ForensicRecord::new("hello", start, "corr", Level::Info);
        let line = record.to_jsonl().unwrap();

        let keys = ["\"ts\"", "\"elapsed_ms\"", "\"corr_id\"", "\"level\"", "\"msg\""];
        let positions: Vec<usize> = keys.iter().map(|k| line.find(k).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(!line.contains('\n')); // JSONL = single line
    }

    #[test]
    fn test_timestamp_is_utc_iso8601() {
        let record = ForensicRecord::new("x", Instant::now(), "corr", Level::Info);
        let value: serde_json::Value = serde_json::from_str(&record.to_jsonl().unwrap()).unwrap();
        let ts = value["ts"].as_str().unwrap();
        assert!(ts.ends_with('Z'));
        assert!(DateTime::parse_from_rfc3339(ts).is_ok());
    }

    #[test]
    fn test_special_characters_survive_encoding() {
        let msg = "quote \" backslash \\ newline \n tab \t nul \u{0} emoji 🔍";
        let record = ForensicRecord::new(msg, Instant::now(), "corr", Level::Warn);
        let line = record.to_jsonl().unwrap();
        assert!(!line.contains('\n'));

        let decoded = ForensicRecord::from_jsonl(&line).unwrap();
        assert_eq!(decoded.msg, msg);
        assert_eq!(decoded, record);
    }

    #[test]
    fn test_elapsed_ms_truncates() {
        let start = Instant::now();
        let now = start + Duration::from_micros(41_999);
        assert_eq!(elapsed_ms(start, now), 41);
    }

    #[test]
    fn test_elapsed_ms_never_negative() {
        let now = Instant::now();
        let future_start = now + Duration::from_secs(5);
        assert_eq!(elapsed_ms(future_start, now), 0);
    }
}
