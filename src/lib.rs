//! Forensic Helpers
//!
//! Toggle-driven, JSON-formatted forensic logging with correlation IDs,
//! assumption checks, and scoped timing. Every record is one line on stdout:
//!
//! ```text
//! {"ts":"2026-10-15T09:30:00.123456789Z","elapsed_ms":12,"corr_id":"…","level":"INFO","msg":"LoadData start"}
//! ```
//!
//! ## Structure
//! - `logger.rs` - `Forensic` context (enable flag, `log`, `check`)
//! - `scope.rs` - scoped timing (`scope`, `enter` handle, `scope_async`)
//! - `record.rs` - `ForensicRecord` and `Level`
//! - `session.rs` - correlation id and start markers
//! - `sink.rs` - output destinations (stdout, in-memory capture)
//! - `global.rs` - process-wide default and free functions
//!
//! ## Usage
//! ```
//! use forensic_helpers::{Forensic, ForensicConfig, MemorySink};
//!
//! let sink = MemorySink::new();
//! let forensic = Forensic::with_sink(ForensicConfig::default(), sink.clone());
//!
//! // Log a checkpoint
//! forensic.log("Starting process", forensic.process_start());
//!
//! // Validate assumption
//! let items: Vec<u32> = Vec::new();
//! forensic.check(!items.is_empty(), "No items found");
//!
//! // Scoped timing (closure)
//! forensic.scope("LoadData", || {
//!     // ... logic ...
//! });
//!
//! // Scoped timing (handle)
//! {
//!     let _scope = forensic.enter("ProcessData");
//!     // ... logic ...
//! }
//!
//! assert_eq!(sink.len(), 6);
//! ```

pub mod config;
pub mod error;
pub mod global;
pub mod logger;
pub mod record;
pub mod scope;
pub mod session;
pub mod sink;


pub use config::ForensicConfig;
pub use error::{ForensicError, ForensicResult};
pub use logger::Forensic;
pub use record::{ForensicRecord, Level};
pub use scope::ForensicScope;
pub use session::Session;
pub use sink::{MemorySink, Sink, StdoutSink};
