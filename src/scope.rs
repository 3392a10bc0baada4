//! Scoped timing
//!
//! Two call shapes with one behavior:
//! - `Forensic::scope(name, || ...)` wraps a closure
//! - `Forensic::enter(name)` returns a `ForensicScope` handle that logs the
//!   end record when dropped
//!
//! Both emit `"<name> start"` then `"<name> end"` at INFO, with the end
//! record's elapsed time measured from the scope's own start marker. The end
//! record is written on every exit path: normal return, `?` early return,
//! panic unwind, or a dropped future.

use std::future::Future;
use std::time::Instant;

use crate::logger::Forensic;
use crate::record::Level;

/// Handle for an entered scope
///
/// Dropping the handle writes the end record.
#[must_use = "the scope ends as soon as the handle is dropped"]
#[derive(Debug)]
pub struct ForensicScope<'a> {
    forensic: &'a Forensic,
    name: String,
    start: Instant,
}

impl<'a> ForensicScope<'a> {
    pub(crate) fn enter(forensic: &'a Forensic, name: impl Into<String>) -> Self {
        let name = name.into();
        let start = Instant::now();
        forensic.log_with_level(format!("{} start", name), start, Level::Info);
        Self {
            forensic,
            name,
            start,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Start marker captured on entry
    pub fn start(&self) -> Instant {
        self.start
    }

    /// Log an intermediate message timed from this scope's start
    pub fn log(&self, message: impl AsRef<str>) {
        self.forensic.log(message, self.start);
    }

    /// End the scope now instead of at the end of the enclosing block
    pub fn finish(self) {
        drop(self);
    }
}

impl Drop for ForensicScope<'_> {
    fn drop(&mut self) {
        self.forensic
            .log_with_level(format!("{} end", self.name), self.start, Level::Info);
    }
}

impl Forensic {
    /// Enter a named scope; the returned handle logs the end record on drop
    pub fn enter(&self, name: impl Into<String>) -> ForensicScope<'_> {
        ForensicScope::enter(self, name)
    }

    /// Run `action` inside a named scope and return its output unchanged
    ///
    /// A `Result` from `action` passes through as-is, and a panic keeps
    /// unwinding once the end record has been written.
    pub fn scope<T>(&self, name: impl Into<String>, action: impl FnOnce() -> T) -> T {
        let _scope = self.enter(name);
        action()
    }

    /// Async variant of [`Forensic::scope`]
    ///
    /// The start record is written on first poll. The end record is written
    /// when `future` completes or when the returned future is dropped early.
    pub async fn scope_async<F>(&self, name: impl Into<String>, future: F) -> F::Output
    where
        F: Future,
    {
        let _scope = self.enter(name);
        future.await
    }
}
