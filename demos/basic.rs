//! Forensic helpers walkthrough
//!
//! `FORENSIC_ON=0 cargo run --example basic` silences the forensic stream;
//! `RUST_LOG=debug` shows the crate's own diagnostics on stderr.

use std::thread;
use std::time::Duration;

use forensic_helpers::{global, ForensicConfig};

#[derive(Debug)]
struct LoadError(String);

fn load_data(rows: usize) -> Result<Vec<u32>, LoadError> {
    if rows == 0 {
        return Err(LoadError("empty source".to_string()));
    }
    thread::sleep(Duration::from_millis(15));
    Ok((0..rows as u32).collect())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = global::init(ForensicConfig::from_env()) {
        log::warn!("Forensic init: {}", e);
    }

    // Log a checkpoint
    global::log("Starting process", global::process_start());

    // Scoped timing (closure)
    let rows = global::scope("LoadData", || load_data(5)).unwrap_or_default();

    // Validate assumption
    global::check(!rows.is_empty(), "No rows returned");

    // Scoped timing (handle)
    {
        let scope = global::enter("ProcessData");
        let total: u32 = rows.iter().sum();
        scope.log(format!("sum={}", total));
    }

    // Errors pass through the scope after the end record
    if let Err(e) = global::scope("LoadEmpty", || load_data(0)) {
        log::info!("LoadEmpty failed as expected: {}", e.0);
    }

    global::set_enabled(false);
    global::log("never printed", global::process_start());
    global::set_enabled(true);

    log::info!(
        "Done. corr_id={} events={}",
        global::correlation_id(),
        global::forensic().events_emitted()
    );
}
