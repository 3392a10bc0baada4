//! Configuration module

use std::env;

/// Environment variable read by `ForensicConfig::from_env`
pub const ENABLED_ENV: &str = "FORENSIC_ON";

/// Settings used to construct a `Forensic` context
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForensicConfig {
    /// Initial state of the enable flag
    pub enabled: bool,

    /// Fixed correlation id; a random UUID is generated when `None`
    pub correlation_id: Option<String>,
}

impl Default for ForensicConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            correlation_id: None,
        }
    }
}

impl ForensicConfig {
    /// Load configuration from environment variables
    ///
    /// Reads `FORENSIC_ON`: `1`, `true`, `on`, `yes` enable emission,
    /// `0`, `false`, `off`, `no` disable it. Unset or unrecognised values
    /// keep the default (enabled).
    pub fn from_env() -> Self {
        let enabled = env::var(ENABLED_ENV)
            .ok()
            .and_then(|v| parse_flag(&v))
            .unwrap_or(true);

        Self {
            enabled,
            ..Default::default()
        }
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn with_correlation_id(mut self, id: impl Into<String>) -> Self {
        self.correlation_id = Some(id.into());
        self
    }

    /// Configuration that starts with emission switched off
    pub fn disabled() -> Self {
        Self::default().with_enabled(false)
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}
