//! CLI output formatting.

use std::time::Duration;

use clap::ValueEnum;
use serde::Serialize;

/// How received values are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// One plain value per line.
    #[default]
    Text,
    /// One JSON object per line: `{"index":1,"value":42}`.
    Json,
}

/// A received value as written in JSON output.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ValueRecord {
    /// 1-based position of the value within the run.
    pub index: u64,
    /// The generated value.
    pub value: i32,
}

/// Format a single received value in the requested format.
#[must_use]
pub fn format_value(format: OutputFormat, index: u64, value: i32) -> String {
    match format {
        OutputFormat::Text => value.to_string(),
        OutputFormat::Json => serde_json::to_string(&ValueRecord { index, value })
            .unwrap_or_else(|_| format!("{{\"index\":{index},\"value\":{value}}}")),
    }
}

/// Format a duration for display.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 0.001 {
        format!("{:.2}µs", secs * 1_000_000.0)
    } else if secs < 1.0 {
        format!("{:.2}ms", secs * 1000.0)
    } else if secs < 60.0 {
        format!("{secs:.3}s")
    } else {
        let mins = (secs / 60.0).floor() as u64;
        let remaining = secs - (mins as f64 * 60.0);
        format!("{mins}m{remaining:.1}s")
    }
}
