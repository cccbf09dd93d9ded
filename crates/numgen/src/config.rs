//! Application configuration from CLI flags and environment.

use clap::Parser;

use numgen_cli::OutputFormat;
use numgen_core::DEFAULT_DELAY_MS;

/// numgen: prints seeded pseudo-random numbers at a fixed interval.
#[derive(Parser, Debug)]
#[command(name = "numgen", version, about)]
pub struct AppConfig {
    /// Pause between two generated numbers, in milliseconds.
    #[arg(
        long,
        default_value_t = default_delay(),
        env = "NUMGEN_DELAY",
        allow_negative_numbers = true
    )]
    pub delay: i64,

    /// Seed of the pseudo-random sequence (default: derived from the clock).
    #[arg(long, env = "NUMGEN_SEED", allow_negative_numbers = true)]
    pub seed: Option<i64>,

    /// Number of values to receive before detaching (0 = until Ctrl+C).
    #[arg(short = 'n', long, default_value = "10")]
    pub count: u64,

    /// Output format for received values.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Verbose output (debug logs).
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Quiet mode (only output the values).
    #[arg(short, long)]
    pub quiet: bool,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

#[allow(clippy::cast_possible_wrap)]
fn default_delay() -> i64 {
    DEFAULT_DELAY_MS as i64
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Default tracing directive for the selected verbosity.
    #[must_use]
    pub fn log_level(&self) -> tracing::Level {
        if self.verbose {
            tracing::Level::DEBUG
        } else if self.quiet {
            tracing::Level::WARN
        } else {
            tracing::Level::INFO
        }
    }
}
