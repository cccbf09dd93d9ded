//! Constants for number generation and process exit codes.

/// Default pause between two generated values, in milliseconds.
pub const DEFAULT_DELAY_MS: u64 = 500;

/// Smallest value the generator can produce (inclusive).
pub const RANDOM_MIN_VALUE: i32 = 1;

/// Upper bound of generated values (exclusive).
pub const RANDOM_MAX_VALUE: i32 = 1000;

/// Exit codes used by the `numgen` binary.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// Invalid configuration.
    pub const ERROR_CONFIG: i32 = 4;
    /// Generation interrupted by the user (Ctrl+C).
    pub const ERROR_CANCELED: i32 = 130;
}
