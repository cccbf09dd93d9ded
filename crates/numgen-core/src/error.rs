//! Error type for the number generator.

/// Errors raised by generator construction and handler-slot mutation.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// An argument was rejected (redundant detach, negative delay).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The background generation thread could not be started.
    #[error("failed to spawn generation thread: {0}")]
    Spawn(#[from] std::io::Error),

    /// A background generation thread panicked before returning.
    #[error("generation worker panicked")]
    WorkerPanicked,
}
