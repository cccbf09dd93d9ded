//! Error handling and exit codes.

use numgen_core::constants::exit_codes;
use numgen_core::GeneratorError;

/// Map a generator error to the process exit code.
pub fn handle_error(err: &GeneratorError) -> i32 {
    match err {
        GeneratorError::InvalidArgument(_) => exit_codes::ERROR_CONFIG,
        GeneratorError::Spawn(_) | GeneratorError::WorkerPanicked => exit_codes::ERROR_GENERIC,
    }
}

/// Map any application error to the process exit code.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<GeneratorError>()
        .map_or(exit_codes::ERROR_GENERIC, handle_error)
}
