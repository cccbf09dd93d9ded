//! # numgen-core
//!
//! Seeded pseudo-random number generator that pushes every value to a
//! single attachable handler, and keeps generating for as long as one is
//! attached.

pub mod constants;
pub mod error;
pub mod generator;
pub mod observer;
pub mod observers;
pub mod slot;
pub mod task;

// Re-exports
pub use constants::{exit_codes, DEFAULT_DELAY_MS, RANDOM_MAX_VALUE, RANDOM_MIN_VALUE};
pub use error::GeneratorError;
pub use generator::NumberGenerator;
pub use observer::{into_handler, NumberObserver};
pub use slot::{HandlerSlot, NumberHandler};
pub use task::GenerationTask;
