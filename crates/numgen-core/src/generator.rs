//! Seeded random number generator that pushes each value to a handler.
//!
//! The generation loop draws a value, logs it, hands it to the attached
//! handler, sleeps, and repeats for as long as a handler stays attached.
//! The first pass always runs; attachment is checked after each value.

use std::fmt;
use std::sync::OnceLock;
use std::thread;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, warn};

use crate::constants::{DEFAULT_DELAY_MS, RANDOM_MAX_VALUE, RANDOM_MIN_VALUE};
use crate::error::GeneratorError;
use crate::slot::{HandlerSlot, NumberHandler};

/// Process-wide default seed: the millisecond component of the clock when
/// first requested. Not reproducible across runs.
fn default_seed() -> i64 {
    static DEFAULT_SEED: OnceLock<i64> = OnceLock::new();
    *DEFAULT_SEED.get_or_init(|| {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .subsec_millis();
        i64::from(millis)
    })
}

/// Generates pseudo-random numbers in `[1, 1000)` and notifies a handler.
///
/// # Example
/// ```
/// use numgen_core::NumberGenerator;
///
/// let generator = NumberGenerator::with_delay_and_seed(0, 42).unwrap();
/// let slot = generator.slot();
/// let received = std::sync::Arc::new(parking_lot::Mutex::new(Vec::new()));
///
/// let sink = received.clone();
/// let stop = slot.clone();
/// slot.attach(move |value| {
///     sink.lock().push(value);
///     if sink.lock().len() == 3 {
///         let _ = stop.detach();
///     }
/// });
///
/// assert_eq!(generator.start_generation(), 3);
/// assert_eq!(received.lock().len(), 3);
/// ```
pub struct NumberGenerator {
    delay: Duration,
    seed: i64,
    slot: HandlerSlot,
}

impl NumberGenerator {
    /// Create a generator with the default delay (500 ms) and default seed.
    #[must_use]
    pub fn new() -> Self {
        Self::build(Duration::from_millis(DEFAULT_DELAY_MS), default_seed())
    }

    /// Create a generator with an explicit delay and the default seed.
    pub fn with_delay(delay_ms: i64) -> Result<Self, GeneratorError> {
        Self::with_delay_and_seed(delay_ms, default_seed())
    }

    /// Create a generator with an explicit delay and seed.
    ///
    /// A negative delay is rejected. Zero means no pause between values.
    pub fn with_delay_and_seed(delay_ms: i64, seed: i64) -> Result<Self, GeneratorError> {
        let Ok(millis) = u64::try_from(delay_ms) else {
            warn!(delay_ms, "rejected negative delay");
            return Err(GeneratorError::InvalidArgument(format!(
                "delay must not be negative, got {delay_ms} ms"
            )));
        };
        Ok(Self::build(Duration::from_millis(millis), seed))
    }

    fn build(delay: Duration, seed: i64) -> Self {
        debug!(delay = ?delay, seed, "number generator created");
        Self {
            delay,
            seed,
            slot: HandlerSlot::new(),
        }
    }

    /// Pause between two generated values.
    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Seed of the pseudo-random sequence.
    #[must_use]
    pub fn seed(&self) -> i64 {
        self.seed
    }

    /// Currently attached handler, if any.
    #[must_use]
    pub fn handler(&self) -> Option<NumberHandler> {
        self.slot.get()
    }

    /// Attach (`Some`) or detach (`None`) the handler.
    ///
    /// Detaching when nothing is attached fails with
    /// [`GeneratorError::InvalidArgument`].
    pub fn set_handler(&self, handler: Option<NumberHandler>) -> Result<(), GeneratorError> {
        self.slot.set(handler)
    }

    /// Shared handle to the handler slot.
    ///
    /// Detaching through any clone stops a running generation loop after
    /// its current pause.
    #[must_use]
    pub fn slot(&self) -> HandlerSlot {
        self.slot.clone()
    }

    /// Run the generation loop until no handler is attached.
    ///
    /// Blocks the calling thread. The pseudo-random source is re-seeded on
    /// every call, so repeated runs replay the same sequence. Returns the
    /// number of values generated.
    #[allow(clippy::cast_sign_loss)]
    pub fn start_generation(&self) -> u64 {
        let mut rng = StdRng::seed_from_u64(self.seed as u64);
        let mut generated = 0u64;
        debug!(seed = self.seed, "number generation started");

        loop {
            let value = rng.gen_range(RANDOM_MIN_VALUE..RANDOM_MAX_VALUE);
            generated += 1;
            info!(value, "{}: Number generated: '{}'", self, value);

            self.notify(value);

            if !self.delay.is_zero() {
                thread::sleep(self.delay);
            }
            if !self.slot.is_attached() {
                break;
            }
        }

        debug!(generated, "number generation finished");
        generated
    }

    /// Invoke the attached handler, if any, outside the slot lock.
    fn notify(&self, value: i32) {
        if let Some(handler) = self.slot.get() {
            handler(value);
        }
    }
}

impl Default for NumberGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NumberGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("NumberGenerator")
    }
}

impl fmt::Debug for NumberGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NumberGenerator")
            .field("delay", &self.delay)
            .field("seed", &self.seed)
            .field("slot", &self.slot)
            .finish()
    }
}
