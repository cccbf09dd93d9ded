//! Concrete observer implementations.

use crossbeam_channel::Sender;
use parking_lot::Mutex;
use tracing::debug;

use crate::observer::NumberObserver;

/// Observer that forwards values through a channel (non-blocking).
///
/// Values are dropped when the channel is full or disconnected.
pub struct ChannelObserver {
    sender: Sender<i32>,
}

impl ChannelObserver {
    /// Create a new channel observer.
    #[must_use]
    pub fn new(sender: Sender<i32>) -> Self {
        Self { sender }
    }
}

impl NumberObserver for ChannelObserver {
    fn on_number(&self, value: i32) {
        let _ = self.sender.try_send(value);
    }
}

/// Observer that logs every received value.
pub struct LoggingObserver {
    name: String,
}

impl LoggingObserver {
    /// Create a new logging observer identified by `name` in log output.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl NumberObserver for LoggingObserver {
    fn on_number(&self, value: i32) {
        debug!(observer = %self.name, value, "Number received");
    }
}

/// Observer that keeps every received value in arrival order.
#[derive(Default)]
pub struct RecordingObserver {
    values: Mutex<Vec<i32>>,
}

impl RecordingObserver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the values received so far.
    #[must_use]
    pub fn values(&self) -> Vec<i32> {
        self.values.lock().clone()
    }

    /// Number of values received so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.lock().is_empty()
    }
}

impl NumberObserver for RecordingObserver {
    fn on_number(&self, value: i32) {
        self.values.lock().push(value);
    }
}

/// Null object pattern: does nothing with received values.
pub struct NoOpObserver;

impl NoOpObserver {
    /// Create a new no-op observer that discards all values.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for NoOpObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl NumberObserver for NoOpObserver {
    fn on_number(&self, _value: i32) {
        // Intentionally empty
    }
}
