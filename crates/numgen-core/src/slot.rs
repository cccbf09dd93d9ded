//! Single-slot handler storage shared between the generator and its owners.
//!
//! A `HandlerSlot` holds at most one handler. Clones share the same storage,
//! so a handler can detach itself, and another thread can stop a running
//! generation loop by detaching.

use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{debug, warn};

use crate::error::GeneratorError;
use crate::observer::{into_handler, NumberObserver};

/// Callback invoked with every generated value.
pub type NumberHandler = Arc<dyn Fn(i32) + Send + Sync>;

/// Thread-safe optional handler.
#[derive(Clone, Default)]
pub struct HandlerSlot {
    inner: Arc<Mutex<Option<NumberHandler>>>,
}

impl HandlerSlot {
    /// Create an empty slot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the currently attached handler, if any.
    #[must_use]
    pub fn get(&self) -> Option<NumberHandler> {
        self.inner.lock().clone()
    }

    /// Replace the slot content.
    ///
    /// `Some` always succeeds and replaces any attached handler. `None`
    /// detaches, and fails with [`GeneratorError::InvalidArgument`] when the
    /// slot is already empty.
    pub fn set(&self, handler: Option<NumberHandler>) -> Result<(), GeneratorError> {
        let mut slot = self.inner.lock();
        if slot.is_none() && handler.is_none() {
            warn!("rejected detach of an empty handler slot");
            return Err(GeneratorError::InvalidArgument(
                "no handler is attached".to_string(),
            ));
        }
        debug!(
            attached = handler.is_some(),
            replaced = slot.is_some() && handler.is_some(),
            "handler slot updated"
        );
        *slot = handler;
        Ok(())
    }

    /// Attach a handler, replacing any existing one.
    pub fn attach<F>(&self, handler: F)
    where
        F: Fn(i32) + Send + Sync + 'static,
    {
        *self.inner.lock() = Some(Arc::new(handler));
        debug!("handler attached");
    }

    /// Attach an observer, replacing any existing handler.
    pub fn attach_observer<O>(&self, observer: Arc<O>)
    where
        O: NumberObserver + ?Sized + 'static,
    {
        *self.inner.lock() = Some(into_handler(observer));
        debug!("observer attached");
    }

    /// Detach the current handler. Fails if the slot is already empty.
    pub fn detach(&self) -> Result<(), GeneratorError> {
        self.set(None)
    }

    /// Detach and return the current handler without failing on an empty slot.
    pub fn take(&self) -> Option<NumberHandler> {
        self.inner.lock().take()
    }

    /// Whether a handler is currently attached.
    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.inner.lock().is_some()
    }
}

impl fmt::Debug for HandlerSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandlerSlot")
            .field("attached", &self.is_attached())
            .finish()
    }
}
