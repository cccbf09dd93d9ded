//! Background generation runs.
//!
//! A generator moved onto its own thread is stopped the same way as a
//! synchronous one: by detaching its handler. `GenerationTask` keeps a clone
//! of the handler slot for that purpose. Dropping the task without joining
//! it stops the loop the same way and detaches the thread.

use std::thread::{self, JoinHandle};

use tracing::debug;

use crate::error::GeneratorError;
use crate::generator::NumberGenerator;
use crate::slot::HandlerSlot;

/// Handle to a generation loop running on a dedicated thread.
pub struct GenerationTask {
    slot: HandlerSlot,
    handle: Option<JoinHandle<u64>>,
}

impl GenerationTask {
    /// Request the loop to stop after its current pause.
    ///
    /// Returns `true` if a handler was attached. Stopping an already
    /// stopped task is not an error.
    pub fn stop(&self) -> bool {
        let detached = self.slot.take().is_some();
        debug!(detached, "generation stop requested");
        detached
    }

    /// Handler slot of the running generator.
    #[must_use]
    pub fn slot(&self) -> HandlerSlot {
        self.slot.clone()
    }

    /// Whether the generation thread has returned.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        match &self.handle {
            Some(handle) => handle.is_finished(),
            None => true,
        }
    }

    /// Wait for the loop to end and return how many values it generated.
    pub fn join(mut self) -> Result<u64, GeneratorError> {
        let handle = self.handle.take().ok_or(GeneratorError::WorkerPanicked)?;
        handle.join().map_err(|_| GeneratorError::WorkerPanicked)
    }
}

impl Drop for GenerationTask {
    fn drop(&mut self) {
        if self.handle.is_some() && self.slot.take().is_some() {
            debug!("generation task dropped while running");
        }
    }
}

impl NumberGenerator {
    /// Move the generator onto a new thread and start generating.
    ///
    /// Attach a handler before spawning; otherwise the loop produces one
    /// value and returns.
    pub fn spawn(self) -> Result<GenerationTask, GeneratorError> {
        let slot = self.slot();
        let handle = thread::Builder::new()
            .name("numgen-generator".to_string())
            .spawn(move || self.start_generation())?;
        Ok(GenerationTask {
            slot,
            handle: Some(handle),
        })
    }
}
