//! CLI value presenter.

use std::io::{self, Write};
use std::time::Duration;

use parking_lot::Mutex;
use tracing::warn;

use numgen_core::NumberObserver;

use crate::output::{format_duration, format_value, OutputFormat};

/// Writes every received value to an output stream.
///
/// Acts as the observer the `numgen` binary attaches to the generator.
pub struct ValuePresenter<W: Write + Send = io::Stdout> {
    format: OutputFormat,
    out: Mutex<PresenterState<W>>,
}

struct PresenterState<W> {
    writer: W,
    received: u64,
}

impl ValuePresenter<io::Stdout> {
    /// Presenter writing to stdout.
    #[must_use]
    pub fn stdout(format: OutputFormat) -> Self {
        Self::new(format, io::stdout())
    }
}

impl<W: Write + Send> ValuePresenter<W> {
    #[must_use]
    pub fn new(format: OutputFormat, writer: W) -> Self {
        Self {
            format,
            out: Mutex::new(PresenterState {
                writer,
                received: 0,
            }),
        }
    }

    /// Write one value and return its 1-based index within the run.
    ///
    /// A failed write is returned and does not count as delivered.
    pub fn present_value(&self, value: i32) -> io::Result<u64> {
        let mut state = self.out.lock();
        let index = state.received + 1;
        let line = format_value(self.format, index, value);
        writeln!(state.writer, "{line}")?;
        state.writer.flush()?;
        state.received = index;
        Ok(index)
    }

    /// Number of values presented so far.
    #[must_use]
    pub fn received(&self) -> u64 {
        self.out.lock().received
    }

    /// Consume the presenter and return the underlying writer.
    pub fn into_inner(self) -> W {
        self.out.into_inner().writer
    }
}

impl<W: Write + Send> NumberObserver for ValuePresenter<W> {
    fn on_number(&self, value: i32) {
        if let Err(e) = self.present_value(value) {
            warn!(error = %e, "failed to write value");
        }
    }
}

/// Print the end-of-run summary to stderr.
pub fn present_summary(generated: u64, received: u64, elapsed: Duration) {
    eprintln!(
        "Generated {generated} value(s), delivered {received} in {}",
        format_duration(elapsed)
    );
}
