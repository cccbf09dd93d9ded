//! Application entry point and dispatch.

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use parking_lot::Mutex;
use tracing::{debug, info};

use numgen_cli::presenter::{present_summary, ValuePresenter};
use numgen_core::constants::exit_codes;
use numgen_core::observers::{LoggingObserver, NoOpObserver};
use numgen_core::{HandlerSlot, NumberGenerator, NumberObserver};

use crate::config::AppConfig;
use crate::version::full_version;

/// Result of a completed generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutcome {
    /// Values produced by the generator.
    pub generated: u64,
    /// Values delivered to the presenter.
    pub received: u64,
    /// Whether the run was ended by Ctrl+C.
    pub interrupted: bool,
    pub elapsed: Duration,
}

impl RunOutcome {
    /// Process exit code for this outcome.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        if self.interrupted {
            exit_codes::ERROR_CANCELED
        } else {
            exit_codes::SUCCESS
        }
    }
}

/// Run the application.
pub fn run(config: &AppConfig) -> Result<RunOutcome> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        numgen_cli::completion::generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return Ok(RunOutcome {
            generated: 0,
            received: 0,
            interrupted: false,
            elapsed: Duration::ZERO,
        });
    }

    debug!(version = %full_version(), "starting");
    let generator = build_generator(config)?;
    info!(
        delay_ms = config.delay,
        seed = generator.seed(),
        count = config.count,
        "generator configured"
    );

    let interrupted = Arc::new(AtomicBool::new(false));
    ctrlc_handler(generator.slot(), interrupted.clone())?;

    let presenter = Arc::new(ValuePresenter::stdout(config.format));
    let tap: Arc<dyn NumberObserver> = if config.verbose {
        Arc::new(LoggingObserver::new("stdout"))
    } else {
        Arc::new(NoOpObserver::new())
    };
    let write_failure = attach_presenter(&generator.slot(), presenter.clone(), config.count, tap);

    let start = Instant::now();
    let generated = generator.start_generation();
    check_write_failure(write_failure.lock().take())?;
    let outcome = RunOutcome {
        generated,
        received: presenter.received(),
        interrupted: interrupted.load(Ordering::SeqCst),
        elapsed: start.elapsed(),
    };

    if !config.quiet {
        present_summary(outcome.generated, outcome.received, outcome.elapsed);
    }
    Ok(outcome)
}

/// Build the generator from the configured delay and optional seed.
pub fn build_generator(config: &AppConfig) -> Result<NumberGenerator> {
    let generator = match config.seed {
        Some(seed) => NumberGenerator::with_delay_and_seed(config.delay, seed)?,
        None => NumberGenerator::with_delay(config.delay)?,
    };
    Ok(generator)
}

/// First output error seen by the presenter handler.
pub type WriteFailure = Arc<Mutex<Option<io::Error>>>;

/// Attach a handler that presents each value, passes it to `tap`, and
/// detaches after `count` values (`0` keeps it attached).
///
/// A failed write also detaches the handler; the error is left in the
/// returned [`WriteFailure`].
pub fn attach_presenter<W>(
    slot: &HandlerSlot,
    presenter: Arc<ValuePresenter<W>>,
    count: u64,
    tap: Arc<dyn NumberObserver>,
) -> WriteFailure
where
    W: io::Write + Send + 'static,
{
    let failure = WriteFailure::default();
    let recorded = failure.clone();
    let stop = slot.clone();
    slot.attach(move |value| {
        tap.on_number(value);
        match presenter.present_value(value) {
            Ok(index) if count != 0 && index >= count => {
                stop.take();
            }
            Ok(_) => {}
            Err(e) => {
                stop.take();
                recorded.lock().get_or_insert(e);
            }
        }
    });
    failure
}

/// A closed reader (`numgen | head`) ends the run normally; any other
/// write error fails it.
fn check_write_failure(failure: Option<io::Error>) -> Result<()> {
    match failure {
        None => Ok(()),
        Some(e) if e.kind() == io::ErrorKind::BrokenPipe => {
            debug!("output closed by reader");
            Ok(())
        }
        Some(e) => Err(e).context("failed to write value"),
    }
}

fn ctrlc_handler(slot: HandlerSlot, interrupted: Arc<AtomicBool>) -> Result<()> {
    ctrlc::set_handler(move || {
        interrupted.store(true, Ordering::SeqCst);
        slot.take();
    })
    .context("failed to install Ctrl+C handler")
}
