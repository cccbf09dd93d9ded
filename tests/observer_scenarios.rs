//! Cross-crate scenarios for handler attachment and generation runs.
//!
//! All generators use zero delay and explicit seeds.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;

use numgen_core::observers::{ChannelObserver, RecordingObserver};
use numgen_core::{GeneratorError, NumberGenerator, NumberHandler};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn generator(seed: i64) -> NumberGenerator {
    NumberGenerator::with_delay_and_seed(0, seed).unwrap()
}

/// Handler that records values and detaches after `limit` of them.
fn detaching_recorder(
    generator: &NumberGenerator,
    limit: usize,
) -> (NumberHandler, Arc<Mutex<Vec<i32>>>) {
    let values = Arc::new(Mutex::new(Vec::new()));
    let sink = values.clone();
    let slot = generator.slot();
    let handler: NumberHandler = Arc::new(move |value: i32| {
        let mut guard = sink.lock();
        guard.push(value);
        if guard.len() == limit {
            slot.detach().unwrap();
        }
    });
    (handler, values)
}

// ---------------------------------------------------------------------------
// Scenarios
// ---------------------------------------------------------------------------

#[test]
fn self_detaching_handler_stops_after_three() {
    let generator = generator(42);
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = calls.clone();
    let slot = generator.slot();
    generator
        .set_handler(Some(Arc::new(move |_: i32| {
            if counter.fetch_add(1, Ordering::SeqCst) + 1 == 3 {
                slot.detach().unwrap();
            }
        })))
        .unwrap();

    assert_eq!(generator.start_generation(), 3);
    assert_eq!(calls.load(Ordering::SeqCst), 3);
}

#[test]
fn independent_generators_agree() {
    let a = generator(42);
    let b = generator(42);
    let (ha, va) = detaching_recorder(&a, 5);
    let (hb, vb) = detaching_recorder(&b, 5);
    a.set_handler(Some(ha)).unwrap();
    b.set_handler(Some(hb)).unwrap();

    a.start_generation();
    b.start_generation();

    assert_eq!(va.lock().len(), 5);
    assert_eq!(*va.lock(), *vb.lock());
}

#[test]
fn redundant_detach_fails_on_second_call() {
    let generator = generator(1);
    generator.set_handler(Some(Arc::new(|_: i32| {}))).unwrap();

    assert!(generator.set_handler(None).is_ok());
    let err = generator.set_handler(None).unwrap_err();
    assert!(matches!(err, GeneratorError::InvalidArgument(_)));
}

#[test]
fn detach_on_fresh_generator_fails() {
    let generator = generator(1);
    assert!(generator.handler().is_none());
    assert!(matches!(
        generator.set_handler(None),
        Err(GeneratorError::InvalidArgument(_))
    ));
}

#[test]
fn replacing_handler_routes_to_newest() {
    let generator = generator(8);
    let old = Arc::new(RecordingObserver::new());
    generator.slot().attach_observer(old.clone());

    let (newest, values) = detaching_recorder(&generator, 6);
    assert!(generator.set_handler(Some(newest)).is_ok());
    generator.start_generation();

    assert!(old.is_empty());
    assert_eq!(values.lock().len(), 6);
}

#[test]
fn start_without_handler_runs_one_pass() {
    let generator = generator(3);
    assert_eq!(generator.start_generation(), 1);
    assert!(generator.handler().is_none());
}

#[test]
fn restart_after_return_replays_sequence() {
    let generator = generator(11);

    let (h1, first) = detaching_recorder(&generator, 7);
    generator.set_handler(Some(h1)).unwrap();
    generator.start_generation();

    let (h2, second) = detaching_recorder(&generator, 7);
    generator.set_handler(Some(h2)).unwrap();
    generator.start_generation();

    assert_eq!(*first.lock(), *second.lock());
}

#[test]
fn channel_observer_receives_sequence() {
    let generator = generator(21);
    let (tx, rx) = crossbeam_channel::unbounded();
    let forward = Arc::new(ChannelObserver::new(tx));
    let slot = generator.slot();
    let stop = slot.clone();
    let seen = Arc::new(AtomicUsize::new(0));
    let counter = seen.clone();
    slot.attach(move |value| {
        numgen_core::NumberObserver::on_number(forward.as_ref(), value);
        if counter.fetch_add(1, Ordering::SeqCst) + 1 == 10 {
            stop.detach().unwrap();
        }
    });

    generator.start_generation();

    let received: Vec<i32> = rx.try_iter().collect();
    assert_eq!(received.len(), 10);

    let (replay, values) = detaching_recorder(&generator, 10);
    generator.set_handler(Some(replay)).unwrap();
    generator.start_generation();
    assert_eq!(received, *values.lock());
}

#[test]
fn background_task_matches_synchronous_run() {
    let sync = generator(55);
    let (handler, expected) = detaching_recorder(&sync, 8);
    sync.set_handler(Some(handler)).unwrap();
    sync.start_generation();

    let background = generator(55);
    let (handler, actual) = detaching_recorder(&background, 8);
    background.set_handler(Some(handler)).unwrap();
    let task = background.spawn().unwrap();

    assert_eq!(task.join().unwrap(), 8);
    assert_eq!(*expected.lock(), *actual.lock());
}

#[test]
fn background_task_stopped_from_another_thread() {
    let generator = NumberGenerator::with_delay_and_seed(5, 2).unwrap();
    let recorder = Arc::new(RecordingObserver::new());
    generator.slot().attach_observer(recorder.clone());

    let task = generator.spawn().unwrap();
    std::thread::sleep(Duration::from_millis(30));
    task.stop();
    let generated = task.join().unwrap();

    assert!(generated >= 1);
    assert!(recorder.len() as u64 <= generated);
}
