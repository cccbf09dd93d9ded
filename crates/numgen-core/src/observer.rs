//! Observer trait for receiving generated numbers.
//!
//! The generator itself only knows a single handler closure (see
//! [`crate::slot::HandlerSlot`]). Observers are the structured way to build
//! such a handler: [`into_handler`] wraps any observer into one.

use std::sync::Arc;

use crate::slot::NumberHandler;

/// Observer trait for receiving newly generated numbers.
pub trait NumberObserver: Send + Sync {
    /// Receive a generated value.
    fn on_number(&self, value: i32);
}

/// Wrap an observer into a handler closure suitable for a handler slot.
#[must_use]
pub fn into_handler<O>(observer: Arc<O>) -> NumberHandler
where
    O: NumberObserver + ?Sized + 'static,
{
    Arc::new(move |value: i32| observer.on_number(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingObserver {
        count: AtomicUsize,
    }

    impl NumberObserver for CountingObserver {
        fn on_number(&self, _value: i32) {
            self.count.fetch_add(1, Ordering::Relaxed);
        }
    }

    #[test]
    fn handler_forwards_to_observer() {
        let observer = Arc::new(CountingObserver {
            count: AtomicUsize::new(0),
        });
        let handler = into_handler(observer.clone());

        handler(7);
        handler(8);

        assert_eq!(observer.count.load(Ordering::Relaxed), 2);
    }

    #[test]
    fn handler_accepts_trait_object() {
        let observer: Arc<dyn NumberObserver> = Arc::new(CountingObserver {
            count: AtomicUsize::new(0),
        });
        let handler = into_handler(observer);
        handler(1);
    }
}
