//! Shared sources and log capture for establishment tests.

#![allow(dead_code)]

use std::collections::HashMap;
use std::marker::PhantomData;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use sources::Source;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

/// Error returned by [`Flaky`] while it is still refusing connections.
#[derive(Debug, thiserror::Error)]
#[error("connection refused (attempt {0})")]
pub struct Refused(pub u32);

/// A source that refuses its first `failures` connects, then builds a
/// connection with `make`.
///
/// `Tag` only distinguishes source types, giving each test its own global slot.
pub struct Flaky<C, Tag = ()> {
    failures: AtomicU32,
    connects: Arc<AtomicU32>,
    delay: Duration,
    make: fn() -> C,
    _tag: PhantomData<fn() -> Tag>,
}

impl<C, Tag> Flaky<C, Tag> {
    pub fn new(failures: u32, make: fn() -> C) -> Self {
        Self {
            failures: AtomicU32::new(failures),
            connects: Arc::new(AtomicU32::new(0)),
            delay: Duration::ZERO,
            make,
            _tag: PhantomData,
        }
    }

    pub fn always(make: fn() -> C) -> Self {
        Self::new(0, make)
    }

    /// Make every connect take `delay` before answering.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Connect counter, still readable after the source is moved.
    pub fn connects(&self) -> Arc<AtomicU32> {
        Arc::clone(&self.connects)
    }
}

impl<C: Send + Sync + 'static, Tag: 'static> Source for Flaky<C, Tag> {
    type Connection = C;
    type Error = Refused;

    async fn connect(&self) -> Result<C, Refused> {
        let attempt = self.connects.fetch_add(1, Ordering::SeqCst) + 1;
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        if self.failures.load(Ordering::SeqCst) > 0 {
            self.failures.fetch_sub(1, Ordering::SeqCst);
            return Err(Refused(attempt));
        }
        Ok((self.make)())
    }

    fn is_open(&self, _connection: &C) -> bool {
        true
    }
}

pub fn ok() -> String {
    "ok".to_string()
}

/// Counts tracing events per level.
#[derive(Clone, Default)]
pub struct LevelCounter {
    counts: Arc<Mutex<HashMap<Level, usize>>>,
}

impl LevelCounter {
    pub fn count(&self, level: Level) -> usize {
        self.counts.lock().unwrap().get(&level).copied().unwrap_or(0)
    }
}

impl<S: Subscriber> Layer<S> for LevelCounter {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        *self
            .counts
            .lock()
            .unwrap()
            .entry(*event.metadata().level())
            .or_default() += 1;
    }
}

/// Route this thread's tracing events into a fresh counter until the guard drops.
pub fn capture_logs() -> (LevelCounter, tracing::subscriber::DefaultGuard) {
    let counter = LevelCounter::default();
    let subscriber = tracing_subscriber::registry().with(counter.clone());
    let guard = tracing::subscriber::set_default(subscriber);
    (counter, guard)
}
