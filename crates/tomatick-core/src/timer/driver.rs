//! Tokio tick scheduler around the engine.
//!
//! [`TimerHandle`] owns a [`TimerEngine`] behind a mutex and keeps at most
//! one one-second interval task alive, present exactly while the engine is
//! running. Every command re-arms that task under a generation counter, so
//! a stale tick can never land after a pause or reset.
//!
//! Surfaces either pull [`TimerHandle::snapshot`] or watch the channel from
//! [`TimerHandle::subscribe`], which is updated after every command and tick.

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant};
use tracing::{debug, warn};

use super::engine::TimerEngine;
use super::schedule::ScheduleConfig;
use crate::events::Event;
use crate::notify::Notifier;

const TICK: Duration = Duration::from_secs(1);

struct Inner {
    engine: TimerEngine,
    /// Bumped on every command; a ticker observing an older value exits
    /// without touching the engine.
    generation: u64,
    ticker: Option<JoinHandle<()>>,
}

/// Handle to a driven timer. Cheap to clone; all clones share one engine.
///
/// Commands must be called from within a tokio runtime, since they may
/// spawn the interval task.
#[derive(Clone)]
pub struct TimerHandle {
    inner: Arc<Mutex<Inner>>,
    notifier: Arc<dyn Notifier>,
    snapshots: Arc<watch::Sender<Event>>,
}

impl TimerHandle {
    pub fn new(schedule: ScheduleConfig, notifier: Arc<dyn Notifier>) -> Self {
        let engine = TimerEngine::new(schedule);
        let (snapshots, _) = watch::channel(engine.snapshot());
        Self {
            inner: Arc::new(Mutex::new(Inner {
                engine,
                generation: 0,
                ticker: None,
            })),
            notifier,
            snapshots: Arc::new(snapshots),
        }
    }

    // ── Commands (Display Surface / Settings Editor -> engine) ───────

    pub fn start(&self) -> Option<Event> {
        self.command(TimerEngine::start)
    }

    pub fn pause(&self) -> Option<Event> {
        self.command(TimerEngine::pause)
    }

    pub fn toggle(&self) -> Option<Event> {
        self.command(TimerEngine::toggle)
    }

    pub fn reset(&self) -> Option<Event> {
        self.command(TimerEngine::reset)
    }

    /// Deliver one validated schedule from the settings editor. On cancel
    /// the editor simply never calls this.
    pub fn apply_schedule(&self, schedule: ScheduleConfig) -> Option<Event> {
        self.command(move |engine| engine.apply_schedule(schedule))
    }

    // ── Queries (engine -> Display Surface) ──────────────────────────

    /// Current state, rendered for a surface.
    pub fn snapshot(&self) -> Event {
        self.lock().engine.snapshot()
    }

    /// Watch channel of snapshots, updated after every command and tick.
    pub fn subscribe(&self) -> watch::Receiver<Event> {
        self.snapshots.subscribe()
    }

    // ── Internal ─────────────────────────────────────────────────────

    fn command<F>(&self, op: F) -> Option<Event>
    where
        F: FnOnce(&mut TimerEngine) -> Option<Event>,
    {
        let mut inner = self.lock();
        let event = op(&mut inner.engine);
        if let Some(event) = &event {
            debug!(?event, "command applied");
        }
        self.rearm(&mut inner);
        self.snapshots.send_replace(inner.engine.snapshot());
        event
    }

    /// Cancel the current ticker and start a new one when the engine is
    /// running. Called on every command, which guarantees at most one live
    /// tick source at any time.
    fn rearm(&self, inner: &mut Inner) {
        inner.generation = inner.generation.wrapping_add(1);
        if let Some(ticker) = inner.ticker.take() {
            ticker.abort();
        }
        if inner.engine.running() {
            let generation = inner.generation;
            inner.ticker = Some(tokio::spawn(self.clone().run_ticker(generation)));
        }
    }

    async fn run_ticker(self, generation: u64) {
        let mut clock = time::interval_at(Instant::now() + TICK, TICK);
        loop {
            clock.tick().await;
            // State is updated under the lock: ticks are never reentrant,
            // dropped, or double-applied.
            let completed = {
                let mut inner = self.lock();
                if inner.generation != generation || !inner.engine.running() {
                    return;
                }
                let completed = inner.engine.tick();
                self.snapshots.send_replace(inner.engine.snapshot());
                completed
            };
            if let Some(Event::SessionCompleted { finished, next, .. }) = completed {
                debug!(?finished, ?next, "session transition");
                // Fire-and-forget: the alert runs on the blocking pool and
                // never delays the next tick.
                let notifier = Arc::clone(&self.notifier);
                tokio::task::spawn_blocking(move || {
                    if let Err(err) = notifier.play() {
                        warn!(%err, "completion alert failed");
                    }
                });
            }
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        // Engine operations cannot panic, so a poisoned lock still holds
        // consistent state.
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
