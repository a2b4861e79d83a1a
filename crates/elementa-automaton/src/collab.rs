//! Collaborators injected into the engine.
//!
//! The engine knows nothing about rendering or timers. It pushes finished
//! generations into a [`GenerationSink`], reports progress through a
//! [`CompletionNotifier`], and tells a [`TickDriver`] when ticks should start
//! or stop. The driver owning the timer is responsible for calling
//! [`Automaton::step`](crate::Automaton::step) on each tick.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use crate::engine::EngineStatus;
use crate::generation::Generation;

/// Receives every produced generation, in production order.
pub trait GenerationSink: Send {
    /// Accept one finished generation.
    fn emit(&mut self, generation: &Generation);

    /// Drop everything displayed so far. Called on reset.
    fn clear(&mut self) {}
}

impl<F> GenerationSink for F
where
    F: FnMut(&Generation) + Send,
{
    fn emit(&mut self, generation: &Generation) {
        self(generation)
    }
}

/// Invoked after every step and every stop.
pub trait CompletionNotifier: Send {
    /// Refresh whatever the driver displays about the run.
    fn generation_complete(&mut self, status: &EngineStatus);
}

impl<F> CompletionNotifier for F
where
    F: FnMut(&EngineStatus) + Send,
{
    fn generation_complete(&mut self, status: &EngineStatus) {
        self(status)
    }
}

/// Notifier that ignores every notification.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopNotifier;

impl CompletionNotifier for NoopNotifier {
    fn generation_complete(&mut self, _status: &EngineStatus) {}
}

/// Start/stop signal for whatever periodically calls `step`.
pub trait TickDriver: Send {
    /// Ticks should begin (or continue).
    fn start_ticking(&mut self);

    /// No further ticks should be delivered.
    fn stop_ticking(&mut self);
}

/// A tick flag shared between the engine and the loop that drives it.
///
/// The engine holds one clone and flips it on start/stop; the driver loop
/// holds another and keeps ticking while [`SharedTicker::is_active`] is true.
#[derive(Debug, Default, Clone)]
pub struct SharedTicker {
    active: Arc<AtomicBool>,
}

impl SharedTicker {
    /// Create an inactive ticker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether ticks are currently wanted.
    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::Acquire)
    }
}

impl TickDriver for SharedTicker {
    fn start_ticking(&mut self) {
        self.active.store(true, Ordering::Release);
    }

    fn stop_ticking(&mut self) {
        self.active.store(false, Ordering::Release);
    }
}

/// In-memory sink; clones share the same buffer.
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    rows: Arc<Mutex<Vec<Generation>>>,
}

impl MemorySink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every generation received since the last clear.
    pub fn generations(&self) -> Vec<Generation> {
        self.rows
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Number of generations held.
    pub fn len(&self) -> usize {
        self.rows.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// True when nothing has been received since the last clear.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Most recent generation, if any.
    pub fn last(&self) -> Option<Generation> {
        self.rows
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .cloned()
    }
}

impl GenerationSink for MemorySink {
    fn emit(&mut self, generation: &Generation) {
        self.rows
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(generation.clone());
    }

    fn clear(&mut self) {
        self.rows
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}
