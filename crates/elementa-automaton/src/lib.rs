//! Elementary (Wolfram-style) one-dimensional cellular automaton engine.
//!
//! A row of `width` binary cells evolves generation by generation. Each cell's
//! next value depends only on itself and its two neighbours, looked up in the
//! eight-entry table encoded by a rule number `0..=255`. Cells beyond either
//! edge always read as dead.
//!
//! ## Lifecycle
//!
//! ```text
//! new(config, sink, notifier, ticker)
//!   start(rule)   seed [0 .. 1 .. 0], emit it, ticker.start_ticking()
//!   step()        on every tick: emit next generation, count += 1, notify
//!   stop()        ticker.stop_ticking(), notify
//!   reset()       count = 0, stop(), clear cells and sink
//! ```
//!
//! The engine never owns a timer. Whatever drives it observes the
//! [`TickDriver`] signals and calls [`Automaton::step`] at its own cadence.
//!
//! ```
//! use elementa_automaton::{Automaton, EngineConfig, MemorySink, NoopNotifier, SharedTicker};
//!
//! let sink = MemorySink::new();
//! let ticker = SharedTicker::new();
//! let mut automaton = Automaton::new(
//!     EngineConfig::new(5, 10),
//!     sink.clone(),
//!     NoopNotifier,
//!     ticker.clone(),
//! )?;
//!
//! automaton.start(1);
//! while ticker.is_active() {
//!     automaton.step()?;
//! }
//!
//! assert_eq!(automaton.generation_count(), 10);
//! assert_eq!(sink.len(), 11);
//! # Ok::<(), elementa_automaton::AutomatonError>(())
//! ```

mod collab;
pub mod config;
mod engine;
mod error;
mod generation;
pub mod rule;

pub use collab::{
    CompletionNotifier, GenerationSink, MemorySink, NoopNotifier, SharedTicker, TickDriver,
};
pub use config::{EngineConfig, MAX_ALLOWED_GENERATIONS};
pub use engine::{next_generation, Automaton, EngineStatus, StepReport};
pub use error::{AutomatonError, AutomatonResult};
pub use generation::{Cell, Generation, ALIVE, DEAD};
pub use rule::ElementaryRule;
