//! The automaton engine.
//!
//! [`Automaton`] owns the current generation, the active rule and the
//! generation counter. A driver calls [`Automaton::start`] once, then
//! [`Automaton::step`] on every tick until the run stops, either explicitly
//! through [`Automaton::stop`] or automatically once the generation limit is
//! reached.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::collab::{CompletionNotifier, GenerationSink, TickDriver};
use crate::config::EngineConfig;
use crate::error::{AutomatonError, AutomatonResult};
use crate::generation::Generation;
use crate::rule::ElementaryRule;

/// Snapshot handed to the [`CompletionNotifier`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineStatus {
    /// Generations produced since construction or the last reset.
    pub generation_count: u64,

    /// Whether a run is active.
    pub is_running: bool,

    /// Effective (clamped) generation limit.
    pub max_generations: usize,

    /// Active rule number, if a run was ever started.
    pub rule: Option<u8>,
}

/// Result of a single step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepReport {
    /// Generation count after this step.
    pub generation: u64,

    /// Live cells in the generation just produced.
    pub population: usize,

    /// True when this step hit the generation limit and stopped the run.
    pub finished: bool,
}

/// Elementary cellular automaton engine.
pub struct Automaton {
    width: usize,
    max_generations: usize,
    cells: Generation,
    rule: Option<ElementaryRule>,
    generation_count: u64,
    is_running: bool,

    sink: Box<dyn GenerationSink>,
    notifier: Box<dyn CompletionNotifier>,
    ticker: Box<dyn TickDriver>,
}

impl Automaton {
    /// Create an engine. Fails on a zero width or zero generation limit.
    pub fn new(
        config: EngineConfig,
        sink: impl GenerationSink + 'static,
        notifier: impl CompletionNotifier + 'static,
        ticker: impl TickDriver + 'static,
    ) -> AutomatonResult<Self> {
        let config = config.validated()?;
        debug!(
            width = config.width,
            max_generations = config.max_generations,
            "automaton_created"
        );

        Ok(Self {
            width: config.width,
            max_generations: config.max_generations,
            cells: Generation::default(),
            rule: None,
            generation_count: 0,
            is_running: false,
            sink: Box::new(sink),
            notifier: Box::new(notifier),
            ticker: Box::new(ticker),
        })
    }

    /// Begin a run with the given rule number.
    ///
    /// Numbers outside `0..=255` are reduced to their low eight bits. The
    /// generation counter is left untouched; call [`Automaton::reset`] first
    /// to count from zero.
    pub fn start(&mut self, rule_number: i64) {
        self.start_with(ElementaryRule::from_number(rule_number));
    }

    /// Begin a run with an already decoded rule.
    pub fn start_with(&mut self, rule: ElementaryRule) {
        self.is_running = true;
        self.rule = Some(rule);
        self.cells = Generation::seeded(self.width);

        info!(
            rule = rule.number(),
            width = self.width,
            generation_count = self.generation_count,
            "automaton_run_start"
        );

        self.sink.emit(&self.cells);
        self.ticker.start_ticking();
    }

    /// Produce the next generation.
    ///
    /// When the counter has reached `max_generations - 1` the run is stopped
    /// first, and this call still produces one final generation.
    pub fn step(&mut self) -> AutomatonResult<StepReport> {
        let rule = match self.rule {
            Some(rule) if self.is_running => rule,
            _ => return Err(AutomatonError::NotRunning),
        };

        let limit = self.max_generations as u64;
        let finished = self.generation_count >= limit.saturating_sub(1);
        if finished {
            self.stop();
        }

        let next = next_generation(&self.cells, &rule);

        self.sink.emit(&next);
        self.cells = next;
        self.generation_count += 1;

        let report = StepReport {
            generation: self.generation_count,
            population: self.cells.population(),
            finished,
        };
        debug!(
            generation = report.generation,
            population = report.population,
            "automaton_step_complete"
        );

        let status = self.status();
        self.notifier.generation_complete(&status);

        Ok(report)
    }

    /// Stop the run and cancel further ticks. Always notifies.
    pub fn stop(&mut self) {
        self.is_running = false;
        self.ticker.stop_ticking();
        info!(generation_count = self.generation_count, "automaton_run_stop");

        let status = self.status();
        self.notifier.generation_complete(&status);
    }

    /// Zero the counter, stop, and clear the cells and the sink.
    pub fn reset(&mut self) {
        self.generation_count = 0;
        self.stop();
        self.cells = Generation::default();
        self.sink.clear();
        debug!("automaton_reset");
    }

    /// Whether a run is active.
    pub fn is_running(&self) -> bool {
        self.is_running
    }

    /// Generations produced since construction or the last reset.
    pub fn generation_count(&self) -> u64 {
        self.generation_count
    }

    /// Cells per row.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Effective (clamped) generation limit.
    pub fn max_generations(&self) -> usize {
        self.max_generations
    }

    /// Rule of the current or last run.
    pub fn rule(&self) -> Option<ElementaryRule> {
        self.rule
    }

    /// The current generation. Empty before the first start and after reset.
    pub fn cells(&self) -> &Generation {
        &self.cells
    }

    /// Snapshot of the counters and flags.
    pub fn status(&self) -> EngineStatus {
        EngineStatus {
            generation_count: self.generation_count,
            is_running: self.is_running,
            max_generations: self.max_generations,
            rule: self.rule.map(|r| r.number()),
        }
    }
}

impl std::fmt::Debug for Automaton {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Automaton")
            .field("width", &self.width)
            .field("max_generations", &self.max_generations)
            .field("rule", &self.rule.map(|r| r.number()))
            .field("generation_count", &self.generation_count)
            .field("is_running", &self.is_running)
            .finish()
    }
}

/// Apply `rule` to every cell of `cells`, reading 0 beyond either edge.
pub fn next_generation(cells: &Generation, rule: &ElementaryRule) -> Generation {
    (0..cells.len() as isize)
        .map(|i| rule.apply(cells.get(i - 1), cells.get(i), cells.get(i + 1)))
        .collect()
}
