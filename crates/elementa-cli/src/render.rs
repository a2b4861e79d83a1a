//! Terminal sinks for the engine.

use std::io::{self, IsTerminal, Write};

use elementa_automaton::{CompletionNotifier, EngineStatus, Generation, GenerationSink};
use serde::Serialize;
use tracing::{debug, warn};

/// Output format for generations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => anyhow::bail!("Unknown format: {}. Use 'text' or 'json'", s),
        }
    }
}

#[derive(Serialize)]
struct JsonRow<'a> {
    row: u64,
    population: usize,
    cells: &'a Generation,
}

/// Prints every generation to stdout, one line each.
#[derive(Debug)]
pub struct RowPrinter {
    format: OutputFormat,
    alive: char,
    dead: char,
    rows: u64,
}

impl RowPrinter {
    pub fn new(format: OutputFormat, alive: char, dead: char) -> Self {
        Self {
            format,
            alive,
            dead,
            rows: 0,
        }
    }

    fn line(&self, generation: &Generation) -> io::Result<String> {
        match self.format {
            OutputFormat::Text => Ok(generation.render(self.alive, self.dead)),
            OutputFormat::Json => serde_json::to_string(&JsonRow {
                row: self.rows,
                population: generation.population(),
                cells: generation,
            })
            .map_err(io::Error::from),
        }
    }
}

impl GenerationSink for RowPrinter {
    fn emit(&mut self, generation: &Generation) {
        let written = self
            .line(generation)
            .and_then(|line| writeln!(io::stdout().lock(), "{line}"));
        if let Err(e) = written {
            warn!(error = %e, "failed to write generation");
        }
        self.rows += 1;
    }

    fn clear(&mut self) {
        debug!(rows = self.rows, "output_cleared");
        self.rows = 0;
        if self.format == OutputFormat::Text && io::stdout().is_terminal() {
            print!("\x1B[2J\x1B[H");
        }
    }
}

/// Live generation counter on stderr, shown only on a terminal.
#[derive(Debug, Default)]
pub struct CounterDisplay {
    enabled: bool,
}

impl CounterDisplay {
    pub fn new() -> Self {
        Self {
            enabled: io::stderr().is_terminal(),
        }
    }
}

impl CompletionNotifier for CounterDisplay {
    fn generation_complete(&mut self, status: &EngineStatus) {
        if !self.enabled {
            return;
        }
        let state = if status.is_running { "running" } else { "stopped" };
        let _ = write!(
            io::stderr().lock(),
            "\rgenerations: {} ({})   ",
            status.generation_count,
            state
        );
    }
}
