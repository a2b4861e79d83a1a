//! `elementa run` — drives the engine on a tokio interval.
//!
//! The interval is the tick driver: it fires only while the engine's
//! [`SharedTicker`] is active. Ctrl-C stops the run. With `--interactive`,
//! stdin lines play the part of the original Start/Stop and Reset buttons.

use std::io::BufRead;
use std::time::Duration;

use anyhow::Result;
use elementa_automaton::{
    Automaton, AutomatonError, ElementaryRule, EngineConfig, EngineStatus, SharedTicker,
};
use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info};

use crate::render::{CounterDisplay, OutputFormat, RowPrinter};

/// Resolved options for a run.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub rule: ElementaryRule,
    pub width: usize,
    pub max_generations: usize,
    pub interval: Duration,
    pub format: OutputFormat,
    pub alive: char,
    pub dead: char,
    pub interactive: bool,
}

/// A line typed in interactive mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Start with the given (or default) rule, or stop if running.
    Toggle(Option<ElementaryRule>),
    Reset,
    Quit,
}

impl std::str::FromStr for Control {
    type Err = AutomatonError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        match line.trim().to_lowercase().as_str() {
            "" | "start" | "stop" => Ok(Self::Toggle(None)),
            "reset" => Ok(Self::Reset),
            "quit" | "exit" | "q" => Ok(Self::Quit),
            other => other.parse().map(|rule| Self::Toggle(Some(rule))),
        }
    }
}

/// Forward stdin lines from a detached thread so a pending read never
/// holds up runtime shutdown.
fn spawn_stdin_reader() -> mpsc::UnboundedReceiver<String> {
    let (tx, rx) = mpsc::unbounded_channel();
    std::thread::spawn(move || {
        for line in std::io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            if tx.send(line).is_err() {
                break;
            }
        }
    });
    rx
}

/// Execute the `elementa run` command. Returns the final engine status.
pub async fn execute(opts: RunOptions) -> Result<EngineStatus> {
    let ticker = SharedTicker::new();
    let mut automaton = Automaton::new(
        EngineConfig::new(opts.width, opts.max_generations),
        RowPrinter::new(opts.format, opts.alive, opts.dead),
        CounterDisplay::new(),
        ticker.clone(),
    )?;

    let mut interval = tokio::time::interval(opts.interval.max(Duration::from_millis(1)));
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    let mut lines = if opts.interactive {
        spawn_stdin_reader()
    } else {
        mpsc::unbounded_channel().1
    };
    let mut listening = opts.interactive;
    let mut last_rule = opts.rule;

    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    if opts.interactive {
        eprintln!("Enter a rule number to start, Enter to start/stop, 'reset', or 'quit'.");
    } else {
        automaton.start_with(opts.rule);
    }

    loop {
        if !listening && !ticker.is_active() {
            break;
        }

        tokio::select! {
            _ = interval.tick(), if ticker.is_active() => {
                let report = automaton.step()?;
                if report.finished {
                    info!(generation = report.generation, "generation limit reached");
                }
            }
            line = lines.recv(), if listening => {
                let Some(line) = line else {
                    debug!("stdin closed");
                    listening = false;
                    continue;
                };
                match line.parse::<Control>() {
                    Ok(Control::Toggle(rule)) => {
                        if automaton.is_running() {
                            automaton.stop();
                        } else {
                            last_rule = rule.unwrap_or(last_rule);
                            automaton.start_with(last_rule);
                        }
                    }
                    Ok(Control::Reset) => automaton.reset(),
                    Ok(Control::Quit) => {
                        if automaton.is_running() {
                            automaton.stop();
                        }
                        break;
                    }
                    Err(e) => eprintln!("{e}"),
                }
            }
            _ = &mut ctrl_c => {
                info!("interrupted");
                if automaton.is_running() {
                    automaton.stop();
                }
                break;
            }
        }
    }

    Ok(automaton.status())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_control_parse() {
        assert_eq!("".parse::<Control>().unwrap(), Control::Toggle(None));
        assert_eq!(" stop ".parse::<Control>().unwrap(), Control::Toggle(None));
        assert_eq!(
            "110".parse::<Control>().unwrap(),
            Control::Toggle(Some(ElementaryRule::new(110)))
        );
        assert_eq!("RESET".parse::<Control>().unwrap(), Control::Reset);
        assert_eq!("q".parse::<Control>().unwrap(), Control::Quit);
        assert!(matches!(
            "pause".parse::<Control>(),
            Err(AutomatonError::InvalidRuleNumber { .. })
        ));
    }

    #[tokio::test]
    async fn test_run_stops_at_limit() {
        let status = execute(RunOptions {
            rule: ElementaryRule::new(30),
            width: 11,
            max_generations: 4,
            interval: Duration::from_millis(1),
            format: OutputFormat::Text,
            alive: '#',
            dead: '.',
            interactive: false,
        })
        .await
        .unwrap();

        assert_eq!(status.generation_count, 4);
        assert!(!status.is_running);
        assert_eq!(status.rule, Some(30));
    }

    #[tokio::test]
    async fn test_zero_width_is_an_error() {
        let result = execute(RunOptions {
            rule: ElementaryRule::new(30),
            width: 0,
            max_generations: 4,
            interval: Duration::from_millis(1),
            format: OutputFormat::Text,
            alive: '#',
            dead: '.',
            interactive: false,
        })
        .await;

        assert!(result.is_err());
    }
}
