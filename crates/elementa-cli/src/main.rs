//! Elementa CLI - elementary cellular automata in the terminal.
//!
//! Grows a row of cells from a single seed under any of the 256 elementary
//! rules, printing one line per generation.

use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};
use elementa_automaton::ElementaryRule;
use tracing::Level;
use tracing_subscriber::EnvFilter;

mod commands;
mod config;
mod render;

use commands::run::RunOptions;
use config::Config;
use render::OutputFormat;

/// Elementa CLI - run elementary cellular automata.
#[derive(Parser, Debug)]
#[command(
    name = "elementa",
    author,
    version,
    about = "Elementa: one-dimensional elementary cellular automata",
    long_about = None
)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Run an automaton from a single seed (default command).
    Run {
        /// Rule number; values outside 0-255 use their low eight bits.
        #[arg(short, long, allow_negative_numbers = true)]
        rule: Option<ElementaryRule>,

        /// Cells per row.
        #[arg(short, long)]
        width: Option<usize>,

        /// Generations to produce (capped at 3000).
        #[arg(short, long)]
        max_generations: Option<usize>,

        /// Delay between generations in milliseconds.
        #[arg(short, long)]
        interval_ms: Option<u64>,

        /// Output format: text or json.
        #[arg(short, long, default_value = "text")]
        format: String,

        /// Glyph for live cells.
        #[arg(long)]
        alive: Option<char>,

        /// Glyph for dead cells.
        #[arg(long)]
        dead: Option<char>,

        /// Read start/stop/reset commands from stdin instead of starting at once.
        #[arg(long)]
        interactive: bool,
    },

    /// Print the neighbourhood table of a rule.
    Rule {
        /// Rule number.
        #[arg(allow_negative_numbers = true)]
        rule: ElementaryRule,

        /// Output format: text or json.
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Manage CLI configuration.
    #[command(subcommand)]
    Config(ConfigCommands),
}

/// Configuration subcommands.
#[derive(Subcommand, Debug)]
enum ConfigCommands {
    /// Show current configuration.
    Show,

    /// Set a configuration value.
    Set {
        /// Configuration key.
        key: String,
        /// Configuration value.
        value: String,
    },

    /// Reset configuration to defaults.
    Reset,

    /// Show path to config file.
    Path,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing based on verbosity
    let level = if cli.quiet {
        Level::ERROR
    } else if cli.verbose {
        Level::DEBUG
    } else {
        Level::WARN // Default to less noise
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_str().to_lowercase()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Load configuration
    let config = Config::load()?;

    // Default to run if no command given
    let command = cli.command.unwrap_or(Commands::Run {
        rule: None,
        width: None,
        max_generations: None,
        interval_ms: None,
        format: "text".to_string(),
        alive: None,
        dead: None,
        interactive: false,
    });

    match command {
        Commands::Run {
            rule,
            width,
            max_generations,
            interval_ms,
            format,
            alive,
            dead,
            interactive,
        } => {
            let format: OutputFormat = format.parse()?;
            let opts = RunOptions {
                rule: rule.unwrap_or_else(|| ElementaryRule::from_number(config.rule)),
                width: width.unwrap_or(config.width),
                max_generations: max_generations.unwrap_or(config.max_generations),
                interval: Duration::from_millis(interval_ms.unwrap_or(config.interval_ms)),
                format,
                alive: alive.unwrap_or(config.alive),
                dead: dead.unwrap_or(config.dead),
                interactive,
            };

            let status = commands::run::execute(opts).await?;
            match format {
                OutputFormat::Text => println!("generations: {}", status.generation_count),
                OutputFormat::Json => println!("{}", serde_json::to_string(&status)?),
            }
        }

        Commands::Rule { rule, format } => {
            commands::rule::execute(&rule, format.parse()?)?;
        }

        Commands::Config(config_cmd) => {
            let mut config = config;
            match config_cmd {
                ConfigCommands::Show => commands::config::show(&config)?,
                ConfigCommands::Set { key, value } => {
                    commands::config::set(&mut config, &key, &value)?
                }
                ConfigCommands::Reset => commands::config::reset()?,
                ConfigCommands::Path => commands::config::path(),
            }
        }
    }

    Ok(())
}
