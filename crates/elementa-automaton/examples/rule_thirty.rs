//! Rule 30 grown from a single seed, driven by a plain thread loop.
//!
//! Run with:
//! ```bash
//! cargo run --example rule_thirty -p elementa-automaton -- [rule] [width] [generations]
//! ```

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use elementa_automaton::{
    rule::RULE_30, Automaton, ElementaryRule, EngineConfig, EngineStatus, Generation,
    SharedTicker,
};

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();

    let rule: ElementaryRule = match args.get(1) {
        Some(text) => text.parse()?,
        None => ElementaryRule::new(RULE_30),
    };
    let width = args.get(2).map(|s| s.parse::<usize>()).transpose()?.unwrap_or(79);
    let generations = args.get(3).map(|s| s.parse::<usize>()).transpose()?.unwrap_or(40);
    let delay = Duration::from_millis(20);

    let ticker = SharedTicker::new();
    let mut automaton = Automaton::new(
        EngineConfig::new(width, generations),
        |row: &Generation| println!("\x1B[92m{row}\x1B[0m"),
        |status: &EngineStatus| {
            if !status.is_running {
                println!("── stopped at generation {}", status.generation_count);
            }
        },
        ticker.clone(),
    )?;

    // Ctrl+C maps to stop()
    let interrupted = Arc::new(AtomicBool::new(false));
    let flag = interrupted.clone();
    ctrlc::set_handler(move || flag.store(true, Ordering::SeqCst)).ok();

    println!("{rule}, width {width}\n");
    automaton.start_with(rule);

    while ticker.is_active() {
        if interrupted.load(Ordering::SeqCst) {
            automaton.stop();
            break;
        }
        automaton.step()?;
        thread::sleep(delay);
    }

    println!("generations: {}", automaton.generation_count());
    Ok(())
}
