//! Config command implementation.

use anyhow::Result;

use crate::config::Config;

/// Show current configuration.
pub fn show(config: &Config) -> Result<()> {
    println!("Elementa Configuration");
    println!("{:-<40}", "");
    println!("Width:            {}", config.width);
    println!("Max Generations:  {}", config.max_generations);
    println!("Interval:         {} ms", config.interval_ms);
    println!("Default Rule:     {}", config.rule);
    println!("Alive Glyph:      {:?}", config.alive);
    println!("Dead Glyph:       {:?}", config.dead);

    if let Some(config_path) = Config::config_file_path() {
        println!("\nConfig file: {}", config_path.display());
    }

    Ok(())
}

/// Set a configuration value and persist it.
pub fn set(config: &mut Config, key: &str, value: &str) -> Result<()> {
    config.set(key, value)?;
    let path = config.save()?;
    println!("Set {} to: {}", key, value);
    println!("Saved to {}", path.display());
    Ok(())
}

/// Reset configuration to defaults.
pub fn reset() -> Result<()> {
    Config::default().save()?;
    println!("Configuration reset to defaults");
    Ok(())
}

/// Print the config file location.
pub fn path() {
    match Config::config_file_path() {
        Some(path) => println!("{}", path.display()),
        None => println!("(no config file path available)"),
    }
}
