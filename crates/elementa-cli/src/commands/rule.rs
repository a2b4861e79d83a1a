//! `elementa rule` — prints the decoded neighbourhood table.

use anyhow::Result;
use elementa_automaton::ElementaryRule;
use serde_json::json;

use crate::render::OutputFormat;

/// Render the table for `rule`.
pub fn table(rule: &ElementaryRule, format: OutputFormat) -> Result<String> {
    let out = match format {
        OutputFormat::Text => {
            let (patterns, outputs): (Vec<String>, Vec<String>) = rule
                .neighbourhoods()
                .map(|(pattern, out)| {
                    let pattern: String = pattern.iter().map(|c| c.to_string()).collect();
                    (pattern, format!(" {out} "))
                })
                .unzip();
            format!(
                "{} ({:08b})\n{}\n{}",
                rule,
                rule.number(),
                patterns.join(" "),
                outputs.join(" ")
            )
        }
        OutputFormat::Json => {
            let table: serde_json::Map<String, serde_json::Value> = rule
                .neighbourhoods()
                .map(|(pattern, out)| {
                    let key: String = pattern.iter().map(|c| c.to_string()).collect();
                    (key, json!(out))
                })
                .collect();
            serde_json::to_string_pretty(&json!({
                "number": rule.number(),
                "table": table,
            }))?
        }
    };
    Ok(out)
}

/// Execute the `elementa rule` command.
pub fn execute(rule: &ElementaryRule, format: OutputFormat) -> Result<()> {
    println!("{}", table(rule, format)?);
    Ok(())
}
