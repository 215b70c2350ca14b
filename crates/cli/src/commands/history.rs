use anyhow::{Context, Result};
use std::path::Path;

use crate::args::{HistoryArgs, OutputFormat};
use crate::history::History;
use crate::printing::print_history_entry;

pub fn show_history(args: &HistoryArgs, history_file: &Path) -> Result<()> {
    let mut history = History::load(history_file).context("Failed to load history")?;

    if args.clear {
        let removed = history.entries().len();
        history.clear();
        history.save().context("Failed to clear history")?;
        println!("✓ Cleared {removed} history entries");
        return Ok(());
    }

    match args.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(history.entries())?);
        }
        OutputFormat::Pretty => {
            if history.is_empty() {
                println!("No history yet.");
                return Ok(());
            }

            println!("\n📜 Recent conversions ({})", history.path().display());
            println!("{}", "=".repeat(50));
            for (i, entry) in history.entries().iter().enumerate() {
                print_history_entry(i, entry, args.full);
            }
        }
    }

    Ok(())
}
