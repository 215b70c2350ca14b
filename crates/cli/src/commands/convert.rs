use anyhow::{Context, Result};
use encodecraft_codec::{CodecKind, Operation};
use rayon::prelude::*;
use std::path::Path;

use crate::args::ConvertArgs;
use crate::history::History;
use crate::printing::print_stats;
use crate::utils::{read_input, write_output};

pub fn run_conversion(
    args: &ConvertArgs,
    operation: Operation,
    history_file: Option<&Path>,
) -> Result<()> {
    let input = read_input(args.text.as_deref(), args.input.as_ref())?;
    if input.trim().is_empty() {
        anyhow::bail!("Please enter text to {operation}");
    }

    let output = if args.lines {
        convert_lines(operation, args.codec, &input)?
    } else {
        operation.apply(args.codec, &input)?
    };

    log::info!(
        "{operation} with {}: {} chars in, {} chars out",
        args.codec,
        input.chars().count(),
        output.chars().count()
    );

    write_output(&output, args.output.as_deref())?;
    if let Some(path) = &args.output {
        eprintln!("✓ Output written to: {}", path.display());
    }

    if args.stats {
        print_stats(&input, &output);
    }

    if let Some(path) = history_file {
        // Output has already been delivered; a history failure is not fatal.
        if let Err(e) = record(path, operation, args.codec, &input, &output) {
            log::warn!("Could not record history: {e:#}");
        }
    }

    Ok(())
}

/// Convert each line on its own. Any failing line fails the whole input.
pub fn convert_lines(operation: Operation, codec: CodecKind, input: &str) -> Result<String> {
    let lines: Vec<&str> = input.lines().collect();
    let converted = lines
        .par_iter()
        .enumerate()
        .map(|(i, line)| {
            operation
                .apply(codec, line)
                .with_context(|| format!("Line {}", i + 1))
        })
        .collect::<Result<Vec<String>>>()?;

    Ok(converted.join("\n"))
}

fn record(
    path: &Path,
    operation: Operation,
    codec: CodecKind,
    input: &str,
    output: &str,
) -> Result<()> {
    let mut history = History::load(path)?;
    history.record(operation, codec, input, output);
    history.save()
}
