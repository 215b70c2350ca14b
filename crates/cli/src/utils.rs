use anyhow::{Context, Result};
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

/// Resolve the conversion input: positional text first, then a file, then
/// stdin. One trailing newline from a file or stdin is dropped.
pub fn read_input(text: Option<&str>, input: Option<&PathBuf>) -> Result<String> {
    if let Some(text) = text {
        return Ok(text.to_string());
    }

    let raw = match input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file {}", path.display()))?,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            buf
        }
    };

    Ok(strip_trailing_newline(raw))
}

pub fn strip_trailing_newline(mut text: String) -> String {
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    text
}

/// Write `content` to `output`, or to stdout followed by a newline.
pub fn write_output(content: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => fs::write(path, content)
            .with_context(|| format!("Failed to write output file {}", path.display())),
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{content}").context("Failed to write to stdout")
        }
    }
}
