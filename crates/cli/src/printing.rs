use encodecraft_codec::verify::CheckResult;
use encodecraft_codec::CodecInfo;

use crate::history::HistoryEntry;

pub fn print_codec_info(info: &CodecInfo) {
    println!("  • {}", info.name);
    println!("    {}", info.description);
    println!("    Example: {}", info.example);
}

pub fn print_history_entry(index: usize, entry: &HistoryEntry, full: bool) {
    let arrow = match entry.operation {
        encodecraft_codec::Operation::Encode => "↓",
        encodecraft_codec::Operation::Decode => "↑",
    };
    println!(
        "{:>2}. {arrow} {} {} (id {})",
        index + 1,
        entry.codec.name().to_uppercase(),
        entry.operation,
        entry.id
    );
    if full {
        println!("    Input:  {}", entry.input);
        println!("    Output: {}", entry.output);
    } else {
        println!("    Input:  {}", entry.input_preview);
        println!("    Output: {}", entry.output_preview);
    }
}

pub fn print_check(check: &CheckResult) {
    if check.passed {
        println!("  ✓ {:<7} {}", check.codec, check.check);
    } else {
        println!(
            "  ✗ {:<7} {} - {}",
            check.codec,
            check.check,
            check.detail.as_deref().unwrap_or("failed")
        );
    }
}

/// Character counts, written to stderr so stdout stays pipeable.
pub fn print_stats(input: &str, output: &str) {
    eprintln!(
        "Input: {} chars, Output: {} chars",
        input.chars().count(),
        output.chars().count()
    );
}
