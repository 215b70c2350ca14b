use clap::{Args, ValueEnum};
use encodecraft_codec::CodecKind;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Codec to use (base64, url, hex, html, rot13, binary)
    #[arg(value_parser = parse_codec)]
    pub codec: CodecKind,

    /// Text to convert
    ///
    /// If omitted, input is read from --input or, failing that, stdin.
    pub text: Option<String>,

    /// Read input from a file
    #[arg(short, long, conflicts_with = "text")]
    pub input: Option<PathBuf>,

    /// Write output to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Convert each line independently
    #[arg(long)]
    pub lines: bool,

    /// Print input/output character counts to stderr
    #[arg(long)]
    pub stats: bool,
}

#[derive(Args, Debug)]
pub struct HistoryArgs {
    /// Show full input and output instead of previews
    #[arg(long)]
    pub full: bool,

    /// Remove all recorded conversions
    #[arg(long, conflicts_with = "full")]
    pub clear: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Pretty)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Pretty,
    Json,
}

fn parse_codec(s: &str) -> Result<CodecKind, String> {
    s.parse::<CodecKind>().map_err(|e| e.to_string())
}
