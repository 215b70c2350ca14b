mod args;
mod commands;
mod defaults;
mod history;
mod logging;
mod printing;
mod utils;

use anyhow::Result;
use clap::{Parser, Subcommand};
use encodecraft_codec::Operation;
use std::path::PathBuf;

use args::{ConvertArgs, HistoryArgs, OutputFormat};
use commands::{convert, history as history_cmd, list, selftest};

/// EncodeCraft: A Text Encoding Toolkit
///
/// Converts text to and from Base64, URL percent-encoding, hexadecimal,
/// HTML entities, ROT13 and 8-bit binary.
#[derive(Parser, Debug)]
#[command(name = "encodecraft")]
#[command(author, version, about = "Encodes and decodes text with common codecs", long_about = None)]
struct Cli {
    /// Number of threads to use for parallel processing
    ///
    /// If not specified, defaults to the number of logical CPUs.
    #[arg(short = 't', long, global = true)]
    threads: Option<usize>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// History file location
    #[arg(long, global = true, env = defaults::HISTORY_ENV, default_value = defaults::HISTORY_FILE)]
    history_file: PathBuf,

    /// Do not record conversions in the history
    #[arg(long, global = true)]
    no_history: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Encode plain text with a codec.
    Encode(ConvertArgs),

    /// Decode encoded text with a codec.
    ///
    /// Malformed input is rejected as a whole; no partial output is written.
    Decode(ConvertArgs),

    /// List the available codecs with a short description and example.
    List {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Pretty)]
        format: OutputFormat,
    },

    /// Show or clear the most recent conversions.
    History(HistoryArgs),

    /// Run the built-in round-trip self-test for every codec.
    Selftest,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init_logging(cli.verbose);

    if let Some(threads) = cli.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()?;
    }

    let history_file = (!cli.no_history).then_some(cli.history_file.as_path());

    match cli.command {
        Commands::Encode(args) => {
            convert::run_conversion(&args, Operation::Encode, history_file)?;
        }
        Commands::Decode(args) => {
            convert::run_conversion(&args, Operation::Decode, history_file)?;
        }
        Commands::List { format } => {
            list::list_codecs(format)?;
        }
        Commands::History(args) => {
            history_cmd::show_history(&args, &cli.history_file)?;
        }
        Commands::Selftest => {
            selftest::run_selftest()?;
        }
    }

    Ok(())
}
