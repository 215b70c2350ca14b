//! Shared default values for the command-line front end.
//! Used both by clap attributes and by the history store.

/// History file, relative to the working directory.
pub const HISTORY_FILE: &str = ".encodecraft_history.json";

/// Environment variable that overrides the history file location.
pub const HISTORY_ENV: &str = "ENCODECRAFT_HISTORY";

/// Number of conversions kept in the history.
pub const HISTORY_LIMIT: usize = 10;

/// Characters of input/output shown in history previews.
pub const PREVIEW_CHARS: usize = 50;
