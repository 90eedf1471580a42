//! ANSI escape-code stripping for build output.
//!
//! Container builds colorize their output with terminal control codes.
//! Stored logs are plain text, so every escape sequence is removed before
//! anything reaches the scratch file.

use std::borrow::Cow;

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Matches one ANSI CSI escape sequence: ESC `[`, any run of digits
    /// and semicolons, and a single terminating letter.
    static ref ANSI_ESCAPE: Regex = Regex::new(r"\x1b\[[0-9;]*[a-zA-Z]").unwrap();
}

/// Remove every ANSI terminal escape sequence from `input`.
///
/// All other characters are preserved in their original order. Borrows the
/// input when it contains no escape sequence.
pub fn strip_ansi(input: &str) -> Cow<'_, str> {
    ANSI_ESCAPE.replace_all(input, "")
}
