//! Styled terminal output utilities.
//!
//! Every line carries the `[v0]` prefix. Only the status glyphs are
//! colored, and only when the stream is a color-capable terminal, so piped
//! output is the plain text.

use owo_colors::{OwoColorize, Stream};

use crate::config::LOG_PREFIX;

/// Print a status line
pub fn status(text: &str) {
    println!("{} {}", LOG_PREFIX, text);
}

/// Print a success message
pub fn success(text: &str) {
    println!(
        "{} {} {}",
        LOG_PREFIX,
        "✓".if_supports_color(Stream::Stdout, |t| t.green()),
        text
    );
}

/// Print a list item
pub fn list_item(text: &str) {
    println!("{}   - {}", LOG_PREFIX, text);
}

/// Print the migration failure line to stderr
pub fn failure(detail: &str) {
    eprintln!(
        "{} {} Migration failed: {}",
        LOG_PREFIX,
        "✗".if_supports_color(Stream::Stderr, |t| t.red()),
        detail
    );
}
