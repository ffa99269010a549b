//! Loading and tokenizing RTT log files
//!
//! The input is newline-delimited text with one comma-separated record per
//! line. Files are read whole; rows are then handed to [`row::parse_row`].

pub mod row;

pub use row::{parse_row, ParsedRow, RowError, RowLayout};

use crate::error::{AppError, ErrorContext, Result};
use std::fs;
use std::path::Path;

/// Read the whole input file as UTF-8 text
pub fn load_text(path: &Path) -> Result<String> {
    let bytes = fs::read(path)
        .with_context(|| format!("Failed to read '{}'", path.display()))?;

    String::from_utf8(bytes)
        .map_err(|e| AppError::io(format!("'{}' is not valid UTF-8: {}", path.display(), e)))
}

/// A physical line of input with its 1-based line number
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    pub number: usize,
    pub content: &'a str,
}

impl Line<'_> {
    pub fn is_blank(&self) -> bool {
        self.content.is_empty()
    }
}

/// Iterator over the lines of an input text
///
/// Lines are split on `\n` with a trailing `\r` removed. The empty segment
/// after a final newline is not yielded. Blank lines are dropped when
/// `skip_blank` is set; line numbers keep counting them either way.
pub struct Lines<'a> {
    inner: std::iter::Enumerate<std::str::Split<'a, char>>,
    skip_blank: bool,
    remaining: &'a str,
}

impl<'a> Lines<'a> {
    pub fn new(text: &'a str, skip_blank: bool) -> Self {
        // A terminating newline closes the last line rather than opening a new one
        let remaining = text.strip_suffix('\n').unwrap_or(text);
        Self {
            inner: remaining.split('\n').enumerate(),
            skip_blank,
            remaining,
        }
    }
}

impl<'a> Iterator for Lines<'a> {
    type Item = Line<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining.is_empty() {
            return None;
        }

        for (index, raw) in self.inner.by_ref() {
            let line = Line {
                number: index + 1,
                content: raw.strip_suffix('\r').unwrap_or(raw),
            };
            if self.skip_blank && line.is_blank() {
                continue;
            }
            return Some(line);
        }
        None
    }
}

/// Split text into lines
pub fn tokenize(text: &str, skip_blank: bool) -> Lines<'_> {
    Lines::new(text, skip_blank)
}
