use std::fmt;
use std::io::BufRead;
use std::path::Path;

use encoding_rs::{Encoding, UTF_8};
use log::{debug, info};

use crate::error::FileAccessError;
use crate::source::LineSource;

/// Display form of a side that has no line at the current position.
pub const END_OF_FILE_MARKER: &str = "[END OF FILE]";

/// How both sources are read.
#[derive(Debug, Clone, Copy)]
pub struct CompareOptions {
    pub encoding: &'static Encoding,
    /// Compare line terminators byte for byte instead of treating
    /// `\r\n` and `\r` as `\n`.
    pub strict_eol: bool,
}

impl Default for CompareOptions {
    fn default() -> Self {
        CompareOptions {
            encoding: UTF_8,
            strict_eol: false,
        }
    }
}

/// Display form of one side at a position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineContent {
    Text(String),
    EndOfFile,
}

impl LineContent {
    fn from_raw(raw: Option<&str>) -> Self {
        match raw {
            Some(line) => LineContent::Text(strip_terminator(line).to_string()),
            None => LineContent::EndOfFile,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            LineContent::Text(s) => s,
            LineContent::EndOfFile => END_OF_FILE_MARKER,
        }
    }
}

impl fmt::Display for LineContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One position where the two sources do not match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineDifference {
    pub position: usize,
    pub left: LineContent,
    pub right: LineContent,
}

/// Outcome of one comparison run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Comparison {
    /// Positions at which at least one source still had a line.
    pub lines_read: usize,
    pub differences: Vec<LineDifference>,
}

impl Comparison {
    /// True when no position differs.
    pub fn equal(&self) -> bool {
        self.differences.is_empty()
    }
}

fn strip_terminator(line: &str) -> &str {
    match line.strip_suffix('\n') {
        Some(s) => s.strip_suffix('\r').unwrap_or(s),
        None => line,
    }
}

/// Compares two files position by position.
///
/// Both files are opened before anything is read, so a missing second file
/// fails without touching the first one's contents.
pub fn compare_files(
    left: &Path,
    right: &Path,
    opts: &CompareOptions,
) -> Result<Comparison, FileAccessError> {
    let a = LineSource::open(left, opts.encoding, opts.strict_eol)?;
    let b = LineSource::open(right, opts.encoding, opts.strict_eol)?;
    compare_sources(a, b)
}

/// Same comparison over already opened readers.
pub fn compare_readers<A: BufRead, B: BufRead>(
    left: A,
    right: B,
    opts: &CompareOptions,
) -> Result<Comparison, FileAccessError> {
    compare_sources(
        LineSource::new(left, "<left>", opts.encoding, opts.strict_eol),
        LineSource::new(right, "<right>", opts.encoding, opts.strict_eol),
    )
}

/// The lockstep loop shared by [`compare_files`] and [`compare_readers`].
pub fn compare_sources<A: BufRead, B: BufRead>(
    mut left: LineSource<A>,
    mut right: LineSource<B>,
) -> Result<Comparison, FileAccessError> {
    let mut comparison = Comparison::default();
    let mut position = 0;

    loop {
        position += 1;
        let a = left.next_line()?;
        let b = right.next_line()?;

        if a.is_none() && b.is_none() {
            break;
        }
        comparison.lines_read = position;

        if a != b {
            debug!("line {position} differs");
            comparison.differences.push(LineDifference {
                position,
                left: LineContent::from_raw(a.as_deref()),
                right: LineContent::from_raw(b.as_deref()),
            });
        }
    }

    info!(
        "compared {:?} and {:?}: {} lines, {} differences",
        left.path(),
        right.path(),
        comparison.lines_read,
        comparison.differences.len()
    );
    Ok(comparison)
}
