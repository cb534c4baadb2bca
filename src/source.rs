use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use encoding_rs::Encoding;
use log::debug;

use crate::error::FileAccessError;

/// Sequential reader over the lines of one compared file.
///
/// By default `\n`, `\r\n` and a lone `\r` all end a line and are returned as
/// `\n`. With `strict_eol` lines are split on `\n` only and keep their
/// terminator exactly as stored. A final line without terminator is returned
/// without one in both modes.
pub struct LineSource<R> {
    reader: R,
    path: PathBuf,
    encoding: &'static Encoding,
    strict_eol: bool,
    line: usize,
    buf: Vec<u8>,
}

impl LineSource<BufReader<File>> {
    pub fn open(
        path: &Path,
        encoding: &'static Encoding,
        strict_eol: bool,
    ) -> Result<Self, FileAccessError> {
        let file = File::open(path).map_err(|source| FileAccessError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("opened {path:?} as {}", encoding.name());
        Ok(Self::new(BufReader::new(file), path, encoding, strict_eol))
    }
}

impl<R: BufRead> LineSource<R> {
    /// Wraps an already opened reader. `path` is only used in error reports.
    pub fn new(
        reader: R,
        path: impl Into<PathBuf>,
        encoding: &'static Encoding,
        strict_eol: bool,
    ) -> Self {
        LineSource {
            reader,
            path: path.into(),
            encoding,
            strict_eol,
            line: 0,
            buf: Vec::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Next line with its terminator, or `None` once the source is exhausted.
    pub fn next_line(&mut self) -> Result<Option<String>, FileAccessError> {
        self.buf.clear();
        let read = if self.strict_eol {
            self.reader
                .read_until(b'\n', &mut self.buf)
                .map(|n| n > 0)
        } else {
            self.read_universal_line()
        };
        let found = read.map_err(|source| FileAccessError::Read {
            path: self.path.clone(),
            source,
        })?;
        if !found {
            return Ok(None);
        }
        self.line += 1;

        let text = self
            .encoding
            .decode_without_bom_handling_and_without_replacement(&self.buf)
            .ok_or_else(|| FileAccessError::Decode {
                path: self.path.clone(),
                line: self.line,
                encoding: self.encoding.name(),
            })?
            .into_owned();
        Ok(Some(text))
    }

    // Splits before decoding: `\r` and `\n` never occur inside a multi-byte
    // sequence of an ASCII-compatible encoding.
    fn read_universal_line(&mut self) -> io::Result<bool> {
        loop {
            let (terminator, used) = {
                let available = self.reader.fill_buf()?;
                if available.is_empty() {
                    return Ok(!self.buf.is_empty());
                }
                match available.iter().position(|&b| b == b'\n' || b == b'\r') {
                    Some(i) => {
                        self.buf.extend_from_slice(&available[..i]);
                        (Some(available[i]), i + 1)
                    }
                    None => {
                        self.buf.extend_from_slice(available);
                        (None, available.len())
                    }
                }
            };
            self.reader.consume(used);

            match terminator {
                Some(b'\r') => {
                    if self.reader.fill_buf()?.first() == Some(&b'\n') {
                        self.reader.consume(1);
                    }
                    self.buf.push(b'\n');
                    return Ok(true);
                }
                Some(_) => {
                    self.buf.push(b'\n');
                    return Ok(true);
                }
                None => {}
            }
        }
    }
}
