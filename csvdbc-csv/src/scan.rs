//! Streaming tokenizer over a delimited byte source.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use csvdbc_result::Result;

/// What ended the most recent token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Terminator {
    /// A field separator; more fields follow on this line.
    FieldSep,
    /// A line separator; the returned field is the last of its line.
    LineSep,
    /// End of input with no pending bytes.
    EndOfInput,
}

/// Forward-only scanner that splits a byte source into fields and lines.
///
/// The scanner owns its source for the lifetime of the stream and reads
/// strictly forward; there is no seeking or rewinding. Each line is staged in
/// a single reused buffer, so field views returned by
/// [`CsvScanner::next_field`] borrow that buffer and are invalidated by the
/// next line read. [`CsvScanner::read_line`] copies fields out eagerly and is
/// what the rest of the pipeline uses.
///
/// Input that ends without a trailing line separator is treated as if one
/// were present: the final field is reported with [`Terminator::LineSep`] and
/// the following call reports [`Terminator::EndOfInput`]. A line separator
/// that is the last byte of the input simply terminates its line; it does not
/// produce a trailing empty line.
#[derive(Debug)]
pub struct CsvScanner<R = File> {
    input: BufReader<R>,
    line: Vec<u8>,
    cursor: usize,
    /// A staged line is currently being consumed field by field.
    pending: bool,
    field_sep: u8,
    line_sep: u8,
}

impl CsvScanner<File> {
    /// Open a file and scan it with the given separators.
    pub fn open<P: AsRef<Path>>(path: P, field_sep: u8, line_sep: u8) -> Result<Self> {
        let path = path.as_ref();
        tracing::trace!("opening csv source {}", path.display());
        let file = File::open(path)?;
        Ok(Self::from_reader(file, field_sep, line_sep))
    }
}

impl<R: Read> CsvScanner<R> {
    /// Scan an arbitrary byte source with the given separators.
    pub fn from_reader(reader: R, field_sep: u8, line_sep: u8) -> Self {
        Self {
            input: BufReader::new(reader),
            line: Vec::new(),
            cursor: 0,
            pending: false,
            field_sep,
            line_sep,
        }
    }

    /// Return the next field together with the condition that terminated it.
    ///
    /// The view borrows the scanner's line buffer and is only valid until the
    /// next call that reads a new line. `"a,,b"` yields three fields with an
    /// empty middle one; a bare line separator yields a single empty field.
    pub fn next_field(&mut self) -> Result<(&[u8], Terminator)> {
        if !self.pending {
            self.line.clear();
            let read = self.input.read_until(self.line_sep, &mut self.line)?;
            if read == 0 {
                return Ok((&[], Terminator::EndOfInput));
            }
            if self.line.last() == Some(&self.line_sep) {
                self.line.pop();
                // Tolerate CRLF input when scanning newline-terminated lines.
                if self.line_sep == b'\n' && self.line.last() == Some(&b'\r') {
                    self.line.pop();
                }
            }
            self.cursor = 0;
            self.pending = true;
        }

        let rest = &self.line[self.cursor..];
        match rest.iter().position(|&b| b == self.field_sep) {
            Some(at) => {
                let start = self.cursor;
                self.cursor = start + at + 1;
                Ok((&self.line[start..start + at], Terminator::FieldSep))
            }
            None => {
                let start = self.cursor;
                self.cursor = self.line.len();
                self.pending = false;
                Ok((&self.line[start..], Terminator::LineSep))
            }
        }
    }

    /// Accumulate one line's fields into owned strings.
    ///
    /// Repeatedly calls [`CsvScanner::next_field`], copying each transient
    /// view, until the line or the input ends. At end of input the field list
    /// is empty; an empty line yields exactly one empty field.
    pub fn read_line(&mut self) -> Result<(Vec<String>, Terminator)> {
        let mut fields = Vec::new();
        loop {
            let (view, term) = self.next_field()?;
            match term {
                Terminator::FieldSep => {
                    fields.push(String::from_utf8_lossy(view).into_owned());
                }
                Terminator::LineSep => {
                    fields.push(String::from_utf8_lossy(view).into_owned());
                    return Ok((fields, Terminator::LineSep));
                }
                Terminator::EndOfInput => return Ok((fields, Terminator::EndOfInput)),
            }
        }
    }
}
