//! Whitespace-separated token reader
//!
//! Menu input is a stream of whitespace-separated tokens. A command and its
//! arguments may sit on one line or be spread over several.

use crate::types::BankError;
use std::collections::VecDeque;
use std::io::BufRead;

/// Streams tokens from any buffered reader, one line at a time
#[derive(Debug)]
pub struct TokenReader<R> {
    reader: R,
    pending: VecDeque<String>,
    line: Vec<u8>,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(reader: R) -> Self {
        TokenReader {
            reader,
            pending: VecDeque::new(),
            line: Vec::new(),
        }
    }

    /// Next token, or `None` at end of input
    ///
    /// Bytes that are not valid UTF-8 are replaced with U+FFFD, so a garbled
    /// token fails to parse like any other malformed input.
    ///
    /// # Errors
    ///
    /// Returns `IoError` if the underlying reader fails.
    pub fn next_token(&mut self) -> Result<Option<String>, BankError> {
        while self.pending.is_empty() {
            self.line.clear();
            if self.reader.read_until(b'\n', &mut self.line)? == 0 {
                return Ok(None);
            }
            self.pending.extend(
                String::from_utf8_lossy(&self.line)
                    .split_whitespace()
                    .map(str::to_string),
            );
        }
        Ok(self.pending.pop_front())
    }

    /// Drop the tokens left on the current line
    pub fn discard_line(&mut self) {
        self.pending.clear();
    }
}
