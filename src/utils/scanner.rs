use crate::utils::error::{DemoError, Result};
use std::collections::VecDeque;
use std::io::BufRead;

/// Whitespace-delimited token stream over any buffered reader.
///
/// Lines are pulled lazily, so a token request only blocks on input when
/// every token of the previous lines has been consumed. Tokens may span
/// line boundaries the same way numbers typed on separate lines would.
pub struct TokenReader<R: BufRead> {
    reader: R,
    pending: VecDeque<String>,
    line: Vec<u8>,
    line_number: usize,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
            line: Vec::new(),
            line_number: 0,
        }
    }

    /// Returns the next token, or `None` once the underlying reader is exhausted.
    ///
    /// A line that is not valid UTF-8 is dropped whole and reported as
    /// [`DemoError::InvalidEncoding`].
    pub fn next_token(&mut self) -> Result<Option<String>> {
        while self.pending.is_empty() {
            self.line.clear();
            if self.reader.read_until(b'\n', &mut self.line)? == 0 {
                return Ok(None);
            }
            self.line_number += 1;

            let text = std::str::from_utf8(&self.line).map_err(|source| {
                DemoError::InvalidEncoding {
                    line: self.line_number,
                    source,
                }
            })?;
            self.pending.extend(text.split_whitespace().map(str::to_owned));
        }

        Ok(self.pending.pop_front())
    }
}
