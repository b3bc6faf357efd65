//! Character level scanning over the input text.
//!
//! The cursor works in Unicode scalar values: `peek()`, `consume()` and the
//! column reported in a SourceLocation all count `char`s, while the offset
//! kept internally is a byte index so that slicing stays cheap.

use crate::document::SourceLocation;
use crate::parsing::parser::{ConsentParseError, ErrorKind};

#[derive(Debug, Clone)]
pub struct Cursor<'i> {
    original: &'i str,
    offset: usize,
}

impl<'i> Cursor<'i> {
    pub fn new(content: &'i str) -> Cursor<'i> {
        Cursor {
            original: content,
            offset: 0,
        }
    }

    /// The remaining unconsumed input.
    pub fn entire(&self) -> &'i str {
        &self.original[self.offset..]
    }

    pub fn is_finished(&self) -> bool {
        self.offset >= self
            .original
            .len()
    }

    pub fn current_char(&self) -> Option<char> {
        self.entire()
            .chars()
            .next()
    }

    /// Look ahead without consuming; `peek(0)` is the current character.
    pub fn peek(&self, offset: usize) -> Option<char> {
        self.entire()
            .chars()
            .nth(offset)
    }

    pub fn peek_next_char(&self) -> Option<char> {
        self.peek(1)
    }

    /// Advance by up to `count` characters, stopping at the end of input.
    pub fn consume(&mut self, count: usize) {
        let width: usize = self
            .entire()
            .chars()
            .take(count)
            .map(char::len_utf8)
            .sum();
        self.offset += width;
    }

    pub fn consume_while<P>(&mut self, predicate: P)
    where
        P: Fn(char) -> bool,
    {
        let content = self.entire();
        let width = content
            .find(|c: char| !predicate(c))
            .unwrap_or(content.len());
        self.offset += width;
    }

    /// Advance past the rest of the current line, including its newline if
    /// there is one.
    pub fn consume_line(&mut self) {
        let content = self.entire();
        let width = match content.find('\n') {
            Some(i) => i + 1,
            None => content.len(),
        };
        self.offset += width;
    }

    /// Consume the rest of the current line and return it, newline included.
    pub fn take_line(&mut self) -> &'i str {
        let content = self.entire();
        self.consume_line();
        let width = content.len()
            - self
                .entire()
                .len();
        &content[..width]
    }

    /// Move forward by a width in bytes, which must land on a character
    /// boundary.
    pub fn advance(&mut self, width: usize) {
        self.offset += width;
    }

    pub fn trim_whitespace(&mut self) {
        self.consume_while(char::is_whitespace);
    }

    pub fn is_at_beginning_of_line(&self) -> bool {
        self.offset == 0
            || self.original[..self.offset]
                .ends_with('\n')
    }

    /// From the cursor up to (not including) the next newline or the end. A
    /// carriage return ahead of the newline isn't part of the line either.
    pub fn current_line(&self) -> &'i str {
        let content = self.entire();
        let line = match content.find('\n') {
            Some(i) => &content[..i],
            None => content,
        };
        line.strip_suffix('\r')
            .unwrap_or(line)
    }

    pub fn starts_with(&self, pattern: &str) -> bool {
        self.entire()
            .starts_with(pattern)
    }

    /// Consume `pattern` if the input continues with it, reporting whether it
    /// did.
    pub fn take_str(&mut self, pattern: &str) -> bool {
        if self.starts_with(pattern) {
            self.offset += pattern.len();
            true
        } else {
            false
        }
    }

    pub fn expect_and_consume(&mut self, expected: char) -> Result<(), ConsentParseError> {
        match self.current_char() {
            Some(c) if c == expected => {
                self.consume(1);
                Ok(())
            }
            Some(c) => Err(self.error(ErrorKind::UnexpectedCharacter(c))),
            None => Err(self.error(ErrorKind::Eof)),
        }
    }

    /// Byte position of the cursor within the original input.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Work out line and column of the cursor. This walks the input from the
    /// start so is only meant for the error path.
    pub fn source_location(&self) -> SourceLocation {
        self.location_at(self.offset)
    }

    /// Line and column of an earlier byte offset, such as one recorded with
    /// `offset()`. Same cost as `source_location()`.
    pub fn location_at(&self, offset: usize) -> SourceLocation {
        let before = &self.original[..offset.min(self.original.len())];

        let line = before
            .bytes()
            .filter(|&b| b == b'\n')
            .count();

        let column = match before.rfind('\n') {
            Some(start) => before[start + 1..]
                .chars()
                .count(),
            None => before
                .chars()
                .count(),
        };

        SourceLocation { line, column }
    }

    pub fn error(&self, kind: ErrorKind) -> ConsentParseError {
        ConsentParseError {
            kind,
            location: self.source_location(),
        }
    }
}
