//! Recursive descent over the HTML-like custom elements embedded in a
//! consent document, producing an untyped tree that the section builders
//! then validate.

use crate::parsing::cursor::Cursor;
use crate::parsing::parser::{ConsentParseError, ErrorKind};

#[derive(Eq, Debug, PartialEq, Clone)]
pub struct ParsedElement {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub content: Vec<Content>,
    /// Byte offset of the opening `<`, resolved to a line and column only
    /// if the element turns out to be in error.
    pub offset: usize,
}

#[derive(Eq, Debug, PartialEq, Clone)]
pub enum Content {
    Text(String),
    Element(ParsedElement),
}

impl ParsedElement {
    /// Value of the named attribute. If an attribute was given more than
    /// once the first occurrence wins.
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value.as_str())
    }
}

pub fn is_identifier_start(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

pub fn is_identifier_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '-'
}

/// Consume an identifier if there is one at the cursor. Nothing is consumed
/// if not.
pub fn read_identifier<'i>(input: &mut Cursor<'i>) -> Option<&'i str> {
    match input.current_char() {
        Some(c) if is_identifier_start(c) => {}
        _ => return None,
    }

    let content = input.entire();
    input.consume_while(is_identifier_char);
    let width = content.len()
        - input
            .entire()
            .len();

    Some(&content[..width])
}

/// How many elements may be open at once. Only an option inside a select
/// means anything, so this is generous.
pub const MAXIMUM_DEPTH: usize = 64;

/// Parse a custom element starting at the cursor. Returns `None`, having
/// consumed nothing, if the cursor isn't at something that looks like an
/// opening tag.
pub fn read_element(input: &mut Cursor<'_>) -> Result<Option<ParsedElement>, ConsentParseError> {
    read_nested_element(input, 1)
}

fn read_nested_element(
    input: &mut Cursor<'_>,
    depth: usize,
) -> Result<Option<ParsedElement>, ConsentParseError> {
    if input.current_char() != Some('<') {
        return Ok(None);
    }
    match input.peek_next_char() {
        Some(c) if is_identifier_start(c) => {}
        _ => return Ok(None),
    }

    if depth > MAXIMUM_DEPTH {
        return Err(input.error(ErrorKind::Other(
            "elements nested too deeply".to_string(),
        )));
    }

    let offset = input.offset();
    input.consume(1);

    let name = match read_identifier(input) {
        Some(name) => name.to_string(),
        None => return Err(unexpected(input)),
    };

    let mut attributes = Vec::new();
    let mut slash = false;

    // A '/' directly before the '>' marks the tag as self-closing; one
    // anywhere else is ignored.
    let self_closing = loop {
        match input.current_char() {
            None => break false,
            Some('>') => {
                input.consume(1);
                break slash;
            }
            Some('/') => {
                input.consume(1);
                slash = true;
            }
            Some(c) if c.is_whitespace() => {
                input.consume(1);
                slash = false;
            }
            Some(_) => {
                let attribute = read_attribute(input)?;
                attributes.push(attribute);
                slash = false;
            }
        }
    };

    let mut element = ParsedElement {
        name,
        attributes,
        content: Vec::new(),
        offset,
    };

    if self_closing || read_closing_tag(input, &element.name) {
        return Ok(Some(element));
    }

    loop {
        input.trim_whitespace();

        if let Some(child) = read_nested_element(input, depth + 1)? {
            element
                .content
                .push(Content::Element(child));
            continue;
        }

        let text = read_text(input);
        if !text.is_empty() {
            element
                .content
                .push(Content::Text(text.to_string()));
            continue;
        }

        if read_closing_tag(input, &element.name) {
            return Ok(Some(element));
        }

        if input.is_finished() {
            return Err(input.error(ErrorKind::Eof));
        }

        return Err(input.error(ErrorKind::Other(format!(
            "unable to close <{}>",
            element.name
        ))));
    }
}

/// Match either `</>` or `</name>` at the cursor, consuming it if present.
fn read_closing_tag(input: &mut Cursor<'_>, name: &str) -> bool {
    if input.take_str("</>") {
        return true;
    }

    let explicit = format!("</{}>", name);
    input.take_str(&explicit)
}

/// Everything up to the next '<', with surrounding whitespace trimmed.
fn read_text<'i>(input: &mut Cursor<'i>) -> &'i str {
    let content = input.entire();
    let width = content
        .find('<')
        .unwrap_or(content.len());
    input.advance(width);

    content[..width].trim()
}

fn read_attribute(input: &mut Cursor<'_>) -> Result<(String, String), ConsentParseError> {
    let name = match read_identifier(input) {
        Some(name) => name.to_string(),
        None => return Err(unexpected(input)),
    };

    let value = if input.current_char() == Some('=') {
        input.consume(1);
        read_attribute_value(input)?
    } else {
        String::new()
    };

    Ok((name, value))
}

fn read_attribute_value(input: &mut Cursor<'_>) -> Result<String, ConsentParseError> {
    if input.current_char() == Some('"') {
        return read_string_literal(input);
    }

    if let Some(identifier) = read_identifier(input) {
        return Ok(identifier.to_string());
    }

    if let Some(number) = read_integer(input)? {
        return Ok(number.to_string());
    }

    Ok(String::new())
}

/// A double quoted string. A quote preceded by an odd number of
/// backslashes is escaped and doesn't end the literal.
fn read_string_literal(input: &mut Cursor<'_>) -> Result<String, ConsentParseError> {
    input.expect_and_consume('"')?;

    let content = input.entire();
    let mut backslashes = 0;

    for (i, c) in content.char_indices() {
        match c {
            '\\' => backslashes += 1,
            '"' if backslashes % 2 == 0 => {
                input.advance(i + 1);
                return Ok(unescape(&content[..i]));
            }
            _ => backslashes = 0,
        }
    }

    input.advance(content.len());
    Err(input.error(ErrorKind::Eof))
}

fn unescape(raw: &str) -> String {
    let mut result = String::with_capacity(raw.len());
    let mut chars = raw.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }
        match chars.next() {
            Some(next) if next == '"' || next == '\\' => result.push(next),
            Some(next) => {
                result.push('\\');
                result.push(next);
            }
            None => result.push('\\'),
        }
    }

    result
}

/// An optionally negative decimal integer. Nothing is consumed unless at
/// least one digit is present.
fn read_integer(input: &mut Cursor<'_>) -> Result<Option<i64>, ConsentParseError> {
    let content = input.entire();

    let digits = content
        .strip_prefix('-')
        .unwrap_or(content);
    let sign = content.len() - digits.len();

    let count = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if count == 0 {
        return Ok(None);
    }

    let width = sign + count;
    match content[..width].parse::<i64>() {
        Ok(number) => {
            input.advance(width);
            Ok(Some(number))
        }
        Err(_) => Err(input.error(ErrorKind::Other(
            "integer literal out of range".to_string(),
        ))),
    }
}

fn unexpected(input: &Cursor<'_>) -> ConsentParseError {
    match input.current_char() {
        Some(c) => input.error(ErrorKind::UnexpectedCharacter(c)),
        None => input.error(ErrorKind::Eof),
    }
}
