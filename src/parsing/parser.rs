use std::fmt;

use tracing::{debug, trace};

use crate::document::*;
use crate::parsing::cursor::Cursor;
use crate::parsing::element::{read_element, read_identifier, ParsedElement};
use crate::parsing::sections::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    NonUtf8Input,
    Eof,
    UnexpectedCharacter(char),
    Other(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsentParseError {
    pub kind: ErrorKind,
    pub location: SourceLocation,
}

impl ConsentParseError {
    pub fn message(&self) -> String {
        match &self.kind {
            ErrorKind::NonUtf8Input => "input is not valid UTF-8".to_string(),
            ErrorKind::Eof => "unexpected end of input".to_string(),
            ErrorKind::UnexpectedCharacter(c) => format!("unexpected character '{}'", c),
            ErrorKind::Other(message) => message.clone(),
        }
    }
}

impl fmt::Display for ConsentParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}", self.message(), self.location)
    }
}

impl std::error::Error for ConsentParseError {}

/// Parse raw bytes, which must be UTF-8.
pub fn parse_bytes(data: &[u8]) -> Result<ParseResult, ConsentParseError> {
    match std::str::from_utf8(data) {
        Ok(content) => parse_from_start(content),
        Err(error) => {
            // report the position where the valid prefix ends
            let prefix = std::str::from_utf8(&data[..error.valid_up_to()]).unwrap_or_default();
            let mut input = Cursor::new(prefix);
            input.consume_while(|_| true);
            Err(input.error(ErrorKind::NonUtf8Input))
        }
    }
}

pub fn parse_from_start(content: &str) -> Result<ParseResult, ConsentParseError> {
    let mut input = Cursor::new(content);

    let frontmatter = read_frontmatter(&mut input)?;
    let sections = read_sections(&mut input)?;

    Ok(ParseResult {
        frontmatter,
        sections,
    })
}

fn is_frontmatter_delimiter(line: &str) -> bool {
    line == "---"
}

/// The optional block of `key: value` lines between a pair of `---` lines.
pub fn read_frontmatter(input: &mut Cursor<'_>) -> Result<Frontmatter, ConsentParseError> {
    let mut frontmatter = Frontmatter::new();

    if !is_frontmatter_delimiter(input.current_line()) {
        return Ok(frontmatter);
    }
    input.consume_line();

    // the closing delimiter isn't an identifier, which ends this loop
    while let Some(key) = read_identifier(input) {
        input.expect_and_consume(':')?;

        match input.current_char() {
            Some(' ') => input.consume(1),
            Some('\r') | Some('\n') | None => {}
            Some(c) => return Err(input.error(ErrorKind::UnexpectedCharacter(c))),
        }

        let value = input.current_line();
        trace!("Frontmatter entry {}: {:?}", key, value);
        frontmatter.insert(key.to_string(), value.to_string());

        input.consume_line();
    }

    if !is_frontmatter_delimiter(input.current_line()) {
        return Err(input.error(ErrorKind::Other(
            "Unable to find end of frontmatter".to_string(),
        )));
    }
    input.consume_line();

    debug!("Found frontmatter with {} entries", frontmatter.len());
    Ok(frontmatter)
}

/// Walk the body of the document, splitting it into markdown runs and the
/// sections built from custom elements that start at the beginning of a
/// line.
fn read_sections(input: &mut Cursor<'_>) -> Result<Vec<Section>, ConsentParseError> {
    let mut sections = Vec::new();
    let mut buffer = String::new();

    while !input.is_finished() {
        if input.is_at_beginning_of_line() && input.current_char() == Some('<') {
            match read_element(input) {
                Ok(Some(element)) => {
                    sections.push(markdown(&buffer));
                    buffer.clear();

                    let section = build_section(input, &element)?;
                    sections.push(section);
                    continue;
                }
                Ok(None) => {}
                Err(error) if error.kind == ErrorKind::Eof => {
                    // running out of input inside an element ends the
                    // document rather than failing it
                    debug!("End of input within element at {}", error.location);
                    break;
                }
                Err(error) => return Err(error),
            }
        }

        // not at the start of a line, so nothing until the next newline
        // can begin an element.
        buffer.push_str(input.take_line());
    }

    sections.push(markdown(&buffer));

    sections.retain(|section| match section {
        Section::Markdown { text } => !text.is_empty(),
        _ => true,
    });

    Ok(sections)
}

fn markdown(buffer: &str) -> Section {
    Section::Markdown {
        text: buffer
            .trim()
            .to_string(),
    }
}

fn build_section(
    input: &Cursor<'_>,
    element: &ParsedElement,
) -> Result<Section, ConsentParseError> {
    debug!("Building <{}> section", element.name);

    let result = match element
        .name
        .as_str()
    {
        "toggle" => build_toggle(element).map(Section::Toggle),
        "select" => build_select(element).map(Section::Select),
        "signature" => build_signature(element).map(|id| Section::Signature { id }),
        _ => {
            return Err(ConsentParseError {
                kind: ErrorKind::Other(format!(
                    "Unexpected top-level custom element <{}>",
                    element.name
                )),
                location: input.location_at(element.offset),
            })
        }
    };

    result.map_err(|error| ConsentParseError {
        kind: ErrorKind::Other(format!(
            "Unable to construct {} section: {}",
            capitalize(&element.name),
            error
        )),
        location: input.location_at(element.offset),
    })
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars)
            .collect(),
        None => String::new(),
    }
}
