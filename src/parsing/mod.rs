//! parser for consent documents

use std::fmt;
use std::io::Read;
use std::path::Path;
use tracing::debug;

use crate::document::{LoadingError, ParseResult};

pub mod cursor;
pub mod element;
pub mod parser;
pub mod sections;

pub use parser::{ConsentParseError, ErrorKind};

/// Read a file (or standard input, if the filename is "-") and return its
/// raw bytes. Checking that they are UTF-8 is left to the parser so that a
/// bad byte is reported with its position.
pub fn load(filename: &Path) -> Result<Vec<u8>, LoadingError<'_>> {
    let result = if filename.to_str() == Some("-") {
        let mut buffer = Vec::new();
        std::io::stdin()
            .read_to_end(&mut buffer)
            .map(|_| buffer)
    } else {
        std::fs::read(filename)
    };

    match result {
        Ok(content) => Ok(content),
        Err(error) => {
            debug!(?error);
            match error.kind() {
                std::io::ErrorKind::NotFound => Err(LoadingError {
                    problem: "File not found".to_string(),
                    details: String::new(),
                    filename,
                }),
                _ => Err(LoadingError {
                    problem: "Failed reading".to_string(),
                    details: error
                        .kind()
                        .to_string(),
                    filename,
                }),
            }
        }
    }
}

/// Parse text into a ParseResult, or return the error that stopped it.
pub fn parse(content: &str) -> Result<ParseResult, ConsentParseError> {
    report(parser::parse_from_start(content))
}

/// Parse raw bytes, failing with NonUtf8Input if they aren't valid UTF-8.
pub fn parse_bytes(data: &[u8]) -> Result<ParseResult, ConsentParseError> {
    report(parser::parse_bytes(data))
}

/// Load and parse a file. Problems reading the file are kept distinct from
/// problems with its content.
pub fn parse_file(filename: &Path) -> Result<ParseResult, ReadError<'_>> {
    let data = load(filename)?;
    let result = parse_bytes(&data)?;
    Ok(result)
}

fn report(
    result: Result<ParseResult, ConsentParseError>,
) -> Result<ParseResult, ConsentParseError> {
    match &result {
        Ok(document) => {
            let total = document
                .sections
                .len();
            let fields = document
                .sections
                .iter()
                .filter(|section| section.id().is_some())
                .count();
            debug!(
                "Found {} section{}, {} interactive",
                total,
                if total == 1 { "" } else { "s" },
                fields
            );
        }
        Err(error) => {
            debug!("error: {}", error);
        }
    }
    result
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadError<'i> {
    Loading(LoadingError<'i>),
    Parsing(ConsentParseError),
}

impl<'i> From<LoadingError<'i>> for ReadError<'i> {
    fn from(error: LoadingError<'i>) -> Self {
        ReadError::Loading(error)
    }
}

impl<'i> From<ConsentParseError> for ReadError<'i> {
    fn from(error: ConsentParseError) -> Self {
        ReadError::Parsing(error)
    }
}

impl<'i> fmt::Display for ReadError<'i> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReadError::Loading(error) => {
                write!(f, "{}: {}", error.filename.display(), error)
            }
            ReadError::Parsing(error) => write!(f, "{}", error),
        }
    }
}

impl<'i> std::error::Error for ReadError<'i> {}
