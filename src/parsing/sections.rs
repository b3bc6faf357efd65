//! Validate parsed custom elements against the schema for their tag and
//! build the typed sections of the document model.

use std::fmt;

use crate::document::*;
use crate::parsing::element::{Content, ParsedElement};

const INITIAL_VALUE: [&str; 2] = ["initial-value", "initialValue"];
const EXPECTED_VALUE: [&str; 2] = ["expected-value", "expectedValue"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionError {
    MissingAttribute(&'static str),
    MissingField(&'static str),
    UnexpectedElement(String),
    UnknownOption { attribute: &'static str, id: String },
}

impl fmt::Display for SectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SectionError::MissingAttribute(name) => write!(f, "missing attribute '{}'", name),
            SectionError::MissingField(name) => write!(f, "missing {}", name),
            SectionError::UnexpectedElement(name) => write!(f, "unexpected element <{}>", name),
            SectionError::UnknownOption { attribute, id } => {
                write!(f, "{} refers to unknown option '{}'", attribute, id)
            }
        }
    }
}

impl std::error::Error for SectionError {}

pub fn build_toggle(element: &ParsedElement) -> Result<ToggleSection, SectionError> {
    let id = required_id(element)?;
    let prompt = first_text(element).ok_or(SectionError::MissingField("prompt"))?;

    let initial_value = lookup(element, &INITIAL_VALUE)
        .and_then(parse_boolean)
        .unwrap_or(false);

    let expected_value = lookup(element, &EXPECTED_VALUE).and_then(parse_boolean);

    Ok(ToggleSection {
        id,
        prompt,
        initial_value,
        expected_value,
    })
}

/// Text runs between the options are all prompt, and are joined back
/// together as separate paragraphs.
pub fn build_select(element: &ParsedElement) -> Result<SelectSection, SectionError> {
    let id = required_id(element)?;

    let mut prompts: Vec<&str> = Vec::new();
    let mut options = Vec::new();

    for child in &element.content {
        match child {
            Content::Text(text) => prompts.push(text),
            Content::Element(nested) if nested.name == "option" => {
                options.push(build_option(nested)?);
            }
            Content::Element(nested) => {
                return Err(SectionError::UnexpectedElement(
                    nested
                        .name
                        .clone(),
                ));
            }
        }
    }

    if prompts.is_empty() {
        return Err(SectionError::MissingField("prompt"));
    }
    let prompt = prompts.join("\n\n");

    let initial_value = match lookup(element, &INITIAL_VALUE) {
        None => None,
        Some(reference) => Some(resolve(&options, INITIAL_VALUE[0], reference)?),
    };

    let expected_value = match lookup(element, &EXPECTED_VALUE) {
        None => ExpectedSelection::Anything,
        Some("*") => ExpectedSelection::AnythingExceptEmpty,
        Some(reference) => {
            ExpectedSelection::Option(resolve(&options, EXPECTED_VALUE[0], reference)?)
        }
    };

    Ok(SelectSection {
        id,
        prompt,
        options,
        initial_value,
        expected_value,
    })
}

pub fn build_option(element: &ParsedElement) -> Result<SelectionOption, SectionError> {
    let id = required_id(element)?;
    let title = first_text(element).ok_or(SectionError::MissingField("title"))?;

    Ok(SelectionOption { id, title })
}

pub fn build_signature(element: &ParsedElement) -> Result<String, SectionError> {
    required_id(element)
}

fn required_id(element: &ParsedElement) -> Result<String, SectionError> {
    match element.attribute("id") {
        Some(id) if !id.is_empty() => Ok(id.to_string()),
        _ => Err(SectionError::MissingAttribute("id")),
    }
}

/// The first spelling of an attribute that is present wins.
fn lookup<'a>(element: &'a ParsedElement, names: &[&str]) -> Option<&'a str> {
    names
        .iter()
        .find_map(|name| element.attribute(name))
}

fn first_text(element: &ParsedElement) -> Option<String> {
    match element
        .content
        .first()
    {
        Some(Content::Text(text)) => Some(text.clone()),
        _ => None,
    }
}

fn parse_boolean(value: &str) -> Option<bool> {
    match value {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

fn resolve(
    options: &[SelectionOption],
    attribute: &'static str,
    reference: &str,
) -> Result<SelectionOption, SectionError> {
    options
        .iter()
        .find(|option| option.id == reference)
        .cloned()
        .ok_or_else(|| SectionError::UnknownOption {
            attribute,
            id: reference.to_string(),
        })
}
