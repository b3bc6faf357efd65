//! Code formatter for consent documents

use crate::document::*;
use crate::formatting::*;
use crate::parsing::element::{is_identifier_char, is_identifier_start};

/// Convert a parsed document back into consent markup, as a sequence of
/// tagged fragments.
pub fn format_with_renderer(document: &ParseResult) -> Vec<(Syntax, String)> {
    let mut output = Formatter::new();

    if !document
        .frontmatter
        .is_empty()
    {
        output.format_frontmatter(&document.frontmatter);
    }

    for (i, section) in document
        .sections
        .iter()
        .enumerate()
    {
        if i > 0 || !document
            .frontmatter
            .is_empty()
        {
            output.append(Syntax::Newline, "\n");
        }
        output.format_section(section);
    }

    output.fragments
}

struct Formatter {
    fragments: Vec<(Syntax, String)>,
}

impl Formatter {
    fn new() -> Formatter {
        Formatter {
            fragments: Vec::new(),
        }
    }

    fn append(&mut self, syntax: Syntax, content: &str) {
        self.fragments
            .push((syntax, content.to_string()));
    }

    fn format_frontmatter(&mut self, frontmatter: &Frontmatter) {
        self.append(Syntax::Delimiter, "---");
        self.append(Syntax::Newline, "\n");

        for (key, value) in frontmatter {
            self.append(Syntax::Key, key);
            self.append(Syntax::Operator, ":");
            if !value.is_empty() {
                self.append(Syntax::Neutral, " ");
                self.append(Syntax::Value, value);
            }
            self.append(Syntax::Newline, "\n");
        }

        self.append(Syntax::Delimiter, "---");
        self.append(Syntax::Newline, "\n");
    }

    fn format_section(&mut self, section: &Section) {
        match section {
            Section::Markdown { text } => {
                self.append(Syntax::Markdown, text);
                self.append(Syntax::Newline, "\n");
            }
            Section::Toggle(toggle) => self.format_toggle(toggle),
            Section::Select(select) => self.format_select(select),
            Section::Signature { id } => {
                self.open_tag("signature");
                self.attribute("id", id);
                self.append(Syntax::Neutral, " ");
                self.append(Syntax::Tag, "/>");
                self.append(Syntax::Newline, "\n");
            }
        }
    }

    fn format_toggle(&mut self, toggle: &ToggleSection) {
        self.open_tag("toggle");
        self.attribute("id", &toggle.id);
        if toggle.initial_value {
            self.attribute("initial-value", "true");
        }
        if let Some(expected) = toggle.expected_value {
            self.attribute("expected-value", if expected { "true" } else { "false" });
        }
        self.append(Syntax::Tag, ">");

        self.append(Syntax::Prompt, &toggle.prompt);

        self.close_tag("toggle");
        self.append(Syntax::Newline, "\n");
    }

    fn format_select(&mut self, select: &SelectSection) {
        self.open_tag("select");
        self.attribute("id", &select.id);
        if let Some(initial) = &select.initial_value {
            self.attribute("initial-value", &initial.id);
        }
        match &select.expected_value {
            ExpectedSelection::Anything => {}
            ExpectedSelection::AnythingExceptEmpty => self.attribute("expected-value", "*"),
            ExpectedSelection::Option(option) => self.attribute("expected-value", &option.id),
        }
        self.append(Syntax::Tag, ">");
        self.append(Syntax::Newline, "\n");

        self.append(Syntax::Prompt, &select.prompt);
        self.append(Syntax::Newline, "\n");

        for option in &select.options {
            self.open_tag("option");
            self.attribute("id", &option.id);
            self.append(Syntax::Tag, ">");
            self.append(Syntax::Prompt, &option.title);
            self.close_tag("option");
            self.append(Syntax::Newline, "\n");
        }

        self.close_tag("select");
        self.append(Syntax::Newline, "\n");
    }

    fn open_tag(&mut self, name: &str) {
        self.append(Syntax::Tag, "<");
        self.append(Syntax::Tag, name);
    }

    fn close_tag(&mut self, name: &str) {
        self.append(Syntax::Tag, "</");
        self.append(Syntax::Tag, name);
        self.append(Syntax::Tag, ">");
    }

    fn attribute(&mut self, name: &str, value: &str) {
        self.append(Syntax::Neutral, " ");
        self.append(Syntax::Attribute, name);
        self.append(Syntax::Operator, "=");

        if is_bare(value) {
            self.append(Syntax::Identifier, value);
        } else {
            self.append(Syntax::String, &quote(value));
        }
    }
}

/// Whether a value would be read back unchanged without quotes.
fn is_bare(value: &str) -> bool {
    let mut chars = value.chars();
    match chars.next() {
        Some(c) if is_identifier_start(c) => chars.all(is_identifier_char),
        _ => false,
    }
}

fn quote(value: &str) -> String {
    let mut result = String::with_capacity(value.len() + 2);
    result.push('"');
    for c in value.chars() {
        if c == '"' || c == '\\' {
            result.push('\\');
        }
        result.push(c);
    }
    result.push('"');
    result
}
