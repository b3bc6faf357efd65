//! Types representing a parsed consent document

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

/// Key/value pairs from the optional `---` block at the top of a document.
/// A key without a value maps to the empty string.
pub type Frontmatter = BTreeMap<String, String>;

#[derive(Eq, Debug, PartialEq, Clone, Serialize)]
pub struct ParseResult {
    pub frontmatter: Frontmatter,
    pub sections: Vec<Section>,
}

impl ParseResult {
    pub fn title(&self) -> Option<&str> {
        self.frontmatter
            .get("title")
            .map(String::as_str)
    }

    /// Identifiers carried by more than one interactive section. The parser
    /// itself doesn't enforce uniqueness; consumers storing answers by id
    /// need to.
    pub fn duplicate_ids(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        let mut duplicates: Vec<&str> = Vec::new();

        for id in self
            .sections
            .iter()
            .filter_map(Section::id)
        {
            if seen.contains(&id) {
                if !duplicates.contains(&id) {
                    duplicates.push(id);
                }
            } else {
                seen.push(id);
            }
        }

        duplicates
    }
}

#[derive(Eq, Debug, PartialEq, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Section {
    Markdown { text: String },
    Toggle(ToggleSection),
    Select(SelectSection),
    Signature { id: String },
}

impl Section {
    /// The identifier of an interactive section; markdown has none.
    pub fn id(&self) -> Option<&str> {
        match self {
            Section::Markdown { .. } => None,
            Section::Toggle(toggle) => Some(&toggle.id),
            Section::Select(select) => Some(&select.id),
            Section::Signature { id } => Some(id),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Section::Markdown { .. } => "markdown",
            Section::Toggle(_) => "toggle",
            Section::Select(_) => "select",
            Section::Signature { .. } => "signature",
        }
    }
}

#[derive(Eq, Debug, PartialEq, Clone, Serialize)]
pub struct ToggleSection {
    pub id: String,
    pub prompt: String,
    pub initial_value: bool,
    pub expected_value: Option<bool>,
}

#[derive(Eq, Debug, PartialEq, Clone, Serialize)]
pub struct SelectSection {
    pub id: String,
    pub prompt: String,
    pub options: Vec<SelectionOption>,
    pub initial_value: Option<SelectionOption>,
    pub expected_value: ExpectedSelection,
}

impl SelectSection {
    pub fn option(&self, id: &str) -> Option<&SelectionOption> {
        self.options
            .iter()
            .find(|option| option.id == id)
    }
}

#[derive(Eq, Debug, PartialEq, Clone, Serialize)]
pub struct SelectionOption {
    pub id: String,
    pub title: String,
}

/// What answer a select field must have for the form to be accepted.
#[derive(Eq, Debug, PartialEq, Clone, Default, Serialize)]
#[serde(tag = "kind", content = "option", rename_all = "kebab-case")]
pub enum ExpectedSelection {
    /// No constraint; leaving the field empty is fine.
    #[default]
    Anything,
    /// Any of the options, but something must be chosen. Written as `"*"`.
    AnythingExceptEmpty,
    /// Exactly this option.
    Option(SelectionOption),
}

/// Zero-origin position within the input, used for diagnostics. Orders by
/// line, then column.
#[derive(Eq, Debug, PartialEq, PartialOrd, Ord, Clone, Copy, Default, Serialize)]
pub struct SourceLocation {
    pub line: usize,
    pub column: usize,
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // humans count from one
        write!(f, "{}:{}", self.line + 1, self.column + 1)
    }
}
