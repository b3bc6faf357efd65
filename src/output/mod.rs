//! Outline of a consent form for the CLI: what it is, and what the person
//! signing it will be asked to fill in.

use consent::document::*;
use serde::Serialize;
use tinytemplate::{format_unescaped, TinyTemplate};
use tracing::debug;

static TEMPLATE: &str = "{title}
{{ for entry in entries }}    {entry.key}: {entry.value}
{{ endfor }}
{count} field(s), {paragraphs} block(s) of text
{{ for field in fields }}
{field.kind} {field.id}
    {field.prompt}
    {field.requirement}
{{ endfor }}";

#[derive(Serialize)]
struct Context {
    title: String,
    entries: Vec<Entry>,
    count: usize,
    paragraphs: usize,
    fields: Vec<Field>,
}

#[derive(Serialize)]
struct Entry {
    key: String,
    value: String,
}

#[derive(Serialize)]
struct Field {
    kind: &'static str,
    id: String,
    prompt: String,
    requirement: String,
}

pub fn outline(document: &ParseResult) -> Result<String, tinytemplate::error::Error> {
    let mut tt = TinyTemplate::new();
    tt.set_default_formatter(&format_unescaped);
    tt.add_template("outline", TEMPLATE)?;

    let entries = document
        .frontmatter
        .iter()
        .filter(|(key, _)| key.as_str() != "title")
        .map(|(key, value)| Entry {
            key: key.clone(),
            value: value.clone(),
        })
        .collect();

    let fields: Vec<Field> = document
        .sections
        .iter()
        .filter_map(describe)
        .collect();

    let context = Context {
        title: document
            .title()
            .unwrap_or("Untitled consent form")
            .to_string(),
        entries,
        count: fields.len(),
        paragraphs: document
            .sections
            .len()
            - fields.len(),
        fields,
    };

    debug!("Outlining {} fields", context.count);
    tt.render("outline", &context)
}

fn describe(section: &Section) -> Option<Field> {
    match section {
        Section::Markdown { .. } => None,
        Section::Toggle(toggle) => Some(Field {
            kind: section.name(),
            id: toggle
                .id
                .clone(),
            prompt: first_line(&toggle.prompt),
            requirement: match toggle.expected_value {
                None => "optional".to_string(),
                Some(true) => "must be accepted".to_string(),
                Some(false) => "must be declined".to_string(),
            },
        }),
        Section::Select(select) => {
            let titles: Vec<&str> = select
                .options
                .iter()
                .map(|option| option.title.as_str())
                .collect();
            let requirement = match &select.expected_value {
                ExpectedSelection::Anything => "optional".to_string(),
                ExpectedSelection::AnythingExceptEmpty => "a choice is required".to_string(),
                ExpectedSelection::Option(option) => format!("must be '{}'", option.title),
            };
            Some(Field {
                kind: section.name(),
                id: select
                    .id
                    .clone(),
                prompt: format!("{} [{}]", first_line(&select.prompt), titles.join(" | ")),
                requirement,
            })
        }
        Section::Signature { id } => Some(Field {
            kind: section.name(),
            id: id.clone(),
            prompt: "signature".to_string(),
            requirement: "must be signed".to_string(),
        }),
    }
}

fn first_line(text: &str) -> String {
    text.lines()
        .next()
        .unwrap_or("")
        .to_string()
}
