use super::messages::generate_error_message;
use consent::document::LoadingError;
use consent::parsing::ConsentParseError;
use owo_colors::OwoColorize;
use std::path::Path;

/// Format a parsing error with full details including source code context
pub fn full_parsing_error(error: &ConsentParseError, filename: &Path, source: &str) -> String {
    let (problem, details) = generate_error_message(error);

    let i = error
        .location
        .line;
    let j = error
        .location
        .column;

    let code = source
        .lines()
        .nth(i)
        .unwrap_or("");
    let line = i + 1;
    let column = j + 1;
    let width = 3.max(
        line.to_string()
            .len(),
    );

    format!(
        r#"
{}: {}:{}:{} {}

{:width$} {}
{:width$} {} {}
{:width$} {} {:>column$}

{}
        "#,
        "error".bright_red(),
        filename.to_string_lossy(),
        line,
        column,
        problem.bold(),
        ' ',
        '|'.bright_blue(),
        line.bright_blue(),
        '|'.bright_blue(),
        code,
        ' ',
        '|'.bright_blue(),
        '^'.bright_red(),
        details
    )
    .trim_ascii()
    .to_string()
}

/// Format a parsing error with concise single-line output
pub fn concise_parsing_error(error: &ConsentParseError, filename: &Path) -> String {
    let (problem, _) = generate_error_message(error);

    format!(
        "{}: {}:{} {}",
        "error".bright_red(),
        filename.to_string_lossy(),
        error.location,
        problem.bold(),
    )
}

/// Format a LoadingError with concise single-line output
pub fn concise_loading_error(error: &LoadingError<'_>) -> String {
    format!(
        "{}: {}: {}",
        "error".bright_red(),
        error
            .filename
            .display(),
        error
            .to_string()
            .bold()
    )
}
