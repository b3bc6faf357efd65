use consent::parsing::{ConsentParseError, ErrorKind};

/// Generate problem and detail messages for parsing errors
pub fn generate_error_message(error: &ConsentParseError) -> (String, String) {
    match &error.kind {
        ErrorKind::NonUtf8Input => (
            "Input is not valid UTF-8".to_string(),
            r#"
Consent documents must be UTF-8 encoded text. The bytes at this position
are not; check the encoding the file was saved with.
            "#
            .trim_ascii()
            .to_string(),
        ),
        ErrorKind::Eof => (
            "Unexpected end of input".to_string(),
            "The file ended before the parser expected it to".to_string(),
        ),
        ErrorKind::UnexpectedCharacter(c) => (
            format!("Unexpected character '{}'", c),
            r#"
Attributes in a custom element take the form name=value where the value is
a "quoted string", a bare identifier, or an integer. Frontmatter entries take
the form key: value.
            "#
            .trim_ascii()
            .to_string(),
        ),
        ErrorKind::Other(message) if message.starts_with("unable to close") => (
            message.clone(),
            r#"
Every custom element needs a closing tag, either the explicit form like
</toggle> or the shorthand </>. Elements with no content can be written as
self-closing, as in <signature id=patient />.
            "#
            .trim_ascii()
            .to_string(),
        ),
        ErrorKind::Other(message) if message.starts_with("Unexpected top-level") => (
            message.clone(),
            "The custom elements recognized are <toggle>, <select>, and <signature>.".to_string(),
        ),
        ErrorKind::Other(message) if message.starts_with("Unable to find end of frontmatter") => (
            message.clone(),
            r#"
The frontmatter block begins and ends with a line containing only ---, and
each line between them is an entry of the form key: value.
            "#
            .trim_ascii()
            .to_string(),
        ),
        ErrorKind::Other(message) => (message.clone(), String::new()),
    }
}
