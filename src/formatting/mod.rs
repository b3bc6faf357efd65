//! Formatting parsed consent documents back into markup

pub mod formatter;
mod renderer;
mod syntax;

pub use renderer::Terminal;
pub use syntax::{Identity, Render, Syntax};

use crate::document::ParseResult;

/// We do the formatting in two passes. First we convert the document into a
/// Vec of "fragments" (Syntax tag, String pairs). Then second we apply the
/// specified renderer to each pair to result in an embellished/highlighted
/// String.
pub fn render(renderer: &impl Render, document: &ParseResult) -> String {
    // Pass 1: Format document to tagged fragments
    let fragments = formatter::format_with_renderer(document);

    // Pass 2: Render tagged fragments to final output
    render_to_string(renderer, fragments)
}

fn render_to_string(renderer: &impl Render, fragments: Vec<(Syntax, String)>) -> String {
    let mut output = String::new();

    for (syntax, content) in fragments {
        let rendered = renderer.style(syntax, &content);
        output.push_str(&rendered);
    }

    output
}
