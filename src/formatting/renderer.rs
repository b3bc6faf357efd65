//! Renderers for colourizing consent markup

use owo_colors::OwoColorize;

use crate::formatting::*;

/// Embellish fragments with ANSI escapes to create syntax highlighting in
/// terminal output.
pub struct Terminal;

impl Render for Terminal {
    fn style(&self, syntax: Syntax, content: &str) -> String {
        match syntax {
            Syntax::Neutral => content.to_string(),
            Syntax::Newline => "\n".to_string(),
            Syntax::Delimiter => content // punctuation.separator - #75507b (purple)
                .color(owo_colors::Rgb(0x75, 0x50, 0x7b))
                .to_string(),
            Syntax::Key => content // entity.name.tag.yaml - #3465a4 (blue) bold
                .color(owo_colors::Rgb(0x34, 0x65, 0xa4))
                .bold()
                .to_string(),
            Syntax::Value => content.to_string(),
            Syntax::Markdown => content.to_string(),
            Syntax::Tag => content // entity.name.tag - #8f5902 (brown) bold
                .color(owo_colors::Rgb(0x8f, 0x59, 0x02))
                .bold()
                .to_string(),
            Syntax::Attribute => content // entity.other.attribute-name - #729fcf (light blue)
                .color(owo_colors::Rgb(0x72, 0x9f, 0xcf))
                .to_string(),
            Syntax::Operator => content // keyword.operator - #999999
                .color(owo_colors::Rgb(153, 153, 153))
                .to_string(),
            Syntax::Identifier => content // constant.other - #ad7fa8 (purple) bold
                .color(owo_colors::Rgb(0xad, 0x7f, 0xa8))
                .bold()
                .to_string(),
            Syntax::String => content // string - #4e9a06 (green) bold
                .color(owo_colors::Rgb(0x4e, 0x9a, 0x06))
                .bold()
                .to_string(),
            Syntax::Prompt => content
                .bright_white()
                .bold()
                .to_string(),
        }
    }
}
