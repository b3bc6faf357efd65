//! Parsing of consent documents: markdown prose interleaved with custom
//! `<toggle>`, `<select>` and `<signature>` form elements, optionally
//! preceded by a `---` frontmatter block.

pub mod document;
pub mod formatting;
pub mod parsing;
