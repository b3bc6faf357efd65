// Types representing a parsed consent document

mod error;
mod types;

// Re-export all public symbols
pub use error::*;
pub use types::*;
