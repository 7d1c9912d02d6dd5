#![deny(warnings)]

pub mod block;
pub mod error;
pub mod extract;
pub mod filetype;
pub mod logger;
pub mod merge;
pub mod parse;

pub use block::{Block, BlockKind, Span};
pub use error::{ErrorCode, MergeError, Result};
pub use filetype::FileType;
pub use merge::MergeEngine;

use logger::Logger;

/// Merges an AI-suggested rewrite into the original text of `filename`.
///
/// Pure text-to-text: `filename` is only consulted for its extension, and
/// every input produces a result string. Convenience wrapper over
/// [`MergeEngine`] for callers that do not carry a logger; it logs nothing,
/// so the caller's stdout stays clean.
pub fn merge(original: &str, suggestion: &str, filename: &str) -> String {
    let logger = Logger::silent();
    MergeEngine::new(&logger).merge(original, suggestion, filename)
}
