use crate::block::{Block, Span};
use crate::filetype::FileType;

pub mod parse_code;
pub mod parse_json;
pub mod parse_python;
pub mod parse_yaml;

/// Decomposes `text` into an ordered sequence of named blocks using the
/// strategy for `file_type`. Every line of the input belongs to exactly one
/// block; block order is order of first appearance. Formats without a
/// strategy (and empty input) yield the single-block fallback.
#[must_use]
pub fn parse_blocks(text: &str, file_type: FileType) -> Vec<Block> {
    if text.trim().is_empty() {
        return vec![Block::root(text)];
    }
    match file_type {
        FileType::Yaml => parse_yaml::parse(text),
        FileType::Json => parse_json::parse(text),
        FileType::Typescript | FileType::Javascript => parse_code::parse(text),
        FileType::Python => parse_python::parse(text),
        FileType::Other => vec![Block::root(text)],
    }
}

/// Byte ranges of each line of `s`, excluding the trailing newline.
pub(crate) fn line_spans(s: &str) -> Vec<(usize, usize)> {
    let mut out = Vec::new();
    let mut start = 0usize;
    for (i, b) in s.bytes().enumerate() {
        if b == b'\n' {
            out.push((start, i));
            start = i + 1;
        }
    }
    if start <= s.len() {
        out.push((start, s.len()));
    }
    out
}

/// Shrinks `[start, end)` past surrounding whitespace, so the span covers
/// exactly the trimmed block content.
pub(crate) fn trimmed_span(text: &str, start: usize, end: usize) -> Span {
    let slice = &text[start..end];
    let lead = slice.len() - slice.trim_start().len();
    let trimmed = slice.trim();
    Span::new(start + lead, start + lead + trimmed.len())
}
