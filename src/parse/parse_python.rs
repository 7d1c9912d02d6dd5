use crate::block::{indentation_of, Block, BlockKind};
use crate::parse::{line_spans, trimmed_span};

/// Python strategy: a line whose trimmed text starts with `def ` or
/// `class ` opens a block of the matching kind, named by the token after
/// the keyword up to `(`. Everything up to the next trigger rides along in
/// the open block, including any trailing module-level code.
#[must_use]
pub fn parse(text: &str) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut open: Option<(usize, BlockKind, String, usize)> = None;
    let mut last_end = 0usize;

    for (start, end) in line_spans(text) {
        let line = &text[start..end];
        let trimmed = line.trim_start();

        let kind = if trimmed.starts_with("def ") {
            Some(BlockKind::Function)
        } else if trimmed.starts_with("class ") {
            Some(BlockKind::Class)
        } else {
            None
        };

        if let Some(kind) = kind {
            if let Some((block_start, k, name, indent)) = open.take() {
                emit(text, block_start, last_end, k, name, indent, &mut blocks);
            }
            let keyword_len = if kind == BlockKind::Function { 4 } else { 6 };
            let name = trimmed[keyword_len..]
                .split(['(', ':', ' '])
                .next()
                .unwrap_or("")
                .trim()
                .to_string();
            open = Some((start, kind, name, indentation_of(line)));
        } else if open.is_none() && !line.trim().is_empty() {
            open = Some((start, BlockKind::Other, String::new(), 0));
        }
        last_end = end;
    }

    if let Some((block_start, kind, name, indent)) = open {
        emit(text, block_start, last_end, kind, name, indent, &mut blocks);
    }

    if blocks.is_empty() {
        return vec![Block::root(text)];
    }
    blocks
}

fn emit(
    text: &str,
    start: usize,
    end: usize,
    kind: BlockKind,
    name: String,
    indentation: usize,
    blocks: &mut Vec<Block>,
) {
    let span = trimmed_span(text, start, end);
    if span.is_empty() {
        return;
    }
    blocks.push(Block {
        kind,
        name,
        content: text[span.start..span.end].to_string(),
        indentation,
        span,
    });
}
