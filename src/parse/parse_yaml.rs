use crate::block::{indentation_of, Block, BlockKind};
use crate::parse::{line_spans, trimmed_span};

/// YAML indentation strategy: one block per top-level key, not a full tree.
///
/// The first non-blank line fixes the running base indentation; any later
/// non-blank line at or below it closes the open block and starts a new one.
/// Nested mappings are folded into their parent's block content verbatim,
/// and blank lines attach to whichever block is open.
#[must_use]
pub fn parse(text: &str) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut open: Option<(usize, usize)> = None; // (start_byte, base_indent)
    let mut last_end = 0usize;

    for (start, end) in line_spans(text) {
        let line = &text[start..end];
        let trimmed = line.trim();
        if trimmed.is_empty() {
            last_end = end;
            continue;
        }
        let indent = indentation_of(line);
        match open {
            Some((block_start, base)) if indent <= base => {
                emit(text, block_start, last_end, base, &mut blocks);
                open = Some((start, indent));
            }
            Some(_) => {}
            None => open = Some((start, indent)),
        }
        last_end = end;
    }

    if let Some((block_start, base)) = open {
        emit(text, block_start, last_end, base, &mut blocks);
    }

    if blocks.is_empty() {
        return vec![Block::root(text)];
    }
    blocks
}

fn emit(text: &str, start: usize, end: usize, base: usize, blocks: &mut Vec<Block>) {
    let span = trimmed_span(text, start, end);
    if span.is_empty() {
        return;
    }
    let content = text[span.start..span.end].to_string();
    // Block name is the key of its first line, without the colon.
    let first_line = content.lines().next().unwrap_or("");
    let name = first_line.split(':').next().unwrap_or("").trim().to_string();
    blocks.push(Block { kind: BlockKind::Other, name, content, indentation: base, span });
}
