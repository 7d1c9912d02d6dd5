use crate::block::{indentation_of, Block, BlockKind};
use crate::parse::{line_spans, trimmed_span};
use regex::Regex;

/// JS/TS token-trigger strategy. A line containing the token `function`, or
/// both `const` and `=>`, starts a function block named by the identifier
/// following the keyword (empty if none matches). Known heuristic weakness:
/// string literals or comments containing these tokens also trigger a split.
///
/// A non-trigger line whose trimmed text starts with `export` closes the
/// open block, so trailing export statements form their own block instead of
/// riding along inside the last declaration.
#[must_use]
pub fn parse(text: &str) -> Vec<Block> {
    let re_name = Regex::new(r"(?:function|const)\s+(\w+)").unwrap();

    let mut blocks = Vec::new();
    // (start_byte, kind, name, indent)
    let mut open: Option<(usize, BlockKind, String, usize)> = None;
    let mut last_end = 0usize;

    for (start, end) in line_spans(text) {
        let line = &text[start..end];
        let is_trigger =
            line.contains("function") || (line.contains("const") && line.contains("=>"));
        let is_export_boundary = !is_trigger && line.trim_start().starts_with("export");

        if is_trigger {
            if let Some((block_start, kind, name, indent)) = open.take() {
                emit(text, block_start, last_end, kind, name, indent, &mut blocks);
            }
            let name = re_name
                .captures(line)
                .and_then(|c| c.get(1))
                .map_or(String::new(), |m| m.as_str().to_string());
            open = Some((start, BlockKind::Function, name, indentation_of(line)));
        } else if is_export_boundary {
            if let Some((block_start, kind, name, indent)) = open.take() {
                emit(text, block_start, last_end, kind, name, indent, &mut blocks);
            }
            open = Some((start, BlockKind::Other, String::new(), indentation_of(line)));
        } else if open.is_none() && !line.trim().is_empty() {
            // Lines before the first trigger collect into an initial block.
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
