/// Byte range of a block's trimmed content within the text it was parsed
/// from. Replacement splices by this range instead of re-finding the content
/// with a substring search, so a block whose text recurs verbatim elsewhere
/// in the file cannot be edited in the wrong place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    #[must_use]
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Zero-width span for synthesized content (e.g. pretty-printed JSON
    /// blocks) that has no location in the source text.
    #[must_use]
    pub fn empty() -> Self {
        Self { start: 0, end: 0 }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Function,
    Class,
    Variable,
    Other,
}

/// A contiguous, named unit of parsed text; the atom of comparison and
/// replacement. `name` may be empty when no identifier could be extracted —
/// such blocks can insert but never match an existing block.
#[derive(Debug, Clone)]
pub struct Block {
    pub kind: BlockKind,
    pub name: String,
    pub content: String,
    pub indentation: usize,
    pub span: Span,
}

impl Block {
    /// Single-block fallback covering the entire text: kind `Other`, name
    /// `root`, indentation 0.
    #[must_use]
    pub fn root(text: &str) -> Self {
        Self {
            kind: BlockKind::Other,
            name: "root".to_string(),
            content: text.to_string(),
            indentation: 0,
            span: Span::new(0, text.len()),
        }
    }
}

/// Count of leading whitespace characters on `line`.
#[must_use]
pub fn indentation_of(line: &str) -> usize {
    line.chars().take_while(|c| c.is_whitespace()).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indentation_counts_leading_whitespace() {
        assert_eq!(indentation_of("    four"), 4);
        assert_eq!(indentation_of("\t\tone"), 2);
        assert_eq!(indentation_of("none"), 0);
        assert_eq!(indentation_of(""), 0);
    }

    #[test]
    fn root_block_covers_whole_text() {
        let b = Block::root("hello\nworld");
        assert_eq!(b.kind, BlockKind::Other);
        assert_eq!(b.name, "root");
        assert_eq!(b.span, Span::new(0, 11));
    }
}
