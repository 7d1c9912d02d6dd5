use crate::block::{Block, BlockKind, Span};
use serde_json::Value;

/// JSON top-level-key strategy: the whole text must parse as a JSON object;
/// each top-level key becomes one block whose content is the pretty-printed
/// single-key object. Parse failure (or a non-object document) degrades to
/// the single-block fallback so the merge falls back to textual handling.
///
/// Block content here is synthesized rather than a source substring, so the
/// spans are zero-width and never used for splicing.
#[must_use]
pub fn parse(text: &str) -> Vec<Block> {
    match serde_json::from_str::<Value>(text) {
        Ok(Value::Object(map)) => map
            .into_iter()
            .map(|(key, value)| {
                let mut single = serde_json::Map::new();
                single.insert(key.clone(), value);
                let content = serde_json::to_string_pretty(&Value::Object(single))
                    .unwrap_or_default();
                Block {
                    kind: BlockKind::Other,
                    name: key,
                    content,
                    indentation: 0,
                    span: Span::empty(),
                }
            })
            .collect(),
        _ => vec![Block::root(text)],
    }
}
