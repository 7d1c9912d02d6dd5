use crate::block::Block;
use crate::filetype::FileType;
use crate::logger::Logger;
use crate::parse::parse_blocks;

pub mod merge_json;
pub mod merge_yaml;

/// Orchestrates a single merge: classify the filename, pick the policy,
/// return the merged text. Deterministic, no I/O, and infallible: malformed
/// structured input degrades to a textual fallback instead of erroring.
pub struct MergeEngine<'a> {
    logger: &'a Logger,
}

impl<'a> MergeEngine<'a> {
    pub fn new(logger: &'a Logger) -> Self {
        Self { logger }
    }

    /// Merges `suggestion` into `original`, using the extension of
    /// `filename` to pick the merge policy. The result is heuristic and
    /// meant for user review before persisting.
    #[must_use]
    pub fn merge(&self, original: &str, suggestion: &str, filename: &str) -> String {
        let file_type = FileType::from_filename(filename);
        self.logger.info(
            "merge",
            "classify",
            &format!("file={filename}, type={file_type:?}"),
        );

        if suggestion.trim().is_empty() {
            self.logger.info("merge", "empty_suggestion", "nothing to merge");
            return original.to_string();
        }

        match file_type {
            FileType::Yaml => merge_yaml::merge(original, suggestion, self.logger),
            FileType::Other => {
                // No parser for this format: append wholesale.
                self.logger.info("merge", "fallback_append", "unknown format");
                append_after_blank_line(original, suggestion.trim())
            }
            _ => self.merge_blocks(original, suggestion, file_type),
        }
    }

    fn merge_blocks(&self, original: &str, suggestion: &str, file_type: FileType) -> String {
        let original_blocks = parse_blocks(original, file_type);
        let suggestion_blocks = parse_blocks(suggestion, file_type);
        self.logger.info(
            "merge",
            "parsed",
            &format!(
                "original_blocks={}, suggestion_blocks={}",
                original_blocks.len(),
                suggestion_blocks.len()
            ),
        );

        // Replacements splice by the spans retained from the original parse,
        // so collect them first and apply them in one pass, then run the
        // insert policies on the spliced text.
        let mut replacements: Vec<(usize, String)> = Vec::new();
        let mut inserts: Vec<&Block> = Vec::new();

        for suggested in &suggestion_blocks {
            if file_type == FileType::Json {
                // Every JSON block routes through the structured merge;
                // matched and unmatched keys alike collapse into a key
                // substitution there.
                inserts.push(suggested);
                continue;
            }
            let target = if suggested.name.is_empty() {
                // Unnamed blocks can insert but never replace.
                None
            } else {
                original_blocks
                    .iter()
                    .position(|b| b.kind == suggested.kind && b.name == suggested.name)
            };
            match target {
                Some(idx) => {
                    if replacements.iter().any(|(i, _)| *i == idx) {
                        self.logger.info(
                            "merge",
                            "duplicate_target",
                            &format!("block '{}' already replaced; skipping", suggested.name),
                        );
                        continue;
                    }
                    let existing = &original_blocks[idx];
                    let content = reindent(&suggested.content, existing.indentation);
                    self.logger.info(
                        "merge",
                        "replace",
                        &format!("block '{}' at {}..{}", suggested.name, existing.span.start, existing.span.end),
                    );
                    replacements.push((idx, content));
                }
                None => inserts.push(suggested),
            }
        }

        let mut merged = splice_replacements(original, &original_blocks, &mut replacements);

        for suggested in inserts {
            merged = self.insert_block(merged, suggested, file_type);
        }
        merged
    }

    fn insert_block(&self, merged: String, block: &Block, file_type: FileType) -> String {
        let content = reindent(&block.content, block.indentation);

        if file_type == FileType::Json {
            match merge_json::shallow_merge(&merged, &block.content) {
                Some(out) => {
                    self.logger.info("merge", "json_merge", &format!("key '{}'", block.name));
                    return out;
                }
                None => {
                    // Either side failed to parse: textual fallback.
                    self.logger.info("merge", "json_fallback", "structured merge failed");
                    let mut out = merged;
                    out.push('\n');
                    out.push_str(&content);
                    return out;
                }
            }
        }

        if file_type.is_code_like() {
            // New declarations land before a trailing default export.
            if let Some(idx) = merged.rfind("export") {
                self.logger.info("merge", "insert_before_export", &format!("block '{}'", block.name));
                let mut out = String::with_capacity(merged.len() + content.len() + 4);
                out.push_str(&merged[..idx]);
                out.push_str("\n\n");
                out.push_str(&content);
                out.push_str("\n\n");
                out.push_str(&merged[idx..]);
                return out;
            }
        }

        self.logger.info("merge", "insert_append", &format!("block '{}'", block.name));
        append_after_blank_line(&merged, &content)
    }
}

/// Applies the collected span replacements to `original` in one
/// left-to-right pass.
fn splice_replacements(
    original: &str,
    original_blocks: &[Block],
    replacements: &mut Vec<(usize, String)>,
) -> String {
    if replacements.is_empty() {
        return original.to_string();
    }
    replacements.sort_by_key(|(idx, _)| original_blocks[*idx].span.start);

    let mut out = String::with_capacity(original.len());
    let mut cursor = 0usize;
    for (idx, content) in replacements.iter() {
        let span = original_blocks[*idx].span;
        out.push_str(&original[cursor..span.start]);
        out.push_str(content);
        cursor = span.end;
    }
    out.push_str(&original[cursor..]);
    out
}

/// Every line after the first gains `indentation` leading spaces, preserving
/// the column the block sits at in its new context.
fn reindent(content: &str, indentation: usize) -> String {
    let pad = " ".repeat(indentation);
    content
        .split('\n')
        .enumerate()
        .map(|(i, line)| {
            if i == 0 || line.is_empty() {
                line.to_string()
            } else {
                format!("{pad}{line}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn append_after_blank_line(text: &str, addition: &str) -> String {
    format!("{text}\n\n{addition}")
}
