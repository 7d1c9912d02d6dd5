use crate::block::indentation_of;
use crate::logger::Logger;
use std::collections::HashMap;

/// YAML merge policy: substitute leaf values, never delete or reorder.
///
/// Builds a path map from the suggestion (dot-joined ancestor keys → scalar
/// value), then rewalks the original line by line, emitting every line
/// unchanged except leaves whose path the suggestion also carries, which
/// keep their original key and indentation but take the suggested value.
/// Sequences and multi-line scalars are opaque: they pass through as plain
/// lines and never match a leaf path.
pub fn merge(original: &str, suggestion: &str, logger: &Logger) -> String {
    let changes = path_map(suggestion);
    logger.info("merge", "yaml_paths", &format!("suggestion_leaves={}", changes.len()));

    let mut stack: Vec<(usize, String)> = Vec::new();
    let mut out: Vec<String> = Vec::new();
    let mut substituted = 0usize;

    for line in original.split('\n') {
        let indent = indentation_of(line);
        match classify_line(line) {
            YamlLine::Leaf { key, .. } => {
                prune_to(&mut stack, indent);
                let path = full_path(&stack, key);
                if let Some(value) = changes.get(&path) {
                    out.push(format!("{}{}: {}", " ".repeat(indent), key, value));
                    substituted += 1;
                } else {
                    out.push(line.to_string());
                }
            }
            YamlLine::Structural { key } => {
                push_path(&mut stack, indent, key);
                out.push(line.to_string());
            }
            YamlLine::Opaque => out.push(line.to_string()),
        }
    }

    logger.info("merge", "yaml_substituted", &format!("leaves={substituted}"));
    out.join("\n")
}

enum YamlLine<'a> {
    /// `key: value` with a scalar value.
    Leaf { key: &'a str, value: &'a str },
    /// Bare `key:` introducing a nested mapping.
    Structural { key: &'a str },
    /// Blank lines, comments, sequence items, anything else.
    Opaque,
}

fn classify_line(line: &str) -> YamlLine<'_> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with('-') {
        return YamlLine::Opaque;
    }
    if let Some(key) = trimmed.strip_suffix(':') {
        return YamlLine::Structural { key: key.trim() };
    }
    if let Some((key, value)) = trimmed.split_once(':') {
        return YamlLine::Leaf { key: key.trim(), value: value.trim() };
    }
    YamlLine::Opaque
}

/// Dot-joined path map from the suggestion's leaf lines, tracking ancestors
/// with an indentation-keyed stack: a bare `key:` line pops everything at or
/// below its own depth, then pushes itself; a leaf records its path without
/// touching the stack.
fn path_map(suggestion: &str) -> HashMap<String, String> {
    let mut map = HashMap::new();
    let mut stack: Vec<(usize, String)> = Vec::new();

    for line in suggestion.split('\n') {
        let indent = indentation_of(line);
        match classify_line(line) {
            YamlLine::Leaf { key, value } => {
                prune_to(&mut stack, indent);
                map.insert(full_path(&stack, key), value.to_string());
            }
            YamlLine::Structural { key } => {
                push_path(&mut stack, indent, key);
            }
            YamlLine::Opaque => {}
        }
    }
    map
}

/// Drops ancestors at or below `indent`, so a line only sees ancestors that
/// are strictly shallower than itself.
fn prune_to(stack: &mut Vec<(usize, String)>, indent: usize) {
    while stack.last().is_some_and(|(depth, _)| *depth >= indent) {
        stack.pop();
    }
}

fn push_path(stack: &mut Vec<(usize, String)>, indent: usize, key: &str) {
    prune_to(stack, indent);
    stack.push((indent, key.to_string()));
}

fn full_path(stack: &[(usize, String)], leaf_key: &str) -> String {
    let mut parts: Vec<&str> = stack.iter().map(|(_, k)| k.as_str()).collect();
    parts.push(leaf_key);
    parts.join(".")
}
