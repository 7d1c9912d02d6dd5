use crate::filetype::FileType;
use regex::Regex;

fn fence_re() -> Regex {
    // Tag, then the fence body up to the closing backticks.
    Regex::new(r"```([A-Za-z0-9_+\-]*)[ \t]*\r?\n((?s:.*?))```").unwrap()
}

/// Extracts the code half of an AI message: the concatenation of all fenced
/// code block bodies whose language tag matches the file type (untagged
/// fences always match), trimmed and joined with a blank line between them.
#[must_use]
pub fn extract_code(markdown: &str, file_type: FileType) -> String {
    let mut parts: Vec<&str> = Vec::new();
    for caps in fence_re().captures_iter(markdown) {
        let tag = caps.get(1).map_or("", |m| m.as_str()).to_lowercase();
        if tag.is_empty() || file_type.fence_tags().contains(&tag.as_str()) {
            if let Some(body) = caps.get(2) {
                parts.push(body.as_str().trim());
            }
        }
    }
    parts.join("\n\n")
}

/// Extracts the prose half of an AI message: the markdown with every fenced
/// code block removed, trimmed.
#[must_use]
pub fn extract_prose(markdown: &str) -> String {
    let re = Regex::new(r"```(?s:.*?)```").unwrap();
    re.replace_all(markdown, "").trim().to_string()
}
