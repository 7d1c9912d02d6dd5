/// Coarse format tag driving parser selection and merge policy.
///
/// Derived from the filename extension only; the file need not exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    Typescript,
    Javascript,
    Yaml,
    Json,
    Python,
    Other,
}

impl FileType {
    /// Classifies a filename by the lower-cased substring after its last `.`.
    /// Unknown extensions (and extensionless names) degrade to `Other`;
    /// there is no error case.
    #[must_use]
    pub fn from_filename(filename: &str) -> Self {
        let ext = filename
            .rsplit('.')
            .next()
            .map(str::to_lowercase)
            .unwrap_or_default();
        match ext.as_str() {
            "ts" | "tsx" => FileType::Typescript,
            "js" | "jsx" => FileType::Javascript,
            "yml" | "yaml" => FileType::Yaml,
            "json" => FileType::Json,
            "py" => FileType::Python,
            _ => FileType::Other,
        }
    }

    /// Fence language tags accepted for this format when extracting code
    /// from markdown.
    #[must_use]
    pub fn fence_tags(&self) -> &'static [&'static str] {
        match self {
            FileType::Typescript => &["ts", "tsx", "typescript"],
            FileType::Javascript => &["js", "jsx", "javascript"],
            FileType::Yaml => &["yml", "yaml"],
            FileType::Json => &["json"],
            FileType::Python => &["py", "python"],
            FileType::Other => &[],
        }
    }

    /// True for the code-like formats that share the token-trigger parser
    /// and the insert-before-export policy.
    #[must_use]
    pub fn is_code_like(&self) -> bool {
        matches!(self, FileType::Typescript | FileType::Javascript)
    }
}
