use serde::{Deserialize, Serialize};

/// Language tags a review can be requested for.
///
/// `Auto` means the caller made no claim about the language; the
/// JavaScript-family heuristics stay active for it so that pasted
/// snippets of unknown origin still get the full analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Auto,
    JavaScript,
    TypeScript,
    Python,
    Java,
    CSharp,
    Go,
    Rust,
    Ruby,
    Php,
    C,
    Cpp,
    Sql,
    Shell,
    Html,
    Css,
    Json,
    Yaml,
    Markdown,
}

impl Language {
    pub fn all() -> &'static [Language] {
        &[
            Language::Auto,
            Language::JavaScript,
            Language::TypeScript,
            Language::Python,
            Language::Java,
            Language::CSharp,
            Language::Go,
            Language::Rust,
            Language::Ruby,
            Language::Php,
            Language::C,
            Language::Cpp,
            Language::Sql,
            Language::Shell,
            Language::Html,
            Language::Css,
            Language::Json,
            Language::Yaml,
            Language::Markdown,
        ]
    }

    /// The wire tag for this language (`"csharp"`, `"auto"`, ...).
    pub fn tag(&self) -> &'static str {
        match self {
            Language::Auto => "auto",
            Language::JavaScript => "javascript",
            Language::TypeScript => "typescript",
            Language::Python => "python",
            Language::Java => "java",
            Language::CSharp => "csharp",
            Language::Go => "go",
            Language::Rust => "rust",
            Language::Ruby => "ruby",
            Language::Php => "php",
            Language::C => "c",
            Language::Cpp => "cpp",
            Language::Sql => "sql",
            Language::Shell => "shell",
            Language::Html => "html",
            Language::Css => "css",
            Language::Json => "json",
            Language::Yaml => "yaml",
            Language::Markdown => "markdown",
        }
    }

    /// Human-readable label for UI/CLI listings.
    pub fn label(&self) -> &'static str {
        match self {
            Language::Auto => "Auto Detect",
            Language::JavaScript => "JavaScript",
            Language::TypeScript => "TypeScript",
            Language::Python => "Python",
            Language::Java => "Java",
            Language::CSharp => "C#",
            Language::Go => "Go",
            Language::Rust => "Rust",
            Language::Ruby => "Ruby",
            Language::Php => "PHP",
            Language::C => "C",
            Language::Cpp => "C++",
            Language::Sql => "SQL",
            Language::Shell => "Shell",
            Language::Html => "HTML",
            Language::Css => "CSS",
            Language::Json => "JSON",
            Language::Yaml => "YAML",
            Language::Markdown => "Markdown",
        }
    }

    /// Whether the JavaScript-family heuristics (debug statements, the
    /// type tracker) apply to this tag.
    pub fn is_js_family(&self) -> bool {
        matches!(
            self,
            Language::Auto | Language::JavaScript | Language::TypeScript
        )
    }

    pub fn is_python(&self) -> bool {
        matches!(self, Language::Python)
    }

    /// Map a file extension to a language tag.
    pub fn from_extension(ext: &str) -> Option<Language> {
        match ext {
            "js" | "jsx" | "mjs" => Some(Language::JavaScript),
            "ts" | "tsx" => Some(Language::TypeScript),
            "py" => Some(Language::Python),
            "java" => Some(Language::Java),
            "cs" => Some(Language::CSharp),
            "go" => Some(Language::Go),
            "rs" => Some(Language::Rust),
            "rb" => Some(Language::Ruby),
            "php" => Some(Language::Php),
            "c" | "h" => Some(Language::C),
            "cpp" | "cc" | "cxx" | "hpp" => Some(Language::Cpp),
            "sql" => Some(Language::Sql),
            "sh" | "bash" => Some(Language::Shell),
            "html" | "htm" => Some(Language::Html),
            "css" => Some(Language::Css),
            "json" => Some(Language::Json),
            "yaml" | "yml" => Some(Language::Yaml),
            "md" | "markdown" => Some(Language::Markdown),
            _ => None,
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

impl std::str::FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::all()
            .iter()
            .find(|l| l.tag() == s)
            .copied()
            .ok_or_else(|| format!("unknown language tag: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_round_trip() {
        for lang in Language::all() {
            assert_eq!(lang.tag().parse::<Language>().unwrap(), *lang);
        }
    }

    #[test]
    fn unknown_tag_is_rejected() {
        assert!("klingon".parse::<Language>().is_err());
    }

    #[test]
    fn extension_detection() {
        assert_eq!(Language::from_extension("ts"), Some(Language::TypeScript));
        assert_eq!(Language::from_extension("py"), Some(Language::Python));
        assert_eq!(Language::from_extension("xyz"), None);
    }

    #[test]
    fn js_family_gating() {
        assert!(Language::Auto.is_js_family());
        assert!(Language::TypeScript.is_js_family());
        assert!(!Language::Python.is_js_family());
        assert!(!Language::Rust.is_js_family());
    }
}
