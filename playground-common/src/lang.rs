//! Languages the playground can parse
//!
//! The state record keeps `lang` as plain text so links carrying a tag this
//! build doesn't know still decode. [`Lang`] is the typed view used by the UI.

use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lang {
    JavaScript,
    TypeScript,
    // grammars with partial support
    Bash,
    C,
    CSharp,
    Cpp,
    Go,
    Html,
    Java,
    Php,
    Python,
    Ruby,
    Rust,
    Toml,
    Yaml,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Language {0} is not supported.")]
pub struct NotSupported(pub String);

impl Lang {
    /// Every supported language, in the order the language picker lists them
    pub const ALL: [Lang; 15] = [
        Lang::JavaScript,
        Lang::TypeScript,
        Lang::Bash,
        Lang::C,
        Lang::CSharp,
        Lang::Cpp,
        Lang::Go,
        Lang::Html,
        Lang::Java,
        Lang::Php,
        Lang::Python,
        Lang::Ruby,
        Lang::Rust,
        Lang::Toml,
        Lang::Yaml,
    ];

    /// Tag stored in the state record
    pub fn as_str(self) -> &'static str {
        match self {
            Lang::JavaScript => "javascript",
            Lang::TypeScript => "typescript",
            Lang::Bash => "bash",
            Lang::C => "c",
            Lang::CSharp => "csharp",
            Lang::Cpp => "cpp",
            Lang::Go => "go",
            Lang::Html => "html",
            Lang::Java => "java",
            Lang::Php => "php",
            Lang::Python => "python",
            Lang::Ruby => "ruby",
            Lang::Rust => "rust",
            Lang::Toml => "toml",
            Lang::Yaml => "yaml",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Lang::JavaScript => "JavaScript",
            Lang::TypeScript => "TypeScript",
            Lang::Bash => "Bash",
            Lang::C => "C",
            Lang::CSharp => "C#",
            Lang::Cpp => "C++",
            Lang::Go => "Go",
            Lang::Html => "HTML",
            Lang::Java => "Java",
            Lang::Php => "PHP",
            Lang::Python => "Python",
            Lang::Ruby => "Ruby",
            Lang::Rust => "Rust",
            Lang::Toml => "TOML",
            Lang::Yaml => "YAML",
        }
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Lang {
    type Err = NotSupported;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Lang::ALL
            .into_iter()
            .find(|lang| lang.as_str() == s)
            .ok_or_else(|| NotSupported(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_tag() {
        for lang in Lang::ALL {
            assert_eq!(lang.as_str().parse::<Lang>().unwrap(), lang);
        }
    }

    #[test]
    fn tags_are_case_sensitive() {
        assert_eq!(
            "JavaScript".parse::<Lang>(),
            Err(NotSupported("JavaScript".into()))
        );
    }

    #[test]
    fn not_supported_message() {
        let err = "cobol".parse::<Lang>().unwrap_err();
        assert_eq!(err.to_string(), "Language cobol is not supported.");
    }

    #[test]
    fn javascript_first() {
        assert_eq!(Lang::ALL[0], Lang::JavaScript);
        assert_eq!(Lang::ALL[1], Lang::TypeScript);
    }
}
