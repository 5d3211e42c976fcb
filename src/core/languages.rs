//! File extension to language identifier mapping.

use std::path::Path;

pub struct LanguageEntry {
    pub id: &'static str,
    pub extensions: &'static [&'static str],
}

/// Identifier used when no entry matches
pub const PLAINTEXT: &str = "plaintext";

#[rustfmt::skip]
pub static LANGUAGES: &[LanguageEntry] = &[
    LanguageEntry { id: "rust", extensions: &["rs"] },
    LanguageEntry { id: "javascript", extensions: &["js", "mjs", "cjs"] },
    LanguageEntry { id: "javascriptreact", extensions: &["jsx"] },
    LanguageEntry { id: "typescript", extensions: &["ts", "mts", "cts"] },
    LanguageEntry { id: "typescriptreact", extensions: &["tsx"] },
    LanguageEntry { id: "python", extensions: &["py", "pyi"] },
    LanguageEntry { id: "go", extensions: &["go"] },
    LanguageEntry { id: "ruby", extensions: &["rb"] },
    LanguageEntry { id: "java", extensions: &["java"] },
    LanguageEntry { id: "c", extensions: &["c", "h"] },
    LanguageEntry { id: "cpp", extensions: &["cc", "cpp", "cxx", "hpp", "hh"] },
    LanguageEntry { id: "csharp", extensions: &["cs"] },
    LanguageEntry { id: "shellscript", extensions: &["sh", "bash", "zsh"] },
    LanguageEntry { id: "json", extensions: &["json"] },
    LanguageEntry { id: "toml", extensions: &["toml"] },
    LanguageEntry { id: "yaml", extensions: &["yaml", "yml"] },
    LanguageEntry { id: "markdown", extensions: &["md", "markdown"] },
    LanguageEntry { id: "html", extensions: &["html", "htm"] },
    LanguageEntry { id: "css", extensions: &["css"] },
    LanguageEntry { id: "sql", extensions: &["sql"] },
];

/// Language identifier for `path`, based on its extension
pub fn language_for_path(path: &Path) -> &'static str {
    let Some(ext) = path.extension().and_then(|ext| ext.to_str()) else {
        return PLAINTEXT;
    };
    let ext = ext.to_ascii_lowercase();

    LANGUAGES
        .iter()
        .find(|entry| entry.extensions.contains(&ext.as_str()))
        .map(|entry| entry.id)
        .unwrap_or(PLAINTEXT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_extensions() {
        assert_eq!(language_for_path(Path::new("src/main.rs")), "rust");
        assert_eq!(language_for_path(Path::new("app/view.tsx")), "typescriptreact");
        assert_eq!(language_for_path(Path::new("script.PY")), "python");
    }

    #[test]
    fn test_unknown_or_missing_extension() {
        assert_eq!(language_for_path(Path::new("Makefile")), PLAINTEXT);
        assert_eq!(language_for_path(Path::new("data.xyz")), PLAINTEXT);
    }
}
