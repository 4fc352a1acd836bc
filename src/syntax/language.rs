// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Language tags and file-extension detection.
//!
//! The highlighter only distinguishes two paths: the TypeScript/JavaScript
//! family gets token classification, everything else is escaped only.

use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use once_cell::sync::Lazy;

use crate::error::Error;

/// Source languages a code panel can declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    /// TypeScript with JSX
    #[default]
    Tsx,
    /// TypeScript
    Ts,
    /// JavaScript
    Js,
    /// JavaScript with JSX
    Jsx,
    /// CSS stylesheet (escaped only)
    Css,
    /// Plain text (escaped only)
    Text,
}

impl Language {
    pub const ALL: [Language; 6] = [
        Language::Tsx,
        Language::Ts,
        Language::Js,
        Language::Jsx,
        Language::Css,
        Language::Text,
    ];

    /// Returns the tag used in code panels (`tsx`, `css`, `txt`, ...).
    pub fn tag(self) -> &'static str {
        match self {
            Language::Tsx => "tsx",
            Language::Ts => "ts",
            Language::Js => "js",
            Language::Jsx => "jsx",
            Language::Css => "css",
            Language::Text => "txt",
        }
    }

    /// Returns the display name of the language.
    pub fn display_name(self) -> &'static str {
        match self {
            Language::Tsx => "TypeScript JSX",
            Language::Ts => "TypeScript",
            Language::Js => "JavaScript",
            Language::Jsx => "JavaScript JSX",
            Language::Css => "CSS",
            Language::Text => "Plain Text",
        }
    }

    /// Whether the token-classifying passes run for this language.
    pub fn is_script_like(self) -> bool {
        matches!(self, Language::Tsx | Language::Ts | Language::Js | Language::Jsx)
    }

    /// Lenient tag lookup: anything unrecognized falls back to [`Language::Text`].
    pub fn from_tag(tag: &str) -> Self {
        tag.parse().unwrap_or(Language::Text)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tsx" => Ok(Language::Tsx),
            "ts" => Ok(Language::Ts),
            "js" => Ok(Language::Js),
            "jsx" => Ok(Language::Jsx),
            "css" => Ok(Language::Css),
            "txt" | "text" => Ok(Language::Text),
            _ => Err(Error::UnknownLanguage(s.to_string())),
        }
    }
}

static EXTENSION_MAP: Lazy<HashMap<&'static str, Language>> = Lazy::new(|| {
    let mut map = HashMap::new();

    map.insert("tsx", Language::Tsx);
    map.insert("ts", Language::Ts);
    map.insert("mts", Language::Ts);
    map.insert("cts", Language::Ts);
    map.insert("js", Language::Js);
    map.insert("mjs", Language::Js);
    map.insert("cjs", Language::Js);
    map.insert("jsx", Language::Jsx);
    map.insert("css", Language::Css);
    map.insert("txt", Language::Text);
    map.insert("text", Language::Text);

    map
});

/// Identifies the language of a file from its extension.
#[derive(Debug, Default)]
pub struct LanguageDetector {
    /// Manual language overrides for specific files
    overrides: HashMap<String, Language>,
}

impl LanguageDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Detects the language of `path`.
    ///
    /// Manual overrides win, then the (case-insensitive) extension. Files
    /// without a known extension are treated as plain text.
    pub fn detect_language<P: AsRef<Path>>(&self, path: P) -> Language {
        let path = path.as_ref();
        let path_str = path.to_string_lossy();

        if let Some(&language) = self.overrides.get(path_str.as_ref()) {
            return language;
        }

        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| EXTENSION_MAP.get(ext.to_ascii_lowercase().as_str()).copied())
            .unwrap_or(Language::Text)
    }

    pub fn set_language_override<P: AsRef<Path>>(&mut self, path: P, language: Language) {
        let path_str = path.as_ref().to_string_lossy().into_owned();
        self.overrides.insert(path_str, language);
    }

    /// Removes an override, returning the language it pointed at.
    pub fn remove_language_override<P: AsRef<Path>>(&mut self, path: P) -> Option<Language> {
        let path_str = path.as_ref().to_string_lossy();
        self.overrides.remove(path_str.as_ref())
    }

    /// Returns all file extensions (without the dot) that map to `language`.
    pub fn extensions_for_language(language: Language) -> Vec<&'static str> {
        let mut extensions: Vec<&'static str> = EXTENSION_MAP
            .iter()
            .filter_map(|(&ext, &lang)| (lang == language).then_some(ext))
            .collect();
        extensions.sort_unstable();
        extensions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_parsing() {
        assert_eq!("tsx".parse::<Language>().unwrap(), Language::Tsx);
        assert_eq!("TS".parse::<Language>().unwrap(), Language::Ts);
        assert_eq!(" jsx ".parse::<Language>().unwrap(), Language::Jsx);
        assert_eq!("text".parse::<Language>().unwrap(), Language::Text);
        assert!(matches!("rust".parse::<Language>(), Err(Error::UnknownLanguage(_))));
    }

    #[test]
    fn test_from_tag_falls_back_to_text() {
        assert_eq!(Language::from_tag("css"), Language::Css);
        assert_eq!(Language::from_tag("python"), Language::Text);
        assert_eq!(Language::from_tag(""), Language::Text);
    }

    #[test]
    fn test_tag_round_trips_through_display() {
        for language in Language::ALL {
            assert_eq!(language.to_string().parse::<Language>().unwrap(), language);
        }
    }

    #[test]
    fn test_script_family() {
        assert!(Language::Tsx.is_script_like());
        assert!(Language::Js.is_script_like());
        assert!(!Language::Css.is_script_like());
        assert!(!Language::Text.is_script_like());
        assert_eq!(Language::default(), Language::Tsx);
    }

    #[test]
    fn test_language_detection() {
        let detector = LanguageDetector::new();

        assert_eq!(detector.detect_language("slides/counter.tsx"), Language::Tsx);
        assert_eq!(detector.detect_language("App.TS"), Language::Ts);
        assert_eq!(detector.detect_language("vite.config.mjs"), Language::Js);
        assert_eq!(detector.detect_language("App.css"), Language::Css);
        assert_eq!(detector.detect_language("Makefile"), Language::Text);
        assert_eq!(detector.detect_language("main.rs"), Language::Text);
    }

    #[test]
    fn test_language_overrides() {
        let mut detector = LanguageDetector::new();

        detector.set_language_override("snippet", Language::Jsx);
        assert_eq!(detector.detect_language("snippet"), Language::Jsx);

        assert_eq!(detector.remove_language_override("snippet"), Some(Language::Jsx));
        assert_eq!(detector.detect_language("snippet"), Language::Text);
    }

    #[test]
    fn test_extensions_for_language() {
        assert_eq!(LanguageDetector::extensions_for_language(Language::Js), ["cjs", "js", "mjs"]);
        assert_eq!(LanguageDetector::extensions_for_language(Language::Css), ["css"]);
    }
}
