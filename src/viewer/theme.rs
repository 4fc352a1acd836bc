// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Maps token categories to presentation styles.
//!
//! The highlighter only names categories. A [`Theme`] decides what each one
//! looks like and emits the stylesheet for the slide page. Themes are plain
//! JSON so a presenter can swap palettes without rebuilding.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::syntax::TokenCategory;

/// Visual style of one token category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenStyle {
    /// Any CSS color
    pub color: String,
    #[serde(default)]
    pub bold: bool,
    #[serde(default)]
    pub italic: bool,
}

impl TokenStyle {
    pub fn new(color: impl Into<String>) -> Self {
        Self {
            color: color.into(),
            bold: false,
            italic: false,
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    fn declarations(&self) -> String {
        let mut css = format!("color: {};", self.color);
        if self.bold {
            css.push_str(" font-weight: 600;");
        }
        if self.italic {
            css.push_str(" font-style: italic;");
        }
        css
    }
}

/// Palette for the code panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    pub background: String,
    pub foreground: String,
    pub gutter: String,
    #[serde(default)]
    pub tokens: BTreeMap<TokenCategory, TokenStyle>,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// The built-in dark palette.
    pub fn dark() -> Self {
        let tokens = BTreeMap::from([
            (TokenCategory::Comment, TokenStyle::new("#6a9955").italic()),
            (TokenCategory::String, TokenStyle::new("#ce9178")),
            (TokenCategory::Keyword, TokenStyle::new("#569cd6").bold()),
            (TokenCategory::Number, TokenStyle::new("#b5cea8")),
            (TokenCategory::FunctionName, TokenStyle::new("#dcdcaa")),
            (TokenCategory::TagName, TokenStyle::new("#4ec9b0")),
        ]);

        Self {
            name: "dark".to_string(),
            background: "#1e1e1e".to_string(),
            foreground: "#d4d4d4".to_string(),
            gutter: "#858585".to_string(),
            tokens,
        }
    }

    /// Reads a theme from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| Error::io(path, source))?;
        serde_json::from_str(&json).map_err(|source| Error::Theme {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn to_json(&self) -> String {
        // A map of strings and bools always serializes.
        serde_json::to_string_pretty(self).unwrap_or_default()
    }

    pub fn style(&self, category: TokenCategory) -> Option<&TokenStyle> {
        self.tokens.get(&category)
    }

    pub fn set_style(&mut self, category: TokenCategory, style: TokenStyle) {
        self.tokens.insert(category, style);
    }

    /// CSS for the code panel and one rule per styled category.
    pub fn stylesheet(&self) -> String {
        let mut css = String::new();
        css.push_str(&format!(
            ".code-panel {{ background: {}; color: {}; }}\n",
            self.background, self.foreground
        ));
        css.push_str(&format!(".code-gutter {{ color: {}; }}\n", self.gutter));
        for (category, style) in &self.tokens {
            if let Some(class) = category.class_name() {
                css.push_str(&format!(".{class} {{ {} }}\n", style.declarations()));
            }
        }
        css
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_styles() {
        let theme = Theme::default();
        assert_eq!(theme.name, "dark");
        for category in TokenCategory::MARKED {
            assert!(theme.style(category).is_some(), "{}", category.name());
        }
        assert!(theme.style(TokenCategory::Plain).is_none());
        assert!(theme.style(TokenCategory::Keyword).unwrap().bold);
    }

    #[test]
    fn test_stylesheet() {
        let mut theme = Theme::dark();
        theme.set_style(TokenCategory::Number, TokenStyle::new("red").bold());

        let css = theme.stylesheet();
        assert!(css.contains(".tok-num { color: red; font-weight: 600; }"));
        assert!(css.contains(".tok-comment { color: #6a9955; font-style: italic; }"));
        assert!(css.contains(".code-gutter { color: #858585; }"));
    }

    #[test]
    fn test_plain_style_emits_no_rule() {
        let mut theme = Theme::dark();
        theme.set_style(TokenCategory::Plain, TokenStyle::new("white"));
        assert!(!theme.stylesheet().contains("white"));
    }

    #[test]
    fn test_json_round_trip() {
        let theme = Theme::dark();
        let json = theme.to_json();
        assert!(json.contains("\"function-name\""));

        let parsed: Theme = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, theme);
    }

    #[test]
    fn test_partial_theme_json() {
        let json = r#"{
            "name": "paper",
            "background": "white",
            "foreground": "black",
            "gutter": "gray",
            "tokens": { "keyword": { "color": "navy" } }
        }"#;
        let theme: Theme = serde_json::from_str(json).unwrap();
        assert_eq!(theme.style(TokenCategory::Keyword), Some(&TokenStyle::new("navy")));
        assert!(theme.style(TokenCategory::String).is_none());
    }

    #[test]
    fn test_load_missing_file() {
        let err = Theme::load("/nonexistent/theme.json").unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }
}
