// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! The regex-pass source highlighter.
//!
//! This is not a lexer. The input is entity-escaped once and then run through
//! a fixed, ordered list of substitution passes, each wrapping what it matches
//! in a `<span clazz="tok-…">` marker. Later passes see the markers left by
//! earlier ones and skip whatever sits inside a comment or string marker.
//! That is why the order matters, and why the markers use the
//! placeholder attribute `clazz` and category `tok-ztring` until the final
//! normalization pass: `class` and `string` are both keywords.
//!
//! Output is deterministic and the function is total. Odd input (unbalanced
//! quotes, unterminated comments) only ever degrades into over- or
//! under-highlighting.

use std::borrow::Cow;
use std::ops::{Range, RangeInclusive};

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};

use crate::syntax::escape::{MARKER_TAG, escape_html, to_plain_text};
use crate::syntax::language::Language;

/// Display category of a highlighted run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TokenCategory {
    Comment,
    String,
    Keyword,
    Number,
    FunctionName,
    TagName,
    /// Unclassified text. Never wrapped in a marker.
    Plain,
}

impl TokenCategory {
    pub const MARKED: [TokenCategory; 6] = [
        TokenCategory::Comment,
        TokenCategory::String,
        TokenCategory::Keyword,
        TokenCategory::Number,
        TokenCategory::FunctionName,
        TokenCategory::TagName,
    ];

    /// Human-readable category name.
    pub fn name(self) -> &'static str {
        match self {
            TokenCategory::Comment => "comment",
            TokenCategory::String => "string",
            TokenCategory::Keyword => "keyword",
            TokenCategory::Number => "number",
            TokenCategory::FunctionName => "function-name",
            TokenCategory::TagName => "tag-name",
            TokenCategory::Plain => "plain",
        }
    }

    /// CSS class carried by the final marker, `None` for plain text.
    pub fn class_name(self) -> Option<&'static str> {
        match self {
            TokenCategory::Comment => Some("tok-comment"),
            TokenCategory::String => Some("tok-string"),
            TokenCategory::Keyword => Some("tok-kw"),
            TokenCategory::Number => Some("tok-num"),
            TokenCategory::FunctionName => Some("tok-fn"),
            TokenCategory::TagName => Some("tok-jsx-tag"),
            TokenCategory::Plain => None,
        }
    }

    /// Looks a category up by its final CSS class.
    pub fn from_class_name(class: &str) -> Option<Self> {
        Self::MARKED.into_iter().find(|category| category.class_name() == Some(class))
    }

    /// Class used while passes are still running.
    fn placeholder_class(self) -> &'static str {
        match self {
            TokenCategory::String => PLACEHOLDER_STRING_CLASS,
            other => other.class_name().unwrap_or_default(),
        }
    }
}

/// Keyword vocabulary: JS/TS reserved words plus the framework names the
/// slides lean on.
pub const KEYWORDS: &[&str] = &[
    "const", "let", "var", "function", "return", "import", "from", "export", "default", "if",
    "else", "switch", "case", "break", "for", "while", "do", "new", "class", "extends", "super",
    "this", "try", "catch", "finally", "throw", "typeof", "instanceof", "in", "of", "as",
    "interface", "type", "implements", "public", "private", "protected", "readonly", "enum",
    "namespace", "module", "declare", "any", "never", "void", "unknown", "string", "number",
    "boolean", "React", "useState", "useMemo",
];

const PLACEHOLDER_ATTR: &str = "clazz";
const PLACEHOLDER_STRING_CLASS: &str = "tok-ztring";

static BLOCK_COMMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)/\*.*?\*/").unwrap());
// Runs to the end of the line, across whole block comment markers but never
// into half of one.
static LINE_COMMENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?m)(^|\s)(//(?:[^<\r\n]|<span clazz="tok-comment">[^<]*</span>)*)"#).unwrap()
});
static STRING: Lazy<Regex> = Lazy::new(|| Regex::new(r#""[^"]*"|'[^']*'|`[^`]*`"#).unwrap());
static KEYWORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!(r"\b(?:{})\b", KEYWORDS.join("|"))).unwrap());
static NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(?:0x[0-9a-fA-F]+|[0-9]+)n?\b").unwrap());
// The optional `</span>` lets a keyword-wrapped callee pick up a nested marker.
static FUNCTION_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b([A-Za-z_][A-Za-z0-9_]*)(</span>)?(\s*)\(").unwrap());
static TAG_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(&lt;/?)([A-Za-z][A-Za-z0-9_]*)").unwrap());
static PLACEHOLDER_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"<span clazz="([^"]*)">"#).unwrap());

/// One classification pass over already-escaped text.
#[derive(Clone, Copy)]
pub struct Pass {
    pub name: &'static str,
    pub category: TokenCategory,
    apply: fn(&str) -> Cow<'_, str>,
}

impl Pass {
    pub fn apply<'a>(&self, code: &'a str) -> Cow<'a, str> {
        (self.apply)(code)
    }
}

/// The classification passes in the order they run.
pub static PASSES: [Pass; 7] = [
    Pass { name: "block-comment", category: TokenCategory::Comment, apply: block_comments },
    Pass { name: "line-comment", category: TokenCategory::Comment, apply: line_comments },
    Pass { name: "string", category: TokenCategory::String, apply: strings },
    Pass { name: "keyword", category: TokenCategory::Keyword, apply: keywords },
    Pass { name: "number", category: TokenCategory::Number, apply: numbers },
    Pass { name: "function-name", category: TokenCategory::FunctionName, apply: function_names },
    Pass { name: "tag-name", category: TokenCategory::TagName, apply: tag_names },
];

fn wrap(category: TokenCategory, text: &str) -> String {
    format!(
        r#"<span {PLACEHOLDER_ATTR}="{}">{text}</span>"#,
        category.placeholder_class()
    )
}

/// Byte ranges of comment and string markers, tags included. Later passes
/// leave these ranges as they are.
fn opaque_ranges(code: &str) -> Vec<Range<usize>> {
    let mut ranges = Vec::new();
    let mut open = Vec::new();
    let mut depth = 0;
    let mut start = 0;

    for tag in MARKER_TAG.find_iter(code) {
        if tag.as_str() == "</span>" {
            if open.pop() == Some(true) {
                depth -= 1;
                if depth == 0 {
                    ranges.push(start..tag.end());
                }
            }
            continue;
        }

        let opaque = is_opaque_marker(tag.as_str());
        if opaque {
            if depth == 0 {
                start = tag.start();
            }
            depth += 1;
        }
        open.push(opaque);
    }

    if depth > 0 {
        ranges.push(start..code.len());
    }
    ranges
}

fn is_opaque_marker(tag: &str) -> bool {
    let class = tag
        .strip_prefix(r#"<span clazz=""#)
        .and_then(|rest| rest.strip_suffix(r#"">"#));
    matches!(class, Some("tok-comment" | PLACEHOLDER_STRING_CLASS))
}

fn in_ranges(ranges: &[Range<usize>], pos: usize) -> bool {
    let i = ranges.partition_point(|range| range.end <= pos);
    ranges.get(i).is_some_and(|range| range.contains(&pos))
}

/// Replaces the matches of `re` that start outside comment and string markers.
fn replace_outside<'a>(
    code: &'a str,
    re: &Regex,
    wrap_match: impl Fn(&Captures) -> String,
) -> Cow<'a, str> {
    if !re.is_match(code) {
        return Cow::Borrowed(code);
    }

    let opaque = opaque_ranges(code);
    re.replace_all(code, |caps: &Captures| {
        let start = caps.get(0).map_or(0, |m| m.start());
        if in_ranges(&opaque, start) {
            caps[0].to_string()
        } else {
            wrap_match(caps)
        }
    })
}

fn block_comments(code: &str) -> Cow<'_, str> {
    BLOCK_COMMENT.replace_all(code, |caps: &Captures| wrap(TokenCategory::Comment, &caps[0]))
}

fn line_comments(code: &str) -> Cow<'_, str> {
    replace_outside(code, &LINE_COMMENT, |caps| {
        format!("{}{}", &caps[1], wrap(TokenCategory::Comment, &caps[2]))
    })
}

/// Strings are matched only in the gaps between comment markers, so a quote
/// inside a comment never opens a string.
fn strings(code: &str) -> Cow<'_, str> {
    if !STRING.is_match(code) {
        return Cow::Borrowed(code);
    }

    let wrap_string = |caps: &Captures| wrap(TokenCategory::String, &caps[0]);
    let mut out = String::with_capacity(code.len() + code.len() / 4);
    let mut last = 0;
    for range in opaque_ranges(code) {
        out.push_str(&STRING.replace_all(&code[last..range.start], wrap_string));
        out.push_str(&code[range.clone()]);
        last = range.end;
    }
    out.push_str(&STRING.replace_all(&code[last..], wrap_string));
    Cow::Owned(out)
}

fn keywords(code: &str) -> Cow<'_, str> {
    replace_outside(code, &KEYWORD, |caps| wrap(TokenCategory::Keyword, &caps[0]))
}

fn numbers(code: &str) -> Cow<'_, str> {
    replace_outside(code, &NUMBER, |caps| wrap(TokenCategory::Number, &caps[0]))
}

fn function_names(code: &str) -> Cow<'_, str> {
    replace_outside(code, &FUNCTION_NAME, |caps| {
        format!(
            "{}{}{}(",
            wrap(TokenCategory::FunctionName, &caps[1]),
            caps.get(2).map_or("", |m| m.as_str()),
            &caps[3],
        )
    })
}

fn tag_names(code: &str) -> Cow<'_, str> {
    replace_outside(code, &TAG_NAME, |caps| {
        format!("{}{}", &caps[1], wrap(TokenCategory::TagName, &caps[2]))
    })
}

/// Rewrites placeholder markers into their final form. Only marker tags are
/// touched; source text that happens to read `clazz` stays as it is.
fn normalize_markers(code: &str) -> Cow<'_, str> {
    PLACEHOLDER_MARKER.replace_all(code, |caps: &Captures| {
        let class = match &caps[1] {
            PLACEHOLDER_STRING_CLASS => "tok-string",
            other => other,
        };
        format!(r#"<span class="{class}">"#)
    })
}

/// Runs the full classification pipeline over raw source text.
fn highlight_script(text: &str) -> String {
    let mut code = escape_html(text);
    for pass in &PASSES {
        let next = match pass.apply(&code) {
            Cow::Owned(next) => Some(next),
            Cow::Borrowed(_) => None,
        };
        if let Some(next) = next {
            code = next;
        }
    }
    normalize_markers(&code).into_owned()
}

/// Source text together with its declared language.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SourceDocument {
    pub text: String,
    pub language: Language,
}

impl SourceDocument {
    pub fn new(text: impl Into<String>, language: Language) -> Self {
        Self {
            text: text.into(),
            language,
        }
    }

    pub fn highlight(&self) -> HighlightResult {
        highlight(&self.text, self.language)
    }
}

/// Highlighted, HTML-safe text plus the number of gutter lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightResult {
    pub marked_up_text: String,
    pub line_count: usize,
}

impl HighlightResult {
    /// Gutter numbers, starting at 1.
    pub fn line_numbers(&self) -> RangeInclusive<usize> {
        1..=self.line_count
    }

    /// The source text this result was computed from.
    pub fn plain_text(&self) -> String {
        to_plain_text(&self.marked_up_text)
    }

    /// Number of markers of `category` in the output (nested ones included).
    pub fn marker_count(&self, category: TokenCategory) -> usize {
        match category.class_name() {
            Some(class) => self.marked_up_text.matches(&format!(r#"class="{class}""#)).count(),
            None => 0,
        }
    }
}

/// Counts lines the way the gutter does: newlines plus one.
pub fn line_count(text: &str) -> usize {
    text.bytes().filter(|&b| b == b'\n').count() + 1
}

/// Highlights `text` as `language`.
///
/// Script-like languages go through every pass; everything else is escaped
/// only.
pub fn highlight(text: &str, language: Language) -> HighlightResult {
    let marked_up_text = if language.is_script_like() {
        highlight_script(text)
    } else {
        escape_html(text)
    };

    HighlightResult {
        marked_up_text,
        line_count: line_count(text),
    }
}
