// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! HTML output for slides: the code panel, the notes card and full pages.

pub mod page;
pub mod theme;

use crate::syntax::{HighlightResult, HighlightingService, Language, escape_html, highlight};

pub use page::{SlideOptions, render_slide, render_slide_highlighted, slide_file_name};
pub use theme::{Theme, TokenStyle};

/// Panel title when none is given.
pub const DEFAULT_TITLE: &str = "source.tsx";
/// Panel height when none is given.
pub const DEFAULT_HEIGHT: &str = "100%";

/// Display hints for one code panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeView {
    pub title: Option<String>,
    pub language: Language,
    pub code: String,
    pub height: Option<String>,
}

impl CodeView {
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            title: None,
            language: Language::default(),
            code: code.into(),
            height: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    pub fn with_height(mut self, height: impl Into<String>) -> Self {
        self.height = Some(height.into());
        self
    }

    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or(DEFAULT_TITLE)
    }

    pub fn height(&self) -> &str {
        self.height.as_deref().unwrap_or(DEFAULT_HEIGHT)
    }

    /// Highlights and renders the panel.
    pub fn render(&self) -> String {
        self.render_highlighted(&highlight(&self.code, self.language))
    }

    /// Renders through a service so unchanged code is not highlighted twice.
    pub fn render_with(&self, service: &mut HighlightingService) -> String {
        let result = service.highlight_text(&self.code, self.language);
        self.render_highlighted(&result)
    }

    /// Renders the panel around an already computed result.
    pub fn render_highlighted(&self, result: &HighlightResult) -> String {
        let mut html = String::with_capacity(result.marked_up_text.len() + 64 * result.line_count);

        html.push_str(&format!(
            "<div class=\"code-panel\" style=\"height: {}\">\n",
            escape_attr(self.height())
        ));
        html.push_str(r#"  <div class="code-header">"#);
        html.push_str(&format!(
            r#"<div class="code-title">{}</div>"#,
            escape_html(self.title())
        ));
        html.push_str("</div>\n");
        html.push_str("  <div class=\"code-body\">\n");
        html.push_str(r#"    <div class="code-gutter" aria-hidden="true">"#);
        for line in result.line_numbers() {
            html.push_str(&format!(r#"<div class="gutter-line">{line}</div>"#));
        }
        html.push_str("</div>\n");
        html.push_str(&format!(
            "    <pre class=\"code-content\"><code class=\"language-{}\">{}</code></pre>\n",
            self.language.tag(),
            result.marked_up_text
        ));
        html.push_str("  </div>\n</div>\n");
        html
    }
}

/// Renders the flip card for speaker notes, or nothing when there are none.
pub fn render_notes(points: &[String], flipped: bool) -> Option<String> {
    if points.is_empty() {
        return None;
    }

    let mut html = String::new();
    let card_class = if flipped { "flip-card flipped" } else { "flip-card" };
    html.push_str("<div class=\"slide-notes\" role=\"button\" aria-label=\"Notes card\">\n");
    html.push_str(&format!(
        "  <div class=\"{card_class}\"><div class=\"flip-card-inner\">\n"
    ));
    html.push_str(
        "    <div class=\"flip-card-front\"><div class=\"notes-front\"><div class=\"notes-badge\">Notes</div></div></div>\n",
    );
    html.push_str("    <div class=\"flip-card-back\"><div class=\"notes-back\">\n");
    html.push_str("      <div class=\"notes-title\">Notes</div>\n      <ul class=\"notes-list\">\n");
    for point in points {
        html.push_str(&format!(
            "        <li class=\"notes-item\">{}</li>\n",
            escape_html(point)
        ));
    }
    html.push_str("      </ul>\n      <div class=\"notes-footer\">Click anywhere to flip</div>\n");
    html.push_str("    </div></div>\n  </div></div>\n</div>\n");
    Some(html)
}

fn escape_attr(value: &str) -> String {
    escape_html(value).replace('"', "&quot;")
}
