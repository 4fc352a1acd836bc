// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Full slide pages: header, sidebar of every demo, notes card and code panel.

use crate::deck::{self, DemoEntry};
use crate::syntax::{HighlightResult, escape_html};
use crate::viewer::{CodeView, Theme, render_notes};

const PAGE_CSS: &str = "\
body { margin: 0; font-family: system-ui, sans-serif; display: flex; flex-direction: column; height: 100vh; }
.slide-header { display: flex; align-items: center; justify-content: space-between; padding: 0 2rem 0 1rem; }
.slide-title { margin: 0; font-size: 30px; }
.badge { background: #72ae72; padding: 8px 16px; border-radius: 8px; }
.slide-body { display: flex; flex: 1; min-height: 0; }
.sidebar { width: 400px; border-right: 1px solid #e5e7eb; padding: 16px; box-sizing: border-box; }
.demo-button { display: block; margin-bottom: 8px; padding: 10px 12px; border-radius: 8px; border: 1px solid #e5e7eb; color: #111827; text-decoration: none; }
.demo-button.active { border-color: #2563eb; background: #8da6bf; }
.main-split { display: flex; flex: 1; gap: 16px; padding: 16px; min-width: 0; }
.preview-pane, .code-pane { flex: 1; min-width: 0; }
.code-body { display: flex; overflow: auto; }
.code-gutter { text-align: right; padding: 0 8px; user-select: none; }
.code-content { margin: 0; }
.flip-card.flipped .flip-card-front { display: none; }
.flip-card:not(.flipped) .flip-card-back { display: none; }
";

/// Presentation switches for a single page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SlideOptions {
    /// Show the keyboard counter with `(count` frozen to `(0`
    pub const_mode: bool,
    /// Show the back of the notes card
    pub flipped: bool,
}

/// File name a pre-rendered slide is written to, e.g. `03-keyboard-counter-dependency.html`.
pub fn slide_file_name(index: usize, entry: &DemoEntry) -> String {
    format!("{:02}-{}.html", index + 1, entry.slug())
}

/// Renders a complete HTML page for `entry`.
pub fn render_slide(entry: &DemoEntry, options: &SlideOptions, theme: &Theme) -> String {
    let highlighted = entry.document(options.const_mode).highlight();
    render_slide_highlighted(entry, options, theme, &highlighted)
}

/// Same as [`render_slide`] around an already computed result, so a whole deck
/// can be highlighted in parallel first.
///
/// `highlighted` must come from `entry.source(options.const_mode)`.
pub fn render_slide_highlighted(
    entry: &DemoEntry,
    options: &SlideOptions,
    theme: &Theme,
    highlighted: &HighlightResult,
) -> String {
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str(&format!("<title>{}</title>\n", escape_html(entry.title)));
    html.push_str("<style>\n");
    html.push_str(PAGE_CSS);
    html.push_str(&theme.stylesheet());
    html.push_str("</style>\n</head>\n<body>\n");

    html.push_str("<div class=\"slide-header\">\n");
    html.push_str(&format!(
        "  <h2 class=\"slide-title\">{}</h2>\n",
        escape_html(entry.title)
    ));
    html.push_str("  <div class=\"badge\"><h4>You Can't Avoid Closure...</h4></div>\n</div>\n");

    html.push_str("<div class=\"slide-body\">\n<aside class=\"sidebar\">\n");
    html.push_str("  <div class=\"sidebar-title\">Components</div>\n");
    for (index, demo) in deck::catalog().iter().enumerate() {
        let class = if demo.label == entry.label {
            "demo-button active"
        } else {
            "demo-button"
        };
        html.push_str(&format!(
            "  <a class=\"{class}\" href=\"{}\">{}</a>\n",
            slide_file_name(index, demo),
            escape_html(demo.label)
        ));
    }
    if options.const_mode {
        html.push_str("  <div class=\"const-mode\">Const value: on</div>\n");
    }
    html.push_str("</aside>\n");

    html.push_str("<main class=\"main-split\">\n<div class=\"preview-pane\">\n");
    let points = entry.notes.map(deck::split_points).unwrap_or_default();
    if let Some(notes) = render_notes(&points, options.flipped) {
        html.push_str(&notes);
    }
    html.push_str("</div>\n<div class=\"code-pane\">\n");
    let view = CodeView::new(String::new()).with_title(entry.code_title());
    html.push_str(&view.render_highlighted(highlighted));
    html.push_str("</div>\n</main>\n</div>\n</body>\n</html>\n");

    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::{CONST_MODE_LABEL, find};

    fn render(label: &str, options: SlideOptions) -> String {
        render_slide(find(label).unwrap(), &options, &Theme::default())
    }

    #[test]
    fn test_precomputed_result_renders_the_same_page() {
        let entry = find(CONST_MODE_LABEL).unwrap();
        let options = SlideOptions {
            const_mode: true,
            ..SlideOptions::default()
        };
        let highlighted = entry.document(true).highlight();
        assert_eq!(
            render_slide_highlighted(entry, &options, &Theme::default(), &highlighted),
            render_slide(entry, &options, &Theme::default())
        );
    }

    #[test]
    fn test_slide_file_name() {
        let entry = find("Keyboard Counter Dependency").unwrap();
        assert_eq!(slide_file_name(2, entry), "03-keyboard-counter-dependency.html");
    }

    #[test]
    fn test_page_structure() {
        let html = render("Keyboard Counter Ref", SlideOptions::default());

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<h2 class=\"slide-title\">Solution 3 (of 4) - use ref</h2>"));
        assert!(html.contains("<div class=\"code-title\">Keyboard Counter Ref.tsx</div>"));
        assert_eq!(html.matches("class=\"demo-button").count(), deck::catalog().len());
        assert_eq!(html.matches("demo-button active").count(), 1);
        assert!(html.contains(".tok-kw {"));
        assert!(html.contains("<span class=\"tok-fn\">useRef</span>"));
    }

    #[test]
    fn test_slide_without_notes_has_no_card() {
        let html = render("Simple Button Counter", SlideOptions::default());
        assert!(!html.contains("slide-notes"));
    }

    #[test]
    fn test_flipped_notes() {
        let options = SlideOptions {
            flipped: true,
            ..SlideOptions::default()
        };
        let html = render("Simple Keyboard Counter", options);
        assert!(html.contains("flip-card flipped"));
        assert!(html.contains("It closes around the first instance of onKeyDown"));
    }

    #[test]
    fn test_const_mode_page() {
        let options = SlideOptions {
            const_mode: true,
            ..SlideOptions::default()
        };
        let html = render("Simple Keyboard Counter", options);
        assert!(html.contains("Const value: on"));
        assert!(html.contains("(<span class=\"tok-num\">0</span> + <span class=\"tok-num\">1</span>)"));
    }
}
