// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! The fixed, ordered list of demo slides.

use std::borrow::Cow;

use crate::error::{Error, Result};
use crate::syntax::{Language, SourceDocument};

/// Label of the slide whose code can be shown with the count frozen at zero.
pub const CONST_MODE_LABEL: &str = "Simple Keyboard Counter";

/// One slide of the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoEntry {
    /// Unique key, shown in the sidebar
    pub label: &'static str,
    /// Slide heading
    pub title: &'static str,
    /// Speaker notes, one point per line
    pub notes: Option<&'static str>,
    /// Demo source (tsx)
    pub code: &'static str,
}

impl DemoEntry {
    /// Title of the code panel, e.g. `Keyboard Counter Ref.tsx`.
    pub fn code_title(&self) -> String {
        format!("{}.tsx", self.label)
    }

    /// The source to display.
    ///
    /// In const mode the keyboard counter slide shows `(0` wherever it reads
    /// `(count`, making the captured value explicit. Other slides are unaffected.
    pub fn source(&self, const_mode: bool) -> Cow<'static, str> {
        if const_mode && self.label == CONST_MODE_LABEL {
            Cow::Owned(self.code.replace("(count", "(0"))
        } else {
            Cow::Borrowed(self.code)
        }
    }

    pub fn document(&self, const_mode: bool) -> SourceDocument {
        SourceDocument::new(self.source(const_mode), Language::Tsx)
    }

    /// File-name friendly form of the label.
    pub fn slug(&self) -> String {
        self.label
            .split_whitespace()
            .map(str::to_ascii_lowercase)
            .collect::<Vec<_>>()
            .join("-")
    }
}

static CATALOG: [DemoEntry; 8] = [
    DemoEntry {
        label: "Simple Button Counter",
        title: "Let's start with a simple example",
        notes: None,
        code: include_str!("../../slides/simple_button_counter.tsx"),
    },
    DemoEntry {
        label: "Simple Keyboard Counter",
        title: "A version that uses keyboard - we encounter a problem",
        notes: Some(
            "The first render registers the \"keydown\" event\n\
             It closes around the first instance of onKeyDown\n\
             When count changes, onKeyDown is rendered again, but handleKeyDown still calls the old value",
        ),
        code: include_str!("../../slides/simple_keyboard_counter.tsx"),
    },
    DemoEntry {
        label: "Keyboard Counter Dependency",
        title: "Solution 1 (of 4) - add a dependency",
        notes: Some(
            "We added a dependency on onKeyDown to ensure that the handleKeyDown function is always up-to-date.\n\
             Pro: it works\n\
             Con: we still have a warning\n\
             Con: the event is removed and added every render",
        ),
        code: include_str!("../../slides/keyboard_counter_dependency.tsx"),
    },
    DemoEntry {
        label: "Keyboard Counter Functional",
        title: "Solution 2 (of 4) - use a functional update",
        notes: Some(
            "Using the functional update is often the safer option (but might not be our \"to-go\" option)\n\
             Specific to our issue of \"useState\", wouldn't have worked with console.log\n\
             Unless we put the console.log inside the function",
        ),
        code: include_str!("../../slides/keyboard_counter_functional.tsx"),
    },
    DemoEntry {
        label: "Keyboard Counter Ref",
        title: "Solution 3 (of 4) - use ref",
        notes: Some(
            "This is the 'textbook' solution\n\
             Refs don't re-render, so we need another variable\n\
             We can't just init the ref variable everytime",
        ),
        code: include_str!("../../slides/keyboard_counter_ref.tsx"),
    },
    DemoEntry {
        label: "Keyboard Counter EffectEvent",
        title: "Solution 4 (of 4) - EXPERIMENTAL - useEffectEvent",
        notes: Some(
            "This is experimental (React 19.2 and newer)\n\
             Only use for non-reactive logic (that needs to see the latest value)\n\
             Values in it shouldn't appear in the dependency array",
        ),
        code: include_str!("../../slides/keyboard_counter_effect_event.tsx"),
    },
    DemoEntry {
        label: "Example With Server",
        title: "A more complex example - no warning in the IDE",
        notes: Some(
            "We call a mutation, with a progressHandler and errorHandler\n\
             We only update the progress if we're not in error\n\
             The mutation fails on odd runs\n\
             This fails, but there's NO WARNING like we had in the keyboard example",
        ),
        code: include_str!("../../slides/example_with_server.tsx"),
    },
    DemoEntry {
        label: "Example With Server Fixed",
        title: "A more complex example - fixed using ref",
        notes: None,
        code: include_str!("../../slides/example_with_server_fixed.tsx"),
    },
];

/// Every slide, in presentation order.
pub fn catalog() -> &'static [DemoEntry] {
    &CATALOG
}

/// The slide selected when nothing else is.
pub fn default_entry() -> &'static DemoEntry {
    &CATALOG[0]
}

/// Looks a slide up by its label.
pub fn find(label: &str) -> Result<&'static DemoEntry> {
    CATALOG
        .iter()
        .find(|entry| entry.label == label)
        .ok_or_else(|| Error::UnknownDemo(label.to_string()))
}

/// Position of a slide in the deck.
pub fn position(label: &str) -> Option<usize> {
    CATALOG.iter().position(|entry| entry.label == label)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_catalog_order() {
        let labels: Vec<_> = catalog().iter().map(|e| e.label).collect();
        assert_eq!(labels.len(), 8);
        assert_eq!(labels[0], "Simple Button Counter");
        assert_eq!(labels[7], "Example With Server Fixed");
        assert_eq!(default_entry().label, labels[0]);
    }

    #[test]
    fn test_labels_are_unique() {
        let labels: HashSet<_> = catalog().iter().map(|e| e.label).collect();
        assert_eq!(labels.len(), catalog().len());
    }

    #[test]
    fn test_every_slide_has_code() {
        for entry in catalog() {
            assert!(entry.code.contains("export const"), "{}", entry.label);
            assert!(!entry.code.ends_with('\n'), "{}", entry.label);
        }
    }

    #[test]
    fn test_find() {
        let entry = find("Keyboard Counter Ref").unwrap();
        assert_eq!(entry.title, "Solution 3 (of 4) - use ref");
        assert_eq!(position("Keyboard Counter Ref"), Some(4));

        assert!(matches!(find("keyboard counter ref"), Err(Error::UnknownDemo(_))));
        assert_eq!(position("missing"), None);
    }

    #[test]
    fn test_const_mode_only_touches_keyboard_counter() {
        let entry = find(CONST_MODE_LABEL).unwrap();
        let frozen = entry.source(true);
        assert!(frozen.contains("setCount(0 + 1)"));
        assert!(frozen.contains("setCount(0 - 1)"));
        assert!(!frozen.contains("(count"));
        assert_eq!(entry.source(false), entry.code);

        let other = find("Keyboard Counter Dependency").unwrap();
        assert!(matches!(other.source(true), Cow::Borrowed(_)));
    }

    #[test]
    fn test_code_title_and_slug() {
        let entry = find("Keyboard Counter EffectEvent").unwrap();
        assert_eq!(entry.code_title(), "Keyboard Counter EffectEvent.tsx");
        assert_eq!(entry.slug(), "keyboard-counter-effectevent");
    }

    #[test]
    fn test_document_is_tsx() {
        let doc = default_entry().document(false);
        assert_eq!(doc.language, Language::Tsx);
        assert_eq!(doc.text, default_entry().code);
    }
}
