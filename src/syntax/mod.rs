// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Syntax highlighting for slide source panels.
//!
//! [`highlight`] is the pure entry point. [`HighlightingService`] memoizes it,
//! [`HighlightPool`] runs it on worker threads and [`performance`] measures it.

pub mod escape;
pub mod highlighter;
pub mod language;
pub mod performance;
pub mod pool;
pub mod service;

pub use escape::{escape_html, strip_markers, to_plain_text, unescape_html};
pub use highlighter::{
    HighlightResult, KEYWORDS, PASSES, Pass, SourceDocument, TokenCategory, highlight, line_count,
};
pub use language::{Language, LanguageDetector};
pub use performance::{
    DocumentSizeCategory, PerformanceBaseline, PerformanceMeasurement, run_baseline_test,
};
pub use pool::HighlightPool;
pub use service::{HighlightingMetrics, HighlightingService};
