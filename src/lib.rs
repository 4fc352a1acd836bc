// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! A slide deck of stale-closure demos.
//!
//! Each slide pairs a small demo snippet with a syntax-highlighted view of its
//! source. The interesting part lives in [`syntax`]: a lightweight regex-pass
//! highlighter that wraps comments, strings, keywords, numbers, function names
//! and tag names in `<span class="tok-…">` markers. [`deck`] holds the static
//! catalog of slides and [`viewer`] turns both into HTML.

pub mod deck;
pub mod error;
pub mod logging;
pub mod syntax;
pub mod viewer;

pub use error::{Error, Result};
pub use syntax::{HighlightResult, Language, SourceDocument, highlight};
