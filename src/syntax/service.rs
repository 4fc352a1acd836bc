// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Memoizing front end for the highlighter.
//!
//! The highlighter is already pure, so caching never changes output. It only
//! saves recomputation when the same `(text, language)` pair is rendered
//! again, e.g. re-selecting a slide.

use std::collections::HashMap;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::sync::Arc;
use std::time::{Duration, Instant};

use tracing::debug;

use crate::syntax::escape::escape_html;
use crate::syntax::highlighter::{HighlightResult, SourceDocument, highlight, line_count};
use crate::syntax::language::Language;

/// Counters for highlighting requests.
#[derive(Debug, Clone, Default)]
pub struct HighlightingMetrics {
    /// Total time spent computing (cache misses only)
    pub total_time: Duration,
    /// Number of documents actually highlighted
    pub documents_highlighted: usize,
    /// Number of source bytes highlighted
    pub bytes_highlighted: usize,
    /// Maximum time for a single document
    pub max_document_time: Duration,
    pub cache_hits: usize,
    pub cache_misses: usize,
}

impl HighlightingMetrics {
    pub fn record_document(&mut self, duration: Duration, bytes: usize) {
        self.total_time += duration;
        self.documents_highlighted += 1;
        self.bytes_highlighted += bytes;
        self.max_document_time = self.max_document_time.max(duration);
    }

    /// Average time per computed document.
    pub fn avg_document_time(&self) -> Duration {
        match u32::try_from(self.documents_highlighted) {
            Ok(0) | Err(_) => Duration::ZERO,
            Ok(n) => self.total_time / n,
        }
    }

    /// Returns the cache hit ratio (0.0 to 1.0).
    pub fn cache_hit_ratio(&self) -> f64 {
        let total_requests = self.cache_hits + self.cache_misses;
        if total_requests == 0 {
            0.0
        } else {
            self.cache_hits as f64 / total_requests as f64
        }
    }

    pub fn reset(&mut self) {
        *self = Default::default();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct CacheKey {
    content_hash: u64,
    language: Language,
    classified: bool,
}

/// Highlights documents, reusing results for unchanged input.
#[derive(Debug)]
pub struct HighlightingService {
    cache: HashMap<CacheKey, Arc<HighlightResult>>,
    enabled: bool,
    metrics: HighlightingMetrics,
}

impl Default for HighlightingService {
    fn default() -> Self {
        Self::new()
    }
}

impl HighlightingService {
    pub fn new() -> Self {
        Self {
            cache: HashMap::new(),
            enabled: true,
            metrics: HighlightingMetrics::default(),
        }
    }

    /// Highlights `doc`, or returns the cached result for identical input.
    ///
    /// With highlighting disabled the text is only escaped; those results are
    /// cached under their own key.
    pub fn highlight(&mut self, doc: &SourceDocument) -> Arc<HighlightResult> {
        let key = CacheKey {
            content_hash: content_hash(&doc.text),
            language: doc.language,
            classified: self.enabled,
        };

        if let Some(result) = self.cache.get(&key) {
            self.metrics.cache_hits += 1;
            debug!(language = %doc.language, bytes = doc.text.len(), "highlight cache hit");
            return Arc::clone(result);
        }
        self.metrics.cache_misses += 1;

        let start_time = Instant::now();
        let result = if self.enabled {
            highlight(&doc.text, doc.language)
        } else {
            HighlightResult {
                marked_up_text: escape_html(&doc.text),
                line_count: line_count(&doc.text),
            }
        };
        let duration = start_time.elapsed();

        self.metrics.record_document(duration, doc.text.len());
        debug!(
            language = %doc.language,
            bytes = doc.text.len(),
            micros = duration.as_micros() as u64,
            "highlight cache miss"
        );

        let result = Arc::new(result);
        self.cache.insert(key, Arc::clone(&result));
        result
    }

    /// Convenience wrapper for borrowed text.
    pub fn highlight_text(&mut self, text: &str, language: Language) -> Arc<HighlightResult> {
        self.highlight(&SourceDocument::new(text, language))
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn metrics(&self) -> &HighlightingMetrics {
        &self.metrics
    }

    pub fn reset_metrics(&mut self) {
        self.metrics.reset();
    }

    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }
}

fn content_hash(text: &str) -> u64 {
    let mut hasher = DefaultHasher::new();
    text.hash(&mut hasher);
    hasher.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_highlighting_metrics() {
        let mut metrics = HighlightingMetrics::default();

        metrics.record_document(Duration::from_millis(10), 100);
        metrics.record_document(Duration::from_millis(20), 50);

        assert_eq!(metrics.documents_highlighted, 2);
        assert_eq!(metrics.bytes_highlighted, 150);
        assert_eq!(metrics.max_document_time, Duration::from_millis(20));
        assert_eq!(metrics.avg_document_time(), Duration::from_millis(15));

        metrics.cache_hits += 1;
        metrics.cache_misses += 1;
        assert_eq!(metrics.cache_hit_ratio(), 0.5);

        metrics.reset();
        assert_eq!(metrics.documents_highlighted, 0);
        assert_eq!(metrics.cache_hit_ratio(), 0.0);
    }

    #[test]
    fn test_caching_behavior() {
        let mut service = HighlightingService::new();

        let first = service.highlight_text("const a = 1;", Language::Tsx);
        assert_eq!(service.metrics().cache_misses, 1);
        assert_eq!(service.metrics().cache_hits, 0);

        let second = service.highlight_text("const a = 1;", Language::Tsx);
        assert_eq!(service.metrics().cache_misses, 1);
        assert_eq!(service.metrics().cache_hits, 1);
        assert!(Arc::ptr_eq(&first, &second));

        // Same text, different language is a different entry.
        service.highlight_text("const a = 1;", Language::Css);
        assert_eq!(service.metrics().cache_misses, 2);
        assert_eq!(service.cache_size(), 2);
    }

    #[test]
    fn test_cached_result_matches_direct_call() {
        let mut service = HighlightingService::new();
        let doc = SourceDocument::new("useState(0) // init", Language::Tsx);

        let cached = service.highlight(&doc);
        assert_eq!(*cached, highlight(&doc.text, doc.language));
    }

    #[test]
    fn test_disabled_service_escapes_only() {
        let mut service = HighlightingService::new();
        service.set_enabled(false);
        assert!(!service.is_enabled());

        let result = service.highlight_text("const x = <b/>;", Language::Tsx);
        assert_eq!(result.marked_up_text, "const x = &lt;b/&gt;;");

        service.set_enabled(true);
        let result = service.highlight_text("const x = <b/>;", Language::Tsx);
        assert!(result.marked_up_text.contains("tok-kw"));
        assert_eq!(service.metrics().cache_misses, 2);
    }

    #[test]
    fn test_clear_cache() {
        let mut service = HighlightingService::new();
        service.highlight_text("let x", Language::Js);
        service.clear_cache();
        assert_eq!(service.cache_size(), 0);

        service.highlight_text("let x", Language::Js);
        assert_eq!(service.metrics().cache_misses, 2);
    }
}
