// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Performance baseline measurement for the highlighter.
//!
//! Documents are bucketed by line count; the report shows per-bucket timings,
//! throughput and the service's cache hit ratio.

use std::collections::BTreeMap;
use std::time::{Duration, Instant};

use crate::syntax::highlighter::SourceDocument;
use crate::syntax::service::HighlightingService;

/// Average per-document budget for short and medium documents.
pub const DOCUMENT_BUDGET: Duration = Duration::from_millis(50);

/// Document size categories for performance measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DocumentSizeCategory {
    /// Under 40 lines, a typical slide
    Short,
    /// 40 - 199 lines
    Medium,
    /// 200 - 999 lines
    Long,
    /// 1000 lines and more
    ExtraLong,
}

impl DocumentSizeCategory {
    pub fn from_line_count(lines: usize) -> Self {
        match lines {
            0..=39 => DocumentSizeCategory::Short,
            40..=199 => DocumentSizeCategory::Medium,
            200..=999 => DocumentSizeCategory::Long,
            _ => DocumentSizeCategory::ExtraLong,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            DocumentSizeCategory::Short => "Short (< 40 lines)",
            DocumentSizeCategory::Medium => "Medium (40-200 lines)",
            DocumentSizeCategory::Long => "Long (200-1000 lines)",
            DocumentSizeCategory::ExtraLong => "Extra Long (> 1000 lines)",
        }
    }
}

/// Timings gathered during a baseline run.
#[derive(Debug, Clone, Default)]
pub struct PerformanceBaseline {
    pub times_by_size: BTreeMap<DocumentSizeCategory, Vec<Duration>>,
    pub bytes_highlighted: usize,
    pub total_time: Duration,
    pub cache_hit_ratio: f64,
    pub operations_performed: usize,
}

impl PerformanceBaseline {
    /// Average time per document in each size category.
    pub fn avg_times(&self) -> BTreeMap<DocumentSizeCategory, Duration> {
        self.times_by_size
            .iter()
            .filter(|(_, times)| !times.is_empty())
            .map(|(&category, times)| (category, average(times)))
            .collect()
    }

    /// Source bytes highlighted per second.
    pub fn throughput(&self) -> f64 {
        let secs = self.total_time.as_secs_f64();
        if secs > 0.0 {
            self.bytes_highlighted as f64 / secs
        } else {
            0.0
        }
    }
}

fn average(times: &[Duration]) -> Duration {
    let count = u32::try_from(times.len()).unwrap_or(u32::MAX).max(1);
    times.iter().sum::<Duration>() / count
}

/// Collects highlight timings into a [`PerformanceBaseline`].
#[derive(Debug, Default)]
pub struct PerformanceMeasurement {
    baseline: PerformanceBaseline,
    measurement_start: Option<Instant>,
}

impl PerformanceMeasurement {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start_measurement(&mut self) {
        self.measurement_start = Some(Instant::now());
    }

    /// Time since [`start_measurement`](Self::start_measurement).
    pub fn elapsed(&self) -> Duration {
        self.measurement_start.map_or(Duration::ZERO, |start| start.elapsed())
    }

    /// Records one highlighted document.
    pub fn record_highlight(&mut self, line_count: usize, bytes: usize, duration: Duration) {
        let category = DocumentSizeCategory::from_line_count(line_count);
        self.baseline.times_by_size.entry(category).or_default().push(duration);
        self.baseline.bytes_highlighted += bytes;
        self.baseline.total_time += duration;
        self.baseline.operations_performed += 1;
    }

    pub fn record_cache_performance(&mut self, hits: usize, misses: usize) {
        let total = hits + misses;
        if total > 0 {
            self.baseline.cache_hit_ratio = hits as f64 / total as f64;
        }
    }

    pub fn baseline(&self) -> &PerformanceBaseline {
        &self.baseline
    }

    pub fn generate_report(&self) -> String {
        let mut report = String::new();

        report.push_str("=== Highlighter Performance Report ===\n\n");
        report.push_str("Highlighting Performance:\n");
        for (category, times) in &self.baseline.times_by_size {
            if times.is_empty() {
                continue;
            }
            let max = times.iter().max().copied().unwrap_or(Duration::ZERO);
            report.push_str(&format!(
                "  {}: {} documents, avg {}us, max {}us\n",
                category.name(),
                times.len(),
                average(times).as_micros(),
                max.as_micros()
            ));
        }
        report.push_str(&format!("  Documents: {}\n", self.baseline.operations_performed));
        report.push_str(&format!(
            "  Throughput: {:.0} bytes/sec\n",
            self.baseline.throughput()
        ));
        report.push_str(&format!(
            "  Cache Hit Ratio: {:.1}%\n",
            self.baseline.cache_hit_ratio * 100.0
        ));

        report.push_str("\n=== End Report ===\n");
        report
    }

    /// Checks the per-document budget for short and medium documents.
    pub fn meets_requirements(&self) -> (bool, Vec<String>) {
        let issues: Vec<String> = self
            .baseline
            .avg_times()
            .into_iter()
            .filter(|(category, _)| {
                matches!(category, DocumentSizeCategory::Short | DocumentSizeCategory::Medium)
            })
            .filter(|(_, avg)| *avg > DOCUMENT_BUDGET)
            .map(|(category, avg)| {
                format!(
                    "Highlighting {} exceeds {}ms budget: {}ms",
                    category.name(),
                    DOCUMENT_BUDGET.as_millis(),
                    avg.as_millis()
                )
            })
            .collect();

        (issues.is_empty(), issues)
    }
}

/// Highlights every document `rounds` times through one service and records
/// timings. Rounds after the first exercise the cache.
pub fn run_baseline_test(docs: &[SourceDocument], rounds: usize) -> PerformanceMeasurement {
    let mut measurement = PerformanceMeasurement::new();
    let mut service = HighlightingService::new();
    measurement.start_measurement();

    for _ in 0..rounds.max(1) {
        for doc in docs {
            let start = Instant::now();
            let result = service.highlight(doc);
            measurement.record_highlight(result.line_count, doc.text.len(), start.elapsed());
        }
    }

    let metrics = service.metrics();
    measurement.record_cache_performance(metrics.cache_hits, metrics.cache_misses);
    measurement
}
