// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Performance baseline for the highlighter.
//!
//! Highlights every slide of the deck, plus synthetic documents in each size
//! category, and prints the timing report.

use std::time::Instant;

use closure_slides::deck;
use closure_slides::logging;
use closure_slides::syntax::{Language, SourceDocument, run_baseline_test};

/// Number of passes over the corpus; later passes exercise the cache.
const ROUNDS: usize = 4;

fn main() {
    logging::init();

    println!("=== Highlighter Performance Baseline ===\n");

    let mut docs: Vec<SourceDocument> =
        deck::catalog().iter().map(|entry| entry.document(false)).collect();

    // Grow the longest slide into medium, long and extra long documents.
    let largest = deck::catalog()
        .iter()
        .max_by_key(|entry| entry.code.len())
        .map_or("", |entry| entry.code);
    for copies in [3, 12, 60] {
        docs.push(SourceDocument::new(
            vec![largest; copies].join("\n"),
            Language::Tsx,
        ));
    }
    docs.push(SourceDocument::new("a { color: red; }\n".repeat(500), Language::Css));

    println!("Running {} documents x {ROUNDS} rounds...\n", docs.len());

    let start_time = Instant::now();
    let measurement = run_baseline_test(&docs, ROUNDS);
    let total_time = start_time.elapsed();

    println!("Baseline completed in {:.2}s\n", total_time.as_secs_f64());
    println!("{}", measurement.generate_report());

    let (meets_requirements, issues) = measurement.meets_requirements();
    if meets_requirements {
        println!("All performance requirements met.");
    } else {
        println!("Performance issues detected:");
        for issue in &issues {
            println!("  - {issue}");
        }
    }
}
