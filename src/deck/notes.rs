// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Speaker notes shown on the flip card.

/// Splits notes into points: one per line, trimmed, blank lines dropped.
pub fn split_points(notes: &str) -> Vec<String> {
    notes
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_points() {
        assert_eq!(split_points("one\ntwo\r\n  three  "), ["one", "two", "three"]);
    }

    #[test]
    fn test_blank_lines_are_dropped() {
        assert_eq!(split_points("\n\n a \n\n"), ["a"]);
        assert!(split_points("  \n\r\n").is_empty());
        assert!(split_points("").is_empty());
    }
}
