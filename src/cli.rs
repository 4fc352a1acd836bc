// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Command-line arguments for the `closure-slides` binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use closure_slides::Language;

/// Stale-closure slide deck with a built-in source highlighter
#[derive(Parser, Debug)]
#[command(name = "closure-slides", version, about)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the demos in presentation order
    List,

    /// Render one slide as a standalone HTML page
    Show {
        /// Demo label (defaults to the first slide)
        label: Option<String>,

        /// Freeze `(count` to `(0` on the keyboard counter slide
        #[arg(long)]
        const_mode: bool,

        /// Show the back of the notes card
        #[arg(long)]
        flipped: bool,

        /// JSON theme file
        #[arg(long, value_name = "FILE")]
        theme: Option<PathBuf>,

        /// Write to FILE instead of stdout
        #[arg(short, long, value_name = "FILE")]
        out: Option<PathBuf>,
    },

    /// Highlight a source file and print the marked-up text
    Highlight {
        /// File to highlight
        file: PathBuf,

        /// Language tag (tsx, ts, js, jsx, css, txt); detected from the extension if omitted
        #[arg(short, long, value_name = "TAG")]
        language: Option<Language>,

        /// Strip the markers again and print the recovered source
        #[arg(long)]
        plain: bool,
    },

    /// Pre-render every slide into a directory
    Render {
        /// Output directory
        #[arg(short, long, value_name = "DIR")]
        out: PathBuf,

        /// Highlighting threads (defaults to available parallelism)
        #[arg(short, long, value_name = "N")]
        workers: Option<usize>,

        /// Also render the const-value variant of the keyboard counter
        #[arg(long)]
        const_mode: bool,

        /// JSON theme file
        #[arg(long, value_name = "FILE")]
        theme: Option<PathBuf>,
    },

    /// Print the default theme as JSON
    ExportTheme,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_show() {
        let args = CliArgs::parse_from(["closure-slides", "show", "Keyboard Counter Ref", "--flipped"]);
        match args.command {
            Command::Show {
                label,
                flipped,
                const_mode,
                ..
            } => {
                assert_eq!(label.as_deref(), Some("Keyboard Counter Ref"));
                assert!(flipped);
                assert!(!const_mode);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_highlight_language() {
        let args = CliArgs::parse_from(["closure-slides", "highlight", "a.txt", "-l", "jsx"]);
        assert!(matches!(
            args.command,
            Command::Highlight { language: Some(Language::Jsx), .. }
        ));

        let err = CliArgs::try_parse_from(["closure-slides", "highlight", "a.txt", "-l", "rust"]);
        assert!(err.is_err());
    }

    #[test]
    fn test_parse_render() {
        let args = CliArgs::parse_from(["closure-slides", "render", "--out", "site", "-w", "4"]);
        match args.command {
            Command::Render { out, workers, .. } => {
                assert_eq!(out, PathBuf::from("site"));
                assert_eq!(workers, Some(4));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
