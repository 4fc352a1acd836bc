// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Error type shared by the deck, viewer and command-line front end.
//!
//! The highlighter itself is total and never returns one of these.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised around the highlighter: lookups, files and workers.
#[derive(Debug, Error)]
pub enum Error {
    #[error("unknown demo: {0:?}")]
    UnknownDemo(String),

    #[error("unknown language tag: {0:?} (expected tsx, ts, js, jsx, css or txt)")]
    UnknownLanguage(String),

    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid theme {}: {source}", path.display())]
    Theme {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("highlight worker disconnected before answering")]
    WorkerDisconnected,
}

impl Error {
    /// Wraps an I/O error with the path it happened on.
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
