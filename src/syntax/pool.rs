// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! A small worker pool for highlighting independent documents in parallel.
//!
//! Each worker pulls [`SourceDocument`]s off a shared job channel and answers
//! on the per-batch reply channel that came with the job.

use std::thread::{self, JoinHandle};

use crossbeam_channel::{Receiver, Sender, unbounded};
use tracing::debug;

use crate::error::{Error, Result};
use crate::syntax::highlighter::{HighlightResult, SourceDocument};

struct Job {
    index: usize,
    doc: SourceDocument,
    reply: Sender<(usize, HighlightResult)>,
}

/// Fixed-size pool of highlighting threads.
pub struct HighlightPool {
    jobs: Option<Sender<Job>>,
    workers: Vec<JoinHandle<()>>,
}

impl HighlightPool {
    /// Spawns `workers` threads (at least one).
    pub fn new(workers: usize) -> Self {
        let (jobs, queue) = unbounded::<Job>();
        let workers = (0..workers.max(1))
            .map(|id| {
                let queue = queue.clone();
                thread::spawn(move || worker_loop(id, queue))
            })
            .collect();

        Self {
            jobs: Some(jobs),
            workers,
        }
    }

    /// One worker per available CPU.
    pub fn with_available_parallelism() -> Self {
        Self::new(thread::available_parallelism().map_or(1, |n| n.get()))
    }

    pub fn worker_count(&self) -> usize {
        self.workers.len()
    }

    /// Highlights every document and returns the results in input order.
    pub fn highlight_all(&self, docs: Vec<SourceDocument>) -> Result<Vec<HighlightResult>> {
        let jobs = self.jobs.as_ref().ok_or(Error::WorkerDisconnected)?;
        let (reply, answers) = unbounded();
        let total = docs.len();

        for (index, doc) in docs.into_iter().enumerate() {
            jobs.send(Job {
                index,
                doc,
                reply: reply.clone(),
            })
            .map_err(|_| Error::WorkerDisconnected)?;
        }
        // Only the workers hold reply senders now, so `recv` fails instead of
        // hanging if they all go away.
        drop(reply);

        let mut results: Vec<Option<HighlightResult>> = vec![None; total];
        for _ in 0..total {
            let (index, result) = answers.recv().map_err(|_| Error::WorkerDisconnected)?;
            results[index] = Some(result);
        }

        results.into_iter().collect::<Option<Vec<_>>>().ok_or(Error::WorkerDisconnected)
    }
}

impl Drop for HighlightPool {
    fn drop(&mut self) {
        // Closing the job channel ends every worker loop.
        drop(self.jobs.take());
        for worker in self.workers.drain(..) {
            let _ = worker.join();
        }
    }
}

fn worker_loop(id: usize, queue: Receiver<Job>) {
    debug!(worker = id, "highlight worker started");
    for job in queue.iter() {
        let result = job.doc.highlight();
        if job.reply.send((job.index, result)).is_err() {
            debug!(worker = id, index = job.index, "batch abandoned before reply");
        }
    }
    debug!(worker = id, "highlight worker stopped");
}
