//! Batch parsing across many replays
//!
//! Each replay is an independent single-threaded parse, so a batch is
//! embarrassingly parallel. Failures are isolated per replay: one broken
//! log never aborts the rest of the batch.

use rayon::prelude::*;
use tracing::warn;

use crate::ReplayError;
use crate::interpreter::parse_replay;
use crate::model::Replay;

/// Parse many raw battle logs in parallel.
///
/// Results keep the input order; each entry is the outcome for the log at
/// the same index.
pub fn parse_replays<S: AsRef<str> + Sync>(logs: &[S]) -> Vec<Result<Replay, ReplayError>> {
    logs.par_iter()
        .enumerate()
        .map(|(i, log)| {
            let result = parse_replay(log.as_ref());
            if let Err(e) = &result {
                warn!(replay = i, error = %e, "skipping unparsable replay");
            }
            result
        })
        .collect()
}
