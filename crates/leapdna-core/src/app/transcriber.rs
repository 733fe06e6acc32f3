//! Batch transcription workflow
//!
//! This module transcribes collections of strands, sequentially or with rayon.

use crate::domain::transcription::{TranscriptionError, Transcriptor};
use rayon::prelude::*;
use thiserror::Error;

/// Failure while transcribing a batch of records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Record {index}: {source}")]
pub struct BatchError {
    /// Index of the failing record in the batch
    pub index: usize,
    #[source]
    pub source: TranscriptionError,
}

/// Transcribe every record, stopping at the first invalid one
pub fn transcribe_batch<S: AsRef<str>>(records: &[S]) -> Result<Vec<String>, BatchError> {
    let transcriptor = Transcriptor::new();

    records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            transcriptor
                .to_rna(record.as_ref())
                .map_err(|source| BatchError { index, source })
        })
        .collect()
}

/// Transcribe every record in parallel
///
/// Each record gets its own result; output order matches input order.
pub fn transcribe_batch_parallel<S>(records: &[S]) -> Vec<Result<String, TranscriptionError>>
where
    S: AsRef<str> + Sync,
{
    let transcriptor = Transcriptor::new();

    records
        .par_iter()
        .map(|record| transcriptor.to_rna(record.as_ref()))
        .collect()
}
