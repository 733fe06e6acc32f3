//! leapdna-core - Leap-year predicates and DNA to RNA transcription
//!
//! This crate provides functionality to:
//! - Decide whether a Gregorian year is a leap year (several equivalent variants)
//! - Transcribe DNA strands into their complementary RNA strands
//! - Read and write sequence files for batch transcription

pub mod app;
pub mod constants;
pub mod domain;
pub mod infra;

// Re-export commonly used types
pub use constants::*;
pub use domain::leap::{LeapVariant, days_in_year, is_leap_year};
pub use domain::nucleotide::{DnaBase, RnaBase};
pub use domain::transcription::{TranscriptionError, Transcriptor, transcribe};

#[cfg(feature = "mmap")]
pub use infra::sequence_io::MappedSequence;
