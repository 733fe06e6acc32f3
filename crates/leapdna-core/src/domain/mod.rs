//! Domain layer - Pure computational logic
//!
//! This module contains pure functions and algorithms without I/O dependencies.

pub mod leap;
pub mod nucleotide;
pub mod transcription;
