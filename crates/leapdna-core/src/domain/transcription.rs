//! DNA to RNA transcription
//!
//! Transcription substitutes every base of a DNA strand with its RNA
//! complement. Position and length are preserved; only the alphabet changes.

use crate::domain::nucleotide::DnaBase;
use thiserror::Error;

/// Transcription errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TranscriptionError {
    /// A single-nucleotide token did not contain exactly one character
    #[error("Invalid nucleotide length: expected a single nucleotide, got {length} characters")]
    InvalidLength { length: usize },
    /// Character outside the DNA alphabet
    #[error("Invalid nucleotide '{nucleotide}' at position {position}")]
    InvalidNucleotide { nucleotide: char, position: usize },
}

/// Stateless DNA to RNA transcriptor
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Transcriptor;

impl Transcriptor {
    pub const fn new() -> Self {
        Self
    }

    /// Transcribe a whole strand
    ///
    /// Fails on the first character outside the DNA alphabet; no partial
    /// output is returned.
    pub fn to_rna(&self, sequence: &str) -> Result<String, TranscriptionError> {
        let mut rna = String::with_capacity(sequence.len());
        for (position, c) in sequence.chars().enumerate() {
            rna.push(self.transcribe_char(c, position)?);
        }
        Ok(rna)
    }

    /// Transcribe a token holding exactly one nucleotide
    pub fn to_rna_single(&self, nucleotide: &str) -> Result<char, TranscriptionError> {
        let mut chars = nucleotide.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => self.transcribe_char(c, 0),
            _ => Err(TranscriptionError::InvalidLength {
                length: nucleotide.chars().count(),
            }),
        }
    }

    /// Transcribe ASCII bytes into a byte buffer
    ///
    /// Every byte before the first invalid one is an ASCII base, so the
    /// reported position is both a byte and a char index. A non-ASCII
    /// offender is decoded as UTF-8 (U+FFFD when the bytes are malformed).
    pub fn to_rna_bytes(&self, sequence: &[u8]) -> Result<Vec<u8>, TranscriptionError> {
        let mut rna = Vec::with_capacity(sequence.len());
        for (position, &byte) in sequence.iter().enumerate() {
            match DnaBase::from_ascii(byte) {
                Some(base) => rna.push(base.transcribe().to_ascii()),
                None => {
                    return Err(TranscriptionError::InvalidNucleotide {
                        nucleotide: decode_offender(&sequence[position..]),
                        position,
                    });
                }
            }
        }
        Ok(rna)
    }

    #[inline]
    fn transcribe_char(&self, c: char, position: usize) -> Result<char, TranscriptionError> {
        DnaBase::from_char(c)
            .map(|base| base.transcribe().to_char())
            .ok_or(TranscriptionError::InvalidNucleotide {
                nucleotide: c,
                position,
            })
    }
}

fn decode_offender(bytes: &[u8]) -> char {
    let width = bytes.len().min(4);
    let prefix = match std::str::from_utf8(&bytes[..width]) {
        Ok(s) => s,
        Err(e) => {
            // valid_up_to() is 0 when the offender itself is malformed
            std::str::from_utf8(&bytes[..e.valid_up_to()]).unwrap_or_default()
        }
    };
    prefix.chars().next().unwrap_or(char::REPLACEMENT_CHARACTER)
}

/// Transcribe a DNA strand with the default transcriptor
pub fn transcribe(sequence: &str) -> Result<String, TranscriptionError> {
    Transcriptor::new().to_rna(sequence)
}
