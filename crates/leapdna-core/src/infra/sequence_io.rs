//! Sequence file I/O operations
//!
//! This module reads and writes plain or FASTA-style sequence files.
//! Header (`>`) and comment (`;`) lines are skipped on read, and whitespace
//! inside sequence lines is ignored.

use crate::constants::{COMMENT_PREFIX, FASTA_HEADER_PREFIX};
use crate::domain::transcription::{TranscriptionError, Transcriptor};
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use thiserror::Error;

#[cfg(feature = "mmap")]
use memmap2::Mmap;

/// Sequence file errors
#[derive(Debug, Error)]
pub enum SequenceIoError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Transcription(#[from] TranscriptionError),
}

/// Load a sequence from file
///
/// All sequence lines are concatenated in file order.
pub fn load_sequence(path: impl AsRef<Path>) -> Result<String, SequenceIoError> {
    let reader = BufReader::new(File::open(path)?);
    read_sequence(reader)
}

/// Read a sequence from any buffered reader
pub fn read_sequence<R: BufRead>(reader: R) -> Result<String, SequenceIoError> {
    let mut sequence = String::new();

    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim_start();
        if trimmed.starts_with(FASTA_HEADER_PREFIX) || trimmed.starts_with(COMMENT_PREFIX) {
            continue;
        }
        sequence.extend(trimmed.chars().filter(|c| !c.is_whitespace()));
    }

    Ok(sequence)
}

/// Save a sequence to file
///
/// Lines are wrapped at `line_width` characters; `0` writes a single line.
pub fn save_sequence(
    path: impl AsRef<Path>,
    sequence: &str,
    line_width: usize,
) -> Result<(), SequenceIoError> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_sequence(&mut writer, sequence, line_width)?;
    writer.flush()?;
    Ok(())
}

/// Write a sequence wrapped at `line_width` characters
pub fn write_sequence<W: Write>(writer: &mut W, sequence: &str, line_width: usize) -> io::Result<()> {
    if sequence.is_empty() {
        return Ok(());
    }

    if line_width == 0 {
        return writeln!(writer, "{}", sequence);
    }

    let chars: Vec<char> = sequence.chars().collect();
    for line in chars.chunks(line_width) {
        let line: String = line.iter().collect();
        writeln!(writer, "{}", line)?;
    }

    Ok(())
}

/// Load a DNA sequence, transcribe it, and save the RNA sequence
///
/// Returns the number of transcribed bases. Nothing is written when the
/// input contains an invalid nucleotide.
pub fn transcribe_file(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    line_width: usize,
) -> Result<usize, SequenceIoError> {
    let dna = load_sequence(input)?;
    let rna = Transcriptor::new().to_rna(&dna)?;
    save_sequence(output, &rna, line_width)?;
    Ok(rna.chars().count())
}

// =============================================================================
// Memory-mapped sequence access (mmap feature)
// =============================================================================

/// Memory-mapped sequence file
///
/// Mapped bytes are parsed with the same rules as [`load_sequence`]:
/// header and comment lines are skipped and whitespace is ignored.
#[cfg(feature = "mmap")]
pub struct MappedSequence {
    mmap: Option<Mmap>,
}

#[cfg(feature = "mmap")]
impl MappedSequence {
    /// Open a sequence file as memory-mapped
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or mapped.
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        let file = File::open(path)?;
        // Mapping an empty file fails on some platforms
        if file.metadata()?.len() == 0 {
            return Ok(Self { mmap: None });
        }

        let mmap = unsafe { Mmap::map(&file)? };
        Ok(Self { mmap: Some(mmap) })
    }

    /// Raw mapped bytes
    pub fn as_bytes(&self) -> &[u8] {
        self.mmap.as_deref().unwrap_or(&[])
    }

    /// Byte length of the mapped file
    pub fn len(&self) -> usize {
        self.as_bytes().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Parse the mapped bytes into a sequence
    pub fn read_sequence(&self) -> Result<String, SequenceIoError> {
        read_sequence(self.as_bytes())
    }

    /// Transcribe the mapped sequence into RNA bytes
    ///
    /// Reported positions are base indices after headers, comments and
    /// whitespace are removed.
    pub fn transcribe(&self) -> Result<Vec<u8>, SequenceIoError> {
        let dna = self.read_sequence()?;
        Ok(Transcriptor::new().to_rna_bytes(dna.as_bytes())?)
    }
}

/// Load a sequence through a memory-mapped file
///
/// Returns the same sequence as [`load_sequence`] for any input.
#[cfg(feature = "mmap")]
pub fn load_sequence_mapped(path: impl AsRef<Path>) -> Result<String, SequenceIoError> {
    MappedSequence::open(path)?.read_sequence()
}
