//! Sequence file round-trip tests

use leapdna_core::infra::sequence_io::{
    SequenceIoError, load_sequence, save_sequence, transcribe_file,
};
use leapdna_core::TranscriptionError;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_transcribe_fasta_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let input = temp_dir.path().join("gene.fa");
    let output = temp_dir.path().join("gene.rna");
    fs::write(&input, ">gene1 sample\nGCTAGCTA\nGGCC\n").unwrap();

    let count = transcribe_file(&input, &output, 5).unwrap();

    assert_eq!(count, 12);
    assert_eq!(fs::read_to_string(&output).unwrap(), "CGAUC\nGAUCC\nGG\n");
    assert_eq!(load_sequence(&output).unwrap(), "CGAUCGAUCCGG");
}

#[test]
fn test_save_then_load() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("seq.txt");
    let sequence = "ACGT".repeat(40);

    save_sequence(&path, &sequence, 60).unwrap();
    assert_eq!(load_sequence(&path).unwrap(), sequence);
}

#[test]
fn test_invalid_input_writes_nothing() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let input = temp_dir.path().join("bad.fa");
    let output = temp_dir.path().join("bad.rna");
    fs::write(&input, "ACGT\nACNT\n").unwrap();

    let result = transcribe_file(&input, &output, 60);

    assert!(matches!(
        result,
        Err(SequenceIoError::Transcription(TranscriptionError::InvalidNucleotide {
            nucleotide: 'N',
            position: 6
        }))
    ));
    assert!(!output.exists());
}

#[test]
fn test_missing_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let result = load_sequence(temp_dir.path().join("missing.fa"));
    assert!(matches!(result, Err(SequenceIoError::Io(_))));
}

const COMMENTED_FASTA: &str = "; comment line\n\n>gene1\nGCTA\n;trailing note\n>gene2 second\nAC GT\t\n";

#[test]
fn test_load_commented_multi_record_fasta() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("records.fa");
    fs::write(&path, COMMENTED_FASTA).unwrap();

    assert_eq!(load_sequence(&path).unwrap(), "GCTAACGT");
}

#[cfg(feature = "mmap")]
mod mmap {
    use super::*;
    use leapdna_core::MappedSequence;
    use leapdna_core::infra::sequence_io::load_sequence_mapped;

    #[test]
    fn test_mapped_loader_matches_buffered_loader() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("records.fa");
        fs::write(&path, COMMENTED_FASTA).unwrap();

        let buffered = load_sequence(&path).unwrap();
        let mapped = load_sequence_mapped(&path).unwrap();
        assert_eq!(mapped, buffered);
        assert_eq!(mapped, "GCTAACGT");
    }

    #[test]
    fn test_mapped_transcribe_skips_headers_and_whitespace() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("spaced.fa");
        fs::write(&path, ">gene\nGC TA\t\nAC\tGT \n").unwrap();

        let mapped = MappedSequence::open(&path).unwrap();
        assert_eq!(mapped.transcribe().unwrap(), b"CGAUUGCA");
    }

    #[test]
    fn test_mapped_transcribe_reports_base_position() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("bad.fa");
        fs::write(&path, ">gene\nACGT\nACNT\n").unwrap();

        let result = MappedSequence::open(&path).unwrap().transcribe();
        assert!(matches!(
            result,
            Err(SequenceIoError::Transcription(TranscriptionError::InvalidNucleotide {
                nucleotide: 'N',
                position: 6
            }))
        ));
    }

    #[test]
    fn test_mapped_sequence_transcribe() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("seq.txt");
        fs::write(&path, "GCTA\r\nACGT\n").unwrap();

        let mapped = MappedSequence::open(&path).unwrap();
        assert_eq!(mapped.len(), 11);
        assert_eq!(mapped.transcribe().unwrap(), b"CGAUUGCA");
    }

    #[test]
    fn test_mapped_empty_file() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("empty.txt");
        fs::write(&path, "").unwrap();

        let mapped = MappedSequence::open(&path).unwrap();
        assert!(mapped.is_empty());
        assert_eq!(mapped.transcribe().unwrap(), Vec::<u8>::new());
    }
}
