//! DNA to RNA transcription CLI
//!
//! Usage: rna_transcribe [<sequence>] [options]
//!
//! Options:
//!   --file <PATH>    Read the DNA sequence from a plain or FASTA file
//!   --output <PATH>  Write the RNA sequence to a file instead of stdout
//!   --width <N>      Line width for --output (default: 60, 0 = single line)
//!   --help, -h       Show help
//!
//! Without a sequence or --file, each stdin line is transcribed and printed separately.
//!
//! Example: rna_transcribe GCTA

use leapdna_core::constants::DEFAULT_LINE_WIDTH;
use leapdna_core::infra::sequence_io::save_sequence;
#[cfg(not(feature = "mmap"))]
use leapdna_core::infra::sequence_io::load_sequence;
use leapdna_core::{TranscriptionError, Transcriptor};
use std::env;
use std::io::{self, BufRead};
use std::path::{Path, PathBuf};

#[cfg(feature = "mmap")]
use leapdna_core::infra::sequence_io::load_sequence_mapped;

enum Input {
    Inline(String),
    File(PathBuf),
    Stdin,
}

struct Args {
    input: Input,
    output: Option<PathBuf>,
    width: usize,
}

fn print_usage(program: &str) {
    eprintln!("Usage: {} [<sequence>] [options]", program);
    eprintln!();
    eprintln!("Arguments:");
    eprintln!("  <sequence>       DNA sequence (A, C, G, T)");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --file <PATH>    Read the DNA sequence from a plain or FASTA file");
    eprintln!("  --output <PATH>  Write the RNA sequence to a file instead of stdout");
    eprintln!(
        "  --width <N>      Line width for --output (default: {}, 0 = single line)",
        DEFAULT_LINE_WIDTH
    );
    eprintln!("  --help, -h       Show this help message");
}

fn parse_args() -> Result<Args, String> {
    let args: Vec<String> = env::args().collect();

    let mut sequence: Option<String> = None;
    let mut file: Option<PathBuf> = None;
    let mut output: Option<PathBuf> = None;
    let mut width = DEFAULT_LINE_WIDTH;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--file" => {
                i += 1;
                let path = args.get(i).ok_or("--file requires a value")?;
                file = Some(PathBuf::from(path));
            }
            "--output" => {
                i += 1;
                let path = args.get(i).ok_or("--output requires a value")?;
                output = Some(PathBuf::from(path));
            }
            "--width" => {
                i += 1;
                let value = args.get(i).ok_or("--width requires a value")?;
                width = value
                    .parse()
                    .map_err(|_| format!("Invalid width: {}", value))?;
            }
            "--help" | "-h" => {
                print_usage(&args[0]);
                std::process::exit(0);
            }
            arg if !arg.starts_with('-') => {
                if sequence.is_some() {
                    return Err(format!("Unexpected argument: {}", arg));
                }
                sequence = Some(arg.to_string());
            }
            _ => return Err(format!("Unknown option: {}", args[i])),
        }
        i += 1;
    }

    let input = match (sequence, file) {
        (Some(_), Some(_)) => return Err("Give either a sequence or --file, not both".to_string()),
        (Some(seq), None) => Input::Inline(seq),
        (None, Some(path)) => Input::File(path),
        (None, None) if output.is_some() => {
            return Err("--output requires a sequence or --file".to_string());
        }
        (None, None) => Input::Stdin,
    };

    Ok(Args {
        input,
        output,
        width,
    })
}

fn format_transcription_error(err: TranscriptionError) -> String {
    match err {
        TranscriptionError::InvalidNucleotide {
            nucleotide,
            position,
        } => format!(
            "Invalid nucleotide '{}' at position {}.\nOnly A, C, G and T are accepted.",
            nucleotide, position
        ),
        TranscriptionError::InvalidLength { length } => format!(
            "Invalid nucleotide length: {} characters (expected exactly one).",
            length
        ),
    }
}

fn emit(rna: &str, args: &Args) {
    match &args.output {
        Some(path) => {
            if let Err(e) = save_sequence(path, rna, args.width) {
                eprintln!("Error saving sequence: {}", e);
                std::process::exit(1);
            }
            println!("Wrote {} bases to {}", rna.chars().count(), path.display());
        }
        None => println!("{}", rna),
    }
}

#[cfg(feature = "mmap")]
fn read_file(path: &Path) -> Result<String, String> {
    load_sequence_mapped(path).map_err(|e| format!("Error loading sequence: {}", e))
}

#[cfg(not(feature = "mmap"))]
fn read_file(path: &Path) -> Result<String, String> {
    load_sequence(path).map_err(|e| format!("Error loading sequence: {}", e))
}

fn main() {
    let args = match parse_args() {
        Ok(a) => a,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!();
            print_usage(&env::args().next().unwrap_or_default());
            std::process::exit(1);
        }
    };

    let transcriptor = Transcriptor::new();

    let dna = match &args.input {
        Input::Inline(seq) => seq.clone(),
        Input::File(path) => match read_file(path) {
            Ok(seq) => seq,
            Err(e) => {
                eprintln!("{}", e);
                std::process::exit(1);
            }
        },
        Input::Stdin => {
            let stdin = io::stdin();
            for (line_no, line) in stdin.lock().lines().enumerate() {
                let line = match line {
                    Ok(l) => l,
                    Err(_) => {
                        eprintln!("Error reading input.");
                        std::process::exit(1);
                    }
                };
                match transcriptor.to_rna(line.trim()) {
                    Ok(rna) => println!("{}", rna),
                    Err(e) => {
                        eprintln!(
                            "Error on line {}: {}",
                            line_no + 1,
                            format_transcription_error(e)
                        );
                        std::process::exit(1);
                    }
                }
            }
            return;
        }
    };

    match transcriptor.to_rna(&dna) {
        Ok(rna) => emit(&rna, &args),
        Err(e) => {
            eprintln!("Error: {}", format_transcription_error(e));
            std::process::exit(1);
        }
    }
}
