//! Calendar and sequence related constants

// =============================================================================
// Gregorian calendar parameters
// =============================================================================

/// Regular leap-year cycle (every 4th year)
pub const LEAP_CYCLE: i64 = 4;

/// Century years are common years unless they fall on the long cycle
pub const CENTURY: i64 = 100;

/// Long Gregorian cycle (every 400th year is a leap year again)
pub const GREGORIAN_CYCLE: i64 = 400;

/// Days in a common year
pub const DAYS_IN_COMMON_YEAR: u16 = 365;

/// Days in a leap year
pub const DAYS_IN_LEAP_YEAR: u16 = 366;

// =============================================================================
// Benchmark parameters
// =============================================================================

/// Number of consecutive years (starting at 0) checked per benchmark iteration
///
/// Covering a whole range averages out the difference between early-exit
/// and late-exit years.
pub const BENCH_YEAR_COUNT: i64 = 2000;

// =============================================================================
// Nucleotide alphabets
// =============================================================================

/// DNA alphabet accepted by the transcriptor
pub const DNA_ALPHABET: [char; 4] = ['A', 'C', 'G', 'T'];

/// RNA alphabet produced by the transcriptor
pub const RNA_ALPHABET: [char; 4] = ['A', 'C', 'G', 'U'];

// =============================================================================
// File format
// =============================================================================

/// Line width used when writing sequence files (FASTA convention)
pub const DEFAULT_LINE_WIDTH: usize = 60;

/// Line prefix marking a FASTA header
pub const FASTA_HEADER_PREFIX: char = '>';

/// Line prefix marking a comment line
pub const COMMENT_PREFIX: char = ';';
