//! Nucleotide alphabets
//!
//! `DnaBase` covers the DNA alphabet {A, C, G, T} and `RnaBase` the RNA
//! alphabet {A, C, G, U}. Matching is exact: lowercase letters and IUPAC
//! ambiguity codes are not part of either alphabet.

use std::fmt;

/// A DNA nucleotide
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DnaBase {
    A,
    C,
    G,
    T,
}

/// An RNA nucleotide
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RnaBase {
    A,
    C,
    G,
    U,
}

impl DnaBase {
    /// Parse a single character, `None` outside the DNA alphabet
    #[inline]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'A' => Some(Self::A),
            'C' => Some(Self::C),
            'G' => Some(Self::G),
            'T' => Some(Self::T),
            _ => None,
        }
    }

    /// Parse an ASCII byte, `None` outside the DNA alphabet
    #[inline]
    pub const fn from_ascii(byte: u8) -> Option<Self> {
        Self::from_char(byte as char)
    }

    #[inline]
    pub const fn to_char(self) -> char {
        match self {
            Self::A => 'A',
            Self::C => 'C',
            Self::G => 'G',
            Self::T => 'T',
        }
    }

    /// RNA base pairing with this DNA base (G→C, C→G, T→A, A→U)
    #[inline]
    pub const fn transcribe(self) -> RnaBase {
        match self {
            Self::G => RnaBase::C,
            Self::C => RnaBase::G,
            Self::T => RnaBase::A,
            Self::A => RnaBase::U,
        }
    }
}

impl RnaBase {
    #[inline]
    pub const fn to_char(self) -> char {
        match self {
            Self::A => 'A',
            Self::C => 'C',
            Self::G => 'G',
            Self::U => 'U',
        }
    }

    #[inline]
    pub const fn to_ascii(self) -> u8 {
        self.to_char() as u8
    }
}

impl TryFrom<char> for DnaBase {
    type Error = char;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Self::from_char(c).ok_or(c)
    }
}

impl From<DnaBase> for char {
    fn from(base: DnaBase) -> Self {
        base.to_char()
    }
}

impl From<RnaBase> for char {
    fn from(base: RnaBase) -> Self {
        base.to_char()
    }
}

impl fmt::Display for DnaBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl fmt::Display for RnaBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}
