//! Leap-year predicates
//!
//! This module provides the Gregorian leap-year rule and several
//! micro-optimized variants of it. All variants are input/output equivalent
//! over the whole `i64` range; they differ only in evaluation order.

use crate::constants::{CENTURY, DAYS_IN_COMMON_YEAR, DAYS_IN_LEAP_YEAR, GREGORIAN_CYCLE, LEAP_CYCLE};

/// Check whether `year` is a leap year (proleptic Gregorian calendar)
///
/// Divisibility by 4 is tested first. Three out of four years exit there,
/// and the century exception is only evaluated for the remaining quarter.
#[inline]
pub const fn is_leap_year(year: i64) -> bool {
    year % LEAP_CYCLE == 0 && (year % CENTURY != 0 || year % GREGORIAN_CYCLE == 0)
}

/// Straightforward if-chain, most specific rule first
#[inline]
pub const fn is_leap_year_naive(year: i64) -> bool {
    if year % GREGORIAN_CYCLE == 0 {
        return true;
    }
    if year % CENTURY == 0 {
        return false;
    }
    if year % LEAP_CYCLE == 0 {
        return true;
    }
    false
}

/// If-chain with the checks reversed so the common case returns early
#[inline]
pub const fn is_leap_year_reversed(year: i64) -> bool {
    if year % LEAP_CYCLE != 0 {
        return false;
    }
    if year % CENTURY != 0 {
        return true;
    }
    if year % GREGORIAN_CYCLE != 0 {
        return false;
    }
    true
}

/// Single boolean expression in the naive order
#[inline]
pub const fn is_leap_year_no_ifs(year: i64) -> bool {
    year % GREGORIAN_CYCLE == 0 || (year % CENTURY != 0 && year % LEAP_CYCLE == 0)
}

/// Mask-based variant
///
/// Once `year` is a multiple of 4, it is a multiple of 100 exactly when it is
/// a multiple of 25, and a multiple of 400 exactly when it is a multiple of 16.
/// Both power-of-two tests become masks on the two's complement representation,
/// which also holds for negative years.
#[inline]
pub const fn is_leap_year_bitwise(year: i64) -> bool {
    year & 3 == 0 && (year % 25 != 0 || year & 15 == 0)
}

/// Number of days in `year`
#[inline]
pub const fn days_in_year(year: i64) -> u16 {
    if is_leap_year(year) {
        DAYS_IN_LEAP_YEAR
    } else {
        DAYS_IN_COMMON_YEAR
    }
}

/// Selectable leap-year implementation
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LeapVariant {
    /// if-chain 400 → 100 → 4
    Naive,
    /// if-chain 4 → 100 → 400
    Reversed,
    /// boolean expression in the naive order
    NoIfs,
    /// boolean expression with the 4-check first
    #[default]
    Canonical,
    /// power-of-two masks
    Bitwise,
}

impl LeapVariant {
    /// Every variant, in benchmark order
    pub const ALL: [LeapVariant; 5] = [
        LeapVariant::Naive,
        LeapVariant::Reversed,
        LeapVariant::NoIfs,
        LeapVariant::Canonical,
        LeapVariant::Bitwise,
    ];

    /// Short name used in benchmark ids and on the command line
    pub const fn name(self) -> &'static str {
        match self {
            LeapVariant::Naive => "naive",
            LeapVariant::Reversed => "reversed",
            LeapVariant::NoIfs => "no_ifs",
            LeapVariant::Canonical => "canonical",
            LeapVariant::Bitwise => "bitwise",
        }
    }

    /// Look up a variant by its short name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|variant| variant.name() == name)
    }

    /// Function pointer for this variant
    pub const fn predicate(self) -> fn(i64) -> bool {
        match self {
            LeapVariant::Naive => is_leap_year_naive,
            LeapVariant::Reversed => is_leap_year_reversed,
            LeapVariant::NoIfs => is_leap_year_no_ifs,
            LeapVariant::Canonical => is_leap_year,
            LeapVariant::Bitwise => is_leap_year_bitwise,
        }
    }

    /// Evaluate this variant for `year`
    #[inline]
    pub fn apply(self, year: i64) -> bool {
        (self.predicate())(year)
    }
}

impl std::fmt::Display for LeapVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
