//! Calendar workflows
//!
//! Range queries over the leap-year predicate and cross-checks between
//! predicate variants.

use crate::constants::{CENTURY, GREGORIAN_CYCLE, LEAP_CYCLE};
use crate::domain::leap::{LeapVariant, is_leap_year};
use rayon::prelude::*;

/// A year where a variant disagrees with the canonical predicate
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VariantMismatch {
    pub year: i64,
    pub variant: LeapVariant,
    pub expected: bool,
    pub found: bool,
}

/// Collect the leap years in `[start, end)`
pub fn leap_years_in_range(start: i64, end: i64) -> Vec<i64> {
    (start..end).filter(|&year| is_leap_year(year)).collect()
}

/// Count the leap years in `[start, end)` in constant time
///
/// Uses floor division, so ranges spanning negative years count correctly.
/// Any `i64` range is accepted.
pub fn count_leap_years(start: i64, end: i64) -> u64 {
    if start >= end {
        return 0;
    }

    // i128 keeps `start - 1` in range for i64::MIN
    (leap_years_up_to(end as i128 - 1) - leap_years_up_to(start as i128 - 1)) as u64
}

/// Cumulative leap-year count; `f(b) - f(a)` is the number of leap years in `(a, b]`
fn leap_years_up_to(year: i128) -> i128 {
    year.div_euclid(LEAP_CYCLE as i128) - year.div_euclid(CENTURY as i128)
        + year.div_euclid(GREGORIAN_CYCLE as i128)
}

/// Count the leap years in `[start, end)` by checking each year with rayon
pub fn count_leap_years_parallel(start: i64, end: i64) -> u64 {
    if start >= end {
        return 0;
    }

    (start..end)
        .into_par_iter()
        .filter(|&year| is_leap_year(year))
        .count() as u64
}

/// Check every variant against the canonical predicate over `[start, end)`
///
/// Returns the first mismatch in year order, or `None` when all variants agree.
pub fn find_variant_disagreement(start: i64, end: i64) -> Option<VariantMismatch> {
    (start..end).find_map(|year| {
        let expected = is_leap_year(year);
        LeapVariant::ALL.into_iter().find_map(|variant| {
            let found = variant.apply(year);
            (found != expected).then_some(VariantMismatch {
                year,
                variant,
                expected,
                found,
            })
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leap_years_in_range() {
        assert_eq!(
            leap_years_in_range(1896, 1912),
            vec![1896, 1904, 1908]
        );
    }

    #[test]
    fn test_leap_years_in_range_empty() {
        assert!(leap_years_in_range(2001, 2001).is_empty());
        assert!(leap_years_in_range(2010, 2000).is_empty());
    }

    #[test]
    fn test_count_full_gregorian_cycle() {
        // 400-year cycle has 97 leap years
        assert_eq!(count_leap_years_parallel(0, 400), 97);
        assert_eq!(count_leap_years_parallel(-400, 0), 97);
    }

    #[test]
    fn test_count_matches_sequential() {
        let sequential = leap_years_in_range(1, 2001).len() as u64;
        assert_eq!(count_leap_years_parallel(1, 2001), sequential);
    }

    #[test]
    fn test_count_reversed_range() {
        assert_eq!(count_leap_years_parallel(100, 0), 0);
    }

    #[test]
    fn test_closed_form_matches_parallel_walk() {
        let ranges = [
            (0, 400),
            (1, 2001),
            (-2401, 17),
            (-1, 1),
            (1899, 1901),
            (1600, 1601),
            (-401, -399),
            (5, 5),
            (10, 0),
        ];
        for (start, end) in ranges {
            assert_eq!(
                count_leap_years(start, end),
                count_leap_years_parallel(start, end),
                "range [{}, {})",
                start,
                end
            );
        }
    }

    #[test]
    fn test_closed_form_sliding_windows() {
        for start in -850..-750 {
            for len in 0..130 {
                let end = start + len;
                assert_eq!(
                    count_leap_years(start, end),
                    leap_years_in_range(start, end).len() as u64
                );
            }
        }
    }

    #[test]
    fn test_closed_form_huge_ranges() {
        let cycles: i64 = 1_000_000_000;
        assert_eq!(count_leap_years(0, 400 * cycles), 97 * cycles as u64);
        assert_eq!(count_leap_years(-400 * cycles, 0), 97 * cycles as u64);

        // Whole i64 range: bounded by the 4-year rule, no overflow
        let all = count_leap_years(i64::MIN, i64::MAX);
        assert!(all > 0);
        assert!(all <= (u64::MAX / 4) + 1);
    }

    #[test]
    fn test_no_variant_disagreement() {
        assert_eq!(find_variant_disagreement(-2000, 4001), None);
    }
}
