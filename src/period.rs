//! Resolves user-supplied period expressions into concrete date ranges.
//!
//! The report command accepts either a keyword (`hoje`, `semana`, `mes`) or
//! an explicit `dd/mm/aaaa a dd/mm/aaaa` range. Keywords win over the
//! explicit form; anything else is rejected with a variant-specific error so
//! the orchestrator can answer with the right guidance.

use chrono::{Datelike, Duration, NaiveDate};
use thiserror::Error;

/// Inclusive calendar date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// Why a period expression could not be resolved.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PeriodError {
    #[error("unrecognized period expression {0:?}")]
    Unrecognized(String),
    #[error("malformed explicit date range {0:?}")]
    MalformedRange(String),
}

/// Literal token joining the two dates of an explicit range.
const RANGE_SEPARATOR: &str = " a ";
/// Day-first format of each explicit date.
const EXPLICIT_DATE_FORMAT: &str = "%d/%m/%Y";

/// Resolves `expr` against `today`.
///
/// Recognized forms, case-insensitive, in precedence order:
/// 1. `hoje` - just today
/// 2. `semana` - the trailing 7-day window ending today (not aligned to a
///    calendar week)
/// 3. `mes` (or `mês`) - from the first of today's month through today
/// 4. `dd/mm/aaaa a dd/mm/aaaa` - both dates taken as given
///
/// An explicit range with `start > end` is passed through unchanged; the
/// query layer answers it with an empty result set.
///
/// # Errors
///
/// [`PeriodError::MalformedRange`] when the expression contains the range
/// separator but either side fails to parse, [`PeriodError::Unrecognized`]
/// for everything else.
pub fn resolve_period(expr: &str, today: NaiveDate) -> Result<DateRange, PeriodError> {
    let normalized = expr.trim().to_lowercase();
    match normalized.as_str() {
        "hoje" => Ok(DateRange {
            start: today,
            end: today,
        }),
        "semana" => Ok(DateRange {
            start: today - Duration::days(7),
            end: today,
        }),
        "mes" | "mês" => Ok(DateRange {
            // Day 1 exists in every month, so this cannot actually fall back.
            start: today.with_day(1).unwrap_or(today),
            end: today,
        }),
        other => match other.split_once(RANGE_SEPARATOR) {
            Some((first, second)) => parse_explicit_range(first, second)
                .ok_or_else(|| PeriodError::MalformedRange(expr.trim().to_string())),
            None => Err(PeriodError::Unrecognized(expr.trim().to_string())),
        },
    }
}

fn parse_explicit_range(first: &str, second: &str) -> Option<DateRange> {
    let start = NaiveDate::parse_from_str(first.trim(), EXPLICIT_DATE_FORMAT).ok()?;
    let end = NaiveDate::parse_from_str(second.trim(), EXPLICIT_DATE_FORMAT).ok()?;
    Some(DateRange { start, end })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn hoje_is_a_single_day_range() {
        let today = date(2025, 5, 15);
        assert_eq!(
            resolve_period("hoje", today),
            Ok(DateRange {
                start: today,
                end: today
            })
        );
    }

    #[test]
    fn semana_is_a_trailing_seven_day_window() {
        assert_eq!(
            resolve_period("semana", date(2025, 5, 15)),
            Ok(DateRange {
                start: date(2025, 5, 8),
                end: date(2025, 5, 15)
            })
        );
    }

    #[test]
    fn semana_crosses_month_boundaries() {
        assert_eq!(
            resolve_period("semana", date(2025, 3, 3)),
            Ok(DateRange {
                start: date(2025, 2, 24),
                end: date(2025, 3, 3)
            })
        );
    }

    #[test]
    fn mes_starts_at_the_first_of_the_current_month() {
        assert_eq!(
            resolve_period("mes", date(2025, 5, 15)),
            Ok(DateRange {
                start: date(2025, 5, 1),
                end: date(2025, 5, 15)
            })
        );
    }

    #[test]
    fn accented_mes_is_accepted() {
        assert_eq!(
            resolve_period("mês", date(2025, 5, 15)),
            resolve_period("mes", date(2025, 5, 15))
        );
    }

    #[test]
    fn keywords_are_case_insensitive_and_trimmed() {
        let today = date(2025, 5, 15);
        assert_eq!(resolve_period("  HOJE ", today), resolve_period("hoje", today));
        assert_eq!(resolve_period("Semana", today), resolve_period("semana", today));
    }

    #[test]
    fn explicit_range_parses_day_first() {
        assert_eq!(
            resolve_period("01/05/2025 a 15/05/2025", date(2099, 1, 1)),
            Ok(DateRange {
                start: date(2025, 5, 1),
                end: date(2025, 5, 15)
            })
        );
    }

    #[test]
    fn inverted_explicit_range_passes_through_unchanged() {
        assert_eq!(
            resolve_period("15/05/2025 a 01/05/2025", date(2025, 5, 20)),
            Ok(DateRange {
                start: date(2025, 5, 15),
                end: date(2025, 5, 1)
            })
        );
    }

    #[test]
    fn malformed_explicit_range_is_distinct_from_unrecognized() {
        assert_eq!(
            resolve_period("2025-05-01 a 2025-05-15", date(2025, 5, 20)),
            Err(PeriodError::MalformedRange("2025-05-01 a 2025-05-15".to_string()))
        );
        assert_eq!(
            resolve_period("31/02/2025 a 15/05/2025", date(2025, 5, 20)),
            Err(PeriodError::MalformedRange("31/02/2025 a 15/05/2025".to_string()))
        );
    }

    #[test]
    fn anything_else_is_unrecognized() {
        assert_eq!(
            resolve_period("banana", date(2025, 5, 15)),
            Err(PeriodError::Unrecognized("banana".to_string()))
        );
        assert_eq!(
            resolve_period("", date(2025, 5, 15)),
            Err(PeriodError::Unrecognized(String::new()))
        );
    }
}
