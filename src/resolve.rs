use crate::error::{WdayError, WdayResult};
use chrono::NaiveDate;

/// Granularity at which a resolved anchor is compared to event dates.
///
/// `Today` is a resolution mode rather than a fixed granularity: it defers
/// the precision choice to each event's own frequency, so one query can mix
/// yearly and monthly recurrences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchPrecision {
    Exact,
    MonthDay,
    Day,
    Today,
}

/// The concrete calendar anchor a query resolves to, computed once per
/// invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedAnchor {
    pub date: NaiveDate,
    pub precision: MatchPrecision,
}

// Sentinel fields carry partial date tokens through a well-formed
// NaiveDate. Year 2000 is a leap year so "02-29" stays representable;
// January has 31 days so every day-of-month stays representable. Neither
// value may influence matching at the precision levels that ignore it.
const SENTINEL_YEAR: i32 = 2000;
const SENTINEL_MONTH: u32 = 1;

/// Resolve an optional user-supplied date token against the current date.
///
/// An absent or empty token anchors on `today` in `Today` mode. A non-empty
/// token is tried against a strict-to-loose fallback chain (`YYYY-MM-DD`,
/// `MM-DD`, `DD`); the first shape that parses wins, and a token matching
/// none of them is fatal to the invocation.
pub fn resolve_anchor(token: Option<&str>, today: NaiveDate) -> WdayResult<ResolvedAnchor> {
    let token = match token {
        Some(t) if !t.is_empty() => t,
        _ => {
            return Ok(ResolvedAnchor {
                date: today,
                precision: MatchPrecision::Today,
            });
        }
    };

    if let Ok(date) = NaiveDate::parse_from_str(token, "%Y-%m-%d") {
        return Ok(ResolvedAnchor {
            date,
            precision: MatchPrecision::Exact,
        });
    }

    if let Ok(date) = NaiveDate::parse_from_str(&format!("{SENTINEL_YEAR}-{token}"), "%Y-%m-%d") {
        return Ok(ResolvedAnchor {
            date,
            precision: MatchPrecision::MonthDay,
        });
    }

    // Day-only tokens are digits and nothing else; u32 parsing alone would
    // also admit a leading sign.
    if token.bytes().all(|b| b.is_ascii_digit()) {
        if let Ok(day) = token.parse::<u32>() {
            if let Some(date) = NaiveDate::from_ymd_opt(SENTINEL_YEAR, SENTINEL_MONTH, day) {
                return Ok(ResolvedAnchor {
                    date,
                    precision: MatchPrecision::Day,
                });
            }
        }
    }

    Err(WdayError::InvalidDateInput(token.to_string()))
}
