use chrono::{DateTime, NaiveDate, TimeDelta, Utc};

use crate::error::{FetcherError, Result};

const DEFAULT_WEEKS: u32 = 1;

/// Resolve the cutoff instant from `--weeks` / `--since`.
///
/// A non-zero `weeks` wins over `since`; zero counts as not given. With neither,
/// the window is one week back from `now`. A `since` date is taken as midnight UTC.
pub fn resolve(
    weeks: Option<u32>,
    since: Option<&str>,
    now: DateTime<Utc>,
) -> Result<DateTime<Utc>> {
    match (weeks.filter(|&w| w > 0), since) {
        (Some(weeks), _) => weeks_before(now, weeks),
        (None, Some(date)) => parse_date(date),
        (None, None) => weeks_before(now, DEFAULT_WEEKS),
    }
}

fn weeks_before(now: DateTime<Utc>, weeks: u32) -> Result<DateTime<Utc>> {
    TimeDelta::try_days(7 * i64::from(weeks))
        .and_then(|window| now.checked_sub_signed(window))
        .ok_or(FetcherError::InvalidWeeks(weeks))
}

fn parse_date(input: &str) -> Result<DateTime<Utc>> {
    let date = NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").map_err(|e| {
        FetcherError::InvalidDate {
            input: input.to_string(),
            source: e,
        }
    })?;

    Ok(date.and_time(chrono::NaiveTime::MIN).and_utc())
}
