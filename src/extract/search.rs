//! Search query-string parsing.

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::Deserialize;

use crate::error_handling::ValidationError;
use crate::models::non_empty;
use crate::storage::SearchFilters;

/// Raw `GET /api/search` parameters. Empty values count as absent.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchParams {
    pub latitude: Option<String>,
    pub longitude: Option<String>,
    pub ip_address: Option<String>,
    pub date_from: Option<String>,
    pub date_to: Option<String>,
}

impl SearchParams {
    /// Interprets the parameters as storage filters.
    ///
    /// Dates accept RFC 3339, `YYYY-MM-DD HH:MM:SS`, `YYYY-MM-DDTHH:MM:SS`
    /// or a bare `YYYY-MM-DD`. A bare `dateTo` covers the whole day.
    pub fn into_filters(self) -> Result<SearchFilters, ValidationError> {
        Ok(SearchFilters {
            latitude: parse_number("latitude", self.latitude)?,
            longitude: parse_number("longitude", self.longitude)?,
            ip_address: non_empty(self.ip_address),
            date_from: parse_date("dateFrom", self.date_from, false)?,
            date_to: parse_date("dateTo", self.date_to, true)?,
        })
    }
}

fn parse_number(field: &'static str, raw: Option<String>) -> Result<Option<f64>, ValidationError> {
    let Some(raw) = non_empty(raw) else {
        return Ok(None);
    };
    match raw.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(Some(v)),
        _ => Err(ValidationError::InvalidFilter { field, value: raw }),
    }
}

fn parse_date(
    field: &'static str,
    raw: Option<String>,
    end_of_day: bool,
) -> Result<Option<NaiveDateTime>, ValidationError> {
    let Some(raw) = non_empty(raw) else {
        return Ok(None);
    };

    if let Ok(dt) = DateTime::parse_from_rfc3339(&raw) {
        return Ok(Some(to_whole_second(dt.naive_utc(), end_of_day)));
    }
    for format in ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(&raw, format) {
            return Ok(Some(to_whole_second(dt, end_of_day)));
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(&raw, "%Y-%m-%d") {
        let time = if end_of_day {
            NaiveTime::from_hms_opt(23, 59, 59)
        } else {
            NaiveTime::from_hms_opt(0, 0, 0)
        };
        if let Some(time) = time {
            return Ok(Some(date.and_time(time)));
        }
    }

    Err(ValidationError::InvalidFilter { field, value: raw })
}

/// Stored timestamps have second resolution: a fractional lower bound rounds
/// up to the next second, a fractional upper bound rounds down.
fn to_whole_second(dt: NaiveDateTime, upper_bound: bool) -> NaiveDateTime {
    let truncated = dt.with_nanosecond(0).unwrap_or(dt);
    if upper_bound || truncated == dt {
        truncated
    } else {
        truncated + Duration::seconds(1)
    }
}
