use chrono::{DateTime, Utc};
use reqwest::header::HeaderMap;
use serde::Serialize;
use tracing::warn;

pub const LIMIT_HEADER: &str = "x-featureratelimit-limit";
pub const REMAINING_HEADER: &str = "x-featureratelimit-remaining";
pub const RESET_HEADER: &str = "x-featureratelimit-reset";

/// Per-feature quota reported on every Admin API response.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FeatureRateLimits {
    pub limit: Option<i64>,
    pub remaining: Option<i64>,
    pub reset: Option<DateTime<Utc>>,
}

impl FeatureRateLimits {
    /// Header names are matched case-insensitively by `HeaderMap`.
    pub fn from_headers(headers: &HeaderMap) -> Self {
        Self {
            limit: header_str(headers, LIMIT_HEADER).and_then(|v| parse_count(LIMIT_HEADER, v)),
            remaining: header_str(headers, REMAINING_HEADER)
                .and_then(|v| parse_count(REMAINING_HEADER, v)),
            reset: header_str(headers, RESET_HEADER).and_then(parse_reset),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.limit.is_none() && self.remaining.is_none() && self.reset.is_none()
    }
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name)?.to_str().ok().map(str::trim)
}

fn parse_count(name: &str, value: &str) -> Option<i64> {
    match value.parse::<i64>() {
        Ok(n) => Some(n),
        Err(err) => {
            warn!("Ignoring malformed {name} header '{value}': {err}");
            None
        }
    }
}

/// Reset is an HTTP-date (`Tue, 04 Jul 2023 19:00:00 GMT`).
fn parse_reset(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc2822(value)
        .or_else(|_| DateTime::parse_from_rfc3339(value))
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|err| warn!("Ignoring malformed {RESET_HEADER} header '{value}': {err}"))
        .ok()
}
