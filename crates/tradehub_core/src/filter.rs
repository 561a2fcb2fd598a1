//! Query-parameter parsing shared by the search endpoints

use crate::error::{CoreError, Result};

/// A query parameter that is present and not blank.
pub fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Minimum rating threshold, e.g. `rating=4.8`.
pub fn parse_min_rating(value: Option<&str>) -> Result<Option<f64>> {
    let Some(raw) = non_blank(value) else {
        return Ok(None);
    };
    match raw.parse::<f64>() {
        Ok(rating) if rating.is_finite() => Ok(Some(rating)),
        _ => Err(CoreError::invalid_filter("rating", raw)),
    }
}

/// Maximum distance in whole units, read like an integer parse of the
/// leading digits: `12.9` and `12km` both mean 12.
pub fn parse_max_distance(value: Option<&str>) -> Result<Option<i64>> {
    let Some(raw) = non_blank(value) else {
        return Ok(None);
    };
    let end = raw
        .char_indices()
        .find(|&(i, c)| !(c.is_ascii_digit() || (i == 0 && matches!(c, '-' | '+'))))
        .map_or(raw.len(), |(i, _)| i);
    raw[..end]
        .parse::<i64>()
        .map(Some)
        .map_err(|_| CoreError::invalid_filter("distance", raw))
}

pub fn contains_ignore_case(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}
