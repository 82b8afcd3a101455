//! Shared utility functions for the water quality map

use chrono::NaiveDate;

/// Trim a raw CSV cell and treat an empty cell as missing
///
/// # Examples
///
/// ```
/// use water_quality_map::utils::non_empty;
///
/// assert_eq!(non_empty("  pH "), Some("pH".to_string()));
/// assert_eq!(non_empty("   "), None);
/// ```
pub fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Parse an activity start date, returning `None` for anything unparseable
///
/// Water Quality Portal exports use `YYYY-MM-DD`, but hand-edited files show up
/// with a time component or US-style dates.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use water_quality_map::utils::parse_activity_date;
///
/// let expected = NaiveDate::from_ymd_opt(2021, 3, 9);
/// assert_eq!(parse_activity_date("2021-03-09"), expected);
/// assert_eq!(parse_activity_date("2021-03-09T10:15:00"), expected);
/// assert_eq!(parse_activity_date("03/09/2021"), expected);
/// assert_eq!(parse_activity_date("not a date"), None);
/// ```
pub fn parse_activity_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    // Drop a trailing time part ("2021-03-09T10:15:00" or "2021-03-09 10:15")
    let date_part = trimmed
        .split(|c: char| c == 'T' || c.is_whitespace())
        .next()
        .unwrap_or(trimmed);

    ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"]
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(date_part, format).ok())
}

/// Parse a numeric cell, returning `None` for non-numeric or non-finite values
///
/// # Examples
///
/// ```
/// use water_quality_map::utils::parse_measure_value;
///
/// assert_eq!(parse_measure_value("7.25"), Some(7.25));
/// assert_eq!(parse_measure_value(" 12 "), Some(12.0));
/// assert_eq!(parse_measure_value("<0.5"), None);
/// assert_eq!(parse_measure_value("NaN"), None);
/// ```
pub fn parse_measure_value(value: &str) -> Option<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_empty_keeps_inner_spaces() {
        assert_eq!(
            non_empty(" Texas Commission on Environmental Quality "),
            Some("Texas Commission on Environmental Quality".to_string())
        );
    }

    #[test]
    fn test_non_empty_empty_string() {
        assert_eq!(non_empty(""), None);
    }

    #[test]
    fn test_parse_activity_date_iso() {
        assert_eq!(
            parse_activity_date("2020-01-15"),
            NaiveDate::from_ymd_opt(2020, 1, 15)
        );
    }

    #[test]
    fn test_parse_activity_date_with_space_time() {
        assert_eq!(
            parse_activity_date("2020-01-15 08:30:00"),
            NaiveDate::from_ymd_opt(2020, 1, 15)
        );
    }

    #[test]
    fn test_parse_activity_date_slashes() {
        assert_eq!(
            parse_activity_date("2020/01/15"),
            NaiveDate::from_ymd_opt(2020, 1, 15)
        );
    }

    #[test]
    fn test_parse_activity_date_invalid_day() {
        assert_eq!(parse_activity_date("2020-02-30"), None);
    }

    #[test]
    fn test_parse_activity_date_empty() {
        assert_eq!(parse_activity_date("  "), None);
    }

    #[test]
    fn test_parse_measure_value_negative() {
        assert_eq!(parse_measure_value("-3.5"), Some(-3.5));
    }

    #[test]
    fn test_parse_measure_value_infinite() {
        assert_eq!(parse_measure_value("inf"), None);
    }

    #[test]
    fn test_parse_measure_value_text() {
        assert_eq!(parse_measure_value("Not Detected"), None);
    }
}
