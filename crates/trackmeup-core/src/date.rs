use chrono::NaiveDate;

use crate::error::IntervalError;

/// The only accepted input layout: zero-padded `YYYY-MM-DD`.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a date strictly in `YYYY-MM-DD` form.
///
/// chrono's `%Y`/`%m`/`%d` are lenient about signs, padding and leading
/// whitespace, so the shape is checked byte by byte before the calendar
/// check runs.
pub fn parse_date(input: &str) -> Result<NaiveDate, IntervalError> {
    let fail = |reason: String| IntervalError::DateParse {
        input: input.to_string(),
        reason,
    };

    let bytes = input.as_bytes();
    if bytes.len() != 10 {
        return Err(fail("expected YYYY-MM-DD".to_string()));
    }
    for (i, b) in bytes.iter().enumerate() {
        match (i, b) {
            (4 | 7, b'-') => {}
            (4 | 7, _) => return Err(fail(format!("expected '-' at position {i}"))),
            (_, b'0'..=b'9') => {}
            _ => return Err(fail(format!("expected digit at position {i}"))),
        }
    }

    NaiveDate::parse_from_str(input, DATE_FORMAT).map_err(|e| fail(e.to_string()))
}

pub fn is_valid_date(input: &str) -> bool {
    parse_date(input).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn assert_parse_error(input: &str) {
        match parse_date(input) {
            Err(IntervalError::DateParse { input: got, .. }) => assert_eq!(got, input),
            other => panic!("expected DateParse for {input:?}, got {other:?}"),
        }
    }

    #[test]
    fn parses_valid_dates() {
        assert_eq!(parse_date("2020-01-01").unwrap(), date(2020, 1, 1));
        assert_eq!(parse_date("2024-12-31").unwrap(), date(2024, 12, 31));
        assert_eq!(parse_date("0001-01-01").unwrap(), date(1, 1, 1));
    }

    #[test]
    fn rejects_out_of_range_day() {
        assert_parse_error("2020-01-32");
        assert_parse_error("2020-01-40");
        assert_parse_error("2020-04-31");
        assert_parse_error("2020-13-01");
        assert_parse_error("2020-00-10");
    }

    #[test]
    fn leap_days() {
        assert_eq!(parse_date("2024-02-29").unwrap(), date(2024, 2, 29));
        assert_eq!(parse_date("2000-02-29").unwrap(), date(2000, 2, 29));
        assert_parse_error("2023-02-29");
        assert_parse_error("1900-02-29");
    }

    #[test]
    fn rejects_malformed_layouts() {
        assert_parse_error("2020-1-05");
        assert_parse_error("2020/01/05");
        assert_parse_error("2020-01-05 ");
        assert_parse_error(" 2020-01-05");
        assert_parse_error("+2020-01-05");
        assert_parse_error("2020-01");
        assert_parse_error("2020-01-05-01");
        assert_parse_error("20-01-2020");
        assert_parse_error("");
        assert_parse_error("2020-0a-05");
    }

    #[test]
    fn reason_is_carried() {
        let err = parse_date("2020/01/05").unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid date \"2020/01/05\": expected '-' at position 4"
        );
    }

    #[test]
    fn is_valid_date_matches_parse() {
        assert!(is_valid_date("2024-01-24"));
        assert!(!is_valid_date("2024-01-32"));
        assert!(!is_valid_date("yesterday"));
    }
}
