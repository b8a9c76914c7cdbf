//! Field-level cleaning for raw export values
//!
//! Cleaning never fails: anything that does not parse becomes `None` and the
//! row is kept. The export mixes hand-keyed values with machine output, so
//! revenue carries thousands separators and dates show up in several formats.

use chrono::NaiveDate;

/// Date formats seen in the export, tried in order
const DATE_FORMATS: [&str; 4] = ["%Y-%m-%d", "%Y-%m-%d %H:%M:%S", "%d/%m/%Y", "%d-%m-%Y"];

/// Parse a revenue string, stripping thousands separators and whitespace.
///
/// `"1,500,000"` and `"1 500 000"` both yield `1_500_000.0`; anything that
/// still fails numeric parsing yields `None`.
pub fn parse_revenue(raw: &str) -> Option<f64> {
    let cleaned: String = raw.chars().filter(|c| *c != ',' && !c.is_whitespace()).collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parse an admission date string against the known export formats
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    for format in DATE_FORMATS {
        if format.contains("%H") {
            if let Ok(dt) = chrono::NaiveDateTime::parse_from_str(trimmed, format) {
                return Some(dt.date());
            }
        } else if let Ok(d) = NaiveDate::parse_from_str(trimmed, format) {
            return Some(d);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn revenue_strips_thousands_separators() {
        assert_eq!(parse_revenue("1,500,000"), Some(1_500_000.0));
        assert_eq!(parse_revenue("1 500 000"), Some(1_500_000.0));
        assert_eq!(parse_revenue(" 2,000,000 "), Some(2_000_000.0));
    }

    #[test]
    fn revenue_plain_numbers_parse() {
        assert_eq!(parse_revenue("1800000"), Some(1_800_000.0));
        assert_eq!(parse_revenue("0"), Some(0.0));
        assert_eq!(parse_revenue("1234.5"), Some(1234.5));
    }

    #[test]
    fn revenue_garbage_becomes_none() {
        assert_eq!(parse_revenue("N/A"), None);
        assert_eq!(parse_revenue(""), None);
        assert_eq!(parse_revenue("   "), None);
        assert_eq!(parse_revenue("1,2,3abc"), None);
    }

    #[test]
    fn date_formats_all_parse() {
        let expected = NaiveDate::from_ymd_opt(2023, 3, 15).unwrap();
        assert_eq!(parse_date("2023-03-15"), Some(expected));
        assert_eq!(parse_date("2023-03-15 08:30:00"), Some(expected));
        assert_eq!(parse_date("15/03/2023"), Some(expected));
        assert_eq!(parse_date("15-03-2023"), Some(expected));
    }

    #[test]
    fn invalid_dates_become_none() {
        assert_eq!(parse_date("not a date"), None);
        assert_eq!(parse_date("2023-13-40"), None);
        assert_eq!(parse_date(""), None);
    }
}
