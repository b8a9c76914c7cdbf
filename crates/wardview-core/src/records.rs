//! Row and column types for the hospital service export

use chrono::NaiveDate;
use serde::Serialize;

use crate::constants;

/// One service transaction row after cleaning.
///
/// Every raw field is optional: a column the file never had, or a blank cell,
/// is simply `None`. The two derived fields (`admitted_on`, `revenue`) are
/// `Some` iff their source text parsed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    pub year: Option<i32>,
    pub month: Option<u32>,
    pub raw_revenue: Option<String>,
    pub admissions: Option<i64>,
    pub service_group: Option<String>,
    pub service: Option<String>,
    pub service_kind: Option<String>,
    pub raw_date: Option<String>,

    /// Parsed from `raw_date`; invalid dates become `None`
    pub admitted_on: Option<NaiveDate>,
    /// Parsed from `raw_revenue`; invalid numbers become `None`
    pub revenue: Option<f64>,
}

impl Record {
    /// A record with every field absent (useful as a builder base in tests)
    pub fn empty() -> Self {
        Record {
            year: None,
            month: None,
            raw_revenue: None,
            admissions: None,
            service_group: None,
            service: None,
            service_kind: None,
            raw_date: None,
            admitted_on: None,
            revenue: None,
        }
    }
}

/// Which of the expected columns the loaded file actually carried.
///
/// This is a presence check only; no type or range validation happens here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Columns {
    pub year: bool,
    pub month: bool,
    pub revenue: bool,
    pub admissions: bool,
    pub service_group: bool,
    pub service: bool,
    pub service_kind: bool,
    pub date: bool,
}

impl Columns {
    /// Detect expected columns in a CSV header row
    pub fn from_headers<'a>(headers: impl Iterator<Item = &'a str> + Clone) -> Self {
        let has = |name: &str| headers.clone().any(|h| h.trim() == name);
        Columns {
            year: has(constants::COL_YEAR),
            month: has(constants::COL_MONTH),
            revenue: has(constants::COL_REVENUE),
            admissions: has(constants::COL_ADMISSIONS),
            service_group: has(constants::COL_SERVICE_GROUP),
            service: has(constants::COL_SERVICE),
            service_kind: has(constants::COL_SERVICE_KIND),
            date: has(constants::COL_DATE),
        }
    }

    /// Expected columns absent from the file
    pub fn missing(&self) -> Vec<&'static str> {
        let mut out = Vec::new();
        if !self.year {
            out.push(constants::COL_YEAR);
        }
        if !self.month {
            out.push(constants::COL_MONTH);
        }
        if !self.revenue {
            out.push(constants::COL_REVENUE);
        }
        if !self.admissions {
            out.push(constants::COL_ADMISSIONS);
        }
        if !self.service_group {
            out.push(constants::COL_SERVICE_GROUP);
        }
        if !self.service {
            out.push(constants::COL_SERVICE);
        }
        if !self.service_kind {
            out.push(constants::COL_SERVICE_KIND);
        }
        if !self.date {
            out.push(constants::COL_DATE);
        }
        out
    }

    /// True when every expected column is present
    pub fn is_complete(&self) -> bool {
        self.missing().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_present_and_missing_columns() {
        let headers = ["nam", "thang", "tongdoanhthu", "extra_col"];
        let cols = Columns::from_headers(headers.iter().copied());

        assert!(cols.year);
        assert!(cols.month);
        assert!(cols.revenue);
        assert!(!cols.service_group);
        assert!(!cols.is_complete());

        let missing = cols.missing();
        assert!(missing.contains(&"sotiepnhan"));
        assert!(missing.contains(&"ngay_tiep_nhan"));
        assert!(!missing.contains(&"nam"));
    }

    #[test]
    fn full_header_set_is_complete() {
        let cols = Columns::from_headers(crate::constants::EXPECTED_COLUMNS.iter().copied());
        assert!(cols.is_complete());
        assert!(cols.missing().is_empty());
    }

    #[test]
    fn header_whitespace_is_tolerated() {
        let headers = [" nam ", "thang"];
        let cols = Columns::from_headers(headers.iter().copied());
        assert!(cols.year);
        assert!(cols.month);
    }
}
