//! CSV loading and the content-keyed dataset cache
//!
//! The loader turns raw CSV text into a [`Dataset`] of cleaned records.
//! Parsing happens once per distinct upload: [`DatasetCache`] fingerprints the
//! raw bytes, so handing the same file over again is a cache hit.

use std::collections::HashMap;
use std::collections::hash_map::DefaultHasher;
use std::hash::Hasher;
use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use csv::StringRecord;
use thiserror::Error;

use crate::clean;
use crate::constants;
use crate::records::{Columns, Record};

/// Loader failure taxonomy. Everything here surfaces as a user-visible
/// message and an absent dataset, never a crash.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("could not parse CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("file has no header row")]
    Empty,
}

/// Positions of the expected columns within the header row
struct ColumnIndex {
    year: Option<usize>,
    month: Option<usize>,
    revenue: Option<usize>,
    admissions: Option<usize>,
    service_group: Option<usize>,
    service: Option<usize>,
    service_kind: Option<usize>,
    date: Option<usize>,
}

impl ColumnIndex {
    fn new(headers: &StringRecord) -> Self {
        let find = |name: &str| headers.iter().position(|h| h.trim() == name);
        ColumnIndex {
            year: find(constants::COL_YEAR),
            month: find(constants::COL_MONTH),
            revenue: find(constants::COL_REVENUE),
            admissions: find(constants::COL_ADMISSIONS),
            service_group: find(constants::COL_SERVICE_GROUP),
            service: find(constants::COL_SERVICE),
            service_kind: find(constants::COL_SERVICE_KIND),
            date: find(constants::COL_DATE),
        }
    }
}

/// Non-empty cell at `idx`, trimmed
fn cell(row: &StringRecord, idx: Option<usize>) -> Option<&str> {
    let value = row.get(idx?)?.trim();
    if value.is_empty() { None } else { Some(value) }
}

/// A loaded, cleaned table plus what we know about its shape
#[derive(Debug, Clone)]
pub struct Dataset {
    name: String,
    columns: Columns,
    rows: Vec<Record>,
}

impl Dataset {
    /// Parse a dataset from anything readable as CSV
    pub fn from_csv_reader<R: Read>(name: &str, reader: R) -> Result<Self, LoadError> {
        let mut rdr = csv::Reader::from_reader(reader);

        let headers = rdr.headers()?.clone();
        if headers.iter().all(|h| h.trim().is_empty()) {
            return Err(LoadError::Empty);
        }

        let columns = Columns::from_headers(headers.iter());
        let index = ColumnIndex::new(&headers);

        let mut rows = Vec::new();
        for result in rdr.records() {
            let row = result?;

            let raw_revenue = cell(&row, index.revenue).map(str::to_string);
            let raw_date = cell(&row, index.date).map(str::to_string);

            rows.push(Record {
                year: cell(&row, index.year).and_then(|v| v.parse().ok()),
                month: cell(&row, index.month).and_then(|v| v.parse().ok()),
                admissions: cell(&row, index.admissions).and_then(|v| v.parse().ok()),
                service_group: cell(&row, index.service_group).map(str::to_string),
                service: cell(&row, index.service).map(str::to_string),
                service_kind: cell(&row, index.service_kind).map(str::to_string),
                revenue: raw_revenue.as_deref().and_then(clean::parse_revenue),
                admitted_on: raw_date.as_deref().and_then(clean::parse_date),
                raw_revenue,
                raw_date,
            });
        }

        Ok(Dataset {
            name: name.to_string(),
            columns,
            rows,
        })
    }

    /// Parse a dataset from in-memory CSV text (browser uploads)
    pub fn from_csv_str(name: &str, text: &str) -> Result<Self, LoadError> {
        Self::from_csv_reader(name, text.as_bytes())
    }

    /// Parse a dataset from a local file (CLI / local fallback)
    pub fn from_path(path: &Path) -> Result<Self, LoadError> {
        let file = std::fs::File::open(path).map_err(|source| LoadError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self::from_csv_reader(&name, file)
    }

    /// Source name for display (upload filename or local path)
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Presence map of the expected columns
    pub fn columns(&self) -> Columns {
        self.columns
    }

    pub fn rows(&self) -> &[Record] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Session-scoped cache of parsed datasets, keyed on a fingerprint of the
/// uploaded bytes. Re-supplying identical content does not re-parse.
#[derive(Debug, Default)]
pub struct DatasetCache {
    entries: HashMap<u64, Arc<Dataset>>,
}

impl DatasetCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fingerprint raw upload content
    pub fn fingerprint(bytes: &[u8]) -> u64 {
        let mut hasher = DefaultHasher::new();
        hasher.write(bytes);
        hasher.finish()
    }

    /// Parse `text` as CSV, or return the already-parsed dataset when the
    /// same content was loaded before.
    pub fn load(&mut self, name: &str, text: &str) -> Result<Arc<Dataset>, LoadError> {
        let key = Self::fingerprint(text.as_bytes());
        if let Some(dataset) = self.entries.get(&key) {
            return Ok(Arc::clone(dataset));
        }

        let dataset = Arc::new(Dataset::from_csv_str(name, text)?);
        self.entries.insert(key, Arc::clone(&dataset));
        Ok(dataset)
    }

    /// Number of distinct uploads parsed so far
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop everything (reset action)
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    const SAMPLE: &str = "\
nam,thang,tongdoanhthu,sotiepnhan,tennhomdichvu,tendichvu,loai_dich_vu,ngay_tiep_nhan
2023,1,\"1,500,000\",100,Laboratory,Blood test,Outpatient,2023-01-10
2023,2,\"2,000,000\",120,Imaging,Chest X-ray,Inpatient,2023-02-05
2024,1,\"1,800,000\",110,Laboratory,Urine test,Outpatient,2024-01-12
";

    #[test]
    fn loads_and_cleans_rows() {
        let ds = Dataset::from_csv_str("sample.csv", SAMPLE).unwrap();
        assert_eq!(ds.len(), 3);
        assert!(ds.columns().is_complete());

        let first = &ds.rows()[0];
        assert_eq!(first.year, Some(2023));
        assert_eq!(first.month, Some(1));
        assert_eq!(first.revenue, Some(1_500_000.0));
        assert_eq!(first.admissions, Some(100));
        assert_eq!(first.admitted_on, NaiveDate::from_ymd_opt(2023, 1, 10));
        assert_eq!(first.service_group.as_deref(), Some("Laboratory"));
    }

    #[test]
    fn derived_fields_present_iff_source_parses() {
        let csv = "\
nam,tongdoanhthu,ngay_tiep_nhan
2023,\"1,500,000\",2023-01-10
2023,not-a-number,bad-date
2023,,
";
        let ds = Dataset::from_csv_str("t", csv).unwrap();
        let rows = ds.rows();

        assert!(rows[0].revenue.is_some());
        assert!(rows[0].admitted_on.is_some());

        // Source text survives even when parsing fails
        assert_eq!(rows[1].raw_revenue.as_deref(), Some("not-a-number"));
        assert!(rows[1].revenue.is_none());
        assert_eq!(rows[1].raw_date.as_deref(), Some("bad-date"));
        assert!(rows[1].admitted_on.is_none());

        // Blank cells are absent sources, not parse failures
        assert!(rows[2].raw_revenue.is_none());
        assert!(rows[2].revenue.is_none());
    }

    #[test]
    fn missing_columns_pass_through() {
        let csv = "nam,thang\n2023,1\n";
        let ds = Dataset::from_csv_str("t", csv).unwrap();
        assert!(!ds.columns().revenue);
        assert!(!ds.columns().date);
        assert!(ds.rows()[0].revenue.is_none());
        assert!(ds.rows()[0].raw_revenue.is_none());
    }

    #[test]
    fn ragged_rows_are_a_csv_error() {
        let csv = "nam,thang\n2023,1,extra,cells\n";
        let err = Dataset::from_csv_str("t", csv).unwrap_err();
        assert!(matches!(err, LoadError::Csv(_)));
    }

    #[test]
    fn empty_input_is_reported() {
        let err = Dataset::from_csv_str("t", "").unwrap_err();
        assert!(matches!(err, LoadError::Empty));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = Dataset::from_path(Path::new("/definitely/not/here.csv")).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }

    #[test]
    fn cache_hit_on_identical_content() {
        let mut cache = DatasetCache::new();
        let first = cache.load("a.csv", SAMPLE).unwrap();
        let second = cache.load("a-again.csv", SAMPLE).unwrap();

        // Same content parses once; both handles share the dataset
        assert_eq!(cache.len(), 1);
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn cache_distinguishes_different_content() {
        let mut cache = DatasetCache::new();
        cache.load("a.csv", SAMPLE).unwrap();
        cache.load("b.csv", "nam,thang\n2022,3\n").unwrap();
        assert_eq!(cache.len(), 2);

        cache.clear();
        assert!(cache.is_empty());
    }
}
