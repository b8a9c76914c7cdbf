//! Year and service-group filtering
//!
//! The UI exposes the group filter as a selector whose first option is the
//! `"All"` sentinel; in here that sentinel is the [`GroupFilter::All`] variant
//! and is exactly equivalent to applying no group filter at all.

use std::collections::BTreeSet;

use crate::loader::Dataset;
use crate::records::Record;

/// Service-group narrowing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupFilter {
    /// No group filter (the `"All"` selector option)
    All,
    /// Keep only rows whose service group equals this name
    Only(String),
}

impl GroupFilter {
    /// Label the UI shows for the no-filter option
    pub const ALL_LABEL: &'static str = "All";

    /// Build from a selector label, mapping the sentinel back to `All`
    pub fn from_label(label: &str) -> Self {
        if label == Self::ALL_LABEL {
            GroupFilter::All
        } else {
            GroupFilter::Only(label.to_string())
        }
    }

    fn matches(&self, group: Option<&str>) -> bool {
        match self {
            GroupFilter::All => true,
            GroupFilter::Only(name) => group == Some(name.as_str()),
        }
    }

    /// Name of the selected group, if one is selected
    pub fn selected(&self) -> Option<&str> {
        match self {
            GroupFilter::All => None,
            GroupFilter::Only(name) => Some(name),
        }
    }
}

/// One dashboard interaction's worth of filter state
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub year: i32,
    pub group: GroupFilter,
}

/// The rows that survived a [`Selection`]. Aggregations live in
/// [`crate::aggregate`]; an empty view is a valid, reported outcome.
#[derive(Debug, Clone, PartialEq)]
pub struct FilteredView {
    rows: Vec<Record>,
}

impl FilteredView {
    pub(crate) fn new(rows: Vec<Record>) -> Self {
        FilteredView { rows }
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

    /// First `n` rows, for the detail table
    pub fn head(&self, n: usize) -> &[Record] {
        &self.rows[..self.rows.len().min(n)]
    }
}

impl Dataset {
    /// Distinct years present in the data, ascending. Rows without a year are
    /// skipped, so an empty result means the year column is unusable.
    pub fn years(&self) -> Vec<i32> {
        let years: BTreeSet<i32> = self.rows().iter().filter_map(|r| r.year).collect();
        years.into_iter().collect()
    }

    /// Distinct service-group names, ascending
    pub fn service_groups(&self) -> Vec<String> {
        let groups: BTreeSet<&str> = self
            .rows()
            .iter()
            .filter_map(|r| r.service_group.as_deref())
            .collect();
        groups.into_iter().map(str::to_string).collect()
    }

    /// Rows matching the selected year and group filter
    pub fn filter(&self, selection: &Selection) -> FilteredView {
        let rows = self
            .rows()
            .iter()
            .filter(|r| r.year == Some(selection.year))
            .filter(|r| selection.group.matches(r.service_group.as_deref()))
            .cloned()
            .collect();
        FilteredView::new(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset() -> Dataset {
        let csv = "\
nam,thang,tongdoanhthu,tennhomdichvu
2023,1,\"1,500,000\",Laboratory
2023,2,\"2,000,000\",Imaging
2023,3,\"500,000\",Laboratory
2024,1,\"1,800,000\",Laboratory
";
        Dataset::from_csv_str("t", csv).unwrap()
    }

    #[test]
    fn years_are_sorted_and_distinct() {
        assert_eq!(dataset().years(), vec![2023, 2024]);
    }

    #[test]
    fn groups_are_sorted_and_distinct() {
        assert_eq!(dataset().service_groups(), vec!["Imaging", "Laboratory"]);
    }

    #[test]
    fn year_header_without_parseable_values_yields_no_years() {
        // The header is present but no cell parses, so the year list is
        // empty and the UI must treat the file as unusable.
        let ds = Dataset::from_csv_str("t", "nam,thang\nx,1\n,2\n").unwrap();
        assert!(ds.columns().year);
        assert!(ds.years().is_empty());
    }

    #[test]
    fn filters_by_year() {
        let view = dataset().filter(&Selection {
            year: 2023,
            group: GroupFilter::All,
        });
        assert_eq!(view.len(), 3);
    }

    #[test]
    fn filters_by_year_and_group() {
        let view = dataset().filter(&Selection {
            year: 2023,
            group: GroupFilter::Only("Laboratory".to_string()),
        });
        assert_eq!(view.len(), 2);
        assert!(
            view.rows()
                .iter()
                .all(|r| r.service_group.as_deref() == Some("Laboratory"))
        );
    }

    #[test]
    fn all_sentinel_equals_no_group_filter() {
        let ds = dataset();
        let via_label = ds.filter(&Selection {
            year: 2023,
            group: GroupFilter::from_label("All"),
        });
        let unfiltered = ds.filter(&Selection {
            year: 2023,
            group: GroupFilter::All,
        });
        assert_eq!(via_label.len(), unfiltered.len());
        assert_eq!(via_label.rows(), unfiltered.rows());
    }

    #[test]
    fn empty_result_is_valid() {
        let view = dataset().filter(&Selection {
            year: 1999,
            group: GroupFilter::All,
        });
        assert!(view.is_empty());
        assert_eq!(view.head(100).len(), 0);
    }

    #[test]
    fn head_caps_at_row_count() {
        let view = dataset().filter(&Selection {
            year: 2023,
            group: GroupFilter::All,
        });
        assert_eq!(view.head(2).len(), 2);
        assert_eq!(view.head(100).len(), 3);
    }
}
