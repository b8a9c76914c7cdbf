//! Per-interaction aggregates over a filtered view
//!
//! Nothing here is persisted; every dashboard interaction and every CLI run
//! recomputes from the filtered rows. Grouping goes through `BTreeMap` so
//! equal-valued entries come out in a stable order.

use std::collections::{BTreeMap, HashSet};

use serde::Serialize;

use crate::filter::FilteredView;

/// KPI card numbers for one filtered view
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    /// Rows in the view
    pub rows: usize,
    /// Sum of parsed revenue
    pub total_revenue: f64,
    /// Mean of parsed revenue; `None` when no row carried a usable revenue
    pub mean_revenue: Option<f64>,
    /// Count of distinct admission-count values
    pub distinct_admissions: usize,
    /// Service group with the highest summed revenue
    pub top_group: Option<String>,
}

/// Revenue summed for one month
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthRevenue {
    pub month: u32,
    pub revenue: f64,
}

/// Revenue summed for one service group
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupRevenue {
    pub group: String,
    pub revenue: f64,
}

/// Row count for one service
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServiceCount {
    pub service: String,
    pub count: usize,
}

/// One service kind with its per-group revenue, for the sunburst hierarchy
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KindSlice {
    pub kind: String,
    pub total: f64,
    pub groups: Vec<GroupRevenue>,
}

/// Sort (name, value) pairs by value descending, name ascending on ties
fn sort_desc<T>(entries: BTreeMap<String, f64>, build: impl Fn(String, f64) -> T) -> Vec<T> {
    let mut pairs: Vec<(String, f64)> = entries.into_iter().collect();
    pairs.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    pairs.into_iter().map(|(name, value)| build(name, value)).collect()
}

impl FilteredView {
    /// KPI summary over the view
    pub fn summary(&self) -> Summary {
        let revenues: Vec<f64> = self.rows().iter().filter_map(|r| r.revenue).collect();
        let total_revenue: f64 = revenues.iter().sum();
        let mean_revenue = if revenues.is_empty() {
            None
        } else {
            Some(total_revenue / revenues.len() as f64)
        };

        let distinct_admissions = self
            .rows()
            .iter()
            .filter_map(|r| r.admissions)
            .collect::<HashSet<i64>>()
            .len();

        let top_group = self.top_groups_by_revenue(1).into_iter().next().map(|g| g.group);

        Summary {
            rows: self.len(),
            total_revenue,
            mean_revenue,
            distinct_admissions,
            top_group,
        }
    }

    /// Revenue per month, months ascending. Rows missing either field drop out.
    pub fn monthly_revenue(&self) -> Vec<MonthRevenue> {
        let mut by_month: BTreeMap<u32, f64> = BTreeMap::new();
        for row in self.rows() {
            if let (Some(month), Some(revenue)) = (row.month, row.revenue) {
                *by_month.entry(month).or_insert(0.0) += revenue;
            }
        }
        by_month
            .into_iter()
            .map(|(month, revenue)| MonthRevenue { month, revenue })
            .collect()
    }

    /// Top `n` service groups by summed revenue, descending
    pub fn top_groups_by_revenue(&self, n: usize) -> Vec<GroupRevenue> {
        let mut by_group: BTreeMap<String, f64> = BTreeMap::new();
        for row in self.rows() {
            if let (Some(group), Some(revenue)) = (row.service_group.as_deref(), row.revenue) {
                *by_group.entry(group.to_string()).or_insert(0.0) += revenue;
            }
        }
        let mut groups = sort_desc(by_group, |group, revenue| GroupRevenue { group, revenue });
        groups.truncate(n);
        groups
    }

    /// Top `n` services by row count, descending
    pub fn service_mix(&self, n: usize) -> Vec<ServiceCount> {
        let mut counts: BTreeMap<String, usize> = BTreeMap::new();
        for row in self.rows() {
            if let Some(service) = row.service.as_deref() {
                *counts.entry(service.to_string()).or_insert(0) += 1;
            }
        }
        let mut services: Vec<ServiceCount> = counts
            .into_iter()
            .map(|(service, count)| ServiceCount { service, count })
            .collect();
        services.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.service.cmp(&b.service)));
        services.truncate(n);
        services
    }

    /// Service kind -> service group hierarchy weighted by revenue.
    /// Rows missing kind, group or revenue drop out.
    pub fn kind_breakdown(&self) -> Vec<KindSlice> {
        let mut tree: BTreeMap<String, BTreeMap<String, f64>> = BTreeMap::new();
        for row in self.rows() {
            let (Some(kind), Some(group), Some(revenue)) =
                (row.service_kind.as_deref(), row.service_group.as_deref(), row.revenue)
            else {
                continue;
            };
            *tree
                .entry(kind.to_string())
                .or_default()
                .entry(group.to_string())
                .or_insert(0.0) += revenue;
        }

        let mut slices: Vec<KindSlice> = tree
            .into_iter()
            .map(|(kind, groups)| {
                let total = groups.values().sum();
                let groups = sort_desc(groups, |group, revenue| GroupRevenue { group, revenue });
                KindSlice { kind, total, groups }
            })
            .collect();
        slices.sort_by(|a, b| b.total.partial_cmp(&a.total).unwrap_or(std::cmp::Ordering::Equal));
        slices
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::{GroupFilter, Selection};
    use crate::loader::Dataset;

    fn view() -> FilteredView {
        let csv = "\
nam,thang,tongdoanhthu,sotiepnhan,tennhomdichvu,tendichvu,loai_dich_vu
2023,1,\"1,500,000\",100,Laboratory,Blood test,Outpatient
2023,1,\"500,000\",120,Imaging,Chest X-ray,Inpatient
2023,2,\"2,000,000\",100,Laboratory,Blood test,Outpatient
2023,2,not-a-number,90,Imaging,MRI scan,Inpatient
2023,3,\"1,000,000\",80,Pharmacy,Dispensing,Outpatient
";
        Dataset::from_csv_str("t", csv)
            .unwrap()
            .filter(&Selection {
                year: 2023,
                group: GroupFilter::All,
            })
    }

    #[test]
    fn summary_counts_and_totals() {
        let summary = view().summary();
        assert_eq!(summary.rows, 5);
        assert_eq!(summary.total_revenue, 5_000_000.0);
        // 4 rows carried usable revenue
        assert_eq!(summary.mean_revenue, Some(1_250_000.0));
        // admission values: {100, 120, 90, 80}
        assert_eq!(summary.distinct_admissions, 4);
        assert_eq!(summary.top_group.as_deref(), Some("Laboratory"));
    }

    #[test]
    fn summing_twice_is_idempotent() {
        let v = view();
        assert_eq!(v.summary().total_revenue, v.summary().total_revenue);
    }

    #[test]
    fn monthly_revenue_sorted_and_summed() {
        let monthly = view().monthly_revenue();
        assert_eq!(monthly.len(), 3);
        assert_eq!(monthly[0].month, 1);
        assert_eq!(monthly[0].revenue, 2_000_000.0);
        // The unparseable revenue row drops out of month 2
        assert_eq!(monthly[1].month, 2);
        assert_eq!(monthly[1].revenue, 2_000_000.0);
        assert_eq!(monthly[2].month, 3);
        assert_eq!(monthly[2].revenue, 1_000_000.0);
    }

    #[test]
    fn top_groups_descending_and_capped() {
        let groups = view().top_groups_by_revenue(2);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].group, "Laboratory");
        assert_eq!(groups[0].revenue, 3_500_000.0);
        assert_eq!(groups[1].group, "Pharmacy");
    }

    #[test]
    fn service_mix_counts_rows() {
        let mix = view().service_mix(10);
        assert_eq!(mix[0].service, "Blood test");
        assert_eq!(mix[0].count, 2);
        assert_eq!(mix.len(), 4);
    }

    #[test]
    fn kind_breakdown_totals_match_groups() {
        let slices = view().kind_breakdown();
        assert_eq!(slices.len(), 2);

        let outpatient = slices.iter().find(|s| s.kind == "Outpatient").unwrap();
        assert_eq!(outpatient.total, 4_500_000.0);
        let group_sum: f64 = outpatient.groups.iter().map(|g| g.revenue).sum();
        assert_eq!(outpatient.total, group_sum);

        // The MRI row lost its revenue to cleaning, so Inpatient only carries X-ray
        let inpatient = slices.iter().find(|s| s.kind == "Inpatient").unwrap();
        assert_eq!(inpatient.total, 500_000.0);
    }

    #[test]
    fn aggregates_on_empty_view_are_empty() {
        let csv = "nam,thang,tongdoanhthu\n2023,1,100\n";
        let empty = Dataset::from_csv_str("t", csv)
            .unwrap()
            .filter(&Selection {
                year: 1999,
                group: GroupFilter::All,
            });

        let summary = empty.summary();
        assert_eq!(summary.rows, 0);
        assert_eq!(summary.total_revenue, 0.0);
        assert_eq!(summary.mean_revenue, None);
        assert!(summary.top_group.is_none());
        assert!(empty.monthly_revenue().is_empty());
        assert!(empty.kind_breakdown().is_empty());
    }
}
