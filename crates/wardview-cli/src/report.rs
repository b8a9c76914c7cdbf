//! Report generation (CSV outputs and console summary)

use std::path::Path;

use anyhow::Result;
use csv::Writer;
use tabled::settings::Style;
use tabled::{Table, Tabled};
use wardview_core::format::{format_count, format_vnd};
use wardview_core::{Dataset, FilteredView, constants};

/// One KPI line in the console summary table
#[derive(Tabled)]
struct KpiRow {
    #[tabled(rename = "Metric")]
    metric: &'static str,
    #[tabled(rename = "Value")]
    value: String,
}

/// Print the KPI summary plus the aggregate breakdowns
pub fn print_summary(dataset: &Dataset, view: &FilteredView) {
    let summary = view.summary();

    let rows = vec![
        KpiRow {
            metric: "Records",
            value: format_count(summary.rows as i64),
        },
        KpiRow {
            metric: "Total revenue (VND)",
            value: format_vnd(summary.total_revenue),
        },
        KpiRow {
            metric: "Mean revenue (VND)",
            value: summary
                .mean_revenue
                .map(format_vnd)
                .unwrap_or_else(|| "-".to_string()),
        },
        KpiRow {
            metric: "Distinct admission counts",
            value: format_count(summary.distinct_admissions as i64),
        },
        KpiRow {
            metric: "Top service group",
            value: summary.top_group.unwrap_or_else(|| "-".to_string()),
        },
    ];

    println!("{}", Table::new(rows).with(Style::sharp()));

    let monthly = view.monthly_revenue();
    if !monthly.is_empty() {
        println!("\nMonthly revenue:");
        for entry in &monthly {
            println!(
                "  {:>2}: {:>18} VND",
                entry.month,
                format_vnd(entry.revenue)
            );
        }
    }

    let groups = view.top_groups_by_revenue(constants::TOP_GROUPS);
    if !groups.is_empty() {
        println!("\nTop service groups by revenue:");
        for entry in &groups {
            println!(
                "  {:<30} {:>18} VND",
                truncate(&entry.group, 30),
                format_vnd(entry.revenue)
            );
        }
    }

    println!(
        "\n{} of {} rows matched the selection",
        view.len(),
        dataset.len()
    );
}

/// Write all aggregate CSV reports into `out`
pub fn write_reports(out: &Path, view: &FilteredView) -> Result<()> {
    write_monthly_revenue(out, view)?;
    write_group_revenue(out, view)?;
    write_service_mix(out, view)?;
    Ok(())
}

/// Generate monthly_revenue.csv
fn write_monthly_revenue(out: &Path, view: &FilteredView) -> Result<()> {
    let mut wtr = Writer::from_path(out.join(constants::MONTHLY_REVENUE_FILENAME))?;
    wtr.write_record(["Month", "Revenue_VND"])?;
    for entry in view.monthly_revenue() {
        wtr.write_record([entry.month.to_string(), format!("{:.0}", entry.revenue)])?;
    }
    wtr.flush()?;
    Ok(())
}

/// Generate group_revenue.csv
fn write_group_revenue(out: &Path, view: &FilteredView) -> Result<()> {
    let mut wtr = Writer::from_path(out.join(constants::GROUP_REVENUE_FILENAME))?;
    wtr.write_record(["Service_Group", "Revenue_VND"])?;
    for entry in view.top_groups_by_revenue(usize::MAX) {
        wtr.write_record([entry.group, format!("{:.0}", entry.revenue)])?;
    }
    wtr.flush()?;
    Ok(())
}

/// Generate service_mix.csv
fn write_service_mix(out: &Path, view: &FilteredView) -> Result<()> {
    let mut wtr = Writer::from_path(out.join(constants::SERVICE_MIX_FILENAME))?;
    wtr.write_record(["Service", "Count"])?;
    for entry in view.service_mix(usize::MAX) {
        wtr.write_record([entry.service, entry.count.to_string()])?;
    }
    wtr.flush()?;
    Ok(())
}

/// Truncate string for display
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", cut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_keeps_short_strings() {
        assert_eq!(truncate("Laboratory", 30), "Laboratory");
        assert_eq!(truncate("A very long service group name", 10), "A very ...");
    }
}
