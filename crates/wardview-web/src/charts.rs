//! Chart spec builders
//!
//! Pure functions from aggregates to charming chart specs. Rendering happens
//! in [`crate::components::ChartPanel`], so everything here also runs (and is
//! tested) natively.

use charming::Chart;
use charming::component::Axis;
use charming::datatype::DataPointItem;
use charming::element::{AxisType, Tooltip, Trigger};
use charming::series::{Bar, Line, Pie, Sunburst, SunburstNode};
use wardview_core::{GroupRevenue, KindSlice, MonthRevenue, ServiceCount};

/// Zero-padded month labels for the trend x-axis
fn month_labels(points: &[MonthRevenue]) -> Vec<String> {
    points.iter().map(|p| format!("{:02}", p.month)).collect()
}

/// Bar chart rows, reversed so the largest group renders at the top of a
/// horizontal category axis.
fn bar_rows(groups: &[GroupRevenue]) -> (Vec<String>, Vec<f64>) {
    let names = groups.iter().rev().map(|g| g.group.clone()).collect();
    let revenue = groups.iter().rev().map(|g| g.revenue).collect();
    (names, revenue)
}

/// Revenue per month as a smoothed line
pub fn monthly_revenue(points: &[MonthRevenue]) -> Chart {
    let revenue: Vec<f64> = points.iter().map(|p| p.revenue).collect();
    Chart::new()
        .tooltip(Tooltip::new().trigger(Trigger::Axis))
        .x_axis(Axis::new().type_(AxisType::Category).data(month_labels(points)))
        .y_axis(Axis::new().type_(AxisType::Value).name("VND"))
        .series(Line::new().name("Revenue").data(revenue).smooth(0.3))
}

/// Top service groups as horizontal bars
pub fn group_revenue(groups: &[GroupRevenue]) -> Chart {
    let (names, revenue) = bar_rows(groups);
    Chart::new()
        .tooltip(Tooltip::new().trigger(Trigger::Axis))
        .x_axis(Axis::new().type_(AxisType::Value).name("VND"))
        .y_axis(Axis::new().type_(AxisType::Category).data(names))
        .series(Bar::new().name("Revenue").data(revenue))
}

/// Service volume share as a donut
pub fn service_mix(services: &[ServiceCount]) -> Chart {
    let slices: Vec<DataPointItem> = services
        .iter()
        .map(|s| DataPointItem::new(s.count as f64).name(s.service.clone()))
        .collect();
    Chart::new()
        .tooltip(Tooltip::new().trigger(Trigger::Item))
        .series(Pie::new().name("Services").radius(vec!["35%", "70%"]).data(slices))
}

/// Service kind -> service group hierarchy as a sunburst
pub fn kind_breakdown(slices: &[KindSlice]) -> Chart {
    let nodes: Vec<SunburstNode> = slices
        .iter()
        .map(|slice| {
            let children = slice
                .groups
                .iter()
                .map(|g| SunburstNode::new(g.group.as_str()).value(g.revenue))
                .collect();
            SunburstNode::new(slice.kind.as_str()).children(children)
        })
        .collect();
    Chart::new()
        .tooltip(Tooltip::new().trigger(Trigger::Item))
        .series(Sunburst::new().radius(("15%", "90%")).data(nodes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_labels_are_zero_padded() {
        let points = vec![
            MonthRevenue { month: 1, revenue: 10.0 },
            MonthRevenue { month: 12, revenue: 20.0 },
        ];
        assert_eq!(month_labels(&points), vec!["01", "12"]);
    }

    #[test]
    fn bar_rows_put_largest_group_last() {
        // Input arrives revenue-descending; category axes render bottom-up,
        // so the largest group must come last to sit on top.
        let groups = vec![
            GroupRevenue { group: "Laboratory".into(), revenue: 300.0 },
            GroupRevenue { group: "Imaging".into(), revenue: 100.0 },
        ];
        let (names, revenue) = bar_rows(&groups);
        assert_eq!(names, vec!["Imaging", "Laboratory"]);
        assert_eq!(revenue, vec![100.0, 300.0]);
    }
}
