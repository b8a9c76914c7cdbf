mod chart_panel;
mod data_table;
mod kpi;
mod section;
mod sidebar;
mod welcome;

pub use chart_panel::ChartPanel;
pub use data_table::DataTable;
pub use kpi::KpiCard;
pub use section::Section;
pub use sidebar::Sidebar;
pub use welcome::Welcome;
