//! Centralized constants for the WardView data pipeline
//!
//! The column names come from the hospital billing export and are checked for
//! presence only; anything beyond the expected set is carried through untouched.

// =============================================================================
// Expected CSV Columns
// =============================================================================

/// Year of the transaction
pub const COL_YEAR: &str = "nam";

/// Month of the transaction (1-12)
pub const COL_MONTH: &str = "thang";

/// Raw revenue text (may carry thousands separators)
pub const COL_REVENUE: &str = "tongdoanhthu";

/// Admission count
pub const COL_ADMISSIONS: &str = "sotiepnhan";

/// Service group name
pub const COL_SERVICE_GROUP: &str = "tennhomdichvu";

/// Service name
pub const COL_SERVICE: &str = "tendichvu";

/// Service kind (inpatient/outpatient)
pub const COL_SERVICE_KIND: &str = "loai_dich_vu";

/// Raw admission date string
pub const COL_DATE: &str = "ngay_tiep_nhan";

/// All expected columns, in the order the export usually carries them
pub const EXPECTED_COLUMNS: [&str; 8] = [
    COL_YEAR,
    COL_MONTH,
    COL_REVENUE,
    COL_ADMISSIONS,
    COL_SERVICE_GROUP,
    COL_SERVICE,
    COL_SERVICE_KIND,
    COL_DATE,
];

// =============================================================================
// Presentation Defaults
// =============================================================================

/// How many service groups the bar chart shows
pub const TOP_GROUPS: usize = 10;

/// How many services the pie chart shows
pub const TOP_SERVICES: usize = 10;

/// How many rows the detail table shows
pub const DETAIL_TABLE_ROWS: usize = 100;

// =============================================================================
// Report File Names
// =============================================================================

/// Monthly revenue report filename
pub const MONTHLY_REVENUE_FILENAME: &str = "monthly_revenue.csv";

/// Group revenue report filename
pub const GROUP_REVENUE_FILENAME: &str = "group_revenue.csv";

/// Service mix report filename
pub const SERVICE_MIX_FILENAME: &str = "service_mix.csv";
