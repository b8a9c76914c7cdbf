//! Data pipeline for the WardView hospital revenue dashboard
//!
//! Everything here is session-scoped and in-memory: a CSV is parsed into a
//! [`Dataset`], cleaned fields are derived once at load time, and the
//! filter/aggregate stages recompute their outputs on every interaction.
//! The crate compiles for both native targets (CLI) and `wasm32` (browser).

pub mod aggregate;
pub mod clean;
pub mod constants;
pub mod filter;
pub mod format;
pub mod loader;
pub mod records;

pub use aggregate::{GroupRevenue, KindSlice, MonthRevenue, ServiceCount, Summary};
pub use filter::{FilteredView, GroupFilter, Selection};
pub use loader::{Dataset, DatasetCache, LoadError};
pub use records::{Columns, Record};
