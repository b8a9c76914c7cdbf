//! WardView offline reporting
//!
//! Loads the same hospital service CSV the dashboard consumes and produces
//! the same aggregates as console summaries and CSV report files.

mod report;

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use wardview_core::{Dataset, GroupFilter, Selection, constants};

#[derive(Parser, Debug)]
#[command(name = "wardview")]
#[command(about = "Offline reports for WardView hospital revenue data")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the KPI summary and aggregate breakdowns
    Summary {
        /// Path to the service export CSV
        #[arg(long)]
        csv: PathBuf,

        /// Year to analyze (default: latest year in the file)
        #[arg(long)]
        year: Option<i32>,

        /// Restrict to one service group
        #[arg(long)]
        group: Option<String>,

        /// Emit the summary as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Write aggregate CSV reports
    Report {
        /// Path to the service export CSV
        #[arg(long)]
        csv: PathBuf,

        /// Year to analyze (default: latest year in the file)
        #[arg(long)]
        year: Option<i32>,

        /// Restrict to one service group
        #[arg(long)]
        group: Option<String>,

        /// Output directory for generated CSV reports
        #[arg(short, long, default_value = "./output")]
        out: PathBuf,
    },

    /// Check a CSV for the expected columns
    Check {
        /// Path to the service export CSV
        #[arg(long)]
        csv: PathBuf,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    match args.command {
        Command::Summary {
            csv,
            year,
            group,
            json,
        } => {
            let dataset = load_dataset(&csv)?;
            let Some(view) = filter_or_warn(&dataset, year, group)? else {
                return Ok(());
            };

            if json {
                println!("{}", serde_json::to_string_pretty(&view.summary())?);
            } else {
                report::print_summary(&dataset, &view);
            }
            Ok(())
        }

        Command::Report {
            csv,
            year,
            group,
            out,
        } => {
            let dataset = load_dataset(&csv)?;
            let Some(view) = filter_or_warn(&dataset, year, group)? else {
                return Ok(());
            };

            std::fs::create_dir_all(&out)
                .with_context(|| format!("failed to create {}", out.display()))?;
            report::write_reports(&out, &view)?;

            println!("Reports written to: {}", out.display());
            Ok(())
        }

        Command::Check { csv } => {
            let dataset = load_dataset(&csv)?;
            let columns = dataset.columns();

            println!("{}: {} rows", dataset.name(), dataset.len());
            let missing = columns.missing();
            if missing.is_empty() {
                println!("All expected columns present.");
            } else {
                println!("Missing columns: {}", missing.join(", "));
            }

            // The year column is the one the dashboard cannot work without
            if !columns.year {
                bail!("column '{}' is required for analysis", constants::COL_YEAR);
            }
            Ok(())
        }
    }
}

/// Load a dataset, turning loader failures into user-facing messages
fn load_dataset(path: &PathBuf) -> Result<Dataset> {
    let dataset = Dataset::from_path(path)?;
    println!(
        "Loaded {}: {} rows, years {:?}\n",
        dataset.name(),
        dataset.len(),
        dataset.years()
    );
    Ok(dataset)
}

/// Resolve the selection and filter. Returns `None` (after printing a
/// warning) when the filter matches nothing. An empty match is an outcome,
/// not an error.
fn filter_or_warn(
    dataset: &Dataset,
    year: Option<i32>,
    group: Option<String>,
) -> Result<Option<wardview_core::FilteredView>> {
    if !dataset.columns().year {
        bail!(
            "CSV has no '{}' column; check the file against the expected format",
            constants::COL_YEAR
        );
    }

    let year = match year {
        Some(y) => y,
        None => *dataset
            .years()
            .last()
            .context("no usable year values in the file")?,
    };

    let group = match group {
        Some(name) => GroupFilter::Only(name),
        None => GroupFilter::All,
    };

    let selection = Selection { year, group };
    let view = dataset.filter(&selection);

    if view.is_empty() {
        match selection.group.selected() {
            Some(name) => println!("No data for year {} and service group '{}'.", year, name),
            None => println!("No data for year {}.", year),
        }
        return Ok(None);
    }

    Ok(Some(view))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_year_column_halts_analysis() {
        let dataset = Dataset::from_csv_str("t", "thang,tongdoanhthu\n1,100\n").unwrap();
        let err = filter_or_warn(&dataset, None, None).unwrap_err();
        assert!(err.to_string().contains("nam"));
    }

    #[test]
    fn unparseable_year_values_are_an_error() {
        // Header present, but no cell parses as a year
        let dataset = Dataset::from_csv_str("t", "nam,thang\nx,1\n,2\n").unwrap();
        let err = filter_or_warn(&dataset, None, None).unwrap_err();
        assert!(err.to_string().contains("no usable year values"));
    }

    #[test]
    fn empty_match_is_a_warning_not_an_error() {
        let dataset = Dataset::from_csv_str("t", "nam,thang\n2023,1\n").unwrap();
        let view = filter_or_warn(&dataset, Some(1999), None).unwrap();
        assert!(view.is_none());
    }

    #[test]
    fn explicit_year_and_group_filter_apply() {
        let csv = "nam,thang,tennhomdichvu\n2023,1,Laboratory\n2023,2,Imaging\n";
        let dataset = Dataset::from_csv_str("t", csv).unwrap();
        let view = filter_or_warn(&dataset, Some(2023), Some("Imaging".to_string()))
            .unwrap()
            .unwrap();
        assert_eq!(view.len(), 1);
    }
}
