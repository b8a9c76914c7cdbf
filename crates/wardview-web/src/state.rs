//! Session state shared across the dashboard components

use std::sync::Arc;

use leptos::logging;
use leptos::prelude::*;
use wardview_core::{Dataset, DatasetCache, FilteredView, GroupFilter, Selection};

pub const MIN_CHART_HEIGHT: u32 = 300;
pub const MAX_CHART_HEIGHT: u32 = 600;
pub const DEFAULT_CHART_HEIGHT: u32 = 400;

/// Every signal the dashboard reacts to, provided once as context.
///
/// `dataset` holds the parsed upload; `view` re-derives whenever the dataset
/// or a filter changes. Everything recomputes per interaction, nothing is
/// persisted beyond the in-memory [`DatasetCache`].
#[derive(Clone, Copy)]
pub struct DashboardState {
    cache: StoredValue<DatasetCache>,
    pub dataset: RwSignal<Option<Arc<Dataset>>>,
    pub load_error: RwSignal<Option<String>>,
    pub selected_year: RwSignal<Option<i32>>,
    pub selected_group: RwSignal<String>,
    pub show_details: RwSignal<bool>,
    pub chart_height: RwSignal<u32>,
    pub years: Memo<Vec<i32>>,
    pub groups: Memo<Vec<String>>,
    pub view: Memo<Option<FilteredView>>,
}

impl DashboardState {
    pub fn new() -> Self {
        let cache = StoredValue::new(DatasetCache::new());
        let dataset = RwSignal::new(None::<Arc<Dataset>>);
        let load_error = RwSignal::new(None::<String>);
        let selected_year = RwSignal::new(None::<i32>);
        let selected_group = RwSignal::new(GroupFilter::ALL_LABEL.to_string());
        let show_details = RwSignal::new(true);
        let chart_height = RwSignal::new(DEFAULT_CHART_HEIGHT);

        let years = Memo::new(move |_| {
            dataset.get().map(|d| d.years()).unwrap_or_default()
        });
        let groups = Memo::new(move |_| {
            dataset.get().map(|d| d.service_groups()).unwrap_or_default()
        });

        let view = Memo::new(move |_| {
            match (dataset.get(), selected_year.get()) {
                (Some(dataset), Some(year)) => {
                    let selection = Selection {
                        year,
                        group: GroupFilter::from_label(&selected_group.get()),
                    };
                    Some(dataset.filter(&selection))
                }
                _ => None,
            }
        });

        // A new upload defaults the year selector to the latest year present
        Effect::new(move |_| {
            let years = years.get();
            if let Some(current) = selected_year.get_untracked() {
                if years.contains(&current) {
                    return;
                }
            }
            selected_year.set(years.last().copied());
        });

        // Drop a group selection that no longer exists in the data
        Effect::new(move |_| {
            let groups = groups.get();
            let current = selected_group.get_untracked();
            if current != GroupFilter::ALL_LABEL && !groups.contains(&current) {
                selected_group.set(GroupFilter::ALL_LABEL.to_string());
            }
        });

        Self {
            cache,
            dataset,
            load_error,
            selected_year,
            selected_group,
            show_details,
            chart_height,
            years,
            groups,
            view,
        }
    }

    /// Parse an uploaded file, going through the content-keyed cache so
    /// re-uploading the same bytes does not re-parse.
    pub fn load_csv(&self, name: &str, text: &str) {
        let Some(result) = self.cache.try_update_value(|cache| cache.load(name, text)) else {
            return;
        };
        match result {
            Ok(dataset) => {
                logging::log!("loaded {}: {} rows", dataset.name(), dataset.len());
                self.load_error.set(None);
                self.dataset.set(Some(dataset));
            }
            Err(err) => {
                logging::error!("failed to parse {name}: {err}");
                self.dataset.set(None);
                self.load_error.set(Some(format!("Could not read '{name}': {err}")));
            }
        }
    }

    /// Forget the upload and return every control to its initial state
    pub fn reset(&self) {
        let _ = self.cache.try_update_value(|cache| cache.clear());
        self.dataset.set(None);
        self.load_error.set(None);
        self.selected_year.set(None);
        self.selected_group.set(GroupFilter::ALL_LABEL.to_string());
        self.show_details.set(true);
        self.chart_height.set(DEFAULT_CHART_HEIGHT);
    }
}
