use leptos::ev::Event;
use leptos::logging;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlInputElement;

use crate::config::CONFIG;
use crate::state::{DashboardState, MAX_CHART_HEIGHT, MIN_CHART_HEIGHT};
use wardview_core::GroupFilter;

/// Upload control plus the filter and display options
#[component]
pub fn Sidebar() -> impl IntoView {
    let state = expect_context::<DashboardState>();

    let on_upload = move |ev: Event| {
        let Some(input) = ev.target().and_then(|t| t.dyn_into::<HtmlInputElement>().ok()) else {
            return;
        };
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        let name = file.name();
        spawn_local(async move {
            match JsFuture::from(file.text()).await {
                Ok(text) => {
                    let text = text.as_string().unwrap_or_default();
                    state.load_csv(&name, &text);
                }
                Err(err) => {
                    logging::error!("could not read {name}: {err:?}");
                    state.load_error.set(Some(format!("Could not read '{name}'.")));
                }
            }
        });
    };

    view! {
        <aside class="sidebar">
            <div class="brand">
                <h1>{CONFIG.name}</h1>
                <div class="tagline">{CONFIG.tagline}</div>
            </div>

            <div class="control">
                <label for="csv-upload">"Service export (CSV)"</label>
                <input id="csv-upload" type="file" accept=".csv,text/csv" on:change=on_upload />
            </div>

            {move || {
                state
                    .load_error
                    .get()
                    .map(|msg| view! { <div class="banner banner-error">{msg}</div> })
            }}

            {move || {
                state.dataset.get().map(|dataset| {
                    view! {
                        <div class="loaded-note">
                            {format!("{}: {} rows", dataset.name(), dataset.len())}
                        </div>

                        <div class="control">
                            <label for="year-select">"Year"</label>
                            <select
                                id="year-select"
                                on:change=move |ev| {
                                    if let Ok(year) = event_target_value(&ev).parse::<i32>() {
                                        state.selected_year.set(Some(year));
                                    }
                                }
                            >
                                {move || {
                                    state
                                        .years
                                        .get()
                                        .into_iter()
                                        .map(|year| {
                                            view! {
                                                <option
                                                    value=year.to_string()
                                                    selected=move || state.selected_year.get() == Some(year)
                                                >
                                                    {year}
                                                </option>
                                            }
                                        })
                                        .collect_view()
                                }}
                            </select>
                        </div>

                        <div class="control">
                            <label for="group-select">"Service group"</label>
                            <select
                                id="group-select"
                                on:change=move |ev| state.selected_group.set(event_target_value(&ev))
                            >
                                <option
                                    value=GroupFilter::ALL_LABEL
                                    selected=move || state.selected_group.get() == GroupFilter::ALL_LABEL
                                >
                                    "All"
                                </option>
                                {move || {
                                    state
                                        .groups
                                        .get()
                                        .into_iter()
                                        .map(|group| {
                                            let selected = {
                                                let group = group.clone();
                                                move || state.selected_group.get() == group
                                            };
                                            view! {
                                                <option value=group.clone() selected=selected>
                                                    {group.clone()}
                                                </option>
                                            }
                                        })
                                        .collect_view()
                                }}
                            </select>
                        </div>

                        <div class="control">
                            <label class="check">
                                <input
                                    type="checkbox"
                                    prop:checked=move || state.show_details.get()
                                    on:change=move |ev| state.show_details.set(event_target_checked(&ev))
                                />
                                " Show detail table"
                            </label>
                        </div>

                        <div class="control">
                            <label for="height-range">
                                "Chart height: " {move || state.chart_height.get()} "px"
                            </label>
                            <input
                                id="height-range"
                                type="range"
                                min=MIN_CHART_HEIGHT.to_string()
                                max=MAX_CHART_HEIGHT.to_string()
                                step="10"
                                prop:value=move || state.chart_height.get().to_string()
                                on:input=move |ev| {
                                    if let Ok(height) = event_target_value(&ev).parse::<u32>() {
                                        state.chart_height.set(height);
                                    }
                                }
                            />
                        </div>

                        <button class="reset" on:click=move |_| state.reset()>
                            "Reset data"
                        </button>
                    }
                })
            }}
        </aside>
    }
}
