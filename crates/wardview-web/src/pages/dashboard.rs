use leptos::prelude::*;
use wardview_core::format::{format_count, format_vnd};
use wardview_core::{GroupFilter, Summary, constants};

use crate::charts;
use crate::components::{ChartPanel, DataTable, KpiCard, Section, Sidebar, Welcome};
use crate::state::DashboardState;

#[derive(Clone, Copy, PartialEq)]
enum Tab {
    Revenue,
    Services,
    Kinds,
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let state = DashboardState::new();
    provide_context(state);

    view! {
        <div class="layout">
            <Sidebar />
            <main class="content">
                {move || match state.dataset.get() {
                    None => view! { <Welcome /> }.into_any(),
                    Some(dataset) if !dataset.columns().year => {
                        view! {
                            <div class="banner banner-error">
                                <strong>"Cannot analyze this file."</strong>
                                {format!(
                                    " The '{}' (year) column is missing. Compare the export against the expected format.",
                                    constants::COL_YEAR,
                                )}
                            </div>
                            <Welcome />
                        }
                            .into_any()
                    }
                    Some(_) if state.years.get().is_empty() => {
                        view! {
                            <div class="banner banner-error">
                                <strong>"No usable year values in this file."</strong>
                                {format!(
                                    " No row's '{}' cell parsed as a year, so there is nothing to analyze.",
                                    constants::COL_YEAR,
                                )}
                            </div>
                            <Welcome />
                        }
                            .into_any()
                    }
                    Some(_) => view! { <DashboardBody /> }.into_any(),
                }}
            </main>
        </div>
    }
}

#[component]
fn DashboardBody() -> impl IntoView {
    let state = expect_context::<DashboardState>();

    view! {
        <header class="page-header">
            <h1>"Revenue overview"</h1>
            <div class="subtitle">
                {move || {
                    let year = state
                        .selected_year
                        .get()
                        .map(|y| y.to_string())
                        .unwrap_or_default();
                    let records = state
                        .view
                        .get()
                        .map(|v| format_count(v.len() as i64))
                        .unwrap_or_default();
                    match GroupFilter::from_label(&state.selected_group.get()).selected() {
                        Some(group) => {
                            format!("Year {year}, service group '{group}', {records} records")
                        }
                        None => format!("Year {year}, all service groups, {records} records"),
                    }
                }}
            </div>
        </header>

        {move || match state.view.get() {
            Some(view) if view.is_empty() => {
                let year = state
                    .selected_year
                    .get()
                    .map(|y| y.to_string())
                    .unwrap_or_default();
                let message = match GroupFilter::from_label(&state.selected_group.get())
                    .selected()
                {
                    Some(group) => {
                        format!("No data for year {year} and service group '{group}'.")
                    }
                    None => format!("No data for year {year}."),
                };
                view! {
                    <div class="banner banner-warn">
                        {message} " Adjust the filters in the sidebar."
                    </div>
                }
                    .into_any()
            }
            Some(_) => view! { <AnalysisContent /> }.into_any(),
            None => ().into_any(),
        }}
    }
}

#[component]
fn AnalysisContent() -> impl IntoView {
    let state = expect_context::<DashboardState>();
    let summary = Memo::new(move |_| state.view.get().map(|v| v.summary()));
    let tab = RwSignal::new(Tab::Revenue);

    let monthly = Callback::new(move |()| {
        state.view.get().and_then(|view| {
            let points = view.monthly_revenue();
            if points.is_empty() { None } else { Some(charts::monthly_revenue(&points)) }
        })
    });
    let groups = Callback::new(move |()| {
        state.view.get().and_then(|view| {
            let entries = view.top_groups_by_revenue(constants::TOP_GROUPS);
            if entries.is_empty() { None } else { Some(charts::group_revenue(&entries)) }
        })
    });
    let services = Callback::new(move |()| {
        state.view.get().and_then(|view| {
            let entries = view.service_mix(constants::TOP_SERVICES);
            if entries.is_empty() { None } else { Some(charts::service_mix(&entries)) }
        })
    });
    let kinds = Callback::new(move |()| {
        state.view.get().and_then(|view| {
            let slices = view.kind_breakdown();
            if slices.is_empty() { None } else { Some(charts::kind_breakdown(&slices)) }
        })
    });

    view! {
        <KpiCards summary=summary />

        <div class="tabs">
            <TabButton tab=Tab::Revenue current=tab label="Revenue trend" />
            <TabButton tab=Tab::Services current=tab label="Service structure" />
            <TabButton tab=Tab::Kinds current=tab label="Kind breakdown" />
        </div>

        {move || match tab.get() {
            Tab::Revenue => {
                view! {
                    <ChartPanel
                        id="chart-monthly"
                        title="Monthly revenue"
                        build_chart=monthly
                        empty_message="No rows carry both a month and a readable revenue."
                    />
                }
                    .into_any()
            }
            Tab::Services => {
                view! {
                    <ChartPanel
                        id="chart-groups"
                        title="Top service groups by revenue"
                        build_chart=groups
                        empty_message="No rows carry both a service group and a readable revenue."
                    />
                    <ChartPanel
                        id="chart-services"
                        title="Top services by volume"
                        build_chart=services
                        empty_message="No rows carry a service name."
                    />
                }
                    .into_any()
            }
            Tab::Kinds => {
                view! {
                    <ChartPanel
                        id="chart-kinds"
                        title="Revenue by service kind and group"
                        build_chart=kinds
                        empty_message="No rows carry a service kind, group and readable revenue together."
                    />
                }
                    .into_any()
            }
        }}

        {move || {
            state
                .show_details
                .get()
                .then(|| {
                    view! {
                        <Section id="details" title="Detail rows">
                            <DataTable />
                        </Section>
                    }
                })
        }}
    }
}

#[component]
fn KpiCards(summary: Memo<Option<Summary>>) -> impl IntoView {
    view! {
        <div class="kpi-grid">
            {move || {
                summary.get().map(|s| {
                    view! {
                        <KpiCard label="Total revenue (VND)" value=format_vnd(s.total_revenue) />
                        <KpiCard
                            label="Mean revenue (VND)"
                            value=s.mean_revenue.map(format_vnd).unwrap_or_else(|| "-".to_string())
                        />
                        <KpiCard label="Records" value=format_count(s.rows as i64) />
                        <KpiCard
                            label="Distinct admission counts"
                            value=format_count(s.distinct_admissions as i64)
                        />
                        <KpiCard
                            label="Top service group"
                            value=s.top_group.unwrap_or_else(|| "-".to_string())
                        />
                    }
                })
            }}
        </div>
    }
}

#[component]
fn TabButton(tab: Tab, current: RwSignal<Tab>, label: &'static str) -> impl IntoView {
    view! {
        <button
            class="tab"
            class=("tab-active", move || current.get() == tab)
            on:click=move |_| current.set(tab)
        >
            {label}
        </button>
    }
}
