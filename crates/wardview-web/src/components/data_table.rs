use leptos::prelude::*;
use wardview_core::format::{format_count, format_vnd};
use wardview_core::{Record, constants};

use crate::state::DashboardState;

fn text_cell(value: Option<String>) -> String {
    value.unwrap_or_default()
}

/// First rows of the filtered view, capped so a large export cannot swamp
/// the DOM.
#[component]
pub fn DataTable() -> impl IntoView {
    let state = expect_context::<DashboardState>();

    view! {
        {move || {
            state.view.get().map(|view| {
                let total = view.len();
                let rows: Vec<Record> = view.head(constants::DETAIL_TABLE_ROWS).to_vec();
                let shown = rows.len();
                view! {
                    <table class="detail-table">
                        <thead>
                            <tr>
                                <th>"Year"</th>
                                <th>"Month"</th>
                                <th>"Service group"</th>
                                <th>"Service"</th>
                                <th>"Kind"</th>
                                <th class="num">"Revenue (VND)"</th>
                                <th class="num">"Admissions"</th>
                                <th>"Admitted on"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {rows
                                .into_iter()
                                .map(|row| {
                                    view! {
                                        <tr>
                                            <td>{text_cell(row.year.map(|y| y.to_string()))}</td>
                                            <td>{text_cell(row.month.map(|m| m.to_string()))}</td>
                                            <td>{text_cell(row.service_group)}</td>
                                            <td>{text_cell(row.service)}</td>
                                            <td>{text_cell(row.service_kind)}</td>
                                            <td class="num">
                                                {text_cell(row.revenue.map(format_vnd))}
                                            </td>
                                            <td class="num">
                                                {text_cell(row.admissions.map(format_count))}
                                            </td>
                                            <td>
                                                {text_cell(row.admitted_on.map(|d| d.to_string()))}
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect_view()}
                        </tbody>
                    </table>
                    {(total > shown)
                        .then(|| {
                            view! {
                                <div class="table-caption">
                                    {format!("Showing first {shown} of {total} rows")}
                                </div>
                            }
                        })}
                }
            })
        }}
    }
}
