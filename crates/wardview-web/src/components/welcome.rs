use leptos::prelude::*;

use crate::components::Section;
use crate::config::CONFIG;

/// Rows shown as a format example before anything is uploaded
const SAMPLE_ROWS: &[[&str; 5]] = &[
    ["2023", "1", "1,500,000", "Xét nghiệm", "Công thức máu"],
    ["2023", "1", "850,000", "Chẩn đoán hình ảnh", "X-quang phổi"],
    ["2023", "2", "2,300,000", "Xét nghiệm", "Sinh hóa máu"],
];

/// Landing content shown until a file is uploaded
#[component]
pub fn Welcome() -> impl IntoView {
    view! {
        <div class="welcome">
            <Section id="start" title="Getting started">
                <p>
                    "Upload the hospital service export ("
                    <code>{CONFIG.expected_file}</code>
                    ") in the sidebar. Everything runs in your browser; the file never leaves this machine."
                </p>
                <p>
                    "Pick a year and, optionally, a service group. The dashboard shows revenue "
                    "totals, the monthly trend, the busiest services and a breakdown by service kind."
                </p>
            </Section>

            <Section id="columns" title="Expected columns">
                <table class="help-table">
                    <thead>
                        <tr>
                            <th>"Column"</th>
                            <th>"Meaning"</th>
                            <th>"Example"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {CONFIG
                            .columns
                            .iter()
                            .map(|col| {
                                view! {
                                    <tr>
                                        <td><code>{col.name}</code></td>
                                        <td>{col.meaning}</td>
                                        <td>{col.example}</td>
                                    </tr>
                                }
                            })
                            .collect_view()}
                    </tbody>
                </table>
                <p class="note">
                    "Only the " <code>"nam"</code>
                    " column is required; rows with missing or unreadable cells are kept and "
                    "simply drop out of the affected charts."
                </p>
            </Section>

            <Section id="sample" title="Sample rows">
                <table class="help-table">
                    <thead>
                        <tr>
                            <th>"nam"</th>
                            <th>"thang"</th>
                            <th>"tongdoanhthu"</th>
                            <th>"tennhomdichvu"</th>
                            <th>"tendichvu"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {SAMPLE_ROWS
                            .iter()
                            .map(|row| {
                                view! {
                                    <tr>
                                        {row.iter().map(|cell| view! { <td>{*cell}</td> }).collect_view()}
                                    </tr>
                                }
                            })
                            .collect_view()}
                    </tbody>
                </table>
            </Section>

            <Section id="changelog" title="Changelog">
                <div>
                    {CONFIG
                        .changelog
                        .iter()
                        .map(|entry| {
                            view! {
                                <div>
                                    <strong>{entry.date}</strong> "  " {entry.event}
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </Section>
        </div>
    }
}
