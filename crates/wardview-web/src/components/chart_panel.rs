use charming::{Chart, Echarts, WasmRenderer};
use leptos::logging;
use leptos::prelude::*;

use crate::state::DashboardState;

const CHART_WIDTH: u32 = 820;

/// One chart slot.
///
/// `build_chart` returns `None` when the underlying aggregate has no rows, in which
/// case the panel shows `empty_message` instead of an empty canvas. The
/// ECharts instance is kept across data changes and recreated when the height
/// control moves (ECharts sizes its canvas at init).
#[component]
pub fn ChartPanel(
    id: &'static str,
    #[prop(into)] title: String,
    build_chart: Callback<(), Option<Chart>>,
    empty_message: &'static str,
) -> impl IntoView {
    let state = expect_context::<DashboardState>();
    let instance = StoredValue::new_local(None::<(Echarts, u32)>);
    let has_data = Memo::new(move |_| build_chart.run(()).is_some());

    Effect::new(move |_| {
        let Some(chart) = build_chart.run(()) else {
            return;
        };
        let height = state.chart_height.get();
        let needs_init = instance.with_value(|i| match i {
            Some((_, h)) => *h != height,
            None => true,
        });
        if needs_init {
            match WasmRenderer::new(CHART_WIDTH, height).render(id, &chart) {
                Ok(handle) => instance.set_value(Some((handle, height))),
                Err(err) => logging::error!("chart '{id}' failed to render: {err:?}"),
            }
        } else {
            instance.with_value(|i| {
                if let Some((handle, _)) = i {
                    WasmRenderer::update(handle, &chart);
                }
            });
        }
    });

    view! {
        <div class="chart-panel">
            <h3 class="chart-title">{title}</h3>
            {move || {
                if has_data.get() {
                    let height = state.chart_height.get();
                    view! { <div id=id style:height=format!("{height}px")></div> }.into_any()
                } else {
                    // Target div is gone, so the instance is too
                    instance.set_value(None);
                    view! { <div class="chart-empty">{empty_message}</div> }.into_any()
                }
            }}
        </div>
    }
}
