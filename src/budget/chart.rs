//! The cumulative balance chart.
//!
//! The chart is generated as an ECharts configuration via `charming` and
//! rendered client-side into a fixed container. The init script disposes
//! any chart instance already bound to the container before creating a new
//! one, so htmx fragment swaps do not leak chart instances.

use charming::{
    Chart,
    component::{Axis, Grid, Title},
    element::{AreaStyle, AxisType, Tooltip, Trigger},
    series::Line,
};
use maud::{Markup, PreEscaped, html};
use rust_decimal::prelude::ToPrimitive;

use crate::{budget::aggregation::cumulative_series, transaction::Transaction};

/// The HTML element ID the chart is rendered into.
const CHART_CONTAINER_ID: &str = "balance-chart";

/// Build the ECharts configuration for the cumulative balance line chart.
fn balance_over_time_chart(transactions: &[Transaction]) -> Chart {
    let (labels, series) = cumulative_series(transactions);
    // The chart library wants floats; the values have already been summed
    // exactly, so this conversion only affects display.
    let values: Vec<f64> = series
        .iter()
        .map(|value| value.to_f64().unwrap_or_default())
        .collect();

    Chart::new()
        .title(Title::new().text("Total Over Time"))
        .tooltip(Tooltip::new().trigger(Trigger::Axis))
        .grid(
            Grid::new()
                .left("3%")
                .right("4%")
                .bottom("3%")
                .contain_label(true),
        )
        .x_axis(Axis::new().type_(AxisType::Category).data(labels))
        .y_axis(Axis::new().type_(AxisType::Value))
        .series(
            Line::new()
                .name("Total Over Time")
                .area_style(AreaStyle::new())
                .data(values),
        )
}

/// The container div the chart renders into.
pub(super) fn chart_view() -> Markup {
    html! {
        div
            id=(CHART_CONTAINER_ID)
            class="w-full max-w-2xl min-h-[380px] rounded dark:bg-gray-100"
        {}
    }
}

/// The script that draws the chart for the given transactions.
///
/// Any instance already attached to the container is disposed first, along
/// with its resize listener; htmx runs the script each time the fragment is
/// swapped in.
pub(super) fn chart_script(transactions: &[Transaction]) -> Markup {
    let options = balance_over_time_chart(transactions).to_string();

    let script = format!(
        r#"(function() {{
    const chartDom = document.getElementById("{CHART_CONTAINER_ID}");
    const existing = echarts.getInstanceByDom(chartDom);
    if (existing) {{
        existing.dispose();
    }}
    if (chartDom.resizeHandler) {{
        window.removeEventListener('resize', chartDom.resizeHandler);
    }}
    const chart = echarts.init(chartDom);
    chart.setOption({options});
    chartDom.resizeHandler = () => chart.resize();
    window.addEventListener('resize', chartDom.resizeHandler);
}})();"#
    );

    html! {
        script { (PreEscaped(script)) }
    }
}
