use common::ForecastResponse;
use plotly::common::Mode;
use plotly::layout::Axis;
use plotly::{Bar, Layout, Scatter};
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;
use yew::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Plotly)]
    fn newPlot(div_id: &str, data: JsValue, layout: JsValue);
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub forecast: ForecastResponse,
}

/// Decomposition view: the trend sub-series over time and the additive
/// weekly effect per trading-week position.
#[function_component(ComponentsChart)]
pub fn components_chart(props: &Props) -> Html {
    let trend_ref = use_node_ref();
    let weekly_ref = use_node_ref();
    let forecast = props.forecast.clone();
    let base_id = format!(
        "components-{}-{}",
        forecast.symbol.replace('.', "-"),
        forecast.horizon_days
    );

    use_effect_with(
        (trend_ref.clone(), weekly_ref.clone(), forecast.clone(), base_id.clone()),
        move |(trend_ref, weekly_ref, forecast, base_id)| {
            if let Some(element) = trend_ref.cast::<HtmlElement>() {
                let div_id = format!("{base_id}-trend");
                element.set_id(&div_id);

                let dates: Vec<String> =
                    forecast.points.iter().map(|p| p.date.to_string()).collect();
                let trend = forecast.components.trend.clone();

                let trace = Scatter::new(dates, trend)
                    .mode(Mode::Lines)
                    .name("trend")
                    .line(plotly::common::Line::new().color("rgb(59, 130, 246)").width(2.0));

                let layout = Layout::new()
                    .title(plotly::common::Title::with_text("Trend"))
                    .x_axis(Axis::new().title(plotly::common::Title::with_text("Date")))
                    .height(300);

                let trace_json = serde_json::to_string(&trace).unwrap();
                let trace_js = js_sys::JSON::parse(&trace_json).unwrap();
                let data_js = js_sys::Array::new();
                data_js.push(&trace_js);

                let layout_json = serde_json::to_string(&layout).unwrap();
                let layout_js = js_sys::JSON::parse(&layout_json).unwrap();

                newPlot(&div_id, data_js.into(), layout_js);
            }

            if let Some(element) = weekly_ref.cast::<HtmlElement>() {
                let div_id = format!("{base_id}-weekly");
                element.set_id(&div_id);

                let slots: Vec<String> = (1..=forecast.components.weekly.len())
                    .map(|i| format!("Day {i}"))
                    .collect();
                let weekly = forecast.components.weekly.clone();

                let trace = Bar::new(slots, weekly).name("weekly");

                let layout = Layout::new()
                    .title(plotly::common::Title::with_text("Weekly seasonality"))
                    .x_axis(Axis::new().title(plotly::common::Title::with_text(
                        "Trading day of week",
                    )))
                    .height(300);

                let trace_json = serde_json::to_string(&trace).unwrap();
                let trace_js = js_sys::JSON::parse(&trace_json).unwrap();
                let data_js = js_sys::Array::new();
                data_js.push(&trace_js);

                let layout_json = serde_json::to_string(&layout).unwrap();
                let layout_js = js_sys::JSON::parse(&layout_json).unwrap();

                newPlot(&div_id, data_js.into(), layout_js);
            }

            || ()
        },
    );

    html! {
        <div class="grid grid-cols-1 lg:grid-cols-2 gap-4">
            <div ref={trend_ref} style="width:100%; height:300px;"></div>
            <div ref={weekly_ref} style="width:100%; height:300px;"></div>
        </div>
    }
}
