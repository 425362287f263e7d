use common::PriceHistory;
use plotly::common::Mode;
use plotly::layout::{Axis, RangeSlider};
use plotly::{Layout, Scatter};
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
    pub history: PriceHistory,
}

/// Time-series chart of the raw history: open in red, close in green, with
/// a range slider under the x axis.
#[function_component(RawChart)]
pub fn raw_chart(props: &Props) -> Html {
    let container_ref = use_node_ref();
    let history = props.history.clone();
    let div_id = format!("raw-chart-{}", history.symbol.replace('.', "-"));

    use_effect_with(
        (container_ref.clone(), history.clone(), div_id.clone()),
        move |(container_ref, history, div_id)| {
            if let Some(element) = container_ref.cast::<HtmlElement>() {
                element.set_id(div_id);

                let dates: Vec<String> =
                    history.points.iter().map(|p| p.date.to_string()).collect();
                let opens: Vec<f64> = history.points.iter().map(|p| p.open).collect();
                let closes: Vec<f64> = history.points.iter().map(|p| p.close).collect();

                let open_trace = Scatter::new(dates.clone(), opens)
                    .mode(Mode::Lines)
                    .name("stock_open")
                    .line(plotly::common::Line::new().color("red").width(1.5));
                let close_trace = Scatter::new(dates, closes)
                    .mode(Mode::Lines)
                    .name("stock_close")
                    .line(plotly::common::Line::new().color("green").width(1.5));

                let layout = Layout::new()
                    .title(plotly::common::Title::with_text(
                        "Time series data with range slider",
                    ))
                    .x_axis(Axis::new().range_slider(RangeSlider::new().visible(true)))
                    .y_axis(Axis::new().title(plotly::common::Title::with_text("Price")))
                    .height(450);

                let data_js = js_sys::Array::new();
                for trace in [&open_trace, &close_trace] {
                    let trace_json = serde_json::to_string(trace).unwrap();
                    let trace_js = js_sys::JSON::parse(&trace_json).unwrap();
                    data_js.push(&trace_js);
                }

                let layout_json = serde_json::to_string(&layout).unwrap();
                let layout_js = js_sys::JSON::parse(&layout_json).unwrap();

                newPlot(div_id, data_js.into(), layout_js);
            }
            || ()
        },
    );

    html! {
        <div ref={container_ref} style="width:100%; height:450px;"></div>
    }
}
