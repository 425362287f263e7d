use common::ForecastResponse;
use plotly::common::{Fill, Mode};
use plotly::layout::Axis;
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
    pub forecast: ForecastResponse,
}

/// Forecast chart: shaded confidence band under a yellow point-estimate
/// trace covering fitted history plus the projected horizon.
#[function_component(ForecastChart)]
pub fn forecast_chart(props: &Props) -> Html {
    let container_ref = use_node_ref();
    let forecast = props.forecast.clone();
    let div_id = format!(
        "forecast-chart-{}-{}",
        forecast.symbol.replace('.', "-"),
        forecast.horizon_days
    );

    use_effect_with(
        (container_ref.clone(), forecast.clone(), div_id.clone()),
        move |(container_ref, forecast, div_id)| {
            if let Some(element) = container_ref.cast::<HtmlElement>() {
                element.set_id(div_id);

                let dates: Vec<String> =
                    forecast.points.iter().map(|p| p.date.to_string()).collect();
                let predicted: Vec<f64> = forecast.points.iter().map(|p| p.predicted).collect();
                let lower: Vec<f64> = forecast.points.iter().map(|p| p.lower).collect();
                let upper: Vec<f64> = forecast.points.iter().map(|p| p.upper).collect();

                let lower_trace = Scatter::new(dates.clone(), lower)
                    .mode(Mode::Lines)
                    .name("lower bound")
                    .show_legend(false)
                    .line(plotly::common::Line::new().color("rgba(0,0,0,0)").width(0.0));
                let upper_trace = Scatter::new(dates.clone(), upper)
                    .mode(Mode::Lines)
                    .name("confidence band")
                    .fill(Fill::ToNextY)
                    .fill_color("rgba(255, 212, 59, 0.25)")
                    .line(plotly::common::Line::new().color("rgba(0,0,0,0)").width(0.0));
                // Point-estimate trace recolored to yellow.
                let forecast_trace = Scatter::new(dates, predicted)
                    .mode(Mode::Lines)
                    .name("forecast")
                    .line(plotly::common::Line::new().color("yellow").width(2.0));

                let layout = Layout::new()
                    .title(plotly::common::Title::with_text("Forecast"))
                    .x_axis(Axis::new().title(plotly::common::Title::with_text("Date")))
                    .y_axis(Axis::new().title(plotly::common::Title::with_text("Price")))
                    .height(450);

                let data_js = js_sys::Array::new();
                for trace in [&lower_trace, &upper_trace, &forecast_trace] {
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
