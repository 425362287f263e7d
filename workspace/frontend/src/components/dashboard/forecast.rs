use yew::prelude::*;

use super::components_chart::ComponentsChart;
use super::forecast_chart::ForecastChart;
use crate::api_client::forecast::get_forecast;
use crate::common::fetch_hook::use_fetch_with_refetch;
use crate::hooks::FetchState;

/// Rows shown in the forecast table tail.
const TABLE_TAIL: usize = 5;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub symbol: String,
    pub years: u32,
}

/// Forecast output: table tail, forecast chart and component decomposition.
#[function_component(ForecastSection)]
pub fn forecast_section(props: &Props) -> Html {
    let symbol = props.symbol.clone();
    let years = props.years;
    let (fetch_state, _refetch) =
        use_fetch_with_refetch(move || get_forecast(symbol.clone(), years));

    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <h3 class="card-title text-lg">{"Forecast data"}</h3>

                {match &*fetch_state {
                    FetchState::Loading => html! {
                        <div class="flex justify-center items-center py-8">
                            <span class="loading loading-spinner loading-lg"></span>
                        </div>
                    },
                    FetchState::Error(error) => html! {
                        // The model could not be fitted; explain, don't crash.
                        <div class="alert alert-warning">
                            <span>{format!("Forecast unavailable: {error}. Try another stock or horizon.")}</span>
                        </div>
                    },
                    FetchState::Success(forecast) => html! {
                        <>
                            <div class="overflow-x-auto">
                                <table class="table table-zebra table-sm">
                                    <thead>
                                        <tr>
                                            <th>{"Date"}</th>
                                            <th>{"Forecast"}</th>
                                            <th>{"Lower"}</th>
                                            <th>{"Upper"}</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {for forecast.tail(TABLE_TAIL).iter().map(|p| html! {
                                            <tr>
                                                <td>{p.date.to_string()}</td>
                                                <td>{format!("{:.2}", p.predicted)}</td>
                                                <td>{format!("{:.2}", p.lower)}</td>
                                                <td>{format!("{:.2}", p.upper)}</td>
                                            </tr>
                                        })}
                                    </tbody>
                                </table>
                            </div>

                            <h4 class="font-semibold mt-4">
                                {format!("Forecast plot for {} {}", props.years,
                                    if props.years == 1 { "year" } else { "years" })}
                            </h4>
                            <ForecastChart forecast={forecast.clone()} />

                            <h4 class="font-semibold mt-4">{"Forecast components"}</h4>
                            <ComponentsChart forecast={forecast.clone()} />
                        </>
                    },
                    FetchState::NotStarted => html! { <></> },
                }}
            </div>
        </div>
    }
}
