use yew::prelude::*;

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <div class="card bg-base-100 shadow max-w-3xl">
            <div class="card-body">
                <h2 class="card-title">{"About Stockcast"}</h2>
                <p>
                    {"Stockcast is a single-page dashboard for exploring NIFTY 50 stocks. \
                      It fetches daily price history from a market-data provider, fits an \
                      additive time-series model, and charts the history, the forecast and \
                      its trend/seasonality decomposition."}
                </p>
                <p class="text-sm text-gray-500">
                    {"Forecasts are statistical extrapolations, not investment advice. \
                      See the note at the bottom of the dashboard."}
                </p>
            </div>
        </div>
    }
}
