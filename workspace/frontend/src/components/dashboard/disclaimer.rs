use yew::prelude::*;

/// Static note on what the model can and cannot do. Pure content.
#[function_component(Disclaimer)]
pub fn disclaimer() -> Html {
    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body prose max-w-none">
                <h3 class="card-title text-lg">{"Important Note"}</h3>
                <p>
                    <strong>
                    {"This forecast is produced by an additive time-series model: the observed \
                      series is decomposed into trend, seasonality and noise, and the trend and \
                      seasonal components are projected forward. Such models rely entirely on \
                      historical prices to predict future values."}
                    </strong>
                </p>
                <p><strong>{"Limitations in predicting stock market prices:"}</strong></p>
                <ul>
                    <li>
                        <strong>{"Complexity of market dynamics: "}</strong>
                        {"prices react to earnings, interest rates, geopolitics and sentiment, \
                          which interact in ways no single decomposition captures."}
                    </li>
                    <li>
                        <strong>{"Assumption of linearity: "}</strong>
                        {"additive models combine their components linearly, while markets show \
                          abrupt, non-linear moves."}
                    </li>
                    <li>
                        <strong>{"Over-reliance on history: "}</strong>
                        {"new information disrupts historical patterns, and the model cannot \
                          anticipate it."}
                    </li>
                    <li>
                        <strong>{"External factors ignored: "}</strong>
                        {"management changes, regulation and macro shifts are invisible to a \
                          price-only model."}
                    </li>
                    <li>
                        <strong>{"Market efficiency: "}</strong>
                        {"to the extent prices already reflect available information, past \
                          prices have limited predictive power."}
                    </li>
                </ul>
                <p>
                    {"Treat these forecasts as one statistical view, to be combined with \
                      fundamental analysis rather than relied on alone. They are not \
                      investment advice."}
                </p>
            </div>
        </div>
    }
}
