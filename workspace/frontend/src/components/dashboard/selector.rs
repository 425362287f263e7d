use common::TickerDto;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub tickers: Vec<TickerDto>,
    pub selected: String,
    pub on_select: Callback<String>,
}

/// The NIFTY 50 stock selector.
#[function_component(TickerSelect)]
pub fn ticker_select(props: &Props) -> Html {
    let on_change = {
        let on_select = props.on_select.clone();
        Callback::from(move |e: Event| {
            if let Some(target) = e.target_dyn_into::<web_sys::HtmlSelectElement>() {
                let value = target.value();
                if !value.is_empty() {
                    on_select.emit(value);
                }
            }
        })
    };

    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <label class="label">
                    <span class="label-text font-semibold">{"Select a NIFTY 50 stock for prediction"}</span>
                </label>
                <select
                    class="select select-bordered w-full"
                    onchange={on_change}
                    value={props.selected.clone()}
                >
                    {for props.tickers.iter().map(|ticker| {
                        html! {
                            <option
                                value={ticker.symbol.clone()}
                                selected={ticker.symbol == props.selected}
                            >
                                {&ticker.display_name}
                            </option>
                        }
                    })}
                </select>
            </div>
        </div>
    }
}
