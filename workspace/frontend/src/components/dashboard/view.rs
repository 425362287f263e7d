use yew::prelude::*;

use super::disclaimer::Disclaimer;
use super::forecast::ForecastSection;
use super::history::HistorySection;
use super::selector::TickerSelect;
use super::slider::HorizonSlider;
use super::summary::SummarySidebar;
use crate::api_client::tickers::get_tickers;
use crate::common::fetch_hook::use_fetch_with_refetch;
use crate::common::loading::Loading;
use crate::hooks::FetchState;

/// The whole dashboard: selection state on top, everything below re-renders
/// (and refetches) whenever the stock or the horizon changes.
#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    let selected = use_state(|| Option::<String>::None);
    let n_years = use_state(|| 1u32);

    let (tickers_state, _refetch) = use_fetch_with_refetch(get_tickers);

    let on_select = {
        let selected = selected.clone();
        Callback::from(move |symbol: String| {
            log::debug!("Stock selection changed to {}", symbol);
            selected.set(Some(symbol));
        })
    };

    let on_years = {
        let n_years = n_years.clone();
        Callback::from(move |years: u32| {
            log::debug!("Prediction horizon changed to {} years", years);
            n_years.set(years);
        })
    };

    match &*tickers_state {
        FetchState::Loading => html! { <Loading text="Loading ticker directory..." /> },
        FetchState::Error(error) => html! {
            <div class="alert alert-error">
                <span>{format!("Could not load the ticker directory: {error}")}</span>
            </div>
        },
        FetchState::Success(tickers) => {
            // Default to the first directory entry, like the original selector.
            let symbol = (*selected)
                .clone()
                .or_else(|| tickers.first().map(|t| t.symbol.clone()));
            let display_name = symbol.as_ref().and_then(|s| {
                tickers
                    .iter()
                    .find(|t| &t.symbol == s)
                    .map(|t| t.display_name.clone())
            });

            let Some(symbol) = symbol else {
                return html! {
                    <div class="alert alert-warning"><span>{"Ticker directory is empty."}</span></div>
                };
            };
            let display_name = display_name.unwrap_or_else(|| symbol.clone());
            let years = *n_years;

            html! {
                <div class="grid grid-cols-1 xl:grid-cols-4 gap-6">
                    <aside class="xl:col-span-1 flex flex-col gap-6">
                        <TickerSelect
                            tickers={tickers.clone()}
                            selected={symbol.clone()}
                            on_select={on_select}
                        />
                        // Remount on selection change so the summary refetches.
                        <SummarySidebar
                            key={symbol.clone()}
                            symbol={symbol.clone()}
                            display_name={display_name.clone()}
                        />
                    </aside>

                    <section class="xl:col-span-3 flex flex-col gap-6">
                        <HorizonSlider years={years} on_change={on_years} />
                        <HistorySection
                            key={symbol.clone()}
                            symbol={symbol.clone()}
                            display_name={display_name.clone()}
                        />
                        <ForecastSection
                            key={format!("{symbol}-{years}")}
                            symbol={symbol.clone()}
                            years={years}
                        />
                        <Disclaimer />
                    </section>
                </div>
            }
        }
        FetchState::NotStarted => html! { <></> },
    }
}
