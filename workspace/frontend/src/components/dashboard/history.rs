use yew::prelude::*;

use super::raw_chart::RawChart;
use crate::api_client::market::get_history;
use crate::common::fetch_hook::use_fetch_with_refetch;
use crate::hooks::FetchState;

/// Rows shown in the raw-data table tail.
const TABLE_TAIL: usize = 5;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub symbol: String,
    pub display_name: String,
}

/// Raw history: table tail plus the open/close chart.
#[function_component(HistorySection)]
pub fn history_section(props: &Props) -> Html {
    let symbol = props.symbol.clone();
    let (fetch_state, _refetch) = use_fetch_with_refetch(move || get_history(symbol.clone()));

    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <h3 class="card-title text-lg">{format!("Raw data for {}", props.display_name)}</h3>

                {match &*fetch_state {
                    FetchState::Loading => html! {
                        <div class="flex justify-center items-center py-8">
                            <span class="loading loading-spinner loading-lg"></span>
                        </div>
                    },
                    FetchState::Error(error) => html! {
                        // Degraded, non-crashing state: message, empty table, no chart.
                        <div class="alert alert-error">
                            <span>{error}</span>
                        </div>
                    },
                    FetchState::Success(history) => {
                        if history.points.is_empty() {
                            html! {
                                <div class="text-center py-8 text-gray-500">
                                    <p>{"No price data available for this range."}</p>
                                </div>
                            }
                        } else {
                            html! {
                                <>
                                    <div class="overflow-x-auto">
                                        <table class="table table-zebra table-sm">
                                            <thead>
                                                <tr>
                                                    <th>{"Date"}</th>
                                                    <th>{"Open"}</th>
                                                    <th>{"High"}</th>
                                                    <th>{"Low"}</th>
                                                    <th>{"Close"}</th>
                                                </tr>
                                            </thead>
                                            <tbody>
                                                {for history.tail(TABLE_TAIL).iter().map(|p| html! {
                                                    <tr>
                                                        <td>{p.date.to_string()}</td>
                                                        <td>{format!("{:.2}", p.open)}</td>
                                                        <td>{format!("{:.2}", p.high)}</td>
                                                        <td>{format!("{:.2}", p.low)}</td>
                                                        <td>{format!("{:.2}", p.close)}</td>
                                                    </tr>
                                                })}
                                            </tbody>
                                        </table>
                                    </div>
                                    <RawChart history={history.clone()} />
                                </>
                            }
                        }
                    },
                    FetchState::NotStarted => html! { <></> },
                }}
            </div>
        </div>
    }
}
