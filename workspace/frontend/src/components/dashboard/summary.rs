use yew::prelude::*;

use crate::api_client::tickers::{get_summary, logo_url};
use crate::common::fetch_hook::use_fetch_with_refetch;
use crate::hooks::FetchState;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub symbol: String,
    pub display_name: String,
}

/// Sidebar card with the company's business summary and, when the asset
/// exists, its logo. A missing logo leaves a blank placeholder rather than a
/// broken image.
#[function_component(SummarySidebar)]
pub fn summary_sidebar(props: &Props) -> Html {
    let symbol = props.symbol.clone();
    let logo_visible = use_state(|| true);

    let (fetch_state, _refetch) = use_fetch_with_refetch(move || get_summary(symbol.clone()));

    let on_logo_error = {
        let logo_visible = logo_visible.clone();
        Callback::from(move |_| logo_visible.set(false))
    };

    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <h3 class="card-title text-lg">{format!("Summary of {}", props.display_name)}</h3>

                {if *logo_visible {
                    html! {
                        <img
                            src={logo_url(&props.symbol)}
                            alt={format!("{} logo", props.display_name)}
                            class="w-full rounded"
                            onerror={on_logo_error}
                        />
                    }
                } else {
                    // Blank placeholder, mirroring the empty sidebar slot.
                    html! { <div class="h-2"></div> }
                }}

                {match &*fetch_state {
                    FetchState::Loading => html! {
                        <span class="loading loading-dots loading-md"></span>
                    },
                    FetchState::Error(error) => html! {
                        <p class="text-sm text-gray-500">{error}</p>
                    },
                    FetchState::Success(summary) => html! {
                        <p class="text-sm leading-relaxed">{&summary.summary}</p>
                    },
                    FetchState::NotStarted => html! { <></> },
                }}
            </div>
        </div>
    }
}
