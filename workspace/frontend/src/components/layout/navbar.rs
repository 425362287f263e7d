use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub title: String,
    #[prop_or_default]
    pub on_refresh: Option<Callback<()>>,
}

#[function_component(Navbar)]
pub fn navbar(props: &Props) -> Html {
    html! {
        <div class="navbar bg-base-100 border-b border-base-300 px-6">
            <div class="flex-1 gap-3">
                <div class="w-10 h-10 rounded-lg bg-primary flex items-center justify-center text-primary-content font-bold text-xl">
                    {"S"}
                </div>
                <span class="text-xl font-bold tracking-tight">{&props.title}</span>
            </div>
            <div class="flex-none gap-2">
                {if let Some(on_refresh) = &props.on_refresh {
                    let on_refresh = on_refresh.clone();
                    let onclick = Callback::from(move |_| on_refresh.emit(()));
                    html! {
                        <button class="btn btn-ghost btn-sm" {onclick}>{"Refresh"}</button>
                    }
                } else {
                    html! {}
                }}
                <Link<Route> to={Route::Dashboard} classes="btn btn-ghost btn-sm">{"Dashboard"}</Link<Route>>
                <Link<Route> to={Route::About} classes="btn btn-ghost btn-sm">{"About"}</Link<Route>>
            </div>
        </div>
    }
}
