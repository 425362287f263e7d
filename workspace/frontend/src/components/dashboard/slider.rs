use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub years: u32,
    pub on_change: Callback<u32>,
}

/// Horizon control: one to four years of prediction.
#[function_component(HorizonSlider)]
pub fn horizon_slider(props: &Props) -> Html {
    let on_input = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(target) = e.target_dyn_into::<web_sys::HtmlInputElement>() {
                if let Ok(years) = target.value().parse::<u32>() {
                    on_change.emit(years);
                }
            }
        })
    };

    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <label class="label">
                    <span class="label-text font-semibold">{"Years of prediction:"}</span>
                    <span class="label-text-alt text-base font-bold">{props.years}</span>
                </label>
                <input
                    type="range"
                    min="1"
                    max="4"
                    step="1"
                    class="range range-primary"
                    value={props.years.to_string()}
                    oninput={on_input}
                />
                <div class="w-full flex justify-between text-xs px-2">
                    <span>{"1"}</span>
                    <span>{"2"}</span>
                    <span>{"3"}</span>
                    <span>{"4"}</span>
                </div>
            </div>
        </div>
    }
}
