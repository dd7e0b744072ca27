use yew::prelude::*;

#[function_component(Loading)]
pub fn loading() -> Html {
    html! {
        <div class="loading" role="status" aria-live="polite">
            { "Loading…" }
        </div>
    }
}
