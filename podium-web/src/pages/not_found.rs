use yew::prelude::*;
use yew_router::prelude::*;

use crate::routes::Route;

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <section class="not-found">
            <h2>{ "Page Not Found" }</h2>
            <p>{ "Nothing lives at this address." }</p>
            <Link<Route> to={Route::Home}>{ "Back to leaderboard" }</Link<Route>>
        </section>
    }
}
