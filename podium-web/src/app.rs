//! Application shell: router context, shared header, and the
//! route-to-page switch.

use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::Header;
use crate::pages::{
    HallOfFamePage, LeaderboardPage, NotFoundPage, PlayerPage, TeamPage, TournamentPage,
    TournamentsPage,
};
use crate::routes::Route;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter basename={crate::paths::router_base()}>
            <Header />
            <main id="main">
                <Switch<Route> render={switch} />
            </main>
        </BrowserRouter>
    }
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <LeaderboardPage /> },
        Route::HallOfFame => html! { <HallOfFamePage /> },
        Route::Tournaments => html! { <TournamentsPage /> },
        Route::Tournament { name } => html! { <TournamentPage {name} /> },
        Route::Team { name } => html! { <TeamPage {name} /> },
        Route::Player { name } => html! { <PlayerPage {name} /> },
        Route::NotFound => html! { <NotFoundPage /> },
    }
}
