use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq, Eq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/hall-of-fame")]
    HallOfFame,
    #[at("/tournaments")]
    Tournaments,
    #[at("/tournament/:name")]
    Tournament { name: String },
    #[at("/team/:name")]
    Team { name: String },
    #[at("/player/:name")]
    Player { name: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}
