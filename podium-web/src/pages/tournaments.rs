use podium_stats::Dataset;
use std::rc::Rc;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::routes::Route;

#[cfg(target_arch = "wasm32")]
#[function_component(TournamentsPage)]
pub fn tournaments_page() -> Html {
    use crate::api::RemoteData;
    use crate::components::{ErrorPanel, Loading};

    let (data, retry) = crate::api::use_dataset();
    match data {
        RemoteData::Loading => html! { <Loading /> },
        RemoteData::Failed(message) => html! {
            <ErrorPanel message={message} on_retry={retry} />
        },
        RemoteData::Ready(dataset) => html! { <TournamentsIndexView {dataset} /> },
    }
}

#[derive(Properties, PartialEq)]
pub struct ViewProps {
    pub dataset: Rc<Dataset>,
}

/// Navigation cards, one per tournament in document order.
#[function_component(TournamentsIndexView)]
pub fn tournaments_index_view(props: &ViewProps) -> Html {
    html! {
        <section class="tournaments-index">
            <h2>{ "Tournaments" }</h2>
            <div class="tournament-cards">
                { for props.dataset.tournaments.iter().map(|tournament| html! {
                    <div class="tournament-card">
                        <h3>
                            <Link<Route> to={Route::Tournament { name: tournament.name.clone() }}>
                                { tournament.name.clone() }
                            </Link<Route>>
                        </h3>
                        if !tournament.canon {
                            <span class="badge exhibition">{ "Exhibition" }</span>
                        }
                        <p>{ format!("{} Teams", tournament.teams.len()) }</p>
                        <p>{ format!("{} Players", tournament.unique_player_names().len()) }</p>
                        <p>{ format!("{} Games", tournament.games.len()) }</p>
                        <p class="winner">
                            { "Winner: " }
                            <Link<Route> to={Route::Team { name: tournament.winners.clone() }}>
                                { tournament.winners.clone() }
                            </Link<Route>>
                        </p>
                    </div>
                }) }
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;
    use yew_router::history::{AnyHistory, MemoryHistory};

    #[derive(Properties, PartialEq)]
    struct HarnessProps {
        dataset: Rc<Dataset>,
    }

    #[function_component(Harness)]
    fn harness(props: &HarnessProps) -> Html {
        let history = AnyHistory::from(MemoryHistory::new());
        html! {
            <Router history={history}>
                <TournamentsIndexView dataset={props.dataset.clone()} />
            </Router>
        }
    }

    #[test]
    fn index_cards_carry_counts_and_exhibition_badge() {
        let dataset = Rc::new(
            Dataset::from_json(include_str!("../../static/assets/data/stats.json")).unwrap(),
        );
        let props = HarnessProps { dataset };
        let html = block_on(LocalServerRenderer::<Harness>::with_props(props).render());
        assert!(html.contains("Autumn Invitational 2024"));
        assert!(html.contains("5 Players"));
        assert!(html.contains("Exhibition"));
        assert!(html.contains("Winner:"));
    }
}
