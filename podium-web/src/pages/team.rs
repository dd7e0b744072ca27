use podium_stats::team::TeamProfile;
use podium_stats::Dataset;
use std::rc::Rc;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::format::{format_number, format_rank};
use crate::routes::Route;

#[derive(Properties, PartialEq)]
pub struct PageProps {
    pub name: String,
}

#[cfg(target_arch = "wasm32")]
#[function_component(TeamPage)]
pub fn team_page(props: &PageProps) -> Html {
    use crate::api::RemoteData;
    use crate::components::{ErrorPanel, Loading};

    let (data, retry) = crate::api::use_dataset();
    match data {
        RemoteData::Loading => html! { <Loading /> },
        RemoteData::Failed(message) => html! {
            <ErrorPanel message={message} on_retry={retry} />
        },
        RemoteData::Ready(dataset) => html! {
            <TeamView {dataset} name={props.name.clone()} />
        },
    }
}

#[derive(Properties, PartialEq)]
pub struct ViewProps {
    pub dataset: Rc<Dataset>,
    pub name: String,
}

#[function_component(TeamView)]
pub fn team_view(props: &ViewProps) -> Html {
    let profile = use_memo((props.dataset.clone(), props.name.clone()), |(dataset, name)| {
        TeamProfile::build(dataset, name)
    });

    let profile = match profile.as_ref() {
        Ok(profile) => profile,
        Err(err) => {
            return html! {
                <section class="error-panel" role="alert">
                    <p class="error-message">{ err.to_string() }</p>
                    <Link<Route> to={Route::Home}>{ "Back to leaderboard" }</Link<Route>>
                </section>
            };
        }
    };

    html! {
        <section class="team-stats">
            <div class="team-header">
                <h2>{ profile.name.clone() }</h2>
                <div class="summary-stats">
                    <span>{ format!("{} Tournament Wins", profile.overall.wins) }</span>
                    <span>{ format!("{} Tournaments Played", profile.tournaments.len()) }</span>
                    <span>{ format!("Total Score: {}", format_number(profile.overall.total_score)) }</span>
                    <span>{ format!("Average: {}", format_number(profile.overall.average_score())) }</span>
                </div>
            </div>

            <div class="game-performance">
                <h3>{ "Game Performance" }</h3>
                { for profile.game_rollups.iter().map(|(game, rollup)| html! {
                    <div class="game-stat-item">
                        <div class="game-name">{ game.clone() }</div>
                        <div class="game-stats">
                            <span>{ format!("Avg: {}", format_number(rollup.average())) }</span>
                            <span>{ format!("Best: {}", rollup.highest.map_or_else(|| "-".into(), format_number)) }</span>
                            <span>{ format!("Worst: {}", rollup.lowest.map_or_else(|| "-".into(), format_number)) }</span>
                            <span>{ format!("Played: {}", rollup.appearances) }</span>
                        </div>
                    </div>
                }) }
            </div>

            <div class="player-contributions">
                <h3>{ "Player Contributions" }</h3>
                <table>
                    <thead>
                        <tr>
                            <th>{ "Player" }</th>
                            <th>{ "Total Score" }</th>
                            <th>{ "Appearances" }</th>
                            <th>{ "Average" }</th>
                        </tr>
                    </thead>
                    <tbody>
                        { for profile.player_rollups.iter().map(|rollup| html! {
                            <tr>
                                <td>
                                    <Link<Route> to={Route::Player { name: rollup.name.clone() }}>
                                        { rollup.name.clone() }
                                    </Link<Route>>
                                </td>
                                <td>{ format_number(rollup.total_score) }</td>
                                <td>{ rollup.appearances }</td>
                                <td>{ format_number(rollup.average()) }</td>
                            </tr>
                        }) }
                    </tbody>
                </table>
            </div>

            <div class="tournament-history">
                <h3>{ "Tournament History" }</h3>
                <table>
                    <thead>
                        <tr>
                            <th>{ "Tournament" }</th>
                            <th>{ "Position" }</th>
                            <th>{ "Total Score" }</th>
                            <th>{ "Result" }</th>
                        </tr>
                    </thead>
                    <tbody>
                        { for profile.tournaments.iter().map(|appearance| html! {
                            <tr class={classes!((!appearance.canon).then_some("exhibition"))}>
                                <td>
                                    <Link<Route> to={Route::Tournament { name: appearance.tournament.clone() }}>
                                        { appearance.tournament.clone() }
                                    </Link<Route>>
                                    if !appearance.canon {
                                        <span class="badge exhibition">{ " (Exhibition)" }</span>
                                    }
                                </td>
                                <td>{ format_rank(appearance.position) }</td>
                                <td>{ format_number(appearance.total) }</td>
                                <td>{ if appearance.winner { "Winner" } else { "-" } }</td>
                            </tr>
                        }) }
                    </tbody>
                </table>
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

    fn dataset() -> Rc<Dataset> {
        Rc::new(
            Dataset::from_json(include_str!("../../static/assets/data/stats.json")).unwrap(),
        )
    }

    #[derive(Properties, PartialEq)]
    struct HarnessProps {
        dataset: Rc<Dataset>,
        name: String,
    }

    #[function_component(Harness)]
    fn harness(props: &HarnessProps) -> Html {
        let history = AnyHistory::from(MemoryHistory::new());
        html! {
            <Router history={history}>
                <TeamView dataset={props.dataset.clone()} name={props.name.clone()} />
            </Router>
        }
    }

    #[test]
    fn team_page_shows_history_including_exhibitions() {
        let props = HarnessProps {
            dataset: dataset(),
            name: "Corner Pocket".into(),
        };
        let html = block_on(LocalServerRenderer::<Harness>::with_props(props).render());
        assert!(html.contains("Corner Pocket"));
        assert!(html.contains("0 Tournament Wins"));
        assert!(html.contains("3 Tournaments Played"));
        // Canon-only overall total.
        assert!(html.contains("Total Score: 309"));
        assert!(html.contains("Midsummer Exhibition"));
    }

    #[test]
    fn unknown_team_shows_page_level_error() {
        let props = HarnessProps {
            dataset: dataset(),
            name: "Ghosts".into(),
        };
        let html = block_on(LocalServerRenderer::<Harness>::with_props(props).render());
        assert!(html.contains("team not found: Ghosts"));
    }
}
