use podium_stats::player::{PlayerProfile, PlayerTournament};
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
#[function_component(PlayerPage)]
pub fn player_page(props: &PageProps) -> Html {
    use crate::api::RemoteData;
    use crate::components::{ErrorPanel, Loading};

    let (data, retry) = crate::api::use_dataset();
    match data {
        RemoteData::Loading => html! { <Loading /> },
        RemoteData::Failed(message) => html! {
            <ErrorPanel message={message} on_retry={retry} />
        },
        RemoteData::Ready(dataset) => html! {
            <PlayerView {dataset} name={props.name.clone()} />
        },
    }
}

#[derive(Properties, PartialEq)]
pub struct ViewProps {
    pub dataset: Rc<Dataset>,
    pub name: String,
}

#[function_component(PlayerView)]
pub fn player_view(props: &ViewProps) -> Html {
    let profile = use_memo((props.dataset.clone(), props.name.clone()), |(dataset, name)| {
        PlayerProfile::build(dataset, name)
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
        <section class="player-stats">
            <div class="player-header">
                <h2>{ profile.display_name.clone() }</h2>
                <div class="summary-stats">
                    <span>{ format!("{} Tournament Wins", profile.overall.total_wins) }</span>
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
                            <span>{ format!("Best: {}", rollup.best.map_or_else(|| "-".into(), format_number)) }</span>
                            <span>{ format!("Worst: {}", rollup.worst.map_or_else(|| "-".into(), format_number)) }</span>
                            <span>{ format!("Rounds: {}", rollup.rounds) }</span>
                        </div>
                    </div>
                }) }
            </div>

            <div class="tournament-history">
                <h3>{ "Tournament History" }</h3>
                { for profile.tournaments.iter().map(render_appearance) }
            </div>
        </section>
    }
}

fn render_appearance(appearance: &PlayerTournament) -> Html {
    html! {
        <div class={classes!("tournament-entry", (!appearance.canon).then_some("exhibition"))}>
            <div class="tournament-entry-header">
                <Link<Route> to={Route::Tournament { name: appearance.tournament.clone() }}>
                    { appearance.tournament.clone() }
                </Link<Route>>
                if !appearance.canon {
                    <span class="badge exhibition">{ "Exhibition" }</span>
                }
                <span class="team">
                    { "Team: " }
                    <Link<Route> to={Route::Team { name: appearance.team.clone() }}>
                        { appearance.team.clone() }
                    </Link<Route>>
                </span>
                <span class="position">{ format!("Finished {}", format_rank(appearance.position)) }</span>
                if appearance.winner {
                    <span class="badge winner">{ "Winner" }</span>
                }
            </div>
            <table class="round-scores">
                <thead>
                    <tr>
                        <th>{ "Game" }</th>
                        <th>{ "Rounds" }</th>
                        <th>{ "Average" }</th>
                        <th>{ "Best" }</th>
                        <th>{ "Total" }</th>
                    </tr>
                </thead>
                <tbody>
                    { for appearance.games.iter().map(|(game, perf)| html! {
                        <tr>
                            <td>
                                { game.clone() }
                                if perf.multiplier != 1.0 {
                                    <span class="multiplier">{ format!(" ({}x)", perf.multiplier) }</span>
                                }
                            </td>
                            <td>
                                { perf
                                    .scores
                                    .iter()
                                    .map(|score| format_number(*score))
                                    .collect::<Vec<_>>()
                                    .join(", ") }
                            </td>
                            <td>{ format_number(perf.average) }</td>
                            <td>{ format_number(perf.best) }</td>
                            <td>{ format_number(perf.total_score) }</td>
                        </tr>
                    }) }
                    <tr class="tournament-total">
                        <td colspan="4">{ "Tournament Total" }</td>
                        <td>{ format_number(appearance.total) }</td>
                    </tr>
                </tbody>
            </table>
        </div>
    }
}
