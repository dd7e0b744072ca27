use podium_stats::records::{GameRecord, RecordHolder, Records};
use podium_stats::Dataset;
use std::rc::Rc;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::format::format_number;
use crate::routes::Route;

#[cfg(target_arch = "wasm32")]
#[function_component(HallOfFamePage)]
pub fn hall_of_fame_page() -> Html {
    use crate::api::RemoteData;
    use crate::components::{ErrorPanel, Loading};

    let (data, retry) = crate::api::use_dataset();
    match data {
        RemoteData::Loading => html! { <Loading /> },
        RemoteData::Failed(message) => html! {
            <ErrorPanel message={message} on_retry={retry} />
        },
        RemoteData::Ready(dataset) => html! { <HallOfFameView {dataset} /> },
    }
}

#[derive(Properties, PartialEq)]
pub struct ViewProps {
    pub dataset: Rc<Dataset>,
}

#[function_component(HallOfFameView)]
pub fn hall_of_fame_view(props: &ViewProps) -> Html {
    let records = use_memo(props.dataset.clone(), |dataset| Records::compute(dataset));

    html! {
        <section class="hall-of-fame">
            <h2>{ "Hall of Fame" }</h2>
            <div class="game-records">
                <h3>{ "Game Records" }</h3>
                { for records.game_records.iter().map(|(game, record)| {
                    render_game_record(game, record)
                }) }
            </div>
            <PlayerRecordsSection records={records.clone()} />
            <TeamRecordsSection records={records.clone()} />
            <div class="tournament-digest">
                <h3>{ "Tournament Winners" }</h3>
                <ul>
                    { for records.tournament_digest.iter().map(|summary| html! {
                        <li>
                            <Link<Route> to={Route::Tournament { name: summary.name.clone() }}>
                                { summary.name.clone() }
                            </Link<Route>>
                            { ": " }
                            <Link<Route> to={Route::Team { name: summary.winner.clone() }}>
                                { summary.winner.clone() }
                            </Link<Route>>
                            if !summary.winning_roster.is_empty() {
                                <span class="roster">
                                    { format!(" ({})", summary.winning_roster.join(", ")) }
                                </span>
                            }
                        </li>
                    }) }
                </ul>
            </div>
        </section>
    }
}

fn render_game_record(game: &str, record: &GameRecord) -> Html {
    html! {
        <div class="game-record-card">
            <h4>{ game }</h4>
            <dl>
                { render_holder("Highest Score", record.highest.unmultiplied.as_ref()) }
                { render_holder("Highest (Multiplied)", record.highest.multiplied.as_ref()) }
                { render_holder("Lowest Score", record.lowest.unmultiplied.as_ref()) }
                { render_holder("Lowest (Multiplied)", record.lowest.multiplied.as_ref()) }
                { render_holder("Best Average", record.averages.highest.as_ref()) }
                { render_holder("Worst Average", record.averages.lowest.as_ref()) }
            </dl>
            if !record.first_places.is_empty() {
                <div class="first-places">
                    <h5>{ "First Places" }</h5>
                    <ul>
                        { for record.first_places.iter().map(|(player, count)| html! {
                            <li>
                                <Link<Route> to={Route::Player { name: player.clone() }}>
                                    { player.clone() }
                                </Link<Route>>
                                { format!(" × {count}") }
                            </li>
                        }) }
                    </ul>
                </div>
            }
        </div>
    }
}

fn render_holder(label: &str, holder: Option<&RecordHolder>) -> Html {
    let Some(holder) = holder else {
        return Html::default();
    };
    html! {
        <>
            <dt>{ label.to_string() }</dt>
            <dd>
                { format_number(holder.score) }
                { " by " }
                <Link<Route> to={Route::Player { name: holder.player.clone() }}>
                    { holder.player.clone() }
                </Link<Route>>
                { format!(" ({})", holder.tournament) }
            </dd>
        </>
    }
}

#[derive(Properties, PartialEq)]
struct RecordsProps {
    records: Rc<Records>,
}

#[function_component(PlayerRecordsSection)]
fn player_records_section(props: &RecordsProps) -> Html {
    let players = &props.records.player_records;
    let leader = |label: &str, entry: &Option<podium_stats::records::Leader>| {
        entry.as_ref().map_or_else(Html::default, |leader| {
            html! {
                <li>
                    { format!("{label}: ") }
                    <Link<Route> to={Route::Player { name: leader.player.clone() }}>
                        { leader.player.clone() }
                    </Link<Route>>
                    { format!(" ({})", format_number(leader.value)) }
                </li>
            }
        })
    };

    html! {
        <div class="player-records">
            <h3>{ "Player Records" }</h3>
            <ul class="leaders">
                { leader("Highest Average", &players.highest_average) }
                { leader("Lowest Average", &players.lowest_average) }
                { leader("Most Wins", &players.most_wins) }
                { leader("Most Participations", &players.most_participations) }
                { leader("Most First Places", &players.most_first_places) }
            </ul>
            <table class="records-table">
                <thead>
                    <tr>
                        <th>{ "Player" }</th>
                        <th>{ "Wins" }</th>
                        <th>{ "Tournaments" }</th>
                        <th>{ "Total Score" }</th>
                        <th>{ "Average" }</th>
                        <th>{ "First Places" }</th>
                    </tr>
                </thead>
                <tbody>
                    { for players.players.iter().map(|agg| html! {
                        <tr>
                            <td>
                                <Link<Route> to={Route::Player { name: agg.name.clone() }}>
                                    { agg.name.clone() }
                                </Link<Route>>
                            </td>
                            <td>{ agg.wins }</td>
                            <td>{ agg.participations }</td>
                            <td>{ format_number(agg.total_score) }</td>
                            <td>{ format_number(agg.average()) }</td>
                            <td>{ agg.first_places }</td>
                        </tr>
                    }) }
                </tbody>
            </table>
        </div>
    }
}

#[function_component(TeamRecordsSection)]
fn team_records_section(props: &RecordsProps) -> Html {
    let teams = &props.records.team_records;
    html! {
        <div class="team-records">
            <h3>{ "Team Records" }</h3>
            <ul class="leaders">
                if let Some(best) = &teams.best {
                    <li>
                        { "Best Team: " }
                        <Link<Route> to={Route::Team { name: best.name.clone() }}>
                            { best.name.clone() }
                        </Link<Route>>
                        { format!(" ({} avg)", format_number(best.average)) }
                    </li>
                }
                if let Some(worst) = &teams.worst {
                    <li>
                        { "Worst Team: " }
                        <Link<Route> to={Route::Team { name: worst.name.clone() }}>
                            { worst.name.clone() }
                        </Link<Route>>
                        { format!(" ({} avg)", format_number(worst.average)) }
                    </li>
                }
            </ul>
            <table class="records-table">
                <thead>
                    <tr>
                        <th>{ "Team" }</th>
                        <th>{ "Tournaments" }</th>
                        <th>{ "Wins" }</th>
                        <th>{ "Total Score" }</th>
                        <th>{ "Average" }</th>
                    </tr>
                </thead>
                <tbody>
                    { for teams.teams.iter().map(|agg| html! {
                        <tr>
                            <td>
                                <Link<Route> to={Route::Team { name: agg.name.clone() }}>
                                    { agg.name.clone() }
                                </Link<Route>>
                            </td>
                            <td>{ agg.tournaments }</td>
                            <td>{ agg.wins }</td>
                            <td>{ format_number(agg.total_score) }</td>
                            <td>{ format_number(agg.average_score()) }</td>
                        </tr>
                    }) }
                </tbody>
            </table>
        </div>
    }
}
