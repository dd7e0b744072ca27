use podium_stats::report::{GameSection, TournamentReport};
use podium_stats::Dataset;
use std::rc::Rc;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::format::{format_number, format_rank};
use crate::paths::screenshot_url;
use crate::routes::Route;

#[derive(Properties, PartialEq)]
pub struct PageProps {
    pub name: String,
}

#[cfg(target_arch = "wasm32")]
#[function_component(TournamentPage)]
pub fn tournament_page(props: &PageProps) -> Html {
    use crate::api::RemoteData;
    use crate::components::{ErrorPanel, Loading};

    let (data, retry) = crate::api::use_dataset();
    let screenshots = use_state(Vec::<String>::new);
    {
        let screenshots = screenshots.clone();
        use_effect_with(props.name.clone(), move |name| {
            let name = name.clone();
            wasm_bindgen_futures::spawn_local(async move {
                screenshots.set(crate::api::fetch_screenshots(&name).await);
            });
            || {}
        });
    }

    match data {
        RemoteData::Loading => html! { <Loading /> },
        RemoteData::Failed(message) => html! {
            <ErrorPanel message={message} on_retry={retry} />
        },
        RemoteData::Ready(dataset) => html! {
            <TournamentView
                {dataset}
                name={props.name.clone()}
                screenshots={(*screenshots).clone()}
            />
        },
    }
}

#[derive(Properties, PartialEq)]
pub struct ViewProps {
    pub dataset: Rc<Dataset>,
    pub name: String,
    #[prop_or_default]
    pub screenshots: Vec<String>,
}

#[function_component(TournamentView)]
pub fn tournament_view(props: &ViewProps) -> Html {
    let report = use_memo((props.dataset.clone(), props.name.clone()), |(dataset, name)| {
        TournamentReport::build(dataset, name)
    });

    let report = match report.as_ref() {
        Ok(report) => report,
        Err(err) => {
            return html! {
                <section class="error-panel" role="alert">
                    <p class="error-message">{ err.to_string() }</p>
                    <Link<Route> to={Route::Tournaments}>{ "Back to tournaments" }</Link<Route>>
                </section>
            };
        }
    };

    html! {
        <section class="tournament-report">
            <div class="tournament-header">
                <h2>{ report.name.clone() }</h2>
                if !report.canon {
                    <span class="badge exhibition">{ "Exhibition" }</span>
                }
                <div class="tournament-summary">
                    <span>{ format!("{} Teams", report.team_count) }</span>
                    <span>{ format!("{} Players", report.player_count) }</span>
                    <span>{ format!("{} Games", report.game_count) }</span>
                </div>
                if let Some(winner) = &report.winner {
                    <div class="winner-info">
                        { "Champions: " }
                        <Link<Route> to={Route::Team { name: winner.team.clone() }}>
                            { winner.team.clone() }
                        </Link<Route>>
                        <span class="roster">{ format!(" ({})", winner.roster.join(", ")) }</span>
                    </div>
                }
            </div>

            <div class="standings">
                <h3>{ "Standings" }</h3>
                <table>
                    <thead>
                        <tr>
                            <th>{ "Rank" }</th>
                            <th>{ "Team" }</th>
                            <th>{ "Total Score" }</th>
                            <th>{ "Players" }</th>
                        </tr>
                    </thead>
                    <tbody>
                        { for report.standings.iter().map(|row| html! {
                            <tr class={classes!(row.winner.then_some("winner"))}>
                                <td>{ format_rank(row.rank) }</td>
                                <td>
                                    <Link<Route> to={Route::Team { name: row.team.clone() }}>
                                        { row.team.clone() }
                                    </Link<Route>>
                                </td>
                                <td>{ format_number(row.total_score) }</td>
                                <td>{ row.player_count }</td>
                            </tr>
                        }) }
                    </tbody>
                </table>
            </div>

            <GameSections sections={report.games.clone()} />
            <Gallery tournament={report.name.clone()} screenshots={props.screenshots.clone()} />
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct GameSectionsProps {
    sections: Vec<GameSection>,
}

/// Per-game tabs. One section shows at a time, in configured order.
#[function_component(GameSections)]
fn game_sections(props: &GameSectionsProps) -> Html {
    let active = use_state(|| 0_usize);
    if props.sections.is_empty() {
        return Html::default();
    }
    let current = props.sections.get(*active).unwrap_or(&props.sections[0]);

    html! {
        <div class="game-sections">
            <nav class="game-nav" aria-label="Games">
                { for props.sections.iter().enumerate().map(|(index, section)| {
                    let active_handle = active.clone();
                    let onclick = Callback::from(move |_| active_handle.set(index));
                    html! {
                        <button
                            type="button"
                            class={classes!("game-nav-item", (index == *active).then_some("active"))}
                            {onclick}
                        >
                            { section.game.clone() }
                            <span class="game-order">{ format!("Game {}", section.order) }</span>
                        </button>
                    }
                }) }
            </nav>
            { render_game_section(current) }
        </div>
    }
}

fn render_game_section(section: &GameSection) -> Html {
    html! {
        <div class="game-section">
            <div class="game-header">
                <h4>{ section.game.clone() }</h4>
                <span class="game-multiplier">{ format!("{}x Multiplier", section.multiplier) }</span>
                <span class="game-top">{ format!("Top Score: {}", format_number(section.top_score)) }</span>
            </div>
            <table class="game-standings">
                <thead>
                    <tr>
                        <th>{ "Rank" }</th>
                        <th>{ "Team" }</th>
                        <th>{ "Score" }</th>
                    </tr>
                </thead>
                <tbody>
                    { for section.teams.iter().map(|row| html! {
                        <tr>
                            <td>{ format_rank(row.rank) }</td>
                            <td>
                                <Link<Route> to={Route::Team { name: row.team.clone() }}>
                                    { row.team.clone() }
                                </Link<Route>>
                            </td>
                            <td>{ format_number(row.score) }</td>
                        </tr>
                    }) }
                </tbody>
            </table>
            { for section.teams.iter().map(|row| html! {
                <div class="team-performance">
                    <h5>{ format!("{} Player Performances", row.team) }</h5>
                    <table>
                        <thead>
                            <tr>
                                <th>{ "Player" }</th>
                                { for (1..=section.rounds).map(|round| html! {
                                    <th>{ format!("Round {round}") }</th>
                                }) }
                                <th>{ "Total" }</th>
                            </tr>
                        </thead>
                        <tbody>
                            { for row.players.iter().map(|line| html! {
                                <tr>
                                    <td>{ line.name.display() }</td>
                                    { for (0..section.rounds).map(|round| html! {
                                        <td>
                                            { line.rounds.get(round).map_or_else(
                                                || "-".to_string(),
                                                |score| format_number(*score),
                                            ) }
                                        </td>
                                    }) }
                                    <td>{ format_number(line.total) }</td>
                                </tr>
                            }) }
                        </tbody>
                    </table>
                </div>
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct GalleryProps {
    tournament: String,
    screenshots: Vec<String>,
}

/// Screenshot strip with a lightbox. An empty file list renders
/// nothing at all.
#[function_component(Gallery)]
fn gallery(props: &GalleryProps) -> Html {
    let open = use_state(|| None::<usize>);
    if props.screenshots.is_empty() {
        return Html::default();
    }

    let close = {
        let open = open.clone();
        Callback::from(move |_| open.set(None))
    };
    let step = |delta: isize| {
        let open = open.clone();
        let len = props.screenshots.len() as isize;
        Callback::from(move |_| {
            if let Some(current) = *open {
                let next = (current as isize + delta).rem_euclid(len) as usize;
                open.set(Some(next));
            }
        })
    };

    html! {
        <div class="tournament-gallery">
            <h3>{ "Gallery" }</h3>
            <div class="screenshot-gallery">
                { for props.screenshots.iter().enumerate().map(|(index, file)| {
                    let open = open.clone();
                    let onclick = Callback::from(move |_| open.set(Some(index)));
                    html! {
                        <img
                            class="screenshot-item"
                            src={screenshot_url(&props.tournament, file)}
                            alt={format!("Tournament screenshot {}", index + 1)}
                            loading="lazy"
                            {onclick}
                        />
                    }
                }) }
            </div>
            if let Some(index) = *open {
                <div class="lightbox" role="dialog" aria-modal="true">
                    <button type="button" class="lightbox-close" onclick={close}>{ "×" }</button>
                    <button type="button" class="lightbox-prev" onclick={step(-1)}>{ "‹" }</button>
                    <img
                        src={screenshot_url(&props.tournament, &props.screenshots[index])}
                        alt={format!("Tournament screenshot {}", index + 1)}
                    />
                    <button type="button" class="lightbox-next" onclick={step(1)}>{ "›" }</button>
                </div>
            }
        </div>
    }
}
