use gloo_timers::callback::Timeout;
use podium_stats::leaderboard::{
    self, CanonFilter, Category, LeaderboardFilter, LeaderboardRow, Selection, SortBy,
};
use podium_stats::Dataset;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::format::{format_number, format_rank};
use crate::routes::Route;

const SEARCH_DEBOUNCE_MS: u32 = 300;

#[cfg(target_arch = "wasm32")]
#[function_component(LeaderboardPage)]
pub fn leaderboard_page() -> Html {
    use crate::api::RemoteData;
    use crate::components::{ErrorPanel, Loading};

    let (data, retry) = crate::api::use_dataset();
    match data {
        RemoteData::Loading => html! { <Loading /> },
        RemoteData::Failed(message) => html! {
            <ErrorPanel message={message} on_retry={retry} />
        },
        RemoteData::Ready(dataset) => html! { <LeaderboardView {dataset} /> },
    }
}

#[derive(Properties, PartialEq)]
pub struct ViewProps {
    pub dataset: Rc<Dataset>,
}

#[function_component(LeaderboardView)]
pub fn leaderboard_view(props: &ViewProps) -> Html {
    let filter = use_state(LeaderboardFilter::default);
    let query = use_state(String::new);
    let pending = use_mut_ref(|| None::<Timeout>);

    let rows = use_memo((props.dataset.clone(), (*filter).clone()), |(dataset, filter)| {
        leaderboard::project(dataset, filter)
    });

    let on_filter_change = {
        let filter = filter.clone();
        Callback::from(move |next: LeaderboardFilter| filter.set(next))
    };

    let on_search_input = {
        let query = query.clone();
        Callback::from(move |event: InputEvent| {
            let Some(input) = event
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
            else {
                return;
            };
            let value = input.value();
            let query = query.clone();
            *pending.borrow_mut() = Some(Timeout::new(SEARCH_DEBOUNCE_MS, move || {
                query.set(value);
            }));
        })
    };

    html! {
        <section class="leaderboard">
            <h2>{ "Leaderboard" }</h2>
            <FilterBar
                dataset={props.dataset.clone()}
                filter={(*filter).clone()}
                on_change={on_filter_change}
            />
            <input
                id="leaderboardSearch"
                type="search"
                placeholder="Filter this leaderboard"
                aria-label="Filter this leaderboard"
                oninput={on_search_input}
            />
            <LeaderboardTable
                rows={rows}
                category={filter.category}
                query={(*query).clone()}
            />
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct FilterBarProps {
    pub dataset: Rc<Dataset>,
    pub filter: LeaderboardFilter,
    pub on_change: Callback<LeaderboardFilter>,
}

/// Dropdown row for tournament, category, game, sort, and canon. Every
/// change recomputes immediately; only the search box debounces.
#[function_component(FilterBar)]
pub fn filter_bar(props: &FilterBarProps) -> Html {
    // A named tournament pins the canon filter; the toggle must show
    // the pinned value, not the user's last choice.
    let effective_canon = props.filter.effective_canon(&props.dataset);
    let games: Vec<String> = match &props.filter.tournament {
        Selection::Named(name) => props.dataset.tournament(name).map_or_else(Vec::new, |t| {
            t.games_by_order()
                .into_iter()
                .map(|(game, _)| game.to_string())
                .collect()
        }),
        Selection::All => props
            .dataset
            .unique_game_names()
            .into_iter()
            .map(str::to_string)
            .collect(),
    };

    let select_value = |event: &Event| {
        event
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlSelectElement>().ok())
            .map(|select| select.value())
    };

    let on_tournament = {
        let filter = props.filter.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |event: Event| {
            if let Some(value) = select_value(&event) {
                on_change.emit(LeaderboardFilter {
                    tournament: parse_selection(&value),
                    // A tournament switch can leave a stale game name.
                    game: Selection::All,
                    ..filter.clone()
                });
            }
        })
    };
    let on_category = {
        let filter = props.filter.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |event: Event| {
            if let Some(value) = select_value(&event) {
                on_change.emit(LeaderboardFilter {
                    category: if value == "team" {
                        Category::Team
                    } else {
                        Category::Player
                    },
                    ..filter.clone()
                });
            }
        })
    };
    let on_game = {
        let filter = props.filter.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |event: Event| {
            if let Some(value) = select_value(&event) {
                on_change.emit(LeaderboardFilter {
                    game: parse_selection(&value),
                    ..filter.clone()
                });
            }
        })
    };
    let on_sort = {
        let filter = props.filter.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |event: Event| {
            if let Some(value) = select_value(&event) {
                on_change.emit(LeaderboardFilter {
                    sort_by: match value.as_str() {
                        "score_low_to_high" => SortBy::ScoreLowToHigh,
                        "alphabetical" => SortBy::Alphabetical,
                        _ => SortBy::ScoreHighToLow,
                    },
                    ..filter.clone()
                });
            }
        })
    };
    let on_canon = {
        let filter = props.filter.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |event: Event| {
            if let Some(value) = select_value(&event) {
                on_change.emit(LeaderboardFilter {
                    canon: if value == "all" {
                        CanonFilter::All
                    } else {
                        CanonFilter::CanonOnly
                    },
                    ..filter.clone()
                });
            }
        })
    };

    html! {
        <div class="filter-bar">
            <select id="tournamentSelect" aria-label="Tournament" onchange={on_tournament}>
                <option value="All" selected={props.filter.tournament == Selection::All}>
                    { "All Tournaments" }
                </option>
                { for props.dataset.tournaments.iter().map(|t| {
                    let selected = props.filter.tournament == Selection::Named(t.name.clone());
                    html! {
                        <option value={t.name.clone()} {selected}>{ t.name.clone() }</option>
                    }
                }) }
            </select>
            <select id="categorySelect" aria-label="Category" onchange={on_category}>
                <option value="player" selected={props.filter.category == Category::Player}>
                    { "Players" }
                </option>
                <option value="team" selected={props.filter.category == Category::Team}>
                    { "Teams" }
                </option>
            </select>
            <select id="gameSelect" aria-label="Game" onchange={on_game}>
                <option value="All" selected={props.filter.game == Selection::All}>
                    { "All Games" }
                </option>
                { for games.iter().map(|game| {
                    let selected = props.filter.game == Selection::Named(game.clone());
                    html! {
                        <option value={game.clone()} {selected}>{ game.clone() }</option>
                    }
                }) }
            </select>
            <select id="sortSelect" aria-label="Sort order" onchange={on_sort}>
                <option value="score_high_to_low"
                    selected={props.filter.sort_by == SortBy::ScoreHighToLow}>
                    { "Score: High to Low" }
                </option>
                <option value="score_low_to_high"
                    selected={props.filter.sort_by == SortBy::ScoreLowToHigh}>
                    { "Score: Low to High" }
                </option>
                <option value="alphabetical"
                    selected={props.filter.sort_by == SortBy::Alphabetical}>
                    { "Alphabetical" }
                </option>
            </select>
            <select id="canonToggle" aria-label="Canon filter" onchange={on_canon}>
                <option value="canon" selected={effective_canon == CanonFilter::CanonOnly}>
                    { "Canon Only" }
                </option>
                <option value="all" selected={effective_canon == CanonFilter::All}>
                    { "Include Exhibitions" }
                </option>
            </select>
        </div>
    }
}

fn parse_selection(value: &str) -> Selection {
    if value == "All" {
        Selection::All
    } else {
        Selection::Named(value.to_string())
    }
}

#[derive(Properties, PartialEq)]
pub struct TableProps {
    pub rows: Rc<Vec<LeaderboardRow>>,
    pub category: Category,
    #[prop_or_default]
    pub query: String,
}

/// The rows, optionally narrowed by the search box. Search hits keep
/// the rank they held in the full listing.
#[function_component(LeaderboardTable)]
pub fn leaderboard_table(props: &TableProps) -> Html {
    let body = if props.query.trim().is_empty() {
        props
            .rows
            .iter()
            .enumerate()
            .map(|(index, row)| render_row(row, index + 1, props.category))
            .collect::<Html>()
    } else {
        let hits = leaderboard::search(&props.rows, props.query.trim());
        if hits.is_empty() {
            return html! { <p class="no-results">{ "No results found" }</p> };
        }
        hits.iter()
            .map(|hit| render_row(&hit.row, hit.original_rank, props.category))
            .collect::<Html>()
    };

    html! {
        <table class="leaderboard-table">
            <thead>
                <tr>
                    <th>{ "Rank" }</th>
                    <th>{ "Name" }</th>
                    <th>{ "Score" }</th>
                    <th>{ "Tournaments" }</th>
                </tr>
            </thead>
            <tbody>{ body }</tbody>
        </table>
    }
}

fn render_row(row: &LeaderboardRow, rank: usize, category: Category) -> Html {
    let link = match category {
        Category::Player => html! {
            <Link<Route> to={Route::Player { name: row.name.clone() }}>
                { row.name.clone() }
            </Link<Route>>
        },
        Category::Team => html! {
            <Link<Route> to={Route::Team { name: row.name.clone() }}>
                { row.name.clone() }
            </Link<Route>>
        },
    };
    html! {
        <tr>
            <td>{ format_rank(rank) }</td>
            <td>{ link }</td>
            <td>{ format_number(row.score) }</td>
            <td>{ row.tournaments.join(", ") }</td>
        </tr>
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
    }

    #[function_component(Harness)]
    fn harness(props: &HarnessProps) -> Html {
        let history = AnyHistory::from(MemoryHistory::new());
        html! {
            <Router history={history}>
                <LeaderboardView dataset={props.dataset.clone()} />
            </Router>
        }
    }

    #[test]
    fn default_view_lists_canon_players_in_rank_order() {
        let props = HarnessProps { dataset: dataset() };
        let html = block_on(LocalServerRenderer::<Harness>::with_props(props).render());
        assert!(html.contains("Vera") && html.contains("Juno") && html.contains("Mina"));
        // The exhibition-only inflation of P1-style scores must not show.
        assert!(html.contains("246"), "expected Vera's canon total: {html}");
        assert!(html.contains("All Tournaments") && html.contains("Canon Only"));
    }

    fn selected_near(html: &str, needle: &str) -> bool {
        html.find(needle)
            .is_some_and(|pos| html[pos..pos + 40].contains("selected"))
    }

    #[test]
    fn canon_toggle_shows_the_named_tournaments_own_flag() {
        // An exhibition pick overrides a canon-only choice.
        let props = FilterBarProps {
            dataset: dataset(),
            filter: LeaderboardFilter {
                tournament: Selection::Named("Midsummer Exhibition".into()),
                canon: CanonFilter::CanonOnly,
                ..LeaderboardFilter::default()
            },
            on_change: Callback::noop(),
        };
        let html = block_on(LocalServerRenderer::<FilterBar>::with_props(props).render());
        assert!(selected_near(&html, "value=\"all\""), "toggle not pinned: {html}");

        // A canon pick overrides an include-exhibitions choice.
        let props = FilterBarProps {
            dataset: dataset(),
            filter: LeaderboardFilter {
                tournament: Selection::Named("Winter Clash 2025".into()),
                canon: CanonFilter::All,
                ..LeaderboardFilter::default()
            },
            on_change: Callback::noop(),
        };
        let html = block_on(LocalServerRenderer::<FilterBar>::with_props(props).render());
        assert!(selected_near(&html, "value=\"canon\""), "toggle not pinned: {html}");
    }

    #[derive(Properties, PartialEq)]
    struct TableHarnessProps {
        rows: Rc<Vec<LeaderboardRow>>,
        query: String,
    }

    #[function_component(TableHarness)]
    fn table_harness(props: &TableHarnessProps) -> Html {
        let history = AnyHistory::from(MemoryHistory::new());
        html! {
            <Router history={history}>
                <LeaderboardTable
                    rows={props.rows.clone()}
                    category={Category::Player}
                    query={props.query.clone()}
                />
            </Router>
        }
    }

    #[test]
    fn searching_keeps_original_ranks() {
        let rows = Rc::new(leaderboard::project(
            &dataset(),
            &LeaderboardFilter::default(),
        ));
        let props = TableHarnessProps {
            rows,
            query: "otto".into(),
        };
        let html = block_on(LocalServerRenderer::<TableHarness>::with_props(props).render());
        assert!(html.contains("Otto"));
        assert!(html.contains("#5"), "Otto holds rank 5 pre-search: {html}");
        assert!(!html.contains("Mina"));
    }
}
