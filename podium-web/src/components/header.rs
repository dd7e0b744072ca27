use gloo_timers::callback::Timeout;
use podium_stats::search::{SearchOutcome, SearchResult, search};
use podium_stats::Dataset;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::routes::Route;
use crate::theme::{Theme, saved_theme, set_theme};

/// Keystrokes are coalesced for this long before a search runs.
const SEARCH_DEBOUNCE_MS: u32 = 300;

#[function_component(Header)]
pub fn header() -> Html {
    let dataset = use_state(|| None::<Rc<Dataset>>);
    let query = use_state(String::new);
    let pending = use_mut_ref(|| None::<Timeout>);
    let theme = use_state(saved_theme);

    // The search index wants the full snapshot; load it once up front.
    #[cfg(target_arch = "wasm32")]
    {
        let dataset = dataset.clone();
        use_effect_with((), move |()| {
            wasm_bindgen_futures::spawn_local(async move {
                match crate::api::fetch_stats().await {
                    Ok(data) => dataset.set(Some(Rc::new(data))),
                    Err(err) => log::warn!("header search unavailable: {err}"),
                }
            });
            || {}
        });
    }

    let oninput = {
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
            // Replacing the handle drops and cancels the previous timer.
            *pending.borrow_mut() = Some(Timeout::new(SEARCH_DEBOUNCE_MS, move || {
                query.set(value);
            }));
        })
    };

    let toggle_theme = {
        let theme = theme.clone();
        Callback::from(move |_| {
            let next = theme.toggled();
            set_theme(next);
            theme.set(next);
        })
    };

    let outcome = dataset
        .as_ref()
        .map(|data| search(data, &query))
        .unwrap_or(SearchOutcome::NotSearched);

    html! {
        <header role="banner">
            <div class="header-content">
                <nav aria-label="Main navigation" class="header-nav">
                    <Link<Route> to={Route::Home}>{ "Leaderboard" }</Link<Route>>
                    <Link<Route> to={Route::HallOfFame}>{ "Hall of Fame" }</Link<Route>>
                    <Link<Route> to={Route::Tournaments}>{ "Tournaments" }</Link<Route>>
                </nav>
                <div class="header-search">
                    <input
                        id="searchInput"
                        type="search"
                        placeholder="Search players, teams, or tournaments"
                        aria-label="Search players, teams, or tournaments"
                        aria-controls="search-results"
                        oninput={oninput}
                    />
                    <SearchResultsList outcome={outcome} />
                </div>
                <button id="modeToggle" type="button" onclick={toggle_theme}>
                    { theme.label() }
                </button>
            </div>
        </header>
    }
}

#[derive(Properties, PartialEq)]
pub struct SearchResultsProps {
    pub outcome: SearchOutcome,
}

/// Grouped search hits. Nothing renders until a query is long enough;
/// a searched-but-empty outcome says so explicitly.
#[function_component(SearchResultsList)]
pub fn search_results_list(props: &SearchResultsProps) -> Html {
    let SearchOutcome::Results(results) = &props.outcome else {
        return Html::default();
    };
    if results.is_empty() {
        return html! {
            <div id="search-results" class="search-results">
                <p class="no-results">{ "No results found" }</p>
            </div>
        };
    }

    html! {
        <div id="search-results" class="search-results">
            <ul>
                { for results.iter().map(render_result) }
            </ul>
        </div>
    }
}

fn render_result(result: &SearchResult) -> Html {
    match result {
        SearchResult::Tournament { name, teams, games } => html! {
            <li class="search-result tournament-result">
                <Link<Route> to={Route::Tournament { name: name.clone() }}>
                    { name.clone() }
                </Link<Route>>
                <span class="result-meta">
                    { format!("Tournament · {teams} teams · {games} games") }
                </span>
            </li>
        },
        SearchResult::Team { name, tournament, players } => html! {
            <li class="search-result team-result">
                <Link<Route> to={Route::Team { name: name.clone() }}>
                    { name.clone() }
                </Link<Route>>
                <span class="result-meta">
                    { format!("Team · {tournament} · {players} players") }
                </span>
            </li>
        },
        SearchResult::Player { name, tournaments, total_games } => html! {
            <li class="search-result player-result">
                <Link<Route> to={Route::Player { name: name.clone() }}>
                    { name.clone() }
                </Link<Route>>
                <span class="result-meta">
                    { format!(
                        "Player · {} tournaments · {total_games} games",
                        tournaments.len()
                    ) }
                </span>
            </li>
        },
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
        outcome: SearchOutcome,
    }

    #[function_component(Harness)]
    fn harness(props: &HarnessProps) -> Html {
        let history = AnyHistory::from(MemoryHistory::new());
        html! {
            <Router history={history}>
                <SearchResultsList outcome={props.outcome.clone()} />
            </Router>
        }
    }

    #[test]
    fn not_searched_renders_nothing() {
        let props = HarnessProps {
            outcome: SearchOutcome::NotSearched,
        };
        let html = block_on(LocalServerRenderer::<Harness>::with_props(props).render());
        assert!(!html.contains("search-results"), "unexpected content: {html}");
    }

    #[test]
    fn empty_results_are_distinct_from_not_searched() {
        let props = HarnessProps {
            outcome: SearchOutcome::Results(Vec::new()),
        };
        let html = block_on(LocalServerRenderer::<Harness>::with_props(props).render());
        assert!(html.contains("No results found"), "missing empty state: {html}");
    }

    #[test]
    fn hits_render_grouped_metadata() {
        let props = HarnessProps {
            outcome: SearchOutcome::Results(vec![
                SearchResult::Tournament {
                    name: "Autumn Invitational 2024".into(),
                    teams: 2,
                    games: 3,
                },
                SearchResult::Player {
                    name: "Mina".into(),
                    tournaments: vec!["Autumn Invitational 2024".into()],
                    total_games: 5,
                },
            ]),
        };
        let html = block_on(LocalServerRenderer::<Harness>::with_props(props).render());
        assert!(html.contains("Autumn Invitational 2024"));
        assert!(html.contains("2 teams"));
        assert!(html.contains("Player · 1 tournaments · 5 games"));
    }
}
