use futures::executor::block_on;
use podium_stats::Dataset;
use podium_web::components::Header;
use podium_web::pages::hall_of_fame::HallOfFameView;
use podium_web::pages::leaderboard::LeaderboardView;
use podium_web::pages::not_found::NotFoundPage;
use podium_web::pages::player::PlayerView;
use podium_web::pages::team::TeamView;
use podium_web::pages::tournament::TournamentView;
use podium_web::pages::tournaments::TournamentsIndexView;
use std::rc::Rc;
use yew::prelude::*;
use yew::LocalServerRenderer;
use yew_router::history::{AnyHistory, MemoryHistory};
use yew_router::prelude::*;

fn dataset() -> Rc<Dataset> {
    Rc::new(Dataset::from_json(include_str!("../static/assets/data/stats.json")).unwrap())
}

#[derive(Properties, PartialEq)]
struct HarnessProps {
    #[prop_or_default]
    children: Children,
}

#[function_component(Harness)]
fn harness(props: &HarnessProps) -> Html {
    let history = AnyHistory::from(MemoryHistory::new());
    html! {
        <Router history={history}>
            { for props.children.iter() }
        </Router>
    }
}

fn render(children: Html) -> String {
    let props = HarnessProps {
        children: Children::new(vec![children]),
    };
    block_on(LocalServerRenderer::<Harness>::with_props(props).render())
}

#[test]
fn header_renders_navigation_and_theme_toggle() {
    let html = render(html! { <Header /> });
    assert!(html.contains("Leaderboard"));
    assert!(html.contains("Hall of Fame"));
    assert!(html.contains("Switch to Light Mode"));
}

#[test]
fn leaderboard_page_lists_every_canon_player() {
    let dataset = dataset();
    let html = render(html! { <LeaderboardView {dataset} /> });
    for name in ["Vera", "Juno", "Mina", "Silas", "Otto"] {
        assert!(html.contains(name), "missing {name}: {html}");
    }
}

#[test]
fn hall_of_fame_page_names_all_record_games() {
    let dataset = dataset();
    let html = render(html! { <HallOfFameView {dataset} /> });
    for game in ["Darts", "Pool", "Kubb"] {
        assert!(html.contains(game), "missing {game}");
    }
    assert!(html.contains("First Places"));
}

#[test]
fn tournament_pages_cross_link_teams_and_players() {
    let dataset = dataset();
    let index = render(html! { <TournamentsIndexView dataset={dataset.clone()} /> });
    assert!(index.contains("/tournament/"));
    assert!(index.contains("Autumn Invitational 2024"));

    let report = render(html! {
        <TournamentView dataset={dataset.clone()} name={"Winter Clash 2025".to_string()} />
    });
    assert!(report.contains("/team/"));
    assert!(report.contains("Standings"));
}

#[test]
fn profile_pages_render_for_every_entity_in_the_snapshot() {
    let dataset = dataset();
    for tournament in &dataset.tournaments {
        for team in &tournament.teams {
            let html = render(html! {
                <TeamView dataset={dataset.clone()} name={team.name.clone()} />
            });
            assert!(html.contains(&team.name), "missing team page for {}", team.name);
            for player in &team.players {
                for name in player.name.all_names() {
                    let html = render(html! {
                        <PlayerView dataset={dataset.clone()} name={name.to_string()} />
                    });
                    assert!(
                        html.contains("Tournament History"),
                        "missing player page for {name}"
                    );
                }
            }
        }
    }
}

#[test]
fn not_found_page_links_back_home() {
    let html = render(html! { <NotFoundPage /> });
    assert!(html.contains("Page Not Found"));
}
