use podium_stats::leaderboard::{self, CanonFilter, Category, LeaderboardFilter, Selection};
use podium_stats::search::{SearchOutcome, SearchResult, search};
use podium_stats::{Dataset, PlayerProfile, TeamProfile, TournamentReport};

fn load_snapshot() -> Dataset {
    Dataset::from_json(include_str!(
        "../../podium-web/static/assets/data/stats.json"
    ))
    .unwrap()
}

#[test]
fn tournament_report_matches_hand_computed_standings() {
    let report = TournamentReport::build(&load_snapshot(), "Autumn Invitational 2024").unwrap();
    assert_eq!(report.team_count, 2);
    assert_eq!(report.player_count, 5);
    assert_eq!(report.game_count, 3);
    assert_eq!(report.winner.as_ref().unwrap().team, "Sharp Shooters");

    assert_eq!(report.standings[0].team, "Sharp Shooters");
    assert_eq!(report.standings[0].total_score, 212.0);
    assert_eq!(report.standings[1].team, "Corner Pocket");
    assert_eq!(report.standings[1].total_score, 186.0);

    let games: Vec<&str> = report.games.iter().map(|g| g.game.as_str()).collect();
    assert_eq!(games, ["Darts", "Pool", "Kubb"]);

    let darts = &report.games[0];
    assert_eq!(darts.teams[0].team, "Sharp Shooters");
    assert_eq!(darts.teams[0].score, 113.0);
    assert_eq!(darts.top_score, 113.0);
    assert_eq!(darts.rounds, 2);
}

#[test]
fn player_profile_positions_shift_between_tournaments() {
    let dataset = load_snapshot();
    let mina = PlayerProfile::build(&dataset, "Mina").unwrap();
    assert_eq!(mina.tournaments.len(), 2);
    assert_eq!(mina.tournaments[0].position, 1);
    assert_eq!(mina.tournaments[1].position, 2);
    assert_eq!(mina.overall.total_score, 212.0);
    assert_eq!(mina.overall.games_played, 7);
    assert_eq!(mina.overall.total_wins, 2);

    // Either duo name resolves; the exhibition does not add to totals.
    let juno = PlayerProfile::build(&dataset, "Juno").unwrap();
    assert_eq!(juno.display_name, "Vera / Juno");
    assert_eq!(juno.overall.total_score, 246.0);
}

#[test]
fn team_profile_splits_canon_and_full_history() {
    let profile = TeamProfile::build(&load_snapshot(), "Corner Pocket").unwrap();
    assert_eq!(profile.tournaments.len(), 3);
    assert_eq!(profile.overall.total_score, 309.0);
    assert_eq!(profile.overall.wins, 0);
    assert_eq!(profile.overall.games_played, 5);

    let silas = profile
        .player_rollups
        .iter()
        .find(|r| r.name == "Silas")
        .unwrap();
    assert_eq!(silas.total_score, 63.0);
    assert_eq!(silas.appearances, 1);
}

#[test]
fn leaderboard_defaults_rank_canon_players() {
    let rows = leaderboard::project(&load_snapshot(), &LeaderboardFilter::default());
    let ranked: Vec<(&str, f64)> = rows.iter().map(|r| (r.name.as_str(), r.score)).collect();
    assert_eq!(
        ranked,
        [
            ("Vera", 246.0),
            ("Juno", 246.0),
            ("Mina", 212.0),
            ("Silas", 117.0),
            ("Otto", 72.0)
        ]
    );

    let hits = leaderboard::search(&rows, "juno");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].original_rank, 2);
}

#[test]
fn picking_the_exhibition_flips_the_canon_filter() {
    let filter = LeaderboardFilter {
        tournament: Selection::Named("Midsummer Exhibition".into()),
        category: Category::Team,
        canon: CanonFilter::CanonOnly,
        ..LeaderboardFilter::default()
    };
    let rows = leaderboard::project(&load_snapshot(), &filter);
    let ranked: Vec<(&str, f64)> = rows.iter().map(|r| (r.name.as_str(), r.score)).collect();
    assert_eq!(ranked, [("Corner Pocket", 30.0), ("Picnic Pirates", 25.0)]);
}

#[test]
fn global_search_groups_and_merges() {
    let dataset = load_snapshot();
    let SearchOutcome::Results(results) = search(&dataset, "pocket") else {
        panic!("expected results");
    };
    // Team hits are per appearance, one for each tournament entered.
    assert_eq!(results.len(), 3);
    assert!(results
        .iter()
        .all(|hit| matches!(hit, SearchResult::Team { name, .. } if name == "Corner Pocket")));

    let SearchOutcome::Results(results) = search(&dataset, "vera") else {
        panic!("expected results");
    };
    assert_eq!(results.len(), 1);
    let SearchResult::Player { tournaments, .. } = &results[0] else {
        panic!("expected a player hit");
    };
    assert_eq!(
        tournaments,
        &["Autumn Invitational 2024", "Winter Clash 2025"]
    );

    assert_eq!(search(&dataset, "v"), SearchOutcome::NotSearched);
}
