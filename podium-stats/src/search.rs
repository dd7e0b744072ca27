//! Global name search across tournaments, teams, and players.

use crate::dataset::Dataset;

/// Minimum trimmed query length before a search runs at all.
pub const MIN_QUERY_LEN: usize = 2;

/// One search hit. Ordering across variants is Tournament, then Team,
/// then Player, alphabetical within each group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchResult {
    Tournament {
        name: String,
        teams: usize,
        games: usize,
    },
    Team {
        name: String,
        tournament: String,
        players: usize,
    },
    /// Merged across tournaments per matching name.
    Player {
        name: String,
        tournaments: Vec<String>,
        /// Round count from the player's first matching appearance.
        total_games: u32,
    },
}

impl SearchResult {
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Tournament { name, .. } | Self::Team { name, .. } | Self::Player { name, .. } => {
                name
            }
        }
    }

    fn group(&self) -> u8 {
        match self {
            Self::Tournament { .. } => 0,
            Self::Team { .. } => 1,
            Self::Player { .. } => 2,
        }
    }
}

/// Distinguishes "too short to search" from "searched, nothing found".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    NotSearched,
    Results(Vec<SearchResult>),
}

/// Case-insensitive substring search over every tournament name, team
/// name, and player identity. Queries shorter than [`MIN_QUERY_LEN`]
/// after trimming do not search.
#[must_use]
pub fn search(dataset: &Dataset, query: &str) -> SearchOutcome {
    let needle = query.trim().to_lowercase();
    if needle.chars().count() < MIN_QUERY_LEN {
        return SearchOutcome::NotSearched;
    }

    let mut results: Vec<SearchResult> = Vec::new();
    let mut players: Vec<SearchResult> = Vec::new();

    for tournament in &dataset.tournaments {
        if tournament.name.to_lowercase().contains(&needle) {
            results.push(SearchResult::Tournament {
                name: tournament.name.clone(),
                teams: tournament.teams.len(),
                games: tournament.games.len(),
            });
        }
        for team in &tournament.teams {
            if team.name.to_lowercase().contains(&needle) {
                results.push(SearchResult::Team {
                    name: team.name.clone(),
                    tournament: tournament.name.clone(),
                    players: team.players.len(),
                });
            }
            for player in &team.players {
                for name in player.name.all_names() {
                    if name.to_lowercase().contains(&needle) {
                        merge_player(&mut players, name, &tournament.name, player.rounds_played());
                    }
                }
            }
        }
    }

    results.append(&mut players);
    results.sort_by(|a, b| a.group().cmp(&b.group()).then_with(|| a.name().cmp(b.name())));
    SearchOutcome::Results(results)
}

fn merge_player(players: &mut Vec<SearchResult>, name: &str, tournament: &str, rounds: u32) {
    for result in players.iter_mut() {
        if let SearchResult::Player { name: known, tournaments, .. } = result
            && known == name
        {
            if !tournaments.iter().any(|t| t == tournament) {
                tournaments.push(tournament.to_string());
            }
            return;
        }
    }
    players.push(SearchResult::Player {
        name: name.to_string(),
        tournaments: vec![tournament.to_string()],
        total_games: rounds,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Dataset;

    fn dataset() -> Dataset {
        Dataset::from_json(
            r#"{
            "tournaments": {
                "Spring Open": {
                    "winners": "Red Hawks",
                    "games": {
                        "Darts": {"multiplier": 1.0, "order": 1},
                        "Pool": {"multiplier": 2.0, "order": 2}
                    },
                    "teams": [
                        {"name": "Red Hawks", "players": [
                            {"name": "Redmond", "scores": {"Darts": [3, 5]}}
                        ]},
                        {"name": "Blue Crew", "players": [
                            {"name": ["Ada", "Grace"], "scores": {"Darts": [7], "Pool": [2]}}
                        ]}
                    ]
                },
                "Red Cup": {
                    "winners": "Blue Crew",
                    "games": {},
                    "teams": [
                        {"name": "Blue Crew", "players": [
                            {"name": "Ada", "scores": {}}
                        ]}
                    ]
                }
            }
        }"#,
        )
        .unwrap()
    }

    #[test]
    fn short_queries_do_not_search() {
        assert_eq!(search(&dataset(), ""), SearchOutcome::NotSearched);
        assert_eq!(search(&dataset(), "a"), SearchOutcome::NotSearched);
        assert_eq!(search(&dataset(), "  a  "), SearchOutcome::NotSearched);
        // Two characters after trimming is enough.
        assert!(matches!(search(&dataset(), " ad "), SearchOutcome::Results(_)));
    }

    #[test]
    fn no_hits_is_an_empty_result_set_not_notsearched() {
        assert_eq!(search(&dataset(), "zzzz"), SearchOutcome::Results(Vec::new()));
    }

    #[test]
    fn results_group_tournament_then_team_then_player_alphabetically() {
        let SearchOutcome::Results(results) = search(&dataset(), "red") else {
            panic!("expected results");
        };
        let names: Vec<&str> = results.iter().map(SearchResult::name).collect();
        assert_eq!(names, ["Red Cup", "Red Hawks", "Redmond"]);
        assert!(matches!(results[0], SearchResult::Tournament { teams: 1, games: 0, .. }));
        assert!(matches!(
            results[1],
            SearchResult::Team { ref tournament, players: 1, .. } if tournament == "Spring Open"
        ));
    }

    #[test]
    fn player_hits_merge_across_tournaments() {
        let SearchOutcome::Results(results) = search(&dataset(), "ada") else {
            panic!("expected results");
        };
        assert_eq!(results.len(), 1);
        let SearchResult::Player { name, tournaments, total_games } = &results[0] else {
            panic!("expected a player hit");
        };
        assert_eq!(name, "Ada");
        assert_eq!(tournaments, &["Spring Open", "Red Cup"]);
        assert_eq!(*total_games, 2);
    }

    #[test]
    fn duo_names_match_independently() {
        let SearchOutcome::Results(results) = search(&dataset(), "grace") else {
            panic!("expected results");
        };
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name(), "Grace");
    }
}
