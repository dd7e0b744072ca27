//! Leaderboard projection: filterable, sortable rows over the snapshot,
//! plus within-leaderboard search.

use crate::dataset::{Dataset, Tournament};
use crate::score::{player_score, player_tournament_score, team_game_score, total_team_score};

/// "All" or one named tournament/game.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    All,
    Named(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Category {
    #[default]
    Player,
    Team,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortBy {
    #[default]
    ScoreHighToLow,
    ScoreLowToHigh,
    Alphabetical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CanonFilter {
    #[default]
    CanonOnly,
    All,
}

/// The full filter state of the leaderboard view.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LeaderboardFilter {
    pub tournament: Selection,
    pub category: Category,
    pub game: Selection,
    pub sort_by: SortBy,
    pub canon: CanonFilter,
}

impl LeaderboardFilter {
    /// Selecting one tournament pins the canon filter to that
    /// tournament's own flag; "All" leaves the chosen filter alone.
    #[must_use]
    pub fn effective_canon(&self, dataset: &Dataset) -> CanonFilter {
        match &self.tournament {
            Selection::All => self.canon,
            Selection::Named(name) => match dataset.tournament(name) {
                Some(t) if t.canon => CanonFilter::CanonOnly,
                Some(_) => CanonFilter::All,
                None => self.canon,
            },
        }
    }
}

/// One leaderboard row. Team rows name their single tournament; player
/// rows accumulate across every included tournament.
#[derive(Debug, Clone, PartialEq)]
pub struct LeaderboardRow {
    pub name: String,
    pub score: f64,
    pub tournaments: Vec<String>,
    /// Team rows only: the roster's display names.
    pub roster: Vec<String>,
}

/// A search hit keeps the rank the row held before filtering.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedRow {
    pub row: LeaderboardRow,
    pub original_rank: usize,
}

/// Project the leaderboard for one filter state. Rows come back already
/// sorted; sorting is stable, so ties keep projection order.
#[must_use]
pub fn project(dataset: &Dataset, filter: &LeaderboardFilter) -> Vec<LeaderboardRow> {
    let canon = filter.effective_canon(dataset);
    let included: Vec<&Tournament> = dataset
        .tournaments
        .iter()
        .filter(|t| match &filter.tournament {
            Selection::All => true,
            Selection::Named(name) => t.name == *name,
        })
        .filter(|t| canon == CanonFilter::All || t.canon)
        .collect();

    let mut rows = match filter.category {
        Category::Team => team_rows(&included, &filter.game),
        Category::Player => player_rows(&included, &filter.game),
    };

    match filter.sort_by {
        SortBy::ScoreHighToLow => rows.sort_by(|a, b| {
            b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal)
        }),
        SortBy::ScoreLowToHigh => rows.sort_by(|a, b| {
            a.score.partial_cmp(&b.score).unwrap_or(std::cmp::Ordering::Equal)
        }),
        SortBy::Alphabetical => rows.sort_by(|a, b| a.name.cmp(&b.name)),
    }
    rows
}

/// Case-insensitive substring search over sorted rows. Hits retain the
/// 1-indexed rank they held in the unfiltered projection.
#[must_use]
pub fn search(rows: &[LeaderboardRow], query: &str) -> Vec<RankedRow> {
    let needle = query.to_lowercase();
    rows.iter()
        .enumerate()
        .filter(|(_, row)| row.name.to_lowercase().contains(&needle))
        .map(|(index, row)| RankedRow {
            row: row.clone(),
            original_rank: index + 1,
        })
        .collect()
}

/// One row per team per tournament. A game filter naming a game the
/// tournament does not play scores the row 0.
fn team_rows(tournaments: &[&Tournament], game: &Selection) -> Vec<LeaderboardRow> {
    let mut rows = Vec::new();
    for tournament in tournaments {
        for team in &tournament.teams {
            let score = match game {
                Selection::All => total_team_score(team, &tournament.games),
                Selection::Named(name) => tournament
                    .games
                    .get(name)
                    .map_or(0.0, |config| team_game_score(team, name, config)),
            };
            rows.push(LeaderboardRow {
                name: team.name.clone(),
                score,
                tournaments: vec![tournament.name.clone()],
                roster: team.players.iter().map(|p| p.name.display()).collect(),
            });
        }
    }
    rows
}

/// Player rows merged by name across tournaments. Every name of a duo
/// becomes its own row carrying the shared accumulated score.
fn player_rows(tournaments: &[&Tournament], game: &Selection) -> Vec<LeaderboardRow> {
    let mut rows: Vec<LeaderboardRow> = Vec::new();
    for tournament in tournaments {
        for team in &tournament.teams {
            for player in &team.players {
                let score = match game {
                    Selection::All => player_tournament_score(player, &tournament.games),
                    Selection::Named(name) => {
                        let multiplier = tournament
                            .games
                            .get(name)
                            .map_or(1.0, |config| config.multiplier);
                        player
                            .scores
                            .get(name)
                            .map_or(0.0, |scores| player_score(scores, multiplier))
                    }
                };
                for name in player.name.all_names() {
                    merge_player(&mut rows, name, score, &tournament.name);
                }
            }
        }
    }
    rows
}

fn merge_player(rows: &mut Vec<LeaderboardRow>, name: &str, score: f64, tournament: &str) {
    if let Some(row) = rows.iter_mut().find(|row| row.name == name) {
        row.score += score;
        if !row.tournaments.iter().any(|t| t == tournament) {
            row.tournaments.push(tournament.to_string());
        }
    } else {
        rows.push(LeaderboardRow {
            name: name.to_string(),
            score,
            tournaments: vec![tournament.to_string()],
            roster: Vec::new(),
        });
    }
}
