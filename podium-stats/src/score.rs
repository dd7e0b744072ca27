//! Pure scoring primitives shared by every aggregation pass.

use crate::dataset::{GameConfig, Player, Team};
use std::collections::BTreeMap;

/// Sum of a score sequence. Empty input yields 0.
#[must_use]
pub fn sum_scores(scores: &[f64]) -> f64 {
    scores.iter().sum()
}

/// Arithmetic mean of a score sequence. Empty input yields 0, not NaN,
/// so downstream extremum comparisons stay well-defined.
#[must_use]
pub fn average_score(scores: &[f64]) -> f64 {
    if scores.is_empty() {
        return 0.0;
    }
    sum_scores(scores) / scores.len() as f64
}

/// A player's total for one game: raw sum scaled by the game multiplier.
#[must_use]
pub fn player_score(scores: &[f64], multiplier: f64) -> f64 {
    sum_scores(scores) * multiplier
}

/// A team's total for one game. Players without an entry for the game
/// contribute nothing.
#[must_use]
pub fn team_game_score(team: &Team, game: &str, config: &GameConfig) -> f64 {
    team.players
        .iter()
        .filter_map(|player| player.scores.get(game))
        .map(|scores| player_score(scores, config.multiplier))
        .sum()
}

/// A team's total across every game in the tournament's game map.
#[must_use]
pub fn total_team_score(team: &Team, games: &BTreeMap<String, GameConfig>) -> f64 {
    games
        .iter()
        .map(|(game, config)| team_game_score(team, game, config))
        .sum()
}

/// A player's tournament total across every game they have an entry
/// for. Score entries naming a game absent from `games` are skipped.
#[must_use]
pub fn player_tournament_score(player: &Player, games: &BTreeMap<String, GameConfig>) -> f64 {
    games
        .iter()
        .filter_map(|(game, config)| {
            player
                .scores
                .get(game)
                .map(|scores| player_score(scores, config.multiplier))
        })
        .sum()
}
