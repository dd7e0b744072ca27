//! Single-tournament report: header digest, overall standings, and
//! per-game sections.

use crate::dataset::{Dataset, Identity, Tournament};
use crate::error::StatsError;
use crate::score::{player_score, team_game_score, total_team_score};

/// One row of the overall standings.
#[derive(Debug, Clone, PartialEq)]
pub struct StandingsRow {
    /// 1-indexed rank, descending by total, stable on ties.
    pub rank: usize,
    pub team: String,
    pub total_score: f64,
    pub player_count: usize,
    pub winner: bool,
}

/// One player's line within a game section's team block.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerLine {
    pub name: Identity,
    pub rounds: Vec<f64>,
    pub total: f64,
}

/// One team's block within a game section, standings order.
#[derive(Debug, Clone, PartialEq)]
pub struct GameTeamRow {
    pub rank: usize,
    pub team: String,
    pub score: f64,
    pub players: Vec<PlayerLine>,
}

/// One game of the tournament, with its own standings.
#[derive(Debug, Clone, PartialEq)]
pub struct GameSection {
    pub game: String,
    pub multiplier: f64,
    pub order: u32,
    pub teams: Vec<GameTeamRow>,
    pub top_score: f64,
    /// Max rounds any single player logged for this game.
    pub rounds: usize,
}

/// The winning team and its roster, absent when `winners` names no
/// actual team.
#[derive(Debug, Clone, PartialEq)]
pub struct WinnerSection {
    pub team: String,
    pub roster: Vec<String>,
}

/// Everything the tournament page shows.
#[derive(Debug, Clone, PartialEq)]
pub struct TournamentReport {
    pub name: String,
    pub canon: bool,
    pub team_count: usize,
    /// Duo names counted individually.
    pub player_count: usize,
    pub game_count: usize,
    pub winner: Option<WinnerSection>,
    pub standings: Vec<StandingsRow>,
    /// Ordered by configured game order, ascending.
    pub games: Vec<GameSection>,
}

impl TournamentReport {
    /// Build the report for the named tournament.
    ///
    /// # Errors
    ///
    /// Returns [`StatsError::TournamentNotFound`] when the snapshot has
    /// no tournament with this name.
    pub fn build(dataset: &Dataset, name: &str) -> Result<Self, StatsError> {
        let tournament = dataset
            .tournament(name)
            .ok_or_else(|| StatsError::TournamentNotFound(name.to_string()))?;

        Ok(Self {
            name: tournament.name.clone(),
            canon: tournament.canon,
            team_count: tournament.teams.len(),
            player_count: tournament.unique_player_names().len(),
            game_count: tournament.games.len(),
            winner: tournament.winning_team().map(|team| WinnerSection {
                team: team.name.clone(),
                roster: team
                    .players
                    .iter()
                    .map(|player| player.name.display())
                    .collect(),
            }),
            standings: build_standings(tournament),
            games: tournament
                .games_by_order()
                .into_iter()
                .map(|(game, config)| {
                    build_game_section(tournament, game, config.multiplier, config.order)
                })
                .collect(),
        })
    }
}

fn build_standings(tournament: &Tournament) -> Vec<StandingsRow> {
    let mut rows: Vec<StandingsRow> = tournament
        .teams
        .iter()
        .map(|team| StandingsRow {
            rank: 0,
            team: team.name.clone(),
            total_score: total_team_score(team, &tournament.games),
            player_count: team.players.len(),
            winner: team.name == tournament.winners,
        })
        .collect();
    rows.sort_by(|a, b| {
        b.total_score
            .partial_cmp(&a.total_score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    for (index, row) in rows.iter_mut().enumerate() {
        row.rank = index + 1;
    }
    rows
}

fn build_game_section(
    tournament: &Tournament,
    game: &str,
    multiplier: f64,
    order: u32,
) -> GameSection {
    let config = crate::dataset::GameConfig { multiplier, order };
    let mut teams: Vec<GameTeamRow> = tournament
        .teams
        .iter()
        .map(|team| GameTeamRow {
            rank: 0,
            team: team.name.clone(),
            score: team_game_score(team, game, &config),
            players: team
                .players
                .iter()
                .map(|player| {
                    let rounds = player.scores.get(game).cloned().unwrap_or_default();
                    PlayerLine {
                        total: player_score(&rounds, multiplier),
                        name: player.name.clone(),
                        rounds,
                    }
                })
                .collect(),
        })
        .collect();
    teams.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
    for (index, row) in teams.iter_mut().enumerate() {
        row.rank = index + 1;
    }

    let top_score = teams.first().map_or(0.0, |row| row.score);
    let rounds = teams
        .iter()
        .flat_map(|row| row.players.iter())
        .map(|line| line.rounds.len())
        .max()
        .unwrap_or(0);

    GameSection {
        game: game.to_string(),
        multiplier,
        order,
        teams,
        top_score,
        rounds,
    }
}
