//! Per-player profile: tournament history, per-game breakdowns, and
//! canon-only overall rollups.

use std::collections::BTreeMap;

use crate::dataset::{Dataset, GameConfig, Identity, Player, Tournament};
use crate::error::StatsError;
use crate::score::{average_score, player_score, player_tournament_score};

/// One game's numbers for one player in one tournament.
#[derive(Debug, Clone, PartialEq)]
pub struct GamePerformance {
    pub scores: Vec<f64>,
    pub multiplied_scores: Vec<f64>,
    pub total_score: f64,
    /// Mean of the multiplied round scores.
    pub average: f64,
    pub best: f64,
    pub worst: f64,
    pub multiplier: f64,
}

impl GamePerformance {
    fn build(scores: &[f64], config: GameConfig) -> Option<Self> {
        if scores.is_empty() {
            return None;
        }
        let multiplied: Vec<f64> = scores.iter().map(|s| s * config.multiplier).collect();
        Some(Self {
            total_score: player_score(scores, config.multiplier),
            average: average_score(&multiplied),
            best: scores.iter().copied().fold(f64::NEG_INFINITY, f64::max),
            worst: scores.iter().copied().fold(f64::INFINITY, f64::min),
            multiplied_scores: multiplied,
            scores: scores.to_vec(),
            multiplier: config.multiplier,
        })
    }
}

/// One tournament appearance. Games follow the tournament's configured
/// display order.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerTournament {
    pub tournament: String,
    pub team: String,
    pub winner: bool,
    pub canon: bool,
    pub games: Vec<(String, GamePerformance)>,
    pub total: f64,
    /// 1-indexed rank by tournament score among every player in the
    /// tournament, descending, stable on ties.
    pub position: usize,
}

/// Cross-tournament rollup for one game, canon appearances only.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerGameRollup {
    pub total_score: f64,
    pub rounds: u32,
    pub best: Option<f64>,
    pub worst: Option<f64>,
}

impl PlayerGameRollup {
    /// Mean multiplied score per round.
    #[must_use]
    pub fn average(&self) -> f64 {
        if self.rounds == 0 {
            0.0
        } else {
            self.total_score / f64::from(self.rounds)
        }
    }
}

/// Canon-only overall totals.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PlayerOverall {
    pub total_score: f64,
    pub games_played: u32,
    pub total_wins: u32,
}

impl PlayerOverall {
    #[must_use]
    pub fn average_score(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            self.total_score / f64::from(self.games_played)
        }
    }
}

/// Everything the player page shows for one identity.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerProfile {
    /// The name that was looked up, which may be any name of a duo.
    pub name: String,
    pub display_name: String,
    pub tournaments: Vec<PlayerTournament>,
    pub overall: PlayerOverall,
    /// Per-game rollups in first-played order.
    pub game_rollups: Vec<(String, PlayerGameRollup)>,
}

impl PlayerProfile {
    /// Build the profile for `name`, matching any name of a duo entry.
    ///
    /// # Errors
    ///
    /// Returns [`StatsError::PlayerNotFound`] when no roster entry in
    /// the snapshot answers to `name`.
    pub fn build(dataset: &Dataset, name: &str) -> Result<Self, StatsError> {
        let mut profile = Self {
            name: name.to_string(),
            display_name: name.to_string(),
            tournaments: Vec::new(),
            overall: PlayerOverall::default(),
            game_rollups: Vec::new(),
        };

        for tournament in &dataset.tournaments {
            let Some((team_name, player)) = find_entry(tournament, name) else {
                continue;
            };
            profile.display_name = player.name.display();
            let appearance = build_appearance(tournament, team_name, player);

            if tournament.canon {
                profile.overall.total_score += appearance.total;
                if appearance.winner {
                    profile.overall.total_wins += 1;
                }
                for (game, perf) in &appearance.games {
                    profile.overall.games_played +=
                        u32::try_from(perf.scores.len()).unwrap_or(u32::MAX);
                    roll_up(&mut profile.game_rollups, game, perf);
                }
            }
            profile.tournaments.push(appearance);
        }

        if profile.tournaments.is_empty() {
            return Err(StatsError::PlayerNotFound(name.to_string()));
        }
        Ok(profile)
    }
}

fn find_entry<'a>(tournament: &'a Tournament, name: &str) -> Option<(&'a str, &'a Player)> {
    for team in &tournament.teams {
        if let Some(player) = team.players.iter().find(|p| p.name.answers_to(name)) {
            return Some((team.name.as_str(), player));
        }
    }
    None
}

fn build_appearance(tournament: &Tournament, team: &str, player: &Player) -> PlayerTournament {
    let mut games = Vec::new();
    let mut total = 0.0;
    for (game, config) in tournament.games_by_order() {
        if let Some(perf) = player
            .scores
            .get(game)
            .and_then(|scores| GamePerformance::build(scores, *config))
        {
            total += perf.total_score;
            games.push((game.to_string(), perf));
        }
    }
    PlayerTournament {
        tournament: tournament.name.clone(),
        team: team.to_string(),
        winner: team == tournament.winners,
        canon: tournament.canon,
        games,
        total,
        position: tournament_position(tournament, &player.name),
    }
}

/// Rank of `identity` among every player in the tournament by
/// tournament score, descending. Stable: equal scores keep roster
/// order. 1-indexed.
fn tournament_position(tournament: &Tournament, identity: &Identity) -> usize {
    let mut entries: Vec<(&Identity, f64)> = tournament
        .teams
        .iter()
        .flat_map(|team| team.players.iter())
        .map(|p| (&p.name, player_tournament_score(p, &tournament.games)))
        .collect();
    entries.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    entries
        .iter()
        .position(|(name, _)| *name == identity)
        .map_or(0, |index| index + 1)
}

fn roll_up(rollups: &mut Vec<(String, PlayerGameRollup)>, game: &str, perf: &GamePerformance) {
    let index = rollups
        .iter()
        .position(|(known, _)| known == game)
        .unwrap_or_else(|| {
            rollups.push((
                game.to_string(),
                PlayerGameRollup {
                    total_score: 0.0,
                    rounds: 0,
                    best: None,
                    worst: None,
                },
            ));
            rollups.len() - 1
        });
    let rollup = &mut rollups[index].1;
    rollup.total_score += perf.total_score;
    rollup.rounds += u32::try_from(perf.scores.len()).unwrap_or(u32::MAX);
    rollup.best = Some(rollup.best.map_or(perf.best, |b| b.max(perf.best)));
    rollup.worst = Some(rollup.worst.map_or(perf.worst, |w| w.min(perf.worst)));
}
