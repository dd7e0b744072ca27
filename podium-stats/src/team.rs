//! Per-team profile: tournament history, game breakdowns, roster
//! contributions, and canon-only overall rollups.

use crate::dataset::{Dataset, Player, Team, Tournament};
use crate::error::StatsError;
use crate::score::{average_score, player_score, team_game_score, total_team_score};

/// One game's numbers for the team in one tournament.
#[derive(Debug, Clone, PartialEq)]
pub struct TeamGamePerformance {
    pub score: f64,
    /// Every raw round score logged by any roster member, roster order.
    pub player_scores: Vec<f64>,
    /// Mean of the raw round scores.
    pub average: f64,
    pub multiplier: f64,
    pub order: u32,
}

/// One roster member's contribution in one tournament. Zeroed for
/// non-canon tournaments.
#[derive(Debug, Clone, PartialEq)]
pub struct RosterEntry {
    pub name: String,
    /// Per-game raw rounds and multiplied total, display order.
    pub scores: Vec<(String, Vec<f64>, f64)>,
    pub total: f64,
}

/// One tournament appearance.
#[derive(Debug, Clone, PartialEq)]
pub struct TeamTournament {
    pub tournament: String,
    pub winner: bool,
    pub canon: bool,
    pub games: Vec<(String, TeamGamePerformance)>,
    pub players: Vec<RosterEntry>,
    pub total: f64,
    /// 1-indexed rank by total team score, descending, stable on ties.
    pub position: usize,
}

/// Cross-tournament rollup for one game, canon appearances only.
#[derive(Debug, Clone, PartialEq)]
pub struct TeamGameRollup {
    pub total_score: f64,
    pub appearances: u32,
    pub highest: Option<f64>,
    pub lowest: Option<f64>,
}

impl TeamGameRollup {
    #[must_use]
    pub fn average(&self) -> f64 {
        if self.appearances == 0 {
            0.0
        } else {
            self.total_score / f64::from(self.appearances)
        }
    }
}

/// One player's accumulated contribution to this team. Duo entries
/// credit every name. An appearance is only counted when the player
/// actually scored that tournament.
#[derive(Debug, Clone, PartialEq)]
pub struct TeamPlayerRollup {
    pub name: String,
    pub total_score: f64,
    pub appearances: u32,
}

impl TeamPlayerRollup {
    #[must_use]
    pub fn average(&self) -> f64 {
        if self.appearances == 0 {
            0.0
        } else {
            self.total_score / f64::from(self.appearances)
        }
    }
}

/// Canon-only overall totals.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TeamOverall {
    pub wins: u32,
    pub total_score: f64,
    /// Canon game appearances, summed over the per-game rollups.
    pub games_played: u32,
}

impl TeamOverall {
    #[must_use]
    pub fn average_score(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            self.total_score / f64::from(self.games_played)
        }
    }
}

/// Everything the team page shows for one team name.
#[derive(Debug, Clone, PartialEq)]
pub struct TeamProfile {
    pub name: String,
    pub tournaments: Vec<TeamTournament>,
    pub overall: TeamOverall,
    pub game_rollups: Vec<(String, TeamGameRollup)>,
    pub player_rollups: Vec<TeamPlayerRollup>,
}

impl TeamProfile {
    /// Build the profile for the team with this exact name.
    ///
    /// # Errors
    ///
    /// Returns [`StatsError::TeamNotFound`] when no tournament fields a
    /// team with this name.
    pub fn build(dataset: &Dataset, name: &str) -> Result<Self, StatsError> {
        let mut profile = Self {
            name: name.to_string(),
            tournaments: Vec::new(),
            overall: TeamOverall::default(),
            game_rollups: Vec::new(),
            player_rollups: Vec::new(),
        };

        for tournament in &dataset.tournaments {
            let Some(team) = tournament.team(name) else {
                continue;
            };
            let appearance = build_appearance(tournament, team);

            if tournament.canon {
                profile.overall.total_score += appearance.total;
                if appearance.winner {
                    profile.overall.wins += 1;
                }
                for (game, perf) in &appearance.games {
                    roll_up_game(&mut profile.game_rollups, game, perf.score);
                }
            }
            for entry in &appearance.players {
                roll_up_players(&mut profile.player_rollups, team, entry);
            }
            profile.tournaments.push(appearance);
        }

        if profile.tournaments.is_empty() {
            return Err(StatsError::TeamNotFound(name.to_string()));
        }
        profile.overall.games_played = profile
            .game_rollups
            .iter()
            .map(|(_, rollup)| rollup.appearances)
            .sum();
        Ok(profile)
    }

    /// Distinct player names ever fielded, duo names individually.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.player_rollups.len()
    }
}

fn build_appearance(tournament: &Tournament, team: &Team) -> TeamTournament {
    let mut games = Vec::new();
    let mut total = 0.0;
    for (game, config) in tournament.games_by_order() {
        let player_scores: Vec<f64> = team
            .players
            .iter()
            .filter_map(|player| player.scores.get(game))
            .flatten()
            .copied()
            .collect();
        let perf = TeamGamePerformance {
            score: team_game_score(team, game, config),
            average: average_score(&player_scores),
            player_scores,
            multiplier: config.multiplier,
            order: config.order,
        };
        total += perf.score;
        games.push((game.to_string(), perf));
    }

    TeamTournament {
        tournament: tournament.name.clone(),
        winner: team.name == tournament.winners,
        canon: tournament.canon,
        games,
        players: team
            .players
            .iter()
            .map(|player| roster_entry(player, tournament))
            .collect(),
        total,
        position: tournament_position(tournament, &team.name),
    }
}

fn roster_entry(player: &Player, tournament: &Tournament) -> RosterEntry {
    let mut entry = RosterEntry {
        name: player.name.display(),
        scores: Vec::new(),
        total: 0.0,
    };
    if !tournament.canon {
        return entry;
    }
    for (game, config) in tournament.games_by_order() {
        if let Some(rounds) = player.scores.get(game) {
            let multiplied = player_score(rounds, config.multiplier);
            entry.scores.push((game.to_string(), rounds.clone(), multiplied));
            entry.total += multiplied;
        }
    }
    entry
}

fn tournament_position(tournament: &Tournament, team_name: &str) -> usize {
    let mut scores: Vec<(&str, f64)> = tournament
        .teams
        .iter()
        .map(|t| (t.name.as_str(), total_team_score(t, &tournament.games)))
        .collect();
    scores.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    scores
        .iter()
        .position(|(name, _)| *name == team_name)
        .map_or(0, |index| index + 1)
}

fn roll_up_game(rollups: &mut Vec<(String, TeamGameRollup)>, game: &str, score: f64) {
    let index = rollups
        .iter()
        .position(|(known, _)| known == game)
        .unwrap_or_else(|| {
            rollups.push((
                game.to_string(),
                TeamGameRollup {
                    total_score: 0.0,
                    appearances: 0,
                    highest: None,
                    lowest: None,
                },
            ));
            rollups.len() - 1
        });
    let rollup = &mut rollups[index].1;
    rollup.total_score += score;
    rollup.appearances += 1;
    rollup.highest = Some(rollup.highest.map_or(score, |h| h.max(score)));
    rollup.lowest = Some(rollup.lowest.map_or(score, |l| l.min(score)));
}

fn roll_up_players(rollups: &mut Vec<TeamPlayerRollup>, team: &Team, entry: &RosterEntry) {
    // The roster entry's display name is not a lookup key; resolve the
    // underlying identity to credit each duo name separately.
    let Some(player) = team.players.iter().find(|p| p.name.display() == entry.name) else {
        return;
    };
    for name in player.name.all_names() {
        let index = rollups
            .iter()
            .position(|rollup| rollup.name == name)
            .unwrap_or_else(|| {
                rollups.push(TeamPlayerRollup {
                    name: name.to_string(),
                    total_score: 0.0,
                    appearances: 0,
                });
                rollups.len() - 1
            });
        let rollup = &mut rollups[index];
        rollup.total_score += entry.total;
        if entry.total > 0.0 {
            rollup.appearances += 1;
        }
    }
}
