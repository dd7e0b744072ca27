//! Cross-tournament record computation: per-game superlatives, player
//! and team aggregates, and the tournament digest.
//!
//! Tie rules are first-writer-wins under strict comparison, with writers
//! visited in document order, then team order, then player order. Canon
//! filtering is asymmetric on purpose: game and player records only see
//! canon tournaments, team records see everything.

use crate::dataset::{Dataset, Tournament};
use crate::score::{average_score, player_score, total_team_score};

/// A single superlative: the score and who set it where.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordHolder {
    pub score: f64,
    pub player: String,
    pub tournament: String,
}

/// Raw and multiplied variants of one extremum.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ScoreExtremes {
    pub unmultiplied: Option<RecordHolder>,
    pub multiplied: Option<RecordHolder>,
}

/// Highest and lowest per-appearance mean, unmultiplied.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AverageExtremes {
    pub highest: Option<RecordHolder>,
    pub lowest: Option<RecordHolder>,
}

/// All records tracked for one game across canon tournaments.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GameRecord {
    pub highest: ScoreExtremes,
    pub lowest: ScoreExtremes,
    pub averages: AverageExtremes,
    /// Per-game first-place credits, keyed by canonical identity in
    /// first-credit order. Every player tied on the tournament-wide max
    /// for the game is credited.
    pub first_places: Vec<(String, u32)>,
}

/// One player's canon-tournament aggregate.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerAggregate {
    pub name: String,
    /// Tournaments won as a member of the `winners` team.
    pub wins: u32,
    pub participations: u32,
    pub total_score: f64,
    /// Round count across every game played.
    pub games_played: u32,
    /// Tournaments where this player's team had the single highest
    /// total team score. Ties go to the first team in input order; no
    /// shared credit, unlike the per-game first places.
    pub first_places: u32,
    pub tournaments: Vec<String>,
}

impl PlayerAggregate {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            wins: 0,
            participations: 0,
            total_score: 0.0,
            games_played: 0,
            first_places: 0,
            tournaments: Vec::new(),
        }
    }

    /// Mean multiplied score per round; 0 when no rounds were played.
    #[must_use]
    pub fn average(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            self.total_score / f64::from(self.games_played)
        }
    }
}

/// A derived leader: the player holding one superlative.
#[derive(Debug, Clone, PartialEq)]
pub struct Leader {
    pub player: String,
    pub value: f64,
}

/// Player aggregates plus the derived leaders.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PlayerRecords {
    pub players: Vec<PlayerAggregate>,
    pub highest_average: Option<Leader>,
    /// Excludes averages of 0 or less; a player with no canon rounds is
    /// not eligible for "lowest".
    pub lowest_average: Option<Leader>,
    pub most_wins: Option<Leader>,
    pub most_participations: Option<Leader>,
    pub most_first_places: Option<Leader>,
}

/// One team name's aggregate across every tournament it entered,
/// canon or not.
#[derive(Debug, Clone, PartialEq)]
pub struct TeamAggregate {
    pub name: String,
    pub total_score: f64,
    pub tournaments: u32,
    pub wins: u32,
    /// Per-tournament totals in appearance order.
    pub scores: Vec<f64>,
}

impl TeamAggregate {
    /// Mean tournament total; 0 before any appearance.
    #[must_use]
    pub fn average_score(&self) -> f64 {
        if self.tournaments == 0 {
            0.0
        } else {
            self.total_score / f64::from(self.tournaments)
        }
    }
}

/// The best or worst performing team by average tournament total.
#[derive(Debug, Clone, PartialEq)]
pub struct TeamLeader {
    pub name: String,
    pub average: f64,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TeamRecords {
    pub teams: Vec<TeamAggregate>,
    pub best: Option<TeamLeader>,
    pub worst: Option<TeamLeader>,
}

/// Winner digest for one tournament, canon or not. The roster is empty
/// when `winners` names no actual team.
#[derive(Debug, Clone, PartialEq)]
pub struct TournamentSummary {
    pub name: String,
    pub winner: String,
    pub winning_roster: Vec<String>,
}

/// Everything the hall of fame shows, computed in one pass over an
/// immutable snapshot. Recomputing from the same snapshot yields
/// identical output.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Records {
    pub game_records: Vec<(String, GameRecord)>,
    pub player_records: PlayerRecords,
    pub team_records: TeamRecords,
    pub tournament_digest: Vec<TournamentSummary>,
}

impl Records {
    #[must_use]
    pub fn compute(dataset: &Dataset) -> Self {
        Self {
            game_records: compute_game_records(dataset),
            player_records: compute_player_records(dataset),
            team_records: compute_team_records(dataset),
            tournament_digest: compute_tournament_digest(dataset),
        }
    }

    /// Records for one game, when the game exists in the snapshot.
    #[must_use]
    pub fn game(&self, name: &str) -> Option<&GameRecord> {
        self.game_records
            .iter()
            .find(|(game, _)| game == name)
            .map(|(_, record)| record)
    }
}

fn beats_max(candidate: f64, current: Option<&RecordHolder>) -> bool {
    current.is_none_or(|holder| candidate > holder.score)
}

fn beats_min(candidate: f64, current: Option<&RecordHolder>) -> bool {
    current.is_none_or(|holder| candidate < holder.score)
}

fn holder(score: f64, player: &str, tournament: &str) -> Option<RecordHolder> {
    Some(RecordHolder {
        score,
        player: player.to_string(),
        tournament: tournament.to_string(),
    })
}

fn bump(counts: &mut Vec<(String, u32)>, name: &str) {
    if let Some((_, count)) = counts.iter_mut().find(|(known, _)| known == name) {
        *count += 1;
    } else {
        counts.push((name.to_string(), 1));
    }
}

fn compute_game_records(dataset: &Dataset) -> Vec<(String, GameRecord)> {
    // Every configured game gets an entry, even if only non-canon
    // tournaments play it; such entries simply stay unset.
    let mut records: Vec<(String, GameRecord)> = dataset
        .unique_game_names()
        .into_iter()
        .map(|name| (name.to_string(), GameRecord::default()))
        .collect();

    for tournament in &dataset.tournaments {
        if !tournament.canon {
            continue;
        }
        for (game, config) in &tournament.games {
            let Some(record) = records
                .iter_mut()
                .find(|(name, _)| name == game)
                .map(|(_, record)| record)
            else {
                continue;
            };
            update_game_record(record, tournament, game, config.multiplier);
        }
    }
    records
}

fn update_game_record(
    record: &mut GameRecord,
    tournament: &Tournament,
    game: &str,
    multiplier: f64,
) {
    // Tournament-wide max of per-player round maxima, for first places.
    let mut game_max: Option<f64> = None;
    for team in &tournament.teams {
        for player in &team.players {
            if let Some(max) = player
                .scores
                .get(game)
                .and_then(|scores| scores.iter().copied().reduce(f64::max))
                && game_max.is_none_or(|known| max > known)
            {
                game_max = Some(max);
            }
        }
    }

    for team in &tournament.teams {
        for player in &team.players {
            let Some(scores) = player.scores.get(game) else {
                continue;
            };
            if scores.is_empty() {
                continue;
            }
            let name = player.name.canonical();
            let max = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            let min = scores.iter().copied().fold(f64::INFINITY, f64::min);
            let avg = average_score(scores);

            if beats_max(max, record.highest.unmultiplied.as_ref()) {
                record.highest.unmultiplied = holder(max, name, &tournament.name);
            }
            if beats_max(max * multiplier, record.highest.multiplied.as_ref()) {
                record.highest.multiplied = holder(max * multiplier, name, &tournament.name);
            }
            if beats_min(min, record.lowest.unmultiplied.as_ref()) {
                record.lowest.unmultiplied = holder(min, name, &tournament.name);
            }
            if beats_min(min * multiplier, record.lowest.multiplied.as_ref()) {
                record.lowest.multiplied = holder(min * multiplier, name, &tournament.name);
            }
            if beats_max(avg, record.averages.highest.as_ref()) {
                record.averages.highest = holder(avg, name, &tournament.name);
            }
            if beats_min(avg, record.averages.lowest.as_ref()) {
                record.averages.lowest = holder(avg, name, &tournament.name);
            }

            // Every player matching the tournament-wide max is credited.
            if game_max == Some(max) {
                bump(&mut record.first_places, name);
            }
        }
    }
}

fn compute_player_records(dataset: &Dataset) -> PlayerRecords {
    let mut players: Vec<PlayerAggregate> = Vec::new();

    for tournament in &dataset.tournaments {
        if !tournament.canon {
            continue;
        }
        for team in &tournament.teams {
            let is_winning_team = team.name == tournament.winners;
            for player in &team.players {
                let name = player.name.canonical();
                let index = players
                    .iter()
                    .position(|agg| agg.name == name)
                    .unwrap_or_else(|| {
                        players.push(PlayerAggregate::new(name));
                        players.len() - 1
                    });
                let agg = &mut players[index];

                agg.participations += 1;
                if !agg.tournaments.contains(&tournament.name) {
                    agg.tournaments.push(tournament.name.clone());
                }
                if is_winning_team {
                    agg.wins += 1;
                }
                for (game, config) in &tournament.games {
                    if let Some(scores) = player.scores.get(game) {
                        agg.total_score += player_score(scores, config.multiplier);
                        agg.games_played += u32::try_from(scores.len()).unwrap_or(u32::MAX);
                    }
                }
            }
        }
    }

    // Tournament-level first places: the single top team by total score,
    // first in input order on ties. The sweep covers every tournament;
    // credit only lands on players already present in the canon
    // aggregates above.
    for tournament in &dataset.tournaments {
        let mut top: Option<(&str, f64)> = None;
        for team in &tournament.teams {
            let score = total_team_score(team, &tournament.games);
            if top.is_none_or(|(_, best)| score > best) {
                top = Some((team.name.as_str(), score));
            }
        }
        let Some((top_team, _)) = top else { continue };
        let Some(team) = tournament.team(top_team) else {
            continue;
        };
        for player in &team.players {
            let name = player.name.canonical();
            if let Some(agg) = players.iter_mut().find(|agg| agg.name == name) {
                agg.first_places += 1;
            }
        }
    }

    let mut records = PlayerRecords {
        players,
        ..PlayerRecords::default()
    };
    for agg in &records.players {
        let average = agg.average();
        if average > records.highest_average.as_ref().map_or(0.0, |l| l.value) {
            records.highest_average = leader(agg, average);
        }
        if average > 0.0
            && records
                .lowest_average
                .as_ref()
                .is_none_or(|l| average < l.value)
        {
            records.lowest_average = leader(agg, average);
        }
        if f64::from(agg.wins) > records.most_wins.as_ref().map_or(0.0, |l| l.value) {
            records.most_wins = leader(agg, f64::from(agg.wins));
        }
        if f64::from(agg.participations)
            > records.most_participations.as_ref().map_or(0.0, |l| l.value)
        {
            records.most_participations = leader(agg, f64::from(agg.participations));
        }
        if f64::from(agg.first_places)
            > records.most_first_places.as_ref().map_or(0.0, |l| l.value)
        {
            records.most_first_places = leader(agg, f64::from(agg.first_places));
        }
    }
    records
}

fn leader(agg: &PlayerAggregate, value: f64) -> Option<Leader> {
    Some(Leader {
        player: agg.name.clone(),
        value,
    })
}

fn compute_team_records(dataset: &Dataset) -> TeamRecords {
    let mut teams: Vec<TeamAggregate> = Vec::new();

    for tournament in &dataset.tournaments {
        for team in &tournament.teams {
            let score = total_team_score(team, &tournament.games);
            let index = teams
                .iter()
                .position(|agg| agg.name == team.name)
                .unwrap_or_else(|| {
                    teams.push(TeamAggregate {
                        name: team.name.clone(),
                        total_score: 0.0,
                        tournaments: 0,
                        wins: 0,
                        scores: Vec::new(),
                    });
                    teams.len() - 1
                });
            let agg = &mut teams[index];
            agg.total_score += score;
            agg.tournaments += 1;
            agg.scores.push(score);
            if team.name == tournament.winners {
                agg.wins += 1;
            }
        }
    }

    let mut records = TeamRecords {
        teams,
        ..TeamRecords::default()
    };
    for agg in &records.teams {
        let average = agg.average_score();
        if average > records.best.as_ref().map_or(0.0, |b| b.average) {
            records.best = Some(TeamLeader {
                name: agg.name.clone(),
                average,
            });
        }
        if records.worst.as_ref().is_none_or(|w| average < w.average) {
            records.worst = Some(TeamLeader {
                name: agg.name.clone(),
                average,
            });
        }
    }
    records
}

fn compute_tournament_digest(dataset: &Dataset) -> Vec<TournamentSummary> {
    dataset
        .tournaments
        .iter()
        .map(|tournament| TournamentSummary {
            name: tournament.name.clone(),
            winner: tournament.winners.clone(),
            winning_roster: tournament.winning_team().map_or_else(Vec::new, |team| {
                team.players
                    .iter()
                    .map(|player| player.name.canonical().to_string())
                    .collect()
            }),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Dataset;

    fn two_team_dataset() -> Dataset {
        Dataset::from_json(
            r#"{
            "tournaments": {
                "T1": {
                    "winners": "Blue",
                    "games": {"A": {"multiplier": 2.0, "order": 1}},
                    "teams": [
                        {"name": "Red", "players": [
                            {"name": "P1", "scores": {"A": [3, 5]}},
                            {"name": "P2", "scores": {"A": [1]}}
                        ]},
                        {"name": "Blue", "players": [
                            {"name": "P3", "scores": {"A": [10]}}
                        ]}
                    ]
                }
            }
        }"#,
        )
        .unwrap()
    }

    fn with_non_canon() -> Dataset {
        Dataset::from_json(
            r#"{
            "tournaments": {
                "T1": {
                    "winners": "Blue",
                    "games": {"A": {"multiplier": 2.0, "order": 1}},
                    "teams": [
                        {"name": "Red", "players": [{"name": "P1", "scores": {"A": [3, 5]}}]},
                        {"name": "Blue", "players": [{"name": "P3", "scores": {"A": [10]}}]}
                    ]
                },
                "Exhibition": {
                    "winners": "Red",
                    "canon": false,
                    "games": {"A": {"multiplier": 1.0, "order": 1}},
                    "teams": [
                        {"name": "Red", "players": [{"name": "P1", "scores": {"A": [100]}}]}
                    ]
                }
            }
        }"#,
        )
        .unwrap()
    }

    #[test]
    fn game_records_track_raw_and_multiplied_extremes() {
        let records = Records::compute(&two_team_dataset());
        let game = records.game("A").unwrap();

        let highest = game.highest.unmultiplied.as_ref().unwrap();
        assert_eq!(highest.score, 10.0);
        assert_eq!(highest.player, "P3");
        assert_eq!(highest.tournament, "T1");

        let multiplied = game.highest.multiplied.as_ref().unwrap();
        assert_eq!(multiplied.score, 20.0);
        assert_eq!(multiplied.player, "P3");

        let lowest = game.lowest.unmultiplied.as_ref().unwrap();
        assert_eq!(lowest.score, 1.0);
        assert_eq!(lowest.player, "P2");
    }

    #[test]
    fn first_places_credit_every_tied_top_scorer() {
        let records = Records::compute(&two_team_dataset());
        let game = records.game("A").unwrap();
        assert_eq!(game.first_places, vec![("P3".to_string(), 1)]);

        let tied = Dataset::from_json(
            r#"{
            "tournaments": {
                "T1": {
                    "winners": "Red",
                    "games": {"A": {"multiplier": 1.0, "order": 1}},
                    "teams": [
                        {"name": "Red", "players": [{"name": "P1", "scores": {"A": [7]}}]},
                        {"name": "Blue", "players": [{"name": "P2", "scores": {"A": [7]}}]}
                    ]
                }
            }
        }"#,
        )
        .unwrap();
        let tied_records = Records::compute(&tied);
        assert_eq!(
            tied_records.game("A").unwrap().first_places,
            vec![("P1".to_string(), 1), ("P2".to_string(), 1)]
        );
    }

    #[test]
    fn non_canon_tournaments_are_invisible_to_game_and_player_records() {
        let records = Records::compute(&with_non_canon());
        let game = records.game("A").unwrap();
        // The 100 scored in the exhibition must not surface anywhere.
        assert_eq!(game.highest.unmultiplied.as_ref().unwrap().score, 10.0);

        let p1 = records
            .player_records
            .players
            .iter()
            .find(|p| p.name == "P1")
            .unwrap();
        assert_eq!(p1.participations, 1);
        assert_eq!(p1.wins, 0);
        assert_eq!(p1.total_score, 16.0);
        assert_eq!(p1.games_played, 2);
    }

    #[test]
    fn team_records_include_non_canon_tournaments() {
        let records = Records::compute(&with_non_canon());
        let red = records
            .team_records
            .teams
            .iter()
            .find(|t| t.name == "Red")
            .unwrap();
        assert_eq!(red.tournaments, 2);
        assert_eq!(red.scores, vec![16.0, 100.0]);
        // Exhibition wins still count for teams.
        assert_eq!(red.wins, 1);
    }

    #[test]
    fn leaders_are_first_writer_wins_on_ties() {
        let dataset = Dataset::from_json(
            r#"{
            "tournaments": {
                "T1": {
                    "winners": "Red",
                    "games": {"A": {"multiplier": 1.0, "order": 1}},
                    "teams": [
                        {"name": "Red", "players": [{"name": "P1", "scores": {"A": [5]}}]},
                        {"name": "Blue", "players": [{"name": "P2", "scores": {"A": [5]}}]}
                    ]
                }
            }
        }"#,
        )
        .unwrap();
        let records = Records::compute(&dataset);
        let highest = records.player_records.highest_average.unwrap();
        assert_eq!(highest.player, "P1");
        assert_eq!(highest.value, 5.0);
        let wins = records.player_records.most_wins.unwrap();
        assert_eq!(wins.player, "P1");
    }

    #[test]
    fn zero_average_players_are_not_eligible_for_lowest() {
        let dataset = Dataset::from_json(
            r#"{
            "tournaments": {
                "T1": {
                    "winners": "Red",
                    "games": {"A": {"multiplier": 1.0, "order": 1}},
                    "teams": [
                        {"name": "Red", "players": [{"name": "Idle", "scores": {}}]},
                        {"name": "Blue", "players": [{"name": "P2", "scores": {"A": [4]}}]}
                    ]
                }
            }
        }"#,
        )
        .unwrap();
        let records = Records::compute(&dataset);
        let lowest = records.player_records.lowest_average.unwrap();
        assert_eq!(lowest.player, "P2");
    }

    #[test]
    fn duo_players_are_credited_under_the_canonical_name() {
        let dataset = Dataset::from_json(
            r#"{
            "tournaments": {
                "T1": {
                    "winners": "Red",
                    "games": {"A": {"multiplier": 1.0, "order": 1}},
                    "teams": [
                        {"name": "Red", "players": [{"name": ["P4", "P5"], "scores": {"A": [6]}}]}
                    ]
                }
            }
        }"#,
        )
        .unwrap();
        let records = Records::compute(&dataset);
        assert_eq!(records.game("A").unwrap().first_places, vec![("P4".to_string(), 1)]);
        assert_eq!(records.player_records.players[0].name, "P4");
        assert_eq!(records.tournament_digest[0].winning_roster, vec!["P4"]);
    }

    #[test]
    fn digest_roster_is_empty_for_dangling_winner() {
        let dataset = Dataset::from_json(
            r#"{
            "tournaments": {
                "T1": {
                    "winners": "Nobody",
                    "games": {},
                    "teams": [{"name": "Red", "players": []}]
                }
            }
        }"#,
        )
        .unwrap();
        let records = Records::compute(&dataset);
        assert_eq!(records.tournament_digest[0].winner, "Nobody");
        assert!(records.tournament_digest[0].winning_roster.is_empty());
    }

    #[test]
    fn recomputation_is_idempotent() {
        let dataset = with_non_canon();
        let first = Records::compute(&dataset);
        let second = Records::compute(&dataset);
        assert_eq!(first, second);
    }
}
