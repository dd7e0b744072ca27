//! Tournament snapshot model and ingestion.
//!
//! The snapshot is a single JSON document fetched once per page view and
//! never mutated. Record tie-breaking is first-writer-wins in document
//! order, so tournaments are kept as an ordered sequence rather than a
//! hash map.

use std::collections::BTreeMap;
use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::StatsError;

/// A player's name: a single identity, or an ordered duo/multi entry
/// competing as one slot. The first name of a duo is canonical for
/// attribution; every name is a valid lookup key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Identity {
    Single(String),
    Duo(Vec<String>),
}

impl Identity {
    /// The name used for record attribution and merged aggregates.
    #[must_use]
    pub fn canonical(&self) -> &str {
        match self {
            Self::Single(name) => name,
            Self::Duo(names) => names.first().map_or("", String::as_str),
        }
    }

    /// Every name this entry answers to, in order.
    #[must_use]
    pub fn all_names(&self) -> Vec<&str> {
        match self {
            Self::Single(name) => vec![name.as_str()],
            Self::Duo(names) => names.iter().map(String::as_str).collect(),
        }
    }

    /// Whether `name` is one of this entry's identities (exact match).
    #[must_use]
    pub fn answers_to(&self, name: &str) -> bool {
        match self {
            Self::Single(own) => own == name,
            Self::Duo(names) => names.iter().any(|own| own == name),
        }
    }

    /// Display form: duo names joined with " / ".
    #[must_use]
    pub fn display(&self) -> String {
        match self {
            Self::Single(name) => name.clone(),
            Self::Duo(names) => names.join(" / "),
        }
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

/// Per-game multiplier and display order within one tournament.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub multiplier: f64,
    pub order: u32,
}

/// One roster slot: an identity plus raw per-game round scores.
/// A missing game key means the player did not play that game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub name: Identity,
    #[serde(default)]
    pub scores: BTreeMap<String, Vec<f64>>,
}

impl Player {
    /// Total rounds logged across every game entry.
    #[must_use]
    pub fn rounds_played(&self) -> u32 {
        self.scores
            .values()
            .map(|rounds| u32::try_from(rounds.len()).unwrap_or(u32::MAX))
            .sum()
    }
}

/// A team within one tournament. Names recur across tournaments and are
/// treated as the same team identity for cross-tournament rollups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub name: String,
    pub players: Vec<Player>,
}

/// One tournament, with the implicit `canon` default already resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct Tournament {
    pub name: String,
    pub winners: String,
    pub canon: bool,
    pub games: BTreeMap<String, GameConfig>,
    pub teams: Vec<Team>,
}

impl Tournament {
    /// Look up a team by exact name.
    #[must_use]
    pub fn team(&self, name: &str) -> Option<&Team> {
        self.teams.iter().find(|team| team.name == name)
    }

    /// The team `winners` names, when it resolves. A dangling winner
    /// reference yields `None` and winner-dependent output stays empty.
    #[must_use]
    pub fn winning_team(&self) -> Option<&Team> {
        self.team(&self.winners)
    }

    /// Games sorted by their configured display order.
    #[must_use]
    pub fn games_by_order(&self) -> Vec<(&str, &GameConfig)> {
        let mut games: Vec<(&str, &GameConfig)> = self
            .games
            .iter()
            .map(|(name, config)| (name.as_str(), config))
            .collect();
        games.sort_by_key(|(_, config)| config.order);
        games
    }

    /// Distinct player names on any roster (duo names counted
    /// individually), in first-appearance order.
    #[must_use]
    pub fn unique_player_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for team in &self.teams {
            for player in &team.players {
                for name in player.name.all_names() {
                    if !names.contains(&name) {
                        names.push(name);
                    }
                }
            }
        }
        names
    }
}

/// Wire shape of a tournament before the canon default is resolved.
#[derive(Debug, Deserialize)]
struct RawTournament {
    winners: String,
    #[serde(default)]
    canon: Option<bool>,
    games: BTreeMap<String, GameConfig>,
    teams: Vec<Team>,
}

impl RawTournament {
    fn resolve(self, name: String) -> Tournament {
        Tournament {
            name,
            winners: self.winners,
            canon: self.canon.unwrap_or(true),
            games: self.games,
            teams: self.teams,
        }
    }
}

/// The full snapshot: every tournament, in document order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Dataset {
    pub tournaments: Vec<Tournament>,
}

impl Dataset {
    /// Parse a snapshot document.
    ///
    /// # Errors
    ///
    /// Returns [`StatsError::DataFormat`] when the document is not valid
    /// JSON or the `tournaments` key is missing or malformed.
    pub fn from_json(text: &str) -> Result<Self, StatsError> {
        serde_json::from_str(text).map_err(|e| StatsError::DataFormat(e.to_string()))
    }

    /// Look up a tournament by exact name.
    #[must_use]
    pub fn tournament(&self, name: &str) -> Option<&Tournament> {
        self.tournaments.iter().find(|t| t.name == name)
    }

    /// Every game name configured anywhere in the snapshot, in
    /// first-appearance order.
    #[must_use]
    pub fn unique_game_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for tournament in &self.tournaments {
            for name in tournament.games.keys() {
                if !names.iter().any(|known| *known == name.as_str()) {
                    names.push(name.as_str());
                }
            }
        }
        names
    }

    /// Whether any roster entry answers to `name`.
    #[must_use]
    pub fn player_exists(&self, name: &str) -> bool {
        self.tournaments.iter().any(|tournament| {
            tournament
                .teams
                .iter()
                .any(|team| team.players.iter().any(|p| p.name.answers_to(name)))
        })
    }

    /// Whether any tournament fields a team with this exact name.
    #[must_use]
    pub fn team_exists(&self, name: &str) -> bool {
        self.tournaments
            .iter()
            .any(|tournament| tournament.team(name).is_some())
    }
}

impl<'de> Deserialize<'de> for Dataset {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct RootVisitor;

        impl<'de> Visitor<'de> for RootVisitor {
            type Value = Dataset;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an object with a `tournaments` map")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Dataset, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut tournaments: Option<Vec<Tournament>> = None;
                while let Some(key) = map.next_key::<String>()? {
                    if key == "tournaments" {
                        tournaments = Some(map.next_value_seed(TournamentSeq)?);
                    } else {
                        map.next_value::<serde::de::IgnoredAny>()?;
                    }
                }
                let tournaments = tournaments
                    .ok_or_else(|| serde::de::Error::missing_field("tournaments"))?;
                Ok(Dataset { tournaments })
            }
        }

        // Deserializes the tournament map while preserving document
        // order, which serde's default map types do not guarantee.
        struct TournamentSeq;

        impl<'de> serde::de::DeserializeSeed<'de> for TournamentSeq {
            type Value = Vec<Tournament>;

            fn deserialize<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
            where
                D: Deserializer<'de>,
            {
                struct SeqVisitor;

                impl<'de> Visitor<'de> for SeqVisitor {
                    type Value = Vec<Tournament>;

                    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                        f.write_str("a map of tournament name to tournament")
                    }

                    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
                    where
                        A: MapAccess<'de>,
                    {
                        let mut tournaments = Vec::new();
                        while let Some((name, raw)) =
                            map.next_entry::<String, RawTournament>()?
                        {
                            tournaments.push(raw.resolve(name));
                        }
                        Ok(tournaments)
                    }
                }

                deserializer.deserialize_map(SeqVisitor)
            }
        }

        deserializer.deserialize_map(RootVisitor)
    }
}
