//! Podium Statistics Core
//!
//! Platform-agnostic aggregation logic for the Podium tournament
//! dashboard. This crate turns a parsed tournament snapshot into
//! render-ready records, profiles, reports, leaderboard rows, and
//! search results, without UI or platform-specific dependencies.

pub mod dataset;
pub mod error;
pub mod leaderboard;
pub mod player;
pub mod records;
pub mod report;
pub mod score;
pub mod search;
pub mod team;

// Re-export commonly used types
pub use dataset::{Dataset, GameConfig, Identity, Player, Team, Tournament};
pub use error::StatsError;
pub use leaderboard::{
    CanonFilter, Category, LeaderboardFilter, LeaderboardRow, RankedRow, Selection, SortBy,
};
pub use player::{GamePerformance, PlayerGameRollup, PlayerOverall, PlayerProfile, PlayerTournament};
pub use records::{
    GameRecord, Leader, PlayerAggregate, PlayerRecords, RecordHolder, Records, TeamAggregate,
    TeamLeader, TeamRecords, TournamentSummary,
};
pub use report::{GameSection, StandingsRow, TournamentReport, WinnerSection};
pub use search::{MIN_QUERY_LEN, SearchOutcome, SearchResult};
pub use team::{TeamOverall, TeamProfile, TeamTournament};
