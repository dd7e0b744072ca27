//! Error taxonomy for dataset ingestion and entity lookup.

use thiserror::Error;

/// Errors raised by snapshot ingestion and the profile/report builders.
///
/// Missing references inside an otherwise well-formed snapshot (a
/// `winners` entry naming no team, a score entry for a game absent from
/// the tournament's game map) are never errors; aggregation skips them.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StatsError {
    #[error("invalid stats data format: {0}")]
    DataFormat(String),
    #[error("tournament not found: {0}")]
    TournamentNotFound(String),
    #[error("team not found: {0}")]
    TeamNotFound(String),
    #[error("player not found: {0}")]
    PlayerNotFound(String),
}
