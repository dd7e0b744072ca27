pub mod hall_of_fame;
pub mod leaderboard;
pub mod not_found;
pub mod player;
pub mod team;
pub mod tournament;
pub mod tournaments;

pub use not_found::NotFoundPage;

#[cfg(target_arch = "wasm32")]
pub use {
    hall_of_fame::HallOfFamePage, leaderboard::LeaderboardPage, player::PlayerPage, team::TeamPage,
    tournament::TournamentPage, tournaments::TournamentsPage,
};
