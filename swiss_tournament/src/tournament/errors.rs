//! Tournament error types.

use std::time::Duration;

use thiserror::Error;

use super::models::{PlayerId, TournamentId};
use crate::db::timeouts::TimeoutError;

/// Tournament errors
#[derive(Debug, Error)]
pub enum TournamentError {
    /// No tournament row exists
    #[error("No tournament was found in the database")]
    NoActiveTournament,

    /// Every player has already received a bye this tournament
    #[error("No possible bye player found")]
    NoEligibleByePlayer,

    /// Both participant slots of a report were empty or held the same player
    #[error("Invalid match report: one or two distinct players are required")]
    InvalidMatchReport,

    /// Player name was blank
    #[error("Invalid player name: {0:?}")]
    InvalidPlayerName(String),

    /// A reported participant is not registered in the tournament
    #[error("Player {player_id} is not registered in tournament {tournament_id}")]
    PlayerNotInTournament {
        player_id: PlayerId,
        tournament_id: TournamentId,
    },

    /// A bye was reported for a player who already had one
    #[error("Player {player_id} already received a bye in tournament {tournament_id}")]
    ByeAlreadyAwarded {
        player_id: PlayerId,
        tournament_id: TournamentId,
    },

    /// Query exceeded its timeout
    #[error("Database operation timed out after {0:?}")]
    Timeout(Duration),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Schema migration error
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

impl From<TimeoutError> for TournamentError {
    fn from(err: TimeoutError) -> Self {
        match err {
            TimeoutError::Timeout(duration) => TournamentError::Timeout(duration),
            TimeoutError::Database(e) => TournamentError::Database(e),
        }
    }
}

impl TournamentError {
    /// Get an operator-safe message that doesn't leak storage internals
    pub fn client_message(&self) -> String {
        match self {
            TournamentError::Database(_) | TournamentError::Migration(_) => {
                "Internal storage error".to_string()
            }
            TournamentError::Timeout(_) => "Storage did not respond in time".to_string(),
            _ => self.to_string(),
        }
    }
}

/// Result type for tournament operations
pub type TournamentResult<T> = Result<T, TournamentError>;
