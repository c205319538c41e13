//! Tournament data models for Swiss-system play.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Tournament ID type
pub type TournamentId = i64;

/// Player ID type
pub type PlayerId = i64;

/// A tournament row. The most recently created one is the current tournament.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tournament {
    /// Tournament ID
    pub id: TournamentId,
    /// Tournament name
    pub name: String,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
}

/// A registered player. Immutable after registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Player ID (assigned by the store)
    pub id: PlayerId,
    /// Full name, need not be unique
    pub name: String,
    /// Tournament the player is registered in
    pub tournament_id: TournamentId,
}

/// One recorded result.
///
/// A bye has exactly one participant; a draw has both participants and no winner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    /// Tournament the match belongs to
    pub tournament_id: TournamentId,
    /// Winner, `None` for a draw
    pub winner: Option<PlayerId>,
    /// First participant slot
    pub player1: Option<PlayerId>,
    /// Second participant slot
    pub player2: Option<PlayerId>,
}

impl MatchRecord {
    /// Participants actually present in this match
    pub fn participants(&self) -> impl Iterator<Item = PlayerId> {
        self.player1.into_iter().chain(self.player2)
    }

    /// The lone participant when this match is a bye
    pub fn bye_recipient(&self) -> Option<PlayerId> {
        match (self.player1, self.player2) {
            (Some(id), None) | (None, Some(id)) => Some(id),
            _ => None,
        }
    }

    /// Both slots filled, no winner
    pub fn is_draw(&self) -> bool {
        self.player1.is_some() && self.player2.is_some() && self.winner.is_none()
    }

    /// The other participant, if `player_id` faced a real opponent here
    pub fn opponent_of(&self, player_id: PlayerId) -> Option<PlayerId> {
        match (self.player1, self.player2) {
            (Some(a), Some(b)) if a == player_id => Some(b),
            (Some(a), Some(b)) if b == player_id => Some(a),
            _ => None,
        }
    }
}

/// Derived standings row. Recomputed on every query, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandingRow {
    pub player_id: PlayerId,
    pub player_name: String,
    pub wins: u32,
    pub total_matches: u32,
    /// Opponent match wins: sum of the wins of every opponent faced
    pub omw: u32,
}

/// Which matches and players a standings query covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StandingsScope {
    /// The most recently created tournament
    Current,
    /// One explicit tournament
    Tournament(TournamentId),
    /// Every tournament in the store
    AllTournaments,
}

/// One entry of a round's pairings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Pairing {
    /// Two adjacent players meet
    Match {
        id1: PlayerId,
        name1: String,
        id2: PlayerId,
        name2: String,
    },
    /// The player sits out this round and is awarded the bye
    Bye { id: PlayerId, name: String },
}

impl Pairing {
    /// Whether this entry is the round's bye
    pub fn is_bye(&self) -> bool {
        matches!(self, Pairing::Bye { .. })
    }

    /// Player IDs seated by this entry
    pub fn player_ids(&self) -> Vec<PlayerId> {
        match self {
            Pairing::Match { id1, id2, .. } => vec![*id1, *id2],
            Pairing::Bye { id, .. } => vec![*id],
        }
    }
}
