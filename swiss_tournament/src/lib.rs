//! # Swiss Tournament
//!
//! Swiss-system tournament management backed by PostgreSQL: player
//! registration, match reporting, standings and next-round pairings with bye
//! handling for odd player counts.
//!
//! ## Architecture
//!
//! The pairing core is pure and synchronous:
//!
//! - **Standings**: tally wins, matches played and opponent match wins (OMW),
//!   then rank by wins, OMW and player ID
//! - **Bye**: for an odd field, seat the lowest-ranked player who has not had
//!   a bye yet at the end, opposite a bye placeholder
//! - **Pairing**: pair adjacent seats
//! - **Recorder**: decide the winner of a reported match, draws and byes included
//!
//! Storage sits behind the [`db::TournamentRepository`] trait, with a sqlx
//! PostgreSQL implementation.
//!
//! ## Core Modules
//!
//! - [`tournament`]: models, ranking, bye assignment, pairing and the manager facade
//! - [`db`]: connection pool, configuration, timeouts and the repository
//!
//! ## Example
//!
//! ```
//! use std::collections::HashSet;
//! use swiss_tournament::tournament::{bye, pairing, standings, Player};
//!
//! let players: Vec<Player> = ["Ann", "Bo", "Cy"]
//!     .iter()
//!     .zip(1..)
//!     .map(|(name, id)| Player { id, name: name.to_string(), tournament_id: 1 })
//!     .collect();
//!
//! let ranked = standings::rank(standings::tally(&players, &[]));
//! let seats = bye::assign_bye(ranked, &HashSet::new()).unwrap();
//! let round = pairing::pair(&seats);
//!
//! assert_eq!(round.len(), 2);
//! assert!(round[1].is_bye());
//! ```

/// Database pool, configuration and storage repository.
pub mod db;

/// Swiss-system standings, byes, pairings and match recording.
pub mod tournament;
pub use tournament::{
    MatchRecord, Pairing, Player, PlayerId, StandingRow, StandingsScope, Tournament,
    TournamentError, TournamentId, TournamentManager, TournamentResult,
};
