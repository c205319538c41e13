//! Swiss-system tournament core.
//!
//! Data flows one way: players and matches from the store are tallied and
//! ranked ([`standings`]), a bye is inserted for odd rounds ([`bye`]), and
//! adjacent seats are paired ([`pairing`]). [`recorder`] turns a match report
//! into the row that feeds later standings.
//!
//! ## Example
//!
//! ```no_run
//! use swiss_tournament::db::{Database, DatabaseConfig};
//! use swiss_tournament::tournament::TournamentManager;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let db = Database::new(&DatabaseConfig::from_env()?).await?;
//!     db.migrate().await?;
//!     let manager = TournamentManager::new(Arc::new(db.tournament_repository()));
//!
//!     let tournament = manager.start_tournament("Club Championship").await?;
//!     let ann = manager.register_player(tournament.id, "Ann").await?;
//!     let bo = manager.register_player(tournament.id, "Bo").await?;
//!
//!     manager.record_match(tournament.id, Some(ann.id), Some(bo.id), false).await?;
//!
//!     for pairing in manager.compute_pairings(tournament.id).await? {
//!         println!("{:?}", pairing);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod bye;
pub mod errors;
pub mod manager;
pub mod models;
pub mod pairing;
pub mod recorder;
pub mod standings;

pub use bye::Seat;
pub use errors::{TournamentError, TournamentResult};
pub use manager::TournamentManager;
pub use models::{
    MatchRecord, Pairing, Player, PlayerId, StandingRow, StandingsScope, Tournament,
    TournamentId,
};
