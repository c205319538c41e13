//! Tournament manager: the caller-facing facade over the storage collaborator.
//!
//! Every operation takes an explicit tournament ID. Callers that want the
//! "current tournament" convention resolve it once with
//! [`TournamentManager::current_tournament_id`].

use std::collections::HashSet;
use std::sync::Arc;

use super::errors::{TournamentError, TournamentResult};
use super::models::{
    Pairing, Player, PlayerId, StandingRow, StandingsScope, Tournament, TournamentId,
};
use super::{bye, pairing, recorder, standings};
use crate::db::TournamentRepository;

/// Tournament manager
#[derive(Clone)]
pub struct TournamentManager {
    repository: Arc<dyn TournamentRepository>,
}

impl TournamentManager {
    /// Create a new tournament manager
    pub fn new(repository: Arc<dyn TournamentRepository>) -> Self {
        Self { repository }
    }

    /// Start a new tournament. It becomes the current one.
    pub async fn start_tournament(&self, name: &str) -> TournamentResult<Tournament> {
        let tournament = self.repository.create_tournament(name).await?;
        log::info!("Started tournament {} '{}'", tournament.id, tournament.name);
        Ok(tournament)
    }

    /// ID of the most recently created tournament
    pub async fn current_tournament_id(&self) -> TournamentResult<TournamentId> {
        self.repository
            .latest_tournament_id()
            .await?
            .ok_or(TournamentError::NoActiveTournament)
    }

    /// Register a player. Names need not be unique but must not be blank.
    pub async fn register_player(
        &self,
        tournament_id: TournamentId,
        name: &str,
    ) -> TournamentResult<Player> {
        let name = name.trim();
        if name.is_empty() {
            return Err(TournamentError::InvalidPlayerName(name.to_string()));
        }

        let player = self.repository.create_player(tournament_id, name).await?;
        log::info!(
            "Registered player {} '{}' in tournament {}",
            player.id,
            player.name,
            tournament_id
        );
        Ok(player)
    }

    /// Number of players registered in a tournament
    pub async fn count_players(&self, tournament_id: TournamentId) -> TournamentResult<usize> {
        self.repository.count_players(tournament_id).await
    }

    /// Ranked standings for the given scope
    ///
    /// # Errors
    ///
    /// [`TournamentError::NoActiveTournament`] for [`StandingsScope::Current`]
    /// when no tournament exists.
    pub async fn compute_standings(
        &self,
        scope: StandingsScope,
    ) -> TournamentResult<Vec<StandingRow>> {
        let tournament = match scope {
            StandingsScope::Current => Some(self.current_tournament_id().await?),
            StandingsScope::Tournament(id) => Some(id),
            StandingsScope::AllTournaments => None,
        };

        let rows = standings::rank(self.repository.fetch_standings(tournament).await?);
        log::debug!("Computed {} standings rows for {:?}", rows.len(), scope);
        Ok(rows)
    }

    /// Pairings for the next round of a tournament
    ///
    /// Adjacent players in the standings meet. With an odd player count the
    /// lowest-ranked player without a previous bye gets [`Pairing::Bye`], which
    /// is always the last entry.
    ///
    /// # Errors
    ///
    /// [`TournamentError::NoEligibleByePlayer`] when a bye is needed and every
    /// player has already had one.
    pub async fn compute_pairings(
        &self,
        tournament_id: TournamentId,
    ) -> TournamentResult<Vec<Pairing>> {
        let ranked = self
            .compute_standings(StandingsScope::Tournament(tournament_id))
            .await?;

        let byed = if ranked.len() % 2 == 1 {
            self.repository.fetch_bye_history(tournament_id).await?
        } else {
            HashSet::new()
        };

        let seats = bye::assign_bye(ranked, &byed).inspect_err(|_| {
            log::warn!(
                "Tournament {}: every player has already had a bye",
                tournament_id
            );
        })?;
        let pairings = pairing::pair(&seats);

        if let Some(Pairing::Bye { id, .. }) = pairings.last() {
            log::info!("Tournament {}: bye assigned to player {}", tournament_id, id);
        }
        log::debug!(
            "Tournament {}: {} pairings generated",
            tournament_id,
            pairings.len()
        );
        Ok(pairings)
    }

    /// Record the outcome of a match
    ///
    /// `player1` is the default winner. Returns `Ok(false)` without persisting
    /// anything when both players are `None` or both slots name the same player.
    ///
    /// # Errors
    ///
    /// [`TournamentError::PlayerNotInTournament`] when a participant is not
    /// registered in `tournament_id`, [`TournamentError::ByeAlreadyAwarded`]
    /// when a bye is reported for a player who already had one. Storage errors
    /// propagate unchanged.
    pub async fn record_match(
        &self,
        tournament_id: TournamentId,
        player1: Option<PlayerId>,
        player2: Option<PlayerId>,
        is_draw: bool,
    ) -> TournamentResult<bool> {
        let record = match recorder::report(tournament_id, player1, player2, is_draw) {
            Ok(record) => record,
            Err(TournamentError::InvalidMatchReport) => {
                log::warn!(
                    "Tournament {}: match report {:?} vs {:?} not recorded",
                    tournament_id,
                    player1,
                    player2
                );
                return Ok(false);
            }
            Err(e) => return Err(e),
        };

        let registered: HashSet<PlayerId> = self
            .repository
            .players(Some(tournament_id))
            .await?
            .into_iter()
            .map(|p| p.id)
            .collect();
        if let Some(player_id) = record.participants().find(|id| !registered.contains(id)) {
            return Err(TournamentError::PlayerNotInTournament {
                player_id,
                tournament_id,
            });
        }

        if let Some(player_id) = record.bye_recipient() {
            let byed = self.repository.fetch_bye_history(tournament_id).await?;
            if byed.contains(&player_id) {
                log::warn!(
                    "Tournament {}: player {} already had a bye",
                    tournament_id,
                    player_id
                );
                return Err(TournamentError::ByeAlreadyAwarded {
                    player_id,
                    tournament_id,
                });
            }
        }

        self.repository.persist_match(&record).await?;
        log::info!(
            "Tournament {}: recorded match {:?} vs {:?}, winner {:?}",
            tournament_id,
            record.player1,
            record.player2,
            record.winner
        );
        Ok(true)
    }

    /// Remove all match records. Must not run alongside pairing computations.
    pub async fn delete_matches(&self) -> TournamentResult<u64> {
        let removed = self.repository.delete_matches().await?;
        log::info!("Deleted {} match records", removed);
        Ok(removed)
    }

    /// Remove all player records. Matches referencing them must be deleted first.
    pub async fn delete_players(&self) -> TournamentResult<u64> {
        let removed = self.repository.delete_players().await?;
        log::info!("Deleted {} player records", removed);
        Ok(removed)
    }
}
