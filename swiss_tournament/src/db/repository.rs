//! Storage collaborator for the tournament core.
//!
//! The trait keeps the standings and pairing logic independent of where
//! tournaments, players and matches live, and lets tests swap in an
//! in-memory store.

use std::collections::HashSet;
use std::time::Duration;

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use super::timeouts::{DEFAULT_QUERY_TIMEOUT, with_timeout};
use crate::tournament::standings;
use crate::tournament::{
    MatchRecord, Player, PlayerId, StandingRow, Tournament, TournamentId, TournamentResult,
};

/// Trait for tournament storage operations
///
/// A `scope` of `None` covers every tournament.
#[async_trait]
pub trait TournamentRepository: Send + Sync {
    /// Create a new tournament
    async fn create_tournament(&self, name: &str) -> TournamentResult<Tournament>;

    /// ID of the most recently created tournament
    async fn latest_tournament_id(&self) -> TournamentResult<Option<TournamentId>>;

    /// Register a player in a tournament
    async fn create_player(
        &self,
        tournament_id: TournamentId,
        name: &str,
    ) -> TournamentResult<Player>;

    /// Number of players registered in a tournament
    async fn count_players(&self, tournament_id: TournamentId) -> TournamentResult<usize>;

    /// Registered players
    async fn players(&self, scope: Option<TournamentId>) -> TournamentResult<Vec<Player>>;

    /// Recorded matches
    async fn matches(&self, scope: Option<TournamentId>) -> TournamentResult<Vec<MatchRecord>>;

    /// Unranked standings rows
    async fn fetch_standings(
        &self,
        scope: Option<TournamentId>,
    ) -> TournamentResult<Vec<StandingRow>> {
        let players = self.players(scope).await?;
        let matches = self.matches(scope).await?;
        Ok(standings::tally(&players, &matches))
    }

    /// IDs of players who already received a bye in a tournament
    async fn fetch_bye_history(
        &self,
        tournament_id: TournamentId,
    ) -> TournamentResult<HashSet<PlayerId>>;

    /// Persist one match result
    async fn persist_match(&self, record: &MatchRecord) -> TournamentResult<()>;

    /// Delete every match, returning the number removed
    async fn delete_matches(&self) -> TournamentResult<u64>;

    /// Delete every player, returning the number removed
    async fn delete_players(&self) -> TournamentResult<u64>;
}

/// Default PostgreSQL implementation of `TournamentRepository`
pub struct PgTournamentRepository {
    pool: PgPool,
    query_timeout: Duration,
}

impl PgTournamentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self::with_query_timeout(pool, DEFAULT_QUERY_TIMEOUT)
    }

    pub fn with_query_timeout(pool: PgPool, query_timeout: Duration) -> Self {
        Self {
            pool,
            query_timeout,
        }
    }
}

#[async_trait]
impl TournamentRepository for PgTournamentRepository {
    async fn create_tournament(&self, name: &str) -> TournamentResult<Tournament> {
        let row = with_timeout(
            self.query_timeout,
            sqlx::query("INSERT INTO tournaments (name) VALUES ($1) RETURNING id, name, created_at")
                .bind(name)
                .fetch_one(&self.pool),
        )
        .await?;

        Ok(Tournament {
            id: row.get("id"),
            name: row.get("name"),
            created_at: row.get::<chrono::NaiveDateTime, _>("created_at").and_utc(),
        })
    }

    async fn latest_tournament_id(&self) -> TournamentResult<Option<TournamentId>> {
        let row = with_timeout(
            self.query_timeout,
            sqlx::query("SELECT id FROM tournaments ORDER BY id DESC LIMIT 1")
                .fetch_optional(&self.pool),
        )
        .await?;

        Ok(row.map(|r| r.get("id")))
    }

    async fn create_player(
        &self,
        tournament_id: TournamentId,
        name: &str,
    ) -> TournamentResult<Player> {
        let row = with_timeout(
            self.query_timeout,
            sqlx::query("INSERT INTO players (name, tournament) VALUES ($1, $2) RETURNING id")
                .bind(name)
                .bind(tournament_id)
                .fetch_one(&self.pool),
        )
        .await?;

        Ok(Player {
            id: row.get("id"),
            name: name.to_string(),
            tournament_id,
        })
    }

    async fn count_players(&self, tournament_id: TournamentId) -> TournamentResult<usize> {
        let row = with_timeout(
            self.query_timeout,
            sqlx::query("SELECT COUNT(id) AS total_players FROM players WHERE tournament = $1")
                .bind(tournament_id)
                .fetch_one(&self.pool),
        )
        .await?;

        let count: i64 = row.get("total_players");
        Ok(count as usize)
    }

    async fn players(&self, scope: Option<TournamentId>) -> TournamentResult<Vec<Player>> {
        let rows = with_timeout(
            self.query_timeout,
            sqlx::query(
                "SELECT id, name, tournament FROM players
                 WHERE $1::BIGINT IS NULL OR tournament = $1
                 ORDER BY id",
            )
            .bind(scope)
            .fetch_all(&self.pool),
        )
        .await?;

        Ok(rows
            .into_iter()
            .map(|r| Player {
                id: r.get("id"),
                name: r.get("name"),
                tournament_id: r.get("tournament"),
            })
            .collect())
    }

    async fn matches(&self, scope: Option<TournamentId>) -> TournamentResult<Vec<MatchRecord>> {
        let rows = with_timeout(
            self.query_timeout,
            sqlx::query(
                "SELECT tournament, winner, player1, player2 FROM matches
                 WHERE $1::BIGINT IS NULL OR tournament = $1
                 ORDER BY id",
            )
            .bind(scope)
            .fetch_all(&self.pool),
        )
        .await?;

        Ok(rows
            .into_iter()
            .map(|r| MatchRecord {
                tournament_id: r.get("tournament"),
                winner: r.get("winner"),
                player1: r.get("player1"),
                player2: r.get("player2"),
            })
            .collect())
    }

    async fn fetch_bye_history(
        &self,
        tournament_id: TournamentId,
    ) -> TournamentResult<HashSet<PlayerId>> {
        let rows = with_timeout(
            self.query_timeout,
            sqlx::query(
                "SELECT COALESCE(player1, player2) AS player_id FROM matches
                 WHERE tournament = $1 AND (player1 IS NULL OR player2 IS NULL)",
            )
            .bind(tournament_id)
            .fetch_all(&self.pool),
        )
        .await?;

        Ok(rows.into_iter().map(|r| r.get("player_id")).collect())
    }

    async fn persist_match(&self, record: &MatchRecord) -> TournamentResult<()> {
        with_timeout(
            self.query_timeout,
            sqlx::query(
                "INSERT INTO matches (tournament, winner, player1, player2) VALUES ($1, $2, $3, $4)",
            )
            .bind(record.tournament_id)
            .bind(record.winner)
            .bind(record.player1)
            .bind(record.player2)
            .execute(&self.pool),
        )
        .await?;
        Ok(())
    }

    async fn delete_matches(&self) -> TournamentResult<u64> {
        let result = with_timeout(
            self.query_timeout,
            sqlx::query("DELETE FROM matches").execute(&self.pool),
        )
        .await?;
        Ok(result.rows_affected())
    }

    async fn delete_players(&self) -> TournamentResult<u64> {
        let result = with_timeout(
            self.query_timeout,
            sqlx::query("DELETE FROM players").execute(&self.pool),
        )
        .await?;
        Ok(result.rows_affected())
    }
}
