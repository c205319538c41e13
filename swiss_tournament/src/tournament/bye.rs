//! Bye assignment for rounds with an odd number of players.

use std::collections::HashSet;

use super::errors::{TournamentError, TournamentResult};
use super::models::{PlayerId, StandingRow};

/// A position in the pairing sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Seat {
    Player(StandingRow),
    /// Placeholder opponent for the bye recipient
    Bye,
}

/// Turn ranked standings into a pairing sequence, adding a bye when needed
///
/// With an even player count the ranking is returned unchanged. With an odd
/// count the lowest-ranked player who has not had a bye yet is moved to the
/// end and followed by [`Seat::Bye`].
///
/// # Errors
///
/// [`TournamentError::NoEligibleByePlayer`] when the count is odd and every
/// player has already had a bye.
pub fn assign_bye(
    ranked: Vec<StandingRow>,
    byed: &HashSet<PlayerId>,
) -> TournamentResult<Vec<Seat>> {
    if ranked.len() % 2 == 0 {
        return Ok(ranked.into_iter().map(Seat::Player).collect());
    }

    let position = ranked
        .iter()
        .rposition(|row| !byed.contains(&row.player_id))
        .ok_or(TournamentError::NoEligibleByePlayer)?;

    let (recipient, rest): (Vec<_>, Vec<_>) = ranked
        .into_iter()
        .enumerate()
        .partition(|(i, _)| *i == position);

    Ok(rest
        .into_iter()
        .chain(recipient)
        .map(|(_, row)| Seat::Player(row))
        .chain(std::iter::once(Seat::Bye))
        .collect())
}
