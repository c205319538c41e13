//! Winner determination for reported matches.

use super::errors::{TournamentError, TournamentResult};
use super::models::{MatchRecord, PlayerId, TournamentId};

/// Decide the winner of a reported match
///
/// - only `player2` present: `player2` wins (a bye for `player2`)
/// - `player2` absent, or not a draw: `player1` wins
/// - both present and `is_draw`: no winner
///
/// # Errors
///
/// [`TournamentError::InvalidMatchReport`] when both slots are empty or hold
/// the same player.
pub fn decide(
    player1: Option<PlayerId>,
    player2: Option<PlayerId>,
    is_draw: bool,
) -> TournamentResult<Option<PlayerId>> {
    match (player1, player2) {
        (None, None) => Err(TournamentError::InvalidMatchReport),
        (Some(p1), Some(p2)) if p1 == p2 => Err(TournamentError::InvalidMatchReport),
        (None, Some(p2)) => Ok(Some(p2)),
        (Some(p1), None) => Ok(Some(p1)),
        (Some(p1), Some(_)) if !is_draw => Ok(Some(p1)),
        (Some(_), Some(_)) => Ok(None),
    }
}

/// Build the match row to persist for a report
pub fn report(
    tournament_id: TournamentId,
    player1: Option<PlayerId>,
    player2: Option<PlayerId>,
    is_draw: bool,
) -> TournamentResult<MatchRecord> {
    let winner = decide(player1, player2, is_draw)?;
    Ok(MatchRecord {
        tournament_id,
        winner,
        player1,
        player2,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_null_rejected() {
        assert!(matches!(
            decide(None, None, false),
            Err(TournamentError::InvalidMatchReport)
        ));
        assert!(matches!(
            decide(None, None, true),
            Err(TournamentError::InvalidMatchReport)
        ));
    }

    #[test]
    fn test_same_player_in_both_slots_rejected() {
        assert!(matches!(
            decide(Some(5), Some(5), false),
            Err(TournamentError::InvalidMatchReport)
        ));
        assert!(matches!(
            report(1, Some(5), Some(5), true),
            Err(TournamentError::InvalidMatchReport)
        ));
    }

    #[test]
    fn test_player2_bye() {
        assert_eq!(decide(None, Some(7), false).unwrap(), Some(7));
        assert_eq!(decide(None, Some(7), true).unwrap(), Some(7));
    }

    #[test]
    fn test_player1_bye_ignores_draw_flag() {
        assert_eq!(decide(Some(5), None, false).unwrap(), Some(5));
        assert_eq!(decide(Some(5), None, true).unwrap(), Some(5));
    }

    #[test]
    fn test_player1_default_winner() {
        assert_eq!(decide(Some(5), Some(7), false).unwrap(), Some(5));
    }

    #[test]
    fn test_draw_has_no_winner() {
        assert_eq!(decide(Some(5), Some(7), true).unwrap(), None);
    }

    #[test]
    fn test_report_builds_record() {
        let record = report(3, Some(5), Some(7), true).unwrap();
        assert_eq!(record.tournament_id, 3);
        assert!(record.is_draw());
        assert_eq!(record.player1, Some(5));
        assert_eq!(record.player2, Some(7));
    }
}
