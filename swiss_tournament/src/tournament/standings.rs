//! Standings: per-player tallies and their deterministic ranking.
//!
//! Ranking is wins descending, then opponent match wins (OMW) descending,
//! then player ID ascending. The ID tiebreak makes the order total, so the
//! pairings built from it are reproducible.

use std::cmp::Ordering;
use std::collections::HashMap;

use super::models::{MatchRecord, Player, PlayerId, StandingRow};

/// Ordering used for standings: wins desc, OMW desc, player ID asc
pub fn standing_order(a: &StandingRow, b: &StandingRow) -> Ordering {
    b.wins
        .cmp(&a.wins)
        .then_with(|| b.omw.cmp(&a.omw))
        .then_with(|| a.player_id.cmp(&b.player_id))
}

/// Sort standings rows into ranking order
pub fn rank(mut rows: Vec<StandingRow>) -> Vec<StandingRow> {
    rows.sort_by(standing_order);
    rows
}

#[derive(Default)]
struct Tally {
    wins: u32,
    total_matches: u32,
    opponents: Vec<PlayerId>,
}

/// Build unranked standings rows from raw players and matches
///
/// Every player gets a row, including those with no matches. A bye counts as
/// a played and won match but adds no opponent. A draw counts as played for
/// both participants and won by neither. Matches referring to players outside
/// `players` are ignored.
pub fn tally(players: &[Player], matches: &[MatchRecord]) -> Vec<StandingRow> {
    let mut tallies: HashMap<PlayerId, Tally> = players
        .iter()
        .map(|p| (p.id, Tally::default()))
        .collect();

    for record in matches {
        for participant in record.participants() {
            if let Some(t) = tallies.get_mut(&participant) {
                t.total_matches += 1;
                if record.winner == Some(participant) {
                    t.wins += 1;
                }
                if let Some(opponent) = record.opponent_of(participant) {
                    t.opponents.push(opponent);
                }
            }
        }
    }

    players
        .iter()
        .map(|p| {
            let t = &tallies[&p.id];
            let omw = t
                .opponents
                .iter()
                .filter_map(|o| tallies.get(o))
                .map(|o| o.wins)
                .sum();
            StandingRow {
                player_id: p.id,
                player_name: p.name.clone(),
                wins: t.wins,
                total_matches: t.total_matches,
                omw,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player(id: PlayerId, name: &str) -> Player {
        Player {
            id,
            name: name.to_string(),
            tournament_id: 1,
        }
    }

    fn won(winner: PlayerId, loser: PlayerId) -> MatchRecord {
        MatchRecord {
            tournament_id: 1,
            winner: Some(winner),
            player1: Some(winner),
            player2: Some(loser),
        }
    }

    fn row(id: PlayerId, wins: u32, omw: u32) -> StandingRow {
        StandingRow {
            player_id: id,
            player_name: format!("P{id}"),
            wins,
            total_matches: wins,
            omw,
        }
    }

    #[test]
    fn test_players_without_matches_get_zero_rows() {
        let rows = rank(tally(&[player(2, "Bo"), player(1, "Ann")], &[]));
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].player_id, 1);
        assert_eq!(rows[1].player_id, 2);
        assert!(rows.iter().all(|r| r.wins == 0 && r.total_matches == 0 && r.omw == 0));
    }

    #[test]
    fn test_wins_and_matches_counted() {
        let players = [player(1, "Ann"), player(2, "Bo"), player(3, "Cy"), player(4, "Di")];
        let matches = [won(1, 2), won(3, 4), won(1, 3), won(2, 4)];
        let rows = rank(tally(&players, &matches));

        let by_id = |id| rows.iter().find(|r| r.player_id == id).unwrap();
        assert_eq!(by_id(1).wins, 2);
        assert_eq!(by_id(1).total_matches, 2);
        assert_eq!(by_id(4).wins, 0);
        assert_eq!(by_id(4).total_matches, 2);
        assert_eq!(rows[0].player_id, 1);
        assert_eq!(rows[3].player_id, 4);
    }

    #[test]
    fn test_draw_counts_as_played_for_both() {
        let players = [player(1, "Ann"), player(2, "Bo")];
        let draw = MatchRecord {
            tournament_id: 1,
            winner: None,
            player1: Some(1),
            player2: Some(2),
        };
        let rows = tally(&players, &[draw]);
        for r in &rows {
            assert_eq!(r.wins, 0);
            assert_eq!(r.total_matches, 1);
        }
    }

    #[test]
    fn test_bye_is_a_win_without_opponent() {
        let players = [player(1, "Ann"), player(2, "Bo")];
        let bye = MatchRecord {
            tournament_id: 1,
            winner: Some(1),
            player1: Some(1),
            player2: None,
        };
        let rows = tally(&players, &[bye, won(2, 1)]);
        let ann = rows.iter().find(|r| r.player_id == 1).unwrap();
        let bo = rows.iter().find(|r| r.player_id == 2).unwrap();
        assert_eq!(ann.wins, 1);
        assert_eq!(ann.total_matches, 2);
        // Bo only faced Ann, whose win came from the bye
        assert_eq!(bo.omw, 1);
        assert_eq!(ann.omw, 1);
    }

    #[test]
    fn test_omw_breaks_tie_between_equal_wins() {
        // A and B both have 2 wins. A beat C (1 win) and D; B beat D twice.
        let players = [player(1, "A"), player(2, "B"), player(3, "C"), player(4, "D")];
        let matches = [won(1, 3), won(1, 4), won(2, 4), won(2, 4), won(3, 4)];
        let rows = rank(tally(&players, &matches));
        let ids: Vec<_> = rows.iter().map(|r| r.player_id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
        assert_eq!(rows[0].omw, 1);
        assert_eq!(rows[1].omw, 0);
    }

    #[test]
    fn test_id_is_final_tiebreak() {
        let rows = rank(vec![row(9, 1, 3), row(4, 1, 3), row(7, 1, 3)]);
        let ids: Vec<_> = rows.iter().map(|r| r.player_id).collect();
        assert_eq!(ids, vec![4, 7, 9]);
    }

    #[test]
    fn test_standing_order_never_equal_for_distinct_ids() {
        let a = row(1, 2, 2);
        let b = row(2, 2, 2);
        assert_eq!(standing_order(&a, &b), Ordering::Less);
        assert_eq!(standing_order(&b, &a), Ordering::Greater);
    }

    #[test]
    fn test_matches_for_unknown_players_ignored() {
        let rows = tally(&[player(1, "Ann")], &[won(1, 99), won(98, 99)]);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].wins, 1);
        assert_eq!(rows[0].omw, 0);
    }
}
