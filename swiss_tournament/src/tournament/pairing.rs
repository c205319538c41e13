//! Swiss pairing of adjacent seats.

use super::bye::Seat;
use super::models::Pairing;

/// Pair consecutive seats: (0, 1), (2, 3), ...
///
/// A player seated next to [`Seat::Bye`] yields [`Pairing::Bye`]. Output is
/// fully determined by the input order.
///
/// # Panics
///
/// Panics if `seats` has odd length or a bye placeholder opens a pair. Both
/// mean the sequence did not come from [`assign_bye`](super::bye::assign_bye).
pub fn pair(seats: &[Seat]) -> Vec<Pairing> {
    assert!(
        seats.len() % 2 == 0,
        "pairing sequence must have even length, got {}",
        seats.len()
    );

    seats
        .chunks_exact(2)
        .map(|chunk| match chunk {
            [Seat::Player(a), Seat::Player(b)] => Pairing::Match {
                id1: a.player_id,
                name1: a.player_name.clone(),
                id2: b.player_id,
                name2: b.player_name.clone(),
            },
            [Seat::Player(a), Seat::Bye] => Pairing::Bye {
                id: a.player_id,
                name: a.player_name.clone(),
            },
            _ => panic!("bye placeholder must follow its recipient"),
        })
        .collect()
}
