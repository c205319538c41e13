use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::collections::HashSet;
use std::hint::black_box;
use swiss_tournament::tournament::{MatchRecord, Player, bye, pairing, standings};

/// Helper to build a field of N players with a few rounds already played
fn setup_field(n_players: usize, rounds: usize) -> (Vec<Player>, Vec<MatchRecord>) {
    let players: Vec<Player> = (1..=n_players as i64)
        .map(|id| Player {
            id,
            name: format!("player{}", id),
            tournament_id: 1,
        })
        .collect();

    let mut matches = Vec::new();
    for round in 0..rounds {
        for pair in players.chunks_exact(2) {
            let (a, b) = if round % 2 == 0 {
                (pair[0].id, pair[1].id)
            } else {
                (pair[1].id, pair[0].id)
            };
            matches.push(MatchRecord {
                tournament_id: 1,
                winner: Some(a),
                player1: Some(a),
                player2: Some(b),
            });
        }
    }

    (players, matches)
}

/// Benchmark tallying and ranking standings
fn bench_standings(c: &mut Criterion) {
    let mut group = c.benchmark_group("standings");
    for n in [8, 64, 512] {
        let (players, matches) = setup_field(n, 5);
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| standings::rank(standings::tally(black_box(&players), black_box(&matches))));
        });
    }
    group.finish();
}

/// Benchmark bye assignment plus pairing for an odd field
fn bench_round(c: &mut Criterion) {
    let mut group = c.benchmark_group("round");
    for n in [9, 65, 513] {
        let (players, matches) = setup_field(n, 5);
        let ranked = standings::rank(standings::tally(&players, &matches));
        let byed: HashSet<i64> = (1..=(n as i64 / 2)).collect();
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| {
                let seats = bye::assign_bye(black_box(ranked.clone()), &byed).unwrap();
                pairing::pair(&seats)
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_standings, bench_round);
criterion_main!(benches);
