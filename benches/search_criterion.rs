use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use grid_chess::game_state::chess_types::Color;
use grid_chess::game_state::game_state::GameState;
use grid_chess::search::board_scoring::MaterialScorer;
use grid_chess::search::negamax::{search, SearchConfig};

const MIDDLEGAME: &str = "r...k..r
                          p.ppqpb.
                          bn..pnp.
                          ...PN...
                          .p..P...
                          ..N..Q.p
                          PPPBBPPP
                          R...K..R";

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("negamax");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(5));
    group.sample_size(10);

    let positions = [
        ("startpos", GameState::new_game()),
        (
            "kiwipete",
            GameState::from_diagram(MIDDLEGAME, Color::White)
                .expect("benchmark diagram should parse"),
        ),
    ];

    for (name, position) in positions {
        for depth in 1..=3u8 {
            let mut game = position.clone();
            let moves = game.get_legal_moves();
            let config = SearchConfig {
                depth,
                seed: Some(0xC0FFEE),
            };

            // Correctness guard before benchmarking.
            let warmup = search(&mut game, &moves, &MaterialScorer, config);
            assert!(warmup.best_move.is_some(), "{name} depth {depth} found no move");

            group.bench_with_input(
                BenchmarkId::new(name, depth),
                &depth,
                |b, _| {
                    b.iter(|| {
                        let result =
                            search(black_box(&mut game), black_box(&moves), &MaterialScorer, config);
                        black_box(result.nodes)
                    });
                },
            );
        }
    }

    group.finish();
}

criterion_group!(search_benches, bench_search);
criterion_main!(search_benches);
