use oddsmith::cards::board::Board;
use oddsmith::cards::deck::Deck;
use oddsmith::cards::hand::Hand;
use oddsmith::cards::hole::Hole;
use oddsmith::equity::engine::Engine;
use oddsmith::equity::request::Request;
use oddsmith::equity::settings::Settings;
use oddsmith::evaluation::strength::Strength;

criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        evaluating_river_hand,
        enumerating_flop_equity,
        sampling_preflop_equity,
}

fn seven_cards() -> Hand {
    let ref mut rng = rand::rng();
    Deck::new().deal(7, rng).expect("full deck")
}

fn heads_up(board: &str) -> Request {
    Request::new(
        vec![
            Hole::try_from("AsAh").expect("hole"),
            Hole::try_from("KsKh").expect("hole"),
        ],
        Board::try_from(board).expect("board"),
    )
    .expect("request")
}

fn evaluating_river_hand(c: &mut criterion::Criterion) {
    c.bench_function("evaluate a 7-card Hand", |b| {
        let hand = seven_cards();
        b.iter(|| Strength::from(hand))
    });
}

fn enumerating_flop_equity(c: &mut criterion::Criterion) {
    let engine = Engine::default();
    let request = heads_up("2c7d8s");
    c.bench_function("enumerate flop equity heads-up", |b| {
        b.iter(|| engine.estimate(&request).expect("estimate"))
    });
}

fn sampling_preflop_equity(c: &mut criterion::Criterion) {
    let engine = Engine::from(Settings {
        floor: Some(10_000),
        seed: Some(1),
        ..Settings::default()
    });
    let request = heads_up("");
    c.bench_function("sample preflop equity heads-up", |b| {
        b.iter(|| engine.estimate(&request).expect("estimate"))
    });
}
